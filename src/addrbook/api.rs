//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! shell command, whatever UI drives it.
//!
//! The facade owns the [`AddressBook`] and the active [`AppConfig`], fills in
//! defaults (such as the birthday horizon) and dispatches to `commands::*`.
//! It does no I/O and renders nothing; callers get a `Result<CmdResult>`.
//!
//! The current date is always passed in rather than read from the clock, so
//! birthday queries behave the same under test as in the shell.

use crate::book::AddressBook;
use crate::commands;
use crate::config::AppConfig;
use crate::error::Result;
use chrono::NaiveDate;
use std::path::PathBuf;

pub struct AddressBookApi {
    book: AddressBook,
    config: AppConfig,
    config_dir: Option<PathBuf>,
}

impl AddressBookApi {
    pub fn new(config: AppConfig, config_dir: Option<PathBuf>) -> Self {
        Self {
            book: AddressBook::new(),
            config,
            config_dir,
        }
    }

    pub fn hello(&self) -> commands::CmdResult {
        commands::hello::run()
    }

    pub fn add_contact(&mut self, name: &str, phone: Option<&str>) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, name, phone)
    }

    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> Result<commands::CmdResult> {
        commands::change::run(&mut self.book, name, old, new)
    }

    pub fn show_phones(&self, name: &str) -> Result<commands::CmdResult> {
        commands::phone::show(&self.book, name)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::phone::remove(&mut self.book, name, phone)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.book, name)
    }

    pub fn list_contacts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> Result<commands::CmdResult> {
        commands::birthday::add(&mut self.book, name, birthday)
    }

    pub fn show_birthday(&self, name: &str) -> Result<commands::CmdResult> {
        commands::birthday::show(&self.book, name)
    }

    /// Upcoming birthdays within `days`, or the configured horizon when `None`.
    pub fn upcoming_birthdays(
        &self,
        days: Option<u32>,
        today: NaiveDate,
    ) -> Result<commands::CmdResult> {
        let horizon = days.unwrap_or(self.config.upcoming_days);
        commands::upcoming::run(&self.book, horizon, today, self.config.leap_day)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&mut self.config, self.config_dir.as_deref(), action)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }
}

pub use commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
