//! # Command Layer
//!
//! One module per shell command. Each exposes a `run` function that takes the
//! address book (and whatever arguments the command needs) and returns a
//! [`CmdResult`]: user-facing messages plus any records or birthdays to list.
//!
//! Commands never print. Failures come back as [`crate::error::AddrBookError`]
//! and are turned into text by the shell.

use crate::book::UpcomingBirthday;
use crate::config::AppConfig;
use crate::model::Record;

pub mod add;
pub mod birthday;
pub mod change;
pub mod config;
pub mod delete;
pub mod hello;
pub mod helpers;
pub mod list;
pub mod phone;
pub mod upcoming;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_records: Vec<Record>,
    pub upcoming: Vec<UpcomingBirthday>,
    pub config: Option<AppConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_upcoming(mut self, upcoming: Vec<UpcomingBirthday>) -> Self {
        self.upcoming = upcoming;
        self
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }
}
