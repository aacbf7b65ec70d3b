//! # Address Book
//!
//! The directory of contacts. Records are keyed by their name lower-cased, so
//! `John`, `john` and `JOHN` all address the same entry.
//!
//! ## Ordering
//!
//! Records are kept in first-insertion order of their key. Replacing a record
//! reuses the slot of the one it replaces, and deleting shifts later records
//! up. Listings and the birthday query both follow this order, which keeps
//! their output stable between runs.
//!
//! ## Overwrites
//!
//! [`AddressBook::add_record`] replaces an existing record with the same key.
//! The replacement is reported through [`Insertion::Replaced`], which hands
//! back the displaced record, so callers can't lose data without seeing it.

use crate::error::{AddrBookError, Result};
use crate::fields::format_date;
use crate::model::Record;
use crate::schedule::{congratulation_date, LeapDayPolicy};
use chrono::NaiveDate;
use std::fmt;
use tracing::debug;

pub const DEFAULT_HORIZON_DAYS: u32 = 7;
pub const EMPTY_BOOK: &str = "Address Book is empty.";

/// Outcome of [`AddressBook::add_record`].
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub enum Insertion {
    Inserted,
    Replaced(Record),
}

/// A contact whose birthday is coming up, with the day to congratulate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `DD.MM.YYYY`.
    pub fn congratulation_date(&self) -> String {
        format_date(self.date)
    }
}

/// Each record is stored next to its lookup key.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: Vec<(String, Record)>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().map(|(_, record)| record)
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = name.to_lowercase();
        self.records.iter().position(|(k, _)| *k == key)
    }

    pub fn add_record(&mut self, record: Record) -> Insertion {
        let key = record.name().key();
        match self.records.iter().position(|(k, _)| *k == key) {
            Some(idx) => {
                debug!(name = %record.name(), "replacing existing record");
                let previous = std::mem::replace(&mut self.records[idx].1, record);
                Insertion::Replaced(previous)
            }
            None => {
                debug!(name = %record.name(), "inserting record");
                self.records.push((key, record));
                Insertion::Inserted
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|idx| &self.records[idx].1)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let idx = self.position(name)?;
        self.records.get_mut(idx).map(|(_, record)| record)
    }

    pub fn delete(&mut self, name: &str) -> Result<Record> {
        let idx = self
            .position(name)
            .ok_or_else(|| AddrBookError::ContactNotFound(name.to_string()))?;
        debug!(name, "deleting record");
        Ok(self.records.remove(idx).1)
    }

    /// Contacts to congratulate within `horizon_days` of `today`.
    ///
    /// The sequence is computed lazily from the current records each time it
    /// is called. 29 February birthdays use [`LeapDayPolicy::default`].
    pub fn upcoming_birthdays(
        &self,
        horizon_days: u32,
        today: NaiveDate,
    ) -> impl Iterator<Item = UpcomingBirthday> + '_ {
        self.upcoming_birthdays_with(horizon_days, today, LeapDayPolicy::default())
    }

    pub fn upcoming_birthdays_with(
        &self,
        horizon_days: u32,
        today: NaiveDate,
        policy: LeapDayPolicy,
    ) -> impl Iterator<Item = UpcomingBirthday> + '_ {
        self.iter().filter_map(move |record| {
            let birthday = record.birthday()?;
            congratulation_date(birthday.date(), today, horizon_days, policy).map(|date| {
                UpcomingBirthday {
                    name: record.name().to_string(),
                    date,
                }
            })
        })
    }
}

/// Renders records one after another in the [`Record`] display layout, or
/// [`EMPTY_BOOK`] when there are none.
pub fn render_directory<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    let rendered: Vec<String> = records.into_iter().map(Record::to_string).collect();
    if rendered.is_empty() {
        EMPTY_BOOK.to_string()
    } else {
        rendered.join("\n")
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_directory(self.iter()))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(name).unwrap();
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            let _ = self.book.add_record(record);
            self
        }

        pub fn with_birthday(mut self, name: &str, birthday: &str) -> Self {
            let mut record = Record::new(name).unwrap();
            record.add_birthday(birthday).unwrap();
            let _ = self.book.add_record(record);
            self
        }
    }
}
