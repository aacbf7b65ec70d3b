//! # Field Validators
//!
//! Value types for the three validated fields of a contact. Each one can only
//! be built through a fallible constructor, so holding a `Name`,
//! `PhoneNumber` or `Birthday` means the text already passed its rule.
//!
//! | type          | rule                                             |
//! |---------------|--------------------------------------------------|
//! | `Name`        | non-empty, alphabetic characters only            |
//! | `PhoneNumber` | exactly 10 decimal digits                        |
//! | `Birthday`    | `DD.MM.YYYY` naming a real calendar date         |

use crate::error::{AddrBookError, FieldKind, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";
pub const PHONE_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> Result<Self> {
        if value.is_empty() || !value.chars().all(char::is_alphabetic) {
            return Err(AddrBookError::invalid(
                FieldKind::Name,
                format!("'{}'. Name must contain only letters.", value),
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The lookup key used by the address book.
    pub fn key(&self) -> String {
        self.0.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(value: &str) -> Result<Self> {
        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(AddrBookError::invalid(
                FieldKind::Phone,
                format!("'{}' must consist of digits only.", value),
            ));
        }
        if value.len() != PHONE_DIGITS {
            return Err(AddrBookError::invalid(
                FieldKind::Phone,
                format!("'{}' must contain exactly {} digits.", value, PHONE_DIGITS),
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A birthday keeps both the parsed date and the text it was given as.
/// Serialized as that text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday {
    text: String,
    date: NaiveDate,
}

impl Birthday {
    pub fn new(value: &str) -> Result<Self> {
        if !has_birthday_shape(value) {
            return Err(birthday_format_error());
        }
        let date =
            NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).map_err(|_| birthday_format_error())?;
        if date.year() < 1 {
            return Err(birthday_format_error());
        }
        Ok(Self {
            text: value.to_string(),
            date,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

fn birthday_format_error() -> AddrBookError {
    AddrBookError::invalid(FieldKind::Birthday, "Invalid date format. Use DD.MM.YYYY")
}

// chrono accepts unpadded days and signed years, the format does not.
fn has_birthday_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(BIRTHDAY_FORMAT).to_string()
}

macro_rules! text_field {
    ($ty:ident, $accessor:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.$accessor())
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.$accessor()
            }
        }

        impl FromStr for $ty {
            type Err = AddrBookError;

            fn from_str(s: &str) -> Result<Self> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = AddrBookError;

            fn try_from(value: String) -> Result<Self> {
                Self::new(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.$accessor().to_string()
            }
        }
    };
}

text_field!(Name, as_str);
text_field!(PhoneNumber, as_str);
text_field!(Birthday, as_str);
