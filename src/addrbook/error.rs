use std::fmt;
use thiserror::Error;

/// Which validated field rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Phone,
    Birthday,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldKind::Name => "name",
            FieldKind::Phone => "phone number",
            FieldKind::Birthday => "birthday",
        };
        f.write_str(label)
    }
}

/// Coarse classification of an [`AddrBookError`].
///
/// The core only ever raises the first three; `Other` covers the ambient
/// failures (config, I/O) of the outer layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFormat,
    DuplicatePhone,
    NotFound,
    Other,
}

#[derive(Error, Debug)]
pub enum AddrBookError {
    #[error("Invalid {field}: {reason}")]
    InvalidFormat { field: FieldKind, reason: String },

    #[error("Phone number '{0}' already exists for this contact.")]
    DuplicatePhone(String),

    #[error("Phone number '{0}' not found.")]
    PhoneNotFound(String),

    #[error("There is no contact with the name: '{0}'")]
    ContactNotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AddrBookError {
    pub(crate) fn invalid(field: FieldKind, reason: impl Into<String>) -> Self {
        AddrBookError::InvalidFormat {
            field,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AddrBookError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            AddrBookError::DuplicatePhone(_) => ErrorKind::DuplicatePhone,
            AddrBookError::PhoneNotFound(_) | AddrBookError::ContactNotFound(_) => {
                ErrorKind::NotFound
            }
            AddrBookError::Config(_)
            | AddrBookError::Io(_)
            | AddrBookError::Serialization(_) => ErrorKind::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, AddrBookError>;
