use crate::book::AddressBook;
use crate::commands::helpers::{require_contact, require_contact_mut};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::fields::PhoneNumber;

/// Lists the phones of one contact.
pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = require_contact(book, name)?;
    let message = if record.phones().is_empty() {
        CmdMessage::info(format!(
            "The contact with the name: {} has no phones yet",
            record.name()
        ))
    } else {
        let phones = record
            .phones()
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        CmdMessage::info(format!("{}'s phones: {}", record.name(), phones))
    };
    Ok(CmdResult::default().with_message(message))
}

pub fn remove(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = require_contact_mut(book, name)?;
    let message = if record.remove_phone(phone) {
        CmdMessage::success(format!(
            "The phone number: {} was removed from {}'s contact",
            phone,
            record.name()
        ))
    } else {
        CmdMessage::warning(format!(
            "{} has no phone number {}",
            record.name(),
            phone
        ))
    };
    Ok(CmdResult::default().with_message(message))
}
