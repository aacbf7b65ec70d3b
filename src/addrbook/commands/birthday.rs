use crate::book::AddressBook;
use crate::commands::helpers::{require_contact, require_contact_mut};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use tracing::debug;

pub fn add(book: &mut AddressBook, name: &str, birthday: &str) -> Result<CmdResult> {
    let record = require_contact_mut(book, name)?;
    record.add_birthday(birthday)?;
    debug!(name, birthday, "birthday set");

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Birthday {} was added to {}'s contact",
        birthday,
        record.name()
    ))))
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = require_contact(book, name)?;
    let message = match record.birthday() {
        Some(bd) => CmdMessage::info(format!("{}'s birthday: {}", record.name(), bd)),
        None => CmdMessage::info(format!(
            "No birthday date has been added to {}'s record",
            record.name()
        )),
    };
    Ok(CmdResult::default().with_message(message))
}
