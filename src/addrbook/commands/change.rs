use crate::book::AddressBook;
use crate::commands::helpers::require_contact_mut;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use tracing::debug;

pub fn run(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let record = require_contact_mut(book, name)?;
    record.edit_phone(old, new)?;
    debug!(name, old, new, "phone changed");

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "{}'s phone number {} was changed to {}",
        record.name(),
        old,
        new
    ))))
}
