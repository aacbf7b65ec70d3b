use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use tracing::debug;

/// Creates the contact when it doesn't exist yet, then attaches `phone`.
///
/// An existing contact is never replaced: the phone is added to it instead.
/// If the phone is invalid for a brand new contact, nothing is created.
pub fn run(book: &mut AddressBook, name: &str, phone: Option<&str>) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if let Some(record) = book.find_mut(name) {
        match phone {
            Some(phone) => {
                record.add_phone(phone)?;
                result.add_message(CmdMessage::success(format!(
                    "The phone number: {} was added to {}'s contact",
                    phone,
                    record.name()
                )));
            }
            None => result.add_message(CmdMessage::info(format!(
                "The record with the name: {} already exists",
                record.name()
            ))),
        }
        return Ok(result);
    }

    let mut record = Record::new(name)?;
    let message = match phone {
        Some(phone) => {
            record.add_phone(phone)?;
            format!(
                "Contact with the name: {} and phone number: {} was created.",
                name, phone
            )
        }
        None => format!("Contact with the name: {} was created.", name),
    };
    debug!(name, "creating contact");
    let _ = book.add_record(record);
    result.add_message(CmdMessage::success(message));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn creates_contact_with_phone() {
        let mut book = AddressBook::new();
        let result = run(&mut book, "John", Some("1234567890")).unwrap();

        let john = book.find("john").unwrap();
        assert_eq!(john.phones()[0].as_str(), "1234567890");
        assert!(result.messages[0].content.contains("was created"));
    }

    #[test]
    fn creates_contact_without_phone() {
        let mut book = AddressBook::new();
        run(&mut book, "Jake", None).unwrap();
        assert!(book.find("Jake").unwrap().phones().is_empty());
    }

    #[test]
    fn existing_contact_gets_extra_phone() {
        let mut book = AddressBook::new();
        run(&mut book, "John", Some("1234567890")).unwrap();
        let result = run(&mut book, "JOHN", Some("5555555555")).unwrap();

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("john").unwrap().phones().len(), 2);
        assert!(result.messages[0].content.contains("was added to John's"));
    }

    #[test]
    fn existing_contact_without_phone_is_reported() {
        let mut book = AddressBook::new();
        run(&mut book, "John", Some("1234567890")).unwrap();
        let result = run(&mut book, "John", None).unwrap();

        assert!(result.messages[0].content.contains("already exists"));
        assert_eq!(book.find("john").unwrap().phones().len(), 1);
    }

    #[test]
    fn invalid_phone_creates_nothing() {
        let mut book = AddressBook::new();
        let err = run(&mut book, "John", Some("12")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert!(book.is_empty());
    }

    #[test]
    fn duplicate_phone_is_rejected() {
        let mut book = AddressBook::new();
        run(&mut book, "John", Some("1234567890")).unwrap();
        let err = run(&mut book, "John", Some("1234567890")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicatePhone);
    }

    #[test]
    fn invalid_name_is_rejected() {
        let mut book = AddressBook::new();
        let err = run(&mut book, "J0hn", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }
}
