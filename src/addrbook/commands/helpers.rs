use crate::book::AddressBook;
use crate::error::{AddrBookError, Result};
use crate::model::Record;

pub fn require_contact<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.find(name)
        .ok_or_else(|| AddrBookError::ContactNotFound(name.to_string()))
}

pub fn require_contact_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| AddrBookError::ContactNotFound(name.to_string()))
}
