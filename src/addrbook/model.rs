use crate::error::{AddrBookError, Result};
use crate::fields::{Birthday, Name, PhoneNumber};
use std::fmt;

const NO_PHONES: &str = "—";

/// One contact: a name, its phone numbers and an optional birthday.
///
/// The phone list never holds two equal numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, value: &str) -> Result<()> {
        let phone = PhoneNumber::new(value)?;
        if self.phones.contains(&phone) {
            return Err(AddrBookError::DuplicatePhone(value.to_string()));
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Drops every phone equal to `value`. Returns whether anything was removed.
    pub fn remove_phone(&mut self, value: &str) -> bool {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != value);
        self.phones.len() != before
    }

    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let replacement = PhoneNumber::new(new)?;
        let position = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| AddrBookError::PhoneNotFound(old.to_string()))?;

        if old != new && self.phones.contains(&replacement) {
            return Err(AddrBookError::DuplicatePhone(new.to_string()));
        }
        self.phones[position] = replacement;
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Sets the birthday, replacing any earlier one. An empty value leaves
    /// the record untouched.
    pub fn add_birthday(&mut self, value: &str) -> Result<()> {
        if value.is_empty() {
            return Ok(());
        }
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    /// Single-line form: `Contact name: N, phones: a; b, birthday: D`.
    pub fn summary(&self) -> String {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        match &self.birthday {
            Some(bd) => format!(
                "Contact name: {}, phones: {}, birthday: {}",
                self.name, phones, bd
            ),
            None => format!("Contact name: {}, phones: {}", self.name, phones),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            NO_PHONES.to_string()
        } else {
            self.phones
                .iter()
                .map(PhoneNumber::as_str)
                .collect::<Vec<_>>()
                .join("\n    ")
        };
        write!(f, "{}:\n  Phones:\n    {}", self.name, phones)?;
        if let Some(bd) = &self.birthday {
            write!(f, "\n  Birthday: {}", bd)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use proptest::prelude::*;

    fn john() -> Record {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record
    }

    #[test]
    fn new_validates_name() {
        assert_eq!(
            Record::new("John1").unwrap_err().kind(),
            ErrorKind::InvalidFormat
        );
    }

    #[test]
    fn add_phone_keeps_insertion_order() {
        let record = john();
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["1234567890", "5555555555"]);
    }

    #[test]
    fn add_phone_twice_is_rejected() {
        let mut record = john();
        let err = record.add_phone("1234567890").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicatePhone);
        let count = record
            .phones()
            .iter()
            .filter(|p| p.as_str() == "1234567890")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn add_phone_validates_first() {
        let mut record = john();
        let err = record.add_phone("123").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn remove_phone_is_noop_when_missing() {
        let mut record = john();
        assert!(!record.remove_phone("0000000000"));
        assert_eq!(record.phones().len(), 2);

        assert!(record.remove_phone("1234567890"));
        assert!(record.find_phone("1234567890").is_none());
    }

    #[test]
    fn edit_phone_replaces_in_place() {
        let mut record = john();
        record.edit_phone("1234567890", "1112223333").unwrap();

        assert!(record.find_phone("1112223333").is_some());
        assert!(record.find_phone("1234567890").is_none());
        assert_eq!(record.phones()[0].as_str(), "1112223333");
    }

    #[test]
    fn edit_phone_missing_old_is_not_found() {
        let mut record = john();
        let err = record.edit_phone("0000000000", "1112223333").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn edit_phone_validates_new_before_lookup() {
        let mut record = john();
        let err = record.edit_phone("0000000000", "abc").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn edit_phone_onto_existing_number_is_duplicate() {
        let mut record = john();
        let err = record.edit_phone("1234567890", "5555555555").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicatePhone);
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn edit_phone_to_same_value_is_allowed() {
        let mut record = john();
        record.edit_phone("1234567890", "1234567890").unwrap();
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn add_birthday_overwrites_and_ignores_empty() {
        let mut record = john();
        record.add_birthday("21.10.1990").unwrap();
        record.add_birthday("22.10.1990").unwrap();
        assert_eq!(record.birthday().unwrap().as_str(), "22.10.1990");

        record.add_birthday("").unwrap();
        assert_eq!(record.birthday().unwrap().as_str(), "22.10.1990");
    }

    #[test]
    fn add_birthday_rejects_bad_date_without_clearing() {
        let mut record = john();
        record.add_birthday("21.10.1990").unwrap();
        assert!(record.add_birthday("32.10.1990").is_err());
        assert_eq!(record.birthday().unwrap().as_str(), "21.10.1990");
    }

    #[test]
    fn display_lists_phones_and_birthday() {
        let mut record = john();
        record.add_birthday("21.10.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "John:\n  Phones:\n    1234567890\n    5555555555\n  Birthday: 21.10.1990"
        );
    }

    #[test]
    fn display_uses_placeholder_without_phones() {
        let record = Record::new("Jake").unwrap();
        assert_eq!(record.to_string(), "Jake:\n  Phones:\n    —");
    }

    #[test]
    fn summary_joins_phones() {
        let mut record = john();
        assert_eq!(
            record.summary(),
            "Contact name: John, phones: 1234567890; 5555555555"
        );
        record.add_birthday("21.10.1990").unwrap();
        assert!(record.summary().ends_with(", birthday: 21.10.1990"));
    }

    proptest! {
        #[test]
        fn edit_phone_swaps_any_distinct_pair(old in "[0-9]{10}", new in "[0-9]{10}") {
            prop_assume!(old != new);
            let mut record = Record::new("John").unwrap();
            record.add_phone(&old).unwrap();

            record.edit_phone(&old, &new).unwrap();

            prop_assert!(record.find_phone(&new).is_some());
            prop_assert!(record.find_phone(&old).is_none());
            prop_assert_eq!(record.phones().len(), 1);
        }
    }
}
