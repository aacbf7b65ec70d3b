//! # Rendering
//!
//! Turns `CmdResult` contents into terminal text. Every function returns a
//! `String`; printing happens in the handlers. Colors come from `colored`,
//! which the handlers switch off for `--no-color` or a non-terminal stdout.

use addrbook::api::{CmdMessage, MessageLevel};
use addrbook::book::{render_directory, UpcomingBirthday};
use addrbook::config::AppConfig;
use addrbook::error::AddrBookError;
use addrbook::model::Record;
use colored::Colorize;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.normal(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        output.push_str(&format!("{}\n", line));
    }
    output
}

pub fn render_records(records: &[Record]) -> String {
    format!("{}\n", render_directory(records))
}

pub fn render_upcoming(upcoming: &[UpcomingBirthday]) -> String {
    upcoming
        .iter()
        .map(|u| {
            format!(
                "Name: {}, Congratulations date: {}\n",
                u.name.bold(),
                u.congratulation_date()
            )
        })
        .collect()
}

pub fn render_config(config: &AppConfig) -> String {
    config
        .list_all()
        .into_iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

/// The one place errors become user-facing text.
pub fn describe_error(err: &AddrBookError) -> String {
    match err {
        AddrBookError::Io(_) | AddrBookError::Serialization(_) => {
            format!("Unexpected error: {}", err)
        }
        _ => err.to_string(),
    }
}

pub fn render_error(err: &AddrBookError) -> String {
    format!("{}\n", describe_error(err).red())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn messages_one_per_line() {
        plain();
        let out = render_messages(&[CmdMessage::info("a"), CmdMessage::success("b")]);
        assert_eq!(out, "a\nb\n");
    }

    #[test]
    fn records_use_directory_layout() {
        plain();
        let mut john = Record::new("John").unwrap();
        john.add_phone("1234567890").unwrap();
        assert_eq!(
            render_records(&[john]),
            "John:\n  Phones:\n    1234567890\n"
        );
        assert_eq!(render_records(&[]), "Address Book is empty.\n");
    }

    #[test]
    fn upcoming_lines() {
        plain();
        let upcoming = vec![UpcomingBirthday {
            name: "John".into(),
            date: NaiveDate::from_ymd_opt(2025, 10, 20).unwrap(),
        }];
        assert_eq!(
            render_upcoming(&upcoming),
            "Name: John, Congratulations date: 20.10.2025\n"
        );
    }

    #[test]
    fn config_lines() {
        assert_eq!(
            render_config(&AppConfig::default()),
            "upcoming_days = 7\nleap_day = feb28\n"
        );
    }

    #[test]
    fn domain_errors_pass_through() {
        let err = AddrBookError::ContactNotFound("Ghost".into());
        assert_eq!(
            describe_error(&err),
            "There is no contact with the name: 'Ghost'"
        );
    }

    #[test]
    fn io_errors_are_flagged_unexpected() {
        let err = AddrBookError::Io(std::io::Error::other("disk gone"));
        assert!(describe_error(&err).starts_with("Unexpected error:"));
    }
}
