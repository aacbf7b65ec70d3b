use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::schedule::LeapDayPolicy;
use chrono::NaiveDate;

pub fn run(
    book: &AddressBook,
    horizon_days: u32,
    today: NaiveDate,
    policy: LeapDayPolicy,
) -> Result<CmdResult> {
    let upcoming: Vec<_> = book
        .upcoming_birthdays_with(horizon_days, today, policy)
        .collect();

    let message = if upcoming.is_empty() {
        CmdMessage::info(format!(
            "No upcoming birthdays found in the next {} days.",
            horizon_days
        ))
    } else {
        CmdMessage::success(format!("{} upcoming birthdays found!", upcoming.len()))
    };

    Ok(CmdResult::default()
        .with_upcoming(upcoming)
        .with_message(message))
}
