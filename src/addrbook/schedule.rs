//! # Birthday Scheduling
//!
//! Works out when a birthday is next celebrated relative to a given day, and
//! when the greeting should go out.
//!
//! ## Projection
//!
//! A birthday's month and day are projected onto `today`'s year. If that date
//! is already behind us, the projection moves to the following year. The
//! result is the *next occurrence*, always `>= today`.
//!
//! 29 February has no counterpart in a non-leap year; [`LeapDayPolicy`]
//! decides whether it is celebrated on 28 February or 1 March.
//!
//! ## Weekend adjustment
//!
//! Greetings are only sent on business days. An occurrence on Saturday or
//! Sunday is moved forward to the following Monday. The horizon check is done
//! on the real occurrence, before this shift, so a Saturday birthday on the
//! last day of the horizon still counts even though its greeting lands later.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// How 29 February is projected onto a year that lacks it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeapDayPolicy {
    #[default]
    Feb28,
    Mar1,
}

/// Places `birthday`'s month and day in `year`.
pub fn project(birthday: NaiveDate, year: i32, policy: LeapDayPolicy) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| match policy {
            LeapDayPolicy::Feb28 => NaiveDate::from_ymd_opt(year, 2, 28),
            LeapDayPolicy::Mar1 => NaiveDate::from_ymd_opt(year, 3, 1),
        })
        .unwrap_or(NaiveDate::MAX)
}

/// The first celebration of `birthday` on or after `today`.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate, policy: LeapDayPolicy) -> NaiveDate {
    let this_year = project(birthday, today.year(), policy);
    if this_year < today {
        project(birthday, today.year() + 1, policy)
    } else {
        this_year
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Smallest strictly positive step from `start` that lands on `weekday`.
pub fn next_weekday(start: NaiveDate, weekday: Weekday) -> NaiveDate {
    let current = start.weekday().num_days_from_monday() as i64;
    let target = weekday.num_days_from_monday() as i64;
    let mut ahead = target - current;
    if ahead <= 0 {
        ahead += 7;
    }
    start
        .checked_add_days(Days::new(ahead as u64))
        .unwrap_or(start)
}

/// Moves Saturday and Sunday forward to Monday; other days are unchanged.
pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    if is_weekend(date) {
        next_weekday(date, Weekday::Mon)
    } else {
        date
    }
}

/// Congratulation date for `birthday` if it falls within `horizon_days` of
/// `today` (inclusive on both ends), already shifted off the weekend.
pub fn congratulation_date(
    birthday: NaiveDate,
    today: NaiveDate,
    horizon_days: u32,
    policy: LeapDayPolicy,
) -> Option<NaiveDate> {
    let occurrence = next_occurrence(birthday, today, policy);
    let days_until = (occurrence - today).num_days();
    if (0..=i64::from(horizon_days)).contains(&days_until) {
        Some(adjust_for_weekend(occurrence))
    } else {
        None
    }
}
