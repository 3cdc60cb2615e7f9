//! Upcoming birthday selection.
//!
//! A birthday counts as upcoming when it falls later in the current month
//! (today included) or anywhere in the following month. This only
//! approximates "the next thirty days": later dates of the current
//! month always qualify while the whole of next month does too, so the
//! window spans anywhere from about one month to about two.

use crate::domain::Birthday;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// One entry of the upcoming birthday list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Birthday as `dd.mm.yyyy` (the birth year, not this year's occurrence)
    pub date: String,
}

/// Calendar month following `month` (1-12), wrapping December to January.
pub fn next_month(month: u32) -> u32 {
    month % 12 + 1
}

/// Whether `birthday` is upcoming relative to `today`.
pub fn is_upcoming(birthday: &Birthday, today: NaiveDate) -> bool {
    let same_month_later = birthday.month() == today.month() && birthday.day() >= today.day();
    let in_next_month = birthday.month() == next_month(today.month());
    same_month_later || in_next_month
}
