//! Calendar arithmetic shared by the rule kinds.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Wire format of dates (`YYYYMMDD`).
pub const DATE_FORMAT: &str = "%Y%m%d";

/// ## Summary
/// Parses an 8-digit `YYYYMMDD` date.
///
/// Returns `None` unless the text is exactly eight ASCII digits naming a real
/// calendar day.
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// Formats a date as `YYYYMMDD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Number of days in `month` of `year`, or `None` for an invalid month.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(chrono::Months::new(1))?;
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// ## Summary
/// Resolves a rule day (`1..=31`, or `-1`/`-2` counted from the month end)
/// to a date in the given month.
///
/// Returns `None` when the month has no such day.
#[must_use]
pub fn resolve_month_day(year: i32, month: u32, day: i8) -> Option<NaiveDate> {
    let last = days_in_month(year, month)?;
    let day = if day < 0 {
        last.checked_sub(u32::from(day.unsigned_abs()) - 1)?
    } else {
        u32::from(day.unsigned_abs())
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// ## Summary
/// Returns the first date strictly after `date` falling on `weekday`.
///
/// A date that already falls on `weekday` yields the same weekday one week
/// later.
#[must_use]
pub fn next_weekday_after(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let current = date.weekday().number_from_monday();
    let target = weekday.number_from_monday();
    let offset = if target > current {
        target - current
    } else {
        target + 7 - current
    };
    date.checked_add_days(Days::new(u64::from(offset)))
}

/// `(year, month)` of the month following `month` of `year`.
#[must_use]
pub const fn following_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// ## Summary
/// Places `anchor`'s month and day in `year`.
///
/// February 29 becomes March 1 in years without a leap day.
#[must_use]
pub fn same_day_in_year(anchor: NaiveDate, year: i32) -> Option<NaiveDate> {
    anchor.with_year(year).or_else(|| {
        // only Feb 29 can fail here
        NaiveDate::from_ymd_opt(year, 3, 1)
    })
}
