//! Next-occurrence computation.
//!
//! ## Summary
//! Every rule kind produces its answer strictly after the reference date and
//! moves at least one step past the anchor, so the anchor itself is never
//! returned. Multi-valued rules (weekly, monthly) compute one candidate per
//! listed value and then take the earliest.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::calendar::{
    days_in_month, following_month, format_date, next_weekday_after, parse_date,
    resolve_month_day, same_day_in_year,
};
use crate::error::{ComputationError, NextDateError};
use crate::parse::parse;
use crate::rule::RecurrenceRule;

type ComputationResult<T> = Result<T, ComputationError>;

/// Longest run of months that can lack a given day of month (31 skips at most
/// one month at a time), with generous slack.
const MONTH_SEARCH_LIMIT: usize = 24;

/// Longest run of years without a February 29 (e.g. 2096 to 2104).
const LEAP_DAY_SEARCH_YEARS: i32 = 8;

/// Last year whose dates fit the 8-digit `YYYYMMDD` format.
const MAX_YEAR: i32 = 9999;

/// Leap year used to ask whether a day can ever occur in a month.
const REFERENCE_LEAP_YEAR: i32 = 2000;

/// ## Summary
/// Computes the first occurrence of `rule` strictly after `reference`,
/// counting from `anchor`.
///
/// ## Errors
/// - `ComputationError::NoCandidate` if a monthly rule with a month list has
///   no matching date after `reference`, or a rule carries an empty list.
/// - `ComputationError::DateOutOfRange` if the result would fall after the
///   year 9999.
pub fn next_occurrence(
    reference: NaiveDate,
    anchor: NaiveDate,
    rule: &RecurrenceRule,
) -> ComputationResult<NaiveDate> {
    let next = match rule {
        RecurrenceRule::Yearly => next_yearly(reference, anchor),
        RecurrenceRule::EveryNDays(n) => next_every_n_days(reference, anchor, *n),
        RecurrenceRule::Weekly(weekdays) => next_weekly(reference, anchor, weekdays),
        RecurrenceRule::Monthly { days, months: None } => {
            next_monthly(reference, anchor, days)
        }
        RecurrenceRule::Monthly {
            days,
            months: Some(months),
        } => next_monthly_in_months(reference, anchor, days, months),
    }?;
    if next.year() > MAX_YEAR {
        return Err(ComputationError::DateOutOfRange);
    }

    tracing::trace!(
        %reference,
        %anchor,
        rule = %rule,
        %next,
        "Computed next occurrence"
    );
    Ok(next)
}

/// ## Summary
/// Text-level entry point: `anchor` and the result are `YYYYMMDD` strings and
/// `rule` is unparsed rule text.
///
/// ## Errors
/// - `ComputationError::InvalidAnchorDate` if `anchor` is not a valid date.
/// - `ComputationError::EmptyRule` if `rule` is empty.
/// - `ParseError` if `rule` does not match the grammar.
/// - Any error of [`next_occurrence`].
pub fn next_date(reference: NaiveDate, anchor: &str, rule: &str) -> Result<String, NextDateError> {
    let anchor_date = parse_date(anchor)
        .ok_or_else(|| ComputationError::InvalidAnchorDate(anchor.to_string()))?;

    if rule.is_empty() {
        return Err(ComputationError::EmptyRule.into());
    }

    let rule = parse(rule)?;
    let next = next_occurrence(reference, anchor_date, &rule)?;
    Ok(format_date(next))
}

fn earliest(candidates: impl IntoIterator<Item = NaiveDate>) -> ComputationResult<NaiveDate> {
    candidates
        .into_iter()
        .min()
        .ok_or(ComputationError::NoCandidate)
}

fn next_yearly(reference: NaiveDate, anchor: NaiveDate) -> ComputationResult<NaiveDate> {
    // Years before the reference year cannot produce a date after it.
    let mut year = anchor.year().saturating_add(1).max(reference.year());
    loop {
        let candidate =
            same_day_in_year(anchor, year).ok_or(ComputationError::DateOutOfRange)?;
        if candidate > reference {
            return Ok(candidate);
        }
        year = year
            .checked_add(1)
            .ok_or(ComputationError::DateOutOfRange)?;
    }
}

fn next_every_n_days(
    reference: NaiveDate,
    anchor: NaiveDate,
    n: u16,
) -> ComputationResult<NaiveDate> {
    if n == 0 {
        return Err(ComputationError::NoCandidate);
    }
    let step = i64::from(n);
    let elapsed = reference.signed_duration_since(anchor).num_days();
    let steps = if elapsed < 0 { 1 } else { elapsed / step + 1 };
    let offset = u64::try_from(steps * step).map_err(|_err| ComputationError::DateOutOfRange)?;
    anchor
        .checked_add_days(Days::new(offset))
        .ok_or(ComputationError::DateOutOfRange)
}

fn next_weekly(
    reference: NaiveDate,
    anchor: NaiveDate,
    weekdays: &[Weekday],
) -> ComputationResult<NaiveDate> {
    let candidates = weekdays
        .iter()
        .map(|&weekday| {
            let mut candidate = next_weekday_after(anchor, weekday)
                .ok_or(ComputationError::DateOutOfRange)?;
            if candidate <= reference {
                candidate = next_weekday_after(reference, weekday)
                    .ok_or(ComputationError::DateOutOfRange)?;
            }
            Ok(candidate)
        })
        .collect::<ComputationResult<Vec<_>>>()?;

    earliest(candidates)
}

/// First date strictly after `after` that falls on `day`, searching from
/// `after`'s month onwards and skipping months without that day.
fn month_day_after(after: NaiveDate, day: i8) -> ComputationResult<NaiveDate> {
    let (mut year, mut month) = (after.year(), after.month());
    for _ in 0..MONTH_SEARCH_LIMIT {
        if let Some(candidate) = resolve_month_day(year, month, day)
            && candidate > after
        {
            return Ok(candidate);
        }
        (year, month) = following_month(year, month);
    }
    Err(ComputationError::DateOutOfRange)
}

fn next_monthly(
    reference: NaiveDate,
    anchor: NaiveDate,
    days: &[i8],
) -> ComputationResult<NaiveDate> {
    let candidates = days
        .iter()
        .map(|&day| {
            let candidate = month_day_after(anchor, day)?;
            if candidate <= reference {
                return month_day_after(reference, day);
            }
            Ok(candidate)
        })
        .collect::<ComputationResult<Vec<_>>>()?;

    earliest(candidates)
}

/// First `day` of `month` strictly after `after`, trying `after`'s year and
/// the following years. `None` when the day never occurs in that month.
fn day_in_month_after(after: NaiveDate, month: u32, day: u32) -> Option<NaiveDate> {
    if day > days_in_month(REFERENCE_LEAP_YEAR, month)? {
        return None;
    }
    let first_year = after.year();
    (first_year..=first_year.saturating_add(LEAP_DAY_SEARCH_YEARS))
        .filter_map(|year| NaiveDate::from_ymd_opt(year, month, day))
        .find(|candidate| *candidate > after)
}

fn next_monthly_in_months(
    reference: NaiveDate,
    anchor: NaiveDate,
    days: &[i8],
    months: &[u8],
) -> ComputationResult<NaiveDate> {
    let after = anchor.max(reference);
    let mut candidates = Vec::with_capacity(days.len() * months.len());

    for &day in days {
        for &month in months {
            let month = u32::from(month);
            let candidate = if day > 0 {
                day_in_month_after(after, month, u32::from(day.unsigned_abs()))
            } else {
                // Counted-from-end days stay in the anchor's year; later
                // years are not tried.
                resolve_month_day(anchor.year(), month, day)
            };

            match candidate {
                Some(date) if date > reference => candidates.push(date),
                _ => tracing::trace!(day, month, "No candidate for day and month"),
            }
        }
    }

    earliest(candidates)
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
