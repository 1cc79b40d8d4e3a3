//! Recurrence rule grammar.
//!
//! ```text
//! y
//! d <1..=400>
//! w <1..=7>[,<1..=7>]{0,6}
//! m <day>[,<day>]{0,30}[ <month>[,<month>]{0,11}]
//! ```
//!
//! Tokens are separated by exactly one whitespace character. Days are `-2`,
//! `-1` or `1..=31`; days and months may be zero padded to two digits.

use std::sync::LazyLock;

use chrono::Weekday;
use regex_lite::Regex;

use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rule::RecurrenceRule;

const MAX_WEEKDAYS: usize = 7;
const MAX_MONTH_DAYS: usize = 31;
const MAX_MONTHS: usize = 12;

static INTERVAL: LazyLock<Regex> = LazyLock::new(|| pattern(r"[1-9]|[1-9]\d|[1-3]\d{2}|400"));
static WEEKDAY: LazyLock<Regex> = LazyLock::new(|| pattern(r"[1-7]"));
static MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| pattern(r"-[12]|0?[1-9]|[12]\d|3[01]"));
static MONTH: LazyLock<Regex> = LazyLock::new(|| pattern(r"0?[1-9]|1[012]"));

#[expect(clippy::expect_used, reason = "patterns are compile-time constants")]
fn pattern(alternatives: &str) -> Regex {
    Regex::new(&format!("^(?:{alternatives})$")).expect("valid token pattern")
}

/// Returns `true` when `text` is a well-formed recurrence rule.
#[must_use]
pub fn validate(text: &str) -> bool {
    parse(text).is_ok()
}

/// ## Summary
/// Parses rule text into a [`RecurrenceRule`].
///
/// ## Errors
/// Returns a [`ParseError`] naming the first part of the text that does not
/// match the grammar.
pub fn parse(text: &str) -> ParseResult<RecurrenceRule> {
    if text.is_empty() {
        return Err(ParseErrorKind::Empty.into());
    }

    let tokens: Vec<&str> = text.split(|c: char| c.is_ascii_whitespace()).collect();
    let rule = match tokens.as_slice() {
        ["y"] => RecurrenceRule::Yearly,
        ["d", interval] => RecurrenceRule::EveryNDays(parse_interval(interval)?),
        ["w", weekdays] => RecurrenceRule::weekly(parse_list(
            weekdays,
            MAX_WEEKDAYS,
            parse_weekday,
        )?),
        ["m", days] => RecurrenceRule::monthly(
            parse_list(days, MAX_MONTH_DAYS, parse_month_day)?,
            None::<Vec<u8>>,
        ),
        ["m", days, months] => RecurrenceRule::monthly(
            parse_list(days, MAX_MONTH_DAYS, parse_month_day)?,
            Some(parse_list(months, MAX_MONTHS, parse_month)?),
        ),
        ["y" | "d" | "w" | "m", ..] => return Err(ParseErrorKind::TokenCount.into()),
        _ => return Err(ParseErrorKind::UnknownKind.into()),
    };

    tracing::trace!(text, rule = %rule, "Parsed recurrence rule");
    Ok(rule)
}

/// Parses a comma-separated list of at most `max` entries.
fn parse_list<T>(
    list: &str,
    max: usize,
    parse_item: fn(&str) -> ParseResult<T>,
) -> ParseResult<Vec<T>> {
    let items: Vec<&str> = list.split(',').collect();
    if items.len() > max {
        return Err(ParseErrorKind::ListTooLong.into());
    }
    items.into_iter().map(parse_item).collect()
}

fn parse_number<T: std::str::FromStr>(
    token: &str,
    pattern: &Regex,
    kind: ParseErrorKind,
) -> ParseResult<T> {
    if !pattern.is_match(token) {
        return Err(ParseError::new(kind));
    }
    token.parse().map_err(|_err| ParseError::new(kind))
}

fn parse_interval(token: &str) -> ParseResult<u16> {
    parse_number(token, &INTERVAL, ParseErrorKind::InvalidInterval)
}

fn parse_weekday(token: &str) -> ParseResult<Weekday> {
    let number: u8 = parse_number(token, &WEEKDAY, ParseErrorKind::InvalidWeekday)?;
    // ISO numbering, 1 = Monday
    Weekday::try_from(number - 1).map_err(|_err| ParseErrorKind::InvalidWeekday.into())
}

fn parse_month_day(token: &str) -> ParseResult<i8> {
    parse_number(token, &MONTH_DAY, ParseErrorKind::InvalidMonthDay)
}

fn parse_month(token: &str) -> ParseResult<u8> {
    parse_number(token, &MONTH, ParseErrorKind::InvalidMonth)
}
