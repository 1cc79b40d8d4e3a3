//! Task fields as received from clients, and their validation.

use chrono::NaiveDate;
use serde::Deserialize;

use planner_rule::calendar::parse_date;
use planner_rule::{RecurrenceRule, next_occurrence, parse};

use crate::error::{ServiceError, ServiceResult};

pub const TITLE_MAX_CHARS: usize = 64;
pub const COMMENT_MAX_CHARS: usize = 512;
pub const REPEAT_MAX_CHARS: usize = 128;

/// Unvalidated task fields. Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskDraft {
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

/// Draft that passed validation, with the date it is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreparedTask<'a> {
    pub date: NaiveDate,
    pub title: &'a str,
    pub comment: &'a str,
    pub repeat: &'a str,
}

impl TaskDraft {
    /// ## Summary
    /// Validates a draft for a new task and resolves its date against
    /// `today` (see [`resolve_task_date`]).
    ///
    /// ## Errors
    /// Returns the errors of [`validate_draft`] and [`resolve_task_date`].
    pub fn prepare_new(&self, today: NaiveDate) -> ServiceResult<PreparedTask<'_>> {
        let rule = validate_draft(self)?;
        let date = resolve_task_date(&self.date, rule.as_ref(), today)?;
        Ok(self.prepared(date))
    }

    /// ## Summary
    /// Validates a draft replacing an existing task. The date is required and
    /// kept as given.
    ///
    /// ## Errors
    /// Returns the errors of [`validate_draft`] and [`parse_task_date`].
    pub fn prepare_update(&self) -> ServiceResult<PreparedTask<'_>> {
        validate_draft(self)?;
        let date = parse_task_date(&self.date)?;
        Ok(self.prepared(date))
    }

    fn prepared(&self, date: NaiveDate) -> PreparedTask<'_> {
        PreparedTask {
            date,
            title: &self.title,
            comment: &self.comment,
            repeat: &self.repeat,
        }
    }
}

fn check_length(field: &str, value: &str, max: usize) -> ServiceResult<()> {
    if value.chars().count() > max {
        return Err(ServiceError::ValidationError(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// ## Summary
/// Checks the field constraints of a draft and parses its rule.
///
/// Returns the parsed rule, or `None` when the draft does not recur. The date
/// is not checked here; see [`resolve_task_date`].
///
/// ## Errors
/// Returns `ServiceError::ValidationError` for a blank title, an overlong
/// field, or rule text that does not parse.
pub fn validate_draft(draft: &TaskDraft) -> ServiceResult<Option<RecurrenceRule>> {
    if draft.title.trim().is_empty() {
        return Err(ServiceError::ValidationError("title is required".to_string()));
    }
    check_length("title", &draft.title, TITLE_MAX_CHARS)?;
    check_length("comment", &draft.comment, COMMENT_MAX_CHARS)?;
    check_length("repeat", &draft.repeat, REPEAT_MAX_CHARS)?;

    if draft.repeat.is_empty() {
        return Ok(None);
    }
    parse(&draft.repeat)
        .map(Some)
        .map_err(|e| ServiceError::ValidationError(format!("repeat: {e}")))
}

/// ## Summary
/// Parses a `YYYYMMDD` task date.
///
/// ## Errors
/// Returns `ServiceError::ValidationError` when the date is missing or is not
/// a real calendar day.
pub fn parse_task_date(text: &str) -> ServiceResult<NaiveDate> {
    if text.is_empty() {
        return Err(ServiceError::ValidationError("date is required".to_string()));
    }
    parse_date(text)
        .ok_or_else(|| ServiceError::ValidationError(format!("invalid date {text:?}")))
}

/// ## Summary
/// Decides the date a new task is stored with, given its date text and the
/// rule already parsed by [`validate_draft`].
///
/// An empty date means `today`. A date in the past moves to `today` for a
/// one-off task, or to the rule's next occurrence after `today` for a
/// recurring one. Today and later dates are kept.
///
/// ## Errors
/// - `ServiceError::ValidationError` for an invalid date.
/// - `ServiceError::RuleError` when the rule has no occurrence after `today`.
pub fn resolve_task_date(
    date: &str,
    rule: Option<&RecurrenceRule>,
    today: NaiveDate,
) -> ServiceResult<NaiveDate> {
    if date.is_empty() {
        return Ok(today);
    }
    let date = parse_task_date(date)?;
    if date >= today {
        return Ok(date);
    }

    match rule {
        Some(rule) => Ok(next_occurrence(today, date, rule)?),
        None => Ok(today),
    }
}

/// ## Summary
/// Parses a task id received as decimal text.
///
/// ## Errors
/// Returns `ServiceError::ValidationError` when the id is missing, not a
/// number, or not positive.
pub fn parse_task_id(text: &str) -> ServiceResult<i64> {
    if text.is_empty() {
        return Err(ServiceError::ValidationError("task id is required".to_string()));
    }
    text.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ServiceError::ValidationError(format!("invalid task id {text:?}")))
}

#[cfg(test)]
#[path = "draft_tests.rs"]
mod tests;
