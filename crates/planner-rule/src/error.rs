//! Recurrence rule error types.

use thiserror::Error;

/// Result type for rule parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Malformed recurrence rule text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid recurrence syntax: {kind}")]
pub struct ParseError {
    /// Which part of the rule failed.
    pub kind: ParseErrorKind,
}

impl ParseError {
    #[must_use]
    pub const fn new(kind: ParseErrorKind) -> Self {
        Self { kind }
    }
}

impl From<ParseErrorKind> for ParseError {
    fn from(kind: ParseErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Kinds of rule parse errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("empty rule")]
    Empty,
    #[error("unknown rule kind")]
    UnknownKind,
    #[error("wrong number of tokens")]
    TokenCount,
    #[error("day interval must be between 1 and 400")]
    InvalidInterval,
    #[error("weekday must be between 1 and 7")]
    InvalidWeekday,
    #[error("day of month must be -2, -1 or between 1 and 31")]
    InvalidMonthDay,
    #[error("month must be between 1 and 12")]
    InvalidMonth,
    #[error("too many list entries")]
    ListTooLong,
}

/// Failure while computing the next occurrence of a rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputationError {
    #[error("invalid anchor date: {0:?}")]
    InvalidAnchorDate(String),

    #[error("empty recurrence rule")]
    EmptyRule,

    #[error("no date matches the day and month lists after the reference date")]
    NoCandidate,

    #[error("next occurrence is outside the supported date range")]
    DateOutOfRange,
}

/// Errors of the text-level [`crate::next_date`] entry point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NextDateError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Computation(#[from] ComputationError),
}
