//! Recurrence rules for planner tasks.
//!
//! ## Summary
//! Parses the compact rule grammar (`y`, `d <n>`, `w <weekdays>`,
//! `m <days> [<months>]`) into a [`RecurrenceRule`] and computes the next
//! occurrence of a task strictly after a reference date.
//!
//! Everything in this crate is pure and synchronous; it can be called from any
//! number of request handlers at once.

pub mod calendar;
pub mod engine;
pub mod error;
pub mod parse;
pub mod rule;

pub use engine::{next_date, next_occurrence};
pub use error::{ComputationError, NextDateError, ParseError, ParseErrorKind};
pub use parse::{parse, validate};
pub use rule::RecurrenceRule;
