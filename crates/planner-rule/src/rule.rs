//! Typed recurrence rule.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

use crate::error::ParseError;

/// A parsed recurrence rule.
///
/// Lists are kept sorted ascending without duplicates, so two rules that
/// describe the same set of dates compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceRule {
    /// Same month and day every year (`y`).
    Yearly,
    /// Every `n` days, `1..=400` (`d <n>`).
    EveryNDays(u16),
    /// On each listed weekday (`w <list>`), Monday first.
    Weekly(Vec<Weekday>),
    /// On each listed day of month (`m <days> [<months>]`).
    ///
    /// Days are `1..=31`, or `-1`/`-2` for the last and second-to-last day.
    /// `months` is `None` when the rule applies to every month.
    Monthly {
        days: Vec<i8>,
        months: Option<Vec<u8>>,
    },
}

impl RecurrenceRule {
    /// Builds a weekly rule, normalizing the weekday order.
    #[must_use]
    pub fn weekly(weekdays: impl IntoIterator<Item = Weekday>) -> Self {
        let mut weekdays: Vec<Weekday> = weekdays.into_iter().collect();
        weekdays.sort_by_key(Weekday::number_from_monday);
        weekdays.dedup();
        Self::Weekly(weekdays)
    }

    /// Builds a monthly rule, normalizing the day and month lists.
    #[must_use]
    pub fn monthly(
        days: impl IntoIterator<Item = i8>,
        months: Option<impl IntoIterator<Item = u8>>,
    ) -> Self {
        Self::Monthly {
            days: sorted_unique(days),
            months: months.map(sorted_unique),
        }
    }

    /// Returns the rule kind token (`y`, `d`, `w` or `m`).
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Yearly => "y",
            Self::EveryNDays(_) => "d",
            Self::Weekly(_) => "w",
            Self::Monthly { .. } => "m",
        }
    }
}

fn sorted_unique<T: Ord>(values: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut values: Vec<T> = values.into_iter().collect();
    values.sort_unstable();
    values.dedup();
    values
}

fn join<T: ToString>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())?;
        match self {
            Self::Yearly => Ok(()),
            Self::EveryNDays(n) => write!(f, " {n}"),
            Self::Weekly(weekdays) => write!(
                f,
                " {}",
                join(weekdays.iter().map(Weekday::number_from_monday))
            ),
            Self::Monthly { days, months } => {
                write!(f, " {}", join(days))?;
                if let Some(months) = months {
                    write!(f, " {}", join(months))?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for RecurrenceRule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse(s)
    }
}
