use chrono::NaiveDate;

use planner_core::constants::SEARCH_DATE_FORMAT;
use planner_db::db::query::task::TaskFilter;

/// What a task listing searches for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSearch {
    All,
    /// `DD.MM.YYYY` search text.
    OnDate(NaiveDate),
    Text(String),
}

impl TaskSearch {
    /// ## Summary
    /// Interprets search text: blank lists everything, a `DD.MM.YYYY` date
    /// selects that day, anything else is a substring search.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::All;
        }
        NaiveDate::parse_from_str(text, SEARCH_DATE_FORMAT)
            .map_or_else(|_err| Self::Text(text.to_string()), Self::OnDate)
    }
}

impl From<TaskSearch> for TaskFilter {
    fn from(search: TaskSearch) -> Self {
        match search {
            TaskSearch::All => Self::All,
            TaskSearch::OnDate(date) => Self::OnDate(date),
            TaskSearch::Text(term) => Self::Text(term),
        }
    }
}
