use diesel::{pg::Pg, prelude::*};

use crate::db::schema;

/// Stored task row.
///
/// An empty `repeat` means the task does not recur.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::scheduler)]
#[diesel(check_for_backend(Pg))]
pub struct Task {
    pub id: i64,
    pub date: chrono::NaiveDate,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

impl Task {
    /// Returns `true` when the task carries a recurrence rule.
    #[must_use]
    pub fn is_recurring(&self) -> bool {
        !self.repeat.is_empty()
    }
}

/// Insert struct for creating new tasks
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::scheduler)]
pub struct NewTask<'a> {
    pub date: chrono::NaiveDate,
    pub title: &'a str,
    pub comment: &'a str,
    pub repeat: &'a str,
}

/// Full replacement of a task's editable fields.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = schema::scheduler)]
pub struct TaskChanges<'a> {
    pub date: chrono::NaiveDate,
    pub title: &'a str,
    pub comment: &'a str,
    pub repeat: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recurring_depends_on_rule_text() {
        let mut task = Task {
            id: 1,
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 26).unwrap(),
            title: "Water plants".to_string(),
            comment: String::new(),
            repeat: String::new(),
        };
        assert!(!task.is_recurring());

        task.repeat = "d 3".to_string();
        assert!(task.is_recurring());
    }
}
