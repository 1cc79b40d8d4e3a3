use serde::Serialize;

use planner_db::model::task::Task;
use planner_rule::calendar::format_date;

/// Task as exchanged with clients: the id is decimal text and the date is
/// `YYYYMMDD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    pub id: String,
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

impl From<Task> for TaskView {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.to_string(),
            date: format_date(task.date),
            title: task.title,
            comment: task.comment,
            repeat: task.repeat,
        }
    }
}
