//! Task queries.

use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::PgTextExpressionMethods;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::scheduler;
use crate::model::task::{NewTask, Task, TaskChanges};

/// Which tasks a listing returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    /// Tasks scheduled exactly on the date.
    OnDate(chrono::NaiveDate),
    /// Tasks whose title or comment contains the term, ignoring case.
    Text(String),
}

/// Escapes `LIKE` metacharacters and wraps the term for substring matching.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// ## Summary
/// Returns a query selecting the tasks matched by `filter`.
#[must_use]
pub fn filtered(filter: &TaskFilter) -> scheduler::BoxedQuery<'static, Pg> {
    let query = scheduler::table.into_boxed();
    match filter {
        TaskFilter::All => query,
        TaskFilter::OnDate(date) => query.filter(scheduler::date.eq(*date)),
        TaskFilter::Text(term) => {
            let pattern = contains_pattern(term);
            query.filter(
                scheduler::title
                    .ilike(pattern.clone())
                    .or(scheduler::comment.ilike(pattern)),
            )
        }
    }
}

/// ## Summary
/// Inserts a task and returns its assigned id.
///
/// ## Errors
/// Returns a database error if the insert fails.
pub async fn create_task(conn: &mut DbConnection<'_>, task: &NewTask<'_>) -> QueryResult<i64> {
    diesel::insert_into(scheduler::table)
        .values(task)
        .returning(scheduler::id)
        .get_result(conn)
        .await
}

/// ## Summary
/// Loads a task by id.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn get_task(conn: &mut DbConnection<'_>, id: i64) -> QueryResult<Option<Task>> {
    scheduler::table
        .find(id)
        .select(Task::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Loads a task by id and locks its row until the surrounding transaction
/// ends.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn get_task_for_update(
    conn: &mut DbConnection<'_>,
    id: i64,
) -> QueryResult<Option<Task>> {
    scheduler::table
        .find(id)
        .select(Task::as_select())
        .for_update()
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Lists tasks matched by `filter`, earliest date first, at most `limit`.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_tasks(
    conn: &mut DbConnection<'_>,
    filter: &TaskFilter,
    limit: i64,
) -> QueryResult<Vec<Task>> {
    filtered(filter)
        .order((scheduler::date.asc(), scheduler::id.asc()))
        .limit(limit)
        .select(Task::as_select())
        .load(conn)
        .await
}

/// ## Summary
/// Replaces the editable fields of a task.
///
/// Returns the number of rows affected (0 when the task does not exist).
///
/// ## Errors
/// Returns a database error if the update fails.
pub async fn update_task(
    conn: &mut DbConnection<'_>,
    id: i64,
    changes: &TaskChanges<'_>,
) -> QueryResult<usize> {
    diesel::update(scheduler::table.find(id))
        .set(changes)
        .execute(conn)
        .await
}

/// ## Summary
/// Moves a task to a new date.
///
/// ## Errors
/// Returns a database error if the update fails.
pub async fn update_task_date(
    conn: &mut DbConnection<'_>,
    id: i64,
    date: chrono::NaiveDate,
) -> QueryResult<usize> {
    diesel::update(scheduler::table.find(id))
        .set(scheduler::date.eq(date))
        .execute(conn)
        .await
}

/// ## Summary
/// Deletes a task, returning the number of rows removed.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub async fn delete_task(conn: &mut DbConnection<'_>, id: i64) -> QueryResult<usize> {
    diesel::delete(scheduler::table.find(id))
        .execute(conn)
        .await
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
