//! Task workflows against the store.

use chrono::NaiveDate;
use diesel_async::AsyncConnection;
use diesel_async::scoped_futures::ScopedFutureExt;

use planner_db::db::connection::DbConnection;
use planner_db::db::query::task as task_query;
use planner_db::model::task::{NewTask, Task, TaskChanges};
use planner_rule::{next_occurrence, parse};

use super::draft::PreparedTask;
use super::search::TaskSearch;
use crate::error::{ServiceError, ServiceResult};

/// What completing a task did to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// One-off task, removed.
    Deleted,
    /// Recurring task, moved to its next occurrence.
    Rescheduled(NaiveDate),
}

/// ## Summary
/// Decides what completing `task` on `today` does, without touching the store.
///
/// ## Errors
/// Returns `ServiceError::RuleError` when the stored rule is invalid or has no
/// further occurrence.
pub fn completion_outcome(task: &Task, today: NaiveDate) -> ServiceResult<CompletionOutcome> {
    if !task.is_recurring() {
        return Ok(CompletionOutcome::Deleted);
    }
    let rule = parse(&task.repeat)?;
    let next = next_occurrence(today, task.date, &rule)?;
    Ok(CompletionOutcome::Rescheduled(next))
}

fn not_found(id: i64) -> ServiceError {
    ServiceError::NotFound(format!("task {id}"))
}

/// ## Summary
/// Stores a prepared draft as a new task and returns its id.
///
/// ## Errors
/// Returns a database error if the insert fails.
#[tracing::instrument(skip(conn, task), fields(title = %task.title))]
pub async fn create_task(conn: &mut DbConnection<'_>, task: PreparedTask<'_>) -> ServiceResult<i64> {
    let new_task = NewTask {
        date: task.date,
        title: task.title,
        comment: task.comment,
        repeat: task.repeat,
    };
    let id = task_query::create_task(conn, &new_task).await?;

    tracing::info!(id, date = %task.date, "Task created");
    Ok(id)
}

/// ## Summary
/// Loads one task.
///
/// ## Errors
/// Returns `ServiceError::NotFound` when no task has the id.
pub async fn get_task(conn: &mut DbConnection<'_>, id: i64) -> ServiceResult<Task> {
    task_query::get_task(conn, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// ## Summary
/// Lists tasks matching `search`, earliest first, at most `limit`.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_tasks(
    conn: &mut DbConnection<'_>,
    search: TaskSearch,
    limit: u16,
) -> ServiceResult<Vec<Task>> {
    tracing::debug!(?search, limit, "Listing tasks");
    let tasks = task_query::list_tasks(conn, &search.into(), i64::from(limit)).await?;
    Ok(tasks)
}

/// ## Summary
/// Replaces a task's fields with a prepared draft.
///
/// ## Errors
/// Returns `ServiceError::NotFound` when no task has the id.
#[tracing::instrument(skip(conn, task))]
pub async fn update_task(
    conn: &mut DbConnection<'_>,
    id: i64,
    task: PreparedTask<'_>,
) -> ServiceResult<()> {
    let changes = TaskChanges {
        date: task.date,
        title: task.title,
        comment: task.comment,
        repeat: task.repeat,
    };
    if task_query::update_task(conn, id, &changes).await? == 0 {
        return Err(not_found(id));
    }

    tracing::info!(date = %task.date, "Task updated");
    Ok(())
}

/// ## Summary
/// Deletes a task.
///
/// ## Errors
/// Returns `ServiceError::NotFound` when no task has the id.
#[tracing::instrument(skip(conn))]
pub async fn delete_task(conn: &mut DbConnection<'_>, id: i64) -> ServiceResult<()> {
    if task_query::delete_task(conn, id).await? == 0 {
        return Err(not_found(id));
    }
    tracing::info!("Task deleted");
    Ok(())
}

/// ## Summary
/// Marks a task done.
///
/// A one-off task is deleted. A recurring task moves to the first occurrence
/// of its rule after `today`, counted from its current date.
///
/// ## Side Effects
/// Runs in one transaction holding the task's row lock, so concurrent
/// completions of the same task apply one after the other.
///
/// ## Errors
/// - `ServiceError::NotFound` when no task has the id.
/// - `ServiceError::RuleError` when the stored rule is invalid or has no
///   further occurrence.
#[tracing::instrument(skip(conn))]
pub async fn complete_task(
    conn: &mut DbConnection<'_>,
    id: i64,
    today: NaiveDate,
) -> ServiceResult<CompletionOutcome> {
    let outcome = conn
        .transaction::<_, ServiceError, _>(move |tx| {
            async move {
                let task = task_query::get_task_for_update(tx, id)
                    .await?
                    .ok_or_else(|| not_found(id))?;

                let outcome = completion_outcome(&task, today)?;
                match outcome {
                    CompletionOutcome::Deleted => task_query::delete_task(tx, id).await?,
                    CompletionOutcome::Rescheduled(next) => {
                        task_query::update_task_date(tx, id, next).await?
                    }
                };
                Ok(outcome)
            }
            .scope_boxed()
        })
        .await?;

    tracing::info!(?outcome, "Task completed");
    Ok(outcome)
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
