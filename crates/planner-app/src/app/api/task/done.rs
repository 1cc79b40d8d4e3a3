use salvo::{Depot, Request, Response, handler, writing::Json};

use planner_service::task::{self as task_service, CompletionOutcome};

use super::item::Ack;
use super::query_task_id;
use crate::app::api::today;
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

/// ## Summary
/// POST /api/task/done?id= - Mark a task done.
///
/// A one-off task is deleted; a recurring task moves to its next occurrence
/// after today.
///
/// ## Errors
/// Returns HTTP 400 for a malformed id or a stored rule with no further date
/// Returns HTTP 404 if the task does not exist
#[handler]
pub async fn complete_task(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match complete(req, depot).await {
        Ok(outcome) => {
            tracing::debug!(?outcome, "Task done");
            res.render(Json(Ack {}));
        }
        Err(e) => e.render(res),
    }
}

async fn complete(req: &Request, depot: &Depot) -> AppResult<CompletionOutcome> {
    let id = query_task_id(req)?;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(task_service::complete_task(&mut conn, id, today()).await?)
}
