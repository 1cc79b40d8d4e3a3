use salvo::{Depot, Request, Response, handler, writing::Json};
use serde::Serialize;

use planner_service::task::{self as task_service, TaskSearch, TaskView};

use crate::config::get_config_from_depot;
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

/// ## Summary
/// Task list response payload. `tasks` is always an array.
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskView>,
}

/// ## Summary
/// GET /api/tasks?search= - List upcoming tasks, optionally filtered by a
/// `DD.MM.YYYY` date or a title/comment substring.
///
/// ## Errors
/// Returns HTTP 500 if database operations fail
#[handler]
pub async fn list_tasks(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match list(req, depot).await {
        Ok(tasks) => res.render(Json(tasks)),
        Err(e) => e.render(res),
    }
}

async fn list(req: &Request, depot: &Depot) -> AppResult<TaskListResponse> {
    let search = TaskSearch::parse(&req.query::<String>("search").unwrap_or_default());
    let limit = get_config_from_depot(depot)?.tasks.list_limit;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    let tasks = task_service::list_tasks(&mut conn, search, limit).await?;

    Ok(TaskListResponse {
        tasks: tasks.into_iter().map(TaskView::from).collect(),
    })
}
