use salvo::{Depot, Request, Response, handler, writing::Json};
use serde::{Deserialize, Serialize};

use planner_service::task::{self as task_service, TaskDraft, TaskView, parse_task_id};

use super::{bad_body, query_task_id};
use crate::app::api::today;
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

/// ## Summary
/// Create task response payload
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// ## Summary
/// Update task request payload: a draft plus the id of the task it replaces.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub draft: TaskDraft,
}

/// Empty JSON object acknowledging a change.
#[derive(Debug, Serialize)]
pub struct Ack {}

/// ## Summary
/// POST /api/task - Create a task from a JSON draft.
///
/// ## Errors
/// Returns HTTP 400 for an unreadable body or a draft failing validation
/// Returns HTTP 500 if database operations fail
#[handler]
pub async fn create_task(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match create(req, depot).await {
        Ok(id) => res.render(Json(CreatedResponse { id })),
        Err(e) => e.render(res),
    }
}

async fn create(req: &mut Request, depot: &Depot) -> AppResult<i64> {
    let draft: TaskDraft = req.parse_json().await.map_err(|e| bad_body(&e))?;
    let prepared = draft.prepare_new(today())?;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    Ok(task_service::create_task(&mut conn, prepared).await?)
}

/// ## Summary
/// GET /api/task?id= - Fetch one task.
///
/// ## Errors
/// Returns HTTP 400 for a missing or malformed id
/// Returns HTTP 404 if the task does not exist
#[handler]
pub async fn get_task(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match fetch(req, depot).await {
        Ok(view) => res.render(Json(view)),
        Err(e) => e.render(res),
    }
}

async fn fetch(req: &Request, depot: &Depot) -> AppResult<TaskView> {
    let id = query_task_id(req)?;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    let task = task_service::get_task(&mut conn, id).await?;
    Ok(task.into())
}

/// ## Summary
/// PUT /api/task - Replace a task's fields. The body carries the id.
///
/// ## Errors
/// Returns HTTP 400 for a malformed id or a draft failing validation
/// Returns HTTP 404 if the task does not exist
#[handler]
pub async fn update_task(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match update(req, depot).await {
        Ok(()) => res.render(Json(Ack {})),
        Err(e) => e.render(res),
    }
}

async fn update(req: &mut Request, depot: &Depot) -> AppResult<()> {
    let request: UpdateTaskRequest = req.parse_json().await.map_err(|e| bad_body(&e))?;
    let id = parse_task_id(&request.id)?;
    let prepared = request.draft.prepare_update()?;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    task_service::update_task(&mut conn, id, prepared).await?;
    Ok(())
}

/// ## Summary
/// DELETE /api/task?id= - Delete a task.
///
/// ## Errors
/// Returns HTTP 400 for a missing or malformed id
/// Returns HTTP 404 if the task does not exist
#[handler]
pub async fn delete_task(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match delete(req, depot).await {
        Ok(()) => res.render(Json(Ack {})),
        Err(e) => e.render(res),
    }
}

async fn delete(req: &Request, depot: &Depot) -> AppResult<()> {
    let id = query_task_id(req)?;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;
    task_service::delete_task(&mut conn, id).await?;
    Ok(())
}
