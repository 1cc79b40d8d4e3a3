//! Task CRUD, completion and listing.

mod done;
mod item;
mod list;

use salvo::Router;
use salvo::{Request, http::ParseError};

use planner_service::task::parse_task_id;

use super::{TASK_ROUTE_COMPONENT, TASKS_ROUTE_COMPONENT};
use crate::error::{AppError, AppResult};

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(
            Router::with_path(TASK_ROUTE_COMPONENT)
                .get(item::get_task)
                .post(item::create_task)
                .put(item::update_task)
                .delete(item::delete_task)
                .push(Router::with_path("done").post(done::complete_task)),
        )
        .push(Router::with_path(TASKS_ROUTE_COMPONENT).get(list::list_tasks))
}

/// Reads and parses the `id` query parameter.
fn query_task_id(req: &Request) -> AppResult<i64> {
    let id = req.query::<String>("id").unwrap_or_default();
    Ok(parse_task_id(&id)?)
}

fn bad_body(error: &ParseError) -> AppError {
    AppError::BadRequest(error.to_string())
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
