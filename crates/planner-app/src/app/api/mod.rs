mod app_specific;
mod nextdate;
mod task;

use chrono::NaiveDate;
use salvo::Router;

// Re-export route constants from core
pub use planner_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, NEXT_DATE_ROUTE, NEXT_DATE_ROUTE_COMPONENT,
    TASK_ROUTE, TASK_ROUTE_COMPONENT, TASKS_ROUTE, TASKS_ROUTE_COMPONENT,
};

/// ## Summary
/// Constructs the API router.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(nextdate::routes())
        .push(task::routes())
}

/// Server-local calendar date that task dates are resolved against.
fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
