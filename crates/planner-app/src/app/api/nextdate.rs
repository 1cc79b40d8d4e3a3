//! Rule preview for the task form.

use salvo::prelude::Text;
use salvo::{Request, Response, Router, handler};

use planner_rule::calendar::parse_date;
use planner_rule::next_date;

use super::NEXT_DATE_ROUTE_COMPONENT;

/// ## Summary
/// GET /api/nextdate?now=&date=&repeat= - the next occurrence as `YYYYMMDD`.
///
/// Any failure (bad `now`, bad anchor, bad rule, no occurrence) answers an
/// empty body with status 200; the cause is only logged.
#[handler]
async fn next_date_handler(req: &mut Request, res: &mut Response) {
    let now = req.query::<String>("now").unwrap_or_default();
    let date = req.query::<String>("date").unwrap_or_default();
    let repeat = req.query::<String>("repeat").unwrap_or_default();

    let body = if let Some(reference) = parse_date(&now) {
        next_date(reference, &date, &repeat).unwrap_or_else(|e| {
            tracing::warn!(error = %e, %date, %repeat, "Next date computation failed");
            String::new()
        })
    } else {
        tracing::warn!(%now, "Invalid reference date");
        String::new()
    };

    res.render(Text::Plain(body));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(NEXT_DATE_ROUTE_COMPONENT).get(next_date_handler)
}

#[cfg(test)]
#[path = "nextdate_tests.rs"]
mod tests;
