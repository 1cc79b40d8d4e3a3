pub mod api;
pub mod web;

use salvo::Router;

/// ## Summary
/// Builds the full router: the JSON API under `/api`, and the front-end
/// files from `web_dir` for every other path.
#[must_use]
pub fn routes(web_dir: &str) -> Router {
    Router::new().push(api::routes()).push(web::routes(web_dir))
}
