use salvo::Router;
use salvo::serve_static::StaticDir;

/// Serves the front-end from `web_dir`, with `index.html` for directories.
#[must_use]
pub fn routes(web_dir: &str) -> Router {
    tracing::debug!(web_dir, "Serving static files");
    Router::with_path("{**path}").get(
        StaticDir::new([web_dir])
            .defaults("index.html")
            .auto_list(false),
    )
}
