use std::sync::Arc;

use planner_app::app::routes;
use planner_app::config::{ConfigHandler, Settings};
use planner_app::db_handler::DbProviderHandler;
use planner_core::config::load_config;
use planner_db::db::connection::create_pool;
use planner_db::db::migrations::run_migrations;
use salvo::conn::TcpListener;
use salvo::{Listener, Router};
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Installs the global subscriber at `debug` until the configured level is known.
fn init_tracing() -> FilterHandle {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    filter_handle
}

fn apply_log_level(handle: &FilterHandle, settings: &Settings) {
    let level = settings.logging.level.as_str();
    match EnvFilter::try_new(level) {
        Ok(filter) => {
            if let Err(e) = handle.modify(|current| *current = filter) {
                tracing::warn!(error = %e, "Failed to update log filter from config");
            }
        }
        Err(e) => tracing::warn!(%level, error = %e, "Invalid log level in config, keeping debug"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter_handle = init_tracing();

    tracing::info!("Starting planner");

    let settings = load_config()?;
    tracing::info!(config = ?settings, "Configuration loaded");
    apply_log_level(&filter_handle, &settings);

    run_migrations(&settings.database.url).await?;
    let pool = create_pool(&settings.database).await?;

    let bind_addr = settings.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let web_dir = settings.server.web_dir.clone();
    let router = Router::new()
        .hoop(DbProviderHandler::new(pool))
        .hoop(ConfigHandler {
            settings: Arc::new(settings),
        })
        .push(routes(&web_dir));

    tracing::info!(%bind_addr, "Server listening");
    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
