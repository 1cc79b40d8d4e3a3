use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use planner_core::error::CoreError;
use planner_db::db::DbProvider;

/// Provider handle shared by every request.
pub type SharedDbProvider = Arc<dyn DbProvider + Send + Sync>;

/// Hoop placing the database provider in the depot of each request.
pub struct DbProviderHandler {
    provider: SharedDbProvider,
}

impl DbProviderHandler {
    #[must_use]
    pub fn new(provider: impl DbProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }
}

#[async_trait]
impl salvo::Handler for DbProviderHandler {
    #[tracing::instrument(skip_all)]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.provider));
    }
}

/// ## Summary
/// Retrieves the database provider from the depot.
///
/// ## Errors
/// Returns `CoreError::InvariantViolation` when the request did not pass
/// through a [`DbProviderHandler`].
pub fn get_db_from_depot(depot: &salvo::Depot) -> AppResult<SharedDbProvider> {
    depot
        .obtain::<SharedDbProvider>()
        .cloned()
        .map_err(|_err| {
            CoreError::InvariantViolation("Database provider not found in depot").into()
        })
}
