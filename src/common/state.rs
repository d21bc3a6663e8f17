use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;
use crate::services::ReadingService;

/// Shared per-process handles. Cloned into every request; holds no
/// request-scoped or cached data.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    pub readings: ReadingService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            readings: ReadingService::new(db.clone()),
            db,
            config: Arc::new(config),
        }
    }
}
