//! Server State

use crate::core::Config;
use crate::db::DbService;
use crate::services::AssistantService;
use crate::utils::AppError;

/// Shared handles for every request handler
///
/// Cheap to clone: the pool and the HTTP client are internally
/// reference-counted. There is no other in-process shared mutable state;
/// concurrent writes rely on the store's own isolation.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite store
    pub db: DbService,
    /// Outbound generative API bridge
    pub assistant: AssistantService,
}

impl ServerState {
    /// Open the database, apply migrations and wire up the services
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        let assistant = AssistantService::new(config);
        Ok(Self {
            config: config.clone(),
            db,
            assistant,
        })
    }

    /// Connection pool accessor used by the repositories
    pub fn pool(&self) -> &sqlx::SqlitePool {
        &self.db.pool
    }
}
