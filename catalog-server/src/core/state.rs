use sqlx::SqlitePool;

use crate::core::{Config, Result};
use crate::db::DbService;

/// 服务器状态 - 所有 handler 共享
///
/// Cheap to clone: the pool is reference counted.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
}

impl ServerState {
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }

    /// Open the configured database and run migrations
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_url, config.db_max_connections).await?;
        Ok(Self::new(config.clone(), db.pool))
    }

    /// State over a fresh in-memory database
    pub async fn in_memory() -> Result<Self> {
        let db = DbService::in_memory().await?;
        Ok(Self::new(Config::for_tests(), db.pool))
    }
}
