//! MySQL connection pool.

use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;
use tracing::info;

use crate::DbError;

/// Type alias for the shared MySQL pool handed to the repository.
pub type DbPool = MySqlPool;

/// Connection settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DbConfig {
    fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }

    fn pool_options(&self) -> MySqlPoolOptions {
        MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
    }
}

/// Connect eagerly, so an unreachable database fails startup.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, DbError> {
    info!(
        "Connecting to mysql://{}@{}:{}/{} (max_connections={})",
        config.user, config.host, config.port, config.database, config.max_connections
    );
    let pool = config
        .pool_options()
        .connect_with(config.connect_options())
        .await?;
    Ok(pool)
}

/// Build a pool that opens connections on first use.
pub fn create_pool_lazy(config: &DbConfig) -> DbPool {
    config.pool_options().connect_lazy_with(config.connect_options())
}

/// Release every pooled connection. Called once at shutdown.
pub async fn close_pool(pool: &DbPool) {
    info!("Closing database pool");
    pool.close().await;
}
