use std::str::FromStr;

use sqlx::{
    Sqlite, SqlitePool,
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::info;

use crate::config::app_config::AppConfig;

/// Process-wide SQLite pool. Created once at startup and closed on shutdown.
#[derive(Clone, Debug)]
pub struct SqliteConnectionProvider {
    pool: SqlitePool,
}

impl SqliteConnectionProvider {
    pub async fn connect(config: &AppConfig) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(config.database_create_if_missing);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect_with(options)
            .await?;

        info!(
            database_url = %config.database_url,
            max_connections = config.database_max_connections,
            "sqlite connection pool ready"
        );

        Ok(Self { pool })
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>, sqlx::Error> {
        self.pool.acquire().await
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("sqlite connection pool closed");
    }
}
