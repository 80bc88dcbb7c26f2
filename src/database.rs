//! database (db) union structure.
use axum::extract::FromRef;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::AppState;

pub const DEFAULT_DATABASE_PATH: &str = "utility_payment_system.db";
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Custom db structure to pass to Axum.
#[derive(Clone)]
pub struct Database {
    pub sqlite: SqlitePool,
}

impl Database {
    /// Init database connections.
    pub async fn new(path: &str, pool: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new().max_connections(pool);
        let sqlite = pool.connect_with(options).await?;

        tracing::info!(%path, "sqlite connected");

        Ok(Self { sqlite })
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(app_state: &AppState) -> Database {
        app_state.db.clone()
    }
}
