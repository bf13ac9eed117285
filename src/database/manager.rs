use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::info;

use crate::config;

/// Errors from DatabaseManager
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Connection pool manager for the local team-calls database file.
///
/// The pool is created lazily on first use. Opening the pool also creates
/// the schema if the file is new and seeds it when empty, matching how the
/// dashboard initialized its SQLite file on boot.
pub struct DatabaseManager;

static POOL: OnceCell<SqlitePool> = OnceCell::const_new();

impl DatabaseManager {
    pub async fn pool() -> Result<&'static SqlitePool, DatabaseError> {
        POOL.get_or_try_init(|| async {
            let settings = &config::config().database;

            // WAL keeps readers from blocking the occasional write
            let options = SqliteConnectOptions::new()
                .filename(&settings.path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal);

            let pool = SqlitePoolOptions::new()
                .max_connections(settings.max_connections)
                .connect_with(options)
                .await
                .map_err(|e| {
                    DatabaseError::ConnectionError(format!(
                        "failed to open {}: {}",
                        settings.path, e
                    ))
                })?;

            super::seed::initialize(&pool).await?;

            info!("Opened team-calls database at {}", settings.path);
            Ok(pool)
        })
        .await
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check() -> Result<(), DatabaseError> {
        let pool = Self::pool().await?;
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }
}
