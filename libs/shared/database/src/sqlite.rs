//! SQLite connection pool shared by all cells.
//!
//! The pool is created once at startup and handed to each cell's router, so
//! there is no module-scope database handle anywhere in the workspace.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;
use tracing::{debug, info};

use shared_config::AppConfig;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database configuration error: {0}")]
    Config(String),

    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[derive(Debug, Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    /// Connect using the application configuration and run pending migrations.
    pub async fn connect(config: &AppConfig) -> Result<Self, DbError> {
        Self::from_url(&config.database_url).await
    }

    /// Connect to the given SQLite URL and run pending migrations.
    pub async fn from_url(db_url: &str) -> Result<Self, DbError> {
        if db_url.is_empty() {
            return Err(DbError::Config("Database URL is empty".to_string()));
        }

        debug!("Creating database pool for {}", db_url);

        let options = SqliteConnectOptions::from_str(db_url)?.create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3));

        // An in-memory database exists per connection, so the pool must be
        // pinned to a single connection for every handle to see the same data.
        if db_url.contains(":memory:") {
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        info!("Database pool created and migrations applied");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check database health with a trivial query.
    pub async fn is_healthy(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}
