//! Database connection manager backed by a bounded Postgres pool.

use std::time::Duration;

use folio_domain::{DatabaseConfig, PortfolioError, Result};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use tracing::info;

/// Database manager that wraps a lazily-connected [`PgPool`].
///
/// Connections are opened on first use, so the process starts and serves
/// health probes even while the store is down. Every query checks a
/// connection out of the pool for its own duration only; the acquire
/// timeout bounds how long a request can wait for one.
pub struct DbManager {
    pool: PgPool,
}

impl DbManager {
    /// Create a new manager from store configuration.
    pub fn new(config: &DatabaseConfig) -> Self {
        let mut options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .database(&config.database)
            .ssl_mode(if config.require_tls { PgSslMode::Require } else { PgSslMode::Prefer });

        if !config.password.is_empty() {
            options = options.password(&config.password);
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.pool_size.max(1))
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect_lazy_with(options);

        info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            max_connections = config.pool_size.max(1),
            "connection pool initialised"
        );

        Self { pool }
    }

    /// Borrow the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Perform a health check to verify store connectivity.
    ///
    /// Executes a trivial query through the pool to verify the store is
    /// reachable and responding.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await.map_err(map_sqlx_error)?;
        Ok(())
    }
}

fn map_sqlx_error(err: sqlx::Error) -> PortfolioError {
    PortfolioError::Database(err.to_string())
}
