//! Postgres-backed diagnostics repository
//!
//! Store reachability probe plus row counts over the three public content
//! tables.

use std::sync::Arc;

use async_trait::async_trait;
use folio_core::diagnostics::ports::StatsRepository;
use folio_domain::{PortfolioError, Result as DomainResult};

use super::manager::DbManager;

/// Postgres implementation of `StatsRepository`
pub struct PgStatsRepository {
    db: Arc<DbManager>,
}

impl PgStatsRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    async fn count(&self, query: &str) -> DomainResult<i64> {
        sqlx::query_scalar(query).fetch_one(self.db.pool()).await.map_err(map_sqlx_error)
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn ping(&self) -> DomainResult<()> {
        self.db.ping().await
    }

    async fn count_projects(&self) -> DomainResult<i64> {
        self.count("SELECT COUNT(*) FROM projects").await
    }

    async fn count_skills(&self) -> DomainResult<i64> {
        self.count("SELECT COUNT(*) FROM skills").await
    }

    async fn count_messages(&self) -> DomainResult<i64> {
        self.count("SELECT COUNT(*) FROM contact_messages").await
    }
}

fn map_sqlx_error(err: sqlx::Error) -> PortfolioError {
    PortfolioError::Database(err.to_string())
}
