//! Port interfaces for diagnostics

use async_trait::async_trait;
use folio_domain::Result;

/// Trait for store reachability and content counters
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Cheap store round-trip; Ok means reachable
    async fn ping(&self) -> Result<()>;

    /// Total number of projects
    async fn count_projects(&self) -> Result<i64>;

    /// Total number of skill rows
    async fn count_skills(&self) -> Result<i64>;

    /// Total number of stored contact messages
    async fn count_messages(&self) -> Result<i64>;
}
