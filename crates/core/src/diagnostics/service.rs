//! Diagnostics service - core business logic

use std::sync::Arc;

use folio_domain::{HealthReport, PortfolioStats, Result, ServiceInfo};
use tracing::warn;

use super::ports::StatsRepository;

/// Liveness, health, and stats service
pub struct DiagnosticsService {
    stats: Arc<dyn StatsRepository>,
    email_configured: bool,
}

impl DiagnosticsService {
    /// Create a new diagnostics service
    pub fn new(stats: Arc<dyn StatsRepository>, email_configured: bool) -> Self {
        Self { stats, email_configured }
    }

    /// Static liveness payload for the root route
    pub fn info(&self) -> ServiceInfo {
        ServiceInfo::default()
    }

    /// Degraded-state health report
    ///
    /// A failed store probe degrades `database_connected`; it never fails
    /// the request.
    pub async fn health(&self) -> HealthReport {
        let database_connected = match self.stats.ping().await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "Store probe failed during health check");
                false
            }
        };

        HealthReport::new(database_connected, self.email_configured)
    }

    /// Row counts over the public content tables
    pub async fn stats(&self) -> Result<PortfolioStats> {
        let projects = self.stats.count_projects().await?;
        let skills = self.stats.count_skills().await?;
        let messages = self.stats.count_messages().await?;

        Ok(PortfolioStats { projects, skills, messages })
    }
}
