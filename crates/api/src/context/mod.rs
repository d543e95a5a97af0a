//! Application context - dependency injection container

use std::sync::Arc;

use folio_core::{ContactService, ContentService, DiagnosticsService};
use folio_domain::Config;
use folio_infra::database::{
    DbManager, PgContactMessageRepository, PgContentRepository, PgStatsRepository,
};
use folio_infra::email;

/// Application context - holds configuration and the wired services
pub struct AppContext {
    pub config: Config,
    pub content: ContentService,
    pub contact: ContactService,
    pub diagnostics: DiagnosticsService,
}

impl AppContext {
    /// Wire the full service graph from configuration.
    ///
    /// The connection pool is lazy, so construction succeeds even when the
    /// database is unreachable; `/api/health` reports the difference.
    pub fn new(config: Config) -> Self {
        let db = Arc::new(DbManager::new(&config.database));

        let content = ContentService::new(Arc::new(PgContentRepository::new(Arc::clone(&db))));

        let mut contact =
            ContactService::new(Arc::new(PgContactMessageRepository::new(Arc::clone(&db))));
        if let Some(notifier) = email::build_notifier(&config.email) {
            contact = contact.with_notifier(notifier);
        }

        let diagnostics = DiagnosticsService::new(
            Arc::new(PgStatsRepository::new(Arc::clone(&db))),
            config.email.is_configured(),
        );

        Self { config, content, contact, diagnostics }
    }
}
