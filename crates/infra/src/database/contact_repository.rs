//! Postgres-backed contact message repository
//!
//! Append-only: the API inserts and counts messages, nothing ever updates
//! or deletes them. Timestamps come from the store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::contact::ports::ContactMessageRepository;
use folio_domain::{ContactMessage, ContactSubmission, PortfolioError, Result as DomainResult};

use super::manager::DbManager;

/// Postgres implementation of `ContactMessageRepository`
pub struct PgContactMessageRepository {
    db: Arc<DbManager>,
}

impl PgContactMessageRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactMessageRepository for PgContactMessageRepository {
    async fn insert(&self, submission: &ContactSubmission) -> DomainResult<ContactMessage> {
        let row: ContactMessageRow = sqlx::query_as(
            "INSERT INTO contact_messages (name, email, message) VALUES ($1, $2, $3) \
             RETURNING id, name, email, message, created_at",
        )
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.message)
        .fetch_one(self.db.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into_message())
    }
}

// =============================================================================
// Row Types & Helper Functions
// =============================================================================

#[derive(sqlx::FromRow)]
struct ContactMessageRow {
    id: i32,
    name: String,
    email: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl ContactMessageRow {
    fn into_message(self) -> ContactMessage {
        ContactMessage {
            id: self.id,
            name: self.name,
            email: self.email,
            message: self.message,
            created_at: self.created_at,
        }
    }
}

fn map_sqlx_error(err: sqlx::Error) -> PortfolioError {
    PortfolioError::Database(err.to_string())
}
