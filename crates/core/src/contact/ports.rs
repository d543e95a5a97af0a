//! Port interfaces for contact form handling
//!
//! These traits define the boundaries between core business logic
//! and the store/notification adapters.

use async_trait::async_trait;
use folio_domain::{ContactMessage, ContactSubmission, Result};

/// Trait for append-only contact message persistence
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// Insert a validated submission and return the stored row
    async fn insert(&self, submission: &ContactSubmission) -> Result<ContactMessage>;
}

/// Trait for best-effort owner notification
///
/// Implementations make exactly one delivery attempt and absorb every
/// failure: the outcome is a flag, never an error.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    /// Attempt to deliver a notification for the submission
    async fn send(&self, submission: &ContactSubmission) -> bool;

    /// Short transport label for log lines
    fn transport_name(&self) -> &'static str;
}
