//! Contact form service - core business logic

use std::sync::Arc;

use folio_domain::{ContactReceipt, ContactSubmission, Result};
use tracing::{info, warn};

use super::ports::{ContactMessageRepository, ContactNotifier};

/// Contact submission service
///
/// Persistence is the contract; notification is best-effort. A submission
/// that reaches the store is acknowledged identically whether or not the
/// notification goes out.
pub struct ContactService {
    messages: Arc<dyn ContactMessageRepository>,
    notifier: Option<Arc<dyn ContactNotifier>>,
}

impl ContactService {
    /// Create a new contact service without a notification transport
    pub fn new(messages: Arc<dyn ContactMessageRepository>) -> Self {
        Self { messages, notifier: None }
    }

    /// Attach a notification transport
    pub fn with_notifier(mut self, notifier: Arc<dyn ContactNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Validate, persist, then notify
    ///
    /// Validation failures reject the request before anything is stored.
    /// A store failure propagates. A notification failure is logged and
    /// swallowed; the caller still gets the fixed acknowledgement.
    pub async fn submit(&self, submission: ContactSubmission) -> Result<ContactReceipt> {
        submission.validate()?;

        let stored = self.messages.insert(&submission).await?;
        info!(id = stored.id, "Stored contact message");

        if let Some(notifier) = &self.notifier {
            let delivered = notifier.send(&submission).await;
            if !delivered {
                warn!(
                    transport = notifier.transport_name(),
                    id = stored.id,
                    "Contact notification was not delivered"
                );
            }
        }

        Ok(ContactReceipt::acknowledged())
    }
}
