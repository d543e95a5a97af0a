//! Contact form types and input validation

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::CONTACT_ACK;
use crate::errors::{PortfolioError, Result};

/// Pragmatic address check: local@domain.tld, no whitespace, dotted domain.
/// Full RFC 5322 parsing is deliberately out of scope.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("EMAIL_RE should compile - this is a bug")
});

/// Incoming contact form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Rejects payloads that must never reach the store.
    ///
    /// Name and message must be non-empty after trimming; the email must
    /// look like a deliverable address.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PortfolioError::Validation("Name must not be empty".to_string()));
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(PortfolioError::Validation("Invalid email address".to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(PortfolioError::Validation("Message must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Stored contact message, timestamp assigned by the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Response returned once a submission is durably stored
///
/// Delivery state of the notification is deliberately not reflected here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub success: bool,
    pub message: String,
}

impl ContactReceipt {
    /// The fixed acknowledgement for a stored submission
    pub fn acknowledged() -> Self {
        Self { success: true, message: CONTACT_ACK.to_string() }
    }
}
