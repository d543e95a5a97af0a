//! Notification transports for contact submissions
//!
//! Two interchangeable transports implement the core `ContactNotifier`
//! port: a hosted mail API and an SMTP relay. Selection happens once at
//! startup; handlers never know which one runs.

pub mod sendgrid;
pub mod smtp;
pub mod template;

use std::sync::Arc;

use folio_core::contact::ports::ContactNotifier;
use folio_domain::EmailConfig;
use tracing::{info, warn};

pub use sendgrid::SendGridNotifier;
pub use smtp::SmtpNotifier;
pub use template::{render_contact_email, ContactEmail};

/// Pick the notification transport for this process, if any.
///
/// A complete hosted-API credential set takes precedence over a complete
/// SMTP set. A transport that fails to initialise is skipped with a
/// warning rather than aborting startup; notification remains best-effort
/// end to end.
pub fn build_notifier(config: &EmailConfig) -> Option<Arc<dyn ContactNotifier>> {
    if config.sendgrid_ready() {
        match SendGridNotifier::new(config) {
            Ok(notifier) => {
                info!(transport = notifier.transport_name(), "contact notifications enabled");
                return Some(Arc::new(notifier));
            }
            Err(err) => {
                warn!(error = %err, "hosted notification transport failed to initialise");
            }
        }
    }

    if config.smtp_ready() {
        match SmtpNotifier::new(config) {
            Ok(notifier) => {
                info!(transport = notifier.transport_name(), "contact notifications enabled");
                return Some(Arc::new(notifier));
            }
            Err(err) => {
                warn!(error = %err, "SMTP notification transport failed to initialise");
            }
        }
    }

    info!("contact notifications disabled; no transport configured");
    None
}
