//! SMTP relay notification transport
//!
//! Delivers the rendered notification through a STARTTLS relay with lettre.
//! One attempt per submission; every failure is logged and absorbed.

use std::time::Duration;

use async_trait::async_trait;
use folio_core::contact::ports::ContactNotifier;
use folio_domain::{ContactSubmission, EmailConfig, PortfolioError, Result};
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};

use super::template::render_contact_email;

/// SMTP-backed implementation of `ContactNotifier`
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: String,
    receiver: String,
}

impl SmtpNotifier {
    /// Create a new transport from notification configuration.
    ///
    /// The auth username falls back to the sender address when no separate
    /// `SMTP_USERNAME` is configured.
    pub fn new(config: &EmailConfig) -> Result<Self> {
        let host = required(&config.smtp_host, "SMTP_HOST")?;
        let password = required(&config.smtp_password, "SMTP_PASSWORD")?;
        let sender = required(&config.sender, "SENDER_EMAIL")?;
        let receiver = required(&config.receiver, "RECEIVER_EMAIL")?;
        let username = config.smtp_username.clone().unwrap_or_else(|| sender.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&host)
            .map_err(|err| {
                PortfolioError::Notification(format!("failed to build SMTP transport: {err}"))
            })?
            .port(config.smtp_port)
            .credentials(Credentials::new(username, password))
            .timeout(Some(Duration::from_secs(config.send_timeout_secs)))
            .build();

        Ok(Self { transport, sender, receiver })
    }

    /// Assemble the MIME message for a submission.
    ///
    /// Multipart alternative with a plain part and the escaped HTML part;
    /// Reply-To points back at the submitter.
    fn build_message(&self, submission: &ContactSubmission) -> Result<Message> {
        let email = render_contact_email(submission);

        Message::builder()
            .from(parse_mailbox(&self.sender)?)
            .to(parse_mailbox(&self.receiver)?)
            .reply_to(parse_mailbox(submission.email.trim())?)
            .subject(email.subject)
            .multipart(MultiPart::alternative_plain_html(email.text, email.html))
            .map_err(|err| {
                PortfolioError::Notification(format!("failed to build message: {err}"))
            })
    }
}

#[async_trait]
impl ContactNotifier for SmtpNotifier {
    async fn send(&self, submission: &ContactSubmission) -> bool {
        let message = match self.build_message(submission) {
            Ok(message) => message,
            Err(err) => {
                error!(error = %err, "failed to build contact notification");
                return false;
            }
        };

        match self.transport.send(message).await {
            Ok(response) => {
                info!(code = %response.code(), "contact notification accepted by relay");
                true
            }
            Err(err) => {
                error!(error = %err, "SMTP send failed");
                false
            }
        }
    }

    fn transport_name(&self) -> &'static str {
        "smtp"
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn parse_mailbox(address: &str) -> Result<Mailbox> {
    address.parse().map_err(|err| {
        PortfolioError::Notification(format!("invalid mail address {address:?}: {err}"))
    })
}

fn required(value: &Option<String>, name: &str) -> Result<String> {
    value
        .clone()
        .ok_or_else(|| PortfolioError::Config(format!("{name} is required for this transport")))
}
