//! Hosted mail API notification transport
//!
//! Posts the rendered notification to the SendGrid v3 send endpoint. One
//! attempt per submission; every failure is logged and absorbed.

use std::time::Duration;

use async_trait::async_trait;
use folio_core::contact::ports::ContactNotifier;
use folio_domain::{ContactSubmission, EmailConfig, PortfolioError, Result};
use reqwest::Client;
use serde::Serialize;
use tracing::{error, info};

use super::template::{render_contact_email, ContactEmail};

const SENDGRID_BASE_URL: &str = "https://api.sendgrid.com";

/// SendGrid-backed implementation of `ContactNotifier`
pub struct SendGridNotifier {
    client: Client,
    base_url: String,
    api_key: String,
    sender: String,
    receiver: String,
}

impl SendGridNotifier {
    /// Create a new transport from notification configuration.
    pub fn new(config: &EmailConfig) -> Result<Self> {
        let api_key = required(&config.sendgrid_api_key, "SENDGRID_API_KEY")?;
        let sender = required(&config.sender, "SENDER_EMAIL")?;
        let receiver = required(&config.receiver, "RECEIVER_EMAIL")?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.send_timeout_secs))
            .build()
            .map_err(|err| {
                PortfolioError::Notification(format!("failed to build HTTP client: {err}"))
            })?;

        Ok(Self {
            client,
            base_url: SENDGRID_BASE_URL.to_string(),
            api_key,
            sender,
            receiver,
        })
    }

    /// Point the transport at a different API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_request(&self, email: &ContactEmail, reply_to: &str) -> SendGridRequest {
        SendGridRequest {
            personalizations: vec![SendGridPersonalization {
                to: vec![SendGridAddress { email: self.receiver.clone() }],
                subject: email.subject.clone(),
            }],
            from: SendGridAddress { email: self.sender.clone() },
            reply_to: SendGridAddress { email: reply_to.to_string() },
            content: vec![SendGridContent {
                content_type: "text/html".to_string(),
                value: email.html.clone(),
            }],
        }
    }
}

#[async_trait]
impl ContactNotifier for SendGridNotifier {
    async fn send(&self, submission: &ContactSubmission) -> bool {
        let email = render_contact_email(submission);
        let request = self.build_request(&email, submission.email.trim());
        let url = format!("{}/v3/mail/send", self.base_url);

        match self.client.post(&url).bearer_auth(&self.api_key).json(&request).send().await {
            Ok(response) if response.status().is_success() => {
                info!(status = %response.status(), "contact notification accepted");
                true
            }
            Ok(response) => {
                error!(status = %response.status(), "mail API rejected the notification");
                false
            }
            Err(err) => {
                error!(error = %err, "mail API request failed");
                false
            }
        }
    }

    fn transport_name(&self) -> &'static str {
        "sendgrid"
    }
}

// =============================================================================
// Wire Types & Helper Functions
// =============================================================================

#[derive(Debug, Serialize)]
struct SendGridRequest {
    personalizations: Vec<SendGridPersonalization>,
    from: SendGridAddress,
    reply_to: SendGridAddress,
    content: Vec<SendGridContent>,
}

#[derive(Debug, Serialize)]
struct SendGridPersonalization {
    to: Vec<SendGridAddress>,
    subject: String,
}

#[derive(Debug, Serialize)]
struct SendGridAddress {
    email: String,
}

#[derive(Debug, Serialize)]
struct SendGridContent {
    #[serde(rename = "type")]
    content_type: String,
    value: String,
}

fn required(value: &Option<String>, name: &str) -> Result<String> {
    value
        .clone()
        .ok_or_else(|| PortfolioError::Config(format!("{name} is required for this transport")))
}
