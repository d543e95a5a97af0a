//! Application configuration structures
//!
//! Built once at startup from the environment (see the infra loader) and
//! passed explicitly to the composition root. Nothing reads the environment
//! after startup.

use crate::constants::{
    DEFAULT_DB_CONNECT_TIMEOUT_SECS, DEFAULT_DB_POOL_SIZE, DEFAULT_DB_PORT,
    DEFAULT_EMAIL_TIMEOUT_SECS, DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT, DEFAULT_SMTP_PORT,
};

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub email: EmailConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Browser origins allowed to call the API with credentials
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Relational store configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Require TLS on store connections instead of opportunistic TLS
    pub require_tls: bool,
    /// Upper bound on concurrently open connections
    pub pool_size: u32,
    /// How long a request may wait for a pooled connection
    pub connect_timeout_secs: u64,
}

/// Notification transport configuration
///
/// Two transports are supported; which one runs is decided once at startup.
/// A transport is usable only when its full credential set is present.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Address notifications are sent from (both transports)
    pub sender: Option<String>,
    /// Address notifications are delivered to (both transports)
    pub receiver: Option<String>,
    /// Hosted-API transport credential
    pub sendgrid_api_key: Option<String>,
    /// SMTP relay host
    pub smtp_host: Option<String>,
    /// SMTP relay port
    pub smtp_port: u16,
    /// SMTP auth user; falls back to the sender address when unset
    pub smtp_username: Option<String>,
    /// SMTP auth password
    pub smtp_password: Option<String>,
    /// Per-send timeout
    pub send_timeout_secs: u64,
}

impl EmailConfig {
    /// True when the hosted-API credential set is complete
    pub fn sendgrid_ready(&self) -> bool {
        self.sendgrid_api_key.is_some() && self.sender.is_some() && self.receiver.is_some()
    }

    /// True when the SMTP credential set is complete
    pub fn smtp_ready(&self) -> bool {
        self.smtp_host.is_some()
            && self.smtp_password.is_some()
            && self.sender.is_some()
            && self.receiver.is_some()
    }

    /// True when at least one transport can run
    pub fn is_configured(&self) -> bool {
        self.sendgrid_ready() || self.smtp_ready()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_HTTP_HOST.to_string(),
                port: DEFAULT_HTTP_PORT,
                allowed_origins: vec![
                    "http://localhost:5173".to_string(),
                    "http://localhost:3000".to_string(),
                ],
            },
            database: DatabaseConfig {
                host: "localhost".to_string(),
                port: DEFAULT_DB_PORT,
                user: "postgres".to_string(),
                password: String::new(),
                database: "portfolio_db".to_string(),
                require_tls: false,
                pool_size: DEFAULT_DB_POOL_SIZE,
                connect_timeout_secs: DEFAULT_DB_CONNECT_TIMEOUT_SECS,
            },
            email: EmailConfig {
                sender: None,
                receiver: None,
                sendgrid_api_key: None,
                smtp_host: None,
                smtp_port: DEFAULT_SMTP_PORT,
                smtp_username: None,
                smtp_password: None,
                send_timeout_secs: DEFAULT_EMAIL_TIMEOUT_SECS,
            },
        }
    }
}
