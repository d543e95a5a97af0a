//! Configuration loader
//!
//! Loads application configuration from environment variables. Every
//! variable has a default except the notification credentials, which are
//! genuinely optional: without them the contact flow still stores
//! submissions and simply skips notification.
//!
//! ## Environment Variables
//! - `HTTP_HOST`: Bind address (default `0.0.0.0`)
//! - `HTTP_PORT`: Bind port (default `5000`)
//! - `CORS_ALLOWED_ORIGINS`: Comma-separated origin allow-list
//! - `DB_HOST`: Store host (default `localhost`)
//! - `DB_PORT`: Store port (default `5432`)
//! - `DB_USER`: Store user (default `postgres`)
//! - `DB_PASSWORD`: Store password (default empty)
//! - `DB_NAME`: Database name (default `portfolio_db`)
//! - `DB_REQUIRE_TLS`: Require TLS on store connections (default `false`)
//! - `DB_POOL_SIZE`: Connection pool upper bound (default `5`)
//! - `DB_CONNECT_TIMEOUT_SECS`: Pool acquire timeout (default `10`)
//! - `SENDGRID_API_KEY`: Hosted mail API credential
//! - `SENDER_EMAIL` / `RECEIVER_EMAIL`: Notification addresses
//! - `SMTP_HOST` / `SMTP_PORT` / `SMTP_USERNAME` / `SMTP_PASSWORD`: Relay
//! - `EMAIL_TIMEOUT_SECS`: Per-send timeout (default `30`)

use std::fmt::Display;
use std::str::FromStr;

use folio_domain::constants::{
    DEFAULT_DB_CONNECT_TIMEOUT_SECS, DEFAULT_DB_POOL_SIZE, DEFAULT_DB_PORT,
    DEFAULT_EMAIL_TIMEOUT_SECS, DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT, DEFAULT_SMTP_PORT,
};
use folio_domain::{Config, DatabaseConfig, EmailConfig, PortfolioError, Result, ServerConfig};

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173,http://localhost:3000";

/// Load configuration from environment variables
///
/// # Errors
/// Returns `PortfolioError::Config` only when a set variable fails to
/// parse (port, pool size, timeout, TLS flag). Unset variables fall back
/// to defaults.
pub fn load_from_env() -> Result<Config> {
    let server = ServerConfig {
        host: env_or("HTTP_HOST", DEFAULT_HTTP_HOST),
        port: env_parse("HTTP_PORT", DEFAULT_HTTP_PORT)?,
        allowed_origins: split_origins(&env_or("CORS_ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS)),
    };

    let database = DatabaseConfig {
        host: env_or("DB_HOST", "localhost"),
        port: env_parse("DB_PORT", DEFAULT_DB_PORT)?,
        user: env_or("DB_USER", "postgres"),
        password: std::env::var("DB_PASSWORD").unwrap_or_default(),
        database: env_or("DB_NAME", "portfolio_db"),
        require_tls: env_bool("DB_REQUIRE_TLS", false),
        pool_size: env_parse("DB_POOL_SIZE", DEFAULT_DB_POOL_SIZE)?,
        connect_timeout_secs: env_parse("DB_CONNECT_TIMEOUT_SECS", DEFAULT_DB_CONNECT_TIMEOUT_SECS)?,
    };

    let email = EmailConfig {
        sender: env_opt("SENDER_EMAIL"),
        receiver: env_opt("RECEIVER_EMAIL"),
        sendgrid_api_key: env_opt("SENDGRID_API_KEY"),
        smtp_host: env_opt("SMTP_HOST"),
        smtp_port: env_parse("SMTP_PORT", DEFAULT_SMTP_PORT)?,
        smtp_username: env_opt("SMTP_USERNAME"),
        smtp_password: env_opt("SMTP_PASSWORD"),
        send_timeout_secs: env_parse("EMAIL_TIMEOUT_SECS", DEFAULT_EMAIL_TIMEOUT_SECS)?,
    };

    Ok(Config { server, database, email })
}

/// Read a variable with a default for the unset case
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read an optional variable; empty strings count as absent
///
/// Deployment templates often ship commented-out or blanked credentials,
/// so `FOO=` must behave exactly like an unset `FOO`.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse a variable into `T`, with a default for the unset case
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|err| PortfolioError::Config(format!("Invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off`
/// (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

/// Split a comma-separated origin list, dropping empty entries
fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}
