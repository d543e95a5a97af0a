//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Service identity
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const ROOT_MESSAGE: &str = "Portfolio API v2.0 is running";
pub const HEALTHY_STATUS: &str = "healthy";

// Contact flow
pub const CONTACT_ACK: &str =
    "Your message has been sent successfully! I'll get back to you soon.";
pub const CONTACT_SUBJECT_PREFIX: &str = "Portfolio Contact: ";

// Configuration defaults
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 5000;
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_POOL_SIZE: u32 = 5;
pub const DEFAULT_DB_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_EMAIL_TIMEOUT_SECS: u64 = 30;
