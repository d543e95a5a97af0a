//! Diagnostics types: liveness, health, and content counters

use serde::{Deserialize, Serialize};

use crate::constants::{API_VERSION, HEALTHY_STATUS, ROOT_MESSAGE};

/* -------------------------------------------------------------------------- */
/* Content Statistics */
/* -------------------------------------------------------------------------- */

/// Row counts over the public content tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioStats {
    /// Total number of projects
    pub projects: i64,

    /// Total number of skill rows (ungrouped)
    pub skills: i64,

    /// Total number of stored contact messages
    pub messages: i64,
}

/* -------------------------------------------------------------------------- */
/* Health & Liveness */
/* -------------------------------------------------------------------------- */

/// Degraded-state snapshot; reporting never fails the request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// Process-level status; always "healthy" while the process serves
    pub status: String,

    /// Whether the store answered the last probe
    pub database_connected: bool,

    /// Whether a notification transport has a complete credential set
    pub email_configured: bool,

    /// Crate version
    pub version: String,
}

impl HealthReport {
    /// Builds the report around the two probe outcomes
    pub fn new(database_connected: bool, email_configured: bool) -> Self {
        Self {
            status: HEALTHY_STATUS.to_string(),
            database_connected,
            email_configured,
            version: API_VERSION.to_string(),
        }
    }
}

/// Root liveness payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub status: String,
    pub message: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self { status: "ok".to_string(), message: ROOT_MESSAGE.to_string() }
    }
}
