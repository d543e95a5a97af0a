//! # Folio Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Postgres repository implementations over a bounded connection pool
//! - Notification transports (hosted API and SMTP relay)
//! - Environment configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `folio-core`
//! - Depends on `folio-domain` and `folio-core`
//! - Contains all "impure" code (I/O, network)

pub mod config;
pub mod database;
pub mod email;

// Re-export commonly used items
pub use database::*;
pub use email::*;
