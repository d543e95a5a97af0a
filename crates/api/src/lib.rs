//! # Folio API
//!
//! HTTP application layer - routes and the binary entry point.
//!
//! This crate contains:
//! - axum route handlers (frontend → backend bridge)
//! - Application context (dependency injection)
//! - HTTP error mapping and CORS policy
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Serves the portfolio frontend over JSON

pub mod context;
pub mod error;
pub mod routes;

// Re-export for convenience
pub use context::AppContext;
pub use error::ApiError;
pub use routes::router;
