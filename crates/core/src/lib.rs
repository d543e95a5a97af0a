//! # Folio Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits)
//! - Use cases and services
//!
//! ## Architecture Principles
//! - Only depends on `folio-domain`
//! - No database, HTTP, or email transport code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod contact;
pub mod content;
pub mod diagnostics;

// Re-export specific items to avoid ambiguity
pub use contact::ports::{ContactMessageRepository, ContactNotifier};
pub use contact::ContactService;
pub use content::ports::ContentRepository;
pub use content::ContentService;
pub use diagnostics::ports::StatsRepository;
pub use diagnostics::DiagnosticsService;
