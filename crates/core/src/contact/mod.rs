//! Contact form domain
//!
//! Validated submission storage with best-effort owner notification.

pub mod ports;
pub mod service;

pub use ports::{ContactMessageRepository, ContactNotifier};
pub use service::ContactService;
