//! Read-side content domain
//!
//! Profile, grouped skills, filtered projects, and work experience.

pub mod ports;
pub mod service;

pub use ports::ContentRepository;
pub use service::ContentService;
