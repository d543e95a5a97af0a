//! Postgres implementations of the core store ports

pub mod contact_repository;
pub mod content_repository;
pub mod manager;
pub mod stats_repository;

pub use contact_repository::*;
pub use content_repository::*;
pub use manager::*;
pub use stats_repository::*;
