//! Domain types and models
//!
//! Wire shapes match the public API: entity structs serialize exactly as the
//! frontend consumes them.

pub mod contact;
pub mod content;
pub mod stats;

pub use contact::{ContactMessage, ContactReceipt, ContactSubmission};
pub use content::{Experience, Profile, Project, ProjectFilter, Skill, SkillGroup};
pub use stats::{HealthReport, PortfolioStats, ServiceInfo};
