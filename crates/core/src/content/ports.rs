//! Port interfaces for portfolio content reads
//!
//! These traits define the boundaries between core business logic
//! and the relational store adapter.

use async_trait::async_trait;
use folio_domain::{Experience, Profile, Project, ProjectFilter, Result, Skill};

/// Trait for read-only portfolio content retrieval
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Get the first profile row, if any exists
    async fn get_profile(&self) -> Result<Option<Profile>>;

    /// List all skills ordered by category, then display order
    async fn list_skills(&self) -> Result<Vec<Skill>>;

    /// List projects matching the filter, ordered for display
    async fn list_projects(&self, filter: &ProjectFilter) -> Result<Vec<Project>>;

    /// Get a single project by id
    async fn get_project(&self, id: i32) -> Result<Option<Project>>;

    /// List work experience, current roles first, then most recent
    async fn list_experience(&self) -> Result<Vec<Experience>>;
}
