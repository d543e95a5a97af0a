//! Portfolio content service - core business logic

use std::sync::Arc;

use folio_domain::{
    Experience, PortfolioError, Profile, Project, ProjectFilter, Result, Skill, SkillGroup,
};

use super::ports::ContentRepository;

/// Read-side content service
pub struct ContentService {
    repository: Arc<dyn ContentRepository>,
}

impl ContentService {
    /// Create a new content service
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self { repository }
    }

    /// The site owner profile
    ///
    /// The profile table is expected to hold one row; an empty table is a
    /// not-found condition, not an internal error.
    pub async fn profile(&self) -> Result<Profile> {
        self.repository
            .get_profile()
            .await?
            .ok_or_else(|| PortfolioError::NotFound("Profile not found".to_string()))
    }

    /// Skills grouped by category, categories in first-seen row order
    pub async fn skills(&self) -> Result<Vec<SkillGroup>> {
        let skills = self.repository.list_skills().await?;
        Ok(group_skills(skills))
    }

    /// Projects matching the optional category/featured filters
    pub async fn projects(&self, filter: &ProjectFilter) -> Result<Vec<Project>> {
        self.repository.list_projects(filter).await
    }

    /// A single project by id
    pub async fn project(&self, id: i32) -> Result<Project> {
        self.repository
            .get_project(id)
            .await?
            .ok_or_else(|| PortfolioError::NotFound("Project not found".to_string()))
    }

    /// Work experience in display order
    pub async fn experience(&self) -> Result<Vec<Experience>> {
        self.repository.list_experience().await
    }
}

/// Collapse skill rows into per-category groups.
///
/// Rows arrive sorted by (category, display_order); grouping still merges
/// non-contiguous rows of the same category so a category never appears
/// twice in the output.
fn group_skills(skills: Vec<Skill>) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.items.push(skill.name),
            None => {
                groups.push(SkillGroup { category: skill.category, items: vec![skill.name] });
            }
        }
    }
    groups
}
