//! Postgres-backed portfolio content repository
//!
//! Read-only queries for profile, skills, projects, and experience. Every
//! filter value is bound, never interpolated; the project list builds its
//! WHERE clause dynamically from the optional filters.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use folio_core::content::ports::ContentRepository;
use folio_domain::{
    Experience, PortfolioError, Profile, Project, ProjectFilter, Result as DomainResult, Skill,
};
use sqlx::postgres::Postgres;
use sqlx::QueryBuilder;

use super::manager::DbManager;

/// Shared SELECT head for project queries: one row per project with its
/// technology tags aggregated into a comma-joined column.
const PROJECT_SELECT: &str = "SELECT p.id, p.title, p.description, p.long_description, \
     p.image_url, p.github_url, p.live_url, p.category, p.featured, p.display_order, \
     p.created_at, string_agg(pt.technology, ',' ORDER BY pt.technology) AS technologies \
     FROM projects p \
     LEFT JOIN project_technologies pt ON pt.project_id = p.id";

/// Postgres implementation of `ContentRepository`
pub struct PgContentRepository {
    db: Arc<DbManager>,
}

impl PgContentRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentRepository for PgContentRepository {
    async fn get_profile(&self) -> DomainResult<Option<Profile>> {
        let row: Option<ProfileRow> = sqlx::query_as(
            "SELECT id, name, title, bio, email, phone, location, github_url, \
             linkedin_url, twitter_url, profile_image, resume_url \
             FROM profile ORDER BY id LIMIT 1",
        )
        .fetch_optional(self.db.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ProfileRow::into_profile))
    }

    async fn list_skills(&self) -> DomainResult<Vec<Skill>> {
        let rows: Vec<SkillRow> = sqlx::query_as(
            "SELECT id, category, name, proficiency, icon, display_order \
             FROM skills ORDER BY category, display_order",
        )
        .fetch_all(self.db.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(SkillRow::into_skill).collect())
    }

    async fn list_projects(&self, filter: &ProjectFilter) -> DomainResult<Vec<Project>> {
        let mut builder = build_projects_query(filter);

        let rows: Vec<ProjectRow> = builder
            .build_query_as()
            .fetch_all(self.db.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(ProjectRow::into_project).collect())
    }

    async fn get_project(&self, id: i32) -> DomainResult<Option<Project>> {
        let mut builder = QueryBuilder::<Postgres>::new(PROJECT_SELECT);
        builder.push(" WHERE p.id = ").push_bind(id).push(" GROUP BY p.id");

        let row: Option<ProjectRow> = builder
            .build_query_as()
            .fetch_optional(self.db.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(ProjectRow::into_project))
    }

    async fn list_experience(&self) -> DomainResult<Vec<Experience>> {
        let rows: Vec<ExperienceRow> = sqlx::query_as(
            "SELECT id, company, position, description, start_date, end_date, \
             is_current, location, company_url \
             FROM experience ORDER BY is_current DESC, start_date DESC NULLS LAST",
        )
        .fetch_all(self.db.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(ExperienceRow::into_experience).collect())
    }
}

/// Assemble the project list query for the given filters.
///
/// Category and featured conditions are ANDed when both are present; the
/// values always travel as binds.
fn build_projects_query(filter: &ProjectFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(PROJECT_SELECT);

    let mut prefix = " WHERE ";
    if let Some(category) = &filter.category {
        builder.push(prefix).push("p.category = ").push_bind(category.clone());
        prefix = " AND ";
    }
    if let Some(featured) = filter.featured {
        builder.push(prefix).push("p.featured = ").push_bind(featured);
    }

    builder.push(" GROUP BY p.id ORDER BY p.display_order, p.created_at DESC");
    builder
}

// =============================================================================
// Row Types & Helper Functions
// =============================================================================

#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: i32,
    name: String,
    title: String,
    bio: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    location: Option<String>,
    github_url: Option<String>,
    linkedin_url: Option<String>,
    twitter_url: Option<String>,
    profile_image: Option<String>,
    resume_url: Option<String>,
}

impl ProfileRow {
    fn into_profile(self) -> Profile {
        Profile {
            id: self.id,
            name: self.name,
            title: self.title,
            bio: self.bio,
            email: self.email,
            phone: self.phone,
            location: self.location,
            github_url: self.github_url,
            linkedin_url: self.linkedin_url,
            twitter_url: self.twitter_url,
            profile_image: self.profile_image,
            resume_url: self.resume_url,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SkillRow {
    id: i32,
    category: String,
    name: String,
    proficiency: i32,
    icon: Option<String>,
    display_order: i32,
}

impl SkillRow {
    fn into_skill(self) -> Skill {
        Skill {
            id: self.id,
            category: self.category,
            name: self.name,
            proficiency: self.proficiency,
            icon: self.icon,
            display_order: self.display_order,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: i32,
    title: String,
    description: Option<String>,
    long_description: Option<String>,
    image_url: Option<String>,
    github_url: Option<String>,
    live_url: Option<String>,
    category: Option<String>,
    featured: bool,
    display_order: i32,
    created_at: DateTime<Utc>,
    /// NULL when a project has no tags (aggregate over zero join rows)
    technologies: Option<String>,
}

impl ProjectRow {
    fn into_project(self) -> Project {
        let technologies = self
            .technologies
            .map(|joined| joined.split(',').map(str::to_string).collect())
            .unwrap_or_default();

        Project {
            id: self.id,
            title: self.title,
            description: self.description,
            long_description: self.long_description,
            image_url: self.image_url,
            github_url: self.github_url,
            live_url: self.live_url,
            category: self.category,
            featured: self.featured,
            display_order: self.display_order,
            created_at: self.created_at,
            technologies,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ExperienceRow {
    id: i32,
    company: String,
    position: String,
    description: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    is_current: bool,
    location: Option<String>,
    company_url: Option<String>,
}

impl ExperienceRow {
    fn into_experience(self) -> Experience {
        Experience {
            id: self.id,
            company: self.company,
            position: self.position,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            is_current: self.is_current,
            location: self.location,
            company_url: self.company_url,
        }
    }
}

fn map_sqlx_error(err: sqlx::Error) -> PortfolioError {
    PortfolioError::Database(err.to_string())
}
