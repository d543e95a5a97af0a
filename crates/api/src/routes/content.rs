//! Portfolio content routes

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use folio_domain::{Experience, Profile, Project, ProjectFilter, SkillGroup};

use crate::context::AppContext;
use crate::error::ApiError;

/// GET /api/profile - the site owner profile
pub async fn profile(State(ctx): State<Arc<AppContext>>) -> Result<Json<Profile>, ApiError> {
    Ok(Json(ctx.content.profile().await?))
}

/// GET /api/skills - skills grouped by category
pub async fn skills(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<Vec<SkillGroup>>, ApiError> {
    Ok(Json(ctx.content.skills().await?))
}

/// GET /api/projects - projects, optionally filtered by category and featured flag
pub async fn projects(
    State(ctx): State<Arc<AppContext>>,
    Query(filter): Query<ProjectFilter>,
) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(ctx.content.projects(&filter).await?))
}

/// GET /api/projects/{id} - a single project
pub async fn project(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i32>,
) -> Result<Json<Project>, ApiError> {
    Ok(Json(ctx.content.project(id).await?))
}

/// GET /api/experience - work history in display order
pub async fn experience(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<Vec<Experience>>, ApiError> {
    Ok(Json(ctx.content.experience().await?))
}
