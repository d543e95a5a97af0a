//! Service metadata routes

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use folio_domain::{HealthReport, PortfolioStats, ServiceInfo};

use crate::context::AppContext;
use crate::error::ApiError;

/// GET / - service banner
pub async fn root(State(ctx): State<Arc<AppContext>>) -> Json<ServiceInfo> {
    Json(ctx.diagnostics.info())
}

/// GET /api/health - liveness plus database and email readiness
///
/// Always 200; a degraded database shows up in the payload, not the status.
pub async fn health(State(ctx): State<Arc<AppContext>>) -> Json<HealthReport> {
    Json(ctx.diagnostics.health().await)
}

/// GET /api/stats - row counts for the dashboard
pub async fn stats(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<PortfolioStats>, ApiError> {
    Ok(Json(ctx.diagnostics.stats().await?))
}
