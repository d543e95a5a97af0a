//! HTTP surface - route table and CORS policy

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::warn;

use crate::context::AppContext;

pub mod contact;
pub mod content;
pub mod diagnostics;

/// Build the application router with every route and the CORS layer
pub fn router(ctx: Arc<AppContext>) -> Router {
    let cors = cors_layer(&ctx.config.server.allowed_origins);

    Router::new()
        .route("/", get(diagnostics::root))
        .route("/api/profile", get(content::profile))
        .route("/api/skills", get(content::skills))
        .route("/api/projects", get(content::projects))
        .route("/api/projects/{id}", get(content::project))
        .route("/api/experience", get(content::experience))
        .route("/api/contact", post(contact::submit))
        .route("/api/stats", get(diagnostics::stats))
        .route("/api/health", get(diagnostics::health))
        .layer(cors)
        .with_state(ctx)
}

/// Credentialed CORS restricted to the configured frontend origins.
///
/// Methods and headers mirror the request; `Any` cannot be combined with
/// credentials.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
