//! Contact form route

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use folio_domain::{ContactReceipt, ContactSubmission};

use crate::context::AppContext;
use crate::error::ApiError;

/// POST /api/contact - validate, store, and acknowledge a contact message
pub async fn submit(
    State(ctx): State<Arc<AppContext>>,
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<ContactReceipt>, ApiError> {
    Ok(Json(ctx.contact.submit(submission).await?))
}
