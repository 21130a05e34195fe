//! HTTP router for the document API.
//!
//! Returns a composable `Router` that can be mounted on any axum
//! server. The upload endpoints take multipart form data with a single
//! `file` part holding the document JSON.

use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the document API router.
pub fn document_api_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/", get(endpoints::health::root))
        .route("/health", get(endpoints::health::check))
        .route("/validate", post(endpoints::documents::validate))
        .route("/extract-patient", post(endpoints::documents::extract_patient))
        .with_state(ctx)
}
