//! Service banner and health check endpoints.

use axum::Json;
use serde::Serialize;

use crate::config::APP_VERSION;

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// `GET /` — service banner.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Medical Documents API with Enhanced Name Extraction",
    })
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub extractor: &'static str,
    pub version: &'static str,
}

/// `GET /health` — liveness check.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        extractor: "ready",
        version: APP_VERSION,
    })
}
