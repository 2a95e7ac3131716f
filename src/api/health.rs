//! Health check endpoint
//!
//! `/health` — simple "healthy" + version (for load balancers)

use axum::response::Json;
use serde::Serialize;

/// Simple health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests
    pub status: &'static str,
    /// Crate version
    pub version: &'static str,
}

/// Simple health check.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
