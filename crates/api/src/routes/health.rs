//! Liveness endpoint for load balancers and uptime checks.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Liveness report including the currency the storefront is serving.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process answers requests.
    pub status: &'static str,
    /// Crate version of the running server.
    pub version: &'static str,
    /// ISO code of the configured display currency.
    pub currency: String,
}

/// GET `/health` - Liveness check.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        currency: state.currency.code.to_string(),
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
