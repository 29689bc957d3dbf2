//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - The admin landing page that redirects to the dashboard
//! - Currency formatting and parsing endpoints
//! - Health checks

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use logodouman_shared::{AppConfig, CurrencyConfig};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Display currency, read-only for the lifetime of the process.
    pub currency: Arc<CurrencyConfig>,
    /// Route the admin landing page redirects to.
    pub dashboard_path: Arc<str>,
}

impl AppState {
    /// Builds the shared state from loaded configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            currency: Arc::new(config.currency.clone()),
            dashboard_path: Arc::from(config.admin.dashboard_path.as_str()),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::admin::routes())
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
