//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod admin;
pub mod currency;
pub mod health;

/// Creates the `/api/v1` router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(currency::routes())
}
