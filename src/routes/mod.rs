//! HTTP route handlers

pub mod history;
pub mod products;

use axum::Router;

use crate::pricing;
use crate::AppState;

/// Assemble the full application router
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(pricing::router())
        .merge(products::router())
        .merge(history::router())
}
