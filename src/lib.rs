//! Export quote calculator backend.
//!
//! The pricing engine in [`pricing::calculators`] is the core of the
//! application; everything else stores products and past runs and routes
//! JSON in and out of the engine.

pub mod db;
pub mod error;
pub mod models;
pub mod pricing;
pub mod routes;

use sqlx::PgPool;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
}
