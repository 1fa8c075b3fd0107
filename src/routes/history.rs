//! Saved-run history route handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db;
use crate::error::{AppError, Result};
use crate::models::{QuoteRun, QuoteRunCreate};
use crate::AppState;

/// Router for history endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/history", get(list).post(create))
        .route("/history/compare", get(compare))
        .route("/history/:id", get(detail))
}

fn not_found() -> AppError {
    AppError::NotFound("Run not found".to_string())
}

/// Query parameters for history listing
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub search: Option<String>,
}

/// Query parameters for run comparison
#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub run_a: i64,
    pub run_b: i64,
}

/// List saved runs newest-first, optionally filtered by name
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<QuoteRun>>> {
    let runs = db::list_quote_runs(&state.db, query.search.as_deref()).await?;
    Ok(Json(runs))
}

/// Save a calculation run
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<QuoteRunCreate>,
) -> Result<(StatusCode, Json<QuoteRun>)> {
    let run = db::create_quote_run(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(run)))
}

/// Get a saved run by id
pub async fn detail(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<QuoteRun>> {
    let run = db::get_quote_run(&state.db, id).await?.ok_or_else(not_found)?;
    Ok(Json(run))
}

/// Fetch two runs side by side
pub async fn compare(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> Result<Json<Value>> {
    let first = db::get_quote_run(&state.db, query.run_a).await?.ok_or_else(not_found)?;
    let second = db::get_quote_run(&state.db, query.run_b).await?.ok_or_else(not_found)?;
    Ok(Json(json!({ "run_a": first, "run_b": second })))
}
