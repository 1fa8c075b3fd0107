//! Product CRUD route handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::db;
use crate::error::{AppError, Result};
use crate::models::{Product, ProductCreate, ProductUpdate};
use crate::AppState;

/// Router for product endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list).post(create))
        .route("/products/:id", get(detail).put(update).delete(remove))
        .route("/products/:id/duplicate", post(duplicate))
}

fn not_found() -> AppError {
    AppError::NotFound("Product not found".to_string())
}

/// List all products
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = db::list_products(&state.db).await?;
    Ok(Json(products))
}

/// Create a product
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ProductCreate>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = db::create_product(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by id
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>> {
    let product = db::get_product(&state.db, id).await?.ok_or_else(not_found)?;
    Ok(Json(product))
}

/// Apply a partial update to a product
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductUpdate>,
) -> Result<Json<Product>> {
    let product = db::update_product(&state.db, id, &payload)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(product))
}

/// Delete a product
pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode> {
    if !db::delete_product(&state.db, id).await? {
        return Err(not_found());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Duplicate a product under a copied name
pub async fn duplicate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = db::duplicate_product(&state.db, id)
        .await?
        .ok_or_else(not_found)?;
    Ok((StatusCode::CREATED, Json(product)))
}
