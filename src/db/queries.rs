//! Database queries for products and saved quote runs.

use sqlx::PgPool;

use crate::error::AppError;
use crate::models::{Product, ProductCreate, ProductUpdate, QuoteRun, QuoteRunCreate};

/// List all products ordered by name
pub async fn list_products(pool: &PgPool) -> Result<Vec<Product>, AppError> {
    let products = sqlx::query_as::<_, Product>(
        r#"
        SELECT id, name, default_cost_inr_per_unit, unit_label, notes,
               created_at, updated_at
        FROM products
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

/// Get a product by id
pub async fn get_product(pool: &PgPool, product_id: i64) -> Result<Option<Product>, AppError> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        SELECT id, name, default_cost_inr_per_unit, unit_label, notes,
               created_at, updated_at
        FROM products
        WHERE id = $1
        "#,
    )
    .bind(product_id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// Insert a new product
pub async fn create_product(pool: &PgPool, create: &ProductCreate) -> Result<Product, AppError> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (name, default_cost_inr_per_unit, unit_label, notes)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, default_cost_inr_per_unit, unit_label, notes,
                  created_at, updated_at
        "#,
    )
    .bind(&create.name)
    .bind(create.default_cost_inr_per_unit)
    .bind(&create.unit_label)
    .bind(&create.notes)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Apply a partial update; absent fields keep their stored value
pub async fn update_product(
    pool: &PgPool,
    product_id: i64,
    update: &ProductUpdate,
) -> Result<Option<Product>, AppError> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        UPDATE products
        SET name = COALESCE($2, name),
            default_cost_inr_per_unit = COALESCE($3, default_cost_inr_per_unit),
            unit_label = COALESCE($4, unit_label),
            notes = COALESCE($5, notes),
            updated_at = now()
        WHERE id = $1
        RETURNING id, name, default_cost_inr_per_unit, unit_label, notes,
                  created_at, updated_at
        "#,
    )
    .bind(product_id)
    .bind(&update.name)
    .bind(update.default_cost_inr_per_unit)
    .bind(&update.unit_label)
    .bind(&update.notes)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// Delete a product; returns whether a row was removed
pub async fn delete_product(pool: &PgPool, product_id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(product_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Copy an existing product under a " Copy" suffixed name
pub async fn duplicate_product(
    pool: &PgPool,
    product_id: i64,
) -> Result<Option<Product>, AppError> {
    let Some(source) = get_product(pool, product_id).await? else {
        return Ok(None);
    };

    let copy = create_product(
        pool,
        &ProductCreate {
            name: format!("{} Copy", source.name),
            default_cost_inr_per_unit: source.default_cost_inr_per_unit,
            unit_label: source.unit_label,
            notes: source.notes,
        },
    )
    .await?;

    Ok(Some(copy))
}

/// Save a calculation run with its inputs and outputs as JSON
pub async fn create_quote_run(
    pool: &PgPool,
    create: &QuoteRunCreate,
) -> Result<QuoteRun, AppError> {
    let inputs = serde_json::to_value(&create.inputs)
        .map_err(|e| AppError::Internal(format!("Failed to serialize inputs: {}", e)))?;
    let outputs = serde_json::to_value(&create.outputs)
        .map_err(|e| AppError::Internal(format!("Failed to serialize outputs: {}", e)))?;

    let run = sqlx::query_as::<_, QuoteRun>(
        r#"
        INSERT INTO quote_runs (run_name, product_id, inputs, outputs)
        VALUES ($1, $2, $3, $4)
        RETURNING id, run_name, product_id, inputs, outputs, created_at
        "#,
    )
    .bind(&create.run_name)
    .bind(create.product_id)
    .bind(inputs)
    .bind(outputs)
    .fetch_one(pool)
    .await?;

    Ok(run)
}

/// List saved runs newest-first, optionally filtered by run name substring
pub async fn list_quote_runs(
    pool: &PgPool,
    search: Option<&str>,
) -> Result<Vec<QuoteRun>, AppError> {
    let runs = match search {
        Some(needle) => {
            sqlx::query_as::<_, QuoteRun>(
                r#"
                SELECT id, run_name, product_id, inputs, outputs, created_at
                FROM quote_runs
                WHERE run_name ILIKE $1
                ORDER BY created_at DESC
                "#,
            )
            .bind(format!("%{}%", needle))
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, QuoteRun>(
                r#"
                SELECT id, run_name, product_id, inputs, outputs, created_at
                FROM quote_runs
                ORDER BY created_at DESC
                "#,
            )
            .fetch_all(pool)
            .await?
        }
    };

    Ok(runs)
}

/// Get a saved run by id
pub async fn get_quote_run(pool: &PgPool, run_id: i64) -> Result<Option<QuoteRun>, AppError> {
    let run = sqlx::query_as::<_, QuoteRun>(
        r#"
        SELECT id, run_name, product_id, inputs, outputs, created_at
        FROM quote_runs
        WHERE id = $1
        "#,
    )
    .bind(run_id)
    .fetch_optional(pool)
    .await?;

    Ok(run)
}
