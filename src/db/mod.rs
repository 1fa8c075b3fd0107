//! Database access: schema bootstrap, demo seed, and queries

pub mod queries;

pub use queries::*;

use sqlx::PgPool;
use tracing::info;

use crate::error::Result;
use crate::models::ProductCreate;

/// Create the tables if they do not exist yet.
///
/// The schema is small enough that bootstrap-on-startup beats a migration
/// tool here; both statements are idempotent.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL UNIQUE,
            default_cost_inr_per_unit DOUBLE PRECISION NOT NULL,
            unit_label VARCHAR(50) NOT NULL DEFAULT 'unit',
            notes TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS quote_runs (
            id BIGSERIAL PRIMARY KEY,
            run_name VARCHAR(255) NOT NULL,
            product_id BIGINT REFERENCES products(id) ON DELETE SET NULL,
            inputs JSONB NOT NULL,
            outputs JSONB NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Insert demo products on first startup so the calculator is usable
/// against an empty database. No-op when any product already exists.
pub async fn seed_demo_products(pool: &PgPool) -> Result<()> {
    if !queries::list_products(pool).await?.is_empty() {
        return Ok(());
    }

    let demo_products = [
        ProductCreate {
            name: "Basmati Rice 5kg".to_string(),
            default_cost_inr_per_unit: 320.0,
            unit_label: "bag".to_string(),
            notes: Some("Premium grade bag".to_string()),
        },
        ProductCreate {
            name: "Cotton T-Shirt".to_string(),
            default_cost_inr_per_unit: 180.0,
            unit_label: "piece".to_string(),
            notes: Some("Crew neck, 180 GSM".to_string()),
        },
        ProductCreate {
            name: "Copper Wire".to_string(),
            default_cost_inr_per_unit: 650.0,
            unit_label: "kg".to_string(),
            notes: Some("Industrial spool".to_string()),
        },
    ];

    for product in demo_products {
        queries::create_product(pool, &product).await?;
    }
    info!("Seeded demo products");

    Ok(())
}
