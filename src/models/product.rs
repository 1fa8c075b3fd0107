//! Product catalog models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Product from the products table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub default_cost_inr_per_unit: f64,
    pub unit_label: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a product
#[derive(Debug, Clone, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub default_cost_inr_per_unit: f64,
    #[serde(default = "default_unit_label")]
    pub unit_label: String,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_unit_label() -> String {
    "unit".to_string()
}

/// Partial update payload; absent fields keep their stored value
#[derive(Debug, Clone, Deserialize)]
pub struct ProductUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub default_cost_inr_per_unit: Option<f64>,
    #[serde(default)]
    pub unit_label: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}
