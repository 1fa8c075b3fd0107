//! Saved calculation run models
//!
//! A run stores the exact inputs and outputs of one calculation as JSON,
//! keyed by a serial id and creation timestamp. The engine itself assigns no
//! identity; persistence does.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::pricing::{CalculationInputs, CalculationOutput};

/// Quote run from the quote_runs table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuoteRun {
    pub id: i64,
    pub run_name: String,
    pub product_id: Option<i64>,
    pub inputs: serde_json::Value,
    pub outputs: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Payload for saving a calculation run
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRunCreate {
    pub run_name: String,
    #[serde(default)]
    pub product_id: Option<i64>,
    pub inputs: CalculationInputs,
    pub outputs: CalculationOutput,
}
