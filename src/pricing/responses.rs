//! Response DTOs for the calculation API.
//!
//! Everything here derives both `Serialize` and `Deserialize` because saved
//! runs store the full output as JSON and hand it back on history reads.

use serde::{Deserialize, Serialize};

/// Derived figures for a single advance-payment scenario.
///
/// Currency magnitudes are rounded to 2 decimal places, per-unit and ratio
/// fields to 6.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub advance_pct: f64,
    pub invoice_value_usd: f64,
    pub selling_price_per_unit_usd: f64,
    pub advance_received_usd: f64,
    pub balance_received_usd: f64,
    pub total_shipment_cost_usd: f64,
    pub cash_gap_usd: f64,
    pub financing_cost_usd: f64,
    pub financing_cost_per_unit_usd: f64,
    pub gross_profit_usd: f64,
    pub gross_profit_pct_on_cost: f64,
    pub net_profit_usd: f64,
    pub net_profit_pct_on_cost: f64,
    pub gross_profit_per_unit_usd: f64,
    pub net_profit_per_unit_usd: f64,
}

/// Unrounded base figures echoed into the explanation trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseFigures {
    pub product_cost_usd_per_unit: f64,
    pub per_unit_addon_usd: f64,
    pub total_landed_cost_per_unit: f64,
    pub total_shipment_cost_usd: f64,
}

/// One human-readable formula row per scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationRow {
    pub advance_pct: String,
    pub invoice_value: String,
    pub financing_cost: String,
}

/// Display-only audit trail of a calculation.
///
/// Never fed back into any computation; the numeric results stand on their
/// own without it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    pub base: BaseFigures,
    pub financing_factor: f64,
    pub rows: Vec<ExplanationRow>,
}

/// Full result of one calculation: the shared base breakdown plus one
/// `ScenarioResult` per requested advance fraction, in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationOutput {
    pub product_cost_usd_per_unit: f64,
    pub per_unit_addon_usd: f64,
    pub total_landed_cost_per_unit_usd: f64,
    pub total_shipment_cost_usd: f64,
    pub financing_factor: f64,
    pub scenarios: Vec<ScenarioResult>,
    pub explanation: Explanation,
}
