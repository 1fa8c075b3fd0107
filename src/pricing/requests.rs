//! Request DTOs for the calculation API.

use serde::{Deserialize, Serialize};

/// Inputs for one pricing calculation.
///
/// Serialized back out verbatim when a run is saved to history, so this
/// derives `Serialize` as well as `Deserialize`.
///
/// `pricing_mode` stays a plain string rather than an enum so that an
/// unrecognized mode reaches the engine and produces its validation error
/// instead of a serde failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationInputs {
    /// Units shipped. May be zero; all per-unit divisions are guarded.
    pub quantity: f64,
    pub cost_inr_per_unit: f64,
    /// INR per USD. A zero rate yields a zero unit cost, not an error.
    pub fx_rate_inr_per_usd: f64,
    pub freight_usd: f64,
    pub insurance_usd: f64,
    #[serde(default)]
    pub other_costs_usd: f64,
    /// Annual percentage rate, e.g. 12 meaning 12%.
    pub financing_rate_annual: f64,
    /// Months the post-advance balance stays outstanding.
    pub credit_period_months: f64,
    /// "A" = target-margin pricing, "B" = fixed pricing.
    pub pricing_mode: String,
    /// Fraction, e.g. 0.3 = 30%. Mode A falls back to 0.0 when absent.
    #[serde(default)]
    pub target_net_profit_pct_on_cost: Option<f64>,
    #[serde(default)]
    pub fixed_invoice_value_usd: Option<f64>,
    #[serde(default)]
    pub fixed_selling_price_per_unit_usd: Option<f64>,
    /// Advance-payment fractions in [0, 1]; output preserves this order.
    pub advance_scenarios: Vec<f64>,
}
