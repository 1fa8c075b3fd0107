//! Core quote calculation functions.
//!
//! Pure pricing math - no database access and no shared state, so any number
//! of request handlers can run calculations concurrently without
//! coordination. Each call is fully independent; nothing is cached between
//! invocations.

use crate::pricing::requests::CalculationInputs;
use crate::pricing::responses::{
    BaseFigures, CalculationOutput, Explanation, ExplanationRow, ScenarioResult,
};

/// Validation errors raised by the engine.
///
/// Zero-division cases are not errors; they degrade to 0.0 (see
/// [`safe_div`]). Callers must correct and resubmit, there is no retry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("{0}")]
    InvalidInput(String),
}

/// Round a currency magnitude to 2 decimal places.
///
/// A 1e-9 nudge is added before rounding so exact halves round away from
/// zero instead of hitting binary-representation surprises.
pub fn round_currency(value: f64) -> f64 {
    ((value + 1e-9) * 100.0).round() / 100.0
}

/// Round a per-unit or ratio value to 6 decimal places, same nudge as
/// [`round_currency`].
pub fn round_unit(value: f64) -> f64 {
    ((value + 1e-9) * 1_000_000.0).round() / 1_000_000.0
}

/// Division that yields 0.0 on a zero denominator.
///
/// Every division in the engine goes through this; zero quantity, zero fx
/// rate and zero shipment cost are defined-behavior degradations, not
/// errors.
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Compute invoice value, financing cost and profit figures for every
/// advance-payment scenario in `inputs`.
///
/// Mode "A" solves the invoice value backward from the target net profit
/// percentage on cost, absorbing financing drag into the price. Mode "B"
/// takes the invoice value as given (directly, or per-unit times quantity).
/// In both modes the financing cost applies to whatever fraction of the
/// shipment cost the advance does not cover.
///
/// Fails with [`PricingError::InvalidInput`] for an unrecognized mode, or
/// for mode "B" without either price anchor. Either the full output is
/// produced or nothing is.
pub fn compute_quote(inputs: &CalculationInputs) -> Result<CalculationOutput, PricingError> {
    let quantity = inputs.quantity;

    let product_cost_usd_per_unit = safe_div(inputs.cost_inr_per_unit, inputs.fx_rate_inr_per_usd);
    let total_addons_usd = inputs.freight_usd + inputs.insurance_usd + inputs.other_costs_usd;
    let per_unit_addon_usd = safe_div(total_addons_usd, quantity);
    let total_landed_cost_per_unit = product_cost_usd_per_unit + per_unit_addon_usd;
    let total_shipment_cost_usd = total_landed_cost_per_unit * quantity;

    // Fractional cost rate on the cash gap over the credit period.
    let financing_factor =
        inputs.financing_rate_annual * (inputs.credit_period_months / 12.0) / 100.0;

    let mut scenarios = Vec::with_capacity(inputs.advance_scenarios.len());
    let mut rows = Vec::with_capacity(inputs.advance_scenarios.len());

    for &advance_pct in &inputs.advance_scenarios {
        let (invoice_value, financing_cost) = match inputs.pricing_mode.as_str() {
            "A" => {
                let target_pct = inputs.target_net_profit_pct_on_cost.unwrap_or(0.0);
                if advance_pct >= 1.0 {
                    // Fully advance-paid: no cash gap can exist.
                    (total_shipment_cost_usd * (1.0 + target_pct), 0.0)
                } else {
                    // Closed-form solution of the fixed point: the invoice
                    // must cover cost, target margin, and the financing cost
                    // on the portion of cost the advance leaves open, while
                    // the financing cost itself depends on the invoice.
                    let numerator = total_shipment_cost_usd * (1.0 + target_pct + financing_factor);
                    let invoice_value = safe_div(numerator, 1.0 + advance_pct * financing_factor);
                    let cash_gap =
                        (total_shipment_cost_usd - advance_pct * invoice_value).max(0.0);
                    (invoice_value, cash_gap * financing_factor)
                }
            }
            "B" => {
                let invoice_value = if let Some(value) = inputs.fixed_invoice_value_usd {
                    value
                } else if let Some(price) = inputs.fixed_selling_price_per_unit_usd {
                    price * quantity
                } else {
                    return Err(PricingError::InvalidInput(
                        "Mode B requires invoice value or selling price per unit.".to_string(),
                    ));
                };
                let cash_gap = (total_shipment_cost_usd - advance_pct * invoice_value).max(0.0);
                (invoice_value, cash_gap * financing_factor)
            }
            _ => {
                return Err(PricingError::InvalidInput(
                    "Invalid pricing mode.".to_string(),
                ));
            }
        };

        let selling_price_per_unit = safe_div(invoice_value, quantity);
        let advance_received = advance_pct * invoice_value;
        let balance_received = invoice_value - advance_received;
        let gross_profit = invoice_value - total_shipment_cost_usd;
        let net_profit = gross_profit - financing_cost;

        scenarios.push(ScenarioResult {
            advance_pct,
            invoice_value_usd: round_currency(invoice_value),
            selling_price_per_unit_usd: round_unit(selling_price_per_unit),
            advance_received_usd: round_currency(advance_received),
            balance_received_usd: round_currency(balance_received),
            total_shipment_cost_usd: round_currency(total_shipment_cost_usd),
            cash_gap_usd: round_currency(
                (total_shipment_cost_usd - advance_received).max(0.0),
            ),
            financing_cost_usd: round_currency(financing_cost),
            financing_cost_per_unit_usd: round_unit(safe_div(financing_cost, quantity)),
            gross_profit_usd: round_currency(gross_profit),
            gross_profit_pct_on_cost: round_unit(safe_div(gross_profit, total_shipment_cost_usd)),
            net_profit_usd: round_currency(net_profit),
            net_profit_pct_on_cost: round_unit(safe_div(net_profit, total_shipment_cost_usd)),
            gross_profit_per_unit_usd: round_unit(safe_div(gross_profit, quantity)),
            net_profit_per_unit_usd: round_unit(safe_div(net_profit, quantity)),
        });

        rows.push(ExplanationRow {
            advance_pct: format!("{:.0}%", advance_pct * 100.0),
            invoice_value: "Invoice = Cost × (1 + target + factor) ÷ (1 + advance×factor)"
                .to_string(),
            financing_cost: format!(
                "Financing = max(0, Cost – Advance×Invoice) × {:.4}",
                financing_factor
            ),
        });
    }

    Ok(CalculationOutput {
        product_cost_usd_per_unit: round_unit(product_cost_usd_per_unit),
        per_unit_addon_usd: round_unit(per_unit_addon_usd),
        total_landed_cost_per_unit_usd: round_unit(total_landed_cost_per_unit),
        total_shipment_cost_usd: round_currency(total_shipment_cost_usd),
        financing_factor: round_unit(financing_factor),
        scenarios,
        explanation: Explanation {
            base: BaseFigures {
                product_cost_usd_per_unit,
                per_unit_addon_usd,
                total_landed_cost_per_unit,
                total_shipment_cost_usd,
            },
            financing_factor,
            rows,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_inputs() -> CalculationInputs {
        CalculationInputs {
            quantity: 1000.0,
            cost_inr_per_unit: 200.0,
            fx_rate_inr_per_usd: 80.0,
            freight_usd: 500.0,
            insurance_usd: 200.0,
            other_costs_usd: 100.0,
            financing_rate_annual: 12.0,
            credit_period_months: 4.0,
            pricing_mode: "A".to_string(),
            target_net_profit_pct_on_cost: Some(0.3),
            fixed_invoice_value_usd: None,
            fixed_selling_price_per_unit_usd: None,
            advance_scenarios: vec![0.0, 1.0],
        }
    }

    // ==================== rounding helper tests ====================

    #[test]
    fn test_round_currency_half_rounds_up() {
        // The nudge pushes exact halves away from zero even where the
        // nearest f64 sits just below the half.
        assert_eq!(round_currency(1.005), 1.01);
        assert_eq!(round_currency(2.675), 2.68);
        assert_eq!(round_currency(1.004), 1.0);
        assert_eq!(round_currency(0.0), 0.0);
    }

    #[test]
    fn test_round_unit_six_places() {
        assert_eq!(round_unit(1.0 / 3.0), 0.333333);
        assert_eq!(round_unit(0.8), 0.8);
        assert_eq!(round_unit(2.5), 2.5);
    }

    #[test]
    fn test_safe_div() {
        assert_eq!(safe_div(10.0, 4.0), 2.5);
        assert_eq!(safe_div(1.0, 0.0), 0.0);
        assert_eq!(safe_div(0.0, 0.0), 0.0);
    }

    // ==================== base breakdown tests ====================

    #[test]
    fn test_base_breakdown_reference_figures() {
        let output = compute_quote(&base_inputs()).unwrap();
        assert_eq!(output.product_cost_usd_per_unit, 2.5);
        assert_eq!(output.per_unit_addon_usd, 0.8);
        assert_eq!(output.total_landed_cost_per_unit_usd, 3.3);
        assert_eq!(output.total_shipment_cost_usd, 3300.0);
        assert_eq!(output.financing_factor, 0.04);
    }

    #[test]
    fn test_zero_quantity_degrades_to_zero() {
        let mut inputs = base_inputs();
        inputs.quantity = 0.0;
        let output = compute_quote(&inputs).unwrap();
        assert_eq!(output.per_unit_addon_usd, 0.0);
        for scenario in &output.scenarios {
            assert_eq!(scenario.selling_price_per_unit_usd, 0.0);
            assert_eq!(scenario.financing_cost_per_unit_usd, 0.0);
        }
    }

    #[test]
    fn test_zero_fx_rate_yields_zero_product_cost() {
        let mut inputs = base_inputs();
        inputs.fx_rate_inr_per_usd = 0.0;
        let output = compute_quote(&inputs).unwrap();
        assert_eq!(output.product_cost_usd_per_unit, 0.0);
        assert_eq!(output.per_unit_addon_usd, 0.8);
    }

    // ==================== mode A tests ====================

    #[test]
    fn test_full_advance_has_zero_financing() {
        let mut inputs = base_inputs();
        inputs.advance_scenarios = vec![1.0];
        let output = compute_quote(&inputs).unwrap();
        let scenario = &output.scenarios[0];
        assert!(scenario.financing_cost_usd.abs() < 1e-6);
        assert_eq!(scenario.invoice_value_usd, 4290.0);
    }

    #[test]
    fn test_mode_a_invoice_value_decreases_with_higher_advance() {
        let output = compute_quote(&base_inputs()).unwrap();
        let zero_advance = output.scenarios[0].invoice_value_usd;
        let full_advance = output.scenarios[1].invoice_value_usd;
        assert!(zero_advance > full_advance);
        assert_eq!(zero_advance, 4422.0);
        assert_eq!(full_advance, 4290.0);
    }

    #[test]
    fn test_mode_a_zero_advance_financing_and_profit() {
        let output = compute_quote(&base_inputs()).unwrap();
        let scenario = &output.scenarios[0];
        // Cash gap is the whole shipment cost, factor 0.04.
        assert_eq!(scenario.financing_cost_usd, 132.0);
        assert_eq!(scenario.net_profit_usd, 990.0);
        // Net profit lands exactly on the requested 30% of cost.
        assert_eq!(scenario.net_profit_pct_on_cost, 0.3);
    }

    #[test]
    fn test_mode_a_missing_target_defaults_to_zero_margin() {
        let mut inputs = base_inputs();
        inputs.target_net_profit_pct_on_cost = None;
        inputs.advance_scenarios = vec![1.0];
        let output = compute_quote(&inputs).unwrap();
        // Invoice covers cost only; the absence degrades, it does not fail.
        assert_eq!(output.scenarios[0].invoice_value_usd, 3300.0);
        assert_eq!(output.scenarios[0].net_profit_usd, 0.0);
    }

    #[test]
    fn test_mode_a_partial_advance_covers_target_exactly() {
        let mut inputs = base_inputs();
        inputs.advance_scenarios = vec![0.5];
        let output = compute_quote(&inputs).unwrap();
        let scenario = &output.scenarios[0];
        // The closed form absorbs financing so net profit stays on target.
        assert!((scenario.net_profit_pct_on_cost - 0.3).abs() < 1e-6);
        assert!(scenario.financing_cost_usd > 0.0);
    }

    // ==================== mode B tests ====================

    fn mode_b_inputs() -> CalculationInputs {
        let mut inputs = base_inputs();
        inputs.pricing_mode = "B".to_string();
        inputs.target_net_profit_pct_on_cost = None;
        inputs.fixed_invoice_value_usd = Some(5000.0);
        inputs.advance_scenarios = vec![0.0, 0.5, 1.0];
        inputs
    }

    #[test]
    fn test_mode_b_net_profit_improves_with_more_advance() {
        let output = compute_quote(&mode_b_inputs()).unwrap();
        let profits: Vec<f64> = output.scenarios.iter().map(|s| s.net_profit_usd).collect();
        assert!(profits[1] > profits[0]);
        assert!(profits[2] > profits[1]);
    }

    #[test]
    fn test_mode_b_invoice_value_is_fixed_across_scenarios() {
        let output = compute_quote(&mode_b_inputs()).unwrap();
        for scenario in &output.scenarios {
            assert_eq!(scenario.invoice_value_usd, 5000.0);
            assert_eq!(scenario.gross_profit_usd, 1700.0);
        }
    }

    #[test]
    fn test_mode_b_falls_back_to_per_unit_price() {
        let mut inputs = mode_b_inputs();
        inputs.fixed_invoice_value_usd = None;
        inputs.fixed_selling_price_per_unit_usd = Some(5.0);
        let output = compute_quote(&inputs).unwrap();
        assert_eq!(output.scenarios[0].invoice_value_usd, 5000.0);
        assert_eq!(output.scenarios[0].selling_price_per_unit_usd, 5.0);
    }

    #[test]
    fn test_mode_b_prefers_invoice_value_over_per_unit_price() {
        let mut inputs = mode_b_inputs();
        inputs.fixed_selling_price_per_unit_usd = Some(99.0);
        let output = compute_quote(&inputs).unwrap();
        assert_eq!(output.scenarios[0].invoice_value_usd, 5000.0);
    }

    #[test]
    fn test_mode_b_without_price_anchor_fails() {
        let mut inputs = mode_b_inputs();
        inputs.fixed_invoice_value_usd = None;
        inputs.fixed_selling_price_per_unit_usd = None;
        let err = compute_quote(&inputs).unwrap_err();
        assert_eq!(
            err,
            PricingError::InvalidInput(
                "Mode B requires invoice value or selling price per unit.".to_string()
            )
        );
    }

    // ==================== mode validation tests ====================

    #[test]
    fn test_unrecognized_mode_fails() {
        let mut inputs = base_inputs();
        inputs.pricing_mode = "C".to_string();
        let err = compute_quote(&inputs).unwrap_err();
        assert_eq!(
            err,
            PricingError::InvalidInput("Invalid pricing mode.".to_string())
        );
    }

    // ==================== output shape tests ====================

    #[test]
    fn test_shipment_cost_invariant_across_scenarios() {
        let mut inputs = base_inputs();
        inputs.advance_scenarios = vec![0.0, 0.25, 0.5, 0.75, 1.0];
        let output = compute_quote(&inputs).unwrap();
        for scenario in &output.scenarios {
            assert_eq!(scenario.total_shipment_cost_usd, output.total_shipment_cost_usd);
        }
    }

    #[test]
    fn test_scenario_order_matches_input_order() {
        let mut inputs = base_inputs();
        inputs.advance_scenarios = vec![0.5, 0.0, 1.0, 0.25];
        let output = compute_quote(&inputs).unwrap();
        let order: Vec<f64> = output.scenarios.iter().map(|s| s.advance_pct).collect();
        assert_eq!(order, inputs.advance_scenarios);
    }

    #[test]
    fn test_explanation_has_one_row_per_scenario() {
        let mut inputs = base_inputs();
        inputs.advance_scenarios = vec![0.0, 0.25, 1.0];
        let output = compute_quote(&inputs).unwrap();
        assert_eq!(output.explanation.rows.len(), output.scenarios.len());
        assert_eq!(output.explanation.rows[1].advance_pct, "25%");
        assert!(output.explanation.rows[0].financing_cost.contains("0.0400"));
    }

    #[test]
    fn test_explanation_base_echoes_unrounded_figures() {
        let output = compute_quote(&base_inputs()).unwrap();
        let base = &output.explanation.base;
        assert!((base.total_shipment_cost_usd - 3300.0).abs() < 1e-9);
        assert!((output.explanation.financing_factor - 0.04).abs() < 1e-9);
    }

    #[test]
    fn test_empty_scenarios_yield_empty_output() {
        let mut inputs = base_inputs();
        inputs.advance_scenarios = vec![];
        let output = compute_quote(&inputs).unwrap();
        assert!(output.scenarios.is_empty());
        assert!(output.explanation.rows.is_empty());
        assert_eq!(output.total_shipment_cost_usd, 3300.0);
    }
}
