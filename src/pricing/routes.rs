//! Calculation route handler.

use axum::{routing::post, Json, Router};

use crate::error::Result;
use crate::pricing::{compute_quote, CalculationInputs, CalculationOutput};
use crate::AppState;

/// Router for the calculation endpoint
pub fn router() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate))
}

/// Run the pricing engine on the posted inputs.
///
/// The engine is pure, so the handler holds no state; validation failures
/// surface as 400 with the engine's message.
pub async fn calculate(
    Json(inputs): Json<CalculationInputs>,
) -> Result<Json<CalculationOutput>> {
    let output = compute_quote(&inputs)?;
    Ok(Json(output))
}
