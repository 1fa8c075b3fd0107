//! Pricing engine module for the export quote calculator.
//!
//! `calculators` holds the pure computation; `requests`/`responses` are the
//! typed DTOs it works on; `routes` exposes the single calculate endpoint.

pub mod calculators;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{compute_quote, PricingError};
pub use requests::CalculationInputs;
pub use responses::CalculationOutput;
pub use routes::router;
