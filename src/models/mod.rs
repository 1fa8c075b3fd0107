//! Database-backed record types

pub mod product;
pub mod quote_run;

pub use product::{Product, ProductCreate, ProductUpdate};
pub use quote_run::{QuoteRun, QuoteRunCreate};
