//! Tax calculations for domestic and foreign income.
//!
//! Month-level calculations live in [`foreign_income`]; the session-wide
//! derived values live in [`totals`].

pub mod common;
pub mod foreign_income;
pub mod totals;

pub use foreign_income::{calculate_month, deductible_allowance, recalculate_all};
pub use totals::Totals;
