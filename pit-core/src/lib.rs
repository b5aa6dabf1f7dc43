pub mod calculations;
pub mod input;
pub mod models;

pub use calculations::{Totals, calculate_month, recalculate_all};
pub use input::{InputError, MAX_AMOUNT, MAX_DAYS_ABROAD};
pub use models::*;
