use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of income earned abroad.
///
/// `taxable_amount` and `pln_amount` are caches. They are only correct as of
/// the last call to [`calculate_month`](crate::calculations::calculate_month)
/// for this record, so any edit to the inputs must be followed by a
/// recalculation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ForeignMonth {
    pub days_abroad: u32,
    /// Salary in the foreign currency.
    pub gross_salary: Decimal,
    /// PLN per unit of the foreign currency.
    pub exchange_rate: Decimal,

    // Calculated values
    pub taxable_amount: Decimal,
    pub pln_amount: Decimal,
}

impl ForeignMonth {
    /// Builds a month from its inputs. Derived fields start at zero.
    pub fn new(
        days_abroad: u32,
        gross_salary: Decimal,
        exchange_rate: Decimal,
    ) -> Self {
        Self {
            days_abroad,
            gross_salary,
            exchange_rate,
            ..Default::default()
        }
    }
}
