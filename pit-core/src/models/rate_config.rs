use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed rate table used by every calculation.
///
/// Passed by reference into the calculations instead of living in a global,
/// so tests can run against a hand-built table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Amount subtracted from the tax base before deriving the effective rate.
    pub tax_free_allowance: Decimal,
    /// Rate applied to income up to `tax_threshold`.
    pub tax_rate_low: Decimal,
    /// Rate applied to income above `tax_threshold`.
    pub tax_rate_high: Decimal,
    pub tax_threshold: Decimal,
    /// Share of the foreign daily allowance that is deductible per day abroad.
    pub daily_allowance_weight: Decimal,
    /// Income cost deducted from every foreign month after conversion to PLN.
    pub fixed_income_cost: Decimal,
}

impl RateConfig {
    /// The only supported table: 18% / 32% brackets with the 85 528 PLN threshold.
    pub const PL_2013: RateConfig = RateConfig {
        tax_free_allowance: Decimal::from_parts(55602, 0, 0, false, 2),
        tax_rate_low: Decimal::from_parts(18, 0, 0, false, 2),
        tax_rate_high: Decimal::from_parts(32, 0, 0, false, 2),
        tax_threshold: Decimal::from_parts(85528, 0, 0, false, 0),
        daily_allowance_weight: Decimal::from_parts(3, 0, 0, false, 1),
        fixed_income_cost: Decimal::from_parts(13906, 0, 0, false, 2),
    };
}

impl Default for RateConfig {
    fn default() -> Self {
        Self::PL_2013
    }
}
