//! Per-month taxable income for work performed abroad.
//!
//! For each month the deductible part of the daily allowance is subtracted
//! from the foreign salary, and the remainder is converted to PLN less the
//! fixed monthly income cost:
//!
//! | Value          | Formula |
//! |----------------|---------|
//! | deductible     | round2(days abroad × daily allowance × allowance weight) |
//! | taxable amount | gross salary − deductible |
//! | PLN amount     | round2(taxable amount × exchange rate − fixed income cost) |
//!
//! The taxable amount is deliberately left unrounded; only the PLN amount and
//! the aggregated totals are rounded. Negative results are allowed and flow
//! into the totals unchanged.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::calculations::common::round2;
use crate::models::{ForeignMonth, RateConfig, UserData};

/// Deductible part of the daily allowance for `days` spent abroad.
pub fn deductible_allowance(
    days: u32,
    daily_allowance_rate: Decimal,
    config: &RateConfig,
) -> Decimal {
    round2(Decimal::from(days) * daily_allowance_rate * config.daily_allowance_weight)
}

/// Recomputes the cached `taxable_amount` and `pln_amount` of one month.
pub fn calculate_month(
    month: &mut ForeignMonth,
    daily_allowance_rate: Decimal,
    config: &RateConfig,
) {
    let deductible = deductible_allowance(month.days_abroad, daily_allowance_rate, config);

    month.taxable_amount = month.gross_salary - deductible;
    month.pln_amount =
        round2(month.taxable_amount * month.exchange_rate - config.fixed_income_cost);

    trace!(
        days = month.days_abroad,
        %deductible,
        taxable = %month.taxable_amount,
        pln = %month.pln_amount,
        "foreign month recalculated"
    );
}

/// Recomputes every month, in entry order, against the current daily allowance.
///
/// Needed whenever the daily allowance or the rate table changes, since both
/// feed into every month.
pub fn recalculate_all(
    user_data: &mut UserData,
    config: &RateConfig,
) {
    let rate = user_data.foreign_daily_allowance_rate;

    for month in &mut user_data.foreign_months {
        calculate_month(month, rate, config);
    }

    debug!(
        months = user_data.foreign_months.len(),
        daily_allowance = %rate,
        "all foreign months recalculated"
    );
}
