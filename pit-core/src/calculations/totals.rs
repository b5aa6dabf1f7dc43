//! Derived totals for a session.
//!
//! Every value here is recomputed from the current [`UserData`] and
//! [`RateConfig`]; nothing is stored between calls. The values depend on one
//! another in this order:
//!
//! | Step | Value                  | Formula |
//! |------|------------------------|---------|
//! | 1    | Domestic income        | round2(domestic income base − insurance paid) |
//! | 2    | Foreign taxable income | sum of month taxable amounts |
//! | 3    | Foreign income in PLN  | sum of month PLN amounts |
//! | 4    | Combined income        | round2(step 1 + step 3) |
//! | 5    | Tax base               | two-bracket schedule applied to step 4 (unrounded) |
//! | 6    | Effective tax rate     | round2((step 5 − tax-free allowance) × 100 / step 4), 0 when step 4 is 0 |
//! | 7    | Tax due                | round2(step 1 × step 6 / 100 − health insurance − tax already paid) |
//!
//! Foreign income only raises the rate: the effective rate from step 6 is
//! applied to domestic income alone in step 7.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pit_core::{ForeignMonth, RateConfig, Totals, UserData, recalculate_all};
//!
//! let config = RateConfig::default();
//! let mut data = UserData {
//!     domestic_income_base: dec!(10000),
//!     insurance_paid: dec!(1000),
//!     foreign_daily_allowance_rate: dec!(100),
//!     foreign_months: vec![ForeignMonth::new(10, dec!(2000), dec!(4.5))],
//!     ..Default::default()
//! };
//! recalculate_all(&mut data, &config);
//!
//! let totals = Totals::compute(&data, &config);
//!
//! assert_eq!(totals.combined_income, dec!(16510.94));
//! assert_eq!(totals.effective_tax_rate, dec!(14.63));
//! assert_eq!(totals.tax_due, dec!(1316.70));
//! ```

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{round2, sum};
use crate::models::{RateConfig, UserData};

/// Snapshot of every derived value for one recomputation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Domestic income net of insurance.
    pub income_domestic: Decimal,
    /// Foreign taxable income, in the foreign currency.
    pub income_foreign_taxable: Decimal,
    /// Foreign income converted to PLN, net of income costs.
    pub income_foreign_pln: Decimal,
    pub combined_income: Decimal,
    /// Tax on the combined income before the tax-free allowance.
    /// Not rounded.
    pub tax_base: Decimal,
    /// Effective rate as a percentage, e.g. `14.63`.
    pub effective_tax_rate: Decimal,
    /// Tax still to pay. Negative when a refund is due.
    pub tax_due: Decimal,
}

impl Totals {
    /// Evaluates all derived values in dependency order.
    ///
    /// Month caches are read as they are, so callers must recalculate edited
    /// months first.
    pub fn compute(
        user_data: &UserData,
        config: &RateConfig,
    ) -> Self {
        let income_domestic = income_domestic(user_data);
        let income_foreign_taxable = income_foreign_taxable(user_data);
        let income_foreign_pln = income_foreign_pln(user_data);
        let combined_income = combined_income(income_domestic, income_foreign_pln);
        let tax_base = tax_base(combined_income, config);
        let effective_tax_rate = effective_tax_rate(tax_base, combined_income, config);
        let tax_due = tax_due(income_domestic, effective_tax_rate, user_data);

        debug!(
            %combined_income,
            %tax_base,
            %effective_tax_rate,
            %tax_due,
            "totals computed"
        );

        Self {
            income_domestic,
            income_foreign_taxable,
            income_foreign_pln,
            combined_income,
            tax_base,
            effective_tax_rate,
            tax_due,
        }
    }

    /// Whether the taxpayer gets money back rather than paying.
    pub fn is_refund(&self) -> bool {
        self.tax_due < Decimal::ZERO
    }
}

impl fmt::Display for Totals {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Domestic income:        {:.2}", self.income_domestic)?;
        writeln!(f, "Foreign taxable income: {:.2}", self.income_foreign_taxable)?;
        writeln!(f, "Foreign income (PLN):   {:.2}", self.income_foreign_pln)?;
        writeln!(f, "Combined income:        {:.2}", self.combined_income)?;
        writeln!(f, "Tax base:               {:.2}", round2(self.tax_base))?;
        writeln!(f, "Effective tax rate:     {:.2}%", self.effective_tax_rate)?;
        if self.is_refund() {
            write!(f, "Refund:                 {:.2}", -self.tax_due)
        } else {
            write!(f, "Tax due:                {:.2}", self.tax_due)
        }
    }
}

/// Domestic income net of insurance contributions.
pub fn income_domestic(user_data: &UserData) -> Decimal {
    round2(user_data.domestic_income_base - user_data.insurance_paid)
}

/// Total foreign taxable income across all months.
pub fn income_foreign_taxable(user_data: &UserData) -> Decimal {
    sum(&user_data.foreign_months, |m| m.taxable_amount)
}

/// Total foreign income in PLN across all months.
pub fn income_foreign_pln(user_data: &UserData) -> Decimal {
    sum(&user_data.foreign_months, |m| m.pln_amount)
}

pub fn combined_income(
    income_domestic: Decimal,
    income_foreign_pln: Decimal,
) -> Decimal {
    round2(income_domestic + income_foreign_pln)
}

/// Tax on `combined_income` under the two-bracket schedule.
///
/// Income up to the threshold is taxed at the low rate and anything above it
/// at the high rate. The result is intentionally not rounded.
pub fn tax_base(
    combined_income: Decimal,
    config: &RateConfig,
) -> Decimal {
    if combined_income > config.tax_threshold {
        config.tax_threshold * config.tax_rate_low
            + (combined_income - config.tax_threshold) * config.tax_rate_high
    } else {
        combined_income * config.tax_rate_low
    }
}

/// Blended rate, in percent, after the tax-free allowance.
///
/// Returns zero when there is no combined income yet.
pub fn effective_tax_rate(
    tax_base: Decimal,
    combined_income: Decimal,
    config: &RateConfig,
) -> Decimal {
    if combined_income.is_zero() {
        return Decimal::ZERO;
    }

    round2((tax_base - config.tax_free_allowance) * Decimal::ONE_HUNDRED / combined_income)
}

/// Tax left to pay on domestic income at the effective rate.
///
/// A result that rounds to zero is reported as a plain positive zero.
pub fn tax_due(
    income_domestic: Decimal,
    effective_tax_rate: Decimal,
    user_data: &UserData,
) -> Decimal {
    let due = round2(
        income_domestic * effective_tax_rate / Decimal::ONE_HUNDRED
            - user_data.health_insurance_paid
            - user_data.tax_already_paid,
    );

    if due.is_zero() { Decimal::ZERO } else { due }
}
