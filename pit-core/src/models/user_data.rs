use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::{calculate_month, recalculate_all};
use crate::models::{ForeignMonth, RateConfig};

/// Everything the taxpayer enters for one session.
///
/// Values are expected to be within the bounds checked by
/// [`input`](crate::input).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserData {
    /// Gross domestic income in PLN.
    pub domestic_income_base: Decimal,
    /// Social insurance contributions, deducted from domestic income.
    pub insurance_paid: Decimal,
    /// Health insurance contributions, deducted from the tax due.
    pub health_insurance_paid: Decimal,
    /// Tax advances already paid during the year.
    pub tax_already_paid: Decimal,
    /// Daily allowance in the foreign currency. Shared by all months, so a
    /// change must go through [`UserData::set_daily_allowance_rate`].
    pub foreign_daily_allowance_rate: Decimal,
    /// Foreign income months in the order they were entered.
    pub foreign_months: Vec<ForeignMonth>,
}

impl UserData {
    /// Appends an empty month and returns it for the caller to fill in.
    pub fn add_month(&mut self) -> &mut ForeignMonth {
        self.foreign_months.push(ForeignMonth::default());
        debug!(count = self.foreign_months.len(), "foreign month added");

        let last = self.foreign_months.len() - 1;
        &mut self.foreign_months[last]
    }

    /// Removes the month at `index`, keeping the order of the others.
    ///
    /// Months are independent, so nothing else is recalculated.
    pub fn remove_month(
        &mut self,
        index: usize,
    ) -> Option<ForeignMonth> {
        if index >= self.foreign_months.len() {
            return None;
        }

        let removed = self.foreign_months.remove(index);
        debug!(index, count = self.foreign_months.len(), "foreign month removed");
        Some(removed)
    }

    /// Applies `edit` to the month at `index` and recalculates just that month.
    pub fn edit_month<F>(
        &mut self,
        index: usize,
        config: &RateConfig,
        edit: F,
    ) -> Option<&ForeignMonth>
    where
        F: FnOnce(&mut ForeignMonth),
    {
        let rate = self.foreign_daily_allowance_rate;
        let month = self.foreign_months.get_mut(index)?;

        edit(month);
        calculate_month(month, rate, config);

        Some(month)
    }

    /// Stores a new daily allowance rate and recalculates every month.
    pub fn set_daily_allowance_rate(
        &mut self,
        rate: Decimal,
        config: &RateConfig,
    ) {
        self.foreign_daily_allowance_rate = rate;
        recalculate_all(self, config);
    }
}
