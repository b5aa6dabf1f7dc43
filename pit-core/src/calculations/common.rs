//! Common utility functions for tax calculations.
//!
//! Every money amount or rate the calculator produces passes through
//! [`round2`], so the rounding rule lives in exactly one place.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to two decimal places, midpoints away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::calculations::common::round2;
///
/// assert_eq!(round2(dec!(7510.944)), dec!(7510.94));
/// assert_eq!(round2(dec!(0.125)), dec!(0.13));
/// assert_eq!(round2(dec!(-0.125)), dec!(-0.13)); // Away from zero
/// ```
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sums one field across a slice of records and rounds the result.
///
/// The field is selected with an accessor closure. An empty slice sums to zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::ForeignMonth;
/// use pit_core::calculations::common::sum;
///
/// let months = vec![
///     ForeignMonth { pln_amount: dec!(100.004), ..Default::default() },
///     ForeignMonth { pln_amount: dec!(200.004), ..Default::default() },
/// ];
///
/// assert_eq!(sum(&months, |m| m.pln_amount), dec!(300.01));
/// assert_eq!(sum(&[] as &[ForeignMonth], |m| m.pln_amount), dec!(0));
/// ```
pub fn sum<T, F>(
    records: &[T],
    field: F,
) -> Decimal
where
    F: Fn(&T) -> Decimal,
{
    let total = records
        .iter()
        .fold(Decimal::ZERO, |total, record| total + field(record));

    round2(total)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::ForeignMonth;

    // =========================================================================
    // round2 tests
    // =========================================================================

    #[test]
    fn round2_rounds_down_below_midpoint() {
        assert_eq!(round2(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn round2_rounds_up_at_midpoint() {
        assert_eq!(round2(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn round2_rounds_negative_midpoint_away_from_zero() {
        assert_eq!(round2(dec!(-123.455)), dec!(-123.46));
    }

    #[test]
    fn round2_leaves_whole_numbers_alone() {
        assert_eq!(round2(dec!(9000)), dec!(9000));
    }

    #[test]
    fn round2_is_idempotent() {
        let values = [
            dec!(0),
            dec!(0.005),
            dec!(-0.005),
            dec!(1.23456),
            dec!(-98765.4321),
            dec!(14.6349999),
            dec!(20026.08),
        ];

        for value in values {
            let once = round2(value);
            assert_eq!(round2(once), once, "round2 not idempotent for {value}");
        }
    }

    // =========================================================================
    // sum tests
    // =========================================================================

    #[test]
    fn sum_of_empty_slice_is_zero() {
        let months: Vec<ForeignMonth> = Vec::new();

        assert_eq!(sum(&months, |m| m.taxable_amount), dec!(0));
    }

    #[test]
    fn sum_rounds_the_running_total_once() {
        // Each value alone rounds down, the total rounds up.
        let months = vec![
            ForeignMonth {
                taxable_amount: dec!(0.004),
                ..Default::default()
            },
            ForeignMonth {
                taxable_amount: dec!(0.004),
                ..Default::default()
            },
        ];

        assert_eq!(sum(&months, |m| m.taxable_amount), dec!(0.01));
    }

    #[test]
    fn sum_reads_only_the_selected_field() {
        let months = vec![
            ForeignMonth {
                taxable_amount: dec!(1700),
                pln_amount: dec!(7510.94),
                ..Default::default()
            },
            ForeignMonth {
                taxable_amount: dec!(-50),
                pln_amount: dec!(-349.06),
                ..Default::default()
            },
        ];

        assert_eq!(sum(&months, |m| m.taxable_amount), dec!(1650));
        assert_eq!(sum(&months, |m| m.pln_amount), dec!(7161.88));
    }
}
