//! Validation of values entering the calculations.
//!
//! Form widgets hand over already-parsed `f64` values; the CSV loader and the
//! command line hand over [`Decimal`]s. Either way a value must be finite and
//! within [`MAX_AMOUNT`], and a day count must not exceed [`MAX_DAYS_ABROAD`].
//! Inside those bounds no product or sum in the calculations can overflow a
//! [`Decimal`], so the calculations themselves stay infallible.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use thiserror::Error;

/// Largest magnitude accepted for any amount, rate, or factor: one billion.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// A month has at most 31 days.
pub const MAX_DAYS_ABROAD: u32 = 31;

const MAX_AMOUNT_F64: f64 = 1_000_000_000.0;

/// Errors that can occur when validating an input value.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    /// The value was NaN or infinite.
    #[error("value {0} is not a finite number")]
    NonFinite(f64),

    /// A float input is larger in magnitude than [`MAX_AMOUNT`].
    #[error("value {0} is out of range for an amount")]
    OutOfRange(f64),

    /// A decimal input is larger in magnitude than [`MAX_AMOUNT`].
    #[error("amount {0} exceeds the maximum of {max}", max = MAX_AMOUNT)]
    AmountTooLarge(Decimal),

    /// A day count was negative, fractional, or above [`MAX_DAYS_ABROAD`].
    #[error("invalid number of days abroad: {0}")]
    InvalidDays(f64),
}

/// Converts a money amount, rate, or factor.
pub fn amount(value: f64) -> Result<Decimal, InputError> {
    if !value.is_finite() {
        return Err(InputError::NonFinite(value));
    }
    if value.abs() > MAX_AMOUNT_F64 {
        return Err(InputError::OutOfRange(value));
    }

    Decimal::from_f64(value).ok_or(InputError::OutOfRange(value))
}

/// Checks an amount that is already a decimal.
pub fn check_amount(value: Decimal) -> Result<Decimal, InputError> {
    if value.abs() > MAX_AMOUNT {
        return Err(InputError::AmountTooLarge(value));
    }

    Ok(value)
}

/// Converts a count of days spent abroad.
pub fn days(value: f64) -> Result<u32, InputError> {
    if !value.is_finite() {
        return Err(InputError::NonFinite(value));
    }
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(MAX_DAYS_ABROAD) {
        return Err(InputError::InvalidDays(value));
    }

    Ok(value as u32)
}

/// Checks a day count that is already an integer.
pub fn check_days(value: u32) -> Result<u32, InputError> {
    if value > MAX_DAYS_ABROAD {
        return Err(InputError::InvalidDays(f64::from(value)));
    }

    Ok(value)
}
