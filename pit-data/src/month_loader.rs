//! CSV loader for foreign-income months.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Whitespace
//! around values is ignored.
//!
//! | Column          | Type    | Notes |
//! |-----------------|---------|-------|
//! | `days_abroad`   | integer | Whole days, `0` to `31` |
//! | `gross_salary`  | decimal | Foreign currency, at most one billion in magnitude |
//! | `exchange_rate` | decimal | PLN per unit of foreign currency, same bound |
//!
//! ```csv
//! days_abroad,gross_salary,exchange_rate
//! 10,2000.00,4.5
//! 0,1850.00,4.21
//! ```
//!
//! Rows come back in file order with zeroed derived amounts; run
//! [`recalculate_all`](pit_core::recalculate_all) before reading totals.

use std::io::Read;
use std::path::Path;

use pit_core::ForeignMonth;
use pit_core::input::{InputError, check_amount, check_days};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CsvRow {
    days_abroad: u32,
    gross_salary: Decimal,
    exchange_rate: Decimal,
}

/// Convert a single CSV row into a ForeignMonth.
///
/// row_number is 1-based (for error messages).
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<ForeignMonth, MonthLoadError> {
    let invalid = |source| MonthLoadError::InvalidValue {
        row: row_number,
        source,
    };

    Ok(ForeignMonth::new(
        check_days(row.days_abroad).map_err(invalid)?,
        check_amount(row.gross_salary).map_err(invalid)?,
        check_amount(row.exchange_rate).map_err(invalid)?,
    ))
}

/// Errors that can occur while loading months from CSV.
#[derive(Debug, Error)]
pub enum MonthLoadError {
    /// Bad structure, missing column, or a value of the wrong type
    /// (including negative or fractional day counts).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A value parsed but lies outside the accepted bounds.
    #[error("invalid value on row {row}: {source}")]
    InvalidValue {
        row: usize,
        #[source]
        source: InputError,
    },

    #[error("cannot read months file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses months from any reader.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<ForeignMonth>, MonthLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    let months = csv_reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect::<Result<Vec<_>, MonthLoadError>>()?;

    debug!(count = months.len(), "foreign months parsed");
    Ok(months)
}

/// Parses months from CSV text.
pub fn load_from_str(input: &str) -> Result<Vec<ForeignMonth>, MonthLoadError> {
    load_from_reader(input.as_bytes())
}

/// Reads a CSV file from disk and parses its months.
pub fn load_from_file(path: &Path) -> Result<Vec<ForeignMonth>, MonthLoadError> {
    let file = std::fs::File::open(path)?;
    load_from_reader(file)
}
