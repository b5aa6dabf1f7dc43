use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pit_core::input::check_amount;
use pit_core::{RateConfig, Totals, UserData, recalculate_all};
use pit_data::load_from_file;
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Polish income tax calculator for domestic and foreign income.
///
/// Reads the domestic figures from flags and the foreign-income months from
/// an optional CSV file, then prints the derived totals.
#[derive(Parser, Debug)]
#[command(name = "pit-calc")]
#[command(version, about, long_about = None)]
struct Args {
    /// Gross domestic income in PLN
    #[arg(long, default_value = "0", value_parser = parse_amount, allow_negative_numbers = true)]
    income_base: Decimal,

    /// Social insurance paid, deducted from domestic income
    #[arg(long, default_value = "0", value_parser = parse_amount, allow_negative_numbers = true)]
    insurance: Decimal,

    /// Health insurance paid, deducted from the tax due
    #[arg(long, default_value = "0", value_parser = parse_amount, allow_negative_numbers = true)]
    health_insurance: Decimal,

    /// Tax advances already paid
    #[arg(long, default_value = "0", value_parser = parse_amount, allow_negative_numbers = true)]
    tax_paid: Decimal,

    /// Foreign daily allowance rate, in the foreign currency
    #[arg(long, default_value = "0", value_parser = parse_amount, allow_negative_numbers = true)]
    daily_allowance: Decimal,

    /// CSV file with columns days_abroad,gross_salary,exchange_rate
    #[arg(short, long)]
    months: Option<PathBuf>,
}

/// Parses a decimal flag and applies the same bound as every other input.
fn parse_amount(value: &str) -> Result<Decimal, String> {
    let amount = value
        .trim()
        .parse::<Decimal>()
        .map_err(|e| format!("'{value}' is not a decimal number: {e}"))?;

    check_amount(amount).map_err(|e| e.to_string())
}

/// Honours `RUST_LOG`, otherwise `info`. No timestamps or targets so the
/// output stays readable next to the printed totals.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

/// Builds the session from the flags and the optional months file, with
/// every month already recalculated.
fn build_user_data(
    args: &Args,
    config: &RateConfig,
) -> Result<UserData> {
    let foreign_months = match &args.months {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load months from: {}", path.display()))?,
        None => Vec::new(),
    };

    let mut data = UserData {
        domestic_income_base: args.income_base,
        insurance_paid: args.insurance,
        health_insurance_paid: args.health_insurance,
        tax_already_paid: args.tax_paid,
        foreign_daily_allowance_rate: args.daily_allowance,
        foreign_months,
    };

    recalculate_all(&mut data, config);
    Ok(data)
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = RateConfig::default();

    let data = build_user_data(&args, &config)?;

    for (index, month) in data.foreign_months.iter().enumerate() {
        debug!(
            month = index + 1,
            days = month.days_abroad,
            taxable = %month.taxable_amount,
            pln = %month.pln_amount,
            "foreign month"
        );
    }

    let totals = Totals::compute(&data, &config);
    println!("{totals}");

    Ok(())
}
