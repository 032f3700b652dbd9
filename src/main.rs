//! Debt Planner CLI
//!
//! Compares snowball and avalanche repayment for one client's debts and
//! optionally writes the month-by-month schedule of a chosen strategy.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use debt_planner::{
    compare_with,
    debt::{load_records, loader::to_debts, preferred_strategy},
    simulation::{max_months_from_env, SimulationSummary, MAX_MONTHS_ENV},
    PortfolioSummary, SimulationConfig, Strategy,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "debt_planner", version, about = "Compare debt repayment strategies for a client")]
struct Args {
    /// CSV export of the client's debt records
    #[arg(long, default_value = "data/sample_debts.csv")]
    debts: PathBuf,

    /// Only use records of this client (default: every record in the file)
    #[arg(long)]
    client: Option<String>,

    /// Monthly budget beyond the minimum installments
    #[arg(long, default_value = "0")]
    extra: Decimal,

    /// Strategy whose schedule is written with --schedule-out
    /// (default: the method most records ask for, else avalanche)
    #[arg(long)]
    strategy: Option<Strategy>,

    /// First month of the plan (YYYY-MM-DD), used for debt-free dates
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Write the monthly schedule to this CSV file
    #[arg(long)]
    schedule_out: Option<PathBuf>,

    /// Print the comparison as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ScheduleRow<'a> {
    month: u32,
    debt_id: &'a str,
    opening_balance: Decimal,
    interest: Decimal,
    payment: Decimal,
    closing_balance: Decimal,
    focus: bool,
    paid_off: bool,
}

#[derive(Serialize)]
struct JsonReport {
    portfolio: PortfolioSummary,
    comparison: debt_planner::comparison::ComparisonSummary,
    snowball_debt_free: Option<NaiveDate>,
    avalanche_debt_free: Option<NaiveDate>,
}

fn money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

fn describe(summary: &SimulationSummary, start: Option<NaiveDate>) -> String {
    let (years, months) = summary.years_and_months();
    let mut line = format!(
        "{:<10} {:>6} months ({}y {}m)  interest {:>14}  order: {}",
        summary.strategy.to_string(),
        summary.months_to_payoff,
        years,
        months,
        money(summary.total_interest_paid),
        summary.payoff_order.join(" -> ")
    );
    if let Some(date) = start.and_then(|s| summary.debt_free_date(s)) {
        line.push_str(&format!("  debt-free {}", date));
    }
    line
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut records = load_records(&args.debts)
        .with_context(|| format!("loading debts from {}", args.debts.display()))?;
    if let Some(client) = &args.client {
        records.retain(|r| r.client_id.as_deref() == Some(client.as_str()));
        anyhow::ensure!(!records.is_empty(), "no debt records for client {}", client);
    }
    let debts = to_debts(&records)?;
    let strategy = args
        .strategy
        .or_else(|| preferred_strategy(&records))
        .unwrap_or(Strategy::Avalanche);
    log::info!("loaded {} debt records from {}", debts.len(), args.debts.display());

    let max_months = max_months_from_env().with_context(|| format!("reading {}", MAX_MONTHS_ENV))?;
    let config = SimulationConfig::new(strategy, args.extra).with_max_months(max_months);
    let portfolio = PortfolioSummary::from_debts(&debts);
    let comparison = compare_with(&debts, &config).context("simulating repayment")?;
    let summary = comparison.summary();

    if args.json {
        let report = JsonReport {
            snowball_debt_free: args.start_date.and_then(|s| summary.snowball.debt_free_date(s)),
            avalanche_debt_free: args.start_date.and_then(|s| summary.avalanche.debt_free_date(s)),
            portfolio,
            comparison: summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Debt Planner v{}", env!("CARGO_PKG_VERSION"));
        println!("==================\n");
        println!("Portfolio:");
        println!("  Total balance:      {:>14}", money(portfolio.total_balance));
        println!("  Active debts:       {:>14}", portfolio.active_count);
        println!("  Negotiated debts:   {:>14}", portfolio.negotiated_count);
        println!("  Monthly commitment: {:>14}", money(portfolio.monthly_commitment));
        println!("  Extra payment:      {:>14}", money(args.extra));
        println!();

        println!("Strategies:");
        println!("  {}", describe(&summary.snowball, args.start_date));
        println!("  {}", describe(&summary.avalanche, args.start_date));
        println!();
        println!(
            "Avalanche vs snowball: {} interest saved, {} months saved",
            money(summary.interest_saved),
            summary.months_saved
        );
        println!("Recommended: {}", summary.recommended);
    }

    if let Some(path) = &args.schedule_out {
        let result = comparison.into_result(strategy);
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("creating {}", path.display()))?;

        let mut rows = 0usize;
        for month in result.schedule {
            for snap in &month.snapshots {
                writer.serialize(ScheduleRow {
                    month: month.month,
                    debt_id: &snap.debt_id,
                    opening_balance: snap.opening_balance,
                    interest: snap.interest_accrued,
                    payment: snap.payment_applied,
                    closing_balance: snap.closing_balance,
                    focus: snap.is_focus,
                    paid_off: snap.paid_off,
                })?;
                rows += 1;
            }
        }
        writer.flush()?;
        log::info!("wrote {} schedule rows to {}", rows, path.display());
        if !args.json {
            println!("\n{} schedule written to: {}", strategy, path.display());
        }
    }

    Ok(())
}
