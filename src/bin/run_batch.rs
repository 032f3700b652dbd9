//! Compare repayment strategies for every client in a multi-client export
//!
//! Outputs one row per client with both strategies' figures

use anyhow::{Context, Result};
use clap::Parser;
use debt_planner::debt::{group_by_client, load_records};
use debt_planner::money::saturating_sum;
use debt_planner::scenario::ClientComparison;
use debt_planner::simulation::{max_months_from_env, MAX_MONTHS_ENV};
use debt_planner::ComparisonRunner;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch", about = "Compare repayment strategies for many clients")]
struct Args {
    /// CSV export with a client_id column
    #[arg(long, default_value = "data/sample_debts.csv")]
    input: PathBuf,

    /// Where to write the per-client comparison
    #[arg(long, default_value = "batch_comparison.csv")]
    output: PathBuf,

    /// Monthly budget beyond the minimum installments, same for every client
    #[arg(long, default_value = "0")]
    extra: Decimal,
}

#[derive(Serialize, Default)]
struct OutputRow {
    client_id: String,
    snowball_months: Option<u32>,
    snowball_interest: Option<Decimal>,
    avalanche_months: Option<u32>,
    avalanche_interest: Option<Decimal>,
    interest_saved: Option<Decimal>,
    months_saved: Option<i64>,
    recommended: Option<String>,
    error: Option<String>,
}

impl From<ClientComparison> for OutputRow {
    fn from(result: ClientComparison) -> Self {
        match result.outcome {
            Ok(summary) => OutputRow {
                client_id: result.client_id,
                snowball_months: Some(summary.snowball.months_to_payoff),
                snowball_interest: Some(summary.snowball.total_interest_paid),
                avalanche_months: Some(summary.avalanche.months_to_payoff),
                avalanche_interest: Some(summary.avalanche.total_interest_paid),
                interest_saved: Some(summary.interest_saved),
                months_saved: Some(summary.months_saved),
                recommended: Some(summary.recommended.to_string()),
                error: None,
            },
            Err(err) => OutputRow {
                client_id: result.client_id,
                error: Some(err.to_string()),
                ..Default::default()
            },
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let max_months = max_months_from_env().with_context(|| format!("reading {}", MAX_MONTHS_ENV))?;

    let start = Instant::now();
    println!("Loading debts from {}...", args.input.display());
    let records = load_records(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;
    let clients = group_by_client(&records)?;
    println!("Loaded {} records for {} clients in {:?}", records.len(), clients.len(), start.elapsed());

    println!("Running comparisons...");
    let run_start = Instant::now();
    let runner = ComparisonRunner::new(args.extra).with_max_months(max_months);
    let results = runner.run_batch(&clients);
    println!("Comparisons complete in {:?}", run_start.elapsed());

    let failures = results.iter().filter(|r| r.outcome.is_err()).count();
    let total_saved = saturating_sum(
        results
            .iter()
            .filter_map(|r| r.outcome.as_ref().ok())
            .map(|s| s.interest_saved),
    );

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for result in results {
        writer.serialize(OutputRow::from(result))?;
    }
    writer.flush()?;

    println!("\nResults written to: {}", args.output.display());
    println!("  Clients: {} ({} failed)", clients.len(), failures);
    println!("  Interest saved by avalanche across clients: {:.2}", total_saved);
    println!("  Total time: {:?}", start.elapsed());

    Ok(())
}
