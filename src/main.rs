//! Rent Projection CLI
//!
//! One-shot batch transform: historical installments plus the index table
//! in, merged projection table out.

use anyhow::Context;
use clap::Parser;
use log::info;
use rent_projection::dataset::{load_installments, write_installments};
use rent_projection::{CycleAnchor, IndexTable, PortfolioAggregator};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rent-projection")]
#[command(about = "Projects future rent installments for a portfolio of rental contracts")]
struct Args {
    /// Historical installment table produced by the upstream ETL (pipe-delimited)
    #[arg(long, default_value = "2-trusted/transfers_projection_etl_result.csv")]
    history: PathBuf,

    /// Readjustment index table (comma-delimited)
    #[arg(long, default_value = "2-trusted/index_table.csv")]
    index_table: PathBuf,

    /// Output path for the merged projection table (pipe-delimited)
    #[arg(long, default_value = "3-result/transfer_projection_result.csv")]
    output: PathBuf,

    /// Date anchoring each contract's 12-month readjustment cycles
    #[arg(long, value_enum, default_value_t = CycleAnchor::ContractStart)]
    anchor: CycleAnchor,

    /// Optional path for a JSON run report
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let index_table = IndexTable::from_path(&args.index_table).with_context(|| {
        format!("failed to load index table from {}", args.index_table.display())
    })?;
    info!("loaded {} index entries", index_table.len());

    let historical = load_installments(&args.history).with_context(|| {
        format!("failed to load historical dataset from {}", args.history.display())
    })?;
    info!("loaded {} historical installments", historical.len());

    let aggregator = PortfolioAggregator::new(index_table, args.anchor);
    let (merged, summary) = aggregator.run(historical);

    write_installments(&args.output, &merged)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!(
        "Projection complete. {} rows written to {}",
        merged.len(),
        args.output.display()
    );

    if let Some(report_path) = &args.report {
        let report = serde_json::to_string_pretty(&summary)?;
        std::fs::write(report_path, report)
            .with_context(|| format!("failed to write report to {}", report_path.display()))?;
        println!("Run report written to {}", report_path.display());
    }

    Ok(())
}
