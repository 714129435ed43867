use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use platewise_plan::{SweepGrid, load_records, optimize, run_sweep};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

mod output;

#[derive(Parser)]
#[command(name = "platewise")]
#[command(about = "Food preparation planning that minimizes wastage", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the optimal preparation quantities for a dataset
    Optimize {
        /// CSV dataset of menu items
        dataset: PathBuf,
        /// Where to write the plan
        #[arg(short, long, default_value = "Optimal_Food_Preparation_Quantities.csv")]
        output: PathBuf,
        /// Output format (pretty, json)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Sweep the optimum across budget, turnout, and wastage assumptions
    Sweep {
        /// CSV dataset of menu items
        dataset: PathBuf,
        /// Where to write the per-cell results
        #[arg(short, long, default_value = "Sensitivity_Analysis_Results.csv")]
        output: PathBuf,
    },
    /// Check a dataset for errors
    Check {
        /// The dataset to check
        dataset: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let outcome = match cli.command {
        Commands::Optimize {
            dataset,
            output,
            format,
        } => cmd_optimize(&dataset, &output, &format),
        Commands::Sweep { dataset, output } => cmd_sweep(&dataset, &output),
        Commands::Check { dataset } => cmd_check(&dataset),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_optimize(dataset: &Path, output: &Path, format: &str) -> Result<()> {
    let records = load_records(dataset)?;
    let plan = optimize(&records)?;

    output::write_plan_csv(&plan, output)?;

    if format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&plan).context("encoding plan as JSON")?
        );
    } else {
        println!("Status: OPTIMAL");
        println!("Optimal wastage: {:.2}", plan.total_wastage);
        println!();
        println!("Quantities:");
        for line in &plan.lines {
            println!(
                "  {:20} {:10.2} (wastage {}/unit, cost {}/unit)",
                line.food_type, line.optimal_quantity, line.wastage_per_unit, line.cost_per_unit
            );
        }
    }

    info!(output = %output.display(), "optimal preparation quantities saved");
    Ok(())
}

fn cmd_sweep(dataset: &Path, output: &Path) -> Result<()> {
    let records = load_records(dataset)?;
    let grid = SweepGrid::default();
    info!(cells = grid.len(), "running sensitivity sweep");

    let cells = run_sweep(&records, &grid);
    output::write_sweep_csv(&cells, output)?;

    let optimal = cells
        .iter()
        .filter(|cell| cell.optimal_wastage.is_some())
        .count();
    let skipped = grid.len() - cells.len();
    println!(
        "Sensitivity sweep: {} cells, {} optimal, {} skipped",
        cells.len(),
        optimal,
        skipped
    );
    println!("Results saved to {}", output.display());
    Ok(())
}

fn cmd_check(dataset: &Path) -> Result<()> {
    let records = load_records(dataset)?;

    let booked: u64 = records.iter().map(|r| u64::from(r.guests)).sum();
    let expected: u64 = records.iter().map(|r| u64::from(r.actual_guests)).sum();

    println!("✓ {} is valid", dataset.display());
    println!("  {} menu items", records.len());
    println!("  {} guests booked", booked);
    println!("  {} expected after no-shows", expected);
    Ok(())
}
