//! CocoaLab CLI — build the monthly cocoa analytical dataset.
//!
//! Loads the daily price/weather table and the monthly search-trend
//! table, runs the cleaning/feature/merge/aggregate pipeline, and writes
//! the monthly CSV. Paths come from defaults, an optional TOML config,
//! or per-path flags (highest precedence).

use anyhow::{Context, Result};
use clap::Parser;
use cocoalab_core::config::PipelineConfig;
use cocoalab_core::output::write_monthly_csv;
use cocoalab_core::pipeline::{build_monthly_dataset, RunSummary};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cocoalab",
    about = "CocoaLab — monthly cocoa analytical dataset builder"
)]
struct Cli {
    /// Path to a TOML config file with daily_path / trend_path / output_path.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Daily price/weather CSV. Overrides the config file.
    #[arg(long)]
    daily: Option<PathBuf>,

    /// Monthly search-trend CSV. Overrides the config file.
    #[arg(long)]
    trend: Option<PathBuf>,

    /// Output CSV path. Overrides the config file.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the run summary as JSON instead of the text report.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PipelineConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    if let Some(daily) = cli.daily {
        config.daily_path = daily;
    }
    if let Some(trend) = cli.trend {
        config.trend_path = trend;
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }

    let result = build_monthly_dataset(&config)?;
    write_monthly_csv(&config.output_path, &result.monthly)
        .with_context(|| format!("writing {}", config.output_path.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result.summary)?);
    } else {
        print_summary(&result.summary, &config);
    }

    Ok(())
}

fn print_summary(summary: &RunSummary, config: &PipelineConfig) {
    println!();
    println!("=== Monthly Dataset ===");
    println!("Daily rows:     {} ({} after clean)", summary.daily_rows_in, summary.daily_rows_clean);
    println!("Trend rows:     {}", summary.trend_rows);
    match (summary.first_month, summary.last_month) {
        (Some(first), Some(last)) => {
            println!("Months:         {} ({} to {})", summary.months, first, last)
        }
        _ => println!("Months:         0"),
    }
    println!("Dataset hash:   {}", summary.dataset_hash);
    println!("Output:         {}", config.output_path.display());
    println!();
}
