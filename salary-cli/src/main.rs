use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use salary_cli::config::{AppConfig, InputOverrides};
use salary_cli::{app, logging, render};
use salary_core::TaxRegime;
use tracing::debug;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// In-hand salary calculator for Indian salaries.
///
/// Derives CTC, PF, NPS, gratuity, professional tax, income tax and cess
/// from a fixed gross salary, and prints the yearly and monthly net pay.
#[derive(Debug, Parser)]
#[command(name = "in-hand", version, about)]
struct Cli {
    /// Fixed gross salary per year in INR; digit grouping such as
    /// `18,00,000` is accepted.
    #[arg(long, value_parser = parse_amount)]
    gross: Option<Decimal>,

    /// Employer NPS contribution in percent of basic salary (0 to 14).
    #[arg(long, value_parser = parse_amount)]
    nps: Option<Decimal>,

    /// Tax regime: `new` or `old`.
    #[arg(long, value_parser = parse_regime)]
    regime: Option<TaxRegime>,

    /// TOML file with input defaults and logging settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV file of inputs to compute in one go (columns `gross_salary`,
    /// `nps_percent` and optionally `regime`).
    #[arg(long, conflicts_with_all = ["gross", "nps", "regime"])]
    input: Option<PathBuf>,

    /// Where to write the computed batch as CSV. Requires `--input`.
    #[arg(long, requires = "input")]
    output: Option<PathBuf>,

    /// Log level or `EnvFilter` directive; `RUST_LOG` takes precedence.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_amount(s: &str) -> Result<Decimal, String> {
    salary_data::parse_decimal(s).map_err(|e| e.to_string())
}

fn parse_regime(s: &str) -> Result<TaxRegime, String> {
    TaxRegime::parse(s).ok_or_else(|| format!("unknown regime '{s}', expected 'new' or 'old'"))
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    let log_level = cli.log_level.as_deref().or(config.logging.level.as_deref());
    let log_file = cli.log_file.as_deref().or(config.logging.file.as_deref());
    logging::init_logging(log_level, log_file)?;
    debug!(?cli, "parsed arguments");

    if let Some(input_path) = &cli.input {
        let breakdowns = app::run_batch(input_path, cli.output.as_deref())?;
        for (idx, breakdown) in breakdowns.iter().enumerate() {
            println!("{}", render::render_summary_line(idx + 1, breakdown));
        }
        return Ok(());
    }

    let input = config
        .defaults
        .resolve(InputOverrides {
            gross_salary: cli.gross,
            nps_percent: cli.nps,
            regime: cli.regime,
        })
        .context("invalid input")?;

    let calculation = app::calculate(&input).context("calculation failed")?;
    print!("{}", render::render_markdown(&calculation.breakdown));
    println!();
    print!("{}", render::render_slab_table(&calculation.slabs));

    Ok(())
}
