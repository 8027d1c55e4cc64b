//! fra-hedge - Command Line Operations for FRA Freight Hedging
//!
//! Operational entry point for the FRA freight hedge engine.
//!
//! # Commands
//!
//! - `fra-hedge simulate` - Simulate freight-rate paths and summarise each step
//! - `fra-hedge scenario` - Mean and dispersion of the FRA settlement
//! - `fra-hedge hedge` - Hedged vs unhedged cost comparison
//! - `fra-hedge grid` - Sensitivity sweep over rates, volatilities and maturities
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate resolves configuration,
//! installs logging, and renders results from the engine crates.
//! Results go to stdout and logs to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::grid::AxisArgs;
use commands::{ContractArgs, EngineArgs, ProcessArgs};
use config::CliConfig;
use output::{OutputFormat, PivotAxis};

/// FRA freight hedge simulation CLI
#[derive(Parser)]
#[command(name = "fra-hedge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible simulation
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate freight-rate paths and print per-step statistics
    Simulate {
        #[command(flatten)]
        process: ProcessArgs,

        #[command(flatten)]
        engine: EngineArgs,

        /// Also print the first K trajectories
        #[arg(long, default_value = "0")]
        show_paths: usize,

        /// Output format (table, csv, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Evaluate the FRA payoff distribution for one scenario
    Scenario {
        #[command(flatten)]
        process: ProcessArgs,

        #[command(flatten)]
        engine: EngineArgs,

        #[command(flatten)]
        contract: ContractArgs,

        /// Output format (table, csv, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Compare hedged and unhedged freight cost
    Hedge {
        #[command(flatten)]
        process: ProcessArgs,

        #[command(flatten)]
        engine: EngineArgs,

        #[command(flatten)]
        contract: ContractArgs,

        /// Output format (table, csv, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Run the sensitivity grid
    Grid {
        #[command(flatten)]
        axes: AxisArgs,

        #[command(flatten)]
        engine: EngineArgs,

        #[command(flatten)]
        contract: ContractArgs,

        /// Output format (table, csv, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Pivot mean PnL, holding this axis (rate, volatility, maturity) at its first value
        #[arg(long)]
        pivot: Option<String>,
    },
}

fn init_tracing(config: &CliConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    init_tracing(&config, cli.verbose);
    if let Some(path) = &cli.config {
        info!("Loaded configuration from {}", path.display());
    }
    debug!(?config, "resolved configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Simulate {
            process,
            engine,
            show_paths,
            format,
        } => commands::simulate::run(
            config,
            &process,
            &engine,
            show_paths,
            format.parse::<OutputFormat>()?,
            &mut out,
        ),
        Commands::Scenario {
            process,
            engine,
            contract,
            format,
        } => commands::scenario::run(
            config,
            &process,
            &engine,
            &contract,
            format.parse::<OutputFormat>()?,
            &mut out,
        ),
        Commands::Hedge {
            process,
            engine,
            contract,
            format,
        } => commands::hedge::run(
            config,
            &process,
            &engine,
            &contract,
            format.parse::<OutputFormat>()?,
            &mut out,
        ),
        Commands::Grid {
            axes,
            engine,
            contract,
            format,
            pivot,
        } => commands::grid::run(
            config,
            &axes,
            &engine,
            &contract,
            format.parse::<OutputFormat>()?,
            pivot.as_deref().map(str::parse::<PivotAxis>).transpose()?,
            &mut out,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_grid_lists() {
        let cli = Cli::try_parse_from([
            "fra-hedge",
            "--seed",
            "42",
            "grid",
            "--rates",
            "12000,14000",
            "--vols",
            "0.1,0.2",
            "--maturities",
            "0.25",
            "--pivot",
            "maturity",
            "--format",
            "csv",
        ])
        .unwrap();

        assert_eq!(cli.seed, Some(42));
        match cli.command {
            Commands::Grid {
                axes, pivot, format, ..
            } => {
                assert_eq!(axes.rates, vec![12_000.0, 14_000.0]);
                assert_eq!(axes.vols, vec![0.1, 0.2]);
                assert_eq!(axes.maturities, vec![0.25]);
                assert_eq!(pivot.as_deref(), Some("maturity"));
                assert_eq!(format, "csv");
            }
            _ => panic!("expected grid command"),
        }
    }

    #[test]
    fn test_parse_scenario_flags() {
        let cli = Cli::try_parse_from([
            "fra-hedge",
            "scenario",
            "--volatility",
            "0.25",
            "--horizon",
            "0.25",
            "-n",
            "500",
            "--eval-day",
            "21",
        ])
        .unwrap();

        match cli.command {
            Commands::Scenario {
                process,
                engine,
                contract,
                ..
            } => {
                assert_eq!(process.volatility, Some(0.25));
                assert_eq!(engine.paths, Some(500));
                assert_eq!(contract.eval_day, Some(21));
            }
            _ => panic!("expected scenario command"),
        }
    }
}
