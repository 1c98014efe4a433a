//! SimKit CLI - Command Line Front End for the Simulation Toolkit
//!
//! # Commands
//!
//! - `simkit generate <distribution>` - Draw a sample and preview it
//! - `simkit histogram <distribution>` - Draw a sample and print its frequency table
//! - `simkit bowling` - Run the bowling Monte Carlo simulation
//!
//! Configuration is layered: CLI flags override `SIMKIT_*` environment
//! variables, which override the TOML file given with `--config`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use commands::bowling::BowlingArgs;
use commands::generate::GenerateArgs;
use commands::histogram::HistogramArgs;
use commands::OutputFormat;
use config::{build_config, CliArgs};
pub use error::{CliError, Result};

/// SimKit statistical simulation toolkit
#[derive(Parser, Debug)]
#[command(name = "simkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Generator seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a sample and show its first values
    Generate(GenerateArgs),

    /// Generate a sample and print its frequency table
    Histogram(HistogramArgs),

    /// Simulate bowling games and estimate the chance of beating a target
    Bowling(BowlingArgs),
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            seed: cli.seed,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        log_level = %config.log_level,
        seed = ?config.seed,
        format = ?cli.format,
        "Configuration loaded"
    );

    match &cli.command {
        Commands::Generate(args) => commands::generate::run(args, config.seed, cli.format)?,
        Commands::Histogram(args) => commands::histogram::run(args, config.seed, cli.format)?,
        Commands::Bowling(args) => {
            commands::bowling::run(args, &config.bowling, config.seed, cli.format)?
        }
    }

    Ok(())
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
    fn test_parse_generate() {
        let cli = Cli::parse_from([
            "simkit", "--seed", "3", "generate", "normal", "-n", "51", "--mean", "-2", "-s", "0.5",
        ]);
        assert_eq!(cli.seed, Some(3));
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.sample.size, 51);
                assert_eq!(args.sample.mean, -2.0);
                assert_eq!(args.sample.std_dev, 0.5);
                assert_eq!(args.preview, 100);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_histogram_breaks() {
        let cli = Cli::parse_from([
            "simkit",
            "histogram",
            "uniform",
            "--breaks",
            "-1,0,0.5,1",
            "--format",
            "json",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Histogram(args) => {
                assert_eq!(args.breaks, Some(vec![-1.0, 0.0, 0.5, 1.0]));
                assert_eq!(args.bins, 10);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_bowling_overrides() {
        let cli = Cli::parse_from([
            "simkit", "bowling", "-n", "5000", "--target", "110", "--streams", "4", "--start", "10",
        ]);
        let args: CliArgs = (&cli).into();
        assert!(args.config_file.is_none());
        match cli.command {
            Commands::Bowling(args) => {
                assert_eq!(args.iterations, Some(5000));
                assert_eq!(args.target, Some(110));
                assert_eq!(args.streams, Some(4));
                assert_eq!(args.rounds, None);
                assert_eq!(args.start, 10);
                assert_eq!(args.count, 20);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_target() {
        let cli = Cli::parse_from(["simkit", "bowling", "--target", "-10"]);
        match cli.command {
            Commands::Bowling(args) => assert_eq!(args.target, Some(-10)),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
