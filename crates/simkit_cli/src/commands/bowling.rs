//! Bowling command implementation
//!
//! Runs the Monte Carlo simulation and displays a window of trials together
//! with the probability of beating the target score.

use std::io::Write;

use clap::Args;
use serde::Serialize;
use simkit_core::mc::{run_simulation, BowlingConfig, SimulationResult, TrialRow};
use tracing::info;

use super::OutputFormat;
use crate::config::BowlingSection;
use crate::{CliError, Result};

/// Arguments of `simkit bowling`; unset values come from the configuration.
#[derive(Args, Clone, Debug, Default)]
pub struct BowlingArgs {
    /// Number of simulated games
    #[arg(short = 'n', long)]
    pub iterations: Option<usize>,

    /// Rounds per game
    #[arg(short, long)]
    pub rounds: Option<usize>,

    /// Score a game must strictly exceed to count as a success
    #[arg(short, long, allow_negative_numbers = true)]
    pub target: Option<i64>,

    /// Points for a strike
    #[arg(long)]
    pub strike_bonus: Option<u32>,

    /// Points for a spare
    #[arg(long)]
    pub spare_bonus: Option<u32>,

    /// Parallel trial streams
    #[arg(long)]
    pub streams: Option<usize>,

    /// First iteration to display (1-based)
    #[arg(long, default_value_t = 1)]
    pub start: usize,

    /// Number of iterations to display
    #[arg(long, default_value_t = 20)]
    pub count: usize,
}

impl BowlingArgs {
    /// Overlays the command-line values on the configured section.
    pub fn apply(&self, section: &BowlingSection) -> BowlingSection {
        BowlingSection {
            strike_bonus: self.strike_bonus.unwrap_or(section.strike_bonus),
            spare_bonus: self.spare_bonus.unwrap_or(section.spare_bonus),
            rounds_per_game: self.rounds.unwrap_or(section.rounds_per_game),
            iterations: self.iterations.unwrap_or(section.iterations),
            target_score: self.target.unwrap_or(section.target_score),
            streams: self.streams.unwrap_or(section.streams),
            ..section.clone()
        }
    }

    /// Validated simulation configuration.
    pub fn config(&self, section: &BowlingSection, seed: Option<u64>) -> Result<BowlingConfig> {
        let mut builder = self.apply(section).builder()?;
        if let Some(seed) = seed {
            builder = builder.seed(seed);
        }
        Ok(builder.build()?)
    }
}

#[derive(Debug, Serialize)]
struct BowlingReport<'a> {
    seed: Option<u64>,
    iterations: usize,
    target_score: i64,
    successes: usize,
    success_probability: f64,
    mean_score: f64,
    min_score: Option<u32>,
    max_score: Option<u32>,
    rows: &'a [TrialRow],
}

/// Run the bowling command
pub fn run(
    args: &BowlingArgs,
    section: &BowlingSection,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    if args.start == 0 {
        return Err(CliError::InvalidArgument(
            "--start is 1-based and must be at least 1".to_string(),
        ));
    }

    let config = args.config(section, seed)?;
    info!(
        iterations = config.iterations(),
        rounds = config.rounds_per_game(),
        target = config.target_score(),
        streams = config.streams(),
        "Starting bowling simulation"
    );

    let result = run_simulation(&config)?;
    info!(
        probability = result.success_probability(),
        "Simulation complete"
    );

    let stdout = std::io::stdout();
    render(&mut stdout.lock(), &result, args.start, args.count, format)
}

pub(crate) fn render<W: Write>(
    out: &mut W,
    result: &SimulationResult,
    start: usize,
    count: usize,
    format: OutputFormat,
) -> Result<()> {
    let rows = result.window(start, count);
    match format {
        OutputFormat::Json => {
            let report = BowlingReport {
                seed: result.seed(),
                iterations: result.iterations(),
                target_score: result.target_score(),
                successes: result.successes(),
                success_probability: result.success_probability(),
                mean_score: result.mean_score(),
                min_score: result.min_score(),
                max_score: result.max_score(),
                rows: &rows,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            writeln!(out, "{:>10}  {:>6}", "Iteration", "Score")?;
            writeln!(out, "{}", "-".repeat(32))?;
            for row in &rows {
                let flag = if row.exceeds_target { "" } else { "  below target" };
                writeln!(out, "{:>10}  {:>6}{}", row.iteration, row.score, flag)?;
            }
            if rows.is_empty() {
                writeln!(out, "(no iterations in range)")?;
            }
            writeln!(out)?;
            if let Some(seed) = result.seed() {
                writeln!(out, "Seed:       {seed}")?;
            }
            writeln!(out, "Iterations: {}", result.iterations())?;
            writeln!(
                out,
                "Mean score: {:.2} (min {}, max {})",
                result.mean_score(),
                result.min_score().unwrap_or(0),
                result.max_score().unwrap_or(0)
            )?;
            writeln!(
                out,
                "P(score > {}) = {:.2}%",
                result.target_score(),
                result.success_probability()
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> SimulationResult {
        SimulationResult::new(vec![100, 130, 120, 150], 120, Some(9))
    }

    #[test]
    fn test_args_override_section() {
        let args = BowlingArgs {
            iterations: Some(50),
            target: Some(80),
            ..Default::default()
        };
        let section = BowlingSection {
            rounds_per_game: 4,
            ..Default::default()
        };
        let merged = args.apply(&section);
        assert_eq!(merged.iterations, 50);
        assert_eq!(merged.target_score, 80);
        assert_eq!(merged.rounds_per_game, 4);
        assert_eq!(merged.strike_bonus, 20);
    }

    #[test]
    fn test_config_carries_seed() {
        let args = BowlingArgs {
            iterations: Some(10),
            ..Default::default()
        };
        let config = args.config(&BowlingSection::default(), Some(4)).unwrap();
        assert_eq!(config.seed(), Some(4));
        assert_eq!(config.iterations(), 10);
    }

    #[test]
    fn test_config_rejects_zero_rounds() {
        let args = BowlingArgs {
            rounds: Some(0),
            ..Default::default()
        };
        let err = args.config(&BowlingSection::default(), None).unwrap_err();
        assert!(matches!(err, CliError::Simulation(_)));
    }

    #[test]
    fn test_config_rejects_overflowing_bonus() {
        let args = BowlingArgs {
            strike_bonus: Some(10_000_000),
            rounds: Some(1_000),
            ..Default::default()
        };
        let err = args.config(&BowlingSection::default(), Some(1)).unwrap_err();
        assert!(matches!(
            err,
            CliError::Simulation(simkit_core::mc::ConfigError::ScoreOverflow { .. })
        ));
    }

    #[test]
    fn test_negative_target_reports_certain_success() {
        let result = SimulationResult::new(vec![60, 75], -3, None);
        let mut out = Vec::new();
        render(&mut out, &result, 1, 2, OutputFormat::Table).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("below target"));
        assert!(text.contains("P(score > -3) = 100.00%"));
    }

    #[test]
    fn test_table_flags_rows_below_target() {
        let mut out = Vec::new();
        render(&mut out, &result(), 1, 3, OutputFormat::Table).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[2].ends_with("below target"));
        assert!(!lines[3].ends_with("below target"));
        // Equal to the target is not a success.
        assert!(lines[4].ends_with("below target"));
        assert!(text.contains("P(score > 120) = 50.00%"));
        assert!(text.contains("Seed:       9"));
    }

    #[test]
    fn test_window_past_end() {
        let mut out = Vec::new();
        render(&mut out, &result(), 10, 5, OutputFormat::Table).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("(no iterations in range)"));
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        render(&mut out, &result(), 2, 2, OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["success_probability"], 50.0);
        assert_eq!(json["successes"], 2);
        assert_eq!(json["rows"].as_array().unwrap().len(), 2);
        assert_eq!(json["rows"][0]["iteration"], 2);
        assert_eq!(json["rows"][0]["exceeds_target"], true);
    }
}
