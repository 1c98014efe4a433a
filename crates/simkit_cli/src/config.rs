//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line arguments.

use serde::Deserialize;
use simkit_core::bowling::{
    BowlingTables, FIRST_BALL_PINS, FIRST_BALL_WEIGHTS, SECOND_BALL_WEIGHTS,
};
use simkit_core::mc::{BowlingConfig, BowlingConfigBuilder};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "SIMKIT_LOG_LEVEL";

/// Environment variable overriding the generator seed.
pub const ENV_SEED: &str = "SIMKIT_SEED";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid seed: {0}. Must be an unsigned 64-bit integer")]
    InvalidSeed(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Invalid probability tables: {0}")]
    InvalidTables(#[from] simkit_core::SimError),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// One first-ball outcome and its weight.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FirstBallWeight {
    pub pins: u32,
    pub weight: f64,
}

/// Second-ball weights following a given first ball, indexed by extra pins.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SecondBallWeights {
    pub first: u32,
    pub weights: Vec<f64>,
}

/// `[bowling]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BowlingSection {
    pub strike_bonus: u32,
    pub spare_bonus: u32,
    pub rounds_per_game: usize,
    pub iterations: usize,
    pub target_score: i64,
    pub streams: usize,
    /// Replaces the default first-ball table when present.
    pub first_ball: Option<Vec<FirstBallWeight>>,
    /// Replaces the default second-ball tables when present.
    pub second_ball: Option<Vec<SecondBallWeights>>,
}

impl Default for BowlingSection {
    fn default() -> Self {
        Self {
            strike_bonus: 20,
            spare_bonus: 15,
            rounds_per_game: 10,
            iterations: 100_000,
            target_score: 120,
            streams: 1,
            first_ball: None,
            second_ball: None,
        }
    }
}

impl BowlingSection {
    /// Probability tables, falling back to the empirical defaults for any
    /// table the file leaves out.
    pub fn tables(&self) -> Result<BowlingTables, ConfigError> {
        if self.first_ball.is_none() && self.second_ball.is_none() {
            return Ok(BowlingTables::default());
        }

        let first: Vec<(u32, f64)> = match &self.first_ball {
            Some(rows) => rows.iter().map(|r| (r.pins, r.weight)).collect(),
            None => FIRST_BALL_PINS.into_iter().zip(FIRST_BALL_WEIGHTS).collect(),
        };
        let second: BTreeMap<u32, Vec<f64>> = match &self.second_ball {
            Some(rows) => rows.iter().map(|r| (r.first, r.weights.clone())).collect(),
            None => SECOND_BALL_WEIGHTS
                .iter()
                .map(|(first, weights)| (*first, weights.to_vec()))
                .collect(),
        };

        Ok(BowlingTables::from_weights(&first, &second)?)
    }

    /// Builder seeded with this section; validation happens at `build()`.
    pub fn builder(&self) -> Result<BowlingConfigBuilder, ConfigError> {
        Ok(BowlingConfig::builder()
            .strike_bonus(self.strike_bonus)
            .spare_bonus(self.spare_bonus)
            .rounds_per_game(self.rounds_per_game)
            .iterations(self.iterations)
            .target_score(self.target_score)
            .streams(self.streams)
            .tables(self.tables()?))
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimkitConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Generator seed; drawn from the OS when absent
    pub seed: Option<u64>,
    /// Bowling simulation defaults
    pub bowling: BowlingSection,
}

impl Default for SimkitConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            seed: None,
            bowling: BowlingSection::default(),
        }
    }
}

impl SimkitConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: SimkitConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        Ok(config)
    }

    /// Apply environment overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(parse_seed(&seed)?);
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        Ok(())
    }
}

fn parse_seed(s: &str) -> Result<u64, ConfigError> {
    s.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidSeed(s.to_string()))
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Seed override
    pub seed: Option<u64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<SimkitConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<SimkitConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => SimkitConfig::from_file(path)?,
        None => SimkitConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;

    Ok(config)
}
