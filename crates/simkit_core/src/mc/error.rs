//! Error types for Monte Carlo configuration.

use thiserror::Error;

use crate::error::SimError;

/// Configuration error for the bowling Monte Carlo run.
///
/// These errors occur at build time when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Iteration count outside `[1, 10_000_000]`.
    #[error("Invalid iteration count {0}: must be in range [1, 10_000_000]")]
    InvalidIterationCount(usize),
    /// Rounds per game outside `[1, 1_000]`.
    #[error("Invalid round count {0}: must be in range [1, 1_000]")]
    InvalidRoundCount(usize),
    /// Stream count outside `[1, 1_024]` or above the iteration count.
    #[error("Invalid stream count {0}: must be in range [1, 1_024] and at most the iteration count")]
    InvalidStreamCount(usize),
    /// Highest reachable game score exceeds `u32::MAX`.
    #[error("Score overflow: {rounds} rounds of up to {round_score} points exceed u32::MAX")]
    ScoreOverflow {
        /// Highest single-round score.
        round_score: u32,
        /// Rounds per game.
        rounds: usize,
    },
}

impl From<ConfigError> for SimError {
    fn from(err: ConfigError) -> Self {
        let name = match err {
            ConfigError::InvalidIterationCount(_) => "iterations",
            ConfigError::InvalidRoundCount(_) => "rounds_per_game",
            ConfigError::InvalidStreamCount(_) => "streams",
            ConfigError::ScoreOverflow { .. } => "bonus",
        };
        SimError::invalid(name, err)
    }
}
