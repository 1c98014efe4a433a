//! Monte Carlo simulation configuration.
//!
//! This module provides [`BowlingConfig`] and its builder. Validation runs
//! at build time, so a constructed configuration is always runnable.

use super::error::ConfigError;
use crate::bowling::{BowlingTables, ScoringRules, PINS};

/// Maximum number of simulated games per run.
pub const MAX_ITERATIONS: usize = 10_000_000;

/// Maximum number of rounds per game.
pub const MAX_ROUNDS: usize = 1_000;

/// Maximum number of independent random streams.
pub const MAX_STREAMS: usize = 1_024;

/// Bowling Monte Carlo configuration.
///
/// # Examples
///
/// ```rust
/// use simkit_core::mc::BowlingConfig;
///
/// let config = BowlingConfig::builder()
///     .rounds_per_game(10)
///     .iterations(10_000)
///     .target_score(120)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.iterations(), 10_000);
/// assert_eq!(config.rules().strike_bonus, 20);
/// ```
#[derive(Clone, Debug)]
pub struct BowlingConfig {
    rules: ScoringRules,
    rounds_per_game: usize,
    iterations: usize,
    target_score: i64,
    streams: usize,
    seed: Option<u64>,
    tables: BowlingTables,
}

impl BowlingConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> BowlingConfigBuilder {
        BowlingConfigBuilder::default()
    }

    /// Strike and spare bonuses.
    #[inline]
    pub fn rules(&self) -> ScoringRules {
        self.rules
    }

    /// Rounds summed into one trial.
    #[inline]
    pub fn rounds_per_game(&self) -> usize {
        self.rounds_per_game
    }

    /// Number of independent trials.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Score a trial must strictly exceed to count as a success.
    #[inline]
    pub fn target_score(&self) -> i64 {
        self.target_score
    }

    /// Number of independent random streams the trials are split across.
    #[inline]
    pub fn streams(&self) -> usize {
        self.streams
    }

    /// Optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Probability tables.
    #[inline]
    pub fn tables(&self) -> &BowlingTables {
        &self.tables
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `iterations` is 0 or greater than [`MAX_ITERATIONS`]
    /// - `rounds_per_game` is 0 or greater than [`MAX_ROUNDS`]
    /// - `streams` is 0, greater than [`MAX_STREAMS`], or greater than `iterations`
    /// - the highest reachable game score does not fit in a `u32`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 || self.iterations > MAX_ITERATIONS {
            return Err(ConfigError::InvalidIterationCount(self.iterations));
        }
        if self.rounds_per_game == 0 || self.rounds_per_game > MAX_ROUNDS {
            return Err(ConfigError::InvalidRoundCount(self.rounds_per_game));
        }
        if self.streams == 0 || self.streams > MAX_STREAMS || self.streams > self.iterations {
            return Err(ConfigError::InvalidStreamCount(self.streams));
        }
        if self.max_game_score().is_none() {
            return Err(ConfigError::ScoreOverflow {
                round_score: self.max_round_score(),
                rounds: self.rounds_per_game,
            });
        }
        Ok(())
    }

    /// Upper bound on a single round's score.
    #[inline]
    pub fn max_round_score(&self) -> u32 {
        self.rules.strike_bonus.max(self.rules.spare_bonus).max(PINS)
    }

    /// Upper bound on a game's score, `None` if it exceeds `u32::MAX`.
    pub fn max_game_score(&self) -> Option<u32> {
        u32::try_from(self.rounds_per_game)
            .ok()
            .and_then(|rounds| self.max_round_score().checked_mul(rounds))
    }
}

/// Builder for [`BowlingConfig`].
///
/// Unset fields take the classic defaults: strike 20, spare
/// 15, 10 rounds, 100,000 iterations, target 120, one stream, the
/// empirical probability tables.
#[derive(Clone, Debug)]
pub struct BowlingConfigBuilder {
    rules: ScoringRules,
    rounds_per_game: usize,
    iterations: usize,
    target_score: i64,
    streams: usize,
    seed: Option<u64>,
    tables: BowlingTables,
}

impl Default for BowlingConfigBuilder {
    fn default() -> Self {
        Self {
            rules: ScoringRules::default(),
            rounds_per_game: 10,
            iterations: 100_000,
            target_score: 120,
            streams: 1,
            seed: None,
            tables: BowlingTables::default(),
        }
    }
}

impl BowlingConfigBuilder {
    /// Sets the strike bonus.
    #[inline]
    pub fn strike_bonus(mut self, bonus: u32) -> Self {
        self.rules.strike_bonus = bonus;
        self
    }

    /// Sets the spare bonus.
    #[inline]
    pub fn spare_bonus(mut self, bonus: u32) -> Self {
        self.rules.spare_bonus = bonus;
        self
    }

    /// Sets the number of rounds per game, in `[1, MAX_ROUNDS]`.
    #[inline]
    pub fn rounds_per_game(mut self, rounds: usize) -> Self {
        self.rounds_per_game = rounds;
        self
    }

    /// Sets the number of trials, in `[1, MAX_ITERATIONS]`.
    #[inline]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the target score; any integer, including negative values.
    #[inline]
    pub fn target_score(mut self, target: i64) -> Self {
        self.target_score = target;
        self
    }

    /// Sets the number of independent random streams.
    ///
    /// With more than one stream the trials run on the rayon thread pool.
    #[inline]
    pub fn streams(mut self, streams: usize) -> Self {
        self.streams = streams;
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replaces the probability tables.
    #[inline]
    pub fn tables(mut self, tables: BowlingTables) -> Self {
        self.tables = tables;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a count is out of range or game scores
    /// could overflow.
    pub fn build(self) -> Result<BowlingConfig, ConfigError> {
        let config = BowlingConfig {
            rules: self.rules,
            rounds_per_game: self.rounds_per_game,
            iterations: self.iterations,
            target_score: self.target_score,
            streams: self.streams,
            seed: self.seed,
            tables: self.tables,
        };

        config.validate()?;
        Ok(config)
    }
}
