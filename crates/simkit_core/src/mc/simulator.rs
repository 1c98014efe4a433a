//! Trial orchestration.
//!
//! A trial sums `rounds_per_game` independent rounds. Trials never share
//! generator state: a single-stream run uses one sequential generator, a
//! multi-stream run gives each stream its own generator seeded from
//! `(seed, stream index)`.

use rayon::prelude::*;
use tracing::{debug, trace};

use super::{BowlingConfig, SimulationResult};
use crate::bowling::{play_round, BowlingTables, ScoringRules};
use crate::error::Result;
use crate::rng::{SimRng, UniformSource};

/// Plays one game and returns its total score.
pub fn simulate_trial<S>(
    tables: &BowlingTables,
    rules: &ScoringRules,
    rounds: usize,
    source: &mut S,
) -> u32
where
    S: UniformSource + ?Sized,
{
    // Saturates for rules a validated config would reject.
    (0..rounds).fold(0u32, |total, _| {
        total.saturating_add(play_round(tables, source).score(rules))
    })
}

/// Runs the configured Monte Carlo simulation.
///
/// Uses the configured seed, or draws one from the operating system; the
/// seed used is recorded in the result. Output depends only on the seed and
/// the stream count, never on thread scheduling.
///
/// # Errors
///
/// `InvalidParameter` if the configuration fails validation.
///
/// # Examples
///
/// ```rust
/// use simkit_core::mc::{run_simulation, BowlingConfig};
///
/// let config = BowlingConfig::builder()
///     .iterations(1_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let result = run_simulation(&config).unwrap();
/// assert_eq!(result.trials().len(), 1_000);
/// assert!((0.0..=100.0).contains(&result.success_probability()));
/// ```
pub fn run_simulation(config: &BowlingConfig) -> Result<SimulationResult> {
    config.validate()?;
    let seed = config.seed().unwrap_or_else(rand::random);

    debug!(
        seed,
        iterations = config.iterations(),
        rounds = config.rounds_per_game(),
        streams = config.streams(),
        "starting bowling simulation"
    );

    let trials = if config.streams() == 1 {
        let mut rng = SimRng::from_seed(seed);
        play_trials(config, config.iterations(), &mut rng)
    } else {
        run_streams(config, seed)
    };

    let result = SimulationResult::new(trials, config.target_score(), Some(seed));
    debug!(
        successes = result.successes(),
        probability = result.success_probability(),
        "bowling simulation finished"
    );
    Ok(result)
}

/// Runs the simulation sequentially on a caller-supplied source.
///
/// The stream count is ignored: every trial draws from `source` in order.
///
/// # Errors
///
/// `InvalidParameter` if the configuration fails validation.
pub fn run_simulation_with<S>(config: &BowlingConfig, source: &mut S) -> Result<SimulationResult>
where
    S: UniformSource + ?Sized,
{
    config.validate()?;
    let trials = play_trials(config, config.iterations(), source);
    Ok(SimulationResult::new(trials, config.target_score(), None))
}

fn play_trials<S>(config: &BowlingConfig, count: usize, source: &mut S) -> Vec<u32>
where
    S: UniformSource + ?Sized,
{
    let tables = config.tables();
    let rules = config.rules();
    let rounds = config.rounds_per_game();
    (0..count)
        .map(|_| simulate_trial(tables, &rules, rounds, source))
        .collect()
}

/// Splits the trials into contiguous chunks, one per stream.
fn run_streams(config: &BowlingConfig, seed: u64) -> Vec<u32> {
    let streams = config.streams();
    let base = config.iterations() / streams;
    let remainder = config.iterations() % streams;

    let chunks: Vec<Vec<u32>> = (0..streams)
        .into_par_iter()
        .map(|stream| {
            let count = base + usize::from(stream < remainder);
            let mut rng = SimRng::for_stream(seed, stream);
            trace!(stream, count, "simulating stream");
            play_trials(config, count, &mut rng)
        })
        .collect();

    chunks.concat()
}
