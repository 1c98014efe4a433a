//! Simulation results and summaries.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a Monte Carlo run.
///
/// Trials are kept in iteration order; the success probability is derived
/// once at construction. Serialize-only: the summary is always derived from
/// the trials.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SimulationResult {
    trials: Vec<u32>,
    target_score: i64,
    successes: usize,
    success_probability: f64,
    seed: Option<u64>,
}

/// One displayed trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrialRow {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Total game score.
    pub score: u32,
    /// Whether the score is strictly above the target.
    pub exceeds_target: bool,
}

impl SimulationResult {
    /// Summarises `trials` against `target_score`.
    ///
    /// `successes` counts trials strictly above the target; the probability
    /// is `100 * successes / trials`, rounded to 2 decimals.
    pub fn new(trials: Vec<u32>, target_score: i64, seed: Option<u64>) -> Self {
        let successes = trials
            .iter()
            .filter(|&&t| i64::from(t) > target_score)
            .count();
        let success_probability = if trials.is_empty() {
            0.0
        } else {
            round2(100.0 * successes as f64 / trials.len() as f64)
        };
        Self {
            trials,
            target_score,
            successes,
            success_probability,
            seed,
        }
    }

    /// Trial scores in iteration order.
    pub fn trials(&self) -> &[u32] {
        &self.trials
    }

    /// Number of trials.
    pub fn iterations(&self) -> usize {
        self.trials.len()
    }

    /// Score a trial had to exceed.
    pub fn target_score(&self) -> i64 {
        self.target_score
    }

    /// Trials strictly above the target.
    pub fn successes(&self) -> usize {
        self.successes
    }

    /// Percentage of trials above the target, 2 decimals.
    pub fn success_probability(&self) -> f64 {
        self.success_probability
    }

    /// Seed the run was drawn from, when generated by the simulator.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Mean trial score.
    pub fn mean_score(&self) -> f64 {
        if self.trials.is_empty() {
            return 0.0;
        }
        self.trials.iter().map(|&t| f64::from(t)).sum::<f64>() / self.trials.len() as f64
    }

    /// Lowest trial score.
    pub fn min_score(&self) -> Option<u32> {
        self.trials.iter().copied().min()
    }

    /// Highest trial score.
    pub fn max_score(&self) -> Option<u32> {
        self.trials.iter().copied().max()
    }

    /// Up to `count` trials starting at 1-based iteration `start`.
    ///
    /// Out-of-range windows are clamped; `start == 0` is treated as 1.
    ///
    /// ```rust
    /// use simkit_core::mc::SimulationResult;
    ///
    /// let result = SimulationResult::new(vec![90, 130, 125, 80], 120, None);
    /// let rows = result.window(2, 2);
    /// assert_eq!(rows.len(), 2);
    /// assert_eq!((rows[0].iteration, rows[0].score), (2, 130));
    /// assert!(rows[1].exceeds_target);
    /// assert!(result.window(10, 5).is_empty());
    /// ```
    pub fn window(&self, start: usize, count: usize) -> Vec<TrialRow> {
        let first = start.max(1) - 1;
        self.trials
            .iter()
            .enumerate()
            .skip(first)
            .take(count)
            .map(|(i, &score)| TrialRow {
                iteration: i + 1,
                score,
                exceeds_target: i64::from(score) > self.target_score,
            })
            .collect()
    }
}

#[inline]
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
