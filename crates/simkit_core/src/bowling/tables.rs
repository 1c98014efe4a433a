//! Empirical probability tables and weighted categorical sampling.

use std::collections::BTreeMap;

use super::PINS;
use crate::error::{Result, SimError};
use crate::rng::UniformSource;

/// Default first-ball outcomes (pins knocked down).
pub const FIRST_BALL_PINS: [u32; 5] = [6, 7, 8, 9, 10];

/// Default first-ball weights, aligned with [`FIRST_BALL_PINS`].
pub const FIRST_BALL_WEIGHTS: [f64; 5] = [17.0, 10.0, 15.0, 18.0, 40.0];

/// Default second-ball weights per first-ball value; index = additional pins.
pub const SECOND_BALL_WEIGHTS: [(u32, &[f64]); 4] = [
    (6, &[10.0, 20.0, 30.0, 30.0, 10.0]),
    (7, &[2.0, 10.0, 45.0, 43.0]),
    (8, &[4.0, 20.0, 76.0]),
    (9, &[6.0, 94.0]),
];

/// Discrete outcomes with non-negative, not necessarily normalised weights.
///
/// # Sampling rule
///
/// With cumulative sums `c_i`, outcome `i` owns the half-open interval
/// `[c_(i-1), c_i)` of `[0, total)`. A draw `u * total` landing exactly on
/// `c_i` therefore selects the outcome whose interval starts there.
/// Zero-weight outcomes own an empty interval and are never selected.
///
/// # Examples
///
/// ```rust
/// use simkit_core::bowling::ProbabilityTable;
/// use simkit_core::rng::ReplaySource;
///
/// let table = ProbabilityTable::new(vec![1, 2], vec![1.0, 3.0]).unwrap();
/// let mut source = ReplaySource::new(vec![0.2, 0.25]).unwrap();
/// assert_eq!(table.sample(&mut source), 1);
/// assert_eq!(table.sample(&mut source), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityTable {
    outcomes: Vec<u32>,
    weights: Vec<f64>,
    total: f64,
    last_positive: usize,
}

impl ProbabilityTable {
    /// Creates a table mapping `outcomes[i]` to `weights[i]`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the lengths differ, the table is empty, an
    /// outcome repeats, a weight is negative or not finite, or all weights
    /// are zero.
    pub fn new(outcomes: Vec<u32>, weights: Vec<f64>) -> Result<Self> {
        if outcomes.is_empty() {
            return Err(SimError::invalid("weights", "table must not be empty"));
        }
        if outcomes.len() != weights.len() {
            return Err(SimError::invalid(
                "weights",
                format!("{} weights for {} outcomes", weights.len(), outcomes.len()),
            ));
        }
        let mut seen = outcomes.clone();
        seen.sort_unstable();
        seen.dedup();
        if seen.len() != outcomes.len() {
            return Err(SimError::invalid("outcomes", format!("{outcomes:?} has duplicates")));
        }
        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(SimError::invalid("weights", bad));
        }

        let total: f64 = weights.iter().sum();
        let last_positive = weights
            .iter()
            .rposition(|&w| w > 0.0)
            .ok_or_else(|| SimError::invalid("weights", "at least one weight must be positive"))?;

        Ok(Self {
            outcomes,
            weights,
            total,
            last_positive,
        })
    }

    /// Table whose outcomes are the indices `0..weights.len()`.
    pub fn indexed(weights: Vec<f64>) -> Result<Self> {
        let outcomes = (0..weights.len() as u32).collect();
        Self::new(outcomes, weights)
    }

    /// Outcomes in table order.
    pub fn outcomes(&self) -> &[u32] {
        &self.outcomes
    }

    /// Raw weights in table order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Normalised probability of `outcome`; `0` if absent.
    pub fn probability(&self, outcome: u32) -> f64 {
        self.outcomes
            .iter()
            .position(|&o| o == outcome)
            .map_or(0.0, |i| self.weights[i] / self.total)
    }

    /// Draws a table index according to the weights.
    pub fn sample_index<S>(&self, source: &mut S) -> usize
    where
        S: UniformSource + ?Sized,
    {
        let threshold = source.next_uniform() * self.total;
        let mut cumulative = 0.0;
        for (i, &w) in self.weights.iter().enumerate() {
            if w > 0.0 {
                cumulative += w;
                if cumulative > threshold {
                    return i;
                }
            }
        }
        // Rounding pushed the threshold past the accumulated total.
        self.last_positive
    }

    /// Draws an outcome according to the weights.
    #[inline]
    pub fn sample<S>(&self, source: &mut S) -> u32
    where
        S: UniformSource + ?Sized,
    {
        self.outcomes[self.sample_index(source)]
    }
}

/// First-ball table plus one second-ball table per non-strike first-ball value.
#[derive(Clone, Debug, PartialEq)]
pub struct BowlingTables {
    first_ball: ProbabilityTable,
    second_ball: BTreeMap<u32, ProbabilityTable>,
}

impl BowlingTables {
    /// Validates and bundles the tables.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if a first-ball outcome exceeds the pin count, a
    /// non-strike first-ball outcome has no second-ball table, or a
    /// second-ball table allows more pins than remain standing.
    pub fn new(
        first_ball: ProbabilityTable,
        second_ball: BTreeMap<u32, ProbabilityTable>,
    ) -> Result<Self> {
        for &first in first_ball.outcomes() {
            if first > PINS {
                return Err(SimError::invalid(
                    "first_ball",
                    format!("{first} exceeds {PINS} pins"),
                ));
            }
            if first == PINS {
                continue;
            }
            let table = second_ball.get(&first).ok_or_else(|| {
                SimError::invalid("second_ball", format!("no table for first ball {first}"))
            })?;
            if let Some(&most) = table.outcomes().iter().max() {
                if first + most > PINS {
                    return Err(SimError::invalid(
                        "second_ball",
                        format!("{first} + {most} exceeds {PINS} pins"),
                    ));
                }
            }
        }
        Ok(Self {
            first_ball,
            second_ball,
        })
    }

    /// Builds tables from raw weights: first-ball `(pins, weight)` pairs and
    /// second-ball weight lists indexed by additional pins.
    pub fn from_weights(
        first_ball: &[(u32, f64)],
        second_ball: &BTreeMap<u32, Vec<f64>>,
    ) -> Result<Self> {
        let (outcomes, weights) = first_ball.iter().copied().unzip();
        let first = ProbabilityTable::new(outcomes, weights)?;
        let second = second_ball
            .iter()
            .map(|(&pins, weights)| Ok((pins, ProbabilityTable::indexed(weights.clone())?)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        Self::new(first, second)
    }

    /// The first-ball table.
    pub fn first_ball(&self) -> &ProbabilityTable {
        &self.first_ball
    }

    /// Second-ball table following a first ball of `first` pins.
    pub fn second_ball(&self, first: u32) -> Option<&ProbabilityTable> {
        self.second_ball.get(&first)
    }

    /// All second-ball tables keyed by first-ball pins.
    pub fn second_ball_tables(&self) -> &BTreeMap<u32, ProbabilityTable> {
        &self.second_ball
    }
}

impl Default for BowlingTables {
    /// The empirical tables: first ball `{6..10}` weighted `[17, 10, 15, 18, 40]`.
    fn default() -> Self {
        let first_ball = ProbabilityTable {
            outcomes: FIRST_BALL_PINS.to_vec(),
            weights: FIRST_BALL_WEIGHTS.to_vec(),
            total: FIRST_BALL_WEIGHTS.iter().sum(),
            last_positive: FIRST_BALL_WEIGHTS.len() - 1,
        };
        let second_ball = SECOND_BALL_WEIGHTS
            .iter()
            .map(|&(pins, weights)| {
                let table = ProbabilityTable {
                    outcomes: (0..weights.len() as u32).collect(),
                    weights: weights.to_vec(),
                    total: weights.iter().sum(),
                    last_positive: weights.len() - 1,
                };
                (pins, table)
            })
            .collect();
        Self {
            first_ball,
            second_ball,
        }
    }
}
