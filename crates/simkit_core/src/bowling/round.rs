//! Single-round state machine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{BowlingTables, PINS};
use crate::rng::UniformSource;

/// Bonus points awarded for strikes and spares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoringRules {
    /// Score of a round whose first ball knocks all pins down.
    pub strike_bonus: u32,
    /// Score of a round whose two balls together knock all pins down.
    pub spare_bonus: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            strike_bonus: 20,
            spare_bonus: 15,
        }
    }
}

/// How a finished round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundOutcome {
    /// All pins down with the first ball.
    Strike,
    /// All pins down across both balls.
    Spare {
        /// First-ball pins.
        first: u32,
        /// Second-ball pins.
        second: u32,
    },
    /// Pins left standing after the second ball.
    Open {
        /// First-ball pins.
        first: u32,
        /// Second-ball pins.
        second: u32,
    },
}

impl RoundOutcome {
    /// Classifies a two-ball round.
    pub fn from_balls(first: u32, second: u32) -> Self {
        if first == PINS {
            Self::Strike
        } else if first + second == PINS {
            Self::Spare { first, second }
        } else {
            Self::Open { first, second }
        }
    }

    /// Total pins knocked down.
    pub fn pins(&self) -> u32 {
        match *self {
            Self::Strike => PINS,
            Self::Spare { first, second } | Self::Open { first, second } => first + second,
        }
    }

    /// Round score under `rules`.
    pub fn score(&self, rules: &ScoringRules) -> u32 {
        match self {
            Self::Strike => rules.strike_bonus,
            Self::Spare { .. } => rules.spare_bonus,
            Self::Open { .. } => self.pins(),
        }
    }
}

/// Progress of one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the first ball.
    FirstBall,
    /// First ball thrown, pins left standing.
    SecondBall {
        /// First-ball pins.
        first: u32,
    },
    /// Round over.
    Done(RoundOutcome),
}

impl RoundState {
    /// Throws the next ball.
    ///
    /// `Done` is absorbing: stepping it returns it unchanged without drawing.
    pub fn step<S>(self, tables: &BowlingTables, source: &mut S) -> Self
    where
        S: UniformSource + ?Sized,
    {
        match self {
            Self::FirstBall => {
                let first = tables.first_ball().sample(source);
                if first == PINS {
                    Self::Done(RoundOutcome::Strike)
                } else {
                    Self::SecondBall { first }
                }
            }
            Self::SecondBall { first } => {
                // Validated tables always hold a follow-up for non-strike values.
                let second = tables
                    .second_ball(first)
                    .map_or(0, |table| table.sample(source));
                Self::Done(RoundOutcome::from_balls(first, second))
            }
            done @ Self::Done(_) => done,
        }
    }

    /// Whether the round is over.
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

/// Plays one round from the first ball to completion.
///
/// # Examples
///
/// ```rust
/// use simkit_core::bowling::{play_round, BowlingTables, RoundOutcome};
/// use simkit_core::rng::ReplaySource;
///
/// // 0.99 lands in the strike interval of the default first-ball table.
/// let mut source = ReplaySource::constant(0.99).unwrap();
/// assert_eq!(play_round(&BowlingTables::default(), &mut source), RoundOutcome::Strike);
/// ```
pub fn play_round<S>(tables: &BowlingTables, source: &mut S) -> RoundOutcome
where
    S: UniformSource + ?Sized,
{
    let mut state = RoundState::FirstBall;
    loop {
        match state {
            RoundState::Done(outcome) => return outcome,
            pending => state = pending.step(tables, source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bowling::ProbabilityTable;
    use crate::rng::{ReplaySource, SimRng};
    use std::collections::BTreeMap;

    fn strike_only() -> BowlingTables {
        let first = ProbabilityTable::new(vec![6, 7, 8, 9, 10], vec![0.0, 0.0, 0.0, 0.0, 1.0]).unwrap();
        BowlingTables::new(first, BowlingTables::default().second_ball_tables().clone()).unwrap()
    }

    #[test]
    fn test_forced_strike_scores_bonus() {
        let tables = strike_only();
        let rules = ScoringRules {
            strike_bonus: 30,
            spare_bonus: 15,
        };
        let mut rng = SimRng::from_seed(8);
        for _ in 0..500 {
            assert_eq!(play_round(&tables, &mut rng).score(&rules), 30);
        }
    }

    #[test]
    fn test_spare_path() {
        // First ball: u=0.0 -> 6 pins; second ball: u=0.95 -> index 4 (6 + 4 = 10).
        let mut src = ReplaySource::new(vec![0.0, 0.95]).unwrap();
        let outcome = play_round(&BowlingTables::default(), &mut src);
        assert_eq!(outcome, RoundOutcome::Spare { first: 6, second: 4 });
        assert_eq!(outcome.score(&ScoringRules::default()), 15);
    }

    #[test]
    fn test_open_path() {
        // First ball: u=0.2 -> threshold 20 -> 7 pins; second: u=0.0 -> 0 pins.
        let mut src = ReplaySource::new(vec![0.2, 0.0]).unwrap();
        let outcome = play_round(&BowlingTables::default(), &mut src);
        assert_eq!(outcome, RoundOutcome::Open { first: 7, second: 0 });
        assert_eq!(outcome.score(&ScoringRules::default()), 7);
    }

    #[test]
    fn test_state_transitions() {
        let tables = BowlingTables::default();
        let mut src = ReplaySource::new(vec![0.5, 0.0]).unwrap();
        let state = RoundState::FirstBall.step(&tables, &mut src);
        // threshold 50 -> cumulative 17, 27, 42, 60 -> 9 pins.
        assert_eq!(state, RoundState::SecondBall { first: 9 });
        let state = state.step(&tables, &mut src);
        assert_eq!(state, RoundState::Done(RoundOutcome::Open { first: 9, second: 0 }));
        assert!(state.is_done());
        assert_eq!(state.step(&tables, &mut src), state);
        assert_eq!(src.draws(), 2);
    }

    #[test]
    fn test_strike_consumes_one_draw() {
        let mut src = ReplaySource::constant(0.99).unwrap();
        play_round(&BowlingTables::default(), &mut src);
        assert_eq!(src.draws(), 1);
    }

    #[test]
    fn test_outcome_classification() {
        assert_eq!(RoundOutcome::from_balls(10, 0), RoundOutcome::Strike);
        assert_eq!(RoundOutcome::from_balls(8, 2), RoundOutcome::Spare { first: 8, second: 2 });
        assert_eq!(RoundOutcome::from_balls(8, 1).pins(), 9);
    }

    #[test]
    fn test_scores_never_exceed_bonus_bounds() {
        let tables = BowlingTables::default();
        let rules = ScoringRules::default();
        let mut rng = SimRng::from_seed(21);
        for _ in 0..10_000 {
            let outcome = play_round(&tables, &mut rng);
            let score = outcome.score(&rules);
            match outcome {
                RoundOutcome::Open { .. } => assert!(score < PINS),
                RoundOutcome::Spare { .. } => assert_eq!(score, 15),
                RoundOutcome::Strike => assert_eq!(score, 20),
            }
        }
    }

    #[test]
    fn test_custom_tables() {
        let first = [(5, 1.0)];
        let second = BTreeMap::from([(5, vec![0.0, 0.0, 0.0, 1.0])]);
        let tables = BowlingTables::from_weights(&first, &second).unwrap();
        let mut rng = SimRng::from_seed(2);
        assert_eq!(play_round(&tables, &mut rng), RoundOutcome::Open { first: 5, second: 3 });
    }
}
