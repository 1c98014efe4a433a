//! Bowling round simulator.
//!
//! A round is a two-state machine driven by weighted categorical draws:
//!
//! ```text
//! FirstBall ──10 pins──────────────────────────▶ Done(Strike)
//!     │
//!     └──p < 10──▶ SecondBall{p} ──p + q == 10──▶ Done(Spare)
//!                                └─otherwise───▶ Done(Open)
//! ```
//!
//! First-ball pins come from the first-ball table; the second ball draws an
//! index `q` from the table keyed by `p`, and `q` is the number of additional
//! pins knocked down.

mod round;
mod tables;

pub use round::{play_round, RoundOutcome, RoundState, ScoringRules};
pub use tables::{
    BowlingTables, ProbabilityTable, FIRST_BALL_PINS, FIRST_BALL_WEIGHTS, SECOND_BALL_WEIGHTS,
};

/// Pins standing at the start of a round.
pub const PINS: u32 = 10;
