//! Bowling Monte Carlo aggregator.
//!
//! # Architecture
//!
//! ```text
//! run_simulation(&BowlingConfig)
//! ├── BowlingConfig     (rules, counts, seed, streams, tables)
//! ├── SimRng per stream (independent seeded sources)
//! └── simulate_trial()  (sum of play_round() scores)
//!     └── SimulationResult (trials, successes, probability)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use simkit_core::mc::{run_simulation, BowlingConfig};
//!
//! let config = BowlingConfig::builder()
//!     .rounds_per_game(10)
//!     .iterations(20_000)
//!     .target_score(120)
//!     .streams(4)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let result = run_simulation(&config).unwrap();
//! println!("P(score > 120) = {:.2}%", result.success_probability());
//! ```

pub mod config;
pub mod error;
pub mod result;
pub mod simulator;

pub use config::{BowlingConfig, BowlingConfigBuilder, MAX_ITERATIONS, MAX_ROUNDS, MAX_STREAMS};
pub use error::ConfigError;
pub use result::{SimulationResult, TrialRow};
pub use simulator::{run_simulation, run_simulation_with, simulate_trial};
