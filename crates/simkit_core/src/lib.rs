//! # SimKit Core
//!
//! Statistical simulation toolkit:
//!
//! - [`rng`]: seeded uniform sources, the root of every variate
//! - [`variate`]: uniform, exponential and normal (Box–Muller) generators
//! - [`histogram`]: bin edges and frequency tables with a fixed closure rule
//! - [`bowling`]: single-round state machine over weighted probability tables
//! - [`mc`]: Monte Carlo aggregation of bowling games
//!
//! The crate holds no global state. Every operation takes explicit
//! parameters and returns explicit results, so any presentation layer can
//! drive it.
//!
//! ## Usage Example
//!
//! ```rust
//! use simkit_core::histogram::{build_histogram, BinningMode};
//! use simkit_core::rng::SimRng;
//! use simkit_core::variate::{generate_sample, Distribution};
//!
//! let mut rng = SimRng::from_seed(42);
//! let sample = generate_sample(Distribution::exponential(0.5), 10_000, &mut rng).unwrap();
//! let histogram = build_histogram(sample.values(), 10, BinningMode::DataRange).unwrap();
//!
//! assert_eq!(histogram.table.total(), 10_000);
//! for row in histogram.table.rows() {
//!     println!("{}\t{}", row.label(), row.count);
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bowling;
pub mod error;
pub mod histogram;
pub mod mc;
pub mod rng;
pub mod variate;

// Re-export commonly used items for convenience
pub use error::{Result, SimError};
pub use histogram::{build_histogram, BinningMode, Histogram};
pub use mc::{run_simulation, BowlingConfig, SimulationResult};
pub use variate::{generate_sample, Distribution, Sample};
