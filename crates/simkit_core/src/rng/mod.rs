//! # Uniform Source Infrastructure
//!
//! Every variate in the toolkit is derived from a single uniform [0, 1)
//! stream. This module defines that seam and its implementations.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: all generators support seeding for deterministic sequences
//! - **Static dispatch**: consumers are generic over [`UniformSource`]
//! - **Independent streams**: parallel workers never share a generator; each
//!   derives its own seed from `(base seed, stream index)`
//!
//! ## Module Structure
//!
//! - [`prng`]: seeded pseudo-random generator wrapper
//! - [`replay`]: fixed-sequence source for deterministic tests and demos
//!
//! ## Usage Example
//!
//! ```rust
//! use simkit_core::rng::{SimRng, UniformSource};
//!
//! let mut rng = SimRng::from_seed(12345);
//! let u = rng.next_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Independent per-worker stream
//! let mut worker = SimRng::for_stream(12345, 3);
//! let _ = worker.next_uniform();
//! ```

mod prng;
mod replay;

pub use prng::{stream_seed, SimRng};
pub use replay::ReplaySource;

/// A source of uniform variates on the half-open interval [0, 1).
///
/// Implementations own their internal state exclusively; a source is never
/// shared between concurrently running trials.
pub trait UniformSource {
    /// Draws the next uniform value in [0, 1).
    fn next_uniform(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}
