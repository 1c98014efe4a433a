//! Variate generators for the uniform, exponential and normal distributions.
//!
//! All variates are derived from a [`UniformSource`](crate::rng::UniformSource)
//! from first principles:
//!
//! | Distribution | Method |
//! |--------------|--------|
//! | Uniform[a, b] | affine map `u(b - a) + a` |
//! | Exponential(λ) | inverse transform `-ln(1 - u) / λ` |
//! | Normal(μ, σ) | Box–Muller, two variates per pair of uniforms |
//!
//! Every value is rounded to [`DECIMALS`] decimal digits.
//!
//! # Examples
//!
//! ```rust
//! use simkit_core::rng::SimRng;
//! use simkit_core::variate::{generate_sample, Distribution};
//!
//! let mut rng = SimRng::from_seed(42);
//! let sample = generate_sample(Distribution::normal(10.0, 2.0), 1_001, &mut rng).unwrap();
//! assert_eq!(sample.len(), 1_001);
//! ```

mod generator;
mod params;
mod sample;

pub use generator::{generate_exponential, generate_normal_pair, generate_uniform};
pub use params::Distribution;
pub use sample::{generate_sample, Sample, SamplePreview, DEFAULT_PREVIEW_LEN};

/// Number of decimal digits every generated value is rounded to.
pub const DECIMALS: i32 = 4;

/// Rounds `x` to [`DECIMALS`] decimal digits.
#[inline]
pub fn round4(x: f64) -> f64 {
    let scale = 10f64.powi(DECIMALS);
    (x * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.693_147_18), 0.6931);
        assert_eq!(round4(-1.234_56), -1.2346);
        assert_eq!(round4(2.0), 2.0);
    }
}
