//! Fixed-length samples and bulk generation.

#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::debug;

use super::generator::{exponential_unchecked, normal_pair_unchecked, uniform_unchecked};
use super::Distribution;
use crate::error::{Result, SimError};
use crate::rng::UniformSource;

/// Number of values shown by a default [`Sample::preview`].
pub const DEFAULT_PREVIEW_LEN: usize = 100;

/// An immutable sample of rounded variates.
///
/// Produced once per [`generate_sample`] call and owned by the caller.
/// Serialize-only: values are always produced by a generator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Sample {
    distribution: Distribution,
    values: Vec<f64>,
}

/// Leading slice of a sample, with a flag telling whether values were cut.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePreview<'a> {
    /// Values shown.
    pub values: &'a [f64],
    /// `true` when the sample holds more values than shown.
    pub truncated: bool,
}

impl Sample {
    /// Distribution the sample was drawn from.
    pub fn distribution(&self) -> Distribution {
        self.distribution
    }

    /// The values, in generation order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sample holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First `limit` values.
    ///
    /// ```rust
    /// use simkit_core::rng::SimRng;
    /// use simkit_core::variate::{generate_sample, Distribution};
    ///
    /// let mut rng = SimRng::from_seed(1);
    /// let sample = generate_sample(Distribution::uniform(0.0, 1.0), 250, &mut rng).unwrap();
    /// let preview = sample.preview(100);
    /// assert_eq!(preview.values.len(), 100);
    /// assert!(preview.truncated);
    /// ```
    pub fn preview(&self, limit: usize) -> SamplePreview<'_> {
        let shown = limit.min(self.values.len());
        SamplePreview {
            values: &self.values[..shown],
            truncated: shown < self.values.len(),
        }
    }

    /// Arithmetic mean.
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Unbiased sample variance (`n - 1` denominator); `0` for fewer than two values.
    pub fn variance(&self) -> f64 {
        let n = self.values.len();
        if n < 2 {
            return 0.0;
        }
        let mean = self.mean();
        let sum_sq: f64 = self.values.iter().map(|v| (v - mean).powi(2)).sum();
        sum_sq / (n - 1) as f64
    }

    /// Smallest value.
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest value.
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Generates a sample of exactly `size` values.
///
/// Parameters are validated before any uniform is drawn, so a failed call
/// leaves the source untouched. Normal samples consume Box–Muller pairs; for
/// an odd `size` the second value of the last pair is discarded.
///
/// # Errors
///
/// `InvalidParameter` for a distribution constraint violation or `size == 0`.
pub fn generate_sample<S>(distribution: Distribution, size: usize, source: &mut S) -> Result<Sample>
where
    S: UniformSource + ?Sized,
{
    distribution.validate()?;
    if size == 0 {
        return Err(SimError::invalid("size", "0 (must be at least 1)"));
    }

    let values = match distribution {
        Distribution::Uniform { a, b } => (0..size).map(|_| uniform_unchecked(source, a, b)).collect(),
        Distribution::Exponential { lambda } => {
            (0..size).map(|_| exponential_unchecked(source, lambda)).collect()
        }
        Distribution::Normal { mean, std_dev } => {
            let mut values = Vec::with_capacity(size + 1);
            while values.len() < size {
                let (z1, z2) = normal_pair_unchecked(source, mean, std_dev);
                values.push(z1);
                values.push(z2);
            }
            values.truncate(size);
            values
        }
    };

    debug!(distribution = %distribution, size, "generated sample");

    Ok(Sample {
        distribution,
        values,
    })
}
