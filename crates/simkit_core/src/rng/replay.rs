//! Fixed-sequence uniform source.

use super::UniformSource;
use crate::error::{Result, SimError};

/// Replays a fixed list of uniform values, cycling when exhausted.
///
/// Lets callers pin the uniform draws behind a variate, e.g. to check that
/// `u = 0.5` maps to the expected exponential value.
///
/// ```rust
/// use simkit_core::rng::{ReplaySource, UniformSource};
///
/// let mut source = ReplaySource::new(vec![0.25, 0.5]).unwrap();
/// assert_eq!(source.next_uniform(), 0.25);
/// assert_eq!(source.next_uniform(), 0.5);
/// assert_eq!(source.next_uniform(), 0.25);
/// ```
#[derive(Clone, Debug)]
pub struct ReplaySource {
    values: Vec<f64>,
    cursor: usize,
}

impl ReplaySource {
    /// Creates a source from values that must all lie in [0, 1).
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the list is empty or a value is out of range.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(SimError::invalid("values", "must not be empty"));
        }
        if let Some(bad) = values.iter().find(|u| !(0.0..1.0).contains(*u)) {
            return Err(SimError::invalid("values", bad));
        }
        Ok(Self { values, cursor: 0 })
    }

    /// Source that always yields `u`.
    pub fn constant(u: f64) -> Result<Self> {
        Self::new(vec![u])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ReplaySource {
    fn next_uniform(&mut self) -> f64 {
        let u = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        u
    }
}
