//! Bin edge construction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Multipliers considered for a rounded bin width, per power of ten.
const NICE_MULTIPLIERS: [f64; 4] = [1.0, 2.0, 2.5, 5.0];

/// Upper bound on candidate widths tried before falling back to data-range edges.
const MAX_NICE_CANDIDATES: usize = 64;

/// Strictly increasing bin boundaries; `len() == bins + 1`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinEdges(Vec<f64>);

impl BinEdges {
    /// Validates caller-supplied boundaries.
    ///
    /// # Errors
    ///
    /// `DegenerateSample` if fewer than two edges are given, or if they are
    /// not finite and strictly increasing.
    ///
    /// ```rust
    /// use simkit_core::histogram::BinEdges;
    ///
    /// let edges = BinEdges::from_breaks(vec![0.0, 0.5, 1.0]).unwrap();
    /// assert_eq!(edges.bins(), 2);
    /// assert!(BinEdges::from_breaks(vec![0.0, 0.0]).is_err());
    /// ```
    pub fn from_breaks(breaks: Vec<f64>) -> Result<Self> {
        if breaks.len() < 2 {
            return Err(SimError::DegenerateSample(format!(
                "{} edge(s) given, at least 2 required",
                breaks.len()
            )));
        }
        if breaks.iter().any(|e| !e.is_finite()) {
            return Err(SimError::DegenerateSample("edges must be finite".to_string()));
        }
        if !breaks.windows(2).all(|w| w[0] < w[1]) {
            return Err(SimError::DegenerateSample(
                "edges must be strictly increasing".to_string(),
            ));
        }
        Ok(Self(breaks))
    }

    /// Equal-width edges spanning exactly `[min, max]`.
    ///
    /// `edges[i] = min + i (max - min) / bins`; the last edge is pinned to
    /// `max` so accumulated rounding never drops the maximum.
    pub fn data_range(min: f64, max: f64, bins: usize) -> Result<Self> {
        let width = bin_width(min, max, bins);
        let mut edges: Vec<f64> = if (max - min).is_finite() {
            (0..=bins).map(|i| min + i as f64 * width).collect()
        } else {
            // Span beyond f64::MAX: interpolate at half scale.
            let (half_min, half_width) = (min / 2.0, width / 2.0);
            (0..=bins)
                .map(|i| 2.0 * (half_min + i as f64 * half_width))
                .collect()
        };
        edges[0] = min;
        edges[bins] = max;
        Self::from_breaks(edges)
    }

    /// Edges with a rounded width (1, 2, 2.5 or 5 times a power of ten).
    ///
    /// Keeps exactly `bins` bins. The lower edge is the largest multiple of
    /// the width not above `min`; the smallest width whose `bins` intervals
    /// then reach `max` is chosen.
    pub fn rounded(min: f64, max: f64, bins: usize) -> Result<Self> {
        let raw = bin_width(min, max, bins);
        if !(raw.is_finite() && raw > 0.0) {
            return Self::data_range(min, max, bins);
        }
        let mut exponent = raw.log10().floor() as i32;

        for candidate in 0..MAX_NICE_CANDIDATES {
            let multiplier = NICE_MULTIPLIERS[candidate % NICE_MULTIPLIERS.len()];
            if candidate > 0 && candidate % NICE_MULTIPLIERS.len() == 0 {
                match exponent.checked_add(1) {
                    Some(next) => exponent = next,
                    None => break,
                }
            }
            let step = multiplier * 10f64.powi(exponent);
            if !step.is_finite() {
                break;
            }
            let first = (min / step).floor();
            let edges: Vec<f64> = (0..=bins).map(|i| (first + i as f64) * step).collect();

            if edges[0] <= min && edges[bins] >= max {
                if let Ok(edges) = Self::from_breaks(edges) {
                    return Ok(edges);
                }
            }
        }

        Self::data_range(min, max, bins)
    }

    /// Boundaries in ascending order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of bins.
    pub fn bins(&self) -> usize {
        self.0.len() - 1
    }

    /// Lowest edge.
    pub fn lower(&self) -> f64 {
        self.0[0]
    }

    /// Highest edge.
    pub fn upper(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Bin holding `value`, or `None` outside `[lower, upper]`.
    ///
    /// Bin `i` holds `edges[i] < v <= edges[i + 1]`; bin 0 also holds
    /// `v == edges[0]`.
    ///
    /// ```rust
    /// use simkit_core::histogram::BinEdges;
    ///
    /// let edges = BinEdges::from_breaks(vec![0.0, 1.0, 2.0]).unwrap();
    /// assert_eq!(edges.bin_index(0.0), Some(0));
    /// assert_eq!(edges.bin_index(1.0), Some(0));
    /// assert_eq!(edges.bin_index(1.5), Some(1));
    /// assert_eq!(edges.bin_index(2.0), Some(1));
    /// assert_eq!(edges.bin_index(2.1), None);
    /// ```
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        if value.is_nan() || value < self.lower() || value > self.upper() {
            return None;
        }
        // First edge >= value; the bin ends on that edge.
        let upper_edge = self.0.partition_point(|&e| e < value);
        Some(upper_edge.saturating_sub(1))
    }
}

/// `(max - min) / bins` without overflowing for spans beyond `f64::MAX`.
#[inline]
fn bin_width(min: f64, max: f64, bins: usize) -> f64 {
    let bins = bins as f64;
    max / bins - min / bins
}
