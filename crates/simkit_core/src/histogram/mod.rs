//! Histogram and frequency-table construction.
//!
//! A sample is partitioned into `bin_count` consecutive intervals. The
//! closure rule is fixed for the whole table:
//!
//! ```text
//! [e0, e1]  (e1, e2]  (e2, e3]  ...  (e(n-1), en]
//! ```
//!
//! i.e. every interval is right-closed and only the first one also includes
//! its lower edge, so that neither the minimum nor the maximum is dropped.
//!
//! # Examples
//!
//! ```rust
//! use simkit_core::histogram::{build_histogram, BinningMode};
//!
//! let sample = [1.0, 2.0, 2.5, 3.0, 5.0];
//! let histogram = build_histogram(&sample, 2, BinningMode::DataRange).unwrap();
//!
//! assert_eq!(histogram.edges.as_slice(), &[1.0, 3.0, 5.0]);
//! assert_eq!(histogram.table.counts(), vec![4, 1]);
//! assert_eq!(histogram.table.rows()[0].label(), "[1.0000 - 3.0000]");
//! ```

mod edges;
mod table;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use edges::BinEdges;
pub use table::{FrequencyRow, FrequencyTable};

use crate::error::{Result, SimError};

/// How bin edges are derived from the data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BinningMode {
    /// Equal-width bins from the sample minimum to the sample maximum.
    #[default]
    DataRange,
    /// Equal-width bins with a rounded width and lower edge, covering the sample.
    Rounded,
}

/// Bin edges plus the frequency table they induce.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Histogram {
    /// Interval boundaries.
    pub edges: BinEdges,
    /// Per-interval counts.
    pub table: FrequencyTable,
}

/// Builds the histogram of `sample` with `bin_count` bins.
///
/// # Errors
///
/// - `DegenerateSample` if `bin_count == 0` or all values are equal
/// - `EmptySample` if `sample` is empty
/// - `InvalidParameter` if a value is not finite
pub fn build_histogram(sample: &[f64], bin_count: usize, mode: BinningMode) -> Result<Histogram> {
    if bin_count == 0 {
        return Err(SimError::DegenerateSample(
            "bin count must be at least 1".to_string(),
        ));
    }
    if sample.is_empty() {
        return Err(SimError::EmptySample);
    }
    if let Some(bad) = sample.iter().find(|v| !v.is_finite()) {
        return Err(SimError::invalid("sample", bad));
    }

    let (min, max) = sample
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if max <= min {
        return Err(SimError::DegenerateSample(format!(
            "all {} values equal {min}",
            sample.len()
        )));
    }

    let edges = match mode {
        BinningMode::DataRange => BinEdges::data_range(min, max, bin_count)?,
        BinningMode::Rounded => BinEdges::rounded(min, max, bin_count)?,
    };
    let table = FrequencyTable::tally(sample, &edges)?;

    debug!(
        values = sample.len(),
        bins = bin_count,
        ?mode,
        lower = edges.lower(),
        upper = edges.upper(),
        "built histogram"
    );

    Ok(Histogram { edges, table })
}
