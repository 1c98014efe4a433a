//! Frequency tables and their interval labels.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::BinEdges;
use crate::error::{Result, SimError};

/// One interval of a frequency table.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrequencyRow {
    /// Lower bound.
    pub low: f64,
    /// Upper bound (always included).
    pub high: f64,
    /// Whether `low` itself belongs to the interval (first bin only).
    pub lower_closed: bool,
    /// Number of values in the interval.
    pub count: usize,
}

impl FrequencyRow {
    /// Interval label with 4 decimals on both bounds.
    ///
    /// `[low - high]` for the first bin, `(low - high]` for every other bin.
    ///
    /// ```rust
    /// use simkit_core::histogram::FrequencyRow;
    ///
    /// let row = FrequencyRow { low: 0.5, high: 1.0, lower_closed: false, count: 3 };
    /// assert_eq!(row.label(), "(0.5000 - 1.0000]");
    /// ```
    pub fn label(&self) -> String {
        let open = if self.lower_closed { '[' } else { '(' };
        format!("{open}{:.4} - {:.4}]", self.low, self.high)
    }

    /// Whether `value` falls in this interval.
    pub fn contains(&self, value: f64) -> bool {
        (value > self.low || (self.lower_closed && value == self.low)) && value <= self.high
    }
}

/// Per-bin counts in ascending interval order; every bin is listed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrequencyTable {
    rows: Vec<FrequencyRow>,
}

impl FrequencyTable {
    /// Counts `values` against `edges`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` naming `sample` if a value lies outside the edges.
    pub fn tally(values: &[f64], edges: &BinEdges) -> Result<Self> {
        let mut counts = vec![0usize; edges.bins()];
        for &value in values {
            let bin = edges
                .bin_index(value)
                .ok_or_else(|| SimError::invalid("sample", format!("{value} outside bin edges")))?;
            counts[bin] += 1;
        }

        let rows = edges
            .as_slice()
            .windows(2)
            .zip(counts)
            .enumerate()
            .map(|(i, (bounds, count))| FrequencyRow {
                low: bounds[0],
                high: bounds[1],
                lower_closed: i == 0,
                count,
            })
            .collect();

        Ok(Self { rows })
    }

    /// Rows in ascending order.
    pub fn rows(&self) -> &[FrequencyRow] {
        &self.rows
    }

    /// Counts in ascending order.
    pub fn counts(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.count).collect()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.rows.iter().map(|r| r.count).sum()
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false` for a table built from valid edges.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_exact_values() {
        let edges = BinEdges::from_breaks(vec![0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
        let table = FrequencyTable::tally(&[0.0, 1.0, 2.0, 3.0, 4.0], &edges).unwrap();
        assert_eq!(table.counts(), vec![2, 1, 1, 1]);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn test_empty_bins_listed() {
        let edges = BinEdges::from_breaks(vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        let table = FrequencyTable::tally(&[0.2, 2.7], &edges).unwrap();
        assert_eq!(table.counts(), vec![1, 0, 1]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let edges = BinEdges::from_breaks(vec![0.0, 1.0]).unwrap();
        let err = FrequencyTable::tally(&[0.5, 1.5], &edges).unwrap_err();
        assert!(matches!(err, SimError::InvalidParameter { name: "sample", .. }));
    }

    #[test]
    fn test_labels() {
        let edges = BinEdges::from_breaks(vec![-1.0, 0.25, 1.5]).unwrap();
        let table = FrequencyTable::tally(&[-1.0, 1.5], &edges).unwrap();
        let labels: Vec<String> = table.rows().iter().map(FrequencyRow::label).collect();
        assert_eq!(labels, vec!["[-1.0000 - 0.2500]", "(0.2500 - 1.5000]"]);
    }

    #[test]
    fn test_row_contains_matches_bin_index() {
        let edges = BinEdges::from_breaks(vec![0.0, 1.0, 2.0]).unwrap();
        let table = FrequencyTable::tally(&[], &edges).unwrap();
        for v in [0.0, 0.5, 1.0, 1.5, 2.0] {
            let bin = edges.bin_index(v).unwrap();
            assert!(table.rows()[bin].contains(v));
            let owners = table.rows().iter().filter(|r| r.contains(v)).count();
            assert_eq!(owners, 1, "{v} owned by {owners} rows");
        }
    }
}
