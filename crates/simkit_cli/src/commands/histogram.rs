//! Histogram command implementation
//!
//! Draws a sample, bins it and prints the frequency table.

use std::io::Write;

use clap::{Args, ValueEnum};
use serde::Serialize;
use simkit_core::histogram::{build_histogram, BinEdges, BinningMode, FrequencyTable, Histogram};
use tracing::info;

use super::{OutputFormat, SampleArgs};
use crate::Result;

/// Bin edge placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Equal-width bins spanning exactly [min, max]
    #[default]
    DataRange,
    /// Equal-width bins with rounded edges
    Rounded,
}

impl From<ModeArg> for BinningMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::DataRange => BinningMode::DataRange,
            ModeArg::Rounded => BinningMode::Rounded,
        }
    }
}

/// Arguments of `simkit histogram`.
#[derive(Args, Clone, Debug)]
pub struct HistogramArgs {
    #[command(flatten)]
    pub sample: SampleArgs,

    /// Number of bins
    #[arg(long, default_value_t = 10)]
    pub bins: usize,

    /// Bin edge placement
    #[arg(long, value_enum, default_value_t = ModeArg::DataRange)]
    pub mode: ModeArg,

    /// Explicit bin edges, comma-separated; overrides --bins and --mode
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub breaks: Option<Vec<f64>>,
}

impl HistogramArgs {
    /// Bins `values` according to the arguments.
    pub fn build(&self, values: &[f64]) -> Result<Histogram> {
        match &self.breaks {
            Some(breaks) => {
                let edges = BinEdges::from_breaks(breaks.clone())?;
                let table = FrequencyTable::tally(values, &edges)?;
                Ok(Histogram { edges, table })
            }
            None => Ok(build_histogram(values, self.bins, self.mode.into())?),
        }
    }
}

#[derive(Debug, Serialize)]
struct RowReport {
    interval: String,
    low: f64,
    high: f64,
    count: usize,
}

#[derive(Debug, Serialize)]
struct HistogramReport {
    seed: u64,
    size: usize,
    bins: usize,
    rows: Vec<RowReport>,
}

/// Run the histogram command
pub fn run(args: &HistogramArgs, seed: Option<u64>, format: OutputFormat) -> Result<()> {
    let (sample, seed) = args.sample.draw(seed)?;
    let histogram = args.build(sample.values())?;
    info!(bins = histogram.edges.bins(), "Histogram built");

    let stdout = std::io::stdout();
    render(&mut stdout.lock(), &histogram, seed, format)
}

pub(crate) fn render<W: Write>(
    out: &mut W,
    histogram: &Histogram,
    seed: u64,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let report = HistogramReport {
                seed,
                size: histogram.table.total(),
                bins: histogram.table.len(),
                rows: histogram
                    .table
                    .rows()
                    .iter()
                    .map(|row| RowReport {
                        interval: row.label(),
                        low: row.low,
                        high: row.high,
                        count: row.count,
                    })
                    .collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            writeln!(out, "{:<32}{:>12}", "Interval", "Frequency")?;
            writeln!(out, "{}", "-".repeat(44))?;
            for row in histogram.table.rows() {
                writeln!(out, "{:<32}{:>12}", row.label(), row.count)?;
            }
            writeln!(out, "{}", "-".repeat(44))?;
            writeln!(out, "{:<32}{:>12}", "Total", histogram.table.total())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{sample_args, DistributionKind};

    fn args(breaks: Option<Vec<f64>>) -> HistogramArgs {
        HistogramArgs {
            sample: sample_args(DistributionKind::Uniform, 200),
            bins: 4,
            mode: ModeArg::DataRange,
            breaks,
        }
    }

    #[test]
    fn test_explicit_breaks() {
        let histogram = args(Some(vec![0.0, 0.5, 1.0]))
            .build(&[0.0, 0.25, 0.5, 0.75, 1.0])
            .unwrap();
        assert_eq!(histogram.table.counts(), vec![3, 2]);
    }

    #[test]
    fn test_explicit_breaks_must_cover_sample() {
        assert!(args(Some(vec![0.0, 0.5])).build(&[0.75]).is_err());
    }

    #[test]
    fn test_table_output() {
        let histogram = args(None).build(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let mut out = Vec::new();
        render(&mut out, &histogram, 1, OutputFormat::Table).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Interval"));
        assert!(text.contains("[1.0000 - 2.0000]"));
        assert!(text.contains("(4.0000 - 5.0000]"));
        assert!(text.lines().last().unwrap().trim_end().ends_with('5'));
    }

    #[test]
    fn test_json_output() {
        let histogram = args(None).build(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let mut out = Vec::new();
        render(&mut out, &histogram, 1, OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["bins"], 4);
        assert_eq!(json["size"], 5);
        assert_eq!(json["rows"][0]["interval"], "[1.0000 - 2.0000]");
        assert_eq!(json["rows"][0]["count"], 2);
    }
}
