//! Generate command implementation
//!
//! Draws a sample and shows its first values and summary statistics.

use std::io::Write;

use clap::Args;
use serde::Serialize;
use simkit_core::variate::{Distribution, Sample, DEFAULT_PREVIEW_LEN};
use tracing::info;

use super::{OutputFormat, SampleArgs};
use crate::Result;

/// Arguments of `simkit generate`.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub sample: SampleArgs,

    /// Number of values to display
    #[arg(long, default_value_t = DEFAULT_PREVIEW_LEN)]
    pub preview: usize,
}

#[derive(Debug, Serialize)]
struct GenerateReport<'a> {
    distribution: Distribution,
    seed: u64,
    size: usize,
    mean: f64,
    variance: f64,
    min: f64,
    max: f64,
    truncated: bool,
    values: &'a [f64],
}

impl<'a> GenerateReport<'a> {
    fn new(sample: &'a Sample, seed: u64, preview: usize) -> Self {
        let shown = sample.preview(preview);
        Self {
            distribution: sample.distribution(),
            seed,
            size: sample.len(),
            mean: sample.mean(),
            variance: sample.variance(),
            min: sample.min(),
            max: sample.max(),
            truncated: shown.truncated,
            values: shown.values,
        }
    }
}

/// Run the generate command
pub fn run(args: &GenerateArgs, seed: Option<u64>, format: OutputFormat) -> Result<()> {
    let (sample, seed) = args.sample.draw(seed)?;
    let stdout = std::io::stdout();
    render(&mut stdout.lock(), &sample, seed, args.preview, format)?;
    info!("Generation complete");
    Ok(())
}

pub(crate) fn render<W: Write>(
    out: &mut W,
    sample: &Sample,
    seed: u64,
    preview: usize,
    format: OutputFormat,
) -> Result<()> {
    let report = GenerateReport::new(sample, seed, preview);
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            writeln!(out, "Distribution: {}", report.distribution)?;
            writeln!(out, "Seed:         {}", report.seed)?;
            writeln!(out, "Size:         {}", report.size)?;
            writeln!(out)?;
            for (i, value) in report.values.iter().enumerate() {
                writeln!(out, "{:>8}  {:.4}", i + 1, value)?;
            }
            if report.truncated {
                writeln!(
                    out,
                    "... (showing first {} of {} values)",
                    report.values.len(),
                    report.size
                )?;
            }
            writeln!(out)?;
            writeln!(out, "Mean:     {:.4}", report.mean)?;
            writeln!(out, "Variance: {:.4}", report.variance)?;
            writeln!(out, "Min:      {:.4}", report.min)?;
            writeln!(out, "Max:      {:.4}", report.max)?;
        }
    }
    Ok(())
}
