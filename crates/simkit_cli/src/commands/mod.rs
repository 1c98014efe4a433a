//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands render into any
//! `Write` so their output can be checked in tests.

pub mod bowling;
pub mod generate;
pub mod histogram;

use clap::{Args, ValueEnum};
use simkit_core::rng::SimRng;
use simkit_core::variate::{generate_sample, Distribution, Sample};
use tracing::info;

use crate::Result;

/// Output format shared by every command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Distribution family selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DistributionKind {
    Uniform,
    Exponential,
    Normal,
}

/// Distribution and sample size options shared by `generate` and `histogram`.
#[derive(Args, Clone, Debug)]
pub struct SampleArgs {
    /// Distribution to sample from
    #[arg(value_enum)]
    pub distribution: DistributionKind,

    /// Number of values to generate
    #[arg(short = 'n', long, default_value_t = 1000)]
    pub size: usize,

    /// Uniform lower bound
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub a: f64,

    /// Uniform upper bound
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub b: f64,

    /// Exponential rate
    #[arg(short, long, default_value_t = 1.0)]
    pub lambda: f64,

    /// Normal mean
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub mean: f64,

    /// Normal standard deviation
    #[arg(short = 's', long, default_value_t = 1.0)]
    pub std_dev: f64,
}

impl SampleArgs {
    /// The selected distribution with its parameters.
    pub fn distribution(&self) -> Distribution {
        match self.distribution {
            DistributionKind::Uniform => Distribution::uniform(self.a, self.b),
            DistributionKind::Exponential => Distribution::exponential(self.lambda),
            DistributionKind::Normal => Distribution::normal(self.mean, self.std_dev),
        }
    }

    /// Draws the sample from a generator seeded with `seed`, or from the OS.
    pub fn draw(&self, seed: Option<u64>) -> Result<(Sample, u64)> {
        let mut rng = seed.map_or_else(SimRng::from_entropy, SimRng::from_seed);
        let distribution = self.distribution();
        info!(%distribution, size = self.size, seed = rng.seed(), "Generating sample");
        let sample = generate_sample(distribution, self.size, &mut rng)?;
        Ok((sample, rng.seed()))
    }
}

#[cfg(test)]
pub(crate) fn sample_args(distribution: DistributionKind, size: usize) -> SampleArgs {
    SampleArgs {
        distribution,
        size,
        a: 0.0,
        b: 1.0,
        lambda: 1.0,
        mean: 0.0,
        std_dev: 1.0,
    }
}
