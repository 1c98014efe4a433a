//! Distribution parameters and their validity constraints.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Distribution to draw a sample from.
///
/// Constructors do not validate; [`Distribution::validate`] runs before any
/// value is generated.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Distribution {
    /// Continuous uniform on [a, b]; requires `b > a`.
    Uniform {
        /// Lower bound.
        a: f64,
        /// Upper bound.
        b: f64,
    },
    /// Exponential with rate λ; requires `λ > 0`.
    Exponential {
        /// Rate parameter.
        lambda: f64,
    },
    /// Normal with mean μ and standard deviation σ; requires `σ > 0`.
    Normal {
        /// Mean.
        mean: f64,
        /// Standard deviation.
        std_dev: f64,
    },
}

impl Distribution {
    /// Uniform[a, b].
    pub fn uniform(a: f64, b: f64) -> Self {
        Self::Uniform { a, b }
    }

    /// Exponential(λ).
    pub fn exponential(lambda: f64) -> Self {
        Self::Exponential { lambda }
    }

    /// Normal(μ, σ).
    pub fn normal(mean: f64, std_dev: f64) -> Self {
        Self::Normal { mean, std_dev }
    }

    /// Short lowercase name, used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uniform { .. } => "uniform",
            Self::Exponential { .. } => "exponential",
            Self::Normal { .. } => "normal",
        }
    }

    /// Checks the parameter constraints.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` naming the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Uniform { a, b } => {
                finite("a", a)?;
                finite("b", b)?;
                if b <= a {
                    return Err(SimError::invalid("b", format!("{b} (must exceed a = {a})")));
                }
            }
            Self::Exponential { lambda } => {
                finite("lambda", lambda)?;
                if lambda <= 0.0 {
                    return Err(SimError::invalid("lambda", format!("{lambda} (must be positive)")));
                }
            }
            Self::Normal { mean, std_dev } => {
                finite("mean", mean)?;
                finite("sigma", std_dev)?;
                if std_dev <= 0.0 {
                    return Err(SimError::invalid("sigma", format!("{std_dev} (must be positive)")));
                }
            }
        }
        Ok(())
    }

    /// Theoretical mean of the distribution.
    pub fn expected_mean(&self) -> f64 {
        match *self {
            Self::Uniform { a, b } => (a + b) / 2.0,
            Self::Exponential { lambda } => 1.0 / lambda,
            Self::Normal { mean, .. } => mean,
        }
    }

    /// Theoretical variance of the distribution.
    pub fn expected_variance(&self) -> f64 {
        match *self {
            Self::Uniform { a, b } => (b - a).powi(2) / 12.0,
            Self::Exponential { lambda } => 1.0 / (lambda * lambda),
            Self::Normal { std_dev, .. } => std_dev * std_dev,
        }
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uniform { a, b } => write!(f, "Uniform[{a}, {b}]"),
            Self::Exponential { lambda } => write!(f, "Exponential(λ={lambda})"),
            Self::Normal { mean, std_dev } => write!(f, "Normal(μ={mean}, σ={std_dev})"),
        }
    }
}

fn finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::invalid(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_parameters() {
        assert!(Distribution::uniform(0.0, 1.0).validate().is_ok());
        assert!(Distribution::exponential(0.5).validate().is_ok());
        assert!(Distribution::normal(-3.0, 2.0).validate().is_ok());
    }

    #[test]
    fn test_uniform_requires_b_above_a() {
        let err = Distribution::uniform(1.0, 1.0).validate().unwrap_err();
        assert!(matches!(err, SimError::InvalidParameter { name: "b", .. }));
        assert!(Distribution::uniform(2.0, 1.0).validate().is_err());
    }

    #[test]
    fn test_exponential_requires_positive_rate() {
        for lambda in [0.0, -1.0] {
            let err = Distribution::exponential(lambda).validate().unwrap_err();
            assert!(matches!(err, SimError::InvalidParameter { name: "lambda", .. }));
        }
    }

    #[test]
    fn test_normal_requires_positive_sigma() {
        let err = Distribution::normal(0.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, SimError::InvalidParameter { name: "sigma", .. }));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Distribution::uniform(f64::NAN, 1.0).validate().is_err());
        assert!(Distribution::exponential(f64::INFINITY).validate().is_err());
        let err = Distribution::normal(f64::NEG_INFINITY, 1.0).validate().unwrap_err();
        assert!(matches!(err, SimError::InvalidParameter { name: "mean", .. }));
    }

    #[test]
    fn test_moments() {
        assert_eq!(Distribution::uniform(2.0, 4.0).expected_mean(), 3.0);
        assert_eq!(Distribution::exponential(4.0).expected_mean(), 0.25);
        assert_eq!(Distribution::normal(1.0, 3.0).expected_variance(), 9.0);
    }
}
