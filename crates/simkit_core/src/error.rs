//! Error types for sample generation, histogram construction and simulation.
//!
//! Every failure in the core is local and recoverable: functions return a
//! [`SimError`] and leave previously returned data untouched. Callers decide
//! whether to re-prompt with corrected parameters.

use thiserror::Error;

/// Categorised simulation errors.
///
/// # Variants
/// - `InvalidParameter`: a distribution or configuration parameter is out of range
/// - `DegenerateSample`: no valid interval can be built (zero-width range or no bins)
/// - `EmptySample`: a histogram was requested on zero-length data
///
/// # Examples
/// ```
/// use simkit_core::SimError;
///
/// let err = SimError::invalid("lambda", -1.0);
/// assert_eq!(err.to_string(), "Invalid parameter 'lambda': -1");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Parameter outside its valid domain.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value, rendered for display.
        value: String,
    },

    /// No valid interval exists for the requested binning.
    #[error("Degenerate sample: {0}")]
    DegenerateSample(String),

    /// Histogram requested on an empty sample.
    #[error("Empty sample: at least one value is required")]
    EmptySample,
}

impl SimError {
    /// Builds an [`SimError::InvalidParameter`] from any displayable value.
    pub fn invalid(name: &'static str, value: impl ToString) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
        }
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = SimError::invalid("sigma", 0.0);
        assert_eq!(err.to_string(), "Invalid parameter 'sigma': 0");
        assert!(matches!(err, SimError::InvalidParameter { name: "sigma", .. }));
    }

    #[test]
    fn test_degenerate_display() {
        let err = SimError::DegenerateSample("all values equal 3.5".to_string());
        assert!(err.to_string().contains("all values equal 3.5"));
    }

    #[test]
    fn test_empty_display() {
        assert!(SimError::EmptySample.to_string().contains("Empty sample"));
    }
}
