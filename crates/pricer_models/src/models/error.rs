//! Model parameter errors.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Model construction errors.
///
/// A model that fails validation is never returned, so every live model
/// satisfies its parameter invariants.
///
/// # Examples
/// ```
/// use pricer_models::models::ModelError;
///
/// let err = ModelError::NegativeVolatility { name: "sigma", value: -0.2 };
/// assert!(format!("{}", err).contains("-0.2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Volatility-like parameter below zero.
    #[error("Invalid {name}: {value} (must be non-negative)")]
    NegativeVolatility {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Parameter that must be strictly positive.
    #[error("Invalid {name}: {value} (must be strictly positive)")]
    NonPositive {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Correlation outside `[-1, 1]`.
    #[error("Invalid rho: {0} (must lie in [-1, 1])")]
    InvalidCorrelation(f64),

    /// NaN or infinite parameter.
    #[error("Invalid {name}: {value} (must be finite)")]
    NonFinite {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },
}

impl From<ModelError> for PricingError {
    fn from(err: ModelError) -> Self {
        PricingError::Configuration(err.to_string())
    }
}

/// Rejects NaN and infinities.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ModelError::NonFinite { name, value })
    }
}

/// Rejects non-finite and negative values.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64, ModelError> {
    let value = ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(ModelError::NegativeVolatility { name, value });
    }
    Ok(value)
}

/// Rejects non-finite and non-positive values.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64, ModelError> {
    let value = ensure_finite(name, value)?;
    if value <= 0.0 {
        return Err(ModelError::NonPositive { name, value });
    }
    Ok(value)
}
