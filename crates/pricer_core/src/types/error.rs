//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The workspace-wide error classification
//! - `InterpolationError`: Errors from grid interpolator construction
//!
//! Every module-level error (`MarketDataError`, `ModelError`, `SchemeError`,
//! `InstrumentError`, `ConfigError`, `SimulationError`) converts into
//! [`PricingError`], so callers can propagate with `?` across layers.

use thiserror::Error;

/// Categorised pricing errors.
///
/// All failures are fail-fast and non-retryable; the category tells the caller
/// where the fault lies.
///
/// # Variants
/// - `Configuration`: An object was built or configured with invalid parameters
///   and never became usable
/// - `Precondition`: A call lacked a value it needs (initial variance, positive
///   horizon, positive counts); no partial work was done
/// - `UnsupportedQuery`: A result was asked for data it does not carry; the
///   result stays valid for other queries
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::Precondition("T must be positive".to_string());
/// assert_eq!(format!("{}", err), "Precondition failed: T must be positive");
/// assert!(err.is_precondition());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid construction or configuration parameter.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Missing or invalid call argument.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Query not supported by the queried object.
    #[error("Unsupported query: {0}")]
    UnsupportedQuery(String),
}

impl PricingError {
    /// Returns `true` for configuration errors.
    #[inline]
    pub fn is_configuration(&self) -> bool {
        matches!(self, PricingError::Configuration(_))
    }

    /// Returns `true` for precondition errors.
    #[inline]
    pub fn is_precondition(&self) -> bool {
        matches!(self, PricingError::Precondition(_))
    }

    /// Returns `true` for unsupported-query errors.
    #[inline]
    pub fn is_unsupported_query(&self) -> bool {
        matches!(self, PricingError::UnsupportedQuery(_))
    }
}

/// Interpolation-related errors.
///
/// # Examples
/// ```
/// use pricer_core::types::InterpolationError;
///
/// let err = InterpolationError::InsufficientData { got: 1, need: 2 };
/// assert!(format!("{}", err).contains("got 1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Axis is not strictly increasing.
    #[error("Axis is not strictly increasing at index {index}")]
    NonMonotonicData {
        /// Index where monotonicity violation was detected
        index: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<InterpolationError> for PricingError {
    fn from(err: InterpolationError) -> Self {
        PricingError::Configuration(err.to_string())
    }
}
