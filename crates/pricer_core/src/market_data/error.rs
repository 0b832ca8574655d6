//! Market data error types.
//!
//! This module provides structured error handling for local volatility
//! surface construction.

use crate::types::{InterpolationError, PricingError};
use thiserror::Error;

/// Market data construction errors.
///
/// # Variants
///
/// - `ShapeMismatch`: Volatility grid does not match the time/spot axes
/// - `InsufficientData`: Fewer than two nodes on an axis
/// - `NonMonotonicAxis`: Axis is not strictly increasing
/// - `InvalidVolatility`: Negative or non-finite grid volatility
/// - `Interpolation`: Wrapped interpolation error
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::ShapeMismatch {
///     rows: 2,
///     times: 3,
/// };
/// assert!(format!("{}", err).contains("2 rows"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Row count differs from the time-axis length.
    #[error("Volatility grid has {rows} rows but {times} time nodes")]
    ShapeMismatch {
        /// Rows in the volatility grid
        rows: usize,
        /// Nodes on the time axis
        times: usize,
    },

    /// Row length differs from the spot-axis length.
    #[error("Volatility row {row} has {len} values but {spots} spot nodes")]
    RowLengthMismatch {
        /// Offending row index
        row: usize,
        /// Length of the row
        len: usize,
        /// Nodes on the spot axis
        spots: usize,
    },

    /// Insufficient nodes on an axis.
    #[error("Insufficient {axis} nodes: got {got}, need {need}")]
    InsufficientData {
        /// Axis name
        axis: &'static str,
        /// Number of nodes provided
        got: usize,
        /// Minimum number of nodes required
        need: usize,
    },

    /// Axis not strictly increasing.
    #[error("{axis} axis is not strictly increasing at index {index}")]
    NonMonotonicAxis {
        /// Axis name
        axis: &'static str,
        /// First index breaking monotonicity
        index: usize,
    },

    /// Negative or non-finite volatility.
    #[error("Invalid volatility {value} at ({row}, {col})")]
    InvalidVolatility {
        /// Time index
        row: usize,
        /// Spot index
        col: usize,
        /// Offending value
        value: f64,
    },

    /// Interpolation error.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        PricingError::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let err = MarketDataError::ShapeMismatch { rows: 2, times: 3 };
        assert_eq!(
            format!("{}", err),
            "Volatility grid has 2 rows but 3 time nodes"
        );
    }

    #[test]
    fn test_non_monotonic_display() {
        let err = MarketDataError::NonMonotonicAxis {
            axis: "spot",
            index: 4,
        };
        assert_eq!(
            format!("{}", err),
            "spot axis is not strictly increasing at index 4"
        );
    }

    #[test]
    fn test_from_interpolation_error() {
        let mkt_err: MarketDataError = InterpolationError::InvalidInput("x".to_string()).into();
        assert!(matches!(mkt_err, MarketDataError::Interpolation(_)));
    }

    #[test]
    fn test_into_pricing_error() {
        let err = MarketDataError::InvalidVolatility {
            row: 0,
            col: 1,
            value: -0.2,
        };
        let pricing_err: PricingError = err.into();
        match pricing_err {
            PricingError::Configuration(msg) => assert!(msg.contains("-0.2")),
            other => panic!("Expected Configuration variant, got {:?}", other),
        }
    }
}
