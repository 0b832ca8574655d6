//! Instrument error types.
//!
//! This module provides structured error handling for contract and barrier
//! construction.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidStrike`: Strike is negative or not finite
/// - `InvalidMaturity`: Maturity is negative or not finite
/// - `InvalidBarrierLevel`: Barrier level is not finite
/// - `InvalidBarrierDirection`: Direction text is neither "up" nor "down"
/// - `InvalidBarrierNature`: Nature text is neither "in" nor "out"
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid strike price.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid maturity.
    #[error("Invalid maturity: T = {maturity}")]
    InvalidMaturity {
        /// The invalid maturity value
        maturity: f64,
    },

    /// Invalid barrier level.
    #[error("Invalid barrier level: H = {level}")]
    InvalidBarrierLevel {
        /// The invalid level
        level: f64,
    },

    /// Unrecognised barrier direction.
    #[error("Invalid barrier direction: {0:?} (expected \"up\" or \"down\")")]
    InvalidBarrierDirection(String),

    /// Unrecognised barrier nature.
    #[error("Invalid barrier nature: {0:?} (expected \"in\" or \"out\")")]
    InvalidBarrierNature(String),
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::Configuration(err.to_string())
    }
}
