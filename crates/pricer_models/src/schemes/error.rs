//! Discretisation scheme errors.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Scheme construction and initial-state errors.
///
/// # Examples
/// ```
/// use pricer_models::schemes::SchemeError;
/// use pricer_core::types::PricingError;
///
/// let err: PricingError = SchemeError::MissingInitialVariance { scheme: "QE" }.into();
/// assert!(err.is_precondition());
///
/// let err: PricingError = SchemeError::InvalidPsiC(2.5).into();
/// assert!(err.is_configuration());
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemeError {
    /// QE switching threshold outside `[1, 2]`.
    #[error("Invalid psi_c: {0} (must lie in [1, 2])")]
    InvalidPsiC(f64),

    /// Scheme needs an initial variance and none was given.
    #[error("{scheme} requires an initial variance v0")]
    MissingInitialVariance {
        /// Scheme name
        scheme: &'static str,
    },

    /// Initial variance negative or not finite.
    #[error("Invalid initial variance: v0 = {0} (must be finite and non-negative)")]
    InvalidInitialVariance(f64),
}

impl From<SchemeError> for PricingError {
    fn from(err: SchemeError) -> Self {
        match err {
            SchemeError::InvalidPsiC(_) => PricingError::Configuration(err.to_string()),
            SchemeError::MissingInitialVariance { .. } | SchemeError::InvalidInitialVariance(_) => {
                PricingError::Precondition(err.to_string())
            }
        }
    }
}
