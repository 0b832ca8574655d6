//! Option contract terms.

use super::error::InstrumentError;

/// Strike and maturity of an option.
///
/// A zero maturity is a valid contract; pricing it is rejected later because
/// the simulation horizon must be positive.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionContract;
///
/// let c = OptionContract::new(100.0, 1.0).unwrap();
/// assert_eq!(c.strike(), 100.0);
/// assert_eq!(c.maturity(), 1.0);
/// assert!(OptionContract::new(-1.0, 1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    strike: f64,
    maturity: f64,
}

impl OptionContract {
    /// Creates a contract with strike `K >= 0` and maturity `T >= 0`.
    pub fn new(strike: f64, maturity: f64) -> Result<Self, InstrumentError> {
        if !strike.is_finite() || strike < 0.0 {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        if !maturity.is_finite() || maturity < 0.0 {
            return Err(InstrumentError::InvalidMaturity { maturity });
        }
        Ok(Self { strike, maturity })
    }

    /// Strike `K`.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Maturity `T` in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_accepted() {
        assert!(OptionContract::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_terms_rejected() {
        assert_eq!(
            OptionContract::new(-5.0, 1.0),
            Err(InstrumentError::InvalidStrike { strike: -5.0 })
        );
        assert_eq!(
            OptionContract::new(100.0, -0.1),
            Err(InstrumentError::InvalidMaturity { maturity: -0.1 })
        );
        assert!(OptionContract::new(f64::NAN, 1.0).is_err());
        assert!(OptionContract::new(100.0, f64::INFINITY).is_err());
    }
}
