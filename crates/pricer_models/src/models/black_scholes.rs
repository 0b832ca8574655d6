//! Black-Scholes (geometric Brownian motion) model.
//!
//! ```text
//! dS = mu * S * dt + sigma * S * dW
//! ```

use super::error::{ensure_finite, ensure_non_negative, ModelError};
use super::stochastic::{SingleFactorModel, StochasticModel};

/// Geometric Brownian motion with constant drift and volatility.
///
/// # Examples
///
/// ```
/// use pricer_models::models::BlackScholes;
///
/// assert!(BlackScholes::new(0.05, 0.2).is_ok());
/// assert!(BlackScholes::new(0.05, 0.0).is_ok());
/// assert!(BlackScholes::new(0.05, -0.1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlackScholes {
    mu: f64,
    sigma: f64,
}

impl BlackScholes {
    /// Creates a model with drift `mu` and volatility `sigma >= 0`.
    pub fn new(mu: f64, sigma: f64) -> Result<Self, ModelError> {
        Ok(Self {
            mu: ensure_finite("mu", mu)?,
            sigma: ensure_non_negative("sigma", sigma)?,
        })
    }

    /// Drift rate.
    #[inline]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Volatility.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl StochasticModel for BlackScholes {
    fn name(&self) -> &'static str {
        "BlackScholes"
    }
}

impl SingleFactorModel for BlackScholes {
    #[inline]
    fn drift(&self, _t: f64, x: f64) -> f64 {
        self.mu * x
    }

    #[inline]
    fn diffusion(&self, _t: f64, x: f64) -> f64 {
        self.sigma * x
    }
}
