//! Vasicek short-rate model.
//!
//! ```text
//! dr = a * (b - r) * dt + sigma * dW
//! ```
//!
//! The rate is simulated directly, with no floor: negative rates are valid
//! states. A non-positive reversion speed is accepted (the process then
//! drifts away from `b` or is a Brownian motion with zero drift) and logged
//! as a warning.

use tracing::warn;

use super::error::{ensure_finite, ensure_non_negative, ModelError};
use super::stochastic::{SingleFactorModel, StochasticModel};

/// Mean-reverting Gaussian short-rate model.
///
/// # Examples
///
/// ```
/// use pricer_models::models::{SingleFactorModel, Vasicek};
///
/// let v = Vasicek::new(0.5, 0.03, 0.01).unwrap();
/// assert!((v.drift(0.0, 0.05) + 0.01).abs() < 1e-12);
/// assert_eq!(v.diffusion(0.0, 0.05), 0.01);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vasicek {
    a: f64,
    b: f64,
    sigma: f64,
}

impl Vasicek {
    /// Creates a model with reversion speed `a`, long-run mean `b` and
    /// volatility `sigma >= 0`.
    pub fn new(a: f64, b: f64, sigma: f64) -> Result<Self, ModelError> {
        let a = ensure_finite("a", a)?;
        let b = ensure_finite("b", b)?;
        let sigma = ensure_non_negative("sigma", sigma)?;
        if a <= 0.0 {
            warn!(a, "Vasicek reversion speed is not positive; the rate does not mean-revert");
        }
        Ok(Self { a, b, sigma })
    }

    /// Reversion speed.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Long-run mean.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Rate volatility.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// `E[r(t) | r(0) = r0] = b + (r0 - b) * exp(-a t)`.
    pub fn conditional_mean(&self, r0: f64, t: f64) -> f64 {
        self.b + (r0 - self.b) * (-self.a * t).exp()
    }

    /// `Var[r(t)] = sigma^2 * (1 - exp(-2 a t)) / (2 a)`, tending to
    /// `sigma^2 * t` as `a -> 0`.
    pub fn conditional_variance(&self, t: f64) -> f64 {
        let s2 = self.sigma * self.sigma;
        let x = 2.0 * self.a * t;
        if x.abs() < 1e-10 {
            s2 * t
        } else {
            // -expm1(-x) / x keeps precision for small a
            s2 * t * (-(-x).exp_m1() / x)
        }
    }
}

impl StochasticModel for Vasicek {
    fn name(&self) -> &'static str {
        "Vasicek"
    }
}

impl SingleFactorModel for Vasicek {
    #[inline]
    fn drift(&self, _t: f64, x: f64) -> f64 {
        self.a * (self.b - x)
    }

    #[inline]
    fn diffusion(&self, _t: f64, _x: f64) -> f64 {
        self.sigma
    }
}
