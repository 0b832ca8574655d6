//! Heston stochastic volatility model.
//!
//! ```text
//! dS = mu * S * dt + sqrt(V) * S * dW_S
//! dV = kappa * (theta - V) * dt + epsilon * sqrt(V) * dW_V
//! E[dW_S * dW_V] = rho * dt
//! ```
//!
//! where:
//! - kappa = mean reversion speed
//! - theta = long-run variance
//! - epsilon = volatility of variance (vol-of-vol)
//! - rho = spot/variance correlation
//!
//! ## Feller condition
//!
//! ```text
//! 2 * kappa * theta > epsilon^2
//! ```
//!
//! When it holds the continuous-time variance stays strictly positive. A
//! violated condition is reported, not rejected: the discretisation schemes
//! handle a variance that touches zero.
//!
//! The initial variance is not a model parameter; it is supplied per
//! simulation.

use tracing::warn;

use super::error::{ensure_finite, ensure_positive, ModelError};
use super::stochastic::StochasticModel;

/// Heston model parameters.
///
/// # Examples
///
/// ```
/// use pricer_models::models::Heston;
///
/// let heston = Heston::new(0.02, 2.0, 0.04, 0.3, 0.0).unwrap();
/// assert!(heston.feller_condition());
///
/// let rough = Heston::new(0.02, 0.5, 0.01, 1.0, 0.0).unwrap();
/// assert!(!rough.feller_condition());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Heston {
    mu: f64,
    kappa: f64,
    theta: f64,
    epsilon: f64,
    rho: f64,
}

impl Heston {
    /// Creates a Heston model.
    ///
    /// # Errors
    ///
    /// Rejects `kappa <= 0`, `theta <= 0`, `epsilon <= 0`, `|rho| > 1`, and
    /// non-finite inputs.
    pub fn new(mu: f64, kappa: f64, theta: f64, epsilon: f64, rho: f64) -> Result<Self, ModelError> {
        let mu = ensure_finite("mu", mu)?;
        let kappa = ensure_positive("kappa", kappa)?;
        let theta = ensure_positive("theta", theta)?;
        let epsilon = ensure_positive("epsilon", epsilon)?;
        let rho = ensure_finite("rho", rho)?;
        if !(-1.0..=1.0).contains(&rho) {
            return Err(ModelError::InvalidCorrelation(rho));
        }

        let model = Self {
            mu,
            kappa,
            theta,
            epsilon,
            rho,
        };
        if !model.feller_condition() {
            warn!(
                kappa,
                theta,
                epsilon,
                "Feller condition 2*kappa*theta > epsilon^2 violated; variance can reach zero"
            );
        }
        Ok(model)
    }

    /// Spot drift rate.
    #[inline]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Mean reversion speed.
    #[inline]
    pub fn kappa(&self) -> f64 {
        self.kappa
    }

    /// Long-run variance.
    #[inline]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Volatility of variance.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Spot/variance correlation.
    #[inline]
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Returns `true` when `2 * kappa * theta > epsilon^2`.
    #[inline]
    pub fn feller_condition(&self) -> bool {
        2.0 * self.kappa * self.theta > self.epsilon * self.epsilon
    }

    /// Feller ratio `2 * kappa * theta / epsilon^2`; above one when the
    /// condition holds.
    #[inline]
    pub fn feller_ratio(&self) -> f64 {
        2.0 * self.kappa * self.theta / (self.epsilon * self.epsilon)
    }

    /// Conditional mean and variance of `V(t + dt)` given `V(t) = v`.
    ///
    /// The CIR transition is non-central chi-squared with
    ///
    /// ```text
    /// m  = theta + (v - theta) * e
    /// s2 = v * epsilon^2 * e * (1 - e) / kappa
    ///    + theta * epsilon^2 * (1 - e)^2 / (2 * kappa)
    /// ```
    ///
    /// where `e = exp(-kappa * dt)` (Andersen 2008, eq. 17-18).
    pub fn variance_moments(&self, v: f64, dt: f64) -> (f64, f64) {
        let e = (-self.kappa * dt).exp();
        let one_minus_e = 1.0 - e;
        let eps2 = self.epsilon * self.epsilon;

        let m = self.theta + (v - self.theta) * e;
        let s2 = v * eps2 * e * one_minus_e / self.kappa
            + self.theta * eps2 * one_minus_e * one_minus_e / (2.0 * self.kappa);
        (m, s2)
    }
}

impl StochasticModel for Heston {
    fn name(&self) -> &'static str {
        "Heston"
    }

    fn num_factors(&self) -> usize {
        2
    }
}
