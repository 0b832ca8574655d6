//! StochasticModel traits for a unified stochastic process interface.
//!
//! Every model exposes a name and its factor count through
//! [`StochasticModel`]. Single-factor models additionally expose their SDE
//! coefficients through [`SingleFactorModel`]:
//!
//! ```text
//! dX = drift(t, X) dt + diffusion(t, X) dW
//! ```
//!
//! which is all the generic Euler scheme needs. Two-factor models (Heston) are
//! stepped by dedicated schemes that read the model's parameters directly.
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::{BlackScholes, SingleFactorModel, StochasticModel};
//!
//! let bs = BlackScholes::new(0.05, 0.2).unwrap();
//! assert_eq!(bs.name(), "BlackScholes");
//! assert_eq!(bs.num_factors(), 1);
//! assert!((bs.drift(0.0, 100.0) - 5.0).abs() < 1e-12);
//! assert!((bs.diffusion(0.0, 100.0) - 20.0).abs() < 1e-12);
//! ```

/// Common interface of all stochastic models.
///
/// Models are immutable parameter bundles, shared read-only by every worker
/// of a simulation, hence the `Send + Sync` bound.
pub trait StochasticModel: Send + Sync {
    /// Model identifier.
    fn name(&self) -> &'static str;

    /// Number of stochastic factors (1 for spot-only, 2 with variance).
    fn num_factors(&self) -> usize {
        1
    }
}

/// Single-factor model with explicit drift and diffusion coefficients.
pub trait SingleFactorModel: StochasticModel {
    /// Drift coefficient `mu(t, x)`.
    fn drift(&self, t: f64, x: f64) -> f64;

    /// Diffusion coefficient `sigma(t, x)`.
    fn diffusion(&self, t: f64, x: f64) -> f64;

    /// Whether the model reports an instantaneous local variance.
    fn has_local_variance(&self) -> bool {
        false
    }

    /// Instantaneous variance of returns at `(t, x)`, if the model defines
    /// one as a diagnostic.
    fn local_variance(&self, _t: f64, _x: f64) -> Option<f64> {
        None
    }
}
