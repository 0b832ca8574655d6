//! Discretisation schemes.
//!
//! A scheme owns exactly one model and turns it into a one-step update
//! `State(t) -> State(t + dt)`. Schemes are stateless: all randomness comes
//! from the [`PricerRng`] passed to [`DiscretisationScheme::step`], and each
//! scheme draws a fixed number of variates per step whatever branch it takes.
//!
//! | Scheme | Model | Variates per step |
//! |--------|-------|-------------------|
//! | [`Euler`] | any [`SingleFactorModel`](crate::models::SingleFactorModel) | 1 normal |
//! | [`LogEuler`] | [`BlackScholes`](crate::models::BlackScholes) | 1 normal |
//! | [`EulerHeston`] | [`Heston`](crate::models::Heston) | 2 normals |
//! | [`QuadraticExponential`] | [`Heston`](crate::models::Heston) | normal, uniform, normal |
//!
//! ## Example
//!
//! ```
//! use pricer_core::rng::PricerRng;
//! use pricer_models::models::BlackScholes;
//! use pricer_models::schemes::{DiscretisationScheme, Euler};
//!
//! let euler = Euler::new(BlackScholes::new(0.05, 0.0).unwrap());
//! let mut rng = PricerRng::from_seed(0);
//! let s0 = euler.initial_state(100.0, None).unwrap();
//! let s1 = euler.step(&s0, 0.0, 0.5, &mut rng);
//! assert!((s1.spot() - 102.5).abs() < 1e-12);
//! ```

mod error;
mod euler;
mod euler_heston;
mod log_euler;
mod qe;

pub use error::SchemeError;
pub use euler::Euler;
pub use euler_heston::EulerHeston;
pub use log_euler::LogEuler;
pub use qe::QuadraticExponential;

use pricer_core::rng::PricerRng;
use pricer_core::types::State;

/// One-step update rule bound to a model.
///
/// Implementations are shared read-only across worker threads during a
/// simulation.
pub trait DiscretisationScheme: Send + Sync {
    /// Builds the state at time zero.
    ///
    /// Schemes that do not model variance ignore `v0`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::MissingInitialVariance`] when the scheme needs
    /// `v0` and none is given, [`SchemeError::InvalidInitialVariance`] when it
    /// is negative or not finite.
    fn initial_state(&self, s0: f64, v0: Option<f64>) -> Result<State, SchemeError>;

    /// Advances `state` from time `t` to `t + dt`.
    fn step(&self, state: &State, t: f64, dt: f64, rng: &mut PricerRng) -> State;

    /// Whether [`initial_state`](Self::initial_state) needs `v0`.
    fn requires_initial_variance(&self) -> bool {
        false
    }

    /// Whether produced states carry a variance.
    fn tracks_variance(&self) -> bool {
        false
    }

    /// Scheme identifier.
    fn name(&self) -> &'static str;
}

/// Validates the initial variance of a two-factor scheme.
pub(crate) fn required_variance(scheme: &'static str, v0: Option<f64>) -> Result<f64, SchemeError> {
    let v0 = v0.ok_or(SchemeError::MissingInitialVariance { scheme })?;
    if !v0.is_finite() || v0 < 0.0 {
        return Err(SchemeError::InvalidInitialVariance(v0));
    }
    Ok(v0)
}
