//! Andersen's Quadratic-Exponential scheme for the Heston model.
//!
//! ## Variance
//!
//! Given `v(t)`, the conditional moments `m`, `s2` of `v(t+dt)` are matched
//! (see [`Heston::variance_moments`]) and `psi = s2 / m^2` selects a branch:
//!
//! - `psi <= psi_c` (quadratic): `v' = a (b + Z_v)^2` with
//!   `b^2 = 2/psi - 1 + sqrt(2/psi (2/psi - 1))`, `a = m / (1 + b^2)`
//! - `psi > psi_c` (exponential): point mass `p = (psi-1)/(psi+1)` at zero,
//!   exponential tail with rate `beta = (1-p)/m`, sampled by inversion of `U`
//!
//! ## Spot
//!
//! With `gamma1 = gamma2 = 1/2` (trapezoidal variance average):
//!
//! ```text
//! ln S' = ln S + mu dt + K0* + K1 v + K2 v' + sqrt(K3 v + K4 v') Z
//! K1 = dt/2 (kappa rho/eps - 1/2) - rho/eps
//! K2 = dt/2 (kappa rho/eps - 1/2) + rho/eps
//! K3 = K4 = dt/2 (1 - rho^2)
//! ```
//!
//! `K0*` is chosen so that `E[S' | S, v] = S exp(mu dt)` exactly (Andersen
//! 2008, section 4.3). When the moment generating function needed for that
//! correction does not exist, the uncorrected `K0 = -rho kappa theta dt / eps`
//! is used.
//!
//! Each step draws `Z_v`, `U` and `Z` in that order, whichever branch fires.

use pricer_core::rng::PricerRng;
use pricer_core::types::State;
use tracing::trace;

use super::{required_variance, DiscretisationScheme, SchemeError};
use crate::models::Heston;

/// Default quadratic/exponential switching threshold.
pub const DEFAULT_PSI_C: f64 = 1.5;

/// Quadratic-Exponential scheme with martingale correction.
///
/// # Examples
///
/// ```
/// use pricer_models::models::Heston;
/// use pricer_models::schemes::QuadraticExponential;
///
/// let heston = Heston::new(0.0, 1.5, 0.04, 0.3, -0.7).unwrap();
/// assert!(QuadraticExponential::with_threshold(heston, 1.0).is_ok());
/// assert!(QuadraticExponential::with_threshold(heston, 2.0).is_ok());
/// assert!(QuadraticExponential::with_threshold(heston, 0.9).is_err());
/// assert!(QuadraticExponential::with_threshold(heston, 2.1).is_err());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct QuadraticExponential {
    model: Heston,
    psi_c: f64,
}

/// Variance draw plus what the martingale correction needs from it.
enum VarianceDraw {
    Quadratic { v: f64, a: f64, b2: f64 },
    Exponential { v: f64, p: f64, beta: f64 },
}

impl QuadraticExponential {
    /// Binds the scheme to `model` with `psi_c = 1.5`.
    pub fn new(model: Heston) -> Result<Self, SchemeError> {
        Self::with_threshold(model, DEFAULT_PSI_C)
    }

    /// Binds the scheme to `model` with threshold `psi_c` in `[1, 2]`.
    pub fn with_threshold(model: Heston, psi_c: f64) -> Result<Self, SchemeError> {
        if !(1.0..=2.0).contains(&psi_c) {
            return Err(SchemeError::InvalidPsiC(psi_c));
        }
        Ok(Self { model, psi_c })
    }

    /// Returns a copy bound to the same model with a new threshold.
    pub fn with_psi_c(&self, psi_c: f64) -> Result<Self, SchemeError> {
        Self::with_threshold(self.model, psi_c)
    }

    /// Switching threshold.
    #[inline]
    pub fn psi_c(&self) -> f64 {
        self.psi_c
    }

    /// Bound model.
    #[inline]
    pub fn model(&self) -> &Heston {
        &self.model
    }

    fn sample_variance(&self, v: f64, dt: f64, z_v: f64, u: f64) -> VarianceDraw {
        let (m, s2) = self.model.variance_moments(v, dt);
        let psi = s2 / (m * m);

        if psi <= self.psi_c {
            let inv = 2.0 / psi;
            let b2 = inv - 1.0 + (inv * (inv - 1.0)).sqrt();
            let b = b2.sqrt();
            let a = m / (1.0 + b2);
            let shifted = b + z_v;
            VarianceDraw::Quadratic {
                v: a * shifted * shifted,
                a,
                b2,
            }
        } else {
            let p = (psi - 1.0) / (psi + 1.0);
            let beta = (1.0 - p) / m;
            let v_next = if u <= p {
                0.0
            } else {
                ((1.0 - p) / (1.0 - u)).ln() / beta
            };
            VarianceDraw::Exponential { v: v_next, p, beta }
        }
    }
}

impl DiscretisationScheme for QuadraticExponential {
    fn initial_state(&self, s0: f64, v0: Option<f64>) -> Result<State, SchemeError> {
        let v0 = required_variance(self.name(), v0)?;
        Ok(State::with_variance(s0, v0))
    }

    fn step(&self, state: &State, _t: f64, dt: f64, rng: &mut PricerRng) -> State {
        let h = &self.model;
        let v = state.variance_or_zero().max(0.0);

        let z_v = rng.gen_normal();
        let u = rng.gen_uniform();
        let z = rng.gen_normal();

        let draw = self.sample_variance(v, dt, z_v, u);

        let (rho, kappa, eps) = (h.rho(), h.kappa(), h.epsilon());
        let half_dt = 0.5 * dt;
        let k_mid = half_dt * (kappa * rho / eps - 0.5);
        let k0 = -rho * kappa * h.theta() * dt / eps;
        let k1 = k_mid - rho / eps;
        let k2 = k_mid + rho / eps;
        let k3 = half_dt * (1.0 - rho * rho);
        let k4 = k3;
        let big_a = k2 + 0.5 * k4;

        let (v_next, ln_mgf) = match draw {
            VarianceDraw::Quadratic { v, a, b2 } => {
                let denom = 1.0 - 2.0 * big_a * a;
                let ln_m = (denom > 0.0).then(|| big_a * b2 * a / denom - 0.5 * denom.ln());
                (v, ln_m)
            }
            VarianceDraw::Exponential { v, p, beta } => {
                let ln_m = (beta > big_a).then(|| (p + beta * (1.0 - p) / (beta - big_a)).ln());
                (v, ln_m)
            }
        };

        let k0_star = match ln_mgf {
            Some(ln_m) => -ln_m - (k1 + 0.5 * k3) * v,
            None => {
                trace!(v, dt, "QE martingale correction unavailable, using uncorrected drift");
                k0
            }
        };

        let log_return = h.mu() * dt
            + k0_star
            + k1 * v
            + k2 * v_next
            + (k3 * v + k4 * v_next).max(0.0).sqrt() * z;

        State::with_variance(state.spot() * log_return.exp(), v_next)
    }

    fn requires_initial_variance(&self) -> bool {
        true
    }

    fn tracks_variance(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "QE"
    }
}
