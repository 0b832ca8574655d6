//! Full-truncation Euler scheme for the Heston model.

use pricer_core::rng::PricerRng;
use pricer_core::types::State;

use super::{required_variance, DiscretisationScheme, SchemeError};
use crate::models::Heston;

/// Euler scheme with full truncation (Lord, Koekkoek & van Dijk, 2010).
///
/// With `v+ = max(v, 0)`:
///
/// ```text
/// v(t+dt)  = v + kappa (theta - v+) dt + epsilon sqrt(v+ dt) Z_v
/// ln S(t+dt) = ln S + (mu - v+/2) dt + sqrt(v+ dt) Z_s
/// Z_s = rho Z_v + sqrt(1 - rho^2) Z
/// ```
///
/// The stored variance is the raw, possibly negative, Euler value; only the
/// drift and diffusion inputs are truncated.
#[derive(Clone, Copy, Debug)]
pub struct EulerHeston {
    model: Heston,
}

impl EulerHeston {
    /// Binds the scheme to `model`.
    pub fn new(model: Heston) -> Self {
        Self { model }
    }

    /// Bound model.
    #[inline]
    pub fn model(&self) -> &Heston {
        &self.model
    }
}

impl DiscretisationScheme for EulerHeston {
    fn initial_state(&self, s0: f64, v0: Option<f64>) -> Result<State, SchemeError> {
        let v0 = required_variance(self.name(), v0)?;
        Ok(State::with_variance(s0, v0))
    }

    fn step(&self, state: &State, _t: f64, dt: f64, rng: &mut PricerRng) -> State {
        let m = &self.model;
        let v = state.variance_or_zero();
        let v_plus = v.max(0.0);

        let z_v = rng.gen_normal();
        let z = rng.gen_normal();
        let rho = m.rho();
        let z_s = rho * z_v + (1.0 - rho * rho).sqrt() * z;

        let sqrt_v_dt = (v_plus * dt).sqrt();
        let v_next = v + m.kappa() * (m.theta() - v_plus) * dt + m.epsilon() * sqrt_v_dt * z_v;
        let log_return = (m.mu() - 0.5 * v_plus) * dt + sqrt_v_dt * z_s;

        State::with_variance(state.spot() * log_return.exp(), v_next)
    }

    fn requires_initial_variance(&self) -> bool {
        true
    }

    fn tracks_variance(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "EulerHeston"
    }
}
