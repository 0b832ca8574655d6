//! Exact log-space step for geometric Brownian motion.

use pricer_core::rng::PricerRng;
use pricer_core::types::State;

use super::{DiscretisationScheme, SchemeError};
use crate::models::BlackScholes;

/// Log-Euler scheme for [`BlackScholes`].
///
/// ```text
/// S(t+dt) = S(t) * exp((mu - sigma^2/2) dt + sigma sqrt(dt) Z)
/// ```
///
/// Exact in distribution for any step size and keeps paths strictly
/// positive.
#[derive(Clone, Copy, Debug)]
pub struct LogEuler {
    model: BlackScholes,
}

impl LogEuler {
    /// Binds the scheme to `model`.
    pub fn new(model: BlackScholes) -> Self {
        Self { model }
    }

    /// Bound model.
    #[inline]
    pub fn model(&self) -> &BlackScholes {
        &self.model
    }
}

impl DiscretisationScheme for LogEuler {
    fn initial_state(&self, s0: f64, _v0: Option<f64>) -> Result<State, SchemeError> {
        Ok(State::new(s0))
    }

    #[inline]
    fn step(&self, state: &State, _t: f64, dt: f64, rng: &mut PricerRng) -> State {
        let sigma = self.model.sigma();
        let drift = (self.model.mu() - 0.5 * sigma * sigma) * dt;
        let diffusion = sigma * dt.sqrt() * rng.gen_normal();
        State::new(state.spot() * (drift + diffusion).exp())
    }

    fn name(&self) -> &'static str {
        "LogEuler"
    }
}
