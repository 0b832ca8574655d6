//! Generic Euler-Maruyama scheme.

use pricer_core::rng::PricerRng;
use pricer_core::types::State;

use super::{DiscretisationScheme, SchemeError};
use crate::models::SingleFactorModel;

/// Euler-Maruyama step for any single-factor model:
///
/// ```text
/// X(t+dt) = X(t) + mu(t, X) dt + sigma(t, X) sqrt(dt) Z
/// ```
///
/// No floor is applied, so a Black-Scholes path can cross zero on coarse
/// grids and a Vasicek rate can go negative. Models reporting a local
/// variance (Dupire) have it recorded in each state.
#[derive(Clone, Debug)]
pub struct Euler<M> {
    model: M,
}

impl<M: SingleFactorModel> Euler<M> {
    /// Binds the scheme to `model`.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Bound model.
    #[inline]
    pub fn model(&self) -> &M {
        &self.model
    }

    #[inline]
    fn make_state(&self, t: f64, x: f64) -> State {
        match self.model.local_variance(t, x) {
            Some(v) => State::with_variance(x, v),
            None => State::new(x),
        }
    }
}

impl<M: SingleFactorModel> DiscretisationScheme for Euler<M> {
    fn initial_state(&self, s0: f64, _v0: Option<f64>) -> Result<State, SchemeError> {
        Ok(self.make_state(0.0, s0))
    }

    #[inline]
    fn step(&self, state: &State, t: f64, dt: f64, rng: &mut PricerRng) -> State {
        let x = state.spot();
        let z = rng.gen_normal();
        let next = x + self.model.drift(t, x) * dt + self.model.diffusion(t, x) * dt.sqrt() * z;
        self.make_state(t + dt, next)
    }

    fn tracks_variance(&self) -> bool {
        self.model.has_local_variance()
    }

    fn name(&self) -> &'static str {
        "Euler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlackScholes, Dupire, Vasicek};
    use approx::assert_relative_eq;
    use pricer_core::market_data::surfaces::LocalVolatilitySurface;
    use std::sync::Arc;

    #[test]
    fn test_black_scholes_step_matches_formula() {
        let scheme = Euler::new(BlackScholes::new(0.05, 0.2).unwrap());
        let mut rng = PricerRng::from_seed(17);
        let z = PricerRng::from_seed(17).gen_normal();

        let s0 = scheme.initial_state(100.0, None).unwrap();
        let s1 = scheme.step(&s0, 0.0, 0.01, &mut rng);
        assert_relative_eq!(s1.spot(), 100.0 + 0.05 + 2.0 * z, epsilon = 1e-12);
        assert!(s1.variance().is_none());
    }

    #[test]
    fn test_zero_vol_is_deterministic() {
        let scheme = Euler::new(BlackScholes::new(0.1, 0.0).unwrap());
        let mut rng = PricerRng::from_seed(0);
        let mut s = scheme.initial_state(50.0, None).unwrap();
        for k in 0..4 {
            s = scheme.step(&s, k as f64 * 0.25, 0.25, &mut rng);
        }
        assert_relative_eq!(s.spot(), 50.0 * 1.025f64.powi(4), epsilon = 1e-12);
    }

    #[test]
    fn test_initial_variance_ignored() {
        let scheme = Euler::new(BlackScholes::new(0.0, 0.2).unwrap());
        let s0 = scheme.initial_state(100.0, Some(0.09)).unwrap();
        assert_eq!(s0, State::new(100.0));
        assert!(!scheme.requires_initial_variance());
        assert!(!scheme.tracks_variance());
    }

    #[test]
    fn test_vasicek_step() {
        let scheme = Euler::new(Vasicek::new(2.0, 0.05, 0.0).unwrap());
        let mut rng = PricerRng::from_seed(3);
        let s1 = scheme.step(&State::new(0.01), 0.0, 0.1, &mut rng);
        assert_relative_eq!(s1.spot(), 0.01 + 2.0 * 0.04 * 0.1, epsilon = 1e-15);
    }

    #[test]
    fn test_dupire_records_local_variance() {
        let surface = LocalVolatilitySurface::new(
            vec![0.0, 1.0],
            vec![50.0, 150.0],
            vec![vec![0.3, 0.1], vec![0.3, 0.1]],
        )
        .unwrap();
        let scheme = Euler::new(Dupire::new(0.0, 0.0, Arc::new(surface)).unwrap());
        assert!(scheme.tracks_variance());

        let s0 = scheme.initial_state(100.0, None).unwrap();
        assert_relative_eq!(s0.variance().unwrap(), 0.04, epsilon = 1e-12);

        let mut rng = PricerRng::from_seed(8);
        let s1 = scheme.step(&s0, 0.0, 0.01, &mut rng);
        let sigma = 0.3 - 0.2 * (s1.spot() - 50.0) / 100.0;
        assert_relative_eq!(s1.variance().unwrap(), sigma * sigma, epsilon = 1e-12);
    }
}
