//! Dupire local volatility model.
//!
//! ```text
//! dS = (r - q) * S * dt + sigma_loc(t, S) * S * dW
//! ```
//!
//! `sigma_loc` is read from a [`LocalVolatilitySurface`], which is validated
//! when it is built. The surface is held behind an `Arc` so that one grid can
//! back any number of models and engines.

use std::sync::Arc;

use pricer_core::market_data::surfaces::LocalVolatilitySurface;

use super::error::{ensure_finite, ModelError};
use super::stochastic::{SingleFactorModel, StochasticModel};

/// Local volatility model over a shared surface.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pricer_core::market_data::surfaces::LocalVolatilitySurface;
/// use pricer_models::models::{Dupire, SingleFactorModel};
///
/// let surface = LocalVolatilitySurface::new(
///     vec![0.5, 1.0],
///     vec![90.0, 110.0],
///     vec![vec![0.2, 0.2], vec![0.2, 0.2]],
/// )
/// .unwrap();
/// let dupire = Dupire::new(0.05, 0.01, Arc::new(surface)).unwrap();
/// assert!((dupire.diffusion(0.7, 100.0) - 20.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct Dupire {
    r: f64,
    q: f64,
    surface: Arc<LocalVolatilitySurface>,
}

impl Dupire {
    /// Creates a model with rate `r`, dividend yield `q` and a surface.
    pub fn new(r: f64, q: f64, surface: Arc<LocalVolatilitySurface>) -> Result<Self, ModelError> {
        Ok(Self {
            r: ensure_finite("r", r)?,
            q: ensure_finite("q", q)?,
            surface,
        })
    }

    /// Risk-free rate.
    #[inline]
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Dividend yield.
    #[inline]
    pub fn q(&self) -> f64 {
        self.q
    }

    /// Underlying surface.
    #[inline]
    pub fn surface(&self) -> &LocalVolatilitySurface {
        &self.surface
    }

    /// Local volatility at `(t, s)`.
    #[inline]
    pub fn sigma(&self, t: f64, s: f64) -> f64 {
        self.surface.sigma(t, s)
    }
}

impl StochasticModel for Dupire {
    fn name(&self) -> &'static str {
        "Dupire"
    }
}

impl SingleFactorModel for Dupire {
    #[inline]
    fn drift(&self, _t: f64, x: f64) -> f64 {
        (self.r - self.q) * x
    }

    #[inline]
    fn diffusion(&self, t: f64, x: f64) -> f64 {
        self.sigma(t, x) * x
    }

    fn has_local_variance(&self) -> bool {
        true
    }

    #[inline]
    fn local_variance(&self, t: f64, x: f64) -> Option<f64> {
        let sigma = self.sigma(t, x);
        Some(sigma * sigma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn skewed() -> Arc<LocalVolatilitySurface> {
        Arc::new(
            LocalVolatilitySurface::new(
                vec![0.0, 1.0],
                vec![80.0, 120.0],
                vec![vec![0.30, 0.20], vec![0.26, 0.16]],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_coefficients() {
        let d = Dupire::new(0.05, 0.02, skewed()).unwrap();
        assert_relative_eq!(d.drift(0.3, 100.0), 3.0, epsilon = 1e-12);
        // sigma(0.5, 100) = 0.23
        assert_relative_eq!(d.diffusion(0.5, 100.0), 23.0, epsilon = 1e-12);
        assert_relative_eq!(d.local_variance(0.5, 100.0).unwrap(), 0.0529, epsilon = 1e-12);
        assert!(d.has_local_variance());
    }

    #[test]
    fn test_surface_is_shared() {
        let surface = skewed();
        let a = Dupire::new(0.01, 0.0, Arc::clone(&surface)).unwrap();
        let b = Dupire::new(0.02, 0.0, Arc::clone(&surface)).unwrap();
        assert_eq!(Arc::strong_count(&surface), 3);
        assert_eq!(a.sigma(0.0, 80.0), b.sigma(0.0, 80.0));
    }

    #[test]
    fn test_rejects_non_finite_rate() {
        assert!(matches!(
            Dupire::new(f64::INFINITY, 0.0, skewed()),
            Err(ModelError::NonFinite { name: "r", .. })
        ));
    }
}
