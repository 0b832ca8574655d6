//! Error types for the Monte Carlo engine.
//!
//! - [`ConfigError`]: raised by `configure` and the config builder; the engine
//!   keeps its previous configuration
//! - [`SimulationError`]: raised by `generate`/`simulate_path` and the pricer
//!   before any path is drawn

use pricer_core::types::PricingError;
use pricer_models::schemes::SchemeError;
use thiserror::Error;

/// Engine configuration error.
///
/// # Examples
/// ```
/// use pricer_pricing::mc::ConfigError;
///
/// let err = ConfigError::NegativeSeed(-3);
/// assert!(err.to_string().contains("-3"));
/// ```
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Seed below zero.
    #[error("Invalid seed {0}: must be non-negative")]
    NegativeSeed(i64),

    /// Worker count that is neither `-1` nor positive.
    #[error("Invalid n_jobs {0}: must be strictly positive or -1")]
    InvalidJobCount(i64),

    /// Dedicated thread pool could not be created.
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::Configuration(err.to_string())
    }
}

/// Simulation precondition error.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum SimulationError {
    /// Horizon not strictly positive or not finite.
    #[error("Invalid horizon: T = {0} (must be positive)")]
    InvalidHorizon(f64),

    /// Zero time steps.
    #[error("Invalid step count: n must be at least 1")]
    ZeroSteps,

    /// Zero paths.
    #[error("Invalid path count: n_paths must be at least 1")]
    ZeroPaths,

    /// Initial spot not finite.
    #[error("Invalid initial spot: S0 = {0}")]
    InvalidSpot(f64),

    /// Path matrix size `n_paths x (n + 1)` overflows `usize`.
    #[error("Grid too large: {n_paths} paths x {n_steps} steps")]
    GridTooLarge {
        /// Requested path count.
        n_paths: usize,
        /// Requested step count.
        n_steps: usize,
    },

    /// Finite-difference bump not strictly positive or not finite.
    #[error("Invalid bump size: h = {0} (must be positive)")]
    InvalidBump(f64),

    /// Initial state rejected by the scheme.
    #[error(transparent)]
    Scheme(#[from] SchemeError),

    /// Output buffers could not be assembled into a result.
    #[error(transparent)]
    Output(#[from] PricingError),
}

impl From<SimulationError> for PricingError {
    fn from(err: SimulationError) -> Self {
        match err {
            SimulationError::Scheme(inner) => inner.into(),
            SimulationError::Output(inner) => inner,
            other => PricingError::Precondition(other.to_string()),
        }
    }
}
