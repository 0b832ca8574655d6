//! Monte Carlo path generation engine.
//!
//! # Reproducibility
//!
//! Every path owns a private [`PricerRng`] derived from `(root_seed, path
//! index)`. Workers write disjoint rows of the output buffer, so the result
//! of [`MonteCarloEngine::generate`] depends only on the root seed and the
//! call arguments, never on the worker count or scheduling order.
//!
//! A seeded engine reuses its seed as the root of every `generate` call. An
//! unseeded engine draws a fresh root per call and records it in
//! [`SimulationResult::seed`], so any run can be replayed with
//! [`MonteCarloEngine::generate_with_seed`].
//!
//! [`MonteCarloEngine::simulate_path`] instead draws from one sequential
//! stream rooted at the seed: successive calls give successive paths until
//! [`MonteCarloEngine::reset_rng`] rewinds it.

use std::sync::Arc;

use pricer_core::rng::PricerRng;
use pricer_core::types::{Path, SimulationResult, State};
use pricer_models::schemes::DiscretisationScheme;
use rayon::prelude::*;
use rayon::ThreadPool;
use tracing::debug;

use super::config::{EngineConfig, Parallelism};
use super::error::{ConfigError, SimulationError};

/// Path generator bound to one discretisation scheme.
///
/// The scheme (and through it the model) is fixed for the engine's lifetime.
///
/// # Examples
///
/// ```rust
/// use pricer_models::models::BlackScholes;
/// use pricer_models::schemes::Euler;
/// use pricer_pricing::mc::MonteCarloEngine;
///
/// let scheme = Euler::new(BlackScholes::new(0.05, 0.2).unwrap());
/// let mut engine = MonteCarloEngine::new(scheme);
/// engine.configure(Some(1), None).unwrap();
///
/// let result = engine.generate(100.0, 252, 1.0, 10, None).unwrap();
/// assert_eq!(result.n_paths(), 10);
/// assert_eq!(result.n_steps(), 253);
/// assert!(result.spot_paths().all(|p| p[0] == 100.0));
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloEngine<S> {
    scheme: S,
    config: EngineConfig,
    /// Dedicated pool; `None` runs on rayon's global pool.
    pool: Option<Arc<ThreadPool>>,
    root_seed: u64,
    /// Sequential stream used by `simulate_path`.
    stream: PricerRng,
}

impl<S: DiscretisationScheme> MonteCarloEngine<S> {
    /// Creates an unseeded engine on rayon's global pool.
    pub fn new(scheme: S) -> Self {
        let root_seed = rand::random();
        Self {
            scheme,
            config: EngineConfig::default(),
            pool: None,
            root_seed,
            stream: PricerRng::from_seed(root_seed),
        }
    }

    /// Creates an engine from a prepared configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ThreadPool`] if the dedicated pool cannot be
    /// built.
    pub fn with_config(scheme: S, config: EngineConfig) -> Result<Self, ConfigError> {
        let pool = config.parallelism().build_pool()?;
        let root_seed = config.seed().unwrap_or_else(rand::random);
        debug!(
            scheme = scheme.name(),
            seed = ?config.seed(),
            parallelism = ?config.parallelism(),
            "engine created"
        );
        Ok(Self {
            scheme,
            config,
            pool,
            root_seed,
            stream: PricerRng::from_seed(root_seed),
        })
    }

    /// Sets the root seed and/or the worker count.
    ///
    /// Absent arguments keep their current value. A new seed also rewinds the
    /// `simulate_path` stream. On error the engine is left unchanged.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NegativeSeed`] if `seed < 0`
    /// - [`ConfigError::InvalidJobCount`] if `n_jobs` is `0` or below `-1`
    /// - [`ConfigError::ThreadPool`] if the pool cannot be built
    pub fn configure(&mut self, seed: Option<i64>, n_jobs: Option<i64>) -> Result<(), ConfigError> {
        let mut builder = self.config.to_builder();
        if let Some(seed) = seed {
            builder = builder.seed(seed);
        }
        if let Some(n_jobs) = n_jobs {
            builder = builder.n_jobs(n_jobs);
        }
        let config = builder.build()?;

        let pool = if n_jobs.is_some() {
            config.parallelism().build_pool()?
        } else {
            self.pool.clone()
        };

        self.config = config;
        self.pool = pool;
        if let (Some(_), Some(root)) = (seed, config.seed()) {
            self.root_seed = root;
            self.reset_rng();
        }

        debug!(
            scheme = self.scheme.name(),
            seed = self.root_seed,
            workers = self.worker_count(),
            "engine configured"
        );
        Ok(())
    }

    /// Root of the `simulate_path` stream.
    ///
    /// Equal to the configured seed when the engine is seeded. For an
    /// unseeded engine it is the randomly drawn root of the sequential stream
    /// only; `generate` roots are recorded on each result instead.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.root_seed
    }

    /// Root seed for the next batch of paths.
    ///
    /// The configured seed when seeded, otherwise a fresh random draw.
    pub fn next_root_seed(&self) -> u64 {
        self.config.seed().unwrap_or_else(rand::random)
    }

    /// Whether the root seed was set by the caller.
    #[inline]
    pub fn is_seeded(&self) -> bool {
        self.config.seed().is_some()
    }

    /// Forgets the configured seed and draws a fresh random one.
    pub fn reset_seed(&mut self) {
        self.config = self.config.with_seed(None);
        self.root_seed = rand::random();
        self.reset_rng();
        debug!(seed = self.root_seed, "engine seed reset");
    }

    /// Rewinds the `simulate_path` stream to the root seed.
    #[inline]
    pub fn reset_rng(&mut self) {
        self.stream = PricerRng::from_seed(self.root_seed);
    }

    /// Current configuration.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Worker-count policy.
    #[inline]
    pub fn parallelism(&self) -> Parallelism {
        self.config.parallelism()
    }

    /// Number of workers `generate` runs on.
    pub fn worker_count(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Bound scheme.
    #[inline]
    pub fn scheme(&self) -> &S {
        &self.scheme
    }

    /// Simulates one path of `n + 1` states on `[0, t]`.
    ///
    /// Draws from the engine's sequential stream.
    ///
    /// # Errors
    ///
    /// Returns a [`SimulationError`] if `t <= 0`, `n == 0`, `s0` is not finite,
    /// or the scheme rejects `v0`.
    pub fn simulate_path(
        &mut self,
        s0: f64,
        n: usize,
        t: f64,
        v0: Option<f64>,
    ) -> Result<Path, SimulationError> {
        let width = validate_grid(s0, n, t, 1)?;
        let mut state = self.scheme.initial_state(s0, v0)?;
        let dt = t / n as f64;

        let mut states = Vec::with_capacity(width);
        states.push(state);
        for k in 0..n {
            state = self.scheme.step(&state, k as f64 * dt, dt, &mut self.stream);
            states.push(state);
        }
        Ok(Path::from_states(states))
    }

    /// Simulates `n_paths` independent paths of `n + 1` states on `[0, t]`
    /// from [`next_root_seed`](Self::next_root_seed).
    ///
    /// # Errors
    ///
    /// As [`simulate_path`](Self::simulate_path), plus `n_paths == 0`.
    pub fn generate(
        &self,
        s0: f64,
        n: usize,
        t: f64,
        n_paths: usize,
        v0: Option<f64>,
    ) -> Result<SimulationResult, SimulationError> {
        self.generate_with_seed(self.next_root_seed(), s0, n, t, n_paths, v0)
    }

    /// Simulates `n_paths` paths from an explicit root seed.
    ///
    /// Path `i` is a pure function of `(root_seed, i)` and the arguments.
    pub fn generate_with_seed(
        &self,
        root_seed: u64,
        s0: f64,
        n: usize,
        t: f64,
        n_paths: usize,
        v0: Option<f64>,
    ) -> Result<SimulationResult, SimulationError> {
        let width = validate_grid(s0, n, t, n_paths)?;
        if n_paths == 0 {
            return Err(SimulationError::ZeroPaths);
        }
        let initial = self.scheme.initial_state(s0, v0)?;
        let dt = t / n as f64;
        let len = n_paths * width;

        debug!(
            scheme = self.scheme.name(),
            n_paths,
            n_steps = n,
            seed = root_seed,
            workers = self.worker_count(),
            "generating paths"
        );

        let mut spot = vec![0.0; len];
        let mut variance = self.scheme.tracks_variance().then(|| vec![0.0; len]);

        let scheme = &self.scheme;
        let mut fill = || match variance.as_mut() {
            Some(var) => spot
                .par_chunks_mut(width)
                .zip(var.par_chunks_mut(width))
                .enumerate()
                .for_each(|(i, (s_row, v_row))| {
                    fill_row(scheme, root_seed, i, initial, dt, s_row, Some(v_row));
                }),
            None => spot
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(i, s_row)| {
                    fill_row(scheme, root_seed, i, initial, dt, s_row, None);
                }),
        };
        match &self.pool {
            Some(pool) => pool.install(fill),
            None => fill(),
        }

        Ok(SimulationResult::from_parts(
            spot, variance, n_paths, width, root_seed,
        )?)
    }
}

/// Checks the time grid and returns the row width `n + 1`.
fn validate_grid(s0: f64, n: usize, t: f64, n_paths: usize) -> Result<usize, SimulationError> {
    if !t.is_finite() || t <= 0.0 {
        return Err(SimulationError::InvalidHorizon(t));
    }
    if n == 0 {
        return Err(SimulationError::ZeroSteps);
    }
    if !s0.is_finite() {
        return Err(SimulationError::InvalidSpot(s0));
    }
    n.checked_add(1)
        .filter(|width| width.checked_mul(n_paths).is_some())
        .ok_or(SimulationError::GridTooLarge { n_paths, n_steps: n })
}

/// Writes path `index` into its spot row (and variance row, if tracked).
fn fill_row<S: DiscretisationScheme>(
    scheme: &S,
    root_seed: u64,
    index: usize,
    initial: State,
    dt: f64,
    spots: &mut [f64],
    mut variances: Option<&mut [f64]>,
) {
    let mut rng = PricerRng::for_path(root_seed, index as u64);
    let mut state = initial;
    for (k, spot) in spots.iter_mut().enumerate() {
        if k > 0 {
            state = scheme.step(&state, (k - 1) as f64 * dt, dt, &mut rng);
        }
        *spot = state.spot();
        if let Some(row) = variances.as_deref_mut() {
            row[k] = state.variance_or_zero();
        }
    }
}
