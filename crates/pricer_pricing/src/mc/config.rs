//! Monte Carlo engine configuration.
//!
//! This module provides the seed and worker-count settings of a
//! [`MonteCarloEngine`](super::MonteCarloEngine) and a builder that validates
//! them.

use std::sync::Arc;

use rayon::{ThreadPool, ThreadPoolBuilder};

use super::error::ConfigError;

/// Worker-count policy for path generation.
///
/// Built from the `n_jobs` convention:
///
/// | `n_jobs` | Policy |
/// |----------|--------|
/// | absent   | [`Parallelism::Global`]: rayon's global pool |
/// | `-1`     | [`Parallelism::AllCores`]: one worker per logical CPU |
/// | `n > 0`  | [`Parallelism::Threads`]: `n` workers, capped at the logical CPU count |
///
/// Any other value is rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parallelism {
    /// Run on rayon's global pool.
    #[default]
    Global,
    /// One worker per logical CPU.
    AllCores,
    /// Requested number of workers; never more than the logical CPUs.
    Threads(usize),
}

impl Parallelism {
    /// Parses an `n_jobs` value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidJobCount`] for `0` and values below `-1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::mc::Parallelism;
    ///
    /// assert_eq!(Parallelism::from_n_jobs(-1).unwrap(), Parallelism::AllCores);
    /// assert_eq!(Parallelism::from_n_jobs(4).unwrap(), Parallelism::Threads(4));
    /// assert!(Parallelism::from_n_jobs(0).is_err());
    /// ```
    pub fn from_n_jobs(n_jobs: i64) -> Result<Self, ConfigError> {
        match n_jobs {
            -1 => Ok(Parallelism::AllCores),
            n if n > 0 => usize::try_from(n)
                .map(Parallelism::Threads)
                .map_err(|_| ConfigError::InvalidJobCount(n)),
            n => Err(ConfigError::InvalidJobCount(n)),
        }
    }

    /// Number of workers this policy runs on.
    pub fn worker_count(&self) -> usize {
        match self {
            Parallelism::Global => rayon::current_num_threads(),
            Parallelism::AllCores => num_cpus::get().max(1),
            Parallelism::Threads(n) => (*n).min(num_cpus::get().max(1)),
        }
    }

    /// Builds the dedicated pool for this policy.
    ///
    /// Returns `None` for [`Parallelism::Global`].
    pub(crate) fn build_pool(&self) -> Result<Option<Arc<ThreadPool>>, ConfigError> {
        if *self == Parallelism::Global {
            return Ok(None);
        }
        ThreadPoolBuilder::new()
            .num_threads(self.worker_count())
            .thread_name(|i| format!("pricer-mc-{i}"))
            .build()
            .map(|pool| Some(Arc::new(pool)))
            .map_err(|e| ConfigError::ThreadPool(e.to_string()))
    }
}

/// Engine configuration.
///
/// Immutable once built. Use [`EngineConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{EngineConfig, Parallelism};
///
/// let config = EngineConfig::builder()
///     .seed(42)
///     .n_jobs(-1)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.seed(), Some(42));
/// assert_eq!(config.parallelism(), Parallelism::AllCores);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Root seed; `None` means non-reproducible.
    seed: Option<u64>,
    /// Worker-count policy.
    parallelism: Parallelism,
}

impl EngineConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Returns the user-supplied root seed, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the worker-count policy.
    #[inline]
    pub fn parallelism(&self) -> Parallelism {
        self.parallelism
    }

    /// Same configuration with the seed replaced.
    #[inline]
    pub(crate) fn with_seed(self, seed: Option<u64>) -> Self {
        Self { seed, ..self }
    }

    /// Returns a builder pre-filled with this configuration.
    ///
    /// Used by `configure` so that absent arguments keep their previous value.
    pub fn to_builder(&self) -> EngineConfigBuilder {
        EngineConfigBuilder {
            seed: self.seed.map(|s| s as i128),
            n_jobs: None,
            parallelism: self.parallelism,
        }
    }
}

/// Builder for [`EngineConfig`].
///
/// Raw `seed`/`n_jobs` values are kept as given and validated at
/// [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct EngineConfigBuilder {
    seed: Option<i128>,
    n_jobs: Option<i64>,
    parallelism: Parallelism,
}

impl EngineConfigBuilder {
    /// Sets the root seed (must be non-negative).
    #[inline]
    pub fn seed(mut self, seed: i64) -> Self {
        self.seed = Some(i128::from(seed));
        self
    }

    /// Sets the full 64-bit root seed.
    #[inline]
    pub fn seed_u64(mut self, seed: u64) -> Self {
        self.seed = Some(i128::from(seed));
        self
    }

    /// Clears the root seed.
    #[inline]
    pub fn unseeded(mut self) -> Self {
        self.seed = None;
        self
    }

    /// Sets the worker count (`-1` for all CPUs, or a positive count).
    #[inline]
    pub fn n_jobs(mut self, n_jobs: i64) -> Self {
        self.n_jobs = Some(n_jobs);
        self
    }

    /// Sets the worker-count policy directly.
    #[inline]
    pub fn parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self.n_jobs = None;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - the seed is negative
    /// - `n_jobs` is `0` or below `-1`
    /// - a `Threads(0)` policy was set directly
    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        // Negative values can only come from `seed(i64)`, so they fit in i64.
        let seed = match self.seed {
            Some(s) if s < 0 => return Err(ConfigError::NegativeSeed(s as i64)),
            Some(s) => Some(s as u64),
            None => None,
        };

        let parallelism = match self.n_jobs {
            Some(n) => Parallelism::from_n_jobs(n)?,
            None => self.parallelism,
        };
        if parallelism == Parallelism::Threads(0) {
            return Err(ConfigError::InvalidJobCount(0));
        }

        Ok(EngineConfig { seed, parallelism })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::builder().build().unwrap();
        assert_eq!(config.seed(), None);
        assert_eq!(config.parallelism(), Parallelism::Global);
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_builder_with_seed_and_jobs() {
        let config = EngineConfig::builder().seed(7).n_jobs(3).build().unwrap();
        assert_eq!(config.seed(), Some(7));
        assert_eq!(config.parallelism(), Parallelism::Threads(3));
    }

    #[test]
    fn test_zero_seed_is_valid() {
        let config = EngineConfig::builder().seed(0).build().unwrap();
        assert_eq!(config.seed(), Some(0));
    }

    #[test]
    fn test_full_width_seed() {
        let config = EngineConfig::builder().seed_u64(u64::MAX).build().unwrap();
        assert_eq!(config.seed(), Some(u64::MAX));
    }

    #[test]
    fn test_negative_seed_rejected() {
        let result = EngineConfig::builder().seed(-5).build();
        assert_eq!(result, Err(ConfigError::NegativeSeed(-5)));
    }

    #[test]
    fn test_invalid_job_counts_rejected() {
        for n in [0, -2, -100] {
            assert_eq!(
                EngineConfig::builder().n_jobs(n).build(),
                Err(ConfigError::InvalidJobCount(n))
            );
        }
        assert!(EngineConfig::builder()
            .parallelism(Parallelism::Threads(0))
            .build()
            .is_err());
    }

    #[test]
    fn test_to_builder_keeps_unset_fields() {
        let base = EngineConfig::builder().seed(11).n_jobs(2).build().unwrap();

        let reseeded = base.to_builder().seed(12).build().unwrap();
        assert_eq!(reseeded.seed(), Some(12));
        assert_eq!(reseeded.parallelism(), Parallelism::Threads(2));

        let rethreaded = base.to_builder().n_jobs(-1).build().unwrap();
        assert_eq!(rethreaded.seed(), Some(11));
        assert_eq!(rethreaded.parallelism(), Parallelism::AllCores);
    }

    #[test]
    fn test_worker_count() {
        let cpus = num_cpus::get().max(1);
        assert_eq!(Parallelism::Threads(1).worker_count(), 1);
        assert_eq!(Parallelism::Threads(5).worker_count(), 5.min(cpus));
        assert!(Parallelism::AllCores.worker_count() >= 1);
        assert!(Parallelism::Global.worker_count() >= 1);
    }

    #[test]
    fn test_pool_only_for_dedicated_policies() {
        assert!(Parallelism::Global.build_pool().unwrap().is_none());
        let pool = Parallelism::Threads(2).build_pool().unwrap().unwrap();
        assert_eq!(pool.current_num_threads(), 2.min(num_cpus::get().max(1)));
    }

    #[test]
    fn test_thread_request_capped_at_cpu_count() {
        let cpus = num_cpus::get().max(1);
        let policy = Parallelism::from_n_jobs(10_000).unwrap();
        assert_eq!(policy, Parallelism::Threads(10_000));
        assert_eq!(policy.worker_count(), cpus);
        let pool = policy.build_pool().unwrap().unwrap();
        assert_eq!(pool.current_num_threads(), cpus);
    }
}
