//! Dense simulation output.
//!
//! [`SimulationResult`] stores every path of one engine run in row-major
//! matrices: row `i` is path `i`, column `j` is time index `j`. The variance
//! matrix exists only when the simulated model has a second factor.

use super::error::PricingError;
use super::path::Path;
use super::state::State;

/// Spot and optional variance matrices produced by one `generate` call.
///
/// # Examples
///
/// ```
/// use pricer_core::types::SimulationResult;
///
/// let result = SimulationResult::from_parts(vec![100.0, 101.0, 100.0, 99.0], None, 2, 2, 7)
///     .unwrap();
/// assert_eq!(result.n_paths(), 2);
/// assert_eq!(result.n_steps(), 2);
/// assert_eq!(result.spot(1, 1), 99.0);
/// assert!(result.variance_values().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    spot: Vec<f64>,
    variance: Option<Vec<f64>>,
    n_paths: usize,
    n_steps: usize,
    seed: u64,
}

impl SimulationResult {
    /// Assembles a result from row-major buffers.
    ///
    /// `n_steps` is the number of stored time points per path (`n + 1` for
    /// `n` simulation steps).
    ///
    /// # Errors
    ///
    /// - [`PricingError::Precondition`] if `n_paths * n_steps` overflows
    /// - [`PricingError::Configuration`] if a buffer length is not
    ///   `n_paths * n_steps`
    pub fn from_parts(
        spot: Vec<f64>,
        variance: Option<Vec<f64>>,
        n_paths: usize,
        n_steps: usize,
        seed: u64,
    ) -> Result<Self, PricingError> {
        let expected = n_paths.checked_mul(n_steps).ok_or_else(|| {
            PricingError::Precondition(format!(
                "grid of {n_paths} paths x {n_steps} points is too large"
            ))
        })?;
        if spot.len() != expected {
            return Err(PricingError::Configuration(format!(
                "spot buffer holds {} values, expected {} x {}",
                spot.len(),
                n_paths,
                n_steps
            )));
        }
        if let Some(v) = &variance {
            if v.len() != expected {
                return Err(PricingError::Configuration(format!(
                    "variance buffer holds {} values, expected {} x {}",
                    v.len(),
                    n_paths,
                    n_steps
                )));
            }
        }
        Ok(Self {
            spot,
            variance,
            n_paths,
            n_steps,
            seed,
        })
    }

    /// Number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of stored time points per path (`n + 1`).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Root seed the paths were derived from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Spot of path `path` at time index `step`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn spot(&self, path: usize, step: usize) -> f64 {
        assert!(step < self.n_steps, "step index out of range");
        self.spot[path * self.n_steps + step]
    }

    /// Spot row of path `path`.
    ///
    /// # Panics
    ///
    /// Panics if `path >= n_paths`.
    #[inline]
    pub fn spot_path(&self, path: usize) -> &[f64] {
        let start = path * self.n_steps;
        &self.spot[start..start + self.n_steps]
    }

    /// Iterates over spot rows in path order.
    pub fn spot_paths(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.spot.chunks_exact(self.n_steps.max(1)).take(self.n_paths)
    }

    /// Spot matrix as nested rows.
    pub fn spot_values(&self) -> Vec<Vec<f64>> {
        self.spot_paths().map(<[f64]>::to_vec).collect()
    }

    /// Row-major spot buffer.
    #[inline]
    pub fn spot_buffer(&self) -> &[f64] {
        &self.spot
    }

    /// Returns `true` when the simulated model carries a variance factor.
    #[inline]
    pub fn has_variance(&self) -> bool {
        self.variance.is_some()
    }

    /// Variance row of path `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::UnsupportedQuery`] for single-factor results.
    pub fn variance_path(&self, path: usize) -> Result<&[f64], PricingError> {
        let v = self.variance_buffer()?;
        let start = path * self.n_steps;
        Ok(&v[start..start + self.n_steps])
    }

    /// Variance matrix as nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::UnsupportedQuery`] for single-factor results.
    pub fn variance_values(&self) -> Result<Vec<Vec<f64>>, PricingError> {
        let v = self.variance_buffer()?;
        Ok(v
            .chunks_exact(self.n_steps.max(1))
            .take(self.n_paths)
            .map(<[f64]>::to_vec)
            .collect())
    }

    /// Row-major variance buffer.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::UnsupportedQuery`] for single-factor results.
    pub fn variance_buffer(&self) -> Result<&[f64], PricingError> {
        self.variance.as_deref().ok_or_else(|| {
            PricingError::UnsupportedQuery(
                "simulated model has no variance factor".to_string(),
            )
        })
    }

    /// Path `index` as a sequence of states.
    ///
    /// # Panics
    ///
    /// Panics if `index >= n_paths`.
    pub fn path(&self, index: usize) -> Path {
        let spots = self.spot_path(index);
        let states = match self.variance_path(index) {
            Ok(vars) => spots
                .iter()
                .zip(vars)
                .map(|(&s, &v)| State::with_variance(s, v))
                .collect(),
            Err(_) => spots.iter().map(|&s| State::new(s)).collect(),
        };
        Path::from_states(states)
    }

    /// Terminal spot of every path.
    pub fn terminal_spots(&self) -> Vec<f64> {
        self.spot_paths()
            .map(|row| row[row.len() - 1])
            .collect()
    }

    /// Arithmetic mean of the terminal spots.
    pub fn average_terminal_spot(&self) -> f64 {
        if self.n_paths == 0 {
            return 0.0;
        }
        self.terminal_spots().iter().sum::<f64>() / self.n_paths as f64
    }
}
