//! Seeded pseudo-random stream used by every scheme.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

use super::seed::derive_path_seed;

/// Monte Carlo random source.
///
/// Wraps [`StdRng`] and remembers the seed it was initialised with, so a run
/// can be logged and replayed.
///
/// # Examples
///
/// ```rust
/// use pricer_core::rng::PricerRng;
///
/// let mut a = PricerRng::from_seed(12345);
/// let mut b = PricerRng::from_seed(12345);
/// assert_eq!(a.gen_normal(), b.gen_normal());
///
/// let u = a.gen_uniform();
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Clone, Debug)]
pub struct PricerRng {
    inner: StdRng,
    seed: u64,
}

impl PricerRng {
    /// Creates a stream initialised with `seed`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates the private stream of path `index` under `root_seed`.
    ///
    /// The stream is a pure function of `(root_seed, index)`.
    ///
    /// ```rust
    /// use pricer_core::rng::PricerRng;
    ///
    /// let mut a = PricerRng::for_path(7, 3);
    /// let mut b = PricerRng::for_path(7, 3);
    /// assert_eq!(a.gen_uniform(), b.gen_uniform());
    /// ```
    #[inline]
    pub fn for_path(root_seed: u64, index: u64) -> Self {
        Self::from_seed(derive_path_seed(root_seed, index))
    }

    /// Seed this stream was initialised with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform variate in `[0, 1)`.
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Standard normal variate (Ziggurat, via `rand_distr::StandardNormal`).
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills `buffer` with uniform variates in `[0, 1)`.
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.inner.gen();
        }
    }

    /// Fills `buffer` with standard normal variates.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}
