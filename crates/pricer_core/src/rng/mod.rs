//! # Random Number Generation
//!
//! Seedable uniform and normal streams for Monte Carlo path generation.
//!
//! ## Reproducibility
//!
//! The engine never shares one generator between workers. Path `i` of a run
//! rooted at seed `s` draws from `PricerRng::for_path(s, i)`, whose state is
//! derived from `(s, i)` alone by [`derive_path_seed`]. A run is therefore
//! bit-identical whatever the worker count or completion order.
//!
//! ## Module Structure
//!
//! - [`PricerRng`]: seeded stream wrapper over `rand::rngs::StdRng`
//! - [`derive_path_seed`]: SplitMix64 mix of root seed and path index
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let mut buffer = vec![0.0; 16];
//! rng.fill_normal(&mut buffer);
//! assert!(buffer.iter().all(|z| z.is_finite()));
//! ```

mod prng;
mod seed;

pub use prng::PricerRng;
pub use seed::derive_path_seed;
