//! # pricer_core: Foundation for Monte Carlo Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the 3-crate architecture, providing:
//! - Error taxonomy shared by every layer (`types::error`)
//! - Seedable, path-keyed random streams (`rng`)
//! - Immutable simulation containers: `State`, `Path`, `SimulationResult` (`types`)
//! - Bilinear grid interpolation (`math::interpolators`)
//! - Local volatility surfaces (`market_data::surfaces`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - rand / rand_distr: Pseudo-random streams and the standard normal sampler
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::surfaces::LocalVolatilitySurface;
//! use pricer_core::rng::PricerRng;
//!
//! let surface = LocalVolatilitySurface::new(
//!     vec![0.5, 1.0],
//!     vec![90.0, 110.0],
//!     vec![vec![0.25, 0.20], vec![0.24, 0.19]],
//! )
//! .unwrap();
//! assert!((surface.sigma(0.5, 100.0) - 0.225).abs() < 1e-12);
//!
//! let mut rng = PricerRng::for_path(42, 7);
//! let z = rng.gen_normal();
//! assert!(z.is_finite());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `State`, `Path` and `SimulationResult`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod rng;
pub mod types;
