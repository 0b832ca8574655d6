//! # Pricer Models (L2: Business Logic)
//!
//! Stochastic models, their discretisation schemes, and the payoff layer.
//!
//! This crate provides:
//! - Stochastic models: Black-Scholes, Heston, Dupire local volatility, Vasicek
//! - Discretisation schemes: generic Euler, log-Euler, full-truncation Euler
//!   for Heston, and Andersen's Quadratic-Exponential scheme
//! - Instruments: option contracts, vanilla/digital payoffs, barrier wrappers
//!
//! ## Design Principles
//!
//! - **Validated at construction**: models and schemes never exist in an
//!   invalid state; every constructor returns `Result`
//! - **Static dispatch**: schemes are generic over their model and engines are
//!   generic over their scheme
//! - **Fixed binding**: a scheme owns its model for its whole lifetime
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::Heston;
//! use pricer_models::schemes::{DiscretisationScheme, QuadraticExponential};
//! use pricer_core::rng::PricerRng;
//!
//! let heston = Heston::new(0.02, 1.5, 0.04, 0.3, -0.7).unwrap();
//! let qe = QuadraticExponential::new(heston).unwrap();
//!
//! let mut rng = PricerRng::from_seed(1);
//! let s0 = qe.initial_state(100.0, Some(0.04)).unwrap();
//! let s1 = qe.step(&s0, 0.0, 1.0 / 252.0, &mut rng);
//! assert!(s1.spot() > 0.0);
//! assert!(s1.variance().unwrap() >= 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod instruments;
pub mod models;
pub mod schemes;
