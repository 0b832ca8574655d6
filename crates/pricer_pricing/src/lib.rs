//! # Pricer Pricing (Layer 3: Engine)
//!
//! Monte Carlo path generation and pricing on top of the models and
//! instruments of `pricer_models`.
//!
//! ## Modules
//!
//! - [`context`]: [`MarketState`](context::MarketState), the market inputs of
//!   a pricing run
//! - [`mc`]: [`MonteCarloEngine`](mc::MonteCarloEngine) and
//!   [`Pricer`](mc::Pricer)
//!
//! ## Reproducibility
//!
//! For a fixed seed, scheme and arguments, `generate` returns bit-identical
//! matrices whatever the worker count. Each path draws from its own stream
//! keyed by `(seed, path index)`.
//!
//! ## Logging
//!
//! The engine and pricer emit `tracing` events at `debug` level. Install a
//! subscriber in the application to see them.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::instruments::Instrument;
//! use pricer_models::models::Heston;
//! use pricer_models::schemes::QuadraticExponential;
//! use pricer_pricing::context::MarketState;
//! use pricer_pricing::mc::{MonteCarloEngine, Pricer};
//!
//! let heston = Heston::new(0.02, 1.5, 0.04, 0.3, -0.7).unwrap();
//! let mut engine = MonteCarloEngine::new(QuadraticExponential::new(heston).unwrap());
//! engine.configure(Some(1), Some(2)).unwrap();
//!
//! let pricer = Pricer::new(MarketState::new(100.0, 0.02, Some(0.04)), 50, 1_000, engine);
//! let result = pricer
//!     .price_with_greeks(&Instrument::call(100.0, 1.0).unwrap(), 1.0)
//!     .unwrap();
//! assert!(result.price > 0.0);
//! assert!(result.delta.is_some());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod context;
pub mod mc;
