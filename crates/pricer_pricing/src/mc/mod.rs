//! Monte Carlo path generation and pricing.
//!
//! # Architecture
//!
//! ```text
//! Pricer
//! ├── MarketState         (spot, rate, v0)
//! ├── n_steps / n_paths
//! └── MonteCarloEngine
//!     ├── EngineConfig    (seed, parallelism)
//!     ├── ThreadPool      (dedicated rayon pool, optional)
//!     └── DiscretisationScheme
//!         └── StochasticModel
//! ```
//!
//! # Example
//!
//! ```rust
//! use pricer_models::instruments::{Instrument, OptionContract, Payoff};
//! use pricer_models::models::BlackScholes;
//! use pricer_models::schemes::Euler;
//! use pricer_pricing::context::MarketState;
//! use pricer_pricing::mc::{MonteCarloEngine, Pricer};
//!
//! let mut engine = MonteCarloEngine::new(Euler::new(BlackScholes::new(0.03, 0.25).unwrap()));
//! engine.configure(Some(7), Some(-1)).unwrap();
//!
//! let pricer = Pricer::new(MarketState::new(100.0, 0.03, None), 64, 1_000, engine);
//! let contract = OptionContract::new(100.0, 1.0).unwrap();
//! let vanilla = Instrument::new(contract, Payoff::Call);
//! let up_in = Instrument::barrier(contract, 120.0, "up", "in", Payoff::Call).unwrap();
//! let up_out = Instrument::barrier(contract, 120.0, "up", "out", Payoff::Call).unwrap();
//!
//! let prices = pricer.batch_price(&[vanilla, up_in, up_out]).unwrap();
//! assert!((prices[0] - (prices[1] + prices[2])).abs() < 1e-9);
//! ```

mod config;
mod engine;
mod error;
mod pricer;

pub use config::{EngineConfig, EngineConfigBuilder, Parallelism};
pub use engine::MonteCarloEngine;
pub use error::{ConfigError, SimulationError};
pub use pricer::{Pricer, PricingResult};
