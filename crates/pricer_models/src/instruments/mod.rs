//! Option contracts, payoffs and instruments.
//!
//! This module provides:
//! - [`OptionContract`]: strike and maturity
//! - [`Payoff`]: call, put, digital call/put, and [`BarrierPayoff`] wrappers
//! - [`Instrument`]: contract plus payoff, evaluated against a
//!   [`SimulationResult`](pricer_core::types::SimulationResult)
//! - [`InstrumentError`]: construction failures
//!
//! Payoffs are undiscounted; discounting is the pricer's job.
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{Instrument, OptionContract, Payoff};
//!
//! let contract = OptionContract::new(100.0, 1.0).unwrap();
//! let knock_out = Instrument::barrier(contract, 130.0, "up", "out", Payoff::Call).unwrap();
//! assert!(knock_out.payoff().is_path_dependent());
//! ```

mod barrier;
mod contract;
mod error;
mod instrument;
mod payoff;

pub use barrier::{BarrierDirection, BarrierNature, BarrierPayoff};
pub use contract::OptionContract;
pub use error::InstrumentError;
pub use instrument::Instrument;
pub use payoff::Payoff;
