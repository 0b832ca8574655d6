//! Core simulation and error types.
//!
//! This module provides:
//! - `state`: A single `(spot, variance)` observation
//! - `path`: An ordered, fixed-length sequence of states
//! - `simulation`: Dense spot/variance matrices produced by the engine
//! - `error`: Structured error types shared across the workspace
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`State`], [`Path`], [`SimulationResult`]
//! - [`PricingError`], [`InterpolationError`]

pub mod error;
pub mod path;
pub mod simulation;
pub mod state;

// Re-export commonly used types at module level
pub use error::{InterpolationError, PricingError};
pub use path::Path;
pub use simulation::SimulationResult;
pub use state::State;
