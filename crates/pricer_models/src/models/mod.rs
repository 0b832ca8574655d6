//! Stochastic process models.
//!
//! This module provides:
//! - [`StochasticModel`] / [`SingleFactorModel`]: the model interfaces
//! - [`BlackScholes`]: geometric Brownian motion
//! - [`Heston`]: stochastic variance with correlated spot
//! - [`Dupire`]: local volatility over a [`LocalVolatilitySurface`](pricer_core::market_data::surfaces::LocalVolatilitySurface)
//! - [`Vasicek`]: Gaussian mean-reverting short rate
//! - [`ModelError`]: parameter validation failures
//!
//! Every model validates its parameters in `new` and is immutable afterwards.
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::{Heston, ModelError};
//!
//! assert!(Heston::new(0.02, 1.5, 0.04, 0.3, -0.7).is_ok());
//! assert_eq!(
//!     Heston::new(0.02, 1.5, 0.04, 0.3, -1.5),
//!     Err(ModelError::InvalidCorrelation(-1.5))
//! );
//! ```

pub mod black_scholes;
pub mod dupire;
pub mod error;
pub mod heston;
pub mod stochastic;
pub mod vasicek;

pub use black_scholes::BlackScholes;
pub use dupire::Dupire;
pub use error::ModelError;
pub use heston::Heston;
pub use stochastic::{SingleFactorModel, StochasticModel};
pub use vasicek::Vasicek;
