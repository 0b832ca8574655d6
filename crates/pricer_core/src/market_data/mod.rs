//! Market data structures for Monte Carlo pricing.
//!
//! # Components
//!
//! - [`surfaces`]: Local volatility surface (`LocalVolatilitySurface`)
//! - [`error`]: Market data error types (`MarketDataError`)
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::surfaces::LocalVolatilitySurface;
//!
//! let surface = LocalVolatilitySurface::new(
//!     vec![0.5, 1.0],
//!     vec![80.0, 120.0],
//!     vec![vec![0.30, 0.20], vec![0.28, 0.18]],
//! )
//! .unwrap();
//! assert!((surface.sigma(0.75, 100.0) - 0.24).abs() < 1e-12);
//! ```

pub mod error;
pub mod surfaces;

pub use error::MarketDataError;
pub use surfaces::LocalVolatilitySurface;
