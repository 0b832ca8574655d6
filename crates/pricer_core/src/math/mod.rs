//! Numerical building blocks.
//!
//! - [`interpolators`]: grid interpolation used by market data surfaces

pub mod interpolators;
