//! Volatility surfaces consumed by the models.
//!
//! - [`LocalVolatilitySurface`]: bilinear `sigma(t, S)` grid with flat edge
//!   clamping, the diffusion input of the Dupire model

mod local_vol;

pub use local_vol::LocalVolatilitySurface;
