//! Interpolation methods for numerical computation.
//!
//! ## Available Interpolators
//!
//! - [`BilinearInterpolator`]: 2D grid interpolation with flat edge clamping,
//!   backing [`LocalVolatilitySurface`](crate::market_data::surfaces::LocalVolatilitySurface)
//!
//! Interpolators are generic over `T: num_traits::Float`.
//!
//! ## Example
//!
//! ```
//! use pricer_core::math::interpolators::BilinearInterpolator;
//!
//! let zs = [&[1.0_f64, 2.0][..], &[3.0, 4.0][..]];
//! let interp = BilinearInterpolator::new(&[0.0_f64, 1.0], &[0.0, 1.0], &zs).unwrap();
//! assert!((interp.interpolate(0.5, 0.5) - 2.5).abs() < 1e-12);
//! ```

mod bilinear;

pub use bilinear::BilinearInterpolator;
