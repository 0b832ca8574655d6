//! Bilinear 2D interpolation with flat edge clamping.

use crate::types::InterpolationError;
use num_traits::Float;

/// Bilinear interpolator over a rectangular grid.
///
/// Stores `zs[i][j] = z(xs[i], ys[j])`. Queries outside the grid are clamped
/// to the nearest edge on each axis independently, so the interpolant is
/// defined on the whole plane and never extrapolates.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g. `f64`, `f32`)
///
/// # Example
///
/// ```
/// use pricer_core::math::interpolators::BilinearInterpolator;
///
/// let xs: [f64; 3] = [0.0, 1.0, 2.0];
/// let ys: [f64; 2] = [0.0, 1.0];
/// let zs = [
///     &[0.0, 1.0][..],
///     &[2.0, 3.0][..],
///     &[4.0, 5.0][..],
/// ];
///
/// let interp = BilinearInterpolator::new(&xs, &ys, &zs).unwrap();
/// assert!((interp.interpolate(0.5, 0.5) - 1.5).abs() < 1e-12);
/// // Clamped on both axes
/// assert_eq!(interp.interpolate(9.0, -3.0), 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct BilinearInterpolator<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
    zs: Vec<Vec<T>>,
}

impl<T: Float> BilinearInterpolator<T> {
    /// Constructs an interpolator from grid data.
    ///
    /// # Errors
    ///
    /// * `InsufficientData` - fewer than 2 nodes on an axis
    /// * `NonMonotonicData` - an axis is not strictly increasing
    /// * `InvalidInput` - grid shape does not match the axes, or an input is
    ///   not finite
    pub fn new(xs: &[T], ys: &[T], zs: &[&[T]]) -> Result<Self, InterpolationError> {
        // Shape first: a mismatched grid is the most common caller error.
        if zs.len() != xs.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "Grid rows ({}) must match x-axis length ({})",
                zs.len(),
                xs.len()
            )));
        }
        for (i, row) in zs.iter().enumerate() {
            if row.len() != ys.len() {
                return Err(InterpolationError::InvalidInput(format!(
                    "Grid row {} length ({}) must match y-axis length ({})",
                    i,
                    row.len(),
                    ys.len()
                )));
            }
        }

        validate_axis(xs)?;
        validate_axis(ys)?;

        if zs.iter().any(|row| row.iter().any(|z| !z.is_finite())) {
            return Err(InterpolationError::InvalidInput(
                "Grid values must be finite".to_string(),
            ));
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            zs: zs.iter().map(|row| row.to_vec()).collect(),
        })
    }

    /// Interpolates at `(x, y)`, clamping each coordinate to the grid.
    ///
    /// # Formula
    ///
    /// ```text
    /// z = (1-u)(1-v)*z00 + u*(1-v)*z10 + (1-u)*v*z01 + u*v*z11
    /// ```
    ///
    /// where `u` and `v` are the normalised coordinates within the cell.
    pub fn interpolate(&self, x: T, y: T) -> T {
        let x = clamp(x, self.domain_x());
        let y = clamp(y, self.domain_y());

        let i = cell_index(&self.xs, x);
        let j = cell_index(&self.ys, y);

        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[j], self.ys[j + 1]);

        let z00 = self.zs[i][j];
        let z10 = self.zs[i + 1][j];
        let z01 = self.zs[i][j + 1];
        let z11 = self.zs[i + 1][j + 1];

        let u = (x - x0) / (x1 - x0);
        let v = (y - y0) / (y1 - y0);

        let one = T::one();
        (one - u) * (one - v) * z00 + u * (one - v) * z10 + (one - u) * v * z01 + u * v * z11
    }

    /// Range of the x axis.
    #[inline]
    pub fn domain_x(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Range of the y axis.
    #[inline]
    pub fn domain_y(&self) -> (T, T) {
        (self.ys[0], self.ys[self.ys.len() - 1])
    }

    /// X-axis nodes.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Y-axis nodes.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Grid values.
    #[inline]
    pub fn zs(&self) -> &[Vec<T>] {
        &self.zs
    }
}

fn validate_axis<T: Float>(axis: &[T]) -> Result<(), InterpolationError> {
    if axis.len() < 2 {
        return Err(InterpolationError::InsufficientData {
            got: axis.len(),
            need: 2,
        });
    }
    if axis.iter().any(|a| !a.is_finite()) {
        return Err(InterpolationError::InvalidInput(
            "Axis nodes must be finite".to_string(),
        ));
    }
    if let Some(pos) = axis.windows(2).position(|w| w[1] <= w[0]) {
        return Err(InterpolationError::NonMonotonicData { index: pos + 1 });
    }
    Ok(())
}

#[inline]
fn clamp<T: Float>(value: T, (lo, hi): (T, T)) -> T {
    // NaN passes through and poisons the result rather than picking an edge.
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Left node of the cell containing `x`; an exact node hit maps to the cell
/// starting there, except the last node which maps to the last cell.
#[inline]
fn cell_index<T: Float>(axis: &[T], x: T) -> usize {
    let pos = axis.partition_point(|&a| a <= x);
    pos.saturating_sub(1).min(axis.len() - 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn sample() -> BilinearInterpolator<f64> {
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 1.0, 2.0];
        // z = x + 2y
        let zs = [
            &[0.0, 2.0, 4.0][..],
            &[1.0, 3.0, 5.0][..],
            &[2.0, 4.0, 6.0][..],
        ];
        BilinearInterpolator::new(&xs, &ys, &zs).unwrap()
    }

    // ========================================
    // Construction
    // ========================================

    #[test]
    fn test_new_insufficient_axis() {
        let zs = [&[0.0, 1.0][..]];
        match BilinearInterpolator::new(&[0.0], &[0.0, 1.0], &zs).unwrap_err() {
            InterpolationError::InsufficientData { got, need } => {
                assert_eq!(got, 1);
                assert_eq!(need, 2);
            }
            other => panic!("Expected InsufficientData, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rows_mismatch() {
        let zs = [&[0.0, 1.0][..], &[2.0, 3.0][..]];
        let err = BilinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0], &zs).unwrap_err();
        assert!(matches!(err, InterpolationError::InvalidInput(ref m) if m.contains("rows")));
    }

    #[test]
    fn test_new_cols_mismatch() {
        let zs = [&[0.0, 1.0][..], &[2.0, 3.0][..]];
        let err = BilinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0, 2.0], &zs).unwrap_err();
        assert!(matches!(err, InterpolationError::InvalidInput(ref m) if m.contains("row")));
    }

    #[test]
    fn test_new_non_monotonic() {
        let zs = [&[0.0, 1.0][..], &[2.0, 3.0][..], &[4.0, 5.0][..]];
        let err = BilinearInterpolator::new(&[0.0, 2.0, 1.0], &[0.0, 1.0], &zs).unwrap_err();
        assert_eq!(err, InterpolationError::NonMonotonicData { index: 2 });

        let zs = [&[0.0, 1.0][..], &[2.0, 3.0][..]];
        let err = BilinearInterpolator::new(&[0.0, 1.0], &[1.0, 1.0], &zs).unwrap_err();
        assert_eq!(err, InterpolationError::NonMonotonicData { index: 1 });
    }

    #[test]
    fn test_new_non_finite_value() {
        let zs = [&[0.0, f64::NAN][..], &[2.0, 3.0][..]];
        let err = BilinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0], &zs).unwrap_err();
        assert!(matches!(err, InterpolationError::InvalidInput(_)));
    }

    // ========================================
    // Interpolation
    // ========================================

    #[test]
    fn test_exact_on_nodes() {
        let interp = sample();
        for (i, &x) in interp.xs().to_vec().iter().enumerate() {
            for (j, &y) in interp.ys().to_vec().iter().enumerate() {
                assert_eq!(interp.interpolate(x, y), interp.zs()[i][j]);
            }
        }
    }

    #[test]
    fn test_plane_reproduced_inside() {
        let interp = sample();
        for (x, y) in [(0.5, 0.5), (1.5, 0.25), (0.1, 1.9), (1.75, 1.5)] {
            assert_relative_eq!(interp.interpolate(x, y), x + 2.0 * y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_clamped_outside() {
        let interp = sample();
        assert_eq!(interp.interpolate(-1.0, -1.0), 0.0);
        assert_eq!(interp.interpolate(5.0, 5.0), 6.0);
        assert_relative_eq!(interp.interpolate(0.5, 10.0), 4.5, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(10.0, 0.5), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_with_f32() {
        let zs: [&[f32]; 2] = [&[0.0, 1.0], &[2.0, 3.0]];
        let interp = BilinearInterpolator::new(&[0.0_f32, 1.0], &[0.0_f32, 1.0], &zs).unwrap();
        assert!((interp.interpolate(0.5_f32, 0.5_f32) - 1.5).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_result_within_grid_bounds(x in -10.0f64..10.0, y in -10.0f64..10.0) {
            let z = sample().interpolate(x, y);
            prop_assert!((0.0..=6.0).contains(&z));
        }
    }
}
