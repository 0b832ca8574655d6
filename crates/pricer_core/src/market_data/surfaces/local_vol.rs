//! Local volatility surface on a `(time, spot)` grid.

use crate::market_data::error::MarketDataError;
use crate::math::interpolators::BilinearInterpolator;

/// Immutable local volatility grid `sigma(t, S)`.
///
/// Rows are time slices and columns spot nodes: `vols[i][j]` is the local
/// volatility at `(times[i], spots[j])`. Lookups interpolate bilinearly inside
/// the grid and clamp to the nearest edge outside it, on each axis
/// independently.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::LocalVolatilitySurface;
///
/// let surface = LocalVolatilitySurface::new(
///     vec![0.25, 1.0],
///     vec![90.0, 100.0, 110.0],
///     vec![vec![0.24, 0.20, 0.22], vec![0.22, 0.18, 0.20]],
/// )
/// .unwrap();
///
/// assert_eq!(surface.sigma(0.25, 100.0), 0.20);
/// // Beyond the last slice and above the top spot node
/// assert_eq!(surface.sigma(5.0, 500.0), 0.20);
/// ```
#[derive(Debug, Clone)]
pub struct LocalVolatilitySurface {
    grid: BilinearInterpolator<f64>,
}

impl LocalVolatilitySurface {
    /// Builds a surface from its axes and volatility grid.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` / `RowLengthMismatch` if `vols` is not
    ///   `times.len() x spots.len()`
    /// - `InsufficientData` if an axis has fewer than two nodes
    /// - `NonMonotonicAxis` if an axis is not strictly increasing
    /// - `InvalidVolatility` for a negative or non-finite entry
    pub fn new(
        times: Vec<f64>,
        spots: Vec<f64>,
        vols: Vec<Vec<f64>>,
    ) -> Result<Self, MarketDataError> {
        if vols.len() != times.len() {
            return Err(MarketDataError::ShapeMismatch {
                rows: vols.len(),
                times: times.len(),
            });
        }
        if let Some((row, r)) = vols.iter().enumerate().find(|(_, r)| r.len() != spots.len()) {
            return Err(MarketDataError::RowLengthMismatch {
                row,
                len: r.len(),
                spots: spots.len(),
            });
        }
        check_axis("time", &times)?;
        check_axis("spot", &spots)?;
        for (row, r) in vols.iter().enumerate() {
            for (col, &value) in r.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(MarketDataError::InvalidVolatility { row, col, value });
                }
            }
        }

        let rows: Vec<&[f64]> = vols.iter().map(Vec::as_slice).collect();
        let grid = BilinearInterpolator::new(&times, &spots, &rows)?;
        Ok(Self { grid })
    }

    /// Local volatility at time `t` and spot `s`.
    #[inline]
    pub fn sigma(&self, t: f64, s: f64) -> f64 {
        self.grid.interpolate(t, s)
    }

    /// Time nodes.
    #[inline]
    pub fn times(&self) -> &[f64] {
        self.grid.xs()
    }

    /// Spot nodes.
    #[inline]
    pub fn spots(&self) -> &[f64] {
        self.grid.ys()
    }

    /// Grid volatility at time index `i`, spot index `j`.
    #[inline]
    pub fn vol(&self, i: usize, j: usize) -> Option<f64> {
        self.grid.zs().get(i).and_then(|row| row.get(j)).copied()
    }
}

fn check_axis(axis: &'static str, nodes: &[f64]) -> Result<(), MarketDataError> {
    if nodes.len() < 2 {
        return Err(MarketDataError::InsufficientData {
            axis,
            got: nodes.len(),
            need: 2,
        });
    }
    // `!(b > a)` also catches NaN nodes.
    if let Some(pos) = nodes.windows(2).position(|w| !(w[1] > w[0])) {
        return Err(MarketDataError::NonMonotonicAxis {
            axis,
            index: pos + 1,
        });
    }
    Ok(())
}
