//! Single point of a simulated path.

/// Simulated state at one time index.
///
/// Holds the spot (or rate level) and, for models with a second factor, the
/// instantaneous variance. States are plain values: a scheme produces a new
/// state from the previous one rather than mutating it.
///
/// # Examples
///
/// ```
/// use pricer_core::types::State;
///
/// let s = State::new(100.0);
/// assert_eq!(s.spot(), 100.0);
/// assert_eq!(s.variance(), None);
///
/// let h = State::with_variance(100.0, 0.04);
/// assert_eq!(h.variance(), Some(0.04));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    spot: f64,
    variance: Option<f64>,
}

impl State {
    /// Creates a single-factor state.
    #[inline]
    pub fn new(spot: f64) -> Self {
        Self {
            spot,
            variance: None,
        }
    }

    /// Creates a two-factor state.
    #[inline]
    pub fn with_variance(spot: f64, variance: f64) -> Self {
        Self {
            spot,
            variance: Some(variance),
        }
    }

    /// Returns the spot value.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the variance, if the state carries one.
    #[inline]
    pub fn variance(&self) -> Option<f64> {
        self.variance
    }

    /// Returns the variance, or zero for single-factor states.
    #[inline]
    pub fn variance_or_zero(&self) -> f64 {
        self.variance.unwrap_or(0.0)
    }
}
