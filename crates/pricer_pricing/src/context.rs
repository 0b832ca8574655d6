//! Market inputs of a pricing run.

/// Spot, risk-free rate and optional initial variance.
///
/// Replaced wholesale through [`Pricer::reconfigure`](crate::mc::Pricer::reconfigure);
/// bumped copies for Greeks come from [`with_spot`](Self::with_spot).
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::context::MarketState;
///
/// let market = MarketState::new(100.0, 0.05, Some(0.04));
/// let bumped = market.with_spot(101.0);
/// assert_eq!(bumped.spot(), 101.0);
/// assert_eq!(bumped.rate(), 0.05);
/// assert_eq!(bumped.v0(), Some(0.04));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketState {
    spot: f64,
    rate: f64,
    v0: Option<f64>,
}

impl MarketState {
    /// Creates a market state.
    ///
    /// Values are validated where they are used: the engine checks the spot,
    /// the scheme checks `v0`.
    #[inline]
    pub fn new(spot: f64, rate: f64, v0: Option<f64>) -> Self {
        Self { spot, rate, v0 }
    }

    /// Spot `S`.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Continuously compounded risk-free rate `r`.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Initial variance, for two-factor models.
    #[inline]
    pub fn v0(&self) -> Option<f64> {
        self.v0
    }

    /// Copy with the spot replaced.
    #[inline]
    pub fn with_spot(&self, spot: f64) -> Self {
        Self { spot, ..*self }
    }

    /// Discount factor `exp(-r T)`.
    #[inline]
    pub fn discount_factor(&self, maturity: f64) -> f64 {
        (-self.rate * maturity).exp()
    }
}
