//! Barrier payoffs with discrete monitoring.
//!
//! - **Up**: breached when some monitored spot is `>= H`
//! - **Down**: breached when some monitored spot is `<= H`
//! - **In**: pays the inner payoff only if breached
//! - **Out**: pays the inner payoff only if never breached
//!
//! Every stored grid point is monitored, the initial spot included. No
//! continuity correction is applied, so prices carry the usual discrete
//! monitoring bias relative to a continuously monitored barrier.

use std::fmt;
use std::str::FromStr;

use super::error::InstrumentError;
use super::payoff::Payoff;

/// Side from which the barrier is approached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarrierDirection {
    /// Breached from below (spot >= H)
    Up,
    /// Breached from above (spot <= H)
    Down,
}

/// Whether a breach activates or extinguishes the option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarrierNature {
    /// Knock-in
    In,
    /// Knock-out
    Out,
}

impl FromStr for BarrierDirection {
    type Err = InstrumentError;

    /// Parses `"up"` or `"down"`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("up") {
            Ok(BarrierDirection::Up)
        } else if s.eq_ignore_ascii_case("down") {
            Ok(BarrierDirection::Down)
        } else {
            Err(InstrumentError::InvalidBarrierDirection(s.to_string()))
        }
    }
}

impl FromStr for BarrierNature {
    type Err = InstrumentError;

    /// Parses `"in"` or `"out"`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("in") {
            Ok(BarrierNature::In)
        } else if s.eq_ignore_ascii_case("out") {
            Ok(BarrierNature::Out)
        } else {
            Err(InstrumentError::InvalidBarrierNature(s.to_string()))
        }
    }
}

impl fmt::Display for BarrierDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarrierDirection::Up => f.write_str("up"),
            BarrierDirection::Down => f.write_str("down"),
        }
    }
}

impl fmt::Display for BarrierNature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarrierNature::In => f.write_str("in"),
            BarrierNature::Out => f.write_str("out"),
        }
    }
}

/// Barrier wrapper around an inner payoff.
///
/// The breach flag is computed per evaluation and never stored.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::{BarrierPayoff, Payoff};
///
/// let up_out = BarrierPayoff::new(120.0, "Up", "OUT", Payoff::Call).unwrap();
/// assert_eq!(up_out.evaluate(&[100.0, 115.0, 110.0], 100.0), 10.0);
/// assert_eq!(up_out.evaluate(&[100.0, 120.0, 110.0], 100.0), 0.0);
///
/// assert!(BarrierPayoff::new(120.0, "sideways", "out", Payoff::Call).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BarrierPayoff {
    level: f64,
    direction: BarrierDirection,
    nature: BarrierNature,
    inner: Payoff,
}

impl BarrierPayoff {
    /// Creates a barrier from textual direction and nature.
    ///
    /// # Errors
    ///
    /// Fails on unrecognised text or a non-finite level.
    pub fn new(
        level: f64,
        direction: &str,
        nature: &str,
        inner: Payoff,
    ) -> Result<Self, InstrumentError> {
        Self::with_kind(level, direction.parse()?, nature.parse()?, inner)
    }

    /// Creates a barrier from typed direction and nature.
    pub fn with_kind(
        level: f64,
        direction: BarrierDirection,
        nature: BarrierNature,
        inner: Payoff,
    ) -> Result<Self, InstrumentError> {
        if !level.is_finite() {
            return Err(InstrumentError::InvalidBarrierLevel { level });
        }
        Ok(Self {
            level,
            direction,
            nature,
            inner,
        })
    }

    /// Barrier level `H`.
    #[inline]
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Barrier direction.
    #[inline]
    pub fn direction(&self) -> BarrierDirection {
        self.direction
    }

    /// Barrier nature.
    #[inline]
    pub fn nature(&self) -> BarrierNature {
        self.nature
    }

    /// Gated payoff.
    #[inline]
    pub fn inner(&self) -> &Payoff {
        &self.inner
    }

    /// Returns `true` if any monitored spot touches or crosses the level.
    pub fn is_breached(&self, spots: &[f64]) -> bool {
        match self.direction {
            BarrierDirection::Up => spots.iter().any(|&s| s >= self.level),
            BarrierDirection::Down => spots.iter().any(|&s| s <= self.level),
        }
    }

    /// Returns `true` if the inner payoff is live on this path.
    #[inline]
    pub fn is_active(&self, spots: &[f64]) -> bool {
        let breached = self.is_breached(spots);
        match self.nature {
            BarrierNature::In => breached,
            BarrierNature::Out => !breached,
        }
    }

    /// Inner payoff if active, zero otherwise.
    pub fn evaluate(&self, spots: &[f64], strike: f64) -> f64 {
        if self.is_active(spots) {
            self.inner.evaluate(spots, strike)
        } else {
            0.0
        }
    }
}
