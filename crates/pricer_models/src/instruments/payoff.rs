//! Payoff definitions.
//!
//! A payoff maps one simulated spot path and a strike to a cash amount.
//! Vanilla and digital payoffs read the terminal spot only; barrier payoffs
//! monitor the whole path and gate an inner payoff.

use super::barrier::BarrierPayoff;

/// Option payoff.
///
/// # Variants
/// - `Call`: `max(S_T - K, 0)`
/// - `Put`: `max(K - S_T, 0)`
/// - `DigitalCall`: `1` if `S_T > K` else `0`
/// - `DigitalPut`: `1` if `S_T < K` else `0`
/// - `Barrier`: inner payoff gated by discrete barrier monitoring
///
/// # Examples
/// ```
/// use pricer_models::instruments::Payoff;
///
/// let path = [100.0, 104.0, 110.0];
/// assert_eq!(Payoff::Call.evaluate(&path, 100.0), 10.0);
/// assert_eq!(Payoff::Put.evaluate(&path, 100.0), 0.0);
/// assert_eq!(Payoff::DigitalCall.evaluate(&path, 100.0), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Payoff {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
    /// Digital call: 1 if S > K else 0
    DigitalCall,
    /// Digital put: 1 if S < K else 0
    DigitalPut,
    /// Path-monitored barrier around another payoff
    Barrier(Box<BarrierPayoff>),
}

impl Payoff {
    /// Evaluates the payoff on one path of spots (time index 0 first).
    ///
    /// An empty path pays nothing.
    pub fn evaluate(&self, spots: &[f64], strike: f64) -> f64 {
        let Some(&terminal) = spots.last() else {
            return 0.0;
        };
        match self {
            Payoff::Call => (terminal - strike).max(0.0),
            Payoff::Put => (strike - terminal).max(0.0),
            Payoff::DigitalCall => {
                if terminal > strike {
                    1.0
                } else {
                    0.0
                }
            }
            Payoff::DigitalPut => {
                if terminal < strike {
                    1.0
                } else {
                    0.0
                }
            }
            Payoff::Barrier(barrier) => barrier.evaluate(spots, strike),
        }
    }

    /// Returns whether the payoff depends on more than the terminal spot.
    #[inline]
    pub fn is_path_dependent(&self) -> bool {
        matches!(self, Payoff::Barrier(_))
    }

    /// Returns whether this payoff is digital.
    #[inline]
    pub fn is_digital(&self) -> bool {
        matches!(self, Payoff::DigitalCall | Payoff::DigitalPut)
    }
}

impl From<BarrierPayoff> for Payoff {
    fn from(barrier: BarrierPayoff) -> Self {
        Payoff::Barrier(Box::new(barrier))
    }
}
