//! Contract plus payoff, evaluated against simulation output.

use pricer_core::types::{Path, SimulationResult};

use super::barrier::{BarrierDirection, BarrierNature, BarrierPayoff};
use super::contract::OptionContract;
use super::error::InstrumentError;
use super::payoff::Payoff;

/// Priceable instrument: an [`OptionContract`] and a [`Payoff`].
///
/// Instruments hold no state between evaluations.
///
/// # Examples
///
/// ```
/// use pricer_core::types::SimulationResult;
/// use pricer_models::instruments::Instrument;
///
/// let sims = SimulationResult::from_parts(
///     vec![100.0, 110.0, 100.0, 90.0],
///     None,
///     2,
///     2,
///     0,
/// )
/// .unwrap();
/// let call = Instrument::call(100.0, 1.0).unwrap();
/// assert_eq!(call.compute_payoff(&sims), 5.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Instrument {
    contract: OptionContract,
    payoff: Payoff,
}

impl Instrument {
    /// Pairs a contract with a payoff.
    pub fn new(contract: OptionContract, payoff: Payoff) -> Self {
        Self { contract, payoff }
    }

    /// European call.
    pub fn call(strike: f64, maturity: f64) -> Result<Self, InstrumentError> {
        Ok(Self::new(OptionContract::new(strike, maturity)?, Payoff::Call))
    }

    /// European put.
    pub fn put(strike: f64, maturity: f64) -> Result<Self, InstrumentError> {
        Ok(Self::new(OptionContract::new(strike, maturity)?, Payoff::Put))
    }

    /// Cash-or-nothing digital call paying 1.
    pub fn digital_call(strike: f64, maturity: f64) -> Result<Self, InstrumentError> {
        Ok(Self::new(
            OptionContract::new(strike, maturity)?,
            Payoff::DigitalCall,
        ))
    }

    /// Cash-or-nothing digital put paying 1.
    pub fn digital_put(strike: f64, maturity: f64) -> Result<Self, InstrumentError> {
        Ok(Self::new(
            OptionContract::new(strike, maturity)?,
            Payoff::DigitalPut,
        ))
    }

    /// Barrier option with textual direction (`"up"`/`"down"`) and nature
    /// (`"in"`/`"out"`), both case-insensitive.
    pub fn barrier(
        contract: OptionContract,
        level: f64,
        direction: &str,
        nature: &str,
        inner: Payoff,
    ) -> Result<Self, InstrumentError> {
        let barrier = BarrierPayoff::new(level, direction, nature, inner)?;
        Ok(Self::new(contract, barrier.into()))
    }

    /// Barrier option with typed direction and nature.
    pub fn barrier_with_kind(
        contract: OptionContract,
        level: f64,
        direction: BarrierDirection,
        nature: BarrierNature,
        inner: Payoff,
    ) -> Result<Self, InstrumentError> {
        let barrier = BarrierPayoff::with_kind(level, direction, nature, inner)?;
        Ok(Self::new(contract, barrier.into()))
    }

    /// Contract terms.
    #[inline]
    pub fn contract(&self) -> &OptionContract {
        &self.contract
    }

    /// Payoff.
    #[inline]
    pub fn payoff(&self) -> &Payoff {
        &self.payoff
    }

    /// Maturity of the contract.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.contract.maturity()
    }

    /// Payoff of every path, in path order. Undiscounted.
    pub fn payoffs(&self, result: &SimulationResult) -> Vec<f64> {
        let strike = self.contract.strike();
        result
            .spot_paths()
            .map(|spots| self.payoff.evaluate(spots, strike))
            .collect()
    }

    /// Arithmetic mean payoff across paths. Undiscounted.
    pub fn compute_payoff(&self, result: &SimulationResult) -> f64 {
        let n = result.n_paths();
        if n == 0 {
            return 0.0;
        }
        self.payoffs(result).iter().sum::<f64>() / n as f64
    }

    /// Payoff of a single path.
    pub fn payoff_path(&self, path: &Path) -> f64 {
        self.payoff.evaluate(&path.spots(), self.contract.strike())
    }
}
