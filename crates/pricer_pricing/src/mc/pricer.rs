//! Discounted Monte Carlo pricing and bump-and-revalue Greeks.
//!
//! # Overview
//!
//! The [`Pricer`] coordinates:
//! 1. Path generation (via [`MonteCarloEngine::generate`])
//! 2. Payoff evaluation (via [`Instrument::payoffs`])
//! 3. Discounting by `exp(-r T)` and aggregation
//! 4. Delta and Gamma by central differences in the spot
//!
//! Each valuation takes one root seed from
//! [`MonteCarloEngine::next_root_seed`]. The base and bumped simulations of a
//! Greek share that root, and so their random numbers, even on an unseeded
//! engine.

use pricer_core::types::SimulationResult;
use pricer_models::instruments::Instrument;
use pricer_models::schemes::DiscretisationScheme;
use tracing::debug;

use super::engine::MonteCarloEngine;
use super::error::SimulationError;
use crate::context::MarketState;

/// Pricing result with optional Greeks.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PricingResult;
///
/// let result = PricingResult {
///     price: 10.5,
///     std_error: 0.05,
///     delta: Some(0.55),
///     gamma: None,
/// };
///
/// assert!((result.confidence_95() - 0.098).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Present value of the instrument.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
    /// Delta: ∂V/∂S.
    pub delta: Option<f64>,
    /// Gamma: ∂²V/∂S².
    pub gamma: Option<f64>,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Monte Carlo pricer.
///
/// Owns its market state, grid sizes and engine. They change only through
/// [`reconfigure`](Self::reconfigure) (or [`engine_mut`](Self::engine_mut)
/// for the seed and worker count).
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::Instrument;
/// use pricer_models::models::BlackScholes;
/// use pricer_models::schemes::LogEuler;
/// use pricer_pricing::context::MarketState;
/// use pricer_pricing::mc::{MonteCarloEngine, Pricer};
///
/// let mut engine = MonteCarloEngine::new(LogEuler::new(BlackScholes::new(0.05, 0.2).unwrap()));
/// engine.configure(Some(42), None).unwrap();
///
/// let pricer = Pricer::new(MarketState::new(100.0, 0.05, None), 50, 2_000, engine);
/// let call = Instrument::call(100.0, 1.0).unwrap();
/// let price = pricer.price(&call).unwrap();
/// assert!(price > 8.0 && price < 13.0);
/// ```
#[derive(Clone, Debug)]
pub struct Pricer<S> {
    market: MarketState,
    n_steps: usize,
    n_paths: usize,
    engine: MonteCarloEngine<S>,
}

impl<S: DiscretisationScheme> Pricer<S> {
    /// Creates a pricer.
    ///
    /// Grid sizes are validated by the engine at pricing time.
    pub fn new(market: MarketState, n_steps: usize, n_paths: usize, engine: MonteCarloEngine<S>) -> Self {
        Self {
            market,
            n_steps,
            n_paths,
            engine,
        }
    }

    /// Market state.
    #[inline]
    pub fn market(&self) -> &MarketState {
        &self.market
    }

    /// Time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Paths per simulation.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Bound engine.
    #[inline]
    pub fn engine(&self) -> &MonteCarloEngine<S> {
        &self.engine
    }

    /// Bound engine, for reseeding.
    #[inline]
    pub fn engine_mut(&mut self) -> &mut MonteCarloEngine<S> {
        &mut self.engine
    }

    /// Replaces whichever fields are given.
    pub fn reconfigure(
        &mut self,
        n_steps: Option<usize>,
        n_paths: Option<usize>,
        market: Option<MarketState>,
    ) {
        if let Some(n_steps) = n_steps {
            self.n_steps = n_steps;
        }
        if let Some(n_paths) = n_paths {
            self.n_paths = n_paths;
        }
        if let Some(market) = market {
            self.market = market;
        }
    }

    /// Discounted Monte Carlo price.
    ///
    /// # Errors
    ///
    /// Any [`SimulationError`] raised by the engine, e.g. a zero maturity or a
    /// missing initial variance.
    pub fn price(&self, instrument: &Instrument) -> Result<f64, SimulationError> {
        Ok(self.price_with_stats(instrument)?.price)
    }

    /// Discounted price with its standard error.
    pub fn price_with_stats(&self, instrument: &Instrument) -> Result<PricingResult, SimulationError> {
        self.stats_at(instrument, self.engine.next_root_seed())
    }

    /// Central-difference delta `(V(S+h) - V(S-h)) / 2h`.
    ///
    /// # Errors
    ///
    /// [`SimulationError::InvalidBump`] if `h` is not strictly positive and
    /// finite, otherwise as [`price`](Self::price).
    pub fn delta(&self, instrument: &Instrument, h: f64) -> Result<f64, SimulationError> {
        validate_bump(h)?;
        let root = self.engine.next_root_seed();
        let up = self.price_at(instrument, self.market.with_spot(self.market.spot() + h), root)?;
        let down = self.price_at(instrument, self.market.with_spot(self.market.spot() - h), root)?;
        Ok((up - down) / (2.0 * h))
    }

    /// Central-difference gamma `(V(S+h) - 2V(S) + V(S-h)) / h²`.
    pub fn gamma(&self, instrument: &Instrument, h: f64) -> Result<f64, SimulationError> {
        validate_bump(h)?;
        let root = self.engine.next_root_seed();
        let up = self.price_at(instrument, self.market.with_spot(self.market.spot() + h), root)?;
        let base = self.price_at(instrument, self.market, root)?;
        let down = self.price_at(instrument, self.market.with_spot(self.market.spot() - h), root)?;
        Ok((up - 2.0 * base + down) / (h * h))
    }

    /// Price, standard error, delta and gamma from three simulations.
    pub fn price_with_greeks(
        &self,
        instrument: &Instrument,
        h: f64,
    ) -> Result<PricingResult, SimulationError> {
        validate_bump(h)?;
        let root = self.engine.next_root_seed();
        let base = self.stats_at(instrument, root)?;
        let up = self.price_at(instrument, self.market.with_spot(self.market.spot() + h), root)?;
        let down = self.price_at(instrument, self.market.with_spot(self.market.spot() - h), root)?;

        Ok(PricingResult {
            delta: Some((up - down) / (2.0 * h)),
            gamma: Some((up - 2.0 * base.price + down) / (h * h)),
            ..base
        })
    }

    /// Prices several instruments, simulating once per distinct maturity.
    ///
    /// Prices are returned in input order. All simulations share one root
    /// seed.
    pub fn batch_price(&self, instruments: &[Instrument]) -> Result<Vec<f64>, SimulationError> {
        let root = self.engine.next_root_seed();
        let mut simulations: Vec<(f64, SimulationResult)> = Vec::new();
        let mut prices = Vec::with_capacity(instruments.len());

        for instrument in instruments {
            let maturity = instrument.maturity();
            let index = match simulations.iter().position(|(t, _)| *t == maturity) {
                Some(index) => index,
                None => {
                    let result = self.simulate(&self.market, maturity, root)?;
                    simulations.push((maturity, result));
                    simulations.len() - 1
                }
            };
            let df = self.market.discount_factor(maturity);
            prices.push(instrument.compute_payoff(&simulations[index].1) * df);
        }

        debug!(
            instruments = instruments.len(),
            simulations = simulations.len(),
            seed = root,
            "batch priced"
        );
        Ok(prices)
    }

    fn stats_at(&self, instrument: &Instrument, root: u64) -> Result<PricingResult, SimulationError> {
        let result = self.simulate(&self.market, instrument.maturity(), root)?;
        let (mean, std_error) = mean_and_std_error(&instrument.payoffs(&result));
        let df = self.market.discount_factor(instrument.maturity());

        debug!(
            price = mean * df,
            std_error = std_error * df,
            n_paths = self.n_paths,
            seed = root,
            "instrument priced"
        );
        Ok(PricingResult {
            price: mean * df,
            std_error: std_error * df,
            ..Default::default()
        })
    }

    fn price_at(
        &self,
        instrument: &Instrument,
        market: MarketState,
        root: u64,
    ) -> Result<f64, SimulationError> {
        let result = self.simulate(&market, instrument.maturity(), root)?;
        Ok(instrument.compute_payoff(&result) * market.discount_factor(instrument.maturity()))
    }

    fn simulate(
        &self,
        market: &MarketState,
        maturity: f64,
        root: u64,
    ) -> Result<SimulationResult, SimulationError> {
        self.engine.generate_with_seed(
            root,
            market.spot(),
            self.n_steps,
            maturity,
            self.n_paths,
            market.v0(),
        )
    }
}

fn validate_bump(h: f64) -> Result<(), SimulationError> {
    if !h.is_finite() || h <= 0.0 {
        return Err(SimulationError::InvalidBump(h));
    }
    Ok(())
}

/// Sample mean and standard error of the mean.
fn mean_and_std_error(values: &[f64]) -> (f64, f64) {
    let n = values.len();
    if n == 0 {
        return (0.0, 0.0);
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    if n == 1 {
        return (mean, 0.0);
    }
    let variance = values.iter().map(|&p| (p - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    (mean, (variance / n as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use pricer_models::instruments::{OptionContract, Payoff};
    use pricer_models::models::{BlackScholes, Heston};
    use pricer_models::schemes::{Euler, EulerHeston, LogEuler};

    fn zero_vol_pricer(n_paths: usize) -> Pricer<Euler<BlackScholes>> {
        let mut engine = MonteCarloEngine::new(Euler::new(BlackScholes::new(0.05, 0.0).unwrap()));
        engine.configure(Some(1), None).unwrap();
        Pricer::new(MarketState::new(100.0, 0.05, None), 100, n_paths, engine)
    }

    fn bs_pricer(seed: i64) -> Pricer<Euler<BlackScholes>> {
        let mut engine = MonteCarloEngine::new(Euler::new(BlackScholes::new(0.05, 0.2).unwrap()));
        engine.configure(Some(seed), None).unwrap();
        Pricer::new(MarketState::new(100.0, 0.05, None), 50, 500, engine)
    }

    // ========================================
    // Statistics helpers
    // ========================================

    #[test]
    fn test_mean_and_std_error() {
        let (mean, se) = mean_and_std_error(&[1.0, 2.0, 3.0, 4.0]);
        assert_relative_eq!(mean, 2.5);
        // sample variance 5/3, se = sqrt(5/12)
        assert_relative_eq!(se, (5.0f64 / 12.0).sqrt());
        assert_eq!(mean_and_std_error(&[7.0]), (7.0, 0.0));
        assert_eq!(mean_and_std_error(&[]), (0.0, 0.0));
    }

    // ========================================
    // Pricing
    // ========================================

    #[test]
    fn test_zero_vol_call_is_discounted_forward_intrinsic() {
        let pricer = zero_vol_pricer(4);
        let call = Instrument::call(90.0, 1.0).unwrap();
        let growth = (1.0f64 + 0.05 / 100.0).powi(100);
        let expected = (100.0 * growth - 90.0) * (-0.05f64).exp();

        let result = pricer.price_with_stats(&call).unwrap();
        assert_relative_eq!(result.price, expected, max_relative = 1e-12);
        assert_abs_diff_eq!(result.std_error, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_put_call_parity_on_shared_paths() {
        let pricer = bs_pricer(3);
        let call = Instrument::call(105.0, 1.0).unwrap();
        let put = Instrument::put(105.0, 1.0).unwrap();
        let sims = pricer.engine().generate(100.0, 50, 1.0, 500, None).unwrap();
        let df = (-0.05f64).exp();

        let lhs = pricer.price(&call).unwrap() - pricer.price(&put).unwrap();
        let rhs = df * (sims.average_terminal_spot() - 105.0);
        assert_relative_eq!(lhs, rhs, max_relative = 1e-10);
    }

    #[test]
    fn test_price_is_repeatable() {
        let pricer = bs_pricer(11);
        let call = Instrument::call(100.0, 0.5).unwrap();
        assert_eq!(pricer.price(&call).unwrap(), pricer.price(&call).unwrap());
    }

    #[test]
    fn test_zero_maturity_is_precondition_error() {
        let pricer = bs_pricer(1);
        let call = Instrument::call(100.0, 0.0).unwrap();
        assert_eq!(
            pricer.price(&call).unwrap_err(),
            SimulationError::InvalidHorizon(0.0)
        );
    }

    #[test]
    fn test_heston_pricer_needs_v0() {
        let heston = Heston::new(0.02, 1.5, 0.04, 0.3, -0.7).unwrap();
        let engine = MonteCarloEngine::new(EulerHeston::new(heston));
        let mut pricer = Pricer::new(MarketState::new(100.0, 0.02, None), 10, 50, engine);
        let call = Instrument::call(100.0, 1.0).unwrap();
        assert!(matches!(
            pricer.price(&call),
            Err(SimulationError::Scheme(_))
        ));

        pricer.reconfigure(None, None, Some(MarketState::new(100.0, 0.02, Some(0.04))));
        assert!(pricer.price(&call).unwrap() > 0.0);
    }

    // ========================================
    // Greeks
    // ========================================

    #[test]
    fn test_zero_vol_greeks() {
        let pricer = zero_vol_pricer(2);
        let call = Instrument::call(90.0, 1.0).unwrap();
        let growth = (1.0f64 + 0.05 / 100.0).powi(100);
        let df = (-0.05f64).exp();

        let delta = pricer.delta(&call, 1.0).unwrap();
        assert_relative_eq!(delta, growth * df, max_relative = 1e-9);

        let gamma = pricer.gamma(&call, 1.0).unwrap();
        assert_abs_diff_eq!(gamma, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_price_with_greeks_matches_individual_calls() {
        let pricer = bs_pricer(21);
        let call = Instrument::call(100.0, 1.0).unwrap();
        let full = pricer.price_with_greeks(&call, 0.5).unwrap();

        assert_eq!(full.price, pricer.price(&call).unwrap());
        assert_relative_eq!(full.delta.unwrap(), pricer.delta(&call, 0.5).unwrap(), max_relative = 1e-12);
        assert_relative_eq!(full.gamma.unwrap(), pricer.gamma(&call, 0.5).unwrap(), max_relative = 1e-9);
        assert!(full.std_error > 0.0);
    }

    #[test]
    fn test_unseeded_prices_vary_between_calls() {
        let engine = MonteCarloEngine::new(Euler::new(BlackScholes::new(0.05, 0.2).unwrap()));
        let pricer = Pricer::new(MarketState::new(100.0, 0.05, None), 10, 200, engine);
        let call = Instrument::call(100.0, 1.0).unwrap();
        assert_ne!(pricer.price(&call).unwrap(), pricer.price(&call).unwrap());
    }

    #[test]
    fn test_unseeded_greeks_share_one_root() {
        let engine = MonteCarloEngine::new(LogEuler::new(BlackScholes::new(0.05, 0.2).unwrap()));
        let pricer = Pricer::new(MarketState::new(100.0, 0.05, None), 1, 2_000, engine);
        // Deep in the money the payoff is linear in the spot on every path, so
        // common random numbers leave no curvature
        let call = Instrument::call(10.0, 1.0).unwrap();

        let result = pricer.price_with_greeks(&call, 1.0).unwrap();
        assert_abs_diff_eq!(result.gamma.unwrap(), 0.0, epsilon = 1e-8);
        assert_abs_diff_eq!(pricer.gamma(&call, 1.0).unwrap(), 0.0, epsilon = 1e-8);

        let delta = pricer.delta(&call, 1.0).unwrap();
        assert!(delta > 0.9 && delta < 1.1, "delta = {delta}");
    }

    #[test]
    fn test_call_delta_in_unit_interval() {
        let pricer = bs_pricer(5);
        let call = Instrument::call(100.0, 1.0).unwrap();
        let delta = pricer.delta(&call, 1.0).unwrap();
        assert!(delta > 0.0 && delta < 1.0, "delta = {delta}");
    }

    #[test]
    fn test_invalid_bump_rejected() {
        let pricer = bs_pricer(1);
        let call = Instrument::call(100.0, 1.0).unwrap();
        for h in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                pricer.delta(&call, h),
                Err(SimulationError::InvalidBump(_))
            ));
            assert!(pricer.gamma(&call, h).is_err());
            assert!(pricer.price_with_greeks(&call, h).is_err());
        }
    }

    // ========================================
    // Batch and reconfiguration
    // ========================================

    #[test]
    fn test_batch_price_matches_single_prices() {
        let pricer = bs_pricer(8);
        let contract = OptionContract::new(100.0, 1.0).unwrap();
        let instruments = vec![
            Instrument::call(100.0, 1.0).unwrap(),
            Instrument::put(95.0, 0.5).unwrap(),
            Instrument::barrier(contract, 120.0, "up", "out", Payoff::Call).unwrap(),
            Instrument::digital_call(100.0, 0.5).unwrap(),
        ];

        let batch = pricer.batch_price(&instruments).unwrap();
        assert_eq!(batch.len(), 4);
        for (instrument, &price) in instruments.iter().zip(&batch) {
            assert_eq!(price, pricer.price(instrument).unwrap());
        }
    }

    #[test]
    fn test_batch_price_propagates_errors() {
        let pricer = bs_pricer(8);
        let instruments = vec![
            Instrument::call(100.0, 1.0).unwrap(),
            Instrument::call(100.0, 0.0).unwrap(),
        ];
        assert!(pricer.batch_price(&instruments).is_err());
        assert_eq!(pricer.batch_price(&[]).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn test_reconfigure_partial_update() {
        let mut pricer = bs_pricer(1);
        pricer.reconfigure(Some(10), None, None);
        assert_eq!(pricer.n_steps(), 10);
        assert_eq!(pricer.n_paths(), 500);
        assert_eq!(pricer.market().spot(), 100.0);

        pricer.reconfigure(None, Some(20), Some(MarketState::new(90.0, 0.01, None)));
        assert_eq!(pricer.n_steps(), 10);
        assert_eq!(pricer.n_paths(), 20);
        assert_eq!(pricer.market().rate(), 0.01);
    }

    #[test]
    fn test_zero_paths_rejected_at_pricing_time() {
        let mut pricer = bs_pricer(1);
        pricer.reconfigure(None, Some(0), None);
        let call = Instrument::call(100.0, 1.0).unwrap();
        assert_eq!(pricer.price(&call).unwrap_err(), SimulationError::ZeroPaths);
    }
}
