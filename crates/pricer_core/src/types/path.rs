//! Fixed-length simulated trajectory.

use super::state::State;

/// Ordered sequence of `n + 1` states.
///
/// Index 0 is the initial condition and index `n` the terminal state. A path
/// has no mutating API: once produced its length and contents never change.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{Path, State};
///
/// let path = Path::from_states(vec![State::new(100.0), State::new(101.5)]);
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.end_state().spot(), 101.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    states: Vec<State>,
}

impl Path {
    /// Builds a path from its states.
    ///
    /// # Panics
    ///
    /// Debug builds assert the path holds at least the initial state.
    pub fn from_states(states: Vec<State>) -> Self {
        debug_assert!(!states.is_empty(), "a path holds at least its initial state");
        Self { states }
    }

    /// Number of states, `n + 1` for `n` steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if the path holds no state.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State at `index`, or `None` past the terminal state.
    #[inline]
    pub fn state(&self, index: usize) -> Option<&State> {
        self.states.get(index)
    }

    /// Initial condition.
    #[inline]
    pub fn initial_state(&self) -> State {
        self.states[0]
    }

    /// Terminal state.
    #[inline]
    pub fn end_state(&self) -> State {
        self.states[self.states.len() - 1]
    }

    /// Iterates over the states in time order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.states.iter()
    }

    /// All states as a slice.
    #[inline]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Spot values in time order.
    pub fn spots(&self) -> Vec<f64> {
        self.states.iter().map(State::spot).collect()
    }

    /// Variance values in time order, `None` if any state lacks a variance.
    pub fn variances(&self) -> Option<Vec<f64>> {
        self.states.iter().map(State::variance).collect()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
