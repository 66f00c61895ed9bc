//! The capability contract a state-space problem exposes to the engines.
//!
//! Engines are polymorphic over this trait plus the fingerprint utility;
//! they never reach into a problem's internals.

use std::fmt::Debug;

use crate::errors::InvalidActionError;

/// A state-space search problem.
///
/// States and actions are opaque value types: a state is never mutated
/// after creation, and every transition produces a fresh state. Problem
/// instances must be read-only during a solve, so one instance can back
/// several engines in turn.
pub trait SearchProblem {
    type State: Clone + Debug;
    type Action: Clone + Debug;

    /// The unique initial configuration.
    fn start_state(&self) -> Self::State;

    /// Goal test; a pure function of the state.
    fn is_end(&self, state: &Self::State) -> bool;

    /// All legal actions from `state`, in a deterministic order. May be
    /// empty for non-terminal dead ends.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Deterministic result of applying `action` to `state`. Fails with
    /// [`InvalidActionError`] when the action is not currently legal;
    /// engines propagate that failure, never correct it.
    fn succ(
        &self,
        state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, InvalidActionError>;

    /// Non-negative incremental cost of taking `action` from `state`.
    fn cost(&self, state: &Self::State, action: &Self::Action) -> f64;
}
