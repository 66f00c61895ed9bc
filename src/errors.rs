//! Error taxonomy for the search engines.
//!
//! Illegal successor requests are programming errors and propagate to the
//! caller of `solve`. An empty frontier is not an error at all; it is
//! reported through the result record (`found = false`).

use std::fmt::Debug;

use thiserror::Error;

/// `succ` was asked to apply an action that is not legal in the given state.
///
/// Carries debug renderings of the offending state and action so the error
/// stays usable across problem types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("action {action} is not legal in state {state}")]
pub struct InvalidActionError {
    pub state: String,
    pub action: String,
}

impl InvalidActionError {
    pub fn new(state: &impl Debug, action: &impl Debug) -> Self {
        Self {
            state: format!("{:?}", state),
            action: format!("{:?}", action),
        }
    }
}

/// Failures a search engine can report while exploring.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    InvalidAction(#[from] InvalidActionError),

    /// Raised inside the recursive engine when the configured depth budget
    /// runs out. Converted to a no-solution record at the engine boundary,
    /// so callers of the engine entry points never observe it.
    #[error("recursion depth limit {0} exhausted")]
    DepthExhausted(usize),
}
