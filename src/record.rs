//! Uniform result record returned by every engine.

use serde::Serialize;

/// Outcome of one `solve` invocation.
///
/// `best_cost` uses two sentinels: `f64::INFINITY` when no goal is
/// reachable, and `f64::NAN` when the recursive engine gave up on its
/// depth budget. Both imply `found = false`. The depth metrics are filled
/// only by the frontier engines (BFS/DFS) on success.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord<S> {
    pub best_cost: f64,
    pub best_path: Vec<S>,
    pub found: bool,
    /// Size of the explored set when the engine returned.
    pub expanded: usize,
    /// Transition count of the returned path (frontier engines only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_depth: Option<usize>,
    /// Deepest dequeued depth seen up to termination (frontier engines only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    /// Total enumerated actions divided by explored states; a coarse
    /// branching-factor estimate (frontier engines only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_branching: Option<f64>,
}

impl<S> SearchRecord<S> {
    /// No goal is reachable from the start state.
    pub fn unreachable(best_path: Vec<S>, expanded: usize) -> Self {
        Self {
            best_cost: f64::INFINITY,
            best_path,
            found: false,
            expanded,
            solution_depth: None,
            max_depth: None,
            avg_branching: None,
        }
    }

    /// The recursive engine ran out of depth budget before exhausting the
    /// frontier. The exploration already performed is still reported.
    pub fn depth_exhausted(expanded: usize) -> Self {
        Self {
            best_cost: f64::NAN,
            best_path: Vec::new(),
            found: false,
            expanded,
            solution_depth: None,
            max_depth: None,
            avg_branching: None,
        }
    }
}
