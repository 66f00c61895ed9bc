//! Backtracking engines: exhaustive depth-first exploration that keeps the
//! cheapest goal path found anywhere in the reachable state graph.
//!
//! Both variants share one explored set across the whole traversal, so a
//! state is expanded at most once globally. The recursive variant carries
//! an explicit depth budget instead of relying on the host call stack; the
//! iterative variant replays the identical traversal on an explicit work
//! stack and has no such limit, which makes the pair directly
//! cross-validatable.

use std::collections::HashSet;

use crate::errors::SearchError;
use crate::fingerprint::Fingerprint;
use crate::problem::SearchProblem;
use crate::record::SearchRecord;

/// Default recursion budget, roughly a scripting-host stack limit.
const DEFAULT_MAX_DEPTH: usize = 1000;

/// Configuration for the recursive backtracking engine.
#[derive(Debug, Clone)]
pub struct BacktrackConfig {
    /// Maximum recursion depth before the search gives up.
    pub max_depth: usize,
}

impl Default for BacktrackConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

struct Backtracker<'a, P: SearchProblem>
where
    P::State: Fingerprint,
{
    problem: &'a P,
    explored: HashSet<<P::State as Fingerprint>::Key>,
    best_cost: f64,
    best_path: Option<Vec<P::State>>,
    max_depth: usize,
}

impl<'a, P: SearchProblem> Backtracker<'a, P>
where
    P::State: Fingerprint,
{
    fn new(problem: &'a P, max_depth: usize) -> Self {
        Self {
            problem,
            explored: HashSet::new(),
            best_cost: f64::INFINITY,
            best_path: None,
            max_depth,
        }
    }

    fn recurse(
        &mut self,
        state: &P::State,
        path: &[P::State],
        cost: f64,
        depth: usize,
    ) -> Result<(), SearchError> {
        if depth >= self.max_depth {
            return Err(SearchError::DepthExhausted(self.max_depth));
        }

        if self.problem.is_end(state) {
            // Strictly lower cost wins; ties keep the earlier find.
            if cost < self.best_cost {
                self.best_cost = cost;
                self.best_path = Some(path.to_vec());
            }
            return Ok(());
        }

        for action in self.problem.actions(state) {
            let next = self.problem.succ(state, &action)?;
            if self.explored.insert(next.fingerprint()) {
                // Each branch owns its own path buffer.
                let mut branch = path.to_vec();
                branch.push(next.clone());
                let step = self.problem.cost(state, &action);
                self.recurse(&next, &branch, cost + step, depth + 1)?;
            }
        }
        Ok(())
    }

    fn into_record(self, start: P::State) -> SearchRecord<P::State> {
        let found = self.best_path.is_some();
        let mut best_path = vec![start];
        best_path.extend(self.best_path.unwrap_or_default());
        SearchRecord {
            best_cost: self.best_cost,
            best_path,
            found,
            expanded: self.explored.len(),
            solution_depth: None,
            max_depth: None,
            avg_branching: None,
        }
    }
}

/// Recursive backtracking search.
///
/// Explores the entire reachable, unexplored frontier and returns the
/// cheapest goal path seen. Running out of the configured depth budget is
/// a recoverable outcome: the engine reports `found = false` with a NaN
/// cost rather than failing, keeping the count of states it did explore.
pub fn backtracking_search<P>(
    problem: &P,
    config: &BacktrackConfig,
) -> Result<SearchRecord<P::State>, SearchError>
where
    P: SearchProblem,
    P::State: Fingerprint,
{
    let start = problem.start_state();
    let mut engine = Backtracker::new(problem, config.max_depth);
    engine.explored.insert(start.fingerprint());

    match engine.recurse(&start, &[], 0.0, 0) {
        Ok(()) => Ok(engine.into_record(start)),
        Err(SearchError::DepthExhausted(_)) => {
            Ok(SearchRecord::depth_exhausted(engine.explored.len()))
        }
        Err(err) => Err(err),
    }
}

/// A suspended branch of the iterative traversal.
#[derive(Debug, Clone)]
struct BranchFrame<S> {
    state: S,
    path: Vec<S>,
    cost: f64,
}

/// Iterative backtracking search.
///
/// Same semantics and pruning as [`backtracking_search`], on an explicit
/// work stack, so deep state graphs cannot exhaust it. Successors are
/// pushed in reverse enumeration order and the explored mark is placed
/// when a frame is popped, not when it is pushed; that reproduces the
/// recursive traversal exactly, including its tie-breaks, so both engines
/// return the same record whenever the recursive one completes.
pub fn backtracking_search_iterative<P>(problem: &P) -> Result<SearchRecord<P::State>, SearchError>
where
    P: SearchProblem,
    P::State: Fingerprint,
{
    let start = problem.start_state();
    let mut explored: HashSet<<P::State as Fingerprint>::Key> = HashSet::new();
    let mut best_cost = f64::INFINITY;
    let mut best_path: Option<Vec<P::State>> = None;

    let mut stack = vec![BranchFrame {
        state: start.clone(),
        path: Vec::new(),
        cost: 0.0,
    }];

    while let Some(frame) = stack.pop() {
        // A state can be pushed by several parents before its first pop;
        // only the first pop expands it.
        if !explored.insert(frame.state.fingerprint()) {
            continue;
        }

        if problem.is_end(&frame.state) {
            if frame.cost < best_cost {
                best_cost = frame.cost;
                best_path = Some(frame.path);
            }
            continue;
        }

        let actions = problem.actions(&frame.state);
        for action in actions.iter().rev() {
            let next = problem.succ(&frame.state, action)?;
            if !explored.contains(&next.fingerprint()) {
                let mut branch = frame.path.clone();
                branch.push(next.clone());
                let cost = frame.cost + problem.cost(&frame.state, action);
                stack.push(BranchFrame {
                    state: next,
                    path: branch,
                    cost,
                });
            }
        }
    }

    let found = best_path.is_some();
    let mut full_path = vec![start];
    full_path.extend(best_path.unwrap_or_default());
    Ok(SearchRecord {
        best_cost,
        best_path: full_path,
        found,
        expanded: explored.len(),
        solution_depth: None,
        max_depth: None,
        avg_branching: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jugs::{JugState, JugsProblem};

    #[test]
    fn test_recursive_single_move_solution() {
        let problem = JugsProblem::new(&[2, 1], &[2]);
        let record = backtracking_search(&problem, &BacktrackConfig::default()).unwrap();

        assert!(record.found);
        assert_eq!(record.best_cost, 1.0);
        assert_eq!(record.expanded, 6);
        assert_eq!(
            record.best_path,
            vec![JugState::new(&[0, 0]), JugState::new(&[2, 0])]
        );
    }

    #[test]
    fn test_recursive_keeps_cheapest_path() {
        let problem = JugsProblem::new(&[3, 5], &[4]);
        let record = backtracking_search(&problem, &BacktrackConfig::default()).unwrap();

        assert!(record.found);
        assert_eq!(record.best_cost, 8.0);
        assert_eq!(record.expanded, 16);
        assert_eq!(record.best_path.len(), 9);
        assert_eq!(record.best_path[0], problem.start_state());
        assert!(problem.is_end(record.best_path.last().unwrap()));
    }

    #[test]
    fn test_iterative_matches_recursive() {
        for (capacities, goal) in [
            (&[3u32, 5][..], &[4u32][..]),
            (&[8, 5, 3][..], &[4][..]),
            (&[4, 3][..], &[2][..]),
            (&[5, 3, 2][..], &[1][..]),
        ] {
            let problem = JugsProblem::new(capacities, goal);
            let recursive = backtracking_search(&problem, &BacktrackConfig::default()).unwrap();
            let iterative = backtracking_search_iterative(&problem).unwrap();

            assert_eq!(recursive.best_cost, iterative.best_cost);
            assert_eq!(recursive.best_path, iterative.best_path);
            assert_eq!(recursive.expanded, iterative.expanded);
        }
    }

    #[test]
    fn test_classic_three_jugs_exploration() {
        let problem = JugsProblem::new(&[8, 5, 3], &[4]);
        let record = backtracking_search_iterative(&problem).unwrap();

        assert!(record.found);
        assert_eq!(record.best_cost, 36.0);
        assert_eq!(record.expanded, 154);
    }

    #[test]
    fn test_unreachable_goal_reports_no_solution() {
        // All capacities even, so an odd amount can never appear.
        let problem = JugsProblem::new(&[2, 4, 6], &[5]);

        let recursive = backtracking_search(&problem, &BacktrackConfig::default()).unwrap();
        assert!(!recursive.found);
        assert!(recursive.best_cost.is_infinite());
        assert_eq!(recursive.expanded, 24);
        assert_eq!(recursive.best_path, vec![problem.start_state()]);

        let iterative = backtracking_search_iterative(&problem).unwrap();
        assert!(!iterative.found);
        assert!(iterative.best_cost.is_infinite());
        assert_eq!(iterative.expanded, 24);
    }

    #[test]
    fn test_depth_budget_exhaustion_is_recoverable() {
        let problem = JugsProblem::new(&[8, 5, 3], &[4]);
        let config = BacktrackConfig { max_depth: 3 };
        let record = backtracking_search(&problem, &config).unwrap();

        assert!(!record.found);
        assert!(record.best_cost.is_nan());
        assert!(record.best_path.is_empty());
        // Work done before the budget ran out is still counted.
        assert!(record.expanded >= 1);
    }

    #[test]
    fn test_solve_is_deterministic() {
        let first = backtracking_search_iterative(&JugsProblem::new(&[8, 5, 3], &[4])).unwrap();
        let second = backtracking_search_iterative(&JugsProblem::new(&[8, 5, 3], &[4])).unwrap();
        assert_eq!(first, second);
    }
}
