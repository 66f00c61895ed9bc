//! Frontier-driven engines: breadth-first and depth-first traversal.
//!
//! Both mark a state explored the moment it joins the frontier, so every
//! state is enqueued at most once, and both stop at the first terminal
//! state taken off the frontier. They differ only in frontier order: the
//! FIFO variant is guaranteed cheapest under unit step costs, the LIFO
//! variant returns whatever it reaches first. Both count transitions as
//! unit steps and report the depth and branching metrics of the run.

use std::collections::{HashSet, VecDeque};

use crate::errors::SearchError;
use crate::fingerprint::Fingerprint;
use crate::problem::SearchProblem;
use crate::record::SearchRecord;

/// A discovered state waiting on the frontier.
#[derive(Debug, Clone)]
struct FrontierNode<S> {
    state: S,
    path: Vec<S>,
    depth: usize,
}

fn found_record<S>(
    start: S,
    node: FrontierNode<S>,
    expanded: usize,
    max_depth: usize,
    total_actions: usize,
) -> SearchRecord<S> {
    let mut best_path = vec![start];
    best_path.extend(node.path);
    SearchRecord {
        best_cost: node.depth as f64,
        best_path,
        found: true,
        expanded,
        solution_depth: Some(node.depth),
        max_depth: Some(max_depth),
        avg_branching: Some(total_actions as f64 / expanded as f64),
    }
}

/// Breadth-first search.
///
/// Explores states in non-decreasing transition count, so the first
/// terminal state dequeued is a fewest-moves solution.
pub fn breadth_first_search<P>(problem: &P) -> Result<SearchRecord<P::State>, SearchError>
where
    P: SearchProblem,
    P::State: Fingerprint,
{
    let start = problem.start_state();
    let mut explored: HashSet<<P::State as Fingerprint>::Key> = HashSet::new();
    explored.insert(start.fingerprint());

    let mut frontier = VecDeque::new();
    frontier.push_back(FrontierNode {
        state: start.clone(),
        path: Vec::new(),
        depth: 0,
    });

    let mut total_actions = 0;
    let mut max_depth = 0;

    while let Some(node) = frontier.pop_front() {
        max_depth = max_depth.max(node.depth);

        if problem.is_end(&node.state) {
            return Ok(found_record(
                start,
                node,
                explored.len(),
                max_depth,
                total_actions,
            ));
        }

        let actions = problem.actions(&node.state);
        total_actions += actions.len();
        for action in &actions {
            let next = problem.succ(&node.state, action)?;
            if explored.insert(next.fingerprint()) {
                let mut path = node.path.clone();
                path.push(next.clone());
                frontier.push_back(FrontierNode {
                    state: next,
                    path,
                    depth: node.depth + 1,
                });
            }
        }
    }

    Ok(SearchRecord::unreachable(Vec::new(), explored.len()))
}

/// Depth-first search.
///
/// Follows one branch as deep as it goes before backing up; successors go
/// on the stack in reverse enumeration order so they are expanded in
/// left-to-right order. The first terminal state reached wins, which need
/// not be the cheapest.
pub fn depth_first_search<P>(problem: &P) -> Result<SearchRecord<P::State>, SearchError>
where
    P: SearchProblem,
    P::State: Fingerprint,
{
    let start = problem.start_state();
    let mut explored: HashSet<<P::State as Fingerprint>::Key> = HashSet::new();
    explored.insert(start.fingerprint());

    let mut frontier = vec![FrontierNode {
        state: start.clone(),
        path: Vec::new(),
        depth: 0,
    }];

    let mut total_actions = 0;
    let mut max_depth = 0;

    while let Some(node) = frontier.pop() {
        max_depth = max_depth.max(node.depth);

        if problem.is_end(&node.state) {
            return Ok(found_record(
                start,
                node,
                explored.len(),
                max_depth,
                total_actions,
            ));
        }

        let actions = problem.actions(&node.state);
        total_actions += actions.len();
        for action in actions.iter().rev() {
            let next = problem.succ(&node.state, action)?;
            if explored.insert(next.fingerprint()) {
                let mut path = node.path.clone();
                path.push(next.clone());
                frontier.push(FrontierNode {
                    state: next,
                    path,
                    depth: node.depth + 1,
                });
            }
        }
    }

    Ok(SearchRecord::unreachable(Vec::new(), explored.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jugs::{JugState, JugsProblem};

    fn classic_problem() -> JugsProblem {
        JugsProblem::new(&[8, 5, 3], &[4])
    }

    #[test]
    fn test_bfs_finds_minimal_moves_on_classic_puzzle() {
        let problem = classic_problem();
        let record = breadth_first_search(&problem).unwrap();

        assert!(record.found);
        assert_eq!(record.best_cost, 6.0);
        assert_eq!(record.solution_depth, Some(6));
        assert_eq!(record.max_depth, Some(6));
        assert_eq!(record.expanded, 96);
        assert!((record.avg_branching.unwrap() - 5.4375).abs() < 1e-9);
        assert_eq!(
            record.best_path,
            vec![
                JugState::new(&[0, 0, 0]),
                JugState::new(&[0, 5, 0]),
                JugState::new(&[0, 2, 3]),
                JugState::new(&[0, 2, 0]),
                JugState::new(&[0, 0, 2]),
                JugState::new(&[0, 5, 2]),
                JugState::new(&[0, 4, 3]),
            ]
        );
    }

    #[test]
    fn test_dfs_first_found_is_not_minimal_here() {
        let problem = classic_problem();
        let record = depth_first_search(&problem).unwrap();

        assert!(record.found);
        assert_eq!(record.best_cost, 27.0);
        assert_eq!(record.solution_depth, Some(27));
        assert_eq!(record.max_depth, Some(27));
        assert_eq!(record.expanded, 68);
    }

    #[test]
    fn test_bfs_never_deeper_than_dfs() {
        let problem = classic_problem();
        let bfs = breadth_first_search(&problem).unwrap();
        let dfs = depth_first_search(&problem).unwrap();

        assert!(bfs.solution_depth.unwrap() <= dfs.solution_depth.unwrap());
        assert!(dfs.max_depth.unwrap() >= bfs.solution_depth.unwrap());
    }

    #[test]
    fn test_returned_path_is_walkable() {
        let problem = classic_problem();
        let record = breadth_first_search(&problem).unwrap();

        assert_eq!(record.best_path[0], problem.start_state());
        assert!(problem.is_end(record.best_path.last().unwrap()));
        for pair in record.best_path.windows(2) {
            let reachable = problem.actions(&pair[0]).iter().any(|action| {
                problem
                    .succ(&pair[0], action)
                    .map(|next| next == pair[1])
                    .unwrap_or(false)
            });
            assert!(reachable, "no legal action from {:?} to {:?}", pair[0], pair[1]);
        }
        assert_eq!(record.best_path.len() - 1, record.solution_depth.unwrap());
    }

    #[test]
    fn test_empty_frontier_reports_not_found() {
        let problem = JugsProblem::new(&[2, 4, 6], &[5]);

        for record in [
            breadth_first_search(&problem).unwrap(),
            depth_first_search(&problem).unwrap(),
        ] {
            assert!(!record.found);
            assert!(record.best_cost.is_infinite());
            assert_eq!(record.expanded, 24);
            assert!(record.best_path.is_empty());
            assert!(record.solution_depth.is_none());
            assert!(record.max_depth.is_none());
            assert!(record.avg_branching.is_none());
        }
    }

    #[test]
    fn test_start_state_already_terminal() {
        let problem = JugsProblem::new(&[2, 1], &[0]);
        let record = breadth_first_search(&problem).unwrap();

        assert!(record.found);
        assert_eq!(record.best_cost, 0.0);
        assert_eq!(record.best_path, vec![problem.start_state()]);
        assert_eq!(record.expanded, 1);
        assert_eq!(record.avg_branching, Some(0.0));
    }

    #[test]
    fn test_traversals_are_deterministic() {
        let first = depth_first_search(&classic_problem()).unwrap();
        let second = depth_first_search(&classic_problem()).unwrap();
        assert_eq!(first, second);
    }
}
