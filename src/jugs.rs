//! The n-jugs problem: measure target amounts using jugs of fixed
//! capacity that can only be filled, emptied, or poured into one another.
//!
//! All jugs start empty. Every move costs one unit. The goal holds when
//! each requested amount is held by a distinct jug.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::errors::InvalidActionError;
use crate::fingerprint::Fingerprint;
use crate::problem::SearchProblem;

/// Per-jug amounts; most puzzles use two or three jugs.
pub type Amounts = SmallVec<[u32; 4]>;

/// One configuration of the jugs: the amount currently held in each.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JugState(pub Amounts);

impl JugState {
    pub fn new(amounts: &[u32]) -> Self {
        Self(SmallVec::from_slice(amounts))
    }
}

impl Fingerprint for JugState {
    type Key = Amounts;

    fn fingerprint(&self) -> Amounts {
        self.0.clone()
    }
}

/// One legal move on the jugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum JugAction {
    /// Fill a jug to its capacity from the tap.
    Fill { jug: usize },
    /// Empty a jug onto the ground.
    Empty { jug: usize },
    /// Pour one jug into another until the source empties or the
    /// destination fills, whichever comes first.
    Pour { from: usize, to: usize },
}

/// Problem parameters: jug capacities and the amounts to measure out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JugsProblem {
    pub capacities: Amounts,
    pub goal: Amounts,
}

impl JugsProblem {
    pub fn new(capacities: &[u32], goal: &[u32]) -> Self {
        Self {
            capacities: SmallVec::from_slice(capacities),
            goal: SmallVec::from_slice(goal),
        }
    }

    fn is_legal(&self, state: &JugState, action: &JugAction) -> bool {
        let n = self.capacities.len();
        match *action {
            JugAction::Fill { jug } => jug < n && state.0[jug] < self.capacities[jug],
            JugAction::Empty { jug } => jug < n && state.0[jug] > 0,
            JugAction::Pour { from, to } => {
                from < n
                    && to < n
                    && from != to
                    && state.0[from] > 0
                    && state.0[to] < self.capacities[to]
            }
        }
    }
}

impl SearchProblem for JugsProblem {
    type State = JugState;
    type Action = JugAction;

    fn start_state(&self) -> JugState {
        JugState(SmallVec::from_elem(0, self.capacities.len()))
    }

    /// Each goal amount must be matched by a distinct jug.
    fn is_end(&self, state: &JugState) -> bool {
        let mut pool = state.0.clone();
        self.goal.iter().all(|goal| {
            match pool.iter().position(|amount| amount == goal) {
                Some(index) => {
                    pool.swap_remove(index);
                    true
                }
                None => false,
            }
        })
    }

    /// Fills first (by jug index), then empties, then pours (by source,
    /// then destination). The order is fixed so traversals are reproducible.
    fn actions(&self, state: &JugState) -> Vec<JugAction> {
        let n = self.capacities.len();
        let mut actions = Vec::new();

        for jug in 0..n {
            if state.0[jug] < self.capacities[jug] {
                actions.push(JugAction::Fill { jug });
            }
        }
        for jug in 0..n {
            if state.0[jug] > 0 {
                actions.push(JugAction::Empty { jug });
            }
        }
        for from in 0..n {
            for to in 0..n {
                if from != to && state.0[from] > 0 && state.0[to] < self.capacities[to] {
                    actions.push(JugAction::Pour { from, to });
                }
            }
        }

        actions
    }

    fn succ(&self, state: &JugState, action: &JugAction) -> Result<JugState, InvalidActionError> {
        if !self.is_legal(state, action) {
            return Err(InvalidActionError::new(state, action));
        }

        let mut next = state.0.clone();
        match *action {
            JugAction::Fill { jug } => next[jug] = self.capacities[jug],
            JugAction::Empty { jug } => next[jug] = 0,
            JugAction::Pour { from, to } => {
                let transfer = next[from].min(self.capacities[to] - next[to]);
                next[from] -= transfer;
                next[to] += transfer;
            }
        }
        Ok(JugState(next))
    }

    fn cost(&self, _state: &JugState, _action: &JugAction) -> f64 {
        1.0
    }
}
