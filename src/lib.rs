//! Uninformed state-space search engines with a shared problem contract.
//!
//! Four engines explore the same problem abstraction: recursive and
//! iterative backtracking, breadth-first, and depth-first search. Each
//! returns a uniform result record so callers can compare strategies
//! side by side. The water-jugs problem ships as the reference problem
//! instance.

pub mod backtrack;
pub mod errors;
pub mod fingerprint;
pub mod jugs;
pub mod problem;
pub mod record;
pub mod traversal;

// Re-export main types
pub use backtrack::{backtracking_search, backtracking_search_iterative, BacktrackConfig};
pub use errors::{InvalidActionError, SearchError};
pub use fingerprint::Fingerprint;
pub use jugs::{JugAction, JugState, JugsProblem};
pub use problem::SearchProblem;
pub use record::SearchRecord;
pub use traversal::{breadth_first_search, depth_first_search};
