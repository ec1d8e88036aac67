//! Breadth-first search engine.
//!
//! - `Trace`: arena of backward-linked nodes recording how each state was reached
//! - `Path`: the root-first solution reconstructed from a trace
//! - `Search` / `search`: bounded breadth-first traversal from start to goal

mod engine;
mod error;
mod path;
mod trace;

pub use engine::{search, Search, Solution};
pub use error::SearchError;
pub use path::{Path, Step};
pub use trace::{Expansion, NodeId, Trace, TraceNode};

/// Default transition budget.
///
/// A few seconds of work at most; five lights exhaust their whole
/// reachable component in 80 transitions.
pub const DEFAULT_MAX_STATES: usize = 10_000;
