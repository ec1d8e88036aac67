//! Breadth-first search over puzzle states.

use super::error::SearchError;
use super::path::Path;
use super::trace::Trace;
use super::DEFAULT_MAX_STATES;
use crate::core::State;
use std::collections::{HashSet, VecDeque};
use tracing::{debug, trace};

/// A found path plus the work it took to find it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub path: Path,
    /// Trace nodes created beyond the root
    pub transitions_expanded: usize,
}

/// Configured breadth-first search from `start` to `goal`.
///
/// The budget counts materialized transitions (new trace nodes), not
/// frontier dequeues, and is checked before each one is created, so no
/// more than `max_states` transitions are ever produced.
///
/// # Example
///
/// ```rust
/// use fivebuttons::core::State;
/// use fivebuttons::search::Search;
///
/// let start = State::parse("XXXXX").unwrap();
/// let goal = State::parse("XRRRX").unwrap();
///
/// let solution = Search::new(&start, &goal).max_states(100).run().unwrap();
/// assert_eq!(solution.path.buttons(), vec![2]);
/// ```
#[derive(Clone, Debug)]
pub struct Search<'a> {
    start: &'a State,
    goal: &'a State,
    max_states: usize,
}

impl<'a> Search<'a> {
    /// Search with the [`DEFAULT_MAX_STATES`] budget.
    pub fn new(start: &'a State, goal: &'a State) -> Self {
        Self {
            start,
            goal,
            max_states: DEFAULT_MAX_STATES,
        }
    }

    pub fn max_states(mut self, max_states: usize) -> Self {
        self.max_states = max_states;
        self
    }

    /// Run the search.
    ///
    /// Returns the first path found, which is a shortest one. Among equally
    /// short paths it is the one whose button sequence comes first when
    /// buttons are compared in ascending order at each depth.
    pub fn run(&self) -> Result<Solution, SearchError> {
        let (start, goal) = (self.start, self.goal);
        debug!(%start, %goal, max_states = self.max_states, "starting search");

        let mut trace = Trace::new();
        let root = trace.root(start.clone());
        if goal == start {
            debug!("start already matches goal");
            return Ok(Solution {
                path: trace.path_to(root),
                transitions_expanded: 0,
            });
        }

        let mut visited = HashSet::from([start.clone()]);
        let mut frontier = VecDeque::from([root]);
        let mut expanded = 0;

        while let Some(node) = frontier.pop_front() {
            if expanded >= self.max_states {
                return Err(self.budget_exceeded(expanded));
            }
            trace!(state = %trace.node(node).state, expanded, "expanding");

            let expansion = trace.next_within(node, &mut visited, self.max_states - expanded);
            for child in expansion.children {
                expanded += 1;
                if &trace.node(child).state == goal {
                    let path = trace.path_to(child);
                    debug!(moves = path.moves(), expanded, "found goal");
                    return Ok(Solution {
                        path,
                        transitions_expanded: expanded,
                    });
                }
                frontier.push_back(child);
            }
            if expansion.truncated {
                return Err(self.budget_exceeded(expanded));
            }
        }

        debug!(expanded, "frontier exhausted");
        Err(SearchError::NoPathExists {
            start: start.clone(),
            goal: goal.clone(),
        })
    }

    fn budget_exceeded(&self, expanded: usize) -> SearchError {
        debug!(expanded, max_states = self.max_states, "search budget exhausted");
        SearchError::SearchBudgetExceeded {
            start: self.start.clone(),
            goal: self.goal.clone(),
            max_states: self.max_states,
        }
    }
}

/// Shortest path from `start` to `goal`, creating at most `max_states`
/// transitions.
///
/// States of different lengths never match, so such a search ends in
/// [`SearchError::NoPathExists`] or [`SearchError::SearchBudgetExceeded`];
/// [`crate::Problem::parse`] rejects them up front.
pub fn search(start: &State, goal: &State, max_states: usize) -> Result<Path, SearchError> {
    Search::new(start, goal)
        .max_states(max_states)
        .run()
        .map(|solution| solution.path)
}
