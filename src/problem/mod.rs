//! Validated start/goal pairs.

pub mod error;

pub use error::ProblemError;

use crate::core::State;
use crate::search::{Search, Solution};

/// A start and goal of equal length, ready to search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    start: State,
    goal: State,
}

impl Problem {
    /// Parse both states and check they have the same number of lights.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fivebuttons::{Problem, ProblemError};
    ///
    /// let problem = Problem::parse("xxx", "RRR").unwrap();
    /// assert_eq!(problem.start().printable_state(), "XXX");
    ///
    /// assert!(matches!(
    ///     Problem::parse("XXX", "XXXX"),
    ///     Err(ProblemError::LightCountMismatch { start: 3, goal: 4 })
    /// ));
    /// ```
    pub fn parse(start: &str, goal: &str) -> Result<Self, ProblemError> {
        Self::new(State::parse(start)?, State::parse(goal)?)
    }

    /// Pair two already-parsed states.
    pub fn new(start: State, goal: State) -> Result<Self, ProblemError> {
        if start.len() != goal.len() {
            return Err(ProblemError::LightCountMismatch {
                start: start.len(),
                goal: goal.len(),
            });
        }
        Ok(Self { start, goal })
    }

    pub fn start(&self) -> &State {
        &self.start
    }

    pub fn goal(&self) -> &State {
        &self.goal
    }

    /// Search for a shortest path using at most `max_states` transitions.
    pub fn solve(&self, max_states: usize) -> Result<Solution, ProblemError> {
        Ok(Search::new(&self.start, &self.goal)
            .max_states(max_states)
            .run()?)
    }
}
