//! Search failure types.

use crate::core::State;
use thiserror::Error;

/// Reasons a search can end without a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Frontier exhausted: the goal is outside the start's reachable component
    #[error("Can't reach {goal} from {start}")]
    NoPathExists { start: State, goal: State },

    /// Transition budget spent before the search could conclude
    #[error("Can't reach {goal} from {start} within {max_states} iterations")]
    SearchBudgetExceeded {
        start: State,
        goal: State,
        max_states: usize,
    },
}
