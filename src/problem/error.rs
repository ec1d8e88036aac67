//! Problem validation errors.

use crate::core::StateError;
use crate::search::SearchError;
use thiserror::Error;

/// Errors from parsing or solving a [`Problem`](super::Problem).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemError {
    #[error(transparent)]
    InvalidState(#[from] StateError),

    #[error("Start and Goal must have the same number of lights (start has {start}, goal has {goal})")]
    LightCountMismatch { start: usize, goal: usize },

    #[error(transparent)]
    Search(#[from] SearchError),
}
