//! Reconstructed solution paths.

use crate::core::State;
use std::fmt;

/// One entry of a path: the button pushed and the state it produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// Button pushed to reach `state`, `None` for the starting state
    pub button: Option<usize>,
    pub state: State,
}

impl Step {
    /// The button number, or a single blank for the starting state.
    pub fn printable_button(&self) -> String {
        match self.button {
            Some(button) => button.to_string(),
            None => " ".to_string(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.printable_button(), self.state)
    }
}

/// Root-first sequence of steps from a start state to an end state.
///
/// Always holds at least the starting step. A path of one step is the
/// zero-move solution returned when start and goal coincide.
///
/// # Example
///
/// ```rust
/// use fivebuttons::core::State;
/// use fivebuttons::search;
///
/// let start = State::parse("XXX").unwrap();
/// let goal = State::parse("RRR").unwrap();
/// let path = search(&start, &goal, 10).unwrap();
///
/// assert_eq!(path.printable_path(), vec![" : XXX", "0: RRR"]);
/// assert_eq!(path.moves(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    /// Build a path from root-first steps. `steps` must not be empty.
    pub(crate) fn new(steps: Vec<Step>) -> Self {
        debug_assert!(!steps.is_empty(), "a path always has a starting step");
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The state the path starts from.
    pub fn start(&self) -> &State {
        &self.steps[0].state
    }

    /// The state the path ends at.
    pub fn end(&self) -> &State {
        &self.steps[self.steps.len() - 1].state
    }

    /// Number of button pushes.
    pub fn moves(&self) -> usize {
        self.steps.len() - 1
    }

    /// Buttons pushed, in order.
    pub fn buttons(&self) -> Vec<usize> {
        self.steps.iter().filter_map(|step| step.button).collect()
    }

    /// One `"<button>: <state>"` line per step, starting state first.
    pub fn printable_path(&self) -> Vec<String> {
        self.steps.iter().map(Step::to_string).collect()
    }
}
