//! Fivebuttons: shortest button sequences for the tricolor ring puzzle
//!
//! A row of N lights wraps around into a ring. Each light is off, red or
//! green, and pushing button `i` advances light `i` and both of its ring
//! neighbors one step along `Off -> Red -> Green -> Off`. Given a start and
//! a goal configuration, this crate finds a shortest sequence of pushes
//! turning one into the other.
//!
//! # Core Concepts
//!
//! - **State**: immutable ring of colors with a pure `push` transition
//! - **Trace / Path**: how each state was reached, and the reconstructed solution
//! - **Search**: breadth-first traversal bounded by a transition budget
//! - **Problem**: validated start/goal pair
//!
//! # Example
//!
//! ```rust
//! use fivebuttons::{Problem, DEFAULT_MAX_STATES};
//!
//! let problem = Problem::parse("XXXXX", "XRRRX").unwrap();
//! let solution = problem.solve(DEFAULT_MAX_STATES).unwrap();
//!
//! assert_eq!(
//!     solution.path.printable_path(),
//!     vec![" : XXXXX", "2: XRRRX"]
//! );
//! ```

pub mod core;
pub mod problem;
pub mod report;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Color, State, StateError};
pub use problem::{Problem, ProblemError};
pub use report::{ReportError, SolutionReport};
pub use search::{search, Path, Search, SearchError, Solution, DEFAULT_MAX_STATES};
