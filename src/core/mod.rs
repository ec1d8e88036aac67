//! Puzzle state model.
//!
//! This module contains the pure core of the puzzle:
//! - `Color` with its fixed cycling order
//! - `State`, an immutable ring of colors with the `push` transition
//! - `StateError` for malformed input and invalid buttons
//!
//! Nothing here performs I/O or holds shared state.

mod color;
mod error;
mod state;

pub use color::Color;
pub use error::StateError;
pub use state::{State, MIN_LIGHTS};
