//! Errors raised while building or transforming states.

use thiserror::Error;

/// Errors that can occur when parsing a state or pushing a button.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// A ring needs at least three lights
    #[error("State must be at least 3 characters, got {count}")]
    TooFewLights { count: usize },

    /// Input contained a character that is not a light color
    #[error("Invalid light color: {0}; must be green (Gg), red (Rr), or off (_Xx )")]
    InvalidColorCharacter(char),

    /// Button index outside `0..lights`
    #[error("Button {button} out of range 0..{lights}")]
    ButtonOutOfRange { button: usize, lights: usize },
}
