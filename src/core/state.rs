//! Ring-of-lights puzzle state.
//!
//! A `State` is an immutable assignment of colors to every light in the
//! ring. Pushing a button never mutates a state; it returns a new one.

use super::color::Color;
use super::error::StateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Smallest ring for which the neighbor-wrapping push rule is meaningful.
pub const MIN_LIGHTS: usize = 3;

/// Colors of all lights in the ring, in order.
///
/// Equality and hashing are element-wise, so states can key the visited
/// set of a search. Serializes as its glyph string (`"XRG"`), and
/// deserialization re-validates the input.
///
/// # Example
///
/// ```rust
/// use fivebuttons::core::State;
///
/// let state = State::parse("XXX").unwrap();
/// let pushed = state.push(0).unwrap();
/// assert_eq!(pushed.printable_state(), "RRR");
/// assert_eq!(state.printable_state(), "XXX"); // Original unchanged
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct State {
    lights: Vec<Color>,
}

impl State {
    /// Parse a state from its glyph representation.
    ///
    /// Fails with [`StateError::TooFewLights`] for inputs shorter than
    /// three characters, and with [`StateError::InvalidColorCharacter`]
    /// naming the first character that is not a light color.
    pub fn parse(text: &str) -> Result<Self, StateError> {
        let count = text.chars().count();
        if count < MIN_LIGHTS {
            return Err(StateError::TooFewLights { count });
        }
        let lights = text
            .chars()
            .map(|c| Color::from_glyph(c).ok_or(StateError::InvalidColorCharacter(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { lights })
    }

    /// Number of lights, which is also the number of buttons.
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Always `false` for a parsed state; provided alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Colors in ring order.
    pub fn lights(&self) -> &[Color] {
        &self.lights
    }

    /// Valid button indices, `0..len`.
    pub fn buttons(&self) -> Range<usize> {
        0..self.lights.len()
    }

    /// Return the state after pushing `button`.
    ///
    /// The light at `button` and its two ring neighbors each advance one
    /// color. Button 0's left neighbor is the last light, and the last
    /// button's right neighbor is light 0.
    pub fn push(&self, button: usize) -> Result<Self, StateError> {
        let n = self.lights.len();
        if button >= n {
            return Err(StateError::ButtonOutOfRange { button, lights: n });
        }
        Ok(self.step(button))
    }

    /// `push` without the range check, for buttons taken from `buttons()`.
    pub(crate) fn step(&self, button: usize) -> Self {
        let n = self.lights.len();
        let mut lights = self.lights.clone();
        for index in [(button + n - 1) % n, button, (button + 1) % n] {
            lights[index] = lights[index].next();
        }
        Self { lights }
    }

    /// Concatenated glyphs, like `"GGXXR"`.
    pub fn printable_state(&self) -> String {
        self.lights.iter().map(|c| c.glyph()).collect()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.printable_state())
    }
}

impl FromStr for State {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for State {
    type Error = StateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<State> for String {
    fn from(state: State) -> Self {
        state.printable_state()
    }
}
