//! Light colors and their cycling order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color of a single light.
///
/// Pushing a button advances a light one step along the fixed cycle
/// `Off -> Red -> Green -> Off`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Color {
    Off = 0,
    Red = 1,
    Green = 2,
}

/// Successor of each color, indexed by discriminant.
const NEXT: [Color; 3] = [Color::Red, Color::Green, Color::Off];

/// Canonical glyph of each color, indexed by discriminant.
const GLYPHS: [char; 3] = ['X', 'R', 'G'];

impl Color {
    /// Every color, in cycle order.
    pub const ALL: [Color; 3] = [Color::Off, Color::Red, Color::Green];

    /// The color one push further along the cycle.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fivebuttons::core::Color;
    ///
    /// assert_eq!(Color::Off.next(), Color::Red);
    /// assert_eq!(Color::Green.next(), Color::Off);
    /// ```
    pub fn next(self) -> Color {
        NEXT[self as usize]
    }

    /// One-character display glyph: `X`, `R` or `G`.
    pub fn glyph(self) -> char {
        GLYPHS[self as usize]
    }

    /// Map an input character to a color.
    ///
    /// Accepts `G`/`g` for green, `R`/`r` for red and `_`, space, `X`, `x`
    /// for off. Returns `None` for anything else.
    pub fn from_glyph(c: char) -> Option<Color> {
        match c {
            'G' | 'g' => Some(Color::Green),
            'R' | 'r' => Some(Color::Red),
            '_' | ' ' | 'X' | 'x' => Some(Color::Off),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
