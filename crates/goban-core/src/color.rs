//! Stone colors occupying board intersections.

use std::fmt;
use std::ops::Not;

/// What occupies a single intersection.
///
/// The set is closed: an intersection is either empty or holds a stone
/// of one of the two players. There is no "invalid" variant, so
/// [`invert`](Color::invert) is total.
///
/// # Examples
///
/// ```
/// use goban_core::Color;
///
/// assert!(Color::Empty.is_liberty());
/// assert_eq!(Color::Black.invert(), Color::White);
/// assert_eq!(!Color::White, Color::Black);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Color {
    /// No stone.
    #[default]
    Empty,
    /// A stone of the first player.
    Black,
    /// A stone of the second player.
    White,
}

impl Color {
    /// All colors, in declaration order.
    pub const ALL: [Color; 3] = [Color::Empty, Color::Black, Color::White];

    /// Returns `true` if this intersection counts as a liberty, i.e. is empty.
    pub const fn is_liberty(self) -> bool {
        matches!(self, Color::Empty)
    }

    /// Returns `true` if a stone occupies the intersection.
    pub const fn is_stone(self) -> bool {
        !self.is_liberty()
    }

    /// Swap the two player colors. `Empty` maps to itself.
    pub const fn invert(self) -> Color {
        match self {
            Color::Empty => Color::Empty,
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Lowercase name of the color.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Empty => "empty",
            Color::Black => "black",
            Color::White => "white",
        }
    }
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        self.invert()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
