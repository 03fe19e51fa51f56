//! Strongly-typed cell identifiers.

use std::fmt;

/// Position of a cell within its grid, in row-major order (0-based).
///
/// For a grid of span `s`, the cell at 1-based `(row, column)` has index
/// `(row - 1) * s + (column - 1)`. Indices are only meaningful relative to
/// the grid they came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex(pub u16);

impl CellIndex {
    /// The index as a `usize`, for slice addressing.
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for CellIndex {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

impl From<CellIndex> for usize {
    fn from(v: CellIndex) -> Self {
        v.get()
    }
}
