//! A single intersection and its links to adjacent intersections.

use goban_core::{CellIndex, MAX_CORNERS, MAX_NEIGHBORS};
use smallvec::SmallVec;
use std::fmt;

/// Inline list of links from one cell to others in the same grid.
///
/// Neither neighbors nor corners can exceed four, so the list never
/// spills to the heap.
pub type Links = SmallVec<[CellIndex; MAX_NEIGHBORS]>;

// Corners share the list type, so they must fit the same inline capacity.
const _: () = assert!(MAX_CORNERS <= MAX_NEIGHBORS);

/// One intersection of a `span x span` grid.
///
/// Rows and columns are 1-based. Links are stored as [`CellIndex`] values
/// into the owning [`Grid`](crate::Grid); resolve them with
/// [`Grid::cell`](crate::Grid::cell) or walk them directly with
/// [`Grid::neighbors_of`](crate::Grid::neighbors_of).
///
/// Links are mutual: if `a` lists `b` as a neighbor (or corner), `b` lists
/// `a` the same way. A cell never links to itself and never lists the same
/// cell twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    span: usize,
    row: usize,
    column: usize,
    index: CellIndex,
    neighbors: Links,
    corners: Links,
}

impl Cell {
    /// Create an unlinked cell at row-major position `index`.
    pub(crate) fn new(span: usize, index: usize) -> Self {
        Self {
            span,
            row: index / span + 1,
            column: index % span + 1,
            // Bounded by MAX_SPAN^2, checked at compile time in goban-core.
            index: CellIndex(index as u16),
            neighbors: Links::new(),
            corners: Links::new(),
        }
    }

    /// Span of the grid this cell belongs to.
    pub fn span(&self) -> usize {
        self.span
    }

    /// 1-based row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// 1-based column.
    pub fn column(&self) -> usize {
        self.column
    }

    /// 0-based row-major position within the grid.
    pub fn index(&self) -> CellIndex {
        self.index
    }

    /// Orthogonally adjacent cells, in link order.
    pub fn neighbors(&self) -> &[CellIndex] {
        &self.neighbors
    }

    /// Diagonally adjacent cells, in link order.
    pub fn corners(&self) -> &[CellIndex] {
        &self.corners
    }

    /// Returns `true` if the cell lies on the outer edge of the board.
    pub fn is_edge(&self) -> bool {
        self.row == 1 || self.column == 1 || self.row == self.span || self.column == self.span
    }

    pub(crate) fn push_neighbor(&mut self, other: CellIndex) {
        debug_assert!(other != self.index && !self.neighbors.contains(&other));
        self.neighbors.push(other);
    }

    pub(crate) fn push_corner(&mut self, other: CellIndex) {
        debug_assert!(other != self.index && !self.corners.contains(&other));
        self.corners.push(other);
    }
}

/// Formats as zero-padded `column-row`, e.g. `03-04` for row 4, column 3.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.column, self.row)
    }
}
