//! The complete adjacency structure for one board size.

use crate::cell::Cell;
use goban_core::{CellIndex, GridError};
use std::collections::VecDeque;
use std::slice;

/// Every intersection of a `span x span` board, fully linked.
///
/// Cells are stored in row-major order, so `cells()[i].index() == i`.
/// A `Grid` is immutable once built; obtain one through
/// [`grid()`](crate::grid()) or a [`GridCache`](crate::GridCache).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    span: usize,
    cells: Box<[Cell]>,
}

impl Grid {
    /// Build the grid for `span` in a single forward pass.
    ///
    /// Each cell links only to cells after it in row-major order (right,
    /// up-right, down-right, down) and every link is recorded on both
    /// endpoints, so the remaining four directions are filled in by the
    /// cells that come earlier. No adjacency is visited twice.
    ///
    /// `span` must already be validated against `[1, MAX_SPAN]`.
    pub(crate) fn build(span: usize) -> Self {
        debug_assert!(span >= 1);
        let mut cells: Vec<Cell> = (0..span * span).map(|i| Cell::new(span, i)).collect();

        let mut i = 0;
        for row in 1..=span {
            let has_below = row < span;
            for column in 1..=span {
                if column < span {
                    link_neighbors(&mut cells, i, i + 1);
                    if row > 1 {
                        link_corners(&mut cells, i, i + 1 - span);
                    }
                    if has_below {
                        link_corners(&mut cells, i, i + 1 + span);
                    }
                }
                if has_below {
                    link_neighbors(&mut cells, i, i + span);
                }
                i += 1;
            }
        }

        Self {
            span,
            cells: cells.into_boxed_slice(),
        }
    }

    /// Edge length of the board, in intersections.
    pub fn span(&self) -> usize {
        self.span
    }

    /// Number of cells, always `span * span`.
    pub fn count(&self) -> usize {
        self.cells.len()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over cells in row-major order.
    pub fn iter(&self) -> slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// The cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= count()`. Indices are only meaningful for the
    /// grid that issued them: an index from a smaller grid resolves to a
    /// different intersection here. Use [`try_cell`](Self::try_cell) for
    /// unchecked input.
    pub fn cell(&self, index: CellIndex) -> &Cell {
        &self.cells[index.get()]
    }

    /// The cell at a flat row-major `index`, if it exists.
    pub fn try_cell(&self, index: usize) -> Result<&Cell, GridError> {
        self.cells.get(index).ok_or(GridError::IndexOutOfRange {
            index,
            count: self.count(),
        })
    }

    /// Returns `true` if 1-based `(row, column)` addresses a cell.
    pub fn contains(&self, row: usize, column: usize) -> bool {
        (1..=self.span).contains(&row) && (1..=self.span).contains(&column)
    }

    /// Row-major index of 1-based `(row, column)`, if it is on the board.
    pub fn index_of(&self, row: usize, column: usize) -> Option<CellIndex> {
        if !self.contains(row, column) {
            return None;
        }
        Some(self.cells[(row - 1) * self.span + (column - 1)].index())
    }

    /// The cell at 1-based `(row, column)`.
    ///
    /// # Examples
    ///
    /// ```
    /// let g = goban_grid::grid(3).unwrap();
    /// let center = g.get(2, 2).unwrap();
    /// assert_eq!(center.neighbors().len(), 4);
    /// assert!(g.get(4, 1).is_err());
    /// ```
    pub fn get(&self, row: usize, column: usize) -> Result<&Cell, GridError> {
        self.index_of(row, column)
            .map(|index| self.cell(index))
            .ok_or(GridError::CellOutOfRange {
                row,
                column,
                span: self.span,
            })
    }

    /// Orthogonal neighbors of `cell`, resolved to cells of this grid.
    pub fn neighbors_of<'a>(&'a self, cell: &'a Cell) -> impl Iterator<Item = &'a Cell> + 'a {
        cell.neighbors().iter().map(move |&i| self.cell(i))
    }

    /// Diagonal corners of `cell`, resolved to cells of this grid.
    pub fn corners_of<'a>(&'a self, cell: &'a Cell) -> impl Iterator<Item = &'a Cell> + 'a {
        cell.corners().iter().map(move |&i| self.cell(i))
    }

    /// Orthogonally connected region around `start`.
    ///
    /// Breadth-first search over neighbor links, restricted to cells for
    /// which `include` returns `true`. Returns the region in row-major
    /// order; empty if `start` itself is excluded.
    ///
    /// # Panics
    ///
    /// Panics if `start >= count()`, as [`cell`](Self::cell) does.
    ///
    /// # Examples
    ///
    /// ```
    /// use goban_grid::CellIndex;
    ///
    /// let g = goban_grid::grid(3).unwrap();
    /// // Everything except the middle column.
    /// let left = g.flood(CellIndex(0), |c| c.column() != 2);
    /// assert_eq!(left, vec![CellIndex(0), CellIndex(3), CellIndex(6)]);
    /// ```
    pub fn flood(&self, start: CellIndex, include: impl Fn(&Cell) -> bool) -> Vec<CellIndex> {
        if !include(self.cell(start)) {
            return Vec::new();
        }

        let mut visited = vec![false; self.count()];
        let mut queue = VecDeque::new();
        let mut region = Vec::new();

        visited[start.get()] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            region.push(current);
            for next in self.neighbors_of(self.cell(current)) {
                let i = next.index();
                if !visited[i.get()] && include(next) {
                    visited[i.get()] = true;
                    queue.push_back(i);
                }
            }
        }

        region.sort_unstable();
        region
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn link_neighbors(cells: &mut [Cell], a: usize, b: usize) {
    let (ia, ib) = (cells[a].index(), cells[b].index());
    cells[a].push_neighbor(ib);
    cells[b].push_neighbor(ia);
}

fn link_corners(cells: &mut [Cell], a: usize, b: usize) {
    let (ia, ib) = (cells[a].index(), cells[b].index());
    cells[a].push_corner(ib);
    cells[b].push_corner(ia);
}
