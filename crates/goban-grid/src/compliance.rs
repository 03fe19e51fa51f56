//! Grid invariant test helpers.
//!
//! These functions verify that a built [`Grid`] satisfies the structural
//! contract board logic relies on. Reused by the unit tests in every
//! module of this crate.

use crate::cell::Cell;
use crate::grid::Grid;
use goban_core::{MAX_CORNERS, MAX_NEIGHBORS};
use indexmap::IndexSet;

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

fn in_bounds(cell: &Cell, (dr, dc): (isize, isize)) -> bool {
    let span = cell.span() as isize;
    let r = cell.row() as isize + dr;
    let c = cell.column() as isize + dc;
    (1..=span).contains(&r) && (1..=span).contains(&c)
}

/// Number of orthogonal directions from `cell` that stay on the board.
pub fn expected_neighbors(cell: &Cell) -> usize {
    ORTHOGONAL.iter().filter(|&&d| in_bounds(cell, d)).count()
}

/// Number of diagonal directions from `cell` that stay on the board.
pub fn expected_corners(cell: &Cell) -> usize {
    DIAGONAL.iter().filter(|&&d| in_bounds(cell, d)).count()
}

/// Assert `count == span * span`.
pub fn assert_count(grid: &Grid) {
    assert_eq!(
        grid.count(),
        grid.span() * grid.span(),
        "span {} grid has {} cells",
        grid.span(),
        grid.count()
    );
}

/// Assert every cell's index, row, column, and span agree with its position.
pub fn assert_positions_consistent(grid: &Grid) {
    let span = grid.span();
    for (i, cell) in grid.iter().enumerate() {
        assert_eq!(cell.index().get(), i, "cell {cell} stored at {i}");
        assert_eq!(cell.row(), i / span + 1, "row of index {i}");
        assert_eq!(cell.column(), i % span + 1, "column of index {i}");
        assert_eq!(cell.span(), span, "span of cell {cell}");
    }
}

/// Assert that `b in neighbors(a)` implies `a in neighbors(b)`, likewise for corners.
pub fn assert_links_symmetric(grid: &Grid) {
    for cell in grid {
        for other in grid.neighbors_of(cell) {
            assert!(
                other.neighbors().contains(&cell.index()),
                "neighbour symmetry violated: {other} in N({cell}) but {cell} not in N({other})"
            );
        }
        for other in grid.corners_of(cell) {
            assert!(
                other.corners().contains(&cell.index()),
                "corner symmetry violated: {other} in C({cell}) but {cell} not in C({other})"
            );
        }
    }
}

/// Assert no cell links to itself.
pub fn assert_no_self_links(grid: &Grid) {
    for cell in grid {
        assert!(
            !cell.neighbors().contains(&cell.index()),
            "{cell} lists itself as a neighbour"
        );
        assert!(
            !cell.corners().contains(&cell.index()),
            "{cell} lists itself as a corner"
        );
    }
}

/// Assert no link list contains the same cell twice, and neighbours and
/// corners never overlap.
pub fn assert_no_duplicate_links(grid: &Grid) {
    for cell in grid {
        let neighbors: IndexSet<_> = cell.neighbors().iter().collect();
        assert_eq!(
            neighbors.len(),
            cell.neighbors().len(),
            "{cell} has duplicate neighbours"
        );
        let corners: IndexSet<_> = cell.corners().iter().collect();
        assert_eq!(
            corners.len(),
            cell.corners().len(),
            "{cell} has duplicate corners"
        );
        assert!(
            neighbors.is_disjoint(&corners),
            "{cell} lists a cell as both neighbour and corner"
        );
    }
}

/// Assert degrees equal the number of in-bounds directions and stay within limits.
pub fn assert_degrees_match_position(grid: &Grid) {
    for cell in grid {
        assert!(cell.neighbors().len() <= MAX_NEIGHBORS);
        assert!(cell.corners().len() <= MAX_CORNERS);
        assert_eq!(
            cell.neighbors().len(),
            expected_neighbors(cell),
            "neighbour count of {cell} in span {}",
            grid.span()
        );
        assert_eq!(
            cell.corners().len(),
            expected_corners(cell),
            "corner count of {cell} in span {}",
            grid.span()
        );
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance(grid: &Grid) {
    assert_count(grid);
    assert_positions_consistent(grid);
    assert_links_symmetric(grid);
    assert_no_self_links(grid);
    assert_no_duplicate_links(grid);
    assert_degrees_match_position(grid);
}
