//! Goban: board geometry for Go and Go-like games.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Goban sub-crates. For most users, adding `goban` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use goban::prelude::*;
//!
//! let board = grid(19).unwrap();
//! assert_eq!(board.count(), 361);
//!
//! // Tengen sits in the middle with four neighbours and four corners.
//! let tengen = board.get(10, 10).unwrap();
//! assert_eq!(tengen.neighbors().len(), 4);
//! assert_eq!(tengen.corners().len(), 4);
//!
//! // A stone on the first line has three liberties on an empty board.
//! let colors = vec![Color::Empty; board.count()];
//! let edge = board.get(1, 10).unwrap();
//! let liberties = board
//!     .neighbors_of(edge)
//!     .filter(|n| colors[n.index().get()].is_liberty())
//!     .count();
//! assert_eq!(liberties, 3);
//!
//! assert_eq!(grid(MAX_SPAN + 1), Err(GridError::span_out_of_range(MAX_SPAN + 1)));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`goban-core`).
///
/// Stone [`types::Color`], [`types::CellIndex`], [`types::GridError`], and
/// the size limits such as [`types::MAX_SPAN`].
pub use goban_core as types;

/// Adjacency graphs and their cache (`goban-grid`).
///
/// Provides [`geometry::Grid`], [`geometry::Cell`], [`geometry::GridCache`],
/// and the process-wide [`geometry::grid()`] entry point.
pub use goban_grid as geometry;

/// Common imports for typical Goban usage.
///
/// ```rust
/// use goban::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use goban_core::{CellIndex, Color, GridError, MAX_SPAN};

    // Geometry
    pub use goban_grid::{grid, warm_all, Cell, Grid, GridCache};
}
