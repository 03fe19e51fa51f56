//! Adjacency graphs for square Go boards.
//!
//! This crate builds, once per board size, the graph board logic walks
//! for liberty counting, group analysis, and move legality: every
//! intersection with its orthogonal [neighbors](Cell::neighbors) and
//! diagonal [corners](Cell::corners).
//!
//! # Caching
//!
//! Grids are memoized in a [`GridCache`]. The process-wide cache behind
//! [`grid()`] hands out `&'static Grid` references, so the same span always
//! yields the same grid and callers may key downstream caches on it.
//!
//! ```
//! let nine = goban_grid::grid(9).unwrap();
//! assert_eq!(nine.count(), 81);
//! assert!(std::ptr::eq(nine, goban_grid::grid(9).unwrap()));
//! assert!(goban_grid::grid(0).is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod cell;
pub mod grid;

#[cfg(test)]
pub(crate) mod compliance;

pub use cache::{global, grid, warm_all, GridCache};
pub use cell::{Cell, Links};
pub use grid::Grid;

pub use goban_core::{CellIndex, GridError, MAX_SPAN};
