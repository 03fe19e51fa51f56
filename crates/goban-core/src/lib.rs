//! Core value types for Goban board geometry.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the grid builder and the board logic that
//! consumes it: stone colors, cell indices, size limits, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod error;
pub mod id;

pub use color::Color;
pub use error::GridError;
pub use id::CellIndex;

/// Largest supported board edge length, in intersections.
///
/// 25 is the upper bound the Go Text Protocol admits for a board size.
/// It bounds both the cell count of any one grid and the number of
/// cache slots.
pub const MAX_SPAN: usize = 25;

/// Maximum number of orthogonal neighbors any cell can have.
pub const MAX_NEIGHBORS: usize = 4;

/// Maximum number of diagonal corners any cell can have.
pub const MAX_CORNERS: usize = 4;

// Every cell index of the largest grid must fit in a `CellIndex`.
const _: () = assert!(MAX_SPAN * MAX_SPAN <= u16::MAX as usize);
