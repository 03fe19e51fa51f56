//! Error types for grid construction and lookup.

use crate::MAX_SPAN;
use std::error::Error;
use std::fmt;

/// Errors arising from requesting a grid or addressing a cell in one.
///
/// A failed request has no side effects: nothing is built or cached, so
/// the caller may retry with corrected arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The requested span is outside `[1, max]`.
    SpanOutOfRange {
        /// The offending span.
        span: usize,
        /// Largest span accepted.
        max: usize,
    },
    /// A 1-based `(row, column)` pair does not address a cell of the grid.
    CellOutOfRange {
        /// The requested row.
        row: usize,
        /// The requested column.
        column: usize,
        /// Span of the grid that was addressed.
        span: usize,
    },
    /// A flat cell index is not below the grid's cell count.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of cells in the grid.
        count: usize,
    },
}

impl GridError {
    /// Build a [`GridError::SpanOutOfRange`] against [`MAX_SPAN`].
    pub const fn span_out_of_range(span: usize) -> Self {
        Self::SpanOutOfRange {
            span,
            max: MAX_SPAN,
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpanOutOfRange { span, max } => {
                write!(f, "span {span} out of range: expected [1, {max}]")
            }
            Self::CellOutOfRange { row, column, span } => {
                write!(
                    f,
                    "cell ({row}, {column}) out of range for span {span}: expected [1, {span}] x [1, {span}]"
                )
            }
            Self::IndexOutOfRange { index, count } => {
                write!(f, "cell index {index} out of range: grid has {count} cells")
            }
        }
    }
}

impl Error for GridError {}
