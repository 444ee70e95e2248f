//! Error types for table operations.
//!
//! Only two things can fail: addressing a cell outside the grid, and
//! asking a cell for a payload variant it does not hold. Everything else
//! (construction, cloning, rendering, comparison) is total.

use thiserror::Error;

use crate::cell::CellKind;

/// Error type for all fallible table and cell operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// A cell coordinate fell outside the table's declared dimensions.
    #[error("cell ({row}, {col}) is out of bounds for a {rows}x{cols} table")]
    OutOfBounds {
        /// Requested row index.
        row: usize,
        /// Requested column index.
        col: usize,
        /// The table's row count.
        rows: usize,
        /// The table's column count.
        cols: usize,
    },

    /// A cell was accessed as a variant it does not hold.
    #[error("expected {expected} cell content, found {found}")]
    WrongKind {
        /// The variant the caller asked for.
        expected: CellKind,
        /// The variant the cell actually holds.
        found: CellKind,
    },
}
