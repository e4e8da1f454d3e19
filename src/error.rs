//! Error types for grid construction and generation requests

use std::fmt;

/// Main error type for all tileloom operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Element count does not match the requested grid dimensions
    SizeMismatch {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
        /// Number of elements actually supplied
        actual: usize,
    },

    /// Cell address outside the grid bounds
    IndexOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Grid row count
        rows: usize,
        /// Grid column count
        cols: usize,
    },

    /// Flat index outside the grid's cell range
    FlatIndexOutOfRange {
        /// Requested flat index
        index: usize,
        /// Total cell count
        len: usize,
    },

    /// Nested rows of unequal length supplied to grid construction
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// Window dimensions must be positive odd integers
    InvalidWindowSize {
        /// Requested window row count
        win_rows: usize,
        /// Requested window column count
        win_cols: usize,
    },

    /// Unrecognized generation mode name
    UnknownMode {
        /// The name that failed to parse
        mode: String,
    },

    /// Elementwise operation on grids of different shapes
    ShapeMismatch {
        /// Shape of the left operand (rows, cols)
        left: (usize, usize),
        /// Shape of the right operand (rows, cols)
        right: (usize, usize),
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { rows, cols, actual } => {
                write!(
                    f,
                    "Element count {actual} does not fill a {rows}x{cols} grid ({} cells)",
                    rows * cols
                )
            }
            Self::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Cell ({row}, {col}) is outside the {rows}x{cols} grid"
                )
            }
            Self::FlatIndexOutOfRange { index, len } => {
                write!(f, "Flat index {index} is outside the cell range 0..{len}")
            }
            Self::RaggedRows {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Row {row} has length {actual}, expected {expected} to match the first row"
                )
            }
            Self::InvalidWindowSize { win_rows, win_cols } => {
                write!(
                    f,
                    "Window size {win_rows}x{win_cols} is invalid; dimensions must be positive odd integers"
                )
            }
            Self::UnknownMode { mode } => {
                write!(f, "Unknown generation mode '{mode}'")
            }
            Self::ShapeMismatch { left, right } => {
                write!(
                    f,
                    "Grid shapes {}x{} and {}x{} do not match",
                    left.0, left.1, right.0, right.1
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// Convenience type alias for tileloom results
pub type Result<T> = std::result::Result<T, Error>;
