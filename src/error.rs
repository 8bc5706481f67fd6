use std::error::Error;
use std::fmt;

/// Errors produced by matrix construction and reshaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Nested-row construction received a row whose length differs from
    /// the first row's.
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Reshape dimensions whose product does not match the buffer length.
    ReshapeSizeMismatch {
        rows: usize,
        cols: usize,
        len: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::ShapeMismatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} columns, expected {}",
                row, found, expected
            ),
            MatrixError::ReshapeSizeMismatch { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
        }
    }
}

impl Error for MatrixError {}
