use thiserror::Error;

/// Simplified `Result` using [`MatrixError`](crate::MatrixError) as error type
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Error variants from matrix construction, element access and arithmetic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A matrix needs at least one row and one column
    #[error("invalid dimension {rows}x{cols}: rows and cols must be positive")]
    InvalidDimension { rows: usize, cols: usize },
    /// The index lies outside the matrix
    #[error("index ({row}, {col}) out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// The operand shapes do not agree for the requested operator
    #[error("dimension mismatch in {op}: {lhs:?} and {rhs:?}")]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// An entry of the result does not fit the element type
    #[error("arithmetic overflow in {op} at ({row}, {col})")]
    Overflow {
        op: &'static str,
        row: usize,
        col: usize,
    },
}
