//! Error types for smatrix

use thiserror::Error;

/// Result type alias using smatrix's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by matrix operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Row or column index not smaller than the matrix size
    #[error("Index {index} out of range for matrix of size {size}")]
    OutOfRange {
        /// The offending index
        index: usize,
        /// Side length of the matrix
        size: usize,
    },

    /// Operands do not have compatible sizes
    #[error("Size mismatch: {lhs} vs {rhs}")]
    SizeMismatch {
        /// Left-hand side size
        lhs: usize,
        /// Right-hand side size
        rhs: usize,
    },

    /// Literal input is jagged or not square
    #[error("Invalid shape: {reason}")]
    InvalidShape {
        /// What is wrong with the input
        reason: String,
    },

    /// Illegal resize or an operation undefined for this size
    #[error("Invalid size {requested} for matrix of size {size}: {reason}")]
    InvalidSize {
        /// Requested size
        requested: usize,
        /// Current size
        size: usize,
        /// Why the request is rejected
        reason: &'static str,
    },

    /// Determinant equals zero
    #[error("Singular matrix")]
    SingularMatrix,
}
