//! Error types for solver and probability operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum SolverError {
    /// Matrix shape violates a structural precondition
    ///
    /// Raised when the coefficient block is not square or an augmented
    /// matrix is not exactly one column wider than it is tall.
    DimensionMismatch {
        /// Number of rows in the offending matrix
        rows: usize,
        /// Number of columns in the offending matrix
        cols: usize,
        /// Explanation of the violated shape requirement
        reason: &'static str,
    },

    /// Cholesky factorization hit a negative radicand
    ///
    /// The square root argument on the factor diagonal went negative,
    /// which proves the coefficient block is not positive-definite even
    /// if the probabilistic classifier approved it.
    NotPositiveDefinite {
        /// Row of the factor diagonal where the radicand went negative
        row: usize,
    },

    /// A zero pivot or zero triangular diagonal was encountered
    SingularSystem {
        /// Index of the zero diagonal entry
        index: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A system file could not be parsed into an augmented matrix
    MatrixParse {
        /// Path to the system file
        path: PathBuf,
        /// One-based line number where parsing failed
        line: usize,
        /// Description of the parse failure
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { rows, cols, reason } => {
                write!(f, "Dimension mismatch for {rows}x{cols} matrix: {reason}")
            }
            Self::NotPositiveDefinite { row } => {
                write!(
                    f,
                    "Matrix is not positive-definite: negative radicand at row {row}"
                )
            }
            Self::SingularSystem { index } => {
                write!(f, "Singular system: zero pivot at index {index}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MatrixParse { path, line, reason } => {
                write!(
                    f,
                    "Failed to parse '{}' at line {line}: {reason}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
