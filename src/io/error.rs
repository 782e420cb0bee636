//! Error types for tiling generation and export

use crate::spatial::domino::{DominoId, Facing};
use crate::spatial::geometry::Cell;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all algorithm operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// A domino was placed or advanced onto a cell another domino covers
    ///
    /// The shuffling phases guarantee disjoint placements, so this always
    /// indicates a phase was skipped or applied out of order.
    Conflict {
        /// Cell both dominoes would cover
        cell: Cell,
        /// Domino already covering the cell
        occupant: DominoId,
        /// Facing of the domino being placed
        facing: Facing,
    },

    /// A structural assumption of the shuffling algorithm was broken
    ///
    /// Covers voids that do not split into 2×2 blocks, queue entries that
    /// no longer match the store, cells outside the tracked region, and any
    /// call on an engine already stopped by an earlier violation.
    InvariantViolation {
        /// Operation that detected the violation
        operation: &'static str,
        /// Description of what was found
        reason: String,
    },

    /// Caller-supplied parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or save an image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict {
                cell,
                occupant,
                facing,
            } => {
                write!(
                    f,
                    "Cell {cell} is already covered by domino {occupant} (placing {facing} domino)"
                )
            }
            Self::InvariantViolation { operation, reason } => {
                write!(f, "Invariant violated during {operation}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
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

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for algorithm results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl AlgorithmError {
    /// Whether the error reports a broken tiling rather than bad input or I/O
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Conflict { .. } | Self::InvariantViolation { .. }
        )
    }
}

impl From<image::ImageError> for AlgorithmError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invariant violation error
pub fn invariant_violation(operation: &'static str, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::InvariantViolation {
        operation,
        reason: reason.to_string(),
    }
}
