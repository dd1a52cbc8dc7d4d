//! Error types for input collection, sorting runs, and animation export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all animation operations
#[derive(Debug)]
pub enum AnimationError {
    /// The declared value count disagrees with the number of values supplied
    InputMismatch {
        /// Count declared by the caller
        expected: usize,
        /// Number of values actually parsed
        actual: usize,
    },

    /// A token in the value list is not an integer
    InvalidValue {
        /// The offending token, trimmed
        token: String,
    },

    /// No values were supplied
    EmptyInput,

    /// The chosen procedure cannot handle the supplied values
    ///
    /// Counting sort indexes a frequency table by value, so it refuses
    /// negative values and values beyond the configured table limit.
    UnsupportedInput {
        /// Procedure that rejected the input
        procedure: &'static str,
        /// Why the input was rejected
        reason: String,
    },

    /// Merge bounds do not describe two adjacent non-empty halves
    InvalidRange {
        /// First index of the left half
        low: usize,
        /// Last index of the left half
        mid: usize,
        /// Last index of the right half
        high: usize,
        /// Length of the value sequence
        len: usize,
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

    /// A procedure addressed a bar or value that does not exist
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Number of elements available
        len: usize,
    },

    /// Failed to encode the animation
    GifExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying encoder error
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

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputMismatch { expected, actual } => {
                write!(
                    f,
                    "Invalid input: expected {expected} values but found {actual}"
                )
            }
            Self::InvalidValue { token } => {
                write!(f, "Invalid input: '{token}' is not an integer")
            }
            Self::EmptyInput => write!(f, "Invalid input: at least one value is required"),
            Self::UnsupportedInput { procedure, reason } => {
                write!(f, "Unsupported input for {procedure} sort: {reason}")
            }
            Self::InvalidRange {
                low,
                mid,
                high,
                len,
            } => {
                write!(
                    f,
                    "Invalid merge range low={low} mid={mid} high={high} for {len} values"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Index {index} is out of bounds for {len} elements")
            }
            Self::GifExport { path, source } => {
                write!(
                    f,
                    "Failed to export animation to '{}': {source}",
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

impl std::error::Error for AnimationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::GifExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for animation results
pub type Result<T> = std::result::Result<T, AnimationError>;

impl From<std::io::Error> for AnimationError {
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
) -> AnimationError {
    AnimationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an unsupported input error for the named procedure
pub fn unsupported_input(procedure: &'static str, reason: &impl ToString) -> AnimationError {
    AnimationError::UnsupportedInput {
        procedure,
        reason: reason.to_string(),
    }
}
