//! Error handling for signal record construction
//!
//! Every failure is detected synchronously at construction time and is
//! unrecoverable for that attempt. Query operations on a valid record
//! cannot fail.

use core::fmt;

/// Result type alias for record operations
pub type RecordResult<T> = Result<T, RecordError>;

/// Validation errors raised while constructing a [`SignalRecord`](crate::SignalRecord)
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RecordError {
    /// Sample data not reducible to one dimension after squeezing
    Shape {
        /// Shape remaining after unit axes were removed
        shape: Vec<usize>,
    },

    /// Signal has zero samples
    EmptySignal,

    /// Sampling rate is zero, negative, NaN or infinite
    InvalidSamplingRate {
        /// Offending rate in Hz
        rate: f64,
    },

    /// At least one sample is NaN or infinite
    NonFiniteSample {
        /// Index of the first offending sample
        index: usize,
        /// Offending sample value
        value: f64,
    },

    /// Nested sample input with rows of differing length
    RaggedInput {
        /// Index of the first row that disagrees
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// Declared shape disagrees with the number of values supplied
    ShapeMismatch {
        /// Declared shape
        shape: Vec<usize>,
        /// Number of values supplied
        values: usize,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Shape { shape } => {
                write!(
                    f,
                    "signal must be one-dimensional after normalization, got shape {}",
                    format_shape(shape)
                )
            }
            RecordError::EmptySignal => write!(f, "signal is empty"),
            RecordError::InvalidSamplingRate { rate } => {
                write!(f, "sampling rate must be a positive number of Hz, got {}", rate)
            }
            RecordError::NonFiniteSample { index, value } => {
                write!(f, "signal contains a non-finite sample at index {}: {}", index, value)
            }
            RecordError::RaggedInput { row, expected, actual } => {
                write!(
                    f,
                    "ragged sample input: row {} has {} values, expected {}",
                    row, actual, expected
                )
            }
            RecordError::ShapeMismatch { shape, values } => {
                write!(
                    f,
                    "declared shape {} does not hold {} values",
                    format_shape(shape),
                    values
                )
            }
        }
    }
}

impl std::error::Error for RecordError {}

/// Render a shape as a tuple, `(2, 100)` style, with `(40,)` for rank one
fn format_shape(dims: &[usize]) -> String {
    match dims {
        [] => "()".to_string(),
        [n] => format!("({},)", n),
        _ => {
            let inner: Vec<String> = dims.iter().map(|d| d.to_string()).collect();
            format!("({})", inner.join(", "))
        }
    }
}
