//! Error-handling module for the crate

use thiserror::Error;

use crate::datatypes::ColumnTypeName;

/// Error for values that cannot be turned into a value of some column type,
/// e.g. malformed text handed to a parser or a number outside the range of an integer column.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("Failed to convert value `{value}` to type {target}{}", reason_suffix(.reason))]
pub struct ConversionError {
    /// Textual representation of the offending value
    pub value: String,
    /// Type the value should have been converted to
    pub target: ColumnTypeName,
    /// Optional explanation
    pub reason: Option<String>,
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(reason) => format!(": {reason}"),
        None => String::new(),
    }
}

impl ConversionError {
    /// Create a new [ConversionError] without further explanation.
    pub fn new(value: impl ToString, target: ColumnTypeName) -> Self {
        Self {
            value: value.to_string(),
            target,
            reason: None,
        }
    }

    /// Attach an explanation to this error.
    pub fn with_reason(mut self, reason: impl ToString) -> Self {
        self.reason = Some(reason.to_string());
        self
    }
}

/// Error-Collection for all the possible Errors occurring in this crate
#[derive(Error, Clone, Debug, PartialEq)]
pub enum Error {
    /// A row index outside of `[0, size)` was used
    #[error("Index {index} is out of bounds for column \"{column}\" of size {size}")]
    IndexOutOfBounds {
        /// Name of the column
        column: String,
        /// Requested index
        index: usize,
        /// Size of the column
        size: usize,
    },
    /// A value that should have been removed is not contained in the column
    #[error("Value `{value}` was not found in column \"{column}\"")]
    NotFound {
        /// Name of the column
        column: String,
        /// Value that was searched for
        value: String,
    },
    /// Elementwise operation on columns of different size
    #[error("Columns \"{left}\" ({left_size} rows) and \"{right}\" ({right_size} rows) differ in size")]
    SizeMismatch {
        /// Name of the left operand
        left: String,
        /// Size of the left operand
        left_size: usize,
        /// Name of the right operand
        right: String,
        /// Size of the right operand
        right_size: usize,
    },
    /// An argument was outside of its allowed range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A value could not be converted into the requested type
    #[error(transparent)]
    ConversionFailure(#[from] ConversionError),
    /// A container was asked for a column it does not hold
    #[error("Column \"{0}\" does not exist")]
    ColumnNotFound(String),
    /// A column was accessed as a type it does not have
    #[error("Column \"{column}\" has type {found}, but {expected} was requested")]
    TypeMismatch {
        /// Name of the column
        column: String,
        /// Requested type
        expected: ColumnTypeName,
        /// Actual type of the column
        found: ColumnTypeName,
    },
}
