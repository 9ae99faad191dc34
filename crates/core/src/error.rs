//! Error types for sift tables and values.

use crate::types::{CompareOp, DataType};
use alloc::string::String;
use core::fmt;

/// Result type alias for sift core operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for table and value operations.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// A literal's type disagrees with the column value it is compared to.
    TypeMismatch {
        expected: DataType,
        got: DataType,
    },
    /// The operator is not defined for the value's type.
    UnsupportedOperator {
        op: CompareOp,
        data_type: DataType,
    },
    /// Column not found.
    ColumnNotFound {
        table: String,
        column: String,
    },
    /// Row index outside of the table.
    RowOutOfRange {
        table: String,
        index: usize,
        row_count: usize,
    },
    /// Invalid table definition.
    InvalidSchema {
        message: String,
    },
    /// Table not found.
    TableNotFound {
        name: String,
    },
    /// Table already registered.
    TableExists {
        name: String,
    },
    /// Blank or otherwise unusable table name.
    InvalidName {
        name: String,
    },
    /// The operation observed a raised cancellation flag.
    Cancelled,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TypeMismatch { expected, got } => {
                write!(f, "Type mismatch: expected {}, got {}", expected, got)
            }
            Error::UnsupportedOperator { op, data_type } => {
                write!(f, "Operator '{}' is not supported for type {}", op, data_type)
            }
            Error::ColumnNotFound { table, column } => {
                write!(f, "Column '{}' not found in table '{}'", column, table)
            }
            Error::RowOutOfRange {
                table,
                index,
                row_count,
            } => write!(
                f,
                "Row {} out of range for table '{}' with {} rows",
                index, table, row_count
            ),
            Error::InvalidSchema { message } => {
                write!(f, "Invalid schema: {}", message)
            }
            Error::TableNotFound { name } => {
                write!(f, "Table '{}' doesn't exist", name)
            }
            Error::TableExists { name } => {
                write!(f, "Table '{}' already exists", name)
            }
            Error::InvalidName { name } => {
                write!(f, "Invalid table name: '{}'", name)
            }
            Error::Cancelled => f.write_str("Operation cancelled"),
        }
    }
}

impl Error {
    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: DataType, got: DataType) -> Self {
        Error::TypeMismatch { expected, got }
    }

    /// Creates an unsupported operator error.
    pub fn unsupported_operator(op: CompareOp, data_type: DataType) -> Self {
        Error::UnsupportedOperator { op, data_type }
    }

    /// Creates a column not found error.
    pub fn column_not_found(table: impl Into<String>, column: impl Into<String>) -> Self {
        Error::ColumnNotFound {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Creates a row out of range error.
    pub fn row_out_of_range(table: impl Into<String>, index: usize, row_count: usize) -> Self {
        Error::RowOutOfRange {
            table: table.into(),
            index,
            row_count,
        }
    }

    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Error::InvalidSchema {
            message: message.into(),
        }
    }

    /// Creates a table not found error.
    pub fn table_not_found(name: impl Into<String>) -> Self {
        Error::TableNotFound { name: name.into() }
    }

    /// Creates a table exists error.
    pub fn table_exists(name: impl Into<String>) -> Self {
        Error::TableExists { name: name.into() }
    }

    /// Creates an invalid name error.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Error::InvalidName { name: name.into() }
    }

    /// Returns true if this error reports a cancelled operation.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        let err = Error::type_mismatch(DataType::Number, DataType::String);
        assert_eq!(err.to_string(), "Type mismatch: expected number, got string");

        let err = Error::unsupported_operator(CompareOp::Gt, DataType::String);
        assert!(err.to_string().contains("'>'"));

        let err = Error::column_not_found("people", "salary");
        assert!(err.to_string().contains("salary"));
        assert!(err.to_string().contains("people"));

        let err = Error::table_not_found("sales");
        assert!(err.to_string().contains("sales"));
    }

    #[test]
    fn test_error_constructors() {
        let err = Error::row_out_of_range("t", 7, 3);
        match err {
            Error::RowOutOfRange { index, row_count, .. } => {
                assert_eq!(index, 7);
                assert_eq!(row_count, 3);
            }
            _ => panic!("Wrong error type"),
        }
        assert!(Error::Cancelled.is_cancelled());
        assert!(!Error::table_exists("t").is_cancelled());
    }
}
