//! Field declaration for sift tables.

use crate::types::DataType;
use alloc::string::String;

/// A named, typed column declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    /// Field name, unique within a table.
    name: String,
    /// Declared type of every value in the column.
    data_type: DataType,
}

impl Field {
    /// Creates a new field declaration.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }

    /// Returns the field name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared data type.
    #[inline]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }
}
