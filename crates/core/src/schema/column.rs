//! Column storage for sift tables.

use super::field::Field;
use crate::value::Value;
use alloc::vec::Vec;

/// An ordered sequence of values for one field.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    field: Field,
    values: Vec<Value>,
}

impl Column {
    /// Creates a column from its field declaration and values.
    pub fn new(field: Field, values: Vec<Value>) -> Self {
        Self { field, values }
    }

    /// Returns the field declaration.
    #[inline]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Returns the field name.
    #[inline]
    pub fn name(&self) -> &str {
        self.field.name()
    }

    /// Returns the values in row order.
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns the value at a row index.
    #[inline]
    pub fn get(&self, row: usize) -> Option<&Value> {
        self.values.get(row)
    }

    /// Returns the number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DataType;
    use alloc::vec;

    #[test]
    fn test_column_accessors() {
        let col = Column::new(
            Field::new("age", DataType::Number),
            vec![Value::Number(20.0), Value::Number(31.0)],
        );
        assert_eq!(col.name(), "age");
        assert_eq!(col.len(), 2);
        assert!(!col.is_empty());
        assert_eq!(col.get(1), Some(&Value::Number(31.0)));
        assert_eq!(col.get(2), None);
    }
}
