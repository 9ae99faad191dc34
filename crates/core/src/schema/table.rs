//! Table definition for sift.
//!
//! A `Table` is an immutable, named collection of equal-length typed columns. Every
//! transformation (row or column projection) builds a new table value; the name to
//! column-index map is rebuilt on each construction and never mutated afterwards.

use super::column::Column;
use super::field::Field;
use crate::cancel::CancelFlag;
use crate::error::{Error, Result};
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::{HashMap, HashSet};

/// An immutable columnar table.
#[derive(Clone, Debug)]
pub struct Table {
    /// Table name.
    name: String,
    /// Columns in declaration order.
    columns: Vec<Column>,
    /// Field name → position in `columns`.
    column_index: HashMap<String, usize>,
}

impl Table {
    /// Creates a table, validating that field names are unique, that all columns have
    /// the same length and that every value matches its field's declared type.
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Result<Self> {
        let name = name.into();
        let row_count = columns.first().map(Column::len).unwrap_or(0);

        for column in &columns {
            if column.len() != row_count {
                return Err(Error::invalid_schema(format!(
                    "Column '{}' has {} values, expected {}",
                    column.name(),
                    column.len(),
                    row_count
                )));
            }
            let declared = column.field().data_type();
            if let Some(row) = column.values().iter().position(|v| v.data_type() != declared) {
                return Err(Error::invalid_schema(format!(
                    "Column '{}' row {} is not of declared type {}",
                    column.name(),
                    row,
                    declared
                )));
            }
        }

        let table = Self::from_columns(name, columns);
        if table.column_index.len() != table.columns.len() {
            let mut seen = HashSet::new();
            let duplicate = table
                .columns
                .iter()
                .map(Column::name)
                .find(|n| !seen.insert(*n))
                .unwrap_or_default();
            return Err(Error::invalid_schema(format!(
                "Duplicate field name: {}",
                duplicate
            )));
        }
        Ok(table)
    }

    /// Builds a table from columns already known to be consistent.
    fn from_columns(name: String, columns: Vec<Column>) -> Self {
        let column_index = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name().to_string(), i))
            .collect();
        Self {
            name,
            columns,
            column_index,
        }
    }

    /// Returns the table name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the columns in declaration order.
    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the field declarations in column order.
    pub fn fields(&self) -> Vec<&Field> {
        self.columns.iter().map(Column::field).collect()
    }

    /// Returns the number of columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the number of rows. A table without columns has no rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    /// Returns the position of a column by field name.
    #[inline]
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.column_index.get(name).copied()
    }

    /// Gets a column by field name.
    pub fn get_column(&self, name: &str) -> Result<&Column> {
        self.column_position(name)
            .map(|i| &self.columns[i])
            .ok_or_else(|| Error::column_not_found(self.name.as_str(), name))
    }

    /// Builds a new table holding the rows at `indices`, in exactly that order.
    ///
    /// Duplicated and unordered indices are allowed. The cancellation flag is checked
    /// once per copied row.
    pub fn project_by_indexes(&self, indices: &[usize], cancel: &CancelFlag) -> Result<Table> {
        let row_count = self.row_count();
        let mut values: Vec<Vec<_>> = self
            .columns
            .iter()
            .map(|_| Vec::with_capacity(indices.len()))
            .collect();

        for &index in indices {
            cancel.check()?;
            if index >= row_count {
                return Err(Error::row_out_of_range(self.name.as_str(), index, row_count));
            }
            for (column, out) in self.columns.iter().zip(values.iter_mut()) {
                out.push(column.values()[index].clone());
            }
        }

        let columns = self
            .columns
            .iter()
            .zip(values)
            .map(|(column, values)| Column::new(column.field().clone(), values))
            .collect();
        Ok(Self::from_columns(self.name.clone(), columns))
    }

    /// Builds a new table restricted to the named fields.
    ///
    /// Columns keep the table's original left-to-right order regardless of the order of
    /// `names`. The first requested name that the table lacks is reported as an error.
    /// An empty request yields a table without columns.
    pub fn project_by_fields<S: AsRef<str>>(&self, names: &[S]) -> Result<Table> {
        let mut requested = HashSet::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if !self.column_index.contains_key(name) {
                return Err(Error::column_not_found(self.name.as_str(), name));
            }
            requested.insert(name);
        }

        let columns = self
            .columns
            .iter()
            .filter(|c| requested.contains(c.name()))
            .cloned()
            .collect();
        Ok(Self::from_columns(self.name.clone(), columns))
    }
}

impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.columns == other.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DataType;
    use crate::value::Value;
    use alloc::vec;

    fn people() -> Table {
        Table::new(
            "people",
            vec![
                Column::new(
                    Field::new("age", DataType::Number),
                    vec![Value::Number(17.0), Value::Number(42.0), Value::Number(30.0)],
                ),
                Column::new(
                    Field::new("fullname", DataType::String),
                    vec!["Ann Lee".into(), "Mike Smith".into(), "Bob Ray".into()],
                ),
                Column::new(
                    Field::new("salary", DataType::Number),
                    vec![Value::Number(0.0), Value::Number(15000.99), Value::Number(9000.0)],
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_table_new() {
        let table = people();
        assert_eq!(table.name(), "people");
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.column_position("fullname"), Some(1));
        assert_eq!(table.fields()[2].name(), "salary");
    }

    #[test]
    fn test_table_duplicate_field() {
        let result = Table::new(
            "t",
            vec![
                Column::new(Field::new("a", DataType::Number), vec![]),
                Column::new(Field::new("a", DataType::String), vec![]),
            ],
        );
        match result {
            Err(Error::InvalidSchema { message }) => assert!(message.contains("a")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_table_unequal_columns() {
        let result = Table::new(
            "t",
            vec![
                Column::new(Field::new("a", DataType::Number), vec![Value::Number(1.0)]),
                Column::new(Field::new("b", DataType::Number), vec![]),
            ],
        );
        assert!(matches!(result, Err(Error::InvalidSchema { .. })));
    }

    #[test]
    fn test_table_value_type_checked() {
        let result = Table::new(
            "t",
            vec![Column::new(Field::new("a", DataType::Number), vec!["x".into()])],
        );
        assert!(matches!(result, Err(Error::InvalidSchema { .. })));
    }

    #[test]
    fn test_empty_table_has_no_rows() {
        let table = Table::new("empty", vec![]).unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_get_column() {
        let table = people();
        assert_eq!(table.get_column("age").unwrap().len(), 3);
        assert_eq!(
            table.get_column("height"),
            Err(Error::column_not_found("people", "height"))
        );
    }

    #[test]
    fn test_project_by_indexes_preserves_given_order() {
        let table = people();
        let result = table.project_by_indexes(&[2, 0, 2], &CancelFlag::new()).unwrap();
        assert_eq!(result.name(), "people");
        assert_eq!(result.row_count(), 3);
        let names = result.get_column("fullname").unwrap();
        assert_eq!(names.values(), &[Value::from("Bob Ray"), "Ann Lee".into(), "Bob Ray".into()]);
        assert_eq!(result.column_position("salary"), Some(2));
    }

    #[test]
    fn test_project_by_indexes_identity() {
        let table = people();
        let all: Vec<usize> = (0..table.row_count()).collect();
        assert_eq!(table.project_by_indexes(&all, &CancelFlag::new()).unwrap(), table);
    }

    #[test]
    fn test_project_by_indexes_empty() {
        let result = people().project_by_indexes(&[], &CancelFlag::new()).unwrap();
        assert_eq!(result.row_count(), 0);
        assert_eq!(result.column_count(), 3);
    }

    #[test]
    fn test_project_by_indexes_out_of_range() {
        let result = people().project_by_indexes(&[0, 3], &CancelFlag::new());
        assert_eq!(result, Err(Error::row_out_of_range("people", 3, 3)));
    }

    #[test]
    fn test_project_by_indexes_cancelled() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        assert_eq!(people().project_by_indexes(&[0], &cancel), Err(Error::Cancelled));
    }

    #[test]
    fn test_project_by_fields_keeps_table_order() {
        let result = people().project_by_fields(&["salary", "age"]).unwrap();
        let names: Vec<&str> = result.columns().iter().map(Column::name).collect();
        assert_eq!(names, vec!["age", "salary"]);
        assert_eq!(result.row_count(), 3);
        assert_eq!(result.column_position("salary"), Some(1));
    }

    #[test]
    fn test_project_by_fields_identity() {
        let table = people();
        let result = table.project_by_fields(&["age", "fullname", "salary"]).unwrap();
        assert_eq!(result, table);
    }

    #[test]
    fn test_project_by_fields_missing() {
        let result = people().project_by_fields(&["age", "height", "weight"]);
        assert_eq!(result, Err(Error::column_not_found("people", "height")));
    }

    #[test]
    fn test_project_by_fields_empty() {
        let names: [&str; 0] = [];
        let result = people().project_by_fields(&names).unwrap();
        assert_eq!(result.column_count(), 0);
        assert_eq!(result.row_count(), 0);
    }
}
