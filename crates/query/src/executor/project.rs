//! Project executor.

use alloc::string::String;
use alloc::vec::Vec;
use sift_core::schema::Table;
use sift_core::{CancelFlag, Result};

/// Project executor - restricts a table to matched rows and requested fields.
pub struct ProjectExecutor {
    /// Field names to keep; `None` keeps every column.
    fields: Option<Vec<String>>,
}

impl ProjectExecutor {
    /// Creates a new project executor.
    pub fn new(fields: Option<Vec<String>>) -> Self {
        Self { fields }
    }

    /// Creates an executor that keeps every column.
    pub fn all() -> Self {
        Self { fields: None }
    }

    /// Copies the rows at `rows`, then narrows the copy to the requested fields.
    pub fn execute(&self, table: &Table, rows: &[usize], cancel: &CancelFlag) -> Result<Table> {
        let filtered = table.project_by_indexes(rows, cancel)?;
        match &self.fields {
            Some(fields) => filtered.project_by_fields(fields),
            None => Ok(filtered),
        }
    }
}
