//! Query runner - resolves a statement's table and executes filter and projection.

use super::filter::FilterExecutor;
use super::project::ProjectExecutor;
use crate::ast::SelectStatement;
use crate::error::{QueryError, QueryResult};
use crate::parser::parse;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use sift_core::schema::Table;
use sift_core::{CancelFlag, Error};

/// Source of the tables a query may reference.
pub trait DataSource {
    /// Returns the named table, or `Error::TableNotFound`.
    fn table(&self, name: &str) -> Result<Arc<Table>, Error>;
}

/// Executes parsed statements against a data source.
pub struct QueryRunner<'a, D: DataSource> {
    data_source: &'a D,
}

impl<'a, D: DataSource> QueryRunner<'a, D> {
    /// Creates a new query runner with the given data source.
    pub fn new(data_source: &'a D) -> Self {
        Self { data_source }
    }

    /// Parses and executes query text.
    pub fn run(&self, query: &str, cancel: &CancelFlag) -> QueryResult<Table> {
        let statement = parse(query)?;
        self.execute(&statement, cancel)
    }

    /// Executes a parsed statement.
    pub fn execute(&self, statement: &SelectStatement, cancel: &CancelFlag) -> QueryResult<Table> {
        let table = self
            .data_source
            .table(&statement.table)
            .map_err(QueryError::Source)?;
        execute_statement(statement, &table, cancel)
    }
}

/// Executes a statement against an already resolved table.
///
/// Rows are filtered first; the requested fields are then projected from the
/// filtered table. The source table is never modified.
pub fn execute_statement(
    statement: &SelectStatement,
    table: &Table,
    cancel: &CancelFlag,
) -> QueryResult<Table> {
    let rows = FilterExecutor::new(&statement.filter)
        .execute(table, cancel)
        .map_err(QueryError::evaluation)?;

    let fields = statement.projection().map(<[String]>::to_vec);
    ProjectExecutor::new(fields)
        .execute(table, &rows, cancel)
        .map_err(QueryError::projection)
}

/// A simple in-memory data source for testing and embedding.
#[derive(Default)]
pub struct InMemoryDataSource {
    tables: BTreeMap<String, Arc<Table>>,
}

impl InMemoryDataSource {
    /// Creates a new empty in-memory data source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table under its own name, replacing any previous table of that name.
    pub fn add_table(&mut self, table: Table) {
        self.tables
            .insert(String::from(table.name()), Arc::new(table));
    }

    /// Returns the registered table names in ascending order.
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }
}

impl DataSource for InMemoryDataSource {
    fn table(&self, name: &str) -> Result<Arc<Table>, Error> {
        self.tables
            .get(name)
            .cloned()
            .ok_or_else(|| Error::table_not_found(name))
    }
}
