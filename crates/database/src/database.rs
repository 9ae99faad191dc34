//! Database - Main entry point for sift operations.
//!
//! This module provides the `Database` struct which owns the table registry and
//! runs queries against it with an optional per-query timeout.

use crate::config::Config;
use crate::error::{DatabaseError, Result};
use crate::watchdog::Watchdog;
use parking_lot::RwLock;
use sift_core::schema::Table;
use sift_core::CancelFlag;
use sift_format::Formatter;
use sift_query::executor::execute_statement;
use sift_query::QueryError;
use sift_storage::TableCache;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// The main database interface.
///
/// Provides methods for:
/// - Registering tables (directly or from CSV with a YAML descriptor)
/// - Dropping and listing tables
/// - Executing queries, optionally rendered through a `Formatter`
///
/// The registry lock is held only while a table handle is fetched, inserted or
/// removed, never while a query runs.
pub struct Database {
    tables: RwLock<TableCache>,
    config: Config,
}

impl Database {
    /// Creates a new database instance.
    pub fn new(config: Config) -> Self {
        Self {
            tables: RwLock::new(TableCache::new()),
            config,
        }
    }

    /// Returns the configuration this database was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Registers a table under its own name.
    pub fn register_table(&self, table: Table) -> Result<Arc<Table>> {
        let table = self.tables.write().load(table)?;
        info!(
            table = %table.name(),
            rows = table.row_count(),
            columns = table.column_count(),
            "table has been loaded"
        );
        Ok(table)
    }

    /// Loads a CSV file described by a YAML descriptor and registers it.
    pub fn load_csv(
        &self,
        csv_path: impl AsRef<Path>,
        descriptor_path: impl AsRef<Path>,
    ) -> Result<Arc<Table>> {
        let table = sift_loader::load_table(csv_path, descriptor_path)?;
        self.register_table(table)
    }

    /// Drops a table from the database.
    pub fn drop_table(&self, name: &str) -> Result<()> {
        self.tables.write().drop_table(name)?;
        info!(table = name, "table has been dropped");
        Ok(())
    }

    /// Gets a shared handle to a table.
    pub fn table(&self, name: &str) -> Result<Arc<Table>> {
        Ok(self.tables.read().get(name)?)
    }

    /// Returns all table names in ascending order.
    pub fn table_names(&self) -> Vec<String> {
        self.tables
            .read()
            .table_names()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Returns the number of tables.
    pub fn table_count(&self) -> usize {
        self.tables.read().table_count()
    }

    /// Executes a query under the configured timeout.
    pub fn execute(&self, query: &str) -> Result<Table> {
        self.execute_with(query, &CancelFlag::new())
    }

    /// Executes a query under the configured timeout, also observing a
    /// caller-supplied cancellation flag.
    ///
    /// A failed query leaves the registry untouched.
    pub fn execute_with(&self, query: &str, cancel: &CancelFlag) -> Result<Table> {
        self.with_deadline(query, cancel, |cancel| self.run_logged(query, cancel))
    }

    /// Executes a query and renders the result, both under the configured timeout.
    pub fn execute_formatted<F: Formatter + ?Sized>(&self, query: &str, formatter: &F) -> Result<String> {
        self.execute_formatted_with(query, formatter, &CancelFlag::new())
    }

    /// Like [`execute_formatted`](Self::execute_formatted), observing `cancel` while the
    /// query runs and while its result is rendered.
    pub fn execute_formatted_with<F: Formatter + ?Sized>(
        &self,
        query: &str,
        formatter: &F,
        cancel: &CancelFlag,
    ) -> Result<String> {
        self.with_deadline(query, cancel, |cancel| {
            let table = self.run_logged(query, cancel)?;
            formatter
                .format(&table, cancel)
                .map_err(DatabaseError::Format)
        })
    }

    fn run_logged(&self, query: &str, cancel: &CancelFlag) -> Result<Table> {
        let start = Instant::now();
        let result = self.run_query(query, cancel);
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(table) => info!(
                query,
                table = %table.name(),
                rows = table.row_count(),
                elapsed_ms,
                "query has been executed"
            ),
            Err(err) => warn!(query, elapsed_ms, error = %err, "query failed"),
        }
        result
    }

    fn run_query(&self, query: &str, cancel: &CancelFlag) -> Result<Table> {
        let statement = sift_query::parse(query)?;
        let table = self
            .tables
            .read()
            .get(&statement.table)
            .map_err(QueryError::Source)?;
        Ok(execute_statement(&statement, &table, cancel)?)
    }

    /// Runs `f` with a child of `interrupt` that a watchdog also raises once the
    /// configured timeout elapses. A cancellation caused by the watchdog is reported
    /// as `DatabaseError::Timeout`; one caused by `interrupt` is passed through.
    fn with_deadline<T>(
        &self,
        query: &str,
        interrupt: &CancelFlag,
        f: impl FnOnce(&CancelFlag) -> Result<T>,
    ) -> Result<T> {
        let cancel = interrupt.child();
        let Some(timeout) = self.config.query_timeout() else {
            return f(&cancel);
        };

        let watchdog = Watchdog::spawn(timeout, cancel.clone())?;
        let result = f(&cancel);
        let fired = watchdog.finish();

        match result {
            Err(err) if fired && err.is_cancellation() => {
                warn!(
                    query,
                    timeout_ms = timeout.as_millis() as u64,
                    "query has been cancelled by timeout"
                );
                Err(DatabaseError::Timeout(timeout))
            }
            other => other,
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
