//! Cache management for sift tables.
//!
//! This module provides the `TableCache` struct which maps table names to loaded tables.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use sift_core::schema::Table;
use sift_core::{Error, Result};
use sift_query::executor::DataSource;

/// Registry of loaded tables, keyed by name.
#[derive(Default)]
pub struct TableCache {
    /// Table name → table mapping.
    tables: BTreeMap<String, Arc<Table>>,
}

impl TableCache {
    /// Creates a new empty table cache.
    pub fn new() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    /// Registers a table under its own name.
    ///
    /// Fails with `InvalidName` for a blank name and `TableExists` if the name is taken;
    /// the cache is unchanged on failure.
    pub fn load(&mut self, table: Table) -> Result<Arc<Table>> {
        let name = table.name();
        if name.trim().is_empty() {
            return Err(Error::invalid_name(name));
        }
        if self.tables.contains_key(name) {
            return Err(Error::table_exists(name));
        }
        let name = name.to_string();
        let table = Arc::new(table);
        self.tables.insert(name, Arc::clone(&table));
        Ok(table)
    }

    /// Drops a table from the cache.
    pub fn drop_table(&mut self, name: &str) -> Result<Arc<Table>> {
        if name.trim().is_empty() {
            return Err(Error::invalid_name(name));
        }
        self.tables
            .remove(name)
            .ok_or_else(|| Error::table_not_found(name))
    }

    /// Gets a shared handle to a table.
    pub fn get(&self, name: &str) -> Result<Arc<Table>> {
        self.tables
            .get(name)
            .cloned()
            .ok_or_else(|| Error::table_not_found(name))
    }

    /// Checks if a table exists.
    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Returns the number of tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Returns all table names in ascending order.
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.keys().map(|s| s.as_str()).collect()
    }

    /// Removes every table.
    pub fn clear(&mut self) {
        self.tables.clear();
    }
}

impl DataSource for TableCache {
    fn table(&self, name: &str) -> Result<Arc<Table>> {
        self.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use sift_core::schema::{Column, Field};
    use sift_core::{CancelFlag, DataType};
    use sift_query::executor::QueryRunner;

    fn test_table(name: &str) -> Table {
        Table::new(
            name,
            vec![Column::new(
                Field::new("id", DataType::Number),
                vec![1.0.into(), 2.0.into()],
            )],
        )
        .unwrap()
    }

    #[test]
    fn test_cache_load_table() {
        let mut cache = TableCache::new();
        let loaded = cache.load(test_table("users")).unwrap();
        assert_eq!(loaded.row_count(), 2);
        assert!(cache.has_table("users"));
        assert_eq!(cache.table_count(), 1);
    }

    #[test]
    fn test_cache_load_duplicate_table() {
        let mut cache = TableCache::new();
        cache.load(test_table("users")).unwrap();
        let result = cache.load(test_table("users"));
        assert_eq!(result.unwrap_err(), Error::table_exists("users"));
        assert_eq!(cache.table_count(), 1);
    }

    #[test]
    fn test_cache_load_blank_name() {
        let mut cache = TableCache::new();
        let result = cache.load(test_table("  "));
        assert_eq!(result.unwrap_err(), Error::invalid_name("  "));
        assert_eq!(cache.table_count(), 0);
    }

    #[test]
    fn test_cache_drop_table() {
        let mut cache = TableCache::new();
        cache.load(test_table("users")).unwrap();
        let dropped = cache.drop_table("users").unwrap();
        assert_eq!(dropped.name(), "users");
        assert!(!cache.has_table("users"));
    }

    #[test]
    fn test_cache_drop_nonexistent_table() {
        let mut cache = TableCache::new();
        assert_eq!(
            cache.drop_table("nonexistent").unwrap_err(),
            Error::table_not_found("nonexistent")
        );
        assert_eq!(cache.drop_table("").unwrap_err(), Error::invalid_name(""));
    }

    #[test]
    fn test_cache_get_table() {
        let mut cache = TableCache::new();
        cache.load(test_table("users")).unwrap();

        assert!(cache.get("users").is_ok());
        assert_eq!(
            cache.get("nonexistent").unwrap_err(),
            Error::table_not_found("nonexistent")
        );
    }

    #[test]
    fn test_dropped_table_outlives_handle() {
        let mut cache = TableCache::new();
        cache.load(test_table("users")).unwrap();
        let handle = cache.get("users").unwrap();
        cache.drop_table("users").unwrap();
        assert_eq!(handle.row_count(), 2);
    }

    #[test]
    fn test_cache_table_names_sorted() {
        let mut cache = TableCache::new();
        cache.load(test_table("users")).unwrap();
        cache.load(test_table("orders")).unwrap();
        cache.load(test_table("accounts")).unwrap();
        assert_eq!(cache.table_names(), vec!["accounts", "orders", "users"]);

        cache.clear();
        assert!(cache.table_names().is_empty());
    }

    #[test]
    fn test_cache_as_data_source() {
        let mut cache = TableCache::new();
        cache.load(test_table("users")).unwrap();
        let result = QueryRunner::new(&cache)
            .run("select id from users where id > 1;", &CancelFlag::new())
            .unwrap();
        assert_eq!(result.row_count(), 1);
    }
}
