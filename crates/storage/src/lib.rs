//! Sift Storage - Table registry for the sift in-memory query engine.
//!
//! `TableCache` owns the loaded tables by name. Tables are immutable and handed
//! out as `Arc<Table>`, so a query keeps its table alive even if the name is
//! dropped while it runs.
//!
//! # Example
//!
//! ```rust
//! use sift_core::schema::{Column, Field, Table};
//! use sift_core::DataType;
//! use sift_storage::TableCache;
//!
//! let mut cache = TableCache::new();
//! let table = Table::new(
//!     "sales",
//!     vec![Column::new(Field::new("region", DataType::String), vec!["USA".into()])],
//! )
//! .unwrap();
//! cache.load(table).unwrap();
//!
//! assert_eq!(cache.table_names(), vec!["sales"]);
//! assert_eq!(cache.get("sales").unwrap().row_count(), 1);
//! ```

#![no_std]

extern crate alloc;

pub mod cache;

pub use cache::TableCache;
