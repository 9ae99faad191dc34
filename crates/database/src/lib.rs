//! Sift Database - Embeddable facade over the sift query engine.
//!
//! This crate ties the engine crates together:
//!
//! - `Database`: Table registry behind a lock, query execution and rendering
//! - `Config`: Application configuration (query timeout, log destinations)
//! - `DatabaseError`: Every failure a caller of `Database` can observe
//!
//! # Example
//!
//! ```rust
//! use sift_core::schema::{Column, Field, Table};
//! use sift_core::DataType;
//! use sift_database::{Config, Database};
//!
//! let db = Database::new(Config::default().with_query_timeout(1_000));
//! db.register_table(
//!     Table::new(
//!         "people",
//!         vec![Column::new(
//!             Field::new("age", DataType::Number),
//!             vec![17.0.into(), 42.0.into()],
//!         )],
//!     )
//!     .unwrap(),
//! )
//! .unwrap();
//!
//! let adults = db.execute("select age from people where age > 18;").unwrap();
//! assert_eq!(adults.row_count(), 1);
//! ```

mod config;
mod database;
mod error;
mod watchdog;

pub use config::{Config, ConfigError};
pub use database::Database;
pub use error::{DatabaseError, Result};
