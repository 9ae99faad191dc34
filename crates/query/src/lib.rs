//! Sift Query - Query language and execution for the sift in-memory query engine.
//!
//! This crate turns query text of the form
//! `select <fields>|* from <table> [where <condition>];` into a result table:
//!
//! - `lexer`: Tokenizer with a precedence reducer that emits `where` clauses in postfix order
//! - `ast`: Filter trees and parsed select statements
//! - `parser`: Statement sequencing rules and postfix-to-tree construction
//! - `executor`: Filter evaluation, sorted set operations, projection and the `DataSource` seam
//!
//! # Example
//!
//! ```rust
//! use sift_core::schema::{Column, Field, Table};
//! use sift_core::{CancelFlag, DataType};
//! use sift_query::executor::{InMemoryDataSource, QueryRunner};
//!
//! let mut source = InMemoryDataSource::new();
//! source.add_table(
//!     Table::new(
//!         "sales",
//!         vec![Column::new(
//!             Field::new("region", DataType::String),
//!             vec!["Africa".into(), "USA".into(), "England".into()],
//!         )],
//!     )
//!     .unwrap(),
//! );
//!
//! let result = QueryRunner::new(&source)
//!     .run("select * from sales where region = 'USA';", &CancelFlag::new())
//!     .unwrap();
//! assert_eq!(result.row_count(), 1);
//! ```

#![no_std]

extern crate alloc;

pub mod ast;
mod error;
pub mod executor;
pub mod lexer;
pub mod parser;

pub use error::{QueryError, QueryResult};
pub use parser::parse;
