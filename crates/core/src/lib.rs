//! Sift Core - Core types for the sift in-memory query engine.
//!
//! This crate provides the foundational types shared by every other sift crate:
//!
//! - `DataType`: Declared column types (Number, String)
//! - `Value`: Typed scalar values with a per-type comparison contract
//! - `CompareOp`: Comparison operators understood by `Value::compare`
//! - `schema`: Immutable columnar tables (Field, Column, Table) and their projections
//! - `CancelFlag`: Cooperative cancellation checked by per-row loops
//! - `Error`: Error types for table and value operations
//!
//! # Example
//!
//! ```rust
//! use sift_core::{CancelFlag, CompareOp, DataType, Value};
//! use sift_core::schema::{Column, Field, Table};
//!
//! let table = Table::new(
//!     "people",
//!     vec![
//!         Column::new(
//!             Field::new("age", DataType::Number),
//!             vec![Value::Number(17.0), Value::Number(42.0)],
//!         ),
//!         Column::new(
//!             Field::new("fullname", DataType::String),
//!             vec![Value::from("Ann Lee"), Value::from("Mike Smith")],
//!         ),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(table.row_count(), 2);
//! assert!(Value::Number(42.0).compare(&Value::Number(18.0), CompareOp::Gt).unwrap());
//!
//! let adults = table.project_by_indexes(&[1], &CancelFlag::new()).unwrap();
//! let names = adults.project_by_fields(&["fullname"]).unwrap();
//! assert_eq!(names.column_count(), 1);
//! assert_eq!(names.columns()[0].get(0), Some(&Value::from("Mike Smith")));
//! ```

#![no_std]

extern crate alloc;

mod cancel;
mod error;
pub mod schema;
mod types;
mod value;

pub use cancel::CancelFlag;
pub use error::{Error, Result};
pub use types::{CompareOp, DataType};
pub use value::Value;
