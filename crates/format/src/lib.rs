//! Sift Format - Text rendering of result tables.
//!
//! # Example
//!
//! ```rust
//! use sift_core::schema::{Column, Field, Table};
//! use sift_core::{CancelFlag, DataType};
//! use sift_format::{BoxFormatter, Formatter};
//!
//! let table = Table::new(
//!     "sales",
//!     vec![Column::new(
//!         Field::new("Region", DataType::String),
//!         vec!["Africa".into(), "USA".into()],
//!     )],
//! )
//! .unwrap();
//!
//! let text = BoxFormatter::new().format(&table, &CancelFlag::new()).unwrap();
//! assert!(text.starts_with("┌────────┐\n│ REGION │"));
//! ```

mod boxed;

pub use boxed::BoxFormatter;

use sift_core::schema::Table;
use sift_core::{CancelFlag, Result};

/// Renders a table as text.
pub trait Formatter {
    /// Renders `table`, checking `cancel` once per row.
    ///
    /// Fails with `Error::Cancelled` instead of returning partial output.
    fn format(&self, table: &Table, cancel: &CancelFlag) -> Result<String>;
}
