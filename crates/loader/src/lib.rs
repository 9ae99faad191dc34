//! Sift Loader - Builds sift tables from delimited files.
//!
//! A table is described by a YAML descriptor naming the table, the field
//! separator, quoting mode and the typed fields to load:
//!
//! ```yaml
//! name: people
//! sep: ","
//! lazyQuotes: false
//! fields:
//!   - name: age
//!     type: number
//!   - name: fullname
//!     type: string
//! ```
//!
//! Only the declared fields are loaded, in declaration order; extra file columns
//! are ignored.

mod descriptor;
mod error;
mod reader;

pub use descriptor::{FieldDescriptor, TableDescriptor, TableSchema};
pub use error::{DescriptorError, LoadError, Result};
pub use reader::{load_csv, read_csv};

use sift_core::schema::Table;
use std::path::Path;

/// Loads a descriptor from `descriptor_path` and the CSV file it describes.
pub fn load_table(csv_path: impl AsRef<Path>, descriptor_path: impl AsRef<Path>) -> Result<Table> {
    let schema = TableDescriptor::from_path(descriptor_path)?.into_schema()?;
    load_csv(csv_path, &schema)
}
