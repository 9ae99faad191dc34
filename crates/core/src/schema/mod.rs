//! Schema module for sift tables.
//!
//! This module contains the immutable columnar table model: field declarations,
//! value columns, and tables with their row and column projections.

mod column;
mod field;
mod table;

pub use column::Column;
pub use field::Field;
pub use table::Table;
