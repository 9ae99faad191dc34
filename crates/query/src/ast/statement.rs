//! Parsed `select` statement.

use super::filter::FilterNode;
use alloc::string::String;
use alloc::vec::Vec;

/// A parsed `select <fields>|* from <table> [where <filter>]` statement.
///
/// `all_fields` and a non-empty `fields` list never occur together.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectStatement {
    /// Requested fields in query order; empty when `all_fields` is set.
    pub fields: Vec<String>,
    /// Set by `select *`.
    pub all_fields: bool,
    /// Name of the queried table.
    pub table: String,
    /// Row filter; `FilterNode::Dummy` without a `where` clause.
    pub filter: FilterNode,
}

impl SelectStatement {
    /// Returns the field subset to project, or None when every field is selected.
    pub fn projection(&self) -> Option<&[String]> {
        if self.all_fields {
            None
        } else {
            Some(&self.fields)
        }
    }
}
