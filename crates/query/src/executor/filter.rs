//! Filter executor.

use super::set_ops::{intersect_sorted, union_sorted};
use crate::ast::FilterNode;
use alloc::vec::Vec;
use sift_core::schema::Table;
use sift_core::{CancelFlag, CompareOp, Result, Value};

/// Filter executor - selects the rows of a table accepted by a filter tree.
pub struct FilterExecutor<'a> {
    filter: &'a FilterNode,
}

impl<'a> FilterExecutor<'a> {
    /// Creates a new filter executor.
    pub fn new(filter: &'a FilterNode) -> Self {
        Self { filter }
    }

    /// Executes the filter, returning matching row indexes in ascending order.
    pub fn execute(&self, table: &Table, cancel: &CancelFlag) -> Result<Vec<usize>> {
        evaluate(self.filter, table, cancel)
    }
}

/// Evaluates a filter tree against a table.
///
/// The result is sorted ascending and duplicate-free. `And` evaluates `left` first
/// and skips `right` when `left` matches nothing; `Or` always evaluates both sides.
pub fn evaluate(node: &FilterNode, table: &Table, cancel: &CancelFlag) -> Result<Vec<usize>> {
    match node {
        FilterNode::Dummy => Ok((0..table.row_count()).collect()),
        FilterNode::Compare { field, op, literal } => scan(table, field, *op, literal, cancel),
        FilterNode::And { left, right } => {
            let left = evaluate(left, table, cancel)?;
            if left.is_empty() {
                return Ok(left);
            }
            let right = evaluate(right, table, cancel)?;
            if right.is_empty() {
                return Ok(right);
            }
            Ok(intersect_sorted(&left, &right))
        }
        FilterNode::Or { left, right } => {
            let left = evaluate(left, table, cancel)?;
            let right = evaluate(right, table, cancel)?;
            if left.is_empty() {
                return Ok(right);
            }
            if right.is_empty() {
                return Ok(left);
            }
            Ok(union_sorted(&left, &right))
        }
    }
}

fn scan(
    table: &Table,
    field: &str,
    op: CompareOp,
    literal: &Value,
    cancel: &CancelFlag,
) -> Result<Vec<usize>> {
    let column = table.get_column(field)?;
    let mut matches = Vec::new();
    for (index, value) in column.values().iter().enumerate() {
        cancel.check()?;
        if value.compare(literal, op)? {
            matches.push(index);
        }
    }
    Ok(matches)
}
