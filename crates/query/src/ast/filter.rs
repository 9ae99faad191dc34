//! Filter tree for `where` clauses.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use sift_core::{CompareOp, Value};

/// A node of a `where` filter tree.
///
/// The node set is closed; the evaluator matches on it exhaustively.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterNode {
    /// `field op literal`
    Compare {
        field: String,
        op: CompareOp,
        literal: Value,
    },
    /// Rows accepted by both sides. `left` is evaluated first.
    And {
        left: Box<FilterNode>,
        right: Box<FilterNode>,
    },
    /// Rows accepted by either side.
    Or {
        left: Box<FilterNode>,
        right: Box<FilterNode>,
    },
    /// Accepts every row; used when there is no `where` clause.
    Dummy,
}

impl FilterNode {
    pub fn compare(field: impl Into<String>, op: CompareOp, literal: impl Into<Value>) -> Self {
        FilterNode::Compare {
            field: field.into(),
            op,
            literal: literal.into(),
        }
    }

    pub fn and(left: FilterNode, right: FilterNode) -> Self {
        FilterNode::And {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn or(left: FilterNode, right: FilterNode) -> Self {
        FilterNode::Or {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Returns true if this node accepts every row.
    #[inline]
    pub fn is_dummy(&self) -> bool {
        matches!(self, FilterNode::Dummy)
    }
}

impl fmt::Display for FilterNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterNode::Compare { field, op, literal } => match literal {
                Value::String(s) => write!(f, "{} {} '{}'", field, op, s),
                Value::Number(n) => write!(f, "{} {} {}", field, op, n),
            },
            FilterNode::And { left, right } => write!(f, "({} and {})", left, right),
            FilterNode::Or { left, right } => write!(f, "({} or {})", left, right),
            FilterNode::Dummy => f.write_str("true"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_filter_display() {
        let filter = FilterNode::and(
            FilterNode::compare("age", CompareOp::Gt, 18),
            FilterNode::or(
                FilterNode::compare("fullname", CompareOp::Eq, "Mike"),
                FilterNode::Dummy,
            ),
        );
        assert_eq!(filter.to_string(), "(age > 18 and (fullname = 'Mike' or true))");
    }

    #[test]
    fn test_is_dummy() {
        assert!(FilterNode::Dummy.is_dummy());
        assert!(!FilterNode::compare("a", CompareOp::Eq, 1).is_dummy());
    }
}
