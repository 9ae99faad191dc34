//! Data type definitions for sift tables.
//!
//! This module defines the column types a table can declare and the comparison
//! operators a filter can apply to their values.

use core::fmt;

/// Declared type of a table column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    /// 64-bit floating point number
    Number,
    /// UTF-8 string
    String,
}

impl DataType {
    /// Parses the lower-case type word used by table descriptors (`number`, `string`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "number" => Some(DataType::Number),
            "string" => Some(DataType::String),
            _ => None,
        }
    }

    /// Returns the descriptor word for this type.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Number => "number",
            DataType::String => "string",
        }
    }

    /// Returns whether values of this type can be ordered with `<` and `>`.
    pub fn is_ordered(&self) -> bool {
        matches!(self, DataType::Number)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparison operator of a `where` predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// `=`
    Eq,
    /// `<`
    Lt,
    /// `>`
    Gt,
}

impl CompareOp {
    /// Returns the operator for a query character, if it is one.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '=' => Some(CompareOp::Eq),
            '<' => Some(CompareOp::Lt),
            '>' => Some(CompareOp::Gt),
            _ => None,
        }
    }

    /// Returns the operator's source symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
        }
    }

    /// Returns true for `<` and `>`.
    #[inline]
    pub fn is_ordering(&self) -> bool {
        !matches!(self, CompareOp::Eq)
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
