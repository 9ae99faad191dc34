//! Value type definitions for sift tables.
//!
//! This module defines the `Value` enum stored in every table cell, together with the
//! comparison contract filters rely on.

use crate::error::{Error, Result};
use crate::types::{CompareOp, DataType};
use alloc::string::{String, ToString};
use core::fmt;

/// A value that can be stored in a table cell or written as a query literal.
#[derive(Clone, Debug)]
pub enum Value {
    /// 64-bit floating point number
    Number(f64),
    /// UTF-8 string
    String(String),
}

impl Value {
    /// Returns the data type of this value.
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Number(_) => DataType::Number,
            Value::String(_) => DataType::String,
        }
    }

    /// Returns the f64 value if this is a Number, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Compares this value (left-hand side) against a query literal.
    ///
    /// The literal must have the same type as `self`. Numbers support every operator with
    /// exact float semantics; strings support only `=`.
    pub fn compare(&self, literal: &Value, op: CompareOp) -> Result<bool> {
        match (self, literal) {
            (Value::Number(a), Value::Number(b)) => Ok(match op {
                CompareOp::Eq => a == b,
                CompareOp::Lt => a < b,
                CompareOp::Gt => a > b,
            }),
            (Value::String(a), Value::String(b)) => match op {
                CompareOp::Eq => Ok(a == b),
                CompareOp::Lt | CompareOp::Gt => {
                    Err(Error::unsupported_operator(op, DataType::String))
                }
            },
            _ => Err(Error::type_mismatch(self.data_type(), literal.data_type())),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => {
                // Structural equality: two NaN cells are the same cell content
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (Value::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{}", v),
            Value::String(v) => f.write_str(v),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn test_value_data_type() {
        assert_eq!(Value::Number(1.0).data_type(), DataType::Number);
        assert_eq!(Value::from("a").data_type(), DataType::String);
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Number(3.5).as_f64(), Some(3.5));
        assert_eq!(Value::Number(3.5).as_str(), None);
        assert_eq!(Value::from("hello").as_str(), Some("hello"));
        assert_eq!(Value::from("hello").as_f64(), None);
    }

    #[test]
    fn test_number_compare() {
        let five = Value::Number(5.0);
        assert!(five.compare(&Value::Number(3.0), CompareOp::Gt).unwrap());
        assert!(!five.compare(&Value::Number(5.0), CompareOp::Gt).unwrap());
        assert!(five.compare(&Value::Number(5.0), CompareOp::Eq).unwrap());
        assert!(five.compare(&Value::Number(7.0), CompareOp::Lt).unwrap());
        assert!(!five.compare(&Value::Number(5.0), CompareOp::Lt).unwrap());
    }

    #[test]
    fn test_number_compare_is_exact() {
        let v = Value::Number(0.1 + 0.2);
        assert!(!v.compare(&Value::Number(0.3), CompareOp::Eq).unwrap());
        assert!(!Value::Number(f64::NAN)
            .compare(&Value::Number(f64::NAN), CompareOp::Eq)
            .unwrap());
    }

    #[test]
    fn test_string_compare() {
        let v = Value::from("hello");
        assert!(v.compare(&Value::from("hello"), CompareOp::Eq).unwrap());
        assert!(!v.compare(&Value::from("world"), CompareOp::Eq).unwrap());
        assert_eq!(
            v.compare(&Value::from("a"), CompareOp::Lt),
            Err(Error::unsupported_operator(CompareOp::Lt, DataType::String))
        );
        assert_eq!(
            v.compare(&Value::from("a"), CompareOp::Gt),
            Err(Error::unsupported_operator(CompareOp::Gt, DataType::String))
        );
    }

    #[test]
    fn test_compare_type_mismatch() {
        assert_eq!(
            Value::Number(1.0).compare(&Value::from("1"), CompareOp::Eq),
            Err(Error::type_mismatch(DataType::Number, DataType::String))
        );
        assert_eq!(
            Value::from("1").compare(&Value::Number(1.0), CompareOp::Lt),
            Err(Error::type_mismatch(DataType::String, DataType::Number))
        );
    }

    #[test]
    fn test_value_display() {
        assert_eq!(format!("{}", Value::Number(10.0)), "10");
        assert_eq!(format!("{}", Value::Number(15000.99)), "15000.99");
        assert_eq!(format!("{}", Value::from("Mike Smith")), "Mike Smith");
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Value::Number(5.0), Value::from(5));
        assert_ne!(Value::Number(1.0), Value::from("1"));
        assert_eq!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    }
}
