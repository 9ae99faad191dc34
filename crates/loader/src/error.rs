//! Error types for table loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a table descriptor.
#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("Descriptor not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Error when decoding descriptor: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("name cannot be empty")]
    EmptyName,

    #[error("sep should be a single ASCII character, got '{0}'")]
    InvalidSeparator(String),

    #[error("unknown type '{type_name}' for field '{field}'")]
    UnknownType { field: String, type_name: String },

    #[error("field '{0}' declared twice")]
    DuplicateField(String),
}

/// Errors raised while loading a table from a delimited file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("empty file")]
    EmptyFile,

    #[error("column '{column}' not found in file")]
    MissingColumn { column: String },

    #[error("error when parsing column {column}, line {line}: invalid number '{value}'")]
    InvalidCell {
        column: String,
        line: u64,
        value: String,
    },

    #[error("parse error on line {line}: bare \" in non-quoted-field")]
    BareQuote { line: u64 },

    #[error("parse error on line {line}: extraneous or missing \" in quoted-field")]
    ExtraneousQuote { line: u64 },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error(transparent)]
    Table(#[from] sift_core::Error),
}

/// Result type for loader operations.
pub type Result<T> = std::result::Result<T, LoadError>;
