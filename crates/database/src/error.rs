//! Error types for the database facade.

use crate::config::ConfigError;
use sift_loader::LoadError;
use sift_query::QueryError;
use std::time::Duration;
use thiserror::Error;

/// Database error types.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Catalog(#[from] sift_core::Error),

    #[error("error when loading table: {0}")]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("error when formatting result: {0}")]
    Format(#[source] sift_core::Error),

    #[error("query timed out after {} ms", .0.as_millis())]
    Timeout(Duration),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DatabaseError {
    /// Returns true if the query was stopped before completing.
    pub fn is_cancellation(&self) -> bool {
        matches!(
            self,
            DatabaseError::Timeout(_)
                | DatabaseError::Query(QueryError::Cancelled)
                | DatabaseError::Format(sift_core::Error::Cancelled)
        )
    }
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;
