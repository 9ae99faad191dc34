//! Error types for query parsing and execution.

use crate::lexer::LexError;
use crate::parser::GrammarError;
use core::fmt;
use sift_core::Error;

/// Result type alias for query operations.
pub type QueryResult<T> = core::result::Result<T, QueryError>;

/// Everything that can go wrong between query text and result table.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryError {
    /// The query text could not be tokenized.
    Lex(LexError),
    /// The tokens do not form a valid statement.
    Grammar(GrammarError),
    /// The source table could not be resolved.
    Source(Error),
    /// The filter could not be evaluated against the table.
    Evaluation(Error),
    /// A requested field is missing from the table.
    Projection(Error),
    /// The query observed a raised cancellation flag.
    Cancelled,
}

impl QueryError {
    /// Wraps an evaluation failure, lifting cancellation to its own variant.
    pub fn evaluation(err: Error) -> Self {
        if err.is_cancelled() {
            QueryError::Cancelled
        } else {
            QueryError::Evaluation(err)
        }
    }

    /// Wraps a projection failure, lifting cancellation to its own variant.
    pub fn projection(err: Error) -> Self {
        if err.is_cancelled() {
            QueryError::Cancelled
        } else {
            QueryError::Projection(err)
        }
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, QueryError::Cancelled)
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Lex(e) => write!(f, "Lexer error: {}", e),
            QueryError::Grammar(e) => write!(f, "Syntax error: {}", e),
            QueryError::Source(e) => write!(f, "{}", e),
            QueryError::Evaluation(e) => write!(f, "Filter error: {}", e),
            QueryError::Projection(e) => write!(f, "Projection error: {}", e),
            QueryError::Cancelled => f.write_str("Query cancelled"),
        }
    }
}

impl From<LexError> for QueryError {
    fn from(err: LexError) -> Self {
        QueryError::Lex(err)
    }
}

impl From<GrammarError> for QueryError {
    fn from(err: GrammarError) -> Self {
        QueryError::Grammar(err)
    }
}

impl core::error::Error for QueryError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::LexErrorKind;
    use alloc::string::ToString;

    #[test]
    fn test_cancellation_is_lifted() {
        assert_eq!(QueryError::evaluation(Error::Cancelled), QueryError::Cancelled);
        assert_eq!(QueryError::projection(Error::Cancelled), QueryError::Cancelled);
        assert!(QueryError::evaluation(Error::Cancelled).is_cancelled());
    }

    #[test]
    fn test_display() {
        let err = QueryError::projection(Error::column_not_found("people", "salary"));
        assert_eq!(
            err.to_string(),
            "Projection error: Column 'salary' not found in table 'people'"
        );
        let err: QueryError = GrammarError::MissingFrom.into();
        assert_eq!(err.to_string(), "Syntax error: from section is missing");
    }

    #[test]
    fn test_from_lex_error() {
        let lex = crate::lexer::tokenize("select * from t").unwrap_err();
        assert_eq!(lex.kind, LexErrorKind::MissingTerminator);
        let err: QueryError = lex.into();
        assert!(matches!(err, QueryError::Lex(_)));
    }
}
