//! Grammar errors raised by the statement and filter-tree builders.

use crate::lexer::TokenKind;
use core::fmt;

/// A violation of the statement grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GrammarError {
    /// `select` is not the first keyword, or appears twice.
    SelectNotFirst,
    /// `from` does not directly follow the select list.
    FromWithoutSelect,
    /// `from` follows a select list without fields.
    EmptySelectList,
    /// `*` mixed with named fields.
    InvalidSelectList,
    /// `where` does not directly follow the `from` section.
    WhereWithoutFrom,
    /// `from` is not followed by a table name.
    MissingTableName,
    /// A second identifier after `from`.
    TableNameTwice,
    /// The statement ends without a `from` section.
    MissingFrom,
    /// A token that has no place before `where`.
    UnexpectedToken(TokenKind),
    /// A comparison without exactly one field and one literal, or a logical operator
    /// without two operands.
    InvalidWhere,
    /// The `where` tokens do not reduce to a single expression.
    MalformedExpression { roots: usize },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::SelectNotFirst => f.write_str("select should be the first word"),
            GrammarError::FromWithoutSelect => {
                f.write_str("from section should be after select")
            }
            GrammarError::EmptySelectList => {
                f.write_str("fields should be specified after select")
            }
            GrammarError::InvalidSelectList => {
                f.write_str("invalid select list: '*' cannot be combined with fields")
            }
            GrammarError::WhereWithoutFrom => f.write_str("where section should be after from"),
            GrammarError::MissingTableName => {
                f.write_str("tablename should be specified after from")
            }
            GrammarError::TableNameTwice => f.write_str("tablename specified twice"),
            GrammarError::MissingFrom => f.write_str("from section is missing"),
            GrammarError::UnexpectedToken(kind) => {
                write!(f, "unexpected {} before where section", kind)
            }
            GrammarError::InvalidWhere => f.write_str("invalid where format"),
            GrammarError::MalformedExpression { roots } => write!(
                f,
                "invalid where format: expression reduces to {} conditions instead of one",
                roots
            ),
        }
    }
}

impl core::error::Error for GrammarError {}
