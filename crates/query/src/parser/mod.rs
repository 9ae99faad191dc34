//! Statement parser.
//!
//! Consumes the lexer's token stream, enforces the `select ... from ... [where ...]`
//! sequencing and assembles the postfix `where` tokens into a filter tree.

mod error;
mod filter_tree;
mod statement;

pub use error::GrammarError;
pub use filter_tree::build_filter;
pub use statement::{parse_tokens, StatementBuilder};

use crate::ast::SelectStatement;
use crate::error::QueryResult;
use crate::lexer::tokenize;

/// Lexes and parses a query into a select statement.
pub fn parse(query: &str) -> QueryResult<SelectStatement> {
    let tokens = tokenize(query)?;
    Ok(parse_tokens(tokens)?)
}
