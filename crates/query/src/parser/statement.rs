//! Statement builder: enforces keyword sequencing over the token stream.

use super::error::GrammarError;
use super::filter_tree::build_filter;
use crate::ast::{FilterNode, SelectStatement};
use crate::lexer::{Keyword, Token};
use alloc::string::String;
use alloc::vec::Vec;

/// Builds a `SelectStatement` from lexed tokens.
pub fn parse_tokens(tokens: Vec<Token>) -> Result<SelectStatement, GrammarError> {
    let mut builder = StatementBuilder::new();
    for token in tokens {
        builder.push(token)?;
    }
    builder.build()
}

/// Incremental statement builder, tracking the last keyword seen.
#[derive(Debug, Default)]
pub struct StatementBuilder {
    last_keyword: Option<Keyword>,
    all_fields: bool,
    fields: Vec<String>,
    table: Option<String>,
    conditions: Vec<Token>,
}

impl StatementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one token.
    ///
    /// Once `where` has been seen every token (already in postfix order) is buffered
    /// verbatim for the filter-tree builder.
    pub fn push(&mut self, token: Token) -> Result<(), GrammarError> {
        match token {
            Token::Keyword(keyword) => self.push_keyword(keyword),
            Token::Identifier(name) => self.push_identifier(name),
            other => match self.last_keyword {
                Some(Keyword::Where) => {
                    self.conditions.push(other);
                    Ok(())
                }
                None => Err(GrammarError::SelectNotFirst),
                Some(_) => Err(GrammarError::UnexpectedToken(other.kind())),
            },
        }
    }

    fn push_keyword(&mut self, keyword: Keyword) -> Result<(), GrammarError> {
        match keyword {
            Keyword::Select => {
                if self.last_keyword.is_some() {
                    return Err(GrammarError::SelectNotFirst);
                }
            }
            Keyword::From => {
                if self.last_keyword != Some(Keyword::Select) {
                    return Err(GrammarError::FromWithoutSelect);
                }
                if self.fields.is_empty() && !self.all_fields {
                    return Err(GrammarError::EmptySelectList);
                }
            }
            Keyword::Where => {
                if self.last_keyword != Some(Keyword::From) {
                    return Err(GrammarError::WhereWithoutFrom);
                }
                if self.table.is_none() {
                    return Err(GrammarError::MissingTableName);
                }
            }
        }
        self.last_keyword = Some(keyword);
        Ok(())
    }

    fn push_identifier(&mut self, name: String) -> Result<(), GrammarError> {
        match self.last_keyword {
            None => Err(GrammarError::SelectNotFirst),
            Some(Keyword::Select) => {
                if self.all_fields {
                    return Err(GrammarError::InvalidSelectList);
                }
                if name == "*" {
                    if !self.fields.is_empty() {
                        return Err(GrammarError::InvalidSelectList);
                    }
                    self.all_fields = true;
                } else {
                    self.fields.push(name);
                }
                Ok(())
            }
            Some(Keyword::From) => {
                if self.table.is_some() {
                    return Err(GrammarError::TableNameTwice);
                }
                self.table = Some(name);
                Ok(())
            }
            Some(Keyword::Where) => {
                self.conditions.push(Token::Identifier(name));
                Ok(())
            }
        }
    }

    /// Finishes the statement. Without `where` tokens the filter selects every row.
    pub fn build(self) -> Result<SelectStatement, GrammarError> {
        let table = match (self.table, self.last_keyword) {
            (Some(table), _) => table,
            (None, None) => return Err(GrammarError::SelectNotFirst),
            (None, Some(Keyword::Select)) => return Err(GrammarError::MissingFrom),
            (None, Some(_)) => return Err(GrammarError::MissingTableName),
        };
        let filter = if self.conditions.is_empty() {
            FilterNode::Dummy
        } else {
            build_filter(&self.conditions)?
        };
        Ok(SelectStatement {
            fields: self.fields,
            all_fields: self.all_fields,
            table,
            filter,
        })
    }
}
