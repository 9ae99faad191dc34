//! Operator-precedence reduction of the token stream into postfix order.

use super::scanner::{LexError, LexErrorKind};
use super::token::Token;
use alloc::vec::Vec;

/// Shunting-yard state: the finished output queue and the pending operator stack.
#[derive(Debug, Default)]
pub(crate) struct Reducer {
    output: Vec<Token>,
    stack: Vec<Token>,
}

impl Reducer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Routes one token. Operands go straight to the output; operators first pop every
    /// stacked operator of greater or equal priority (stopping at an open bracket).
    /// A close bracket then unwinds the stack down to its matching open bracket.
    pub(crate) fn push(&mut self, token: Token, position: usize) -> Result<(), LexError> {
        if !token.is_operator() {
            self.output.push(token);
            return Ok(());
        }

        while let Some(top) = self.stack.last() {
            if *top == Token::OpenParen || top.priority() < token.priority() {
                break;
            }
            if let Some(top) = self.stack.pop() {
                self.output.push(top);
            }
        }

        if token == Token::CloseParen {
            loop {
                match self.stack.pop() {
                    Some(Token::OpenParen) => break,
                    Some(op) => self.output.push(op),
                    None => {
                        return Err(LexError::new(LexErrorKind::UnmatchedCloseParen, position));
                    }
                }
            }
        } else {
            self.stack.push(token);
        }
        Ok(())
    }

    /// Drains the remaining operators, last in first out, and returns the token stream.
    pub(crate) fn finish(mut self) -> Vec<Token> {
        while let Some(op) = self.stack.pop() {
            self.output.push(op);
        }
        self.output
    }
}
