//! Character scanner for query text.

use super::reducer::Reducer;
use super::token::Token;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::mem;
use core::str::CharIndices;
use sift_core::CompareOp;

/// Kind of lexing failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A `'` literal reached the end of input.
    UnterminatedString,
    /// A `"` identifier reached the end of input.
    UnterminatedIdentifier,
    /// A `)` without a preceding `(`.
    UnmatchedCloseParen,
    /// The input ended without `;`.
    MissingTerminator,
}

/// Error type for query lexing.
#[derive(Clone, Debug, PartialEq)]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Byte offset in the query where the error was detected.
    pub position: usize,
}

impl LexError {
    pub(crate) fn new(kind: LexErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self.kind {
            LexErrorKind::UnterminatedString => "string literal is not closed",
            LexErrorKind::UnterminatedIdentifier => "quoted identifier is not closed",
            LexErrorKind::UnmatchedCloseParen => "closing bracket has no opening bracket",
            LexErrorKind::MissingTerminator => "statement is not terminated by ';'",
        };
        write!(f, "{} at position {}", message, self.position)
    }
}

impl core::error::Error for LexError {}

/// Lexes a query into tokens, with the `where` expression in postfix order.
///
/// Lexing stops at the first `;`; anything after it is ignored.
///
/// Number literals are unsigned: `-` is a separator like whitespace, so `a = -1`
/// lexes the same as `a = 1`.
pub fn tokenize(query: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new(query).run()
}

/// Scanner state.
struct Scanner<'a> {
    input: &'a str,
    chars: CharIndices<'a>,
    /// Lower-cased word characters not yet classified.
    pending: String,
    reducer: Reducer,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices(),
            pending: String::new(),
            reducer: Reducer::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        while let Some((pos, c)) = self.chars.next() {
            match c {
                ';' => {
                    self.flush(pos)?;
                    return Ok(self.reducer.finish());
                }
                '\'' => {
                    self.flush(pos)?;
                    let text = self.read_quoted('\'', pos, LexErrorKind::UnterminatedString)?;
                    self.reducer.push(Token::String(text), pos)?;
                }
                '"' => {
                    self.flush(pos)?;
                    let text =
                        self.read_quoted('"', pos, LexErrorKind::UnterminatedIdentifier)?;
                    if !text.is_empty() {
                        self.reducer.push(Token::Identifier(text), pos)?;
                    }
                }
                '=' | '<' | '>' => {
                    self.flush(pos)?;
                    if let Some(op) = CompareOp::from_char(c) {
                        self.reducer.push(Token::Compare(op), pos)?;
                    }
                }
                '(' => {
                    self.flush(pos)?;
                    self.reducer.push(Token::OpenParen, pos)?;
                }
                ')' => {
                    self.flush(pos)?;
                    self.reducer.push(Token::CloseParen, pos)?;
                }
                c if is_word_char(c) => self.pending.extend(c.to_lowercase()),
                _ => self.flush(pos)?,
            }
        }
        Err(LexError::new(LexErrorKind::MissingTerminator, self.input.len()))
    }

    /// Classifies and emits the pending word, if any.
    fn flush(&mut self, pos: usize) -> Result<(), LexError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let word = mem::take(&mut self.pending);
        self.reducer.push(Token::classify(word), pos)
    }

    /// Reads up to the closing `quote`. A backslash escapes the next character.
    fn read_quoted(
        &mut self,
        quote: char,
        start: usize,
        unterminated: LexErrorKind,
    ) -> Result<String, LexError> {
        let mut text = String::new();
        let mut escaped = false;
        for (_, c) in self.chars.by_ref() {
            if escaped {
                text.push(c);
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                return Ok(text);
            } else {
                text.push(c);
            }
        }
        Err(LexError::new(unterminated, start))
    }
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '.' || c == '_' || c == '*'
}
