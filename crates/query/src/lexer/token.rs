//! Token definitions for the query lexer.

use alloc::string::String;
use core::fmt;
use sift_core::CompareOp;

/// Reserved words of the query language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Select,
    From,
    Where,
}

impl Keyword {
    /// Matches a lower-cased word against the reserved words.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "select" => Some(Keyword::Select),
            "from" => Some(Keyword::From),
            "where" => Some(Keyword::Where),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Select => "select",
            Keyword::From => "from",
            Keyword::Where => "where",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexed query token.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// `select`, `from` or `where`
    Keyword(Keyword),
    /// Field or table name, or the bare `*`
    Identifier(String),
    /// Single-quoted string literal
    String(String),
    /// Numeric literal
    Number(f64),
    /// `=`, `<` or `>`
    Compare(CompareOp),
    /// `and`
    And,
    /// `or`
    Or,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// A word that fits no other class
    Unknown(String),
}

/// Fieldless token classification, used in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    StringLiteral,
    NumberLiteral,
    OpEqual,
    OpLess,
    OpMore,
    OpAnd,
    OpOr,
    OpenParen,
    CloseParen,
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::StringLiteral => "string literal",
            TokenKind::NumberLiteral => "number literal",
            TokenKind::OpEqual => "'='",
            TokenKind::OpLess => "'<'",
            TokenKind::OpMore => "'>'",
            TokenKind::OpAnd => "'and'",
            TokenKind::OpOr => "'or'",
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::Unknown => "unknown token",
        };
        f.write_str(name)
    }
}

impl Token {
    /// Classifies a flushed word buffer.
    ///
    /// Order matters: logical operators first, then numbers, keywords and identifiers.
    /// Anything else becomes `Unknown`, which only the grammar rejects.
    pub fn classify(word: String) -> Token {
        match word.as_str() {
            "and" => return Token::And,
            "or" => return Token::Or,
            _ => {}
        }
        if let Some(number) = parse_number(&word) {
            return Token::Number(number);
        }
        if let Some(keyword) = Keyword::from_word(&word) {
            return Token::Keyword(keyword);
        }
        if word == "*" || is_identifier(&word) {
            return Token::Identifier(word);
        }
        Token::Unknown(word)
    }

    /// Returns the token's kind.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Keyword(_) => TokenKind::Keyword,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::String(_) => TokenKind::StringLiteral,
            Token::Number(_) => TokenKind::NumberLiteral,
            Token::Compare(CompareOp::Eq) => TokenKind::OpEqual,
            Token::Compare(CompareOp::Lt) => TokenKind::OpLess,
            Token::Compare(CompareOp::Gt) => TokenKind::OpMore,
            Token::And => TokenKind::OpAnd,
            Token::Or => TokenKind::OpOr,
            Token::OpenParen => TokenKind::OpenParen,
            Token::CloseParen => TokenKind::CloseParen,
            Token::Unknown(_) => TokenKind::Unknown,
        }
    }

    /// Precedence used by the postfix reducer. Higher binds tighter.
    #[inline]
    pub fn priority(&self) -> u8 {
        match self {
            Token::OpenParen | Token::CloseParen => 4,
            Token::Compare(_) => 3,
            Token::And => 2,
            Token::Or => 1,
            _ => 0,
        }
    }

    /// Returns true for tokens the reducer routes through its operator stack.
    #[inline]
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::Compare(_) | Token::And | Token::Or | Token::OpenParen | Token::CloseParen
        )
    }
}

/// `digits` or `digits.digits`.
fn parse_number(word: &str) -> Option<f64> {
    let (int, frac) = match word.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (word, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int) || !frac.map_or(true, all_digits) {
        return None;
    }
    word.parse().ok()
}

/// A letter followed by letters, digits or underscores.
fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => chars.all(|c| c.is_alphanumeric() || c == '_'),
        _ => false,
    }
}
