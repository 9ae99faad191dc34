//! Query lexer.
//!
//! Turns query text into a token stream in a single pass. Keywords, identifiers and
//! literals keep their source order, while bracket, comparison and logical operators are
//! reordered on the fly (shunting-yard) so that the `where` expression comes out in
//! postfix order.

mod reducer;
mod scanner;
mod token;

pub use scanner::{tokenize, LexError, LexErrorKind};
pub use token::{Keyword, Token, TokenKind};
