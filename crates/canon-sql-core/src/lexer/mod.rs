//! SQL lexer.
//!
//! Turns source text into a flat stream of tokens with byte spans. Keywords
//! are always lexed as tokens of their own, so a table name is never glued to
//! a following join keyword.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
