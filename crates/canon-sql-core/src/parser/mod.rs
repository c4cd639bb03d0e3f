//! SQL parser.
//!
//! A hand-written recursive descent parser with Pratt expression parsing that
//! produces the concrete [`SyntaxNode`](crate::syntax::SyntaxNode) tree.

mod error;
mod parser;
mod pratt;

pub use error::ParseError;
pub use parser::{DEFAULT_MAX_DEPTH, Parser};

/// Parses `sql` into a syntax tree rooted at a `parse` node.
///
/// # Errors
///
/// Returns a `ParseError` if the input is not valid for the supported grammar.
pub fn parse(sql: &str) -> Result<crate::syntax::SyntaxNode, ParseError> {
    Parser::new(sql).parse()
}
