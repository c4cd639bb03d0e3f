//! Parser error types.

use crate::lexer::{Span, TokenKind};

/// A parse error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at position {}..{}", .span.start, .span.end)]
pub struct ParseError {
    /// The error message.
    pub message: String,
    /// The location of the error.
    pub span: Span,
    /// Expected tokens (if applicable).
    pub expected: Option<String>,
    /// The actual token found.
    pub found: Option<TokenKind>,
}

impl ParseError {
    #[must_use]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            expected: None,
            found: None,
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: TokenKind, span: Span) -> Self {
        let expected: String = expected.into();
        Self {
            message: format!("unexpected token: expected {expected}, found {found:?}"),
            span,
            expected: Some(expected),
            found: Some(found),
        }
    }

    /// Creates an "unexpected end of input" error.
    #[must_use]
    pub fn unexpected_eof(expected: impl Into<String>, span: Span) -> Self {
        let expected: String = expected.into();
        Self {
            message: format!("unexpected end of input: expected {expected}"),
            span,
            expected: Some(expected),
            found: Some(TokenKind::Eof),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_position() {
        let err = ParseError::new("nesting too deep", Span::new(4, 9));
        assert_eq!(err.to_string(), "nesting too deep at position 4..9");
    }

    #[test]
    fn test_unexpected_records_expectation() {
        let err = ParseError::unexpected("JOIN", TokenKind::Comma, Span::new(1, 2));
        assert_eq!(err.expected.as_deref(), Some("JOIN"));
        assert_eq!(err.found, Some(TokenKind::Comma));
        assert!(err.message.contains("expected JOIN"));
    }

    #[test]
    fn test_unexpected_eof() {
        let err = ParseError::unexpected_eof("expression", Span::new(6, 6));
        assert_eq!(err.found, Some(TokenKind::Eof));
        assert!(err.to_string().starts_with("unexpected end of input"));
    }
}
