//! Binding powers for Pratt expression parsing.
//!
//! Precedence follows SQLite, from loosest to tightest: `OR`, `AND`, prefix
//! `NOT`, equality-like operators (`= != IS IN LIKE BETWEEN ...`),
//! comparisons, bitwise operators, additive, multiplicative, `||`, prefix
//! `- + ~`, postfix `COLLATE`.

use crate::lexer::{Keyword, TokenKind};

/// Binding power of the operand of a prefix `NOT`.
pub const NOT_BINDING_POWER: u8 = 5;
/// Binding power of the operand of a prefix `- + ~`.
pub const UNARY_BINDING_POWER: u8 = 19;
/// Binding power of postfix `COLLATE`.
pub const COLLATE_BINDING_POWER: u8 = 21;

/// Returns the binding power of the operand of a prefix operator.
///
/// Returns `None` if the token is not a prefix operator.
#[must_use]
pub const fn prefix_binding_power(kind: TokenKind) -> Option<u8> {
    match kind {
        TokenKind::Minus | TokenKind::Plus | TokenKind::BitNot => Some(UNARY_BINDING_POWER),
        TokenKind::Keyword(Keyword::Not) => Some(NOT_BINDING_POWER),
        _ => None,
    }
}

/// Returns the infix binding power for a token, given the token after it.
///
/// Returns `(left_bp, right_bp)`; all infix operators are left associative
/// (`left_bp < right_bp`). `NOT` is only an infix operator when it negates a
/// following `IN`, `LIKE`, `BETWEEN`, `GLOB`, `REGEXP`, `MATCH` or `NULL`.
#[must_use]
pub const fn infix_binding_power(kind: TokenKind, next: TokenKind) -> Option<(u8, u8)> {
    match kind {
        TokenKind::Keyword(Keyword::Or) => Some((1, 2)),
        TokenKind::Keyword(Keyword::And) => Some((3, 4)),

        TokenKind::Keyword(Keyword::Not) => match next {
            TokenKind::Keyword(
                Keyword::In
                | Keyword::Like
                | Keyword::Between
                | Keyword::Glob
                | Keyword::Regexp
                | Keyword::Match
                | Keyword::Null,
            ) => Some((7, 8)),
            _ => None,
        },

        TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::Keyword(
            Keyword::Is
            | Keyword::In
            | Keyword::Like
            | Keyword::Between
            | Keyword::Glob
            | Keyword::Regexp
            | Keyword::Match
            | Keyword::Isnull
            | Keyword::Notnull,
        ) => Some((7, 8)),

        TokenKind::Lt | TokenKind::LtEq | TokenKind::Gt | TokenKind::GtEq => Some((9, 10)),

        TokenKind::BitAnd | TokenKind::BitOr | TokenKind::LeftShift | TokenKind::RightShift => {
            Some((11, 12))
        }

        TokenKind::Plus | TokenKind::Minus => Some((13, 14)),

        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Some((15, 16)),

        TokenKind::Concat => Some((17, 18)),

        _ => None,
    }
}
