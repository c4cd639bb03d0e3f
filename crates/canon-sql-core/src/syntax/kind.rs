//! Node kinds.

use core::fmt;

use serde::Serialize;

use crate::lexer::{Keyword, TokenKind};

/// The construct a [`SyntaxNode`](super::SyntaxNode) represents.
///
/// Rule kinds group other nodes; terminal kinds wrap exactly one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SyntaxKind {
    // Rules
    Parse,
    StatementList,
    Statement,
    SelectStatement,
    SelectCore,
    ResultColumn,
    TableOrSubquery,
    SchemaName,
    TableName,
    TableAlias,
    ColumnAlias,
    JoinClause,
    JoinOperator,
    JoinConstraint,
    ColumnNameList,
    Expr,
    OrderByClause,
    OrderingTerm,
    LimitClause,
    /// A statement other than SELECT, kept as unparsed tokens.
    OtherStatement,

    // Terminals
    Keyword(Keyword),
    Identifier,
    Literal,
    Parameter,
    Operator,
    Star,
    Comma,
    Dot,
    LeftParen,
    RightParen,
    Semicolon,
}

impl SyntaxKind {
    /// Maps a token to the terminal kind that wraps it.
    ///
    /// Returns `None` for `Eof` and lexer errors, which never enter the tree.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        let kind = match kind {
            TokenKind::Number | TokenKind::String | TokenKind::Blob => Self::Literal,
            TokenKind::Identifier => Self::Identifier,
            TokenKind::Parameter => Self::Parameter,
            TokenKind::Keyword(kw) => Self::Keyword(kw),
            TokenKind::Star => Self::Star,
            TokenKind::Comma => Self::Comma,
            TokenKind::Dot => Self::Dot,
            TokenKind::LeftParen => Self::LeftParen,
            TokenKind::RightParen => Self::RightParen,
            TokenKind::Semicolon => Self::Semicolon,
            TokenKind::Eof | TokenKind::Error(_) => return None,
            _ => Self::Operator,
        };
        Some(kind)
    }

    /// Returns true for kinds that wrap a single token.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Keyword(_)
                | Self::Identifier
                | Self::Literal
                | Self::Parameter
                | Self::Operator
                | Self::Star
                | Self::Comma
                | Self::Dot
                | Self::LeftParen
                | Self::RightParen
                | Self::Semicolon
        )
    }

    /// Returns the rule name used by the structural dump.
    #[must_use]
    pub const fn rule_name(&self) -> &'static str {
        match self {
            Self::Parse => "parse",
            Self::StatementList => "sql_stmt_list",
            Self::Statement => "sql_stmt",
            Self::SelectStatement => "select_stmt",
            Self::SelectCore => "select_core",
            Self::ResultColumn => "result_column",
            Self::TableOrSubquery => "table_or_subquery",
            Self::SchemaName => "schema_name",
            Self::TableName => "table_name",
            Self::TableAlias => "table_alias",
            Self::ColumnAlias => "column_alias",
            Self::JoinClause => "join_clause",
            Self::JoinOperator => "join_operator",
            Self::JoinConstraint => "join_constraint",
            Self::ColumnNameList => "column_name_list",
            Self::Expr => "expr",
            Self::OrderByClause => "order_by_stmt",
            Self::OrderingTerm => "ordering_term",
            Self::LimitClause => "limit_stmt",
            Self::OtherStatement => "other_stmt",
            Self::Keyword(kw) => kw.as_str(),
            Self::Identifier => "identifier",
            Self::Literal => "literal",
            Self::Parameter => "parameter",
            Self::Operator => "operator",
            Self::Star => "star",
            Self::Comma => "comma",
            Self::Dot => "dot",
            Self::LeftParen => "left_paren",
            Self::RightParen => "right_paren",
            Self::Semicolon => "semicolon",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rule_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token() {
        assert_eq!(
            SyntaxKind::from_token(TokenKind::Number),
            Some(SyntaxKind::Literal)
        );
        assert_eq!(
            SyntaxKind::from_token(TokenKind::NotEq),
            Some(SyntaxKind::Operator)
        );
        assert_eq!(
            SyntaxKind::from_token(TokenKind::Keyword(Keyword::Join)),
            Some(SyntaxKind::Keyword(Keyword::Join))
        );
        assert_eq!(SyntaxKind::from_token(TokenKind::Eof), None);
        assert_eq!(SyntaxKind::from_token(TokenKind::Error("bad")), None);
    }

    #[test]
    fn test_terminal_classification() {
        assert!(SyntaxKind::Star.is_terminal());
        assert!(SyntaxKind::Keyword(Keyword::On).is_terminal());
        assert!(!SyntaxKind::Expr.is_terminal());
        assert!(!SyntaxKind::TableName.is_terminal());
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(SyntaxKind::SelectCore.to_string(), "select_core");
        assert_eq!(SyntaxKind::Keyword(Keyword::Select).to_string(), "SELECT");
    }
}
