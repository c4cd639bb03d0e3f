//! Token types for the SQL lexer.

use serde::Serialize;

use super::Span;

/// SQL keywords recognised by the lexer.
///
/// Only words that the SELECT grammar or statement classification needs are
/// keywords. Everything else is lexed as an identifier, which keeps words such
/// as `count`, `date` or `name` usable as column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    // Query clauses
    Select,
    From,
    Where,
    Group,
    By,
    Having,
    Order,
    Limit,
    Offset,
    Distinct,
    All,
    As,

    // Joins
    Join,
    Inner,
    Left,
    Right,
    Full,
    Outer,
    Cross,
    Natural,
    On,
    Using,

    // Compound queries and row sources the grammar rejects
    Union,
    Intersect,
    Except,
    Values,
    With,

    // Operators
    And,
    Or,
    Not,
    In,
    Between,
    Like,
    Glob,
    Regexp,
    Match,
    Escape,
    Is,
    Isnull,
    Notnull,
    Exists,
    Collate,

    // Literals
    Null,
    True,
    False,

    // Expression forms
    Case,
    When,
    Then,
    Else,
    End,
    Cast,

    // Ordering
    Asc,
    Desc,

    // Statements other than SELECT
    Insert,
    Update,
    Delete,
    Replace,
    Create,
    Drop,
    Alter,
    Pragma,
    Begin,
    Commit,
    Rollback,
    Savepoint,
    Release,
    Vacuum,
    Explain,
    Analyze,
    Attach,
    Detach,
    Reindex,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let keyword = match s.to_ascii_uppercase().as_str() {
            "SELECT" => Self::Select,
            "FROM" => Self::From,
            "WHERE" => Self::Where,
            "GROUP" => Self::Group,
            "BY" => Self::By,
            "HAVING" => Self::Having,
            "ORDER" => Self::Order,
            "LIMIT" => Self::Limit,
            "OFFSET" => Self::Offset,
            "DISTINCT" => Self::Distinct,
            "ALL" => Self::All,
            "AS" => Self::As,
            "JOIN" => Self::Join,
            "INNER" => Self::Inner,
            "LEFT" => Self::Left,
            "RIGHT" => Self::Right,
            "FULL" => Self::Full,
            "OUTER" => Self::Outer,
            "CROSS" => Self::Cross,
            "NATURAL" => Self::Natural,
            "ON" => Self::On,
            "USING" => Self::Using,
            "UNION" => Self::Union,
            "INTERSECT" => Self::Intersect,
            "EXCEPT" => Self::Except,
            "VALUES" => Self::Values,
            "WITH" => Self::With,
            "AND" => Self::And,
            "OR" => Self::Or,
            "NOT" => Self::Not,
            "IN" => Self::In,
            "BETWEEN" => Self::Between,
            "LIKE" => Self::Like,
            "GLOB" => Self::Glob,
            "REGEXP" => Self::Regexp,
            "MATCH" => Self::Match,
            "ESCAPE" => Self::Escape,
            "IS" => Self::Is,
            "ISNULL" => Self::Isnull,
            "NOTNULL" => Self::Notnull,
            "EXISTS" => Self::Exists,
            "COLLATE" => Self::Collate,
            "NULL" => Self::Null,
            "TRUE" => Self::True,
            "FALSE" => Self::False,
            "CASE" => Self::Case,
            "WHEN" => Self::When,
            "THEN" => Self::Then,
            "ELSE" => Self::Else,
            "END" => Self::End,
            "CAST" => Self::Cast,
            "ASC" => Self::Asc,
            "DESC" => Self::Desc,
            "INSERT" => Self::Insert,
            "UPDATE" => Self::Update,
            "DELETE" => Self::Delete,
            "REPLACE" => Self::Replace,
            "CREATE" => Self::Create,
            "DROP" => Self::Drop,
            "ALTER" => Self::Alter,
            "PRAGMA" => Self::Pragma,
            "BEGIN" => Self::Begin,
            "COMMIT" => Self::Commit,
            "ROLLBACK" => Self::Rollback,
            "SAVEPOINT" => Self::Savepoint,
            "RELEASE" => Self::Release,
            "VACUUM" => Self::Vacuum,
            "EXPLAIN" => Self::Explain,
            "ANALYZE" => Self::Analyze,
            "ATTACH" => Self::Attach,
            "DETACH" => Self::Detach,
            "REINDEX" => Self::Reindex,
            _ => return None,
        };
        Some(keyword)
    }

    /// Returns the canonical upper-case spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Group => "GROUP",
            Self::By => "BY",
            Self::Having => "HAVING",
            Self::Order => "ORDER",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::Distinct => "DISTINCT",
            Self::All => "ALL",
            Self::As => "AS",
            Self::Join => "JOIN",
            Self::Inner => "INNER",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Full => "FULL",
            Self::Outer => "OUTER",
            Self::Cross => "CROSS",
            Self::Natural => "NATURAL",
            Self::On => "ON",
            Self::Using => "USING",
            Self::Union => "UNION",
            Self::Intersect => "INTERSECT",
            Self::Except => "EXCEPT",
            Self::Values => "VALUES",
            Self::With => "WITH",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::Between => "BETWEEN",
            Self::Like => "LIKE",
            Self::Glob => "GLOB",
            Self::Regexp => "REGEXP",
            Self::Match => "MATCH",
            Self::Escape => "ESCAPE",
            Self::Is => "IS",
            Self::Isnull => "ISNULL",
            Self::Notnull => "NOTNULL",
            Self::Exists => "EXISTS",
            Self::Collate => "COLLATE",
            Self::Null => "NULL",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Case => "CASE",
            Self::When => "WHEN",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::End => "END",
            Self::Cast => "CAST",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Replace => "REPLACE",
            Self::Create => "CREATE",
            Self::Drop => "DROP",
            Self::Alter => "ALTER",
            Self::Pragma => "PRAGMA",
            Self::Begin => "BEGIN",
            Self::Commit => "COMMIT",
            Self::Rollback => "ROLLBACK",
            Self::Savepoint => "SAVEPOINT",
            Self::Release => "RELEASE",
            Self::Vacuum => "VACUUM",
            Self::Explain => "EXPLAIN",
            Self::Analyze => "ANALYZE",
            Self::Attach => "ATTACH",
            Self::Detach => "DETACH",
            Self::Reindex => "REINDEX",
        }
    }

    /// Returns true if this keyword starts a statement other than SELECT.
    #[must_use]
    pub const fn starts_other_statement(&self) -> bool {
        matches!(
            self,
            Self::Insert
                | Self::Update
                | Self::Delete
                | Self::Replace
                | Self::Create
                | Self::Drop
                | Self::Alter
                | Self::Pragma
                | Self::Begin
                | Self::Commit
                | Self::Rollback
                | Self::End
                | Self::Savepoint
                | Self::Release
                | Self::Vacuum
                | Self::Explain
                | Self::Analyze
                | Self::Attach
                | Self::Detach
                | Self::Reindex
        )
    }
}

/// The kind of token.
///
/// Tokens carry no decoded value: every consumer works from the exact source
/// text under the token's span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Numeric literal (`42`, `3.14`, `1e10`, `0x1F`).
    Number,
    /// String literal (`'hello'`).
    String,
    /// Blob literal (`X'CAFE'`).
    Blob,
    /// Identifier, bare or quoted (`name`, `"name"`, `` `name` ``, `[name]`).
    Identifier,
    /// Bind parameter (`?`, `?1`, `:name`, `@name`, `$name`).
    Parameter,
    /// SQL keyword.
    Keyword(Keyword),

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// = or ==
    Eq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// ||
    Concat,
    /// &
    BitAnd,
    /// |
    BitOr,
    /// ~
    BitNot,
    /// <<
    LeftShift,
    /// >>
    RightShift,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,

    /// End of input.
    Eof,
    /// Input the lexer could not make sense of.
    Error(&'static str),
}

impl TokenKind {
    /// Returns true for tokens that act as operators.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(
            self,
            Self::Plus
                | Self::Minus
                | Self::Star
                | Self::Slash
                | Self::Percent
                | Self::Eq
                | Self::NotEq
                | Self::Lt
                | Self::LtEq
                | Self::Gt
                | Self::GtEq
                | Self::Concat
                | Self::BitAnd
                | Self::BitOr
                | Self::BitNot
                | Self::LeftShift
                | Self::RightShift
        )
    }
}

/// A token with its span in the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_str() {
        assert_eq!(Keyword::from_str("SELECT"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("natural"), Some(Keyword::Natural));
        assert_eq!(Keyword::from_str("LeFt"), Some(Keyword::Left));
        assert_eq!(Keyword::from_str("count"), None);
        assert_eq!(Keyword::from_str("users"), None);
    }

    #[test]
    fn test_keyword_as_str_round_trips() {
        for kw in [
            Keyword::Select,
            Keyword::Natural,
            Keyword::Outer,
            Keyword::Offset,
            Keyword::Notnull,
            Keyword::Reindex,
        ] {
            assert_eq!(Keyword::from_str(kw.as_str()), Some(kw));
        }
    }

    #[test]
    fn test_statement_keywords() {
        assert!(Keyword::Insert.starts_other_statement());
        assert!(Keyword::Drop.starts_other_statement());
        assert!(!Keyword::Select.starts_other_statement());
        assert!(!Keyword::With.starts_other_statement());
    }

    #[test]
    fn test_token_as_keyword() {
        let select = Token::new(TokenKind::Keyword(Keyword::Select), Span::new(0, 6));
        let plus = Token::new(TokenKind::Plus, Span::new(0, 1));
        assert_eq!(select.as_keyword(), Some(Keyword::Select));
        assert_eq!(plus.as_keyword(), None);
        assert!(plus.kind.is_operator());
        assert!(!TokenKind::Comma.is_operator());
    }
}
