//! SQL parser implementation.

use std::sync::Arc;

use super::error::ParseError;
use super::pratt::{COLLATE_BINDING_POWER, infix_binding_power, prefix_binding_power};
use crate::lexer::{Keyword, Lexer, Span, Token, TokenKind};
use crate::syntax::{SyntaxKind, SyntaxNode};

/// Default limit on how deeply the syntax tree may nest, shared by the parser
/// and the translator.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// SQL parser.
pub struct Parser {
    source: Arc<str>,
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            source: Arc::from(input),
            tokens: Lexer::new(input).tokenize(),
            pos: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum height of the syntax tree, counted in nodes from the
    /// root to the deepest leaf.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses the whole input into a tree rooted at a `parse` node.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` on lexical errors, on syntax outside the
    /// supported grammar, and when nesting exceeds the configured depth.
    pub fn parse(&mut self) -> Result<SyntaxNode, ParseError> {
        if let Some((message, span)) = self.tokens.iter().find_map(|token| match token.kind {
            TokenKind::Error(message) => Some((message, token.span)),
            _ => None,
        }) {
            return Err(ParseError::new(message, span));
        }

        let list = self.parse_statement_list()?;
        if !self.current().is_eof() {
            return Err(self.unexpected("';' or end of input"));
        }
        self.node(SyntaxKind::Parse, vec![list])
    }

    fn parse_statement_list(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children = vec![];
        while self.check(TokenKind::Semicolon) {
            children.push(self.bump()?);
        }
        children.push(self.parse_statement()?);

        while self.check(TokenKind::Semicolon) {
            while self.check(TokenKind::Semicolon) {
                children.push(self.bump()?);
            }
            if self.current().is_eof() {
                break;
            }
            children.push(self.parse_statement()?);
        }

        self.node(SyntaxKind::StatementList, children)
    }

    fn parse_statement(&mut self) -> Result<SyntaxNode, ParseError> {
        let inner = match self.current().kind {
            TokenKind::Keyword(Keyword::Select) => self.parse_select_statement()?,
            TokenKind::Keyword(Keyword::With) => {
                return Err(ParseError::new(
                    "common table expressions are not supported",
                    self.current().span,
                ));
            }
            TokenKind::Keyword(Keyword::Values) => {
                return Err(ParseError::new(
                    "VALUES statements are not supported",
                    self.current().span,
                ));
            }
            TokenKind::Keyword(kw) if kw.starts_other_statement() => self.parse_other_statement()?,
            _ => return Err(self.unexpected("statement")),
        };
        self.node(SyntaxKind::Statement, vec![inner])
    }

    /// Captures a non-SELECT statement as unparsed tokens up to the next `;`.
    fn parse_other_statement(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children = vec![];
        while !self.check(TokenKind::Semicolon) && !self.current().is_eof() {
            children.push(self.bump()?);
        }
        self.node(SyntaxKind::OtherStatement, children)
    }

    fn parse_select_statement(&mut self) -> Result<SyntaxNode, ParseError> {
        self.enter()?;
        let result = self.parse_select_statement_inner();
        self.leave();
        result
    }

    fn parse_select_statement_inner(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children = vec![self.parse_select_core()?];

        if matches!(
            self.current().kind,
            TokenKind::Keyword(Keyword::Union | Keyword::Intersect | Keyword::Except)
        ) {
            return Err(ParseError::new(
                "compound SELECT is not supported",
                self.current().span,
            ));
        }

        if self.check_keyword(Keyword::Order) {
            children.push(self.parse_order_by()?);
        }
        if self.check_keyword(Keyword::Limit) {
            children.push(self.parse_limit()?);
        }

        self.node(SyntaxKind::SelectStatement, children)
    }

    fn parse_select_core(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children = vec![self.expect_keyword(Keyword::Select)?];

        if self.check_keyword(Keyword::Distinct) || self.check_keyword(Keyword::All) {
            children.push(self.bump()?);
        }

        children.push(self.parse_result_column()?);
        while self.check(TokenKind::Comma) {
            children.push(self.bump()?);
            children.push(self.parse_result_column()?);
        }

        // FROM is optional in the grammar; the translator rejects its absence.
        if self.check_keyword(Keyword::From) {
            children.push(self.bump()?);
            children.push(self.parse_from_source()?);
        }

        if self.check_keyword(Keyword::Where) {
            children.push(self.bump()?);
            children.push(self.parse_expression(0)?);
        }

        if self.check_keyword(Keyword::Group) {
            children.push(self.bump()?);
            children.push(self.expect_keyword(Keyword::By)?);
            self.parse_expression_list(&mut children)?;

            if self.check_keyword(Keyword::Having) {
                children.push(self.bump()?);
                children.push(self.parse_expression(0)?);
            }
        }

        self.node(SyntaxKind::SelectCore, children)
    }

    fn parse_result_column(&mut self) -> Result<SyntaxNode, ParseError> {
        if self.check(TokenKind::Star) {
            let star = self.bump()?;
            return self.node(SyntaxKind::ResultColumn, vec![star]);
        }

        if self.check(TokenKind::Identifier)
            && self.peek_kind(1) == TokenKind::Dot
            && self.peek_kind(2) == TokenKind::Star
        {
            let children = vec![self.bump()?, self.bump()?, self.bump()?];
            return self.node(SyntaxKind::ResultColumn, children);
        }

        let mut children = vec![self.parse_expression(0)?];
        if self.check_keyword(Keyword::As) {
            children.push(self.bump()?);
            if !self.check(TokenKind::Identifier) && !self.check(TokenKind::String) {
                return Err(self.unexpected("column alias"));
            }
            let alias = self.bump()?;
            children.push(self.node(SyntaxKind::ColumnAlias, vec![alias])?);
        } else if self.check(TokenKind::Identifier) {
            let alias = self.bump()?;
            children.push(self.node(SyntaxKind::ColumnAlias, vec![alias])?);
        }

        self.node(SyntaxKind::ResultColumn, children)
    }

    /// Parses the FROM source: a single table or subquery, or a join clause
    /// when join operators follow.
    fn parse_from_source(&mut self) -> Result<SyntaxNode, ParseError> {
        let first = self.parse_table_or_subquery()?;
        if !self.at_join_operator() {
            return Ok(first);
        }

        let mut children = vec![first];
        while self.at_join_operator() {
            children.push(self.parse_join_operator()?);
            children.push(self.parse_table_or_subquery()?);
            if self.check_keyword(Keyword::On) || self.check_keyword(Keyword::Using) {
                children.push(self.parse_join_constraint()?);
            }
        }

        self.node(SyntaxKind::JoinClause, children)
    }

    fn parse_table_or_subquery(&mut self) -> Result<SyntaxNode, ParseError> {
        self.enter()?;
        let result = self.parse_table_or_subquery_inner();
        self.leave();
        result
    }

    fn parse_table_or_subquery_inner(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children = vec![];

        if self.check(TokenKind::LeftParen) {
            children.push(self.bump()?);
            if self.check_keyword(Keyword::Select) {
                children.push(self.parse_select_statement()?);
                children.push(self.expect(TokenKind::RightParen, "')'")?);
                self.parse_table_alias(&mut children)?;
            } else {
                children.push(self.parse_from_source()?);
                children.push(self.expect(TokenKind::RightParen, "')'")?);
            }
            return self.node(SyntaxKind::TableOrSubquery, children);
        }

        if !self.check(TokenKind::Identifier) {
            return Err(self.unexpected("table name or subquery"));
        }
        if self.peek_kind(1) == TokenKind::Dot {
            let schema = self.bump()?;
            children.push(self.node(SyntaxKind::SchemaName, vec![schema])?);
            children.push(self.bump()?);
        }
        let table = self.expect(TokenKind::Identifier, "table name")?;
        children.push(self.node(SyntaxKind::TableName, vec![table])?);
        self.parse_table_alias(&mut children)?;

        self.node(SyntaxKind::TableOrSubquery, children)
    }

    fn parse_table_alias(&mut self, children: &mut Vec<SyntaxNode>) -> Result<(), ParseError> {
        if self.check_keyword(Keyword::As) {
            children.push(self.bump()?);
            let alias = self.expect(TokenKind::Identifier, "table alias")?;
            children.push(self.node(SyntaxKind::TableAlias, vec![alias])?);
        } else if self.check(TokenKind::Identifier) {
            let alias = self.bump()?;
            children.push(self.node(SyntaxKind::TableAlias, vec![alias])?);
        }
        Ok(())
    }

    fn at_join_operator(&self) -> bool {
        matches!(
            self.current().kind,
            TokenKind::Comma
                | TokenKind::Keyword(
                    Keyword::Join
                        | Keyword::Natural
                        | Keyword::Left
                        | Keyword::Inner
                        | Keyword::Cross
                        | Keyword::Right
                        | Keyword::Full
                )
        )
    }

    /// Parses `,` or `NATURAL? (LEFT OUTER? | INNER | CROSS)? JOIN`.
    fn parse_join_operator(&mut self) -> Result<SyntaxNode, ParseError> {
        if self.check(TokenKind::Comma) {
            let comma = self.bump()?;
            return self.node(SyntaxKind::JoinOperator, vec![comma]);
        }

        let mut children = vec![];
        if self.check_keyword(Keyword::Natural) {
            children.push(self.bump()?);
        }
        match self.current().kind {
            TokenKind::Keyword(Keyword::Left) => {
                children.push(self.bump()?);
                if self.check_keyword(Keyword::Outer) {
                    children.push(self.bump()?);
                }
            }
            TokenKind::Keyword(Keyword::Inner | Keyword::Cross) => {
                children.push(self.bump()?);
            }
            TokenKind::Keyword(Keyword::Right | Keyword::Full) => {
                return Err(ParseError::new(
                    "RIGHT and FULL joins are not supported",
                    self.current().span,
                ));
            }
            _ => {}
        }
        children.push(self.expect_keyword(Keyword::Join)?);

        self.node(SyntaxKind::JoinOperator, children)
    }

    fn parse_join_constraint(&mut self) -> Result<SyntaxNode, ParseError> {
        if self.check_keyword(Keyword::On) {
            let children = vec![self.bump()?, self.parse_expression(0)?];
            return self.node(SyntaxKind::JoinConstraint, children);
        }

        let using = self.expect_keyword(Keyword::Using)?;
        let mut columns = vec![self.expect(TokenKind::LeftParen, "'('")?];
        columns.push(self.expect(TokenKind::Identifier, "column name")?);
        while self.check(TokenKind::Comma) {
            columns.push(self.bump()?);
            columns.push(self.expect(TokenKind::Identifier, "column name")?);
        }
        columns.push(self.expect(TokenKind::RightParen, "')'")?);
        let list = self.node(SyntaxKind::ColumnNameList, columns)?;

        self.node(SyntaxKind::JoinConstraint, vec![using, list])
    }

    fn parse_order_by(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children = vec![
            self.expect_keyword(Keyword::Order)?,
            self.expect_keyword(Keyword::By)?,
        ];
        loop {
            let mut term = vec![self.parse_expression(0)?];
            if self.check_keyword(Keyword::Asc) || self.check_keyword(Keyword::Desc) {
                term.push(self.bump()?);
            }
            children.push(self.node(SyntaxKind::OrderingTerm, term)?);

            if !self.check(TokenKind::Comma) {
                break;
            }
            children.push(self.bump()?);
        }
        self.node(SyntaxKind::OrderByClause, children)
    }

    /// Parses `LIMIT expr [(OFFSET | ,) expr]`.
    fn parse_limit(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children = vec![
            self.expect_keyword(Keyword::Limit)?,
            self.parse_expression(0)?,
        ];
        if self.check_keyword(Keyword::Offset) || self.check(TokenKind::Comma) {
            children.push(self.bump()?);
            children.push(self.parse_expression(0)?);
        }
        self.node(SyntaxKind::LimitClause, children)
    }

    /// Parses `expr (',' expr)*`, pushing expressions and commas.
    fn parse_expression_list(&mut self, children: &mut Vec<SyntaxNode>) -> Result<(), ParseError> {
        children.push(self.parse_expression(0)?);
        while self.check(TokenKind::Comma) {
            children.push(self.bump()?);
            children.push(self.parse_expression(0)?);
        }
        Ok(())
    }

    /// Parses an expression using Pratt parsing.
    fn parse_expression(&mut self, min_bp: u8) -> Result<SyntaxNode, ParseError> {
        self.enter()?;
        let result = self.parse_expression_inner(min_bp);
        self.leave();
        result
    }

    fn parse_expression_inner(&mut self, min_bp: u8) -> Result<SyntaxNode, ParseError> {
        let mut lhs = self.parse_prefix()?;

        loop {
            if self.check_keyword(Keyword::Collate) {
                if COLLATE_BINDING_POWER < min_bp {
                    break;
                }
                let children = vec![
                    lhs,
                    self.bump()?,
                    self.expect(TokenKind::Identifier, "collation name")?,
                ];
                lhs = self.node(SyntaxKind::Expr, children)?;
                continue;
            }

            let Some((l_bp, r_bp)) = infix_binding_power(self.current().kind, self.peek_kind(1))
            else {
                break;
            };
            if l_bp < min_bp {
                break;
            }

            let mut children = vec![lhs];
            if self.check_keyword(Keyword::Not) {
                children.push(self.bump()?);
                if self.check_keyword(Keyword::Null) {
                    children.push(self.bump()?);
                    lhs = self.node(SyntaxKind::Expr, children)?;
                    continue;
                }
            }

            match self.current().kind {
                TokenKind::Keyword(Keyword::Isnull | Keyword::Notnull) => {
                    children.push(self.bump()?);
                }
                TokenKind::Keyword(Keyword::Is) => {
                    children.push(self.bump()?);
                    if self.check_keyword(Keyword::Not) {
                        children.push(self.bump()?);
                    }
                    children.push(self.parse_expression(r_bp)?);
                }
                TokenKind::Keyword(Keyword::In) => {
                    children.push(self.bump()?);
                    children.push(self.expect(TokenKind::LeftParen, "'('")?);
                    if self.check_keyword(Keyword::Select) {
                        children.push(self.parse_select_statement()?);
                    } else if !self.check(TokenKind::RightParen) {
                        self.parse_expression_list(&mut children)?;
                    }
                    children.push(self.expect(TokenKind::RightParen, "')'")?);
                }
                TokenKind::Keyword(Keyword::Between) => {
                    children.push(self.bump()?);
                    children.push(self.parse_expression(r_bp)?);
                    children.push(self.expect_keyword(Keyword::And)?);
                    children.push(self.parse_expression(r_bp)?);
                }
                TokenKind::Keyword(
                    Keyword::Like | Keyword::Glob | Keyword::Regexp | Keyword::Match,
                ) => {
                    children.push(self.bump()?);
                    children.push(self.parse_expression(r_bp)?);
                    if self.check_keyword(Keyword::Escape) {
                        children.push(self.bump()?);
                        children.push(self.parse_expression(r_bp)?);
                    }
                }
                _ => {
                    children.push(self.bump()?);
                    children.push(self.parse_expression(r_bp)?);
                }
            }

            lhs = self.node(SyntaxKind::Expr, children)?;
        }

        Ok(lhs)
    }

    fn parse_prefix(&mut self) -> Result<SyntaxNode, ParseError> {
        let kind = self.current().kind;
        if kind == TokenKind::Keyword(Keyword::Not)
            && self.peek_kind(1) == TokenKind::Keyword(Keyword::Exists)
        {
            return self.parse_exists();
        }

        if let Some(bp) = prefix_binding_power(kind) {
            let children = vec![self.bump()?, self.parse_expression(bp)?];
            return self.node(SyntaxKind::Expr, children);
        }

        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<SyntaxNode, ParseError> {
        match self.current().kind {
            TokenKind::Number
            | TokenKind::String
            | TokenKind::Blob
            | TokenKind::Parameter
            | TokenKind::Keyword(Keyword::Null | Keyword::True | Keyword::False) => {
                let token = self.bump()?;
                self.node(SyntaxKind::Expr, vec![token])
            }

            TokenKind::Keyword(Keyword::Exists) => self.parse_exists(),

            TokenKind::LeftParen => {
                let mut children = vec![self.bump()?];
                if self.check_keyword(Keyword::Select) {
                    children.push(self.parse_select_statement()?);
                } else {
                    self.parse_expression_list(&mut children)?;
                }
                children.push(self.expect(TokenKind::RightParen, "')'")?);
                self.node(SyntaxKind::Expr, children)
            }

            TokenKind::Keyword(Keyword::Case) => self.parse_case(),
            TokenKind::Keyword(Keyword::Cast) => self.parse_cast(),

            // Keywords that double as scalar function names.
            TokenKind::Keyword(Keyword::Replace | Keyword::Like | Keyword::Glob)
                if self.peek_kind(1) == TokenKind::LeftParen =>
            {
                self.parse_function_call()
            }

            TokenKind::Identifier => {
                if self.peek_kind(1) == TokenKind::LeftParen {
                    return self.parse_function_call();
                }

                let mut children = vec![self.bump()?];
                // table.column or schema.table.column
                for _ in 0..2 {
                    if !self.check(TokenKind::Dot) {
                        break;
                    }
                    children.push(self.bump()?);
                    children.push(self.expect(TokenKind::Identifier, "column name")?);
                }
                self.node(SyntaxKind::Expr, children)
            }

            _ => Err(self.unexpected("expression")),
        }
    }

    /// Parses `[NOT] EXISTS ( select )`.
    fn parse_exists(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children = vec![];
        if self.check_keyword(Keyword::Not) {
            children.push(self.bump()?);
        }
        children.push(self.expect_keyword(Keyword::Exists)?);
        children.push(self.expect(TokenKind::LeftParen, "'('")?);
        if !self.check_keyword(Keyword::Select) {
            return Err(self.unexpected("SELECT"));
        }
        children.push(self.parse_select_statement()?);
        children.push(self.expect(TokenKind::RightParen, "')'")?);
        self.node(SyntaxKind::Expr, children)
    }

    /// Parses `name ( [DISTINCT] (* | expr, ...)? )`.
    fn parse_function_call(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children = vec![self.bump()?];
        children.push(self.expect(TokenKind::LeftParen, "'('")?);

        if self.check_keyword(Keyword::Distinct) {
            children.push(self.bump()?);
        }
        if self.check(TokenKind::Star) {
            children.push(self.bump()?);
        } else if !self.check(TokenKind::RightParen) {
            self.parse_expression_list(&mut children)?;
        }

        children.push(self.expect(TokenKind::RightParen, "')'")?);
        self.node(SyntaxKind::Expr, children)
    }

    /// Parses `CASE [base] (WHEN expr THEN expr)+ [ELSE expr] END`.
    fn parse_case(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children = vec![self.expect_keyword(Keyword::Case)?];
        if !self.check_keyword(Keyword::When) {
            children.push(self.parse_expression(0)?);
        }

        if !self.check_keyword(Keyword::When) {
            return Err(self.unexpected("WHEN"));
        }
        while self.check_keyword(Keyword::When) {
            children.push(self.bump()?);
            children.push(self.parse_expression(0)?);
            children.push(self.expect_keyword(Keyword::Then)?);
            children.push(self.parse_expression(0)?);
        }

        if self.check_keyword(Keyword::Else) {
            children.push(self.bump()?);
            children.push(self.parse_expression(0)?);
        }
        children.push(self.expect_keyword(Keyword::End)?);

        self.node(SyntaxKind::Expr, children)
    }

    /// Parses `CAST ( expr AS type-name )`.
    fn parse_cast(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children = vec![
            self.expect_keyword(Keyword::Cast)?,
            self.expect(TokenKind::LeftParen, "'('")?,
            self.parse_expression(0)?,
            self.expect_keyword(Keyword::As)?,
            self.expect(TokenKind::Identifier, "type name")?,
        ];
        while self.check(TokenKind::Identifier) {
            children.push(self.bump()?);
        }
        if self.check(TokenKind::LeftParen) {
            children.push(self.bump()?);
            children.push(self.parse_signed_number()?);
            if self.check(TokenKind::Comma) {
                children.push(self.bump()?);
                children.push(self.parse_signed_number()?);
            }
            children.push(self.expect(TokenKind::RightParen, "')'")?);
        }
        children.push(self.expect(TokenKind::RightParen, "')'")?);

        self.node(SyntaxKind::Expr, children)
    }

    fn parse_signed_number(&mut self) -> Result<SyntaxNode, ParseError> {
        if self.check(TokenKind::Minus) || self.check(TokenKind::Plus) {
            let children = vec![self.bump()?, self.expect(TokenKind::Number, "number")?];
            return self.node(SyntaxKind::Expr, children);
        }
        let number = self.expect(TokenKind::Number, "number")?;
        self.node(SyntaxKind::Expr, vec![number])
    }

    // --- Helper methods ---

    fn current(&self) -> &Token {
        // The token list always ends with Eof and `pos` never moves past it.
        &self.tokens[self.pos]
    }

    fn peek_kind(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map_or(TokenKind::Eof, |token| token.kind)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.check(TokenKind::Keyword(keyword))
    }

    /// Consumes the current token and returns it as a terminal node.
    fn bump(&mut self) -> Result<SyntaxNode, ParseError> {
        let token = *self.current();
        let Some(kind) = SyntaxKind::from_token(token.kind) else {
            return Err(ParseError::unexpected_eof("more input", token.span));
        };
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        Ok(SyntaxNode::new(
            kind,
            token.span,
            Arc::clone(&self.source),
            Vec::new(),
        ))
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<SyntaxNode, ParseError> {
        if self.check(kind) {
            self.bump()
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> Result<SyntaxNode, ParseError> {
        self.expect(TokenKind::Keyword(keyword), keyword.as_str())
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.current();
        if token.is_eof() {
            ParseError::unexpected_eof(expected, token.span)
        } else {
            ParseError::unexpected(expected, token.kind, token.span)
        }
    }

    /// Builds a rule node spanning its children.
    ///
    /// Fails when the node would make the tree taller than the depth limit,
    /// which also catches long left-folded operator chains that never recurse.
    fn node(
        &self,
        kind: SyntaxKind,
        children: Vec<SyntaxNode>,
    ) -> Result<SyntaxNode, ParseError> {
        let at = self.current().span.start;
        let span = children
            .iter()
            .map(SyntaxNode::span)
            .reduce(Span::merge)
            .unwrap_or_else(|| Span::new(at, at));
        let node = SyntaxNode::new(kind, span, Arc::clone(&self.source), children);
        if node.height() > self.max_depth {
            return Err(self.too_deep());
        }
        Ok(node)
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(self.too_deep());
        }
        self.depth += 1;
        Ok(())
    }

    fn too_deep(&self) -> ParseError {
        ParseError::new(
            format!("nesting exceeds the maximum depth of {}", self.max_depth),
            self.current().span,
        )
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
