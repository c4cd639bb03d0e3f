//! Tree-to-text translation.
//!
//! The [`Translator`] walks a [`SyntaxNode`] tree top-down and renders each
//! construct in canonical form:
//!
//! - join operators collapse to `JOIN`, `NATURAL JOIN`, `CROSS JOIN`,
//!   `LEFT JOIN` or `LEFT OUTER JOIN`
//! - `LIMIT offset, count` becomes `LIMIT count OFFSET offset`
//! - subqueries are wrapped in exactly one pair of parentheses
//! - aliases are rendered with `AS`
//!
//! Anything without a dedicated rule is emitted as its source text.
//!
//! # Example
//!
//! ```rust
//! use canon_sql_core::parser::parse;
//! use canon_sql_core::translator::Translator;
//!
//! let tree = parse("SELECT * FROM users LIMIT 10, 5").unwrap();
//! let sql = Translator::new().translate(&tree).unwrap();
//! assert_eq!(sql, "SELECT * FROM users LIMIT 5 OFFSET 10");
//! ```

mod clauses;
mod config;
mod error;
mod expr;
mod join;
mod observer;
mod select;

pub use config::TranslatorConfig;
pub use error::TranslateError;
pub use join::JoinKeyword;
pub use observer::{NoopObserver, TracingObserver, TranslateObserver};

use crate::syntax::{
    Expr, JoinClause, JoinConstraint, JoinOperator, LimitClause, OrderByClause, OrderingTerm,
    ResultColumn, SelectCore, SelectStatement, Statement, SyntaxKind, SyntaxNode,
    TableOrSubquery,
};

/// Renders syntax trees as canonical SQL.
///
/// A translator holds no per-call state, so a single instance can serve
/// many threads when its observer is `Sync`.
#[derive(Debug, Clone, Default)]
pub struct Translator<O = NoopObserver> {
    config: TranslatorConfig,
    observer: O,
}

impl Translator {
    /// Creates a translator with the default configuration and no observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: TranslateObserver> Translator<O> {
    /// Replaces the configuration.
    #[must_use]
    pub const fn with_config(mut self, config: TranslatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the observer.
    #[must_use]
    pub fn with_observer<P: TranslateObserver>(self, observer: P) -> Translator<P> {
        Translator {
            config: self.config,
            observer,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translates a whole tree, usually the root returned by the parser.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedStatement` when the statement is not a SELECT,
    /// `MalformedTree` when a required part is missing and
    /// `DepthLimitExceeded` when the tree nests too deeply.
    pub fn translate(&self, root: &SyntaxNode) -> Result<String, TranslateError> {
        self.render_node(root, 0)
    }

    /// Renders any node. An absent node renders as the empty string.
    ///
    /// # Errors
    ///
    /// Same as [`Translator::translate`].
    pub fn render(&self, node: Option<&SyntaxNode>) -> Result<String, TranslateError> {
        node.map_or_else(|| Ok(String::new()), |node| self.render_node(node, 0))
    }

    /// Counts one rendering level and returns the new depth.
    fn enter(&self, kind: SyntaxKind, depth: usize) -> Result<usize, TranslateError> {
        let depth = depth + 1;
        if depth > self.config.max_depth {
            return Err(TranslateError::DepthLimitExceeded {
                limit: self.config.max_depth,
            });
        }
        self.observer.node_entered(kind, depth);
        Ok(depth)
    }

    fn render_node(&self, node: &SyntaxNode, depth: usize) -> Result<String, TranslateError> {
        // Views always cast here because the arms match on the node's own kind.
        let cast_failed = || TranslateError::malformed(node.kind(), "matching kind");

        match node.kind() {
            SyntaxKind::Parse => {
                let depth = self.enter(SyntaxKind::Parse, depth)?;
                let list = node
                    .children()
                    .first()
                    .ok_or_else(|| TranslateError::malformed(SyntaxKind::Parse, "statement list"))?;
                self.render_node(list, depth)
            }
            SyntaxKind::StatementList => self.render_statement_list(node, depth),
            SyntaxKind::Statement => {
                self.render_statement(Statement::cast(node).ok_or_else(cast_failed)?, depth)
            }
            SyntaxKind::SelectStatement => self.render_select_statement(
                SelectStatement::cast(node).ok_or_else(cast_failed)?,
                depth,
            ),
            SyntaxKind::SelectCore => {
                self.render_select_core(SelectCore::cast(node).ok_or_else(cast_failed)?, depth)
            }
            SyntaxKind::ResultColumn => self
                .render_result_column(ResultColumn::cast(node).ok_or_else(cast_failed)?, depth),
            SyntaxKind::TableOrSubquery => self.render_table_or_subquery(
                TableOrSubquery::cast(node).ok_or_else(cast_failed)?,
                depth,
            ),
            SyntaxKind::JoinClause => {
                self.render_join_clause(JoinClause::cast(node).ok_or_else(cast_failed)?, depth)
            }
            SyntaxKind::JoinOperator => {
                self.enter(SyntaxKind::JoinOperator, depth)?;
                let operator = JoinOperator::cast(node).ok_or_else(cast_failed)?;
                Ok(JoinKeyword::from_operator(operator).as_str().to_owned())
            }
            SyntaxKind::JoinConstraint => self.render_join_constraint(
                Some(JoinConstraint::cast(node).ok_or_else(cast_failed)?),
                depth,
            ),
            SyntaxKind::Expr => self.render_expr(Expr::cast(node).ok_or_else(cast_failed)?, depth),
            SyntaxKind::OrderByClause => {
                self.render_order_by(OrderByClause::cast(node).ok_or_else(cast_failed)?, depth)
            }
            SyntaxKind::OrderingTerm => self
                .render_ordering_term(OrderingTerm::cast(node).ok_or_else(cast_failed)?, depth),
            SyntaxKind::LimitClause => {
                self.render_limit(LimitClause::cast(node).ok_or_else(cast_failed)?, depth)
            }
            SyntaxKind::OtherStatement => Err(TranslateError::UnsupportedStatement {
                found: leading_word(node.text()).to_owned(),
            }),
            SyntaxKind::SchemaName
            | SyntaxKind::TableName
            | SyntaxKind::TableAlias
            | SyntaxKind::ColumnAlias
            | SyntaxKind::ColumnNameList
            | SyntaxKind::Keyword(_)
            | SyntaxKind::Identifier
            | SyntaxKind::Literal
            | SyntaxKind::Parameter
            | SyntaxKind::Operator
            | SyntaxKind::Star
            | SyntaxKind::Comma
            | SyntaxKind::Dot
            | SyntaxKind::LeftParen
            | SyntaxKind::RightParen
            | SyntaxKind::Semicolon => {
                self.enter(node.kind(), depth)?;
                Ok(node.text().to_owned())
            }
        }
    }

    /// Renders the first statement of a list; the rest are reported and skipped.
    fn render_statement_list(
        &self,
        node: &SyntaxNode,
        depth: usize,
    ) -> Result<String, TranslateError> {
        let depth = self.enter(SyntaxKind::StatementList, depth)?;
        let mut statements = node.children_of_kind(SyntaxKind::Statement);
        let first = statements
            .next()
            .ok_or_else(|| TranslateError::malformed(SyntaxKind::StatementList, "statement"))?;

        let skipped = statements.count();
        if skipped > 0 {
            self.observer.statements_skipped(skipped);
        }

        self.render_node(first, depth)
    }

    fn render_statement(
        &self,
        statement: Statement<'_>,
        depth: usize,
    ) -> Result<String, TranslateError> {
        let depth = self.enter(SyntaxKind::Statement, depth)?;
        statement.select_statement().map_or_else(
            || {
                Err(TranslateError::UnsupportedStatement {
                    found: statement.leading_word().to_owned(),
                })
            },
            |select| self.render_select_statement(select, depth),
        )
    }
}

fn leading_word(text: &str) -> &str {
    text.split_whitespace().next().unwrap_or_default()
}
