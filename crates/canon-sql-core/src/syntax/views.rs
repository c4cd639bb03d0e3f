//! Typed views over syntax nodes.
//!
//! A view is a borrowed wrapper around a node of one specific kind. It never
//! copies or mutates the node; accessors only locate children.

use super::{SyntaxKind, SyntaxNode};
use crate::lexer::Keyword;

macro_rules! syntax_view {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name<'a>(&'a SyntaxNode);

        impl<'a> $name<'a> {
            /// Wraps `node` if it has the matching kind.
            #[must_use]
            pub fn cast(node: &'a SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then_some(Self(node))
            }

            /// Returns the underlying node.
            #[must_use]
            pub const fn syntax(&self) -> &'a SyntaxNode {
                self.0
            }
        }
    };
}

syntax_view!(
    /// `sql_stmt`: a SELECT or some other statement.
    Statement => Statement
);
syntax_view!(
    /// `select_stmt`: select core followed by optional ORDER BY and LIMIT.
    SelectStatement => SelectStatement
);
syntax_view!(
    /// `select_core`: columns, FROM, WHERE, GROUP BY and HAVING.
    SelectCore => SelectCore
);
syntax_view!(ResultColumn => ResultColumn);
syntax_view!(TableOrSubquery => TableOrSubquery);
syntax_view!(JoinClause => JoinClause);
syntax_view!(JoinOperator => JoinOperator);
syntax_view!(JoinConstraint => JoinConstraint);
syntax_view!(Expr => Expr);
syntax_view!(OrderByClause => OrderByClause);
syntax_view!(OrderingTerm => OrderingTerm);
syntax_view!(LimitClause => LimitClause);

impl<'a> Statement<'a> {
    #[must_use]
    pub fn select_statement(&self) -> Option<SelectStatement<'a>> {
        self.0.children().iter().find_map(SelectStatement::cast)
    }

    /// The first token of the statement, used to name unsupported statements.
    #[must_use]
    pub fn leading_word(&self) -> &'a str {
        self.0
            .text()
            .split_whitespace()
            .next()
            .unwrap_or_default()
    }
}

impl<'a> SelectStatement<'a> {
    #[must_use]
    pub fn select_core(&self) -> Option<SelectCore<'a>> {
        self.0.children().iter().find_map(SelectCore::cast)
    }

    #[must_use]
    pub fn order_by(&self) -> Option<OrderByClause<'a>> {
        self.0.children().iter().find_map(OrderByClause::cast)
    }

    #[must_use]
    pub fn limit(&self) -> Option<LimitClause<'a>> {
        self.0.children().iter().find_map(LimitClause::cast)
    }
}

impl<'a> SelectCore<'a> {
    #[must_use]
    pub fn distinct(&self) -> bool {
        self.0.has_keyword(Keyword::Distinct)
    }

    pub fn result_columns(&self) -> impl Iterator<Item = ResultColumn<'a>> + 'a {
        self.0.children().iter().filter_map(ResultColumn::cast)
    }

    #[must_use]
    pub fn join_clause(&self) -> Option<JoinClause<'a>> {
        self.0.children().iter().find_map(JoinClause::cast)
    }

    /// The FROM source when it is a single table or subquery.
    #[must_use]
    pub fn table_or_subquery(&self) -> Option<TableOrSubquery<'a>> {
        self.0.children().iter().find_map(TableOrSubquery::cast)
    }

    #[must_use]
    pub fn where_expr(&self) -> Option<Expr<'a>> {
        self.0
            .child_after_keyword(Keyword::Where, SyntaxKind::Expr)
            .and_then(Expr::cast)
    }

    #[must_use]
    pub fn group_by_exprs(&self) -> Vec<Expr<'a>> {
        if !self.0.has_keyword(Keyword::Group) {
            return Vec::new();
        }
        self.0
            .children()
            .iter()
            .skip_while(|child| !child.is_keyword(Keyword::By))
            .take_while(|child| !child.is_keyword(Keyword::Having))
            .filter_map(Expr::cast)
            .collect()
    }

    #[must_use]
    pub fn having_expr(&self) -> Option<Expr<'a>> {
        self.0
            .child_after_keyword(Keyword::Having, SyntaxKind::Expr)
            .and_then(Expr::cast)
    }
}

impl<'a> ResultColumn<'a> {
    #[must_use]
    pub fn is_star(&self) -> bool {
        self.0.child_of_kind(SyntaxKind::Star).is_some()
    }

    /// The table in front of `table.*`.
    #[must_use]
    pub fn table_qualifier(&self) -> Option<&'a SyntaxNode> {
        if !self.is_star() {
            return None;
        }
        self.0.child_of_kind(SyntaxKind::Identifier)
    }

    #[must_use]
    pub fn alias(&self) -> Option<&'a SyntaxNode> {
        self.0.child_of_kind(SyntaxKind::ColumnAlias)
    }

    #[must_use]
    pub fn expr(&self) -> Option<Expr<'a>> {
        self.0.children().iter().find_map(Expr::cast)
    }
}

impl<'a> TableOrSubquery<'a> {
    #[must_use]
    pub fn schema_name(&self) -> Option<&'a SyntaxNode> {
        self.0.child_of_kind(SyntaxKind::SchemaName)
    }

    #[must_use]
    pub fn table_name(&self) -> Option<&'a SyntaxNode> {
        self.0.child_of_kind(SyntaxKind::TableName)
    }

    #[must_use]
    pub fn select_statement(&self) -> Option<SelectStatement<'a>> {
        self.0.children().iter().find_map(SelectStatement::cast)
    }

    #[must_use]
    pub fn alias(&self) -> Option<&'a SyntaxNode> {
        self.0.child_of_kind(SyntaxKind::TableAlias)
    }

    /// The join inside a parenthesised FROM item such as `(a JOIN b)`.
    #[must_use]
    pub fn nested_join(&self) -> Option<JoinClause<'a>> {
        self.0.children().iter().find_map(JoinClause::cast)
    }

    /// The table inside a parenthesised FROM item such as `(a)`.
    #[must_use]
    pub fn nested_table(&self) -> Option<TableOrSubquery<'a>> {
        self.0.children().iter().find_map(TableOrSubquery::cast)
    }
}

impl<'a> JoinClause<'a> {
    #[must_use]
    pub fn tables(&self) -> Vec<TableOrSubquery<'a>> {
        self.0
            .children()
            .iter()
            .filter_map(TableOrSubquery::cast)
            .collect()
    }

    #[must_use]
    pub fn operators(&self) -> Vec<JoinOperator<'a>> {
        self.0
            .children()
            .iter()
            .filter_map(JoinOperator::cast)
            .collect()
    }

    /// One slot per join operator, holding the constraint that follows the
    /// operator's right-hand table, if any.
    #[must_use]
    pub fn constraints(&self) -> Vec<Option<JoinConstraint<'a>>> {
        let mut slots: Vec<Option<JoinConstraint<'a>>> = Vec::new();
        for child in self.0.children() {
            match child.kind() {
                SyntaxKind::JoinOperator => slots.push(None),
                SyntaxKind::JoinConstraint => {
                    if let Some(slot) = slots.last_mut() {
                        *slot = JoinConstraint::cast(child);
                    }
                }
                _ => {}
            }
        }
        slots
    }
}

impl JoinOperator<'_> {
    #[must_use]
    pub fn natural(&self) -> bool {
        self.0.has_keyword(Keyword::Natural)
    }

    #[must_use]
    pub fn left(&self) -> bool {
        self.0.has_keyword(Keyword::Left)
    }

    #[must_use]
    pub fn cross(&self) -> bool {
        self.0.has_keyword(Keyword::Cross)
    }

    #[must_use]
    pub fn outer(&self) -> bool {
        self.0.has_keyword(Keyword::Outer)
    }

    /// True for the comma form `FROM a, b`.
    #[must_use]
    pub fn is_comma(&self) -> bool {
        self.0.child_of_kind(SyntaxKind::Comma).is_some()
    }
}

impl<'a> JoinConstraint<'a> {
    #[must_use]
    pub fn on_expr(&self) -> Option<Expr<'a>> {
        if !self.0.has_keyword(Keyword::On) {
            return None;
        }
        self.0.children().iter().find_map(Expr::cast)
    }

    /// The parenthesised column list of a `USING` constraint.
    #[must_use]
    pub fn using_columns(&self) -> Option<&'a SyntaxNode> {
        if !self.0.has_keyword(Keyword::Using) {
            return None;
        }
        self.0.child_of_kind(SyntaxKind::ColumnNameList)
    }
}

impl<'a> Expr<'a> {
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.0.text()
    }

    #[must_use]
    pub fn exists_marker(&self) -> bool {
        self.0.has_keyword(Keyword::Exists)
    }

    /// True when a `NOT` token is a direct child (`NOT EXISTS`, `NOT IN`, ...).
    #[must_use]
    pub fn negated(&self) -> bool {
        self.0.has_keyword(Keyword::Not)
    }

    #[must_use]
    pub fn select_statement(&self) -> Option<SelectStatement<'a>> {
        self.0.children().iter().find_map(SelectStatement::cast)
    }

    /// The SELECT of a scalar subquery `( select )`.
    #[must_use]
    pub fn scalar_subquery(&self) -> Option<SelectStatement<'a>> {
        match self.0.children() {
            [open, select, close]
                if open.kind() == SyntaxKind::LeftParen
                    && close.kind() == SyntaxKind::RightParen =>
            {
                SelectStatement::cast(select)
            }
            _ => None,
        }
    }

    /// The inner expression of a parenthesised group `( expr )`.
    #[must_use]
    pub fn parenthesized(&self) -> Option<Self> {
        match self.0.children() {
            [open, inner, close]
                if open.kind() == SyntaxKind::LeftParen
                    && close.kind() == SyntaxKind::RightParen =>
            {
                Self::cast(inner)
            }
            _ => None,
        }
    }

    /// True when the expression renders with its own outer parentheses: a
    /// scalar subquery or a parenthesised group.
    #[must_use]
    pub fn is_parenthesized(&self) -> bool {
        self.scalar_subquery().is_some() || self.parenthesized().is_some()
    }

    /// `operand [NOT] IN ( expr )` with a single list element.
    #[must_use]
    pub fn in_single(&self) -> Option<(Self, Self)> {
        let (operand, rest) = self.in_operand()?;
        match rest {
            [open, element, close]
                if open.kind() == SyntaxKind::LeftParen
                    && close.kind() == SyntaxKind::RightParen =>
            {
                Self::cast(element).map(|element| (operand, element))
            }
            _ => None,
        }
    }

    /// Splits `operand [NOT] IN rest` into the operand and what follows `IN`.
    fn in_operand(&self) -> Option<(Self, &'a [SyntaxNode])> {
        let children = self.0.children();
        let (first, rest) = children.split_first()?;
        let operand = Self::cast(first)?;
        let rest = match rest {
            [not, rest @ ..] if not.is_keyword(Keyword::Not) => rest,
            _ => rest,
        };
        match rest {
            [in_kw, rest @ ..] if in_kw.is_keyword(Keyword::In) => Some((operand, rest)),
            _ => None,
        }
    }

    /// `operand [NOT] IN ( select )`.
    #[must_use]
    pub fn in_subquery(&self) -> Option<(Self, SelectStatement<'a>)> {
        let (operand, rest) = self.in_operand()?;
        match rest {
            [open, select, close]
                if open.kind() == SyntaxKind::LeftParen
                    && close.kind() == SyntaxKind::RightParen =>
            {
                SelectStatement::cast(select).map(|select| (operand, select))
            }
            _ => None,
        }
    }

    /// `left op right`, where the operator may span several tokens.
    ///
    /// A node is binary only when its first and last children are its two
    /// operands and everything between them is operator tokens.
    #[must_use]
    pub fn binary(&self) -> Option<(Self, Vec<&'a str>, Self)> {
        let children = self.0.children();
        let (first, rest) = children.split_first()?;
        let (last, between) = rest.split_last()?;
        let left = Self::cast(first)?;
        let right = Self::cast(last)?;
        if between.is_empty() || !between.iter().all(|node| node.kind().is_terminal()) {
            return None;
        }
        let operator = between.iter().map(SyntaxNode::text).collect();
        Some((left, operator, right))
    }
}

impl<'a> OrderByClause<'a> {
    pub fn terms(&self) -> impl Iterator<Item = OrderingTerm<'a>> + 'a {
        self.0.children().iter().filter_map(OrderingTerm::cast)
    }
}

impl<'a> OrderingTerm<'a> {
    #[must_use]
    pub fn expr(&self) -> Option<Expr<'a>> {
        self.0.children().iter().find_map(Expr::cast)
    }

    /// The `ASC`/`DESC` token following the expression.
    #[must_use]
    pub fn direction(&self) -> Option<&'a SyntaxNode> {
        match self.0.children() {
            [_, direction, ..] => Some(direction),
            _ => None,
        }
    }
}

impl<'a> LimitClause<'a> {
    #[must_use]
    pub fn bounds(&self) -> Vec<Expr<'a>> {
        self.0.children().iter().filter_map(Expr::cast).collect()
    }

    #[must_use]
    pub fn has_offset_keyword(&self) -> bool {
        self.0.has_keyword(Keyword::Offset)
    }
}
