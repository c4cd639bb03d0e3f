//! Join chain rendering.

use std::fmt;

use super::{TranslateError, TranslateObserver, Translator};
use crate::syntax::{JoinClause, JoinConstraint, JoinOperator, SyntaxKind};

/// The canonical keyword a join operator renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKeyword {
    /// `JOIN`, also used for `INNER JOIN` and the comma form.
    Join,
    /// `NATURAL JOIN`.
    Natural,
    /// `CROSS JOIN`.
    Cross,
    /// `LEFT JOIN`.
    Left,
    /// `LEFT OUTER JOIN`.
    LeftOuter,
}

impl JoinKeyword {
    /// Picks the keyword from the operator's own markers.
    ///
    /// NATURAL wins over CROSS, which wins over LEFT.
    #[must_use]
    pub fn from_operator(operator: JoinOperator<'_>) -> Self {
        if operator.natural() {
            Self::Natural
        } else if operator.cross() {
            Self::Cross
        } else if operator.left() {
            if operator.outer() {
                Self::LeftOuter
            } else {
                Self::Left
            }
        } else {
            Self::Join
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Join => "JOIN",
            Self::Natural => "NATURAL JOIN",
            Self::Cross => "CROSS JOIN",
            Self::Left => "LEFT JOIN",
            Self::LeftOuter => "LEFT OUTER JOIN",
        }
    }
}

impl fmt::Display for JoinKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<O: TranslateObserver> Translator<O> {
    /// Renders `base KEYWORD table [constraint] ...` left to right.
    pub(super) fn render_join_clause(
        &self,
        join: JoinClause<'_>,
        depth: usize,
    ) -> Result<String, TranslateError> {
        let depth = self.enter(SyntaxKind::JoinClause, depth)?;

        let tables = join.tables();
        let operators = join.operators();
        let Some((first, rest)) = tables.split_first() else {
            return Err(TranslateError::malformed(SyntaxKind::JoinClause, "table"));
        };
        if operators.len() != rest.len() {
            return Err(TranslateError::malformed(
                SyntaxKind::JoinClause,
                "join operator for every joined table",
            ));
        }

        let mut sql = self.render_table_or_subquery(*first, depth)?;
        for ((operator, table), constraint) in operators.iter().zip(rest).zip(join.constraints()) {
            let keyword = JoinKeyword::from_operator(*operator);
            let table = self.render_table_or_subquery(*table, depth)?;
            let constraint = self.render_join_constraint(constraint, depth)?;
            self.observer.join_rendered(keyword, &table);

            let step = format!("{sql} {keyword} {table} {constraint}");
            sql = step.trim_end().to_owned();
        }

        Ok(sql)
    }

    /// Renders `ON expr` or `USING (cols)`; no constraint renders as "".
    pub(super) fn render_join_constraint(
        &self,
        constraint: Option<JoinConstraint<'_>>,
        depth: usize,
    ) -> Result<String, TranslateError> {
        let Some(constraint) = constraint else {
            return Ok(String::new());
        };
        let depth = self.enter(SyntaxKind::JoinConstraint, depth)?;

        if let Some(condition) = constraint.on_expr() {
            return Ok(format!("ON {}", self.render_expr(condition, depth)?));
        }
        constraint.using_columns().map_or_else(
            || {
                Err(TranslateError::malformed(
                    SyntaxKind::JoinConstraint,
                    "ON expression or USING column list",
                ))
            },
            |columns| Ok(format!("USING {}", columns.text())),
        )
    }
}
