//! ORDER BY and LIMIT rendering.

use super::{TranslateError, TranslateObserver, Translator};
use crate::syntax::{LimitClause, OrderByClause, OrderingTerm, SyntaxKind};

impl<O: TranslateObserver> Translator<O> {
    pub(super) fn render_order_by(
        &self,
        order_by: OrderByClause<'_>,
        depth: usize,
    ) -> Result<String, TranslateError> {
        let depth = self.enter(SyntaxKind::OrderByClause, depth)?;
        let terms = order_by
            .terms()
            .map(|term| self.render_ordering_term(term, depth))
            .collect::<Result<Vec<_>, _>>()?;
        if terms.is_empty() {
            return Err(TranslateError::malformed(
                SyntaxKind::OrderByClause,
                "ordering term",
            ));
        }
        Ok(format!("ORDER BY {}", terms.join(", ")))
    }

    /// Renders the term's source text and its direction, if any.
    pub(super) fn render_ordering_term(
        &self,
        term: OrderingTerm<'_>,
        depth: usize,
    ) -> Result<String, TranslateError> {
        self.enter(SyntaxKind::OrderingTerm, depth)?;
        let expr = term
            .expr()
            .ok_or_else(|| TranslateError::malformed(SyntaxKind::OrderingTerm, "expression"))?;
        Ok(term.direction().map_or_else(
            || expr.text().to_owned(),
            |direction| format!("{} {}", expr.text(), direction.text()),
        ))
    }

    /// Renders `LIMIT count [OFFSET offset]`.
    ///
    /// The comma form `LIMIT offset, count` swaps its operands.
    pub(super) fn render_limit(
        &self,
        limit: LimitClause<'_>,
        depth: usize,
    ) -> Result<String, TranslateError> {
        let depth = self.enter(SyntaxKind::LimitClause, depth)?;
        match (limit.bounds().as_slice(), limit.has_offset_keyword()) {
            ([count], _) => Ok(format!("LIMIT {}", self.render_expr(*count, depth)?)),
            ([count, offset], true) | ([offset, count], false) => Ok(format!(
                "LIMIT {} OFFSET {}",
                self.render_expr(*count, depth)?,
                self.render_expr(*offset, depth)?
            )),
            _ => Err(TranslateError::malformed(
                SyntaxKind::LimitClause,
                "one or two bound expressions",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;
    use crate::translator::Translator;

    fn translate(sql: &str) -> String {
        Translator::new().translate(&parse(sql).unwrap()).unwrap()
    }

    #[test]
    fn test_limit_forms() {
        assert_eq!(
            translate("SELECT * FROM users LIMIT 10"),
            "SELECT * FROM users LIMIT 10"
        );
        assert_eq!(
            translate("SELECT * FROM users LIMIT 10, 5"),
            "SELECT * FROM users LIMIT 5 OFFSET 10"
        );
        assert_eq!(
            translate("SELECT * FROM users LIMIT 5 OFFSET 10"),
            "SELECT * FROM users LIMIT 5 OFFSET 10"
        );
    }

    #[test]
    fn test_limit_bounds_are_expressions() {
        assert_eq!(
            translate("SELECT * FROM t LIMIT :page*20, 20"),
            "SELECT * FROM t LIMIT 20 OFFSET :page * 20"
        );
    }

    #[test]
    fn test_order_by_keeps_direction_case() {
        assert_eq!(
            translate("SELECT * FROM t ORDER BY name desc, id"),
            "SELECT * FROM t ORDER BY name desc, id"
        );
    }

    #[test]
    fn test_clause_order() {
        assert_eq!(
            translate("SELECT a FROM t WHERE a > 0 ORDER BY a ASC LIMIT 3"),
            "SELECT a FROM t WHERE a > 0 ORDER BY a ASC LIMIT 3"
        );
    }
}
