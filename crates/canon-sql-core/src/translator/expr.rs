//! Expression rendering.

use super::{TranslateError, TranslateObserver, Translator};
use crate::syntax::{Expr, SyntaxKind};

impl<O: TranslateObserver> Translator<O> {
    /// Renders an expression by shape, in priority order: EXISTS, scalar
    /// subquery, parenthesised group, IN subquery, binary operator, then
    /// source text.
    pub(super) fn render_expr(
        &self,
        expr: Expr<'_>,
        depth: usize,
    ) -> Result<String, TranslateError> {
        let depth = self.enter(SyntaxKind::Expr, depth)?;

        if expr.exists_marker() {
            let select = expr
                .select_statement()
                .ok_or_else(|| TranslateError::malformed(SyntaxKind::Expr, "EXISTS subquery"))?;
            let inner = self.render_select_statement(select, depth)?;
            let not = if expr.negated() { "NOT " } else { "" };
            return Ok(format!("{not}EXISTS ({inner})"));
        }

        if let Some(select) = expr.scalar_subquery() {
            return Ok(format!("({})", self.render_select_statement(select, depth)?));
        }

        if let Some(inner) = expr.parenthesized() {
            let rendered = self.render_expr(inner, depth)?;
            // Redundant grouping collapses to a single pair.
            if inner.is_parenthesized() {
                return Ok(rendered);
            }
            return Ok(format!("({rendered})"));
        }

        if let Some((operand, select)) = expr.in_subquery() {
            let operand = self.render_expr(operand, depth)?;
            let inner = self.render_select_statement(select, depth)?;
            let not = if expr.negated() { "NOT " } else { "" };
            return Ok(format!("{operand} {not}IN ({inner})"));
        }

        // `x IN ((SELECT ..))` is a one-element list, not a membership test,
        // so the list parentheses stay.
        if let Some((operand, element)) = expr
            .in_single()
            .filter(|(_, element)| element.is_parenthesized())
        {
            let operand = self.render_expr(operand, depth)?;
            let element = self.render_expr(element, depth)?;
            let not = if expr.negated() { "NOT " } else { "" };
            return Ok(format!("{operand} {not}IN ({element})"));
        }

        if let Some((left, operator, right)) = expr.binary() {
            let left = self.render_expr(left, depth)?;
            let right = self.render_expr(right, depth)?;
            return Ok(format!("{left} {} {right}", operator.join(" ")));
        }

        if expr.text().is_empty() {
            return Err(TranslateError::UnrenderableExpression {
                text: String::new(),
            });
        }
        Ok(expr.text().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;
    use crate::syntax::{SyntaxKind, SyntaxNode};
    use crate::translator::{TranslateError, Translator};

    fn translate(sql: &str) -> String {
        Translator::new().translate(&parse(sql).unwrap()).unwrap()
    }

    #[test]
    fn test_binary_spacing_is_normalized() {
        assert_eq!(
            translate("SELECT a FROM t WHERE a>1 AND b<>'x'"),
            "SELECT a FROM t WHERE a > 1 AND b <> 'x'"
        );
    }

    #[test]
    fn test_multi_token_operators() {
        assert_eq!(
            translate("SELECT a FROM t WHERE a IS NOT NULL AND b NOT LIKE 'x%'"),
            "SELECT a FROM t WHERE a IS NOT NULL AND b NOT LIKE 'x%'"
        );
    }

    #[test]
    fn test_leaf_shapes_pass_through() {
        assert_eq!(
            translate(
                "SELECT coalesce(a,  0), -b, CASE WHEN c THEN 1 ELSE 2 END FROM t \
                 WHERE d BETWEEN 1 AND 9"
            ),
            "SELECT coalesce(a,  0), -b, CASE WHEN c THEN 1 ELSE 2 END FROM t \
             WHERE d BETWEEN 1 AND 9"
        );
    }

    #[test]
    fn test_exists_and_not_exists() {
        assert_eq!(
            translate("SELECT * FROM p WHERE NOT EXISTS (SELECT 1 FROM i WHERE i.pid = p.id)"),
            "SELECT * FROM p WHERE NOT EXISTS (SELECT 1 FROM i WHERE i.pid = p.id)"
        );
    }

    #[test]
    fn test_scalar_subquery_operand() {
        assert_eq!(
            translate("SELECT name, (SELECT max(total) FROM orders) AS top FROM users"),
            "SELECT name, (SELECT max(total) FROM orders) AS top FROM users"
        );
    }

    #[test]
    fn test_in_subquery_is_translated() {
        assert_eq!(
            translate("SELECT * FROM a WHERE id NOT IN (SELECT a_id FROM b LIMIT 1, 2)"),
            "SELECT * FROM a WHERE id NOT IN (SELECT a_id FROM b LIMIT 2 OFFSET 1)"
        );
    }

    #[test]
    fn test_parenthesised_group_is_rendered() {
        assert_eq!(
            translate("SELECT a FROM t WHERE (a=1 OR b<2) AND ((c))"),
            "SELECT a FROM t WHERE (a = 1 OR b < 2) AND (c)"
        );
    }

    #[test]
    fn test_parenthesised_subquery_keeps_one_pair() {
        assert_eq!(
            translate("SELECT a FROM t WHERE a = (((SELECT b FROM u LIMIT 1, 2)))"),
            "SELECT a FROM t WHERE a = (SELECT b FROM u LIMIT 2 OFFSET 1)"
        );
    }

    #[test]
    fn test_single_element_in_list_keeps_list_parentheses() {
        assert_eq!(
            translate("SELECT a FROM t WHERE a IN ((SELECT b FROM u LIMIT 1, 2))"),
            "SELECT a FROM t WHERE a IN ((SELECT b FROM u LIMIT 2 OFFSET 1))"
        );
    }

    #[test]
    fn test_empty_expression_is_unrenderable() {
        let expr = SyntaxNode::leaf(SyntaxKind::Expr, "");
        assert_eq!(
            Translator::new().render(Some(&expr)).unwrap_err(),
            TranslateError::UnrenderableExpression {
                text: String::new()
            }
        );
    }

    #[test]
    fn test_exists_without_select_is_malformed() {
        let expr = SyntaxNode::branch(
            SyntaxKind::Expr,
            vec![SyntaxNode::leaf(
                SyntaxKind::Keyword(crate::lexer::Keyword::Exists),
                "EXISTS",
            )],
        );
        assert!(matches!(
            Translator::new().render(Some(&expr)),
            Err(TranslateError::MalformedTree {
                construct: SyntaxKind::Expr,
                ..
            })
        ));
    }
}
