//! SELECT statement, select core, result column and FROM item rendering.

use super::{TranslateError, TranslateObserver, Translator};
use crate::syntax::{ResultColumn, SelectCore, SelectStatement, SyntaxKind, TableOrSubquery};

impl<O: TranslateObserver> Translator<O> {
    /// Renders `core [ORDER BY ...] [LIMIT ...]`.
    pub(super) fn render_select_statement(
        &self,
        select: SelectStatement<'_>,
        depth: usize,
    ) -> Result<String, TranslateError> {
        let depth = self.enter(SyntaxKind::SelectStatement, depth)?;
        let core = select
            .select_core()
            .ok_or_else(|| TranslateError::malformed(SyntaxKind::SelectStatement, "select core"))?;

        let mut parts = vec![self.render_select_core(core, depth)?];
        if let Some(order_by) = select.order_by() {
            parts.push(self.render_order_by(order_by, depth)?);
        }
        if let Some(limit) = select.limit() {
            parts.push(self.render_limit(limit, depth)?);
        }
        Ok(parts.join(" "))
    }

    /// Renders `SELECT [DISTINCT] cols FROM src [WHERE ..] [GROUP BY ..] [HAVING ..]`.
    pub(super) fn render_select_core(
        &self,
        core: SelectCore<'_>,
        depth: usize,
    ) -> Result<String, TranslateError> {
        let depth = self.enter(SyntaxKind::SelectCore, depth)?;

        let columns = core
            .result_columns()
            .map(|column| self.render_result_column(column, depth))
            .collect::<Result<Vec<_>, _>>()?;
        if columns.is_empty() {
            return Err(TranslateError::malformed(
                SyntaxKind::SelectCore,
                "result column",
            ));
        }

        let from = if let Some(join) = core.join_clause() {
            self.render_join_clause(join, depth)?
        } else if let Some(table) = core.table_or_subquery() {
            self.render_table_or_subquery(table, depth)?
        } else {
            return Err(TranslateError::malformed(
                SyntaxKind::SelectCore,
                "FROM source",
            ));
        };

        let mut sql = String::from("SELECT ");
        if core.distinct() {
            sql.push_str("DISTINCT ");
        }
        sql.push_str(&columns.join(", "));
        sql.push_str(" FROM ");
        sql.push_str(&from);

        if let Some(condition) = core.where_expr() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.render_expr(condition, depth)?);
        }

        // Grouping terms are emitted as written.
        let group_by = core.group_by_exprs();
        if !group_by.is_empty() {
            let terms: Vec<&str> = group_by.iter().map(|expr| expr.text()).collect();
            sql.push_str(" GROUP BY ");
            sql.push_str(&terms.join(", "));
        }

        if let Some(having) = core.having_expr() {
            sql.push_str(" HAVING ");
            sql.push_str(&self.render_expr(having, depth)?);
        }

        Ok(sql)
    }

    pub(super) fn render_result_column(
        &self,
        column: ResultColumn<'_>,
        depth: usize,
    ) -> Result<String, TranslateError> {
        let depth = self.enter(SyntaxKind::ResultColumn, depth)?;

        if column.is_star() {
            return Ok(column
                .table_qualifier()
                .map_or_else(|| String::from("*"), |table| format!("{}.*", table.text())));
        }

        match (column.expr(), column.alias()) {
            (Some(expr), Some(alias)) => Ok(format!(
                "{} AS {}",
                self.render_expr(expr, depth)?,
                alias.text()
            )),
            (Some(expr), None) => self.render_expr(expr, depth),
            (None, _) => Ok(column.syntax().text().to_owned()),
        }
    }

    /// Renders a table reference, a subquery or a parenthesised FROM item.
    pub(super) fn render_table_or_subquery(
        &self,
        table: TableOrSubquery<'_>,
        depth: usize,
    ) -> Result<String, TranslateError> {
        let depth = self.enter(SyntaxKind::TableOrSubquery, depth)?;

        let mut sql = if let Some(name) = table.table_name() {
            table.schema_name().map_or_else(
                || name.text().to_owned(),
                |schema| format!("{}.{}", schema.text(), name.text()),
            )
        } else if let Some(select) = table.select_statement() {
            format!("({})", self.render_select_statement(select, depth)?)
        } else if let Some(join) = table.nested_join() {
            return Ok(format!("({})", self.render_join_clause(join, depth)?));
        } else if let Some(inner) = table.nested_table() {
            let rendered = self.render_table_or_subquery(inner, depth)?;
            // A subquery or an already grouped item carries its own parentheses.
            if inner.select_statement().is_some()
                || inner.nested_join().is_some()
                || inner.nested_table().is_some()
            {
                return Ok(rendered);
            }
            return Ok(format!("({rendered})"));
        } else {
            return Ok(table.syntax().text().to_owned());
        };

        if let Some(alias) = table.alias() {
            sql.push_str(" AS ");
            sql.push_str(alias.text());
        }
        Ok(sql)
    }
}
