//! Tests for the structural dump and the shape of parsed trees.

mod common;
use common::*;

use canon_sql_core::syntax::{SelectStatement, Statement};
use canon_sql_core::{SqlTranslator, SyntaxKind, SyntaxNode};
use pretty_assertions::assert_eq;

fn first_select(root: &SyntaxNode) -> SelectStatement<'_> {
    let list = &root.children()[0];
    let statement = list.child_of_kind(SyntaxKind::Statement).unwrap();
    Statement::cast(statement)
        .and_then(|s| s.select_statement())
        .unwrap()
}

#[test]
fn lisp_dump_of_simple_select() {
    assert_eq!(
        tree("SELECT a FROM t").to_string(),
        "(parse (sql_stmt_list (sql_stmt (select_stmt (select_core SELECT (result_column (expr a)) FROM (table_or_subquery (table_name t)))))))"
    );
}

#[test]
fn lisp_dump_of_limit() {
    let dump = tree("SELECT * FROM t LIMIT 10, 5").to_string();
    assert!(dump.ends_with("(limit_stmt LIMIT (expr 10) , (expr 5))))))"), "{dump}");
}

#[test]
fn dump_keeps_source_spelling() {
    let dump = tree("select a from t inner join u on t.id = u.id").to_string();
    assert!(dump.contains("(join_operator inner join)"), "{dump}");
}

#[test]
fn node_text_matches_span() {
    fn check(node: &SyntaxNode, sql: &str) {
        assert_eq!(&sql[node.span().start..node.span().end], node.text());
        for child in node.children() {
            check(child, sql);
        }
    }

    let sql = "SELECT  a ,  b   FROM t  WHERE x=1";
    check(&tree(sql), sql);
}

#[test]
fn accessors_follow_source_order() {
    let root = tree(
        "SELECT a, b AS bee, c.* FROM t WHERE a = 1 GROUP BY a, b HAVING b > 0 \
         ORDER BY a DESC LIMIT 3",
    );
    let select = first_select(&root);
    let core = select.select_core().unwrap();

    let columns: Vec<_> = core.result_columns().collect();
    assert_eq!(columns.len(), 3);
    assert_eq!(columns[1].alias().map(SyntaxNode::text), Some("bee"));
    assert_eq!(columns[2].table_qualifier().map(SyntaxNode::text), Some("c"));

    assert_eq!(core.where_expr().map(|e| e.text()), Some("a = 1"));
    let groups: Vec<_> = core.group_by_exprs().iter().map(|e| e.text()).collect();
    assert_eq!(groups, vec!["a", "b"]);
    assert_eq!(core.having_expr().map(|e| e.text()), Some("b > 0"));

    let order_by = select.order_by().unwrap();
    let term = order_by.terms().next().unwrap();
    assert_eq!(term.direction().map(SyntaxNode::text), Some("DESC"));
    assert_eq!(select.limit().unwrap().bounds().len(), 1);
}

#[test]
fn join_accessors_align() {
    let root = tree("SELECT * FROM a JOIN b ON a.id = b.id, c LEFT JOIN d USING (k)");
    let core = first_select(&root).select_core().unwrap();
    let join = core.join_clause().unwrap();
    assert_eq!(join.tables().len(), 4);
    assert_eq!(join.operators().len(), 3);
    let constraints = join.constraints();
    assert!(constraints[0].is_some_and(|c| c.on_expr().is_some()));
    assert!(constraints[1].is_none());
    assert_eq!(
        constraints[2].and_then(|c| c.using_columns()).map(SyntaxNode::text),
        Some("(k)")
    );
    assert!(join.operators()[1].is_comma());
}

#[test]
fn json_dump_via_serde() {
    let value = serde_json::to_value(tree("SELECT a FROM t")).unwrap();
    assert_eq!(value["kind"], "Parse");
    assert_eq!(value["children"][0]["kind"], "StatementList");
}

#[test]
fn driver_writes_dump() {
    let mut out = Vec::new();
    SqlTranslator::new("SELECT a FROM t; SELECT b FROM u")
        .write_syntax_tree(&mut out)
        .unwrap();
    let dump = String::from_utf8(out).unwrap();
    assert!(dump.contains("(table_name t)"));
    assert!(dump.contains("(table_name u)"));
    assert!(dump.contains(" ; "));
}

#[test]
fn tree_is_not_changed_by_translation() {
    let root = tree("SELECT * FROM users u INNER JOIN orders o ON u.id = o.uid LIMIT 1, 2");
    let before = root.clone();
    canon_sql_core::Translator::new().translate(&root).unwrap();
    assert_eq!(root, before);
}
