//! Tests for join chain normalization.

mod common;
use common::*;

use canon_sql_core::{JoinKeyword, Translator, TranslateObserver};
use std::sync::Mutex;

#[test]
fn inner_join_becomes_join() {
    assert_canonical(
        "SELECT users.name FROM users INNER JOIN orders ON users.id = orders.user_id",
        "SELECT users.name FROM users JOIN orders ON users.id = orders.user_id",
    );
}

#[test]
fn comma_join_becomes_join() {
    assert_canonical(
        "SELECT * FROM a, b WHERE a.id = b.id",
        "SELECT * FROM a JOIN b WHERE a.id = b.id",
    );
}

#[test]
fn every_operator_shape() {
    let cases = [
        ("a JOIN b", "a JOIN b"),
        ("a INNER JOIN b", "a JOIN b"),
        ("a CROSS JOIN b", "a CROSS JOIN b"),
        ("a LEFT JOIN b", "a LEFT JOIN b"),
        ("a LEFT OUTER JOIN b", "a LEFT OUTER JOIN b"),
        ("a NATURAL JOIN b", "a NATURAL JOIN b"),
        ("a NATURAL INNER JOIN b", "a NATURAL JOIN b"),
        ("a NATURAL LEFT JOIN b", "a NATURAL JOIN b"),
        ("a NATURAL LEFT OUTER JOIN b", "a NATURAL JOIN b"),
        ("a natural cross join b", "a NATURAL JOIN b"),
    ];
    for (from, expected) in cases {
        assert_canonical(
            &format!("SELECT * FROM {from}"),
            &format!("SELECT * FROM {expected}"),
        );
    }
}

#[test]
fn keyword_comes_from_operator_not_table_names() {
    assert_unchanged("SELECT * FROM naturals JOIN crossroads ON naturals.id = crossroads.id");
    assert_unchanged("SELECT * FROM lefty LEFT JOIN outerwear ON lefty.id = outerwear.lid");
    assert_unchanged("SELECT * FROM joined JOIN inner_t ON joined.id = inner_t.id");
}

#[test]
fn table_name_never_carries_join_keyword() {
    let root = tree("SELECT * FROM users LEFT JOIN orders ON users.id = orders.uid");
    let dump = root.to_string();
    assert!(dump.contains("(table_name users)"), "{dump}");
    assert!(dump.contains("(join_operator LEFT JOIN)"), "{dump}");
}

#[test]
fn constraints_are_positional() {
    assert_unchanged(
        "SELECT * FROM a JOIN b ON a.id = b.aid CROSS JOIN c LEFT JOIN d USING (cid) JOIN e",
    );
}

#[test]
fn using_list_is_raw() {
    assert_unchanged("SELECT * FROM a JOIN b USING (id, region)");
}

#[test]
fn subquery_as_join_target() {
    assert_canonical(
        "SELECT * FROM users u LEFT JOIN (SELECT uid, count(*) n FROM orders GROUP BY uid) c ON c.uid = u.id",
        "SELECT * FROM users AS u LEFT JOIN (SELECT uid, count(*) AS n FROM orders GROUP BY uid) AS c ON c.uid = u.id",
    );
}

#[test]
fn parenthesised_join_group() {
    assert_unchanged("SELECT * FROM a JOIN (b LEFT JOIN c ON b.id = c.bid) ON a.id = b.aid");
}

#[test]
fn observer_receives_steps() {
    #[derive(Default)]
    struct Steps(Mutex<Vec<String>>);

    impl TranslateObserver for Steps {
        fn join_rendered(&self, keyword: JoinKeyword, table: &str) {
            self.0.lock().unwrap().push(format!("{keyword} {table}"));
        }
    }

    let steps = Steps::default();
    let root = tree("SELECT * FROM a NATURAL JOIN b, c LEFT OUTER JOIN d");
    let sql = Translator::new()
        .with_observer(&steps)
        .translate(&root)
        .unwrap();
    assert_eq!(sql, "SELECT * FROM a NATURAL JOIN b JOIN c LEFT OUTER JOIN d");
    assert_eq!(
        *steps.0.lock().unwrap(),
        vec!["NATURAL JOIN b", "JOIN c", "LEFT OUTER JOIN d"]
    );
}
