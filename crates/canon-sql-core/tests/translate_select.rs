//! Tests for SELECT core assembly: result columns, FROM items, WHERE,
//! GROUP BY and HAVING.

mod common;
use common::*;

#[test]
fn plain_column_list() {
    assert_unchanged("SELECT id, name FROM users");
}

#[test]
fn where_with_and() {
    assert_unchanged("SELECT * FROM users WHERE age > 18 AND active = true");
}

#[test]
fn keywords_are_uppercased_and_spacing_collapsed() {
    assert_canonical(
        "select   id ,name\n  from users\twhere age>=21",
        "SELECT id, name FROM users WHERE age >= 21",
    );
}

#[test]
fn comments_are_dropped() {
    assert_canonical(
        "SELECT id /* primary key */ FROM users -- everyone\n",
        "SELECT id FROM users",
    );
}

#[test]
fn star_forms() {
    assert_unchanged("SELECT * FROM users");
    assert_unchanged("SELECT users.* FROM users");
    assert_unchanged("SELECT u.*, o.id FROM users AS u JOIN orders AS o ON u.id = o.uid");
}

#[test]
fn column_alias_is_verbatim() {
    assert_canonical(
        r#"SELECT price * qty "Line Total" FROM items"#,
        r#"SELECT price * qty AS "Line Total" FROM items"#,
    );
    assert_unchanged("SELECT count(*) AS n FROM items");
}

#[test]
fn distinct_and_all() {
    assert_unchanged("SELECT DISTINCT city FROM users");
    assert_canonical("SELECT ALL city FROM users", "SELECT city FROM users");
}

#[test]
fn table_aliases_gain_as() {
    assert_canonical("SELECT u.id FROM users u", "SELECT u.id FROM users AS u");
    assert_unchanged("SELECT u.id FROM main.users AS u");
}

#[test]
fn quoted_identifiers_are_kept() {
    assert_unchanged(r#"SELECT "first name", [last name], `age` FROM "user table""#);
}

#[test]
fn group_by_and_having() {
    assert_canonical(
        "SELECT dept, avg(salary) FROM staff GROUP BY dept , site HAVING avg(salary)>1000",
        "SELECT dept, avg(salary) FROM staff GROUP BY dept, site HAVING avg(salary) > 1000",
    );
}

#[test]
fn parameters_and_literals_pass_through() {
    assert_unchanged(
        "SELECT * FROM t WHERE a = ? AND b = :name AND c = @v AND d = $x AND e = x'0F' AND f = 1.5e3",
    );
}

#[test]
fn nested_or_and_grouping() {
    assert_unchanged("SELECT * FROM t WHERE (a = 1 OR b = 2) AND c = 3");
    assert_unchanged("SELECT * FROM t WHERE a = 1 OR b = 2 AND c = 3");
}

#[test]
fn trailing_semicolon_is_dropped() {
    assert_canonical("SELECT a FROM t;", "SELECT a FROM t");
}

#[test]
fn only_first_statement_is_translated() {
    assert_canonical("SELECT a FROM t; SELECT b FROM u", "SELECT a FROM t");
}
