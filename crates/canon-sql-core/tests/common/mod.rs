#![allow(dead_code)]

use canon_sql_core::{Error, ParseError, SyntaxNode, TranslateError, parse, translate};
use pretty_assertions::assert_eq;

pub fn tree(sql: &str) -> SyntaxNode {
    parse(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    parse(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn canonical(sql: &str) -> String {
    translate(sql).unwrap_or_else(|e| panic!("Failed to translate: {sql}\nError: {e:?}"))
}

pub fn translate_err(sql: &str) -> TranslateError {
    match translate(sql) {
        Err(Error::Translate(e)) => e,
        other => panic!("Expected translation error for: {sql}, got {other:?}"),
    }
}

/// Checks that `sql` translates to `expected` and that `expected` is a
/// fixed point: translating it again yields the same string.
pub fn assert_canonical(sql: &str, expected: &str) {
    let first = canonical(sql);
    assert_eq!(first, expected, "Input: {sql}");
    let second = canonical(&first);
    assert_eq!(
        first, second,
        "Not a fixed point.\n  Input:    {sql}\n  First:    {first}\n  Second:   {second}"
    );
}

/// Shorthand for inputs that are already canonical.
pub fn assert_unchanged(sql: &str) {
    assert_canonical(sql, sql);
}
