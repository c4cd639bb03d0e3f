//! Concrete syntax tree for a single SQL statement.
//!
//! The tree is what the parser produces and the translator consumes. Every
//! node carries its kind, its span, the exact source text under that span and
//! its children in source order. Typed views (`SelectCore`, `JoinClause`, ...)
//! wrap a node of the matching kind and expose the per-construct accessors the
//! translator relies on.

mod kind;
mod node;
mod views;

pub use kind::SyntaxKind;
pub use node::SyntaxNode;
pub use views::{
    Expr, JoinClause, JoinConstraint, JoinOperator, LimitClause, OrderByClause, OrderingTerm,
    ResultColumn, SelectCore, SelectStatement, Statement, TableOrSubquery,
};
