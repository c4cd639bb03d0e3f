//! # canon-sql-core
//!
//! Canonicalizes SQLite-flavoured SELECT statements.
//!
//! This crate provides:
//! - A hand-written lexer and recursive descent parser with Pratt expression
//!   parsing that produce a concrete syntax tree
//! - A translator that renders the tree back to SQL in one canonical form
//! - A structural dump of the tree, as a Lisp-style string or as JSON
//!
//! ## Canonical Form
//!
//! ```rust
//! use canon_sql_core::translate;
//!
//! let sql = translate("SELECT u.name FROM users u INNER JOIN orders o ON u.id = o.uid LIMIT 20, 10")?;
//! assert_eq!(
//!     sql,
//!     "SELECT u.name FROM users AS u JOIN orders AS o ON u.id = o.uid LIMIT 10 OFFSET 20"
//! );
//! # Ok::<(), canon_sql_core::Error>(())
//! ```
//!
//! Translation is a projection: translating its own output changes nothing.
//!
//! ## Inspecting the Tree
//!
//! ```rust
//! use canon_sql_core::parser::parse;
//!
//! let tree = parse("SELECT a FROM t")?;
//! assert_eq!(
//!     tree.to_string(),
//!     "(parse (sql_stmt_list (sql_stmt (select_stmt (select_core SELECT \
//!      (result_column (expr a)) FROM (table_or_subquery (table_name t)))))))"
//! );
//! # Ok::<(), canon_sql_core::parser::ParseError>(())
//! ```

pub mod driver;
pub mod lexer;
pub mod parser;
pub mod syntax;
pub mod translator;

pub use driver::{Error, SqlTranslator, translate};
pub use parser::{ParseError, Parser, parse};
pub use syntax::{SyntaxKind, SyntaxNode};
pub use translator::{
    JoinKeyword, NoopObserver, TracingObserver, TranslateError, TranslateObserver, Translator,
    TranslatorConfig,
};
