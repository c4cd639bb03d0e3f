//! End-to-end driver: source text in, canonical SQL or a tree dump out.

use std::io;

use tracing::debug;

use crate::parser::{ParseError, Parser};
use crate::syntax::SyntaxNode;
use crate::translator::{
    NoopObserver, TranslateError, TranslateObserver, Translator, TranslatorConfig,
};

/// Any failure of the end-to-end pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The tree could not be translated.
    #[error(transparent)]
    Translate(#[from] TranslateError),

    /// Writing the tree dump failed.
    #[error("failed to write syntax tree: {0}")]
    Io(#[from] io::Error),

    /// Serializing the tree dump failed.
    #[error("failed to serialize syntax tree: {0}")]
    Json(#[from] serde_json::Error),
}

/// Owns a SQL string and runs the parser and translator over it.
///
/// ```rust
/// use canon_sql_core::SqlTranslator;
///
/// let translator = SqlTranslator::new("SELECT * FROM users LIMIT 10, 5");
/// assert_eq!(
///     translator.translate().unwrap(),
///     "SELECT * FROM users LIMIT 5 OFFSET 10"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SqlTranslator<O = NoopObserver> {
    sql: String,
    translator: Translator<O>,
}

impl SqlTranslator {
    /// Creates a driver for `sql` with the default settings.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            translator: Translator::new(),
        }
    }
}

impl<O: TranslateObserver> SqlTranslator<O> {
    /// Replaces the configuration. The depth limit applies to the parser too.
    #[must_use]
    pub fn with_config(mut self, config: TranslatorConfig) -> Self {
        self.translator = self.translator.with_config(config);
        self
    }

    /// Replaces the translation observer.
    #[must_use]
    pub fn with_observer<P: TranslateObserver>(self, observer: P) -> SqlTranslator<P> {
        SqlTranslator {
            sql: self.sql,
            translator: self.translator.with_observer(observer),
        }
    }

    /// Returns the source text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Parses the source text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Parse` if the source is not valid SQL.
    pub fn syntax_tree(&self) -> Result<SyntaxNode, Error> {
        let tree = Parser::new(&self.sql)
            .with_max_depth(self.translator.config().max_depth)
            .parse()?;
        debug!(height = tree.height(), "parsed syntax tree");
        Ok(tree)
    }

    /// Parses and translates the source text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Parse` or `Error::Translate`.
    pub fn translate(&self) -> Result<String, Error> {
        let tree = self.syntax_tree()?;
        let sql = self.translator.translate(&tree)?;
        debug!(input_len = self.sql.len(), output_len = sql.len(), "translated statement");
        Ok(sql)
    }

    /// Writes the Lisp-style dump of the syntax tree followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns `Error::Parse` or `Error::Io`.
    pub fn write_syntax_tree(&self, w: &mut impl io::Write) -> Result<(), Error> {
        let tree = self.syntax_tree()?;
        writeln!(w, "{tree}")?;
        Ok(())
    }

    /// Writes the syntax tree as pretty-printed JSON followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns `Error::Parse`, `Error::Json` or `Error::Io`.
    pub fn write_syntax_tree_json(&self, w: &mut impl io::Write) -> Result<(), Error> {
        let tree = self.syntax_tree()?;
        serde_json::to_writer_pretty(&mut *w, &tree)?;
        writeln!(w)?;
        Ok(())
    }
}

/// Translates `sql` with the default settings.
///
/// # Errors
///
/// Returns `Error::Parse` or `Error::Translate`.
pub fn translate(sql: &str) -> Result<String, Error> {
    SqlTranslator::new(sql).translate()
}
