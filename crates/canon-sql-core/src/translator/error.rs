//! Translation error types.

use crate::syntax::SyntaxKind;

/// An error raised while rendering a syntax tree back to SQL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// The root statement is not a SELECT.
    #[error("unsupported statement: only SELECT can be translated, found {found}")]
    UnsupportedStatement {
        /// Leading word of the rejected statement.
        found: String,
    },

    /// A part the grammar always produces is missing from the tree.
    #[error("malformed syntax tree: {construct} has no {missing}")]
    MalformedTree {
        /// The construct being rendered.
        construct: SyntaxKind,
        /// Description of the missing part.
        missing: &'static str,
    },

    /// An expression that cannot be passed through verbatim.
    #[error("expression cannot be rendered: {text:?}")]
    UnrenderableExpression {
        /// Source text of the expression.
        text: String,
    },

    /// The tree nests deeper than the configured limit.
    #[error("syntax tree nesting exceeds the maximum depth of {limit}")]
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}

impl TranslateError {
    pub(crate) const fn malformed(construct: SyntaxKind, missing: &'static str) -> Self {
        Self::MalformedTree { construct, missing }
    }
}
