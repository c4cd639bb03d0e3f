//! The syntax node type and its structural dump.

use core::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::SyntaxKind;
use crate::lexer::{Keyword, Span};

/// A node of the syntax tree.
///
/// Nodes are immutable once built. All nodes of a parsed tree share one copy
/// of the source, and a node's text is the slice of it under `span`, so
/// rendering a node verbatim preserves the original token spelling and
/// spacing. Trees built by hand own their text and span it from zero.
#[derive(Clone)]
pub struct SyntaxNode {
    kind: SyntaxKind,
    span: Span,
    source: Arc<str>,
    height: usize,
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Creates a node covering `span` of a shared source.
    #[must_use]
    pub fn new(kind: SyntaxKind, span: Span, source: Arc<str>, children: Vec<Self>) -> Self {
        let height = 1 + children.iter().map(|child| child.height).max().unwrap_or(0);
        Self {
            kind,
            span,
            source,
            height,
            children,
        }
    }

    fn owned(kind: SyntaxKind, text: String, children: Vec<Self>) -> Self {
        let span = Span::new(0, text.len());
        Self::new(kind, span, Arc::from(text), children)
    }

    /// Creates a childless node that does not come from a parsed source.
    #[must_use]
    pub fn leaf(kind: SyntaxKind, text: impl Into<String>) -> Self {
        Self::owned(kind, text.into(), Vec::new())
    }

    /// Creates a node whose text is its children's text joined by single
    /// spaces, for trees built without a source string.
    #[must_use]
    pub fn branch(kind: SyntaxKind, children: Vec<Self>) -> Self {
        let text = children
            .iter()
            .map(Self::text)
            .collect::<Vec<_>>()
            .join(" ");
        Self::owned(kind, text, children)
    }

    #[must_use]
    pub const fn kind(&self) -> SyntaxKind {
        self.kind
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Raw source text covered by this node.
    #[must_use]
    pub fn text(&self) -> &str {
        self.span.slice(&self.source)
    }

    /// The source text this node's span indexes into.
    #[must_use]
    pub const fn source(&self) -> &Arc<str> {
        &self.source
    }

    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns true if this node is the given keyword token.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == SyntaxKind::Keyword(keyword)
    }

    /// Returns true if a direct child is the given keyword token.
    #[must_use]
    pub fn has_keyword(&self, keyword: Keyword) -> bool {
        self.children.iter().any(|child| child.is_keyword(keyword))
    }

    /// Returns the first direct child of the given kind.
    #[must_use]
    pub fn child_of_kind(&self, kind: SyntaxKind) -> Option<&Self> {
        self.children.iter().find(|child| child.kind == kind)
    }

    /// Returns all direct children of the given kind, in source order.
    pub fn children_of_kind(&self, kind: SyntaxKind) -> impl Iterator<Item = &Self> {
        self.children.iter().filter(move |child| child.kind == kind)
    }

    /// Returns the first child of `kind` that follows the `keyword` token.
    #[must_use]
    pub fn child_after_keyword(&self, keyword: Keyword, kind: SyntaxKind) -> Option<&Self> {
        self.children
            .iter()
            .skip_while(|child| !child.is_keyword(keyword))
            .skip(1)
            .find(|child| child.kind == kind)
    }

    /// Returns the number of nodes on the deepest path from this node to a
    /// leaf. Computed when the node is built.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }
}

impl PartialEq for SyntaxNode {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.span == other.span
            && self.text() == other.text()
            && self.children == other.children
    }
}

impl Eq for SyntaxNode {}

impl fmt::Debug for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxNode")
            .field("kind", &self.kind)
            .field("span", &self.span)
            .field("text", &self.text())
            .field("children", &self.children)
            .finish()
    }
}

impl Serialize for SyntaxNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut node = serializer.serialize_struct("SyntaxNode", 4)?;
        node.serialize_field("kind", &self.kind)?;
        node.serialize_field("span", &self.span)?;
        node.serialize_field("text", self.text())?;
        node.serialize_field("children", &self.children)?;
        node.end()
    }
}

/// Lisp-style structural dump: `(rule child child ...)`, terminals as their
/// source text.
impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_terminal() {
            return f.write_str(self.text());
        }
        write!(f, "({}", self.kind.rule_name())?;
        for child in &self.children {
            write!(f, " {child}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(text: &str) -> SyntaxNode {
        SyntaxNode::leaf(SyntaxKind::Identifier, text)
    }

    #[test]
    fn test_branch_joins_child_text() {
        let node = SyntaxNode::branch(
            SyntaxKind::Expr,
            vec![
                SyntaxNode::branch(SyntaxKind::Expr, vec![ident("a")]),
                SyntaxNode::leaf(SyntaxKind::Operator, "="),
                SyntaxNode::branch(SyntaxKind::Expr, vec![ident("b")]),
            ],
        );
        assert_eq!(node.text(), "a = b");
        assert_eq!(node.children().len(), 3);
        assert_eq!(node.height(), 3);
    }

    #[test]
    fn test_child_after_keyword() {
        let node = SyntaxNode::branch(
            SyntaxKind::SelectCore,
            vec![
                SyntaxNode::leaf(SyntaxKind::Keyword(Keyword::Select), "SELECT"),
                SyntaxNode::branch(SyntaxKind::Expr, vec![ident("x")]),
                SyntaxNode::leaf(SyntaxKind::Keyword(Keyword::Where), "WHERE"),
                SyntaxNode::branch(SyntaxKind::Expr, vec![ident("y")]),
            ],
        );
        let found = node
            .child_after_keyword(Keyword::Where, SyntaxKind::Expr)
            .map(SyntaxNode::text);
        assert_eq!(found, Some("y"));
        assert!(
            node.child_after_keyword(Keyword::Having, SyntaxKind::Expr)
                .is_none()
        );
        assert!(node.has_keyword(Keyword::Where));
        assert_eq!(node.children_of_kind(SyntaxKind::Expr).count(), 2);
    }

    #[test]
    fn test_display_dump() {
        let node = SyntaxNode::branch(
            SyntaxKind::ResultColumn,
            vec![SyntaxNode::branch(SyntaxKind::Expr, vec![ident("id")])],
        );
        assert_eq!(node.to_string(), "(result_column (expr id))");
    }

    #[test]
    fn test_nodes_share_source() {
        let source: Arc<str> = Arc::from("a = b");
        let slice = |start, end| {
            SyntaxNode::new(
                SyntaxKind::Identifier,
                Span::new(start, end),
                Arc::clone(&source),
                vec![],
            )
        };
        let children = vec![slice(0, 1), slice(4, 5)];
        let node = SyntaxNode::new(
            SyntaxKind::Expr,
            Span::new(0, 5),
            Arc::clone(&source),
            children,
        );
        assert_eq!(node.text(), "a = b");
        assert_eq!(node.children()[1].text(), "b");
        assert!(
            node.children()
                .iter()
                .all(|child| Arc::ptr_eq(child.source(), &source))
        );
        assert_eq!(Arc::strong_count(&source), 4);
    }

    #[test]
    fn test_equality_ignores_storage() {
        let shared = SyntaxNode::new(
            SyntaxKind::Identifier,
            Span::new(0, 1),
            Arc::from("x"),
            vec![],
        );
        assert_eq!(shared, ident("x"));
        assert_ne!(ident("x"), ident("y"));
    }
}
