//! Diagnostics hooks for the translator.
//!
//! The translator never prints on its own. Callers that want to watch a
//! translation pass an observer; the default one does nothing.

use tracing::{debug, trace, warn};

use super::JoinKeyword;
use crate::syntax::SyntaxKind;

/// Receives events while a tree is being rendered.
///
/// Every hook has an empty default implementation.
pub trait TranslateObserver {
    /// Called before a node is rendered. `depth` starts at 1 for the root.
    fn node_entered(&self, _kind: SyntaxKind, _depth: usize) {}

    /// Called after each step of a join chain has been rendered.
    fn join_rendered(&self, _keyword: JoinKeyword, _table: &str) {}

    /// Called when a script holds more statements than the one translated.
    fn statements_skipped(&self, _count: usize) {}
}

impl<T: TranslateObserver + ?Sized> TranslateObserver for &T {
    fn node_entered(&self, kind: SyntaxKind, depth: usize) {
        (**self).node_entered(kind, depth);
    }

    fn join_rendered(&self, keyword: JoinKeyword, table: &str) {
        (**self).join_rendered(keyword, table);
    }

    fn statements_skipped(&self, count: usize) {
        (**self).statements_skipped(count);
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl TranslateObserver for NoopObserver {}

/// Observer that forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingObserver;

impl TranslateObserver for TracingObserver {
    fn node_entered(&self, kind: SyntaxKind, depth: usize) {
        trace!(%kind, depth, "rendering node");
    }

    fn join_rendered(&self, keyword: JoinKeyword, table: &str) {
        debug!(%keyword, table, "rendered join step");
    }

    fn statements_skipped(&self, count: usize) {
        warn!(count, "only the first statement is translated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Counter {
        entered: Mutex<usize>,
    }

    impl TranslateObserver for Counter {
        fn node_entered(&self, _kind: SyntaxKind, _depth: usize) {
            *self.entered.lock().unwrap() += 1;
        }
    }

    #[test]
    fn test_reference_forwards_events() {
        let counter = Counter::default();
        let by_ref = &counter;
        by_ref.node_entered(SyntaxKind::Expr, 1);
        by_ref.node_entered(SyntaxKind::Expr, 2);
        assert_eq!(*counter.entered.lock().unwrap(), 2);
    }

    #[test]
    fn test_default_hooks_are_silent() {
        let observer = NoopObserver;
        observer.node_entered(SyntaxKind::SelectCore, 1);
        observer.join_rendered(JoinKeyword::Cross, "t");
        observer.statements_skipped(3);
        TracingObserver.statements_skipped(1);
    }
}
