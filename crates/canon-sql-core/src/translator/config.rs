//! Translator configuration.

use crate::parser::DEFAULT_MAX_DEPTH;

/// Settings for a [`Translator`](super::Translator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// Maximum number of nested rendering steps before translation fails.
    pub max_depth: usize,
}

impl TranslatorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum rendering depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::TranslatorConfig;
    use crate::parser::DEFAULT_MAX_DEPTH;

    #[test]
    fn test_default_depth() {
        assert_eq!(TranslatorConfig::default().max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_with_max_depth() {
        let config = TranslatorConfig::new().with_max_depth(12);
        assert_eq!(config.max_depth, 12);
    }
}
