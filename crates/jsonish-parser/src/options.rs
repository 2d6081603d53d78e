//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ParseOptions {
    /// Accept `//` and `/* */` comments.
    pub allow_comments: bool,
    /// Accept a comma directly before `}` or `]`.
    pub allow_trailing_comma: bool,
    /// Accept input that holds no value at all.
    pub allow_empty_content: bool,
    /// Deepest container nesting that is still parsed.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_comments: true,
            allow_trailing_comma: false,
            allow_empty_content: false,
            max_depth: 512,
        }
    }
}

impl ParseOptions {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept or reject comments.
    pub fn allow_comments(mut self, allow: bool) -> Self {
        self.allow_comments = allow;
        self
    }

    /// Accept or reject trailing commas.
    pub fn allow_trailing_comma(mut self, allow: bool) -> Self {
        self.allow_trailing_comma = allow;
        self
    }

    /// Accept or reject empty input.
    pub fn allow_empty_content(mut self, allow: bool) -> Self {
        self.allow_empty_content = allow;
        self
    }

    /// Set the nesting bound.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
