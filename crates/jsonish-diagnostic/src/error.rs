//! Syntax errors and the collector that gathers them during a parse.

use crate::ErrorCode;
use jsonish_common::{Location, Range, Span};
use serde::{Deserialize, Serialize};

/// A syntax error: a code and the `[start, end)` range it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("JSON syntax error at {}: {}", .range.start, .code.description())]
pub struct SyntaxError {
    pub code: ErrorCode,
    pub range: Range,
    /// Byte span of the same region, used when rendering against the source.
    pub span: Span,
}

impl SyntaxError {
    pub fn new(code: ErrorCode, location: Location) -> Self {
        Self {
            code,
            range: location.range,
            span: location.span,
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.span, self.range)
    }
}

/// Append-only list of syntax errors in the order they were found.
#[derive(Debug, Clone, Default)]
pub struct ErrorCollector {
    errors: Vec<SyntaxError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: SyntaxError) {
        self.errors.push(error);
    }

    pub fn report(&mut self, code: ErrorCode, location: Location) {
        self.push(SyntaxError::new(code, location));
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SyntaxError> {
        self.errors.iter()
    }

    pub fn into_errors(self) -> Vec<SyntaxError> {
        self.errors
    }
}
