//! Parser for jsonish.
//!
//! This crate provides a recursive descent parser for JSON with comments.
//! It reports what it reads to a [`Visitor`]; [`TreeBuilder`] is the visitor
//! behind [`parse`] that turns the events into a [`Tree`].
//!
//! ## Error Recovery
//!
//! The parser never gives up. Each malformed construct is reported once,
//! tokens are discarded up to the next `,` or closing delimiter, and parsing
//! continues, so a broken document still yields a partial tree together with
//! every error found.

mod builder;
mod options;
mod parser;
mod recovery;
mod visitor;

pub use builder::TreeBuilder;
pub use options::ParseOptions;
pub use parser::Parser;
pub use visitor::{Literal, Visitor};

use jsonish_diagnostic::SyntaxError;
use jsonish_syntax::{NodeId, Tree};

/// The outcome of a parse: the (possibly partial) tree and every error.
#[derive(Debug, Clone)]
pub struct Parse {
    pub tree: Tree,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// The top-level value, if the input started with one.
    pub fn root(&self) -> Option<NodeId> {
        self.tree.root()
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The root as a plain JSON value.
    pub fn to_plain(&self) -> Option<serde_json::Value> {
        self.tree.to_plain()
    }
}

/// Parse source text with default options.
pub fn parse(text: &str) -> Parse {
    parse_with_options(text, &ParseOptions::default())
}

/// Parse source text into a tree.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Parse {
    let mut builder = TreeBuilder::new();
    visit(text, options, &mut builder);
    builder.finish()
}

/// Run the parser over `text`, reporting events to `visitor`. Returns whether
/// a top-level value was found.
pub fn visit<V: Visitor>(text: &str, options: &ParseOptions, visitor: &mut V) -> bool {
    Parser::new(text, options.clone(), visitor).parse_document()
}
