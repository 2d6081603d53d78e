//! Common utilities and data structures for jsonish.
//!
//! This crate provides the location types used across the workspace:
//! - `Span`: byte offsets into the source text
//! - `Position` / `Range`: 0-based line and UTF-16 character, as editors see them
//! - `Location`: both of the above for one piece of source

mod position;
mod span;

pub use position::{Location, Position, Range};
pub use span::{BytePos, Span};
