//! Parse events.
//! 解析事件。

use jsonish_common::Location;
use jsonish_diagnostic::ErrorCode;
use jsonish_syntax::Comment;

/// A scalar value found in the source.
/// 源码中的标量值。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'a> {
    String(&'a str),
    Number(f64),
    Boolean(bool),
    Null,
}

/// Receives the events of a parse, in source order.
/// 按源码顺序接收解析事件。
///
/// Every method does nothing by default.
/// 所有方法默认什么都不做。
pub trait Visitor {
    /// `{` was read.
    fn on_object_begin(&mut self, _location: Location) {}

    /// A property name was read. Its value, if any, is the next value event.
    fn on_object_property(&mut self, _key: &str, _location: Location) {}

    /// The object ended at the `}` token, or at end of input when the
    /// object is unterminated.
    fn on_object_end(&mut self, _location: Location) {}

    /// `[` was read.
    fn on_array_begin(&mut self, _location: Location) {}

    /// Like [`on_object_end`](Self::on_object_end), for arrays.
    fn on_array_end(&mut self, _location: Location) {}

    fn on_literal_value(&mut self, _value: Literal<'_>, _location: Location) {}

    /// A `:` or `,` was read.
    fn on_separator(&mut self, _separator: char, _location: Location) {}

    fn on_comment(&mut self, _comment: &Comment) {}

    fn on_error(&mut self, _code: ErrorCode, _location: Location) {}
}
