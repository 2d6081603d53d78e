//! Byte offsets into a document.
//! 文档中的字节偏移。

use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte offset of a token boundary. Always lies on a UTF-8 char boundary.
/// 词法单元边界的字节偏移，总是位于 UTF-8 字符边界上。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BytePos(pub u32);

impl fmt::Debug for BytePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

impl From<usize> for BytePos {
    fn from(offset: usize) -> Self {
        BytePos(offset as u32)
    }
}

impl From<BytePos> for usize {
    fn from(pos: BytePos) -> Self {
        pos.0 as usize
    }
}

/// The bytes `start..end` of a document.
/// 文档中 `start..end` 的字节。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: BytePos,
    /// Exclusive. / 不包含。
    pub end: BytePos,
}

impl Span {
    pub fn new(start: BytePos, end: BytePos) -> Self {
        Span { start, end }
    }

    pub fn from_usize(start: usize, end: usize) -> Self {
        Span::new(start.into(), end.into())
    }

    pub fn empty_at(pos: BytePos) -> Self {
        Span::new(pos, pos)
    }

    /// The smallest span holding both `self` and `other`.
    pub fn cover(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    pub fn len(&self) -> usize {
        self.end.0.saturating_sub(self.start.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start.into()..self.end.into()
    }

    /// The covered text, or `None` if the span does not fit `source`.
    /// 覆盖的文本；若范围不适用于 `source` 则为 `None`。
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.range())
    }

    /// The same region counted in `char`s instead of bytes.
    /// 以 `char` 而非字节计数的同一区域。
    pub fn char_range(&self, source: &str) -> std::ops::Range<usize> {
        char_offset(source, self.start.into())..char_offset(source, self.end.into())
    }
}

fn char_offset(source: &str, byte: usize) -> usize {
    source.char_indices().take_while(|(i, _)| *i < byte).count()
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.0, self.end.0)
    }
}
