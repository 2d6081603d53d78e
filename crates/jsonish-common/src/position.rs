//! Line/character positions.
//! 行/字符位置。
//!
//! Positions are 0-based. `character` counts UTF-16 code units, which is
//! what editors speaking LSP expect.
//! 位置从 0 开始计数。`character` 以 UTF-16 码元计数，与 LSP 编辑器一致。

use crate::{BytePos, Span};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in a document.
/// 文档中的一个位置。
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Line number, 0-based. / 行号，从 0 开始。
    pub line: u32,
    /// Character offset within the line, in UTF-16 code units.
    /// 行内字符偏移，以 UTF-16 码元计。
    pub character: u32,
}

impl Position {
    pub const ZERO: Position = Position {
        line: 0,
        character: 0,
    };

    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }

    /// The position reached after reading `text` starting at `self`.
    /// 从 `self` 开始读完 `text` 之后到达的位置。
    ///
    /// Every line break (`\n`, `\r` or `\r\n`) moves to the start of the next
    /// line, so the result is correct for text spanning several lines.
    pub fn advance(self, text: &str) -> Position {
        let mut line = self.line;
        let mut character = self.character;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    line += 1;
                    character = 0;
                }
                '\n' => {
                    line += 1;
                    character = 0;
                }
                _ => character += ch.len_utf16() as u32,
            }
        }

        Position { line, character }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

/// A `[start, end)` range of positions.
/// `[start, end)` 位置区间。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// An empty range at `pos`.
    pub fn empty_at(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `pos` lies within `[start, end)`.
    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos < self.end
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}-{:?}", self.start, self.end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Where a piece of source lives, both as bytes and as line/character.
/// 一段源码的位置，同时以字节和行/字符表示。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    pub span: Span,
    pub range: Range,
}

impl Location {
    pub fn new(span: Span, range: Range) -> Self {
        Self { span, range }
    }

    /// An empty location: zero-length span and range at one point.
    pub fn empty_at(offset: BytePos, pos: Position) -> Self {
        Self {
            span: Span::empty_at(offset),
            range: Range::empty_at(pos),
        }
    }

    /// Location of `text` given its starting byte offset and position.
    /// 根据起始字节偏移和位置计算 `text` 的位置。
    pub fn of_text(start: usize, position: Position, text: &str) -> Self {
        Self {
            span: Span::from_usize(start, start + text.len()),
            range: Range::new(position, position.advance(text)),
        }
    }

    pub fn start(&self) -> Position {
        self.range.start
    }

    pub fn end(&self) -> Position {
        self.range.end
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({:?})", self.range, self.span)
    }
}
