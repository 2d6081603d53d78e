//! Error recovery strategies for the parser.
//!
//! After a malformed construct is reported, the parser discards tokens until
//! it reaches one of a small set of synchronizing tokens and resumes there.

use jsonish_lexer::TokenKind;

/// Where to resume inside an object after a bad property.
pub const OBJECT_SYNC: &[TokenKind] = &[TokenKind::RBrace, TokenKind::Comma];

/// Where to resume inside an array after a bad item.
pub const ARRAY_SYNC: &[TokenKind] = &[TokenKind::RBracket, TokenKind::Comma];

/// Check if a token kind is in a set.
pub fn is_in_set(kind: TokenKind, set: &[TokenKind]) -> bool {
    set.contains(&kind)
}

/// Tracks how deep a skipped region is nested, so that a skip stops only at
/// the delimiter that balances the one it started on. Only delimiters of the
/// opening kind are counted: a skip started on `[` is closed by `]` alone.
#[derive(Debug)]
pub struct NestingCounter {
    open: TokenKind,
    close: TokenKind,
    depth: usize,
}

impl NestingCounter {
    /// Start counting from `open`, which must be `{` or `[`; anything else
    /// closes the region on the first token.
    pub fn new(open: TokenKind) -> Self {
        let close = match open {
            TokenKind::LBrace => TokenKind::RBrace,
            TokenKind::LBracket => TokenKind::RBracket,
            _ => open,
        };
        Self {
            open,
            close,
            depth: 0,
        }
    }

    /// Update the count for `kind`. Returns true once the region is closed.
    pub fn update(&mut self, kind: TokenKind) -> bool {
        if self.open == self.close {
            return true;
        }
        if kind == self.open {
            self.depth += 1;
        } else if kind == self.close {
            self.depth = self.depth.saturating_sub(1);
            return self.depth == 0;
        }
        false
    }
}
