//! Token definitions for jsonish.

use jsonish_common::{Location, Position, Range, Span};
use jsonish_diagnostic::ErrorCode;
use std::borrow::Cow;

/// A token with its kind, source text and location.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Raw source text of the token.
    pub text: &'src str,
    /// Decoded value: string contents with escapes resolved for
    /// [`TokenKind::String`], the raw text for everything else.
    pub value: Cow<'src, str>,
    pub location: Location,
    /// Lexical error found while scanning this token, if any.
    pub error: Option<ScanError>,
}

impl<'src> Token<'src> {
    /// The end-of-input token at `location`.
    pub fn eof(location: Location) -> Self {
        Token {
            kind: TokenKind::Eof,
            text: "",
            value: Cow::Borrowed(""),
            location,
            error: None,
        }
    }

    pub fn span(&self) -> Span {
        self.location.span
    }

    pub fn range(&self) -> Range {
        self.location.range
    }

    pub fn start(&self) -> Position {
        self.location.range.start
    }

    pub fn end(&self) -> Position {
        self.location.range.end
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Delimiters
    LBrace,   // {
    RBrace,   // }
    LBracket, // [
    RBracket, // ]

    // Punctuation
    Colon, // :
    Comma, // ,

    // Keywords
    Null,
    True,
    False,

    // Literals
    String,
    Number,

    // Comments
    LineComment,  // // ...
    BlockComment, // /* ... */

    // Special
    Unknown,
    Eof,
}

impl TokenKind {
    /// Returns true if this token is a comment.
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }

    /// Returns the keyword for a bare word, if any.
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        match s {
            "null" => Some(TokenKind::Null),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            _ => None,
        }
    }

    /// Short human-readable name, used in tooling output.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Colon => "`:`",
            TokenKind::Comma => "`,`",
            TokenKind::Null => "`null`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::LineComment => "line comment",
            TokenKind::BlockComment => "block comment",
            TokenKind::Unknown => "unknown",
            TokenKind::Eof => "end of input",
        }
    }
}

/// Malformed token content found by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanError {
    UnexpectedEndOfComment,
    UnexpectedEndOfString,
    UnexpectedEndOfNumber,
    InvalidUnicode,
    InvalidEscapeCharacter,
    InvalidCharacter,
}

impl ScanError {
    /// The syntax error code reported for this lexical error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ScanError::UnexpectedEndOfComment => ErrorCode::UnexpectedEndOfComment,
            ScanError::UnexpectedEndOfString => ErrorCode::UnexpectedEndOfString,
            ScanError::UnexpectedEndOfNumber => ErrorCode::UnexpectedEndOfNumber,
            ScanError::InvalidUnicode => ErrorCode::InvalidUnicode,
            ScanError::InvalidEscapeCharacter => ErrorCode::InvalidEscapeCharacter,
            ScanError::InvalidCharacter => ErrorCode::InvalidCharacter,
        }
    }
}
