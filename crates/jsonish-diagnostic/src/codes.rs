//! Error codes for jsonish diagnostics.

use serde::{Deserialize, Serialize};

/// Error codes for syntax errors.
///
/// The set is closed. Numeric values follow the classic JSONC numbering:
/// grammar errors are 1-10, lexical errors start at 257.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Grammar errors (E0001 - E0010)
    InvalidSymbol,
    InvalidNumberFormat,
    PropertyNameExpected,
    ValueExpected,
    ColonExpected,
    CommaExpected,
    CloseBraceExpected,
    CloseBracketExpected,
    EndOfFileExpected,
    InvalidCommentToken,

    // Lexical errors (E0257 - E0262)
    UnexpectedEndOfComment,
    UnexpectedEndOfString,
    UnexpectedEndOfNumber,
    InvalidUnicode,
    InvalidEscapeCharacter,
    InvalidCharacter,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 16] = [
        ErrorCode::InvalidSymbol,
        ErrorCode::InvalidNumberFormat,
        ErrorCode::PropertyNameExpected,
        ErrorCode::ValueExpected,
        ErrorCode::ColonExpected,
        ErrorCode::CommaExpected,
        ErrorCode::CloseBraceExpected,
        ErrorCode::CloseBracketExpected,
        ErrorCode::EndOfFileExpected,
        ErrorCode::InvalidCommentToken,
        ErrorCode::UnexpectedEndOfComment,
        ErrorCode::UnexpectedEndOfString,
        ErrorCode::UnexpectedEndOfNumber,
        ErrorCode::InvalidUnicode,
        ErrorCode::InvalidEscapeCharacter,
        ErrorCode::InvalidCharacter,
    ];

    pub fn value(&self) -> u16 {
        match self {
            // Grammar
            ErrorCode::InvalidSymbol => 1,
            ErrorCode::InvalidNumberFormat => 2,
            ErrorCode::PropertyNameExpected => 3,
            ErrorCode::ValueExpected => 4,
            ErrorCode::ColonExpected => 5,
            ErrorCode::CommaExpected => 6,
            ErrorCode::CloseBraceExpected => 7,
            ErrorCode::CloseBracketExpected => 8,
            ErrorCode::EndOfFileExpected => 9,
            ErrorCode::InvalidCommentToken => 10,

            // Lexical
            ErrorCode::UnexpectedEndOfComment => 257,
            ErrorCode::UnexpectedEndOfString => 258,
            ErrorCode::UnexpectedEndOfNumber => 259,
            ErrorCode::InvalidUnicode => 260,
            ErrorCode::InvalidEscapeCharacter => 261,
            ErrorCode::InvalidCharacter => 262,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            // Grammar
            ErrorCode::InvalidSymbol => "E0001",
            ErrorCode::InvalidNumberFormat => "E0002",
            ErrorCode::PropertyNameExpected => "E0003",
            ErrorCode::ValueExpected => "E0004",
            ErrorCode::ColonExpected => "E0005",
            ErrorCode::CommaExpected => "E0006",
            ErrorCode::CloseBraceExpected => "E0007",
            ErrorCode::CloseBracketExpected => "E0008",
            ErrorCode::EndOfFileExpected => "E0009",
            ErrorCode::InvalidCommentToken => "E0010",

            // Lexical
            ErrorCode::UnexpectedEndOfComment => "E0257",
            ErrorCode::UnexpectedEndOfString => "E0258",
            ErrorCode::UnexpectedEndOfNumber => "E0259",
            ErrorCode::InvalidUnicode => "E0260",
            ErrorCode::InvalidEscapeCharacter => "E0261",
            ErrorCode::InvalidCharacter => "E0262",
        }
    }

    /// Whether the error comes from malformed token content rather than
    /// from the structure of the document.
    pub fn is_lexical(&self) -> bool {
        self.value() > 256
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            // Grammar
            ErrorCode::InvalidSymbol => "invalid symbol",
            ErrorCode::InvalidNumberFormat => "invalid number format",
            ErrorCode::PropertyNameExpected => "property name expected",
            ErrorCode::ValueExpected => "value expected",
            ErrorCode::ColonExpected => "colon expected",
            ErrorCode::CommaExpected => "comma expected",
            ErrorCode::CloseBraceExpected => "closing brace expected",
            ErrorCode::CloseBracketExpected => "closing bracket expected",
            ErrorCode::EndOfFileExpected => "end of file expected",
            ErrorCode::InvalidCommentToken => "comments are not permitted",

            // Lexical
            ErrorCode::UnexpectedEndOfComment => "block comment is not terminated",
            ErrorCode::UnexpectedEndOfString => "string literal is not terminated",
            ErrorCode::UnexpectedEndOfNumber => "number literal ends unexpectedly",
            ErrorCode::InvalidUnicode => "invalid unicode escape sequence",
            ErrorCode::InvalidEscapeCharacter => "invalid escape character in string",
            ErrorCode::InvalidCharacter => "invalid control character in string",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::PropertyNameExpected => Some("property names must be double-quoted strings"),
            ErrorCode::ColonExpected => Some("add `:` between the property name and its value"),
            ErrorCode::CommaExpected => Some("add `,` between the two values"),
            ErrorCode::CloseBraceExpected => Some("add `}` to close the object"),
            ErrorCode::CloseBracketExpected => Some("add `]` to close the array"),
            ErrorCode::UnexpectedEndOfComment => Some("add `*/` to close the comment"),
            ErrorCode::UnexpectedEndOfString => Some("add a closing quote `\"` to terminate the string"),
            ErrorCode::UnexpectedEndOfNumber => Some("add digits after the decimal point"),
            ErrorCode::InvalidUnicode => Some("`\\u` must be followed by exactly four hex digits"),
            ErrorCode::InvalidCharacter => Some("escape control characters, e.g. `\\t` or `\\u0001`"),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
