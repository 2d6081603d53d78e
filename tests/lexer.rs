//! Integration tests for jsonish-lexer crate.

use jsonish_common::Position;
use jsonish_lexer::{Lexer, ScanError, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source)
        .tokenize()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

// ============================================================================
// Token Kinds
// ============================================================================

#[test]
fn test_document_tokens() {
    assert_eq!(
        kinds(r#"{"a": [1, -2.5e3, true, false, null]}"#),
        vec![
            TokenKind::LBrace,
            TokenKind::String,
            TokenKind::Colon,
            TokenKind::LBracket,
            TokenKind::Number,
            TokenKind::Comma,
            TokenKind::Number,
            TokenKind::Comma,
            TokenKind::True,
            TokenKind::Comma,
            TokenKind::False,
            TokenKind::Comma,
            TokenKind::Null,
            TokenKind::RBracket,
            TokenKind::RBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_garbage_words_are_unknown() {
    assert_eq!(
        kinds("undefined [x]"),
        vec![
            TokenKind::Unknown,
            TokenKind::LBracket,
            TokenKind::Unknown,
            TokenKind::RBracket,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_leading_zero_splits_number() {
    let tokens = Lexer::new("012").tokenize();
    assert_eq!(tokens[0].text, "0");
    assert_eq!(tokens[1].text, "12");
}

// ============================================================================
// Lexical Errors
// ============================================================================

#[test]
fn test_unterminated_string_at_eof() {
    let token = Lexer::new("\"abc").next_token();
    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(token.value, "abc");
    assert_eq!(token.error, Some(ScanError::UnexpectedEndOfString));
}

#[test]
fn test_error_codes_map_one_to_one() {
    use jsonish_diagnostic::ErrorCode;
    assert_eq!(ScanError::InvalidUnicode.code(), ErrorCode::InvalidUnicode);
    assert_eq!(
        ScanError::UnexpectedEndOfComment.code(),
        ErrorCode::UnexpectedEndOfComment
    );
}

// ============================================================================
// Positions
// ============================================================================

#[test]
fn test_multi_line_string_token_end() {
    // The string stops at the line break, so the next token is on line 1.
    let tokens = Lexer::new("[\"a\n]").tokenize();
    assert_eq!(tokens[1].end(), Position::new(0, 3));
    assert_eq!(tokens[2].kind, TokenKind::RBracket);
    assert_eq!(tokens[2].start(), Position::new(1, 0));
}

#[test]
fn test_block_comment_spanning_lines() {
    let tokens = Lexer::new("/*\r\n\r\n*/ 1").tokenize();
    assert_eq!(tokens[0].end(), Position::new(2, 2));
    assert_eq!(tokens[1].start(), Position::new(2, 3));
    assert_eq!(tokens[1].span().range(), 9..10);
}

#[test]
fn test_eof_position() {
    let tokens = Lexer::new("1\n").tokenize();
    let eof = tokens.last().unwrap();
    assert!(eof.is_eof());
    assert_eq!(eof.start(), Position::new(1, 0));
    assert_eq!(eof.span().range(), 2..2);
}
