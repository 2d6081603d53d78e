//! Integration tests for jsonish-common crate.

use jsonish_common::{BytePos, Location, Position, Range, Span};

// ============================================================================
// Span Tests
// ============================================================================

#[test]
fn test_span_cover() {
    let a = Span::from_usize(10, 20);
    let b = Span::from_usize(15, 30);
    let covered = a.cover(b);
    assert_eq!(covered.start.0, 10);
    assert_eq!(covered.end.0, 30);
}

#[test]
fn test_span_len() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(Span::empty_at(BytePos(5)).is_empty());
}

#[test]
fn test_span_slice_of_token() {
    let source = "[true, null]";
    assert_eq!(Span::from_usize(1, 5).slice(source), Some("true"));
    assert_eq!(usize::from(BytePos::from(7)), 7);
}

// ============================================================================
// Position Tests
// ============================================================================

#[test]
fn test_position_display() {
    assert_eq!(Position::new(3, 14).to_string(), "3:14");
    let range = Range::new(Position::new(0, 1), Position::new(2, 0));
    assert_eq!(range.to_string(), "0:1-2:0");
}

#[test]
fn test_advance_crlf_counts_once() {
    assert_eq!(Position::ZERO.advance("a\r\nb"), Position::new(1, 1));
}

#[test]
fn test_location_of_multi_line_text() {
    let loc = Location::of_text(4, Position::new(0, 4), "/* x\n y */");
    assert_eq!(loc.span.range(), 4..14);
    assert_eq!(loc.start(), Position::new(0, 4));
    assert_eq!(loc.end(), Position::new(1, 5));
}

#[test]
fn test_empty_location() {
    let loc = Location::empty_at(BytePos(9), Position::new(2, 3));
    assert!(loc.span.is_empty());
    assert!(loc.range.is_empty());
    assert_eq!(loc.start(), loc.end());
}

#[test]
fn test_position_serializes_as_line_character() {
    let json = serde_json::to_value(Position::new(1, 2)).unwrap();
    assert_eq!(json, serde_json::json!({"line": 1, "character": 2}));
}
