//! Integration tests for jsonish-parser crate.

use jsonish_common::Position;
use jsonish_diagnostic::ErrorCode;
use jsonish_parser::{Parse, ParseOptions, TreeBuilder, parse, parse_with_options, visit};
use jsonish_syntax::{NodeId, NodeType, Tree};
use serde_json::json;

fn codes(parse: &Parse) -> Vec<ErrorCode> {
    parse.errors.iter().map(|e| e.code).collect()
}

fn plain(parse: &Parse) -> serde_json::Value {
    parse.to_plain().unwrap()
}

/// Every attached node appears exactly once among its parent's children, and
/// its parent link points back to that container.
fn assert_links_consistent(tree: &Tree) {
    for id in tree.walk() {
        let node = &tree[id];
        assert!(node.start() <= node.end(), "{id:?} ends before it starts");

        match node.parent() {
            None => assert_eq!(Some(id), tree.root()),
            Some(parent) => {
                let count = tree.children(parent).iter().filter(|&&c| c == id).count();
                assert_eq!(count, 1, "{id:?} listed {count} times in {parent:?}");
            }
        }
        for child in tree.children(id) {
            assert_eq!(tree.parent(child), Some(id));
        }
    }
}

// ============================================================================
// Valid Documents
// ============================================================================

#[test]
fn test_parse_scalars() {
    assert_eq!(plain(&parse("42")), json!(42));
    assert_eq!(plain(&parse("-0.5")), json!(-0.5));
    assert_eq!(plain(&parse("\"hi\\n\"")), json!("hi\n"));
    assert_eq!(plain(&parse("true")), json!(true));
    assert_eq!(plain(&parse("null")), json!(null));
}

#[test]
fn test_parse_nested_document() {
    let source = r#"
    {
        // build settings
        "name": "jsonish",
        "version": [0, 3, 1],
        "features": { "comments": true, "depth": 512 },
        /* nothing */ "empty": {}
    }"#;
    let parse = parse(source);
    assert!(parse.is_ok(), "{:?}", parse.errors);
    assert_eq!(
        plain(&parse),
        json!({
            "name": "jsonish",
            "version": [0, 3, 1],
            "features": {"comments": true, "depth": 512},
            "empty": {}
        })
    );
    assert_links_consistent(&parse.tree);
}

#[test]
fn test_node_types() {
    let parse = parse(r#"[{}, [], "", 0, false, null]"#);
    let root = parse.root().unwrap();
    let types: Vec<_> = parse
        .tree
        .children(root)
        .into_iter()
        .map(|id| parse.tree[id].node_type())
        .collect();
    assert_eq!(
        types,
        vec![
            NodeType::Object,
            NodeType::Array,
            NodeType::String,
            NodeType::Number,
            NodeType::Boolean,
            NodeType::Null,
        ]
    );
}

// ============================================================================
// Positions
// ============================================================================

#[test]
fn test_container_end_after_closing_delimiter() {
    let parse = parse("{\n  \"a\": [1,\n 2]\n}");
    let root = parse.root().unwrap();
    assert_eq!(parse.tree[root].start(), Position::new(0, 0));
    assert_eq!(parse.tree[root].end(), Position::new(3, 1));

    let array = parse.tree.object(root).unwrap().get("a").unwrap();
    assert_eq!(parse.tree[array].start(), Position::new(1, 7));
    assert_eq!(parse.tree[array].end(), Position::new(2, 3));
}

#[test]
fn test_unterminated_container_ends_at_eof() {
    let parse = parse("[1,\n  2");
    let root = parse.root().unwrap();
    assert_eq!(parse.tree[root].end(), Position::new(1, 3));
    assert_eq!(codes(&parse), vec![ErrorCode::CloseBracketExpected]);
}

#[test]
fn test_leaf_positions() {
    let parse = parse("[ \"ab\", 1e2 ]");
    let root = parse.root().unwrap();
    let array = parse.tree.array(root).unwrap();
    let string = &parse.tree[array.get(0).unwrap()];
    assert_eq!(string.to_source_range().start, Position::new(0, 2));
    assert_eq!(string.to_source_range().end, Position::new(0, 6));
    let number = &parse.tree[array.get(1).unwrap()];
    assert_eq!(number.start(), Position::new(0, 8));
    assert_eq!(number.end(), Position::new(0, 11));
}

#[test]
fn test_error_ranges() {
    let parse = parse("[1 2]");
    assert_eq!(parse.errors.len(), 1);
    assert_eq!(parse.errors[0].range.start, Position::new(0, 3));
    assert_eq!(parse.errors[0].range.end, Position::new(0, 4));
}

// ============================================================================
// Objects
// ============================================================================

#[test]
fn test_duplicate_keys_keep_last_value() {
    let parse = parse(r#"{"a":1,"a":2}"#);
    assert!(parse.is_ok());
    let root = parse.root().unwrap();
    let object = parse.tree.object(root).unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(plain(&parse), json!({"a": 2}));
    assert_links_consistent(&parse.tree);
}

#[test]
fn test_duplicate_key_keeps_first_slot() {
    let parse = parse(r#"{"a":1,"b":2,"a":3}"#);
    let root = parse.root().unwrap();
    let keys: Vec<_> = parse.tree.object(root).unwrap().keys().collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(plain(&parse), json!({"a": 3, "b": 2}));
}

#[test]
fn test_missing_value() {
    let parse = parse(r#"{"a": }"#);
    let root = parse.root().unwrap();
    assert!(!parse.tree.object(root).unwrap().has("a"));
    assert_eq!(codes(&parse), vec![ErrorCode::ValueExpected]);
}

#[test]
fn test_missing_colon() {
    let parse = parse(r#"{"a" 1, "b": 2}"#);
    assert_eq!(plain(&parse), json!({"b": 2}));
    assert_eq!(codes(&parse), vec![ErrorCode::ColonExpected]);
}

#[test]
fn test_half_typed_array_does_not_swallow_properties() {
    let parse = parse(r#"{"a" [1, "b": 2}"#);
    assert_eq!(plain(&parse), json!({"b": 2}));
    assert_eq!(codes(&parse), vec![ErrorCode::ColonExpected]);
    assert_links_consistent(&parse.tree);
}

#[test]
fn test_half_typed_array_keeps_object_closer() {
    let parse = parse(r#"{"a" [1}, "c": 3"#);
    assert_eq!(plain(&parse), json!({}));
    assert_eq!(
        codes(&parse),
        vec![ErrorCode::ColonExpected, ErrorCode::EndOfFileExpected]
    );
}

#[test]
fn test_missing_property_name_is_reported_once() {
    let parse = parse(r#"{1: 2, "b": 3}"#);
    assert_eq!(plain(&parse), json!({"b": 3}));
    assert_eq!(codes(&parse), vec![ErrorCode::PropertyNameExpected]);
}

#[test]
fn test_missing_comma_between_properties() {
    let parse = parse(r#"{"a": 1 "b": 2}"#);
    assert_eq!(plain(&parse), json!({"a": 1, "b": 2}));
    assert_eq!(codes(&parse), vec![ErrorCode::CommaExpected]);
}

#[test]
fn test_unterminated_object() {
    let parse = parse(r#"{"a": 1"#);
    assert_eq!(plain(&parse), json!({"a": 1}));
    assert_eq!(codes(&parse), vec![ErrorCode::CloseBraceExpected]);
}

#[test]
fn test_trailing_comma_in_object() {
    let strict = parse(r#"{"a": 1,}"#);
    assert_eq!(codes(&strict), vec![ErrorCode::PropertyNameExpected]);

    let options = ParseOptions::new().allow_trailing_comma(true);
    let relaxed = parse_with_options(r#"{"a": 1,}"#, &options);
    assert!(relaxed.is_ok());
    assert_eq!(plain(&relaxed), json!({"a": 1}));
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn test_double_comma() {
    let parse = parse("[1,,2]");
    assert_eq!(plain(&parse), json!([1, 2]));
    assert_eq!(codes(&parse), vec![ErrorCode::ValueExpected]);
}

#[test]
fn test_missing_comma() {
    let parse = parse("[1 2]");
    assert_eq!(plain(&parse), json!([1, 2]));
    assert_eq!(codes(&parse), vec![ErrorCode::CommaExpected]);
}

#[test]
fn test_leading_comma() {
    let parse = parse("[,1]");
    assert_eq!(plain(&parse), json!([1]));
    assert_eq!(codes(&parse), vec![ErrorCode::ValueExpected]);
}

#[test]
fn test_trailing_comma_in_array() {
    let strict = parse("[1,]");
    assert_eq!(plain(&strict), json!([1]));
    assert_eq!(codes(&strict), vec![ErrorCode::ValueExpected]);

    let options = ParseOptions::new().allow_trailing_comma(true);
    assert!(parse_with_options("[1,]", &options).is_ok());
}

#[test]
fn test_mismatched_closer_in_array() {
    let parse = parse("[1}");
    assert_eq!(plain(&parse), json!([1]));
    assert_eq!(
        codes(&parse),
        vec![
            ErrorCode::CommaExpected,
            ErrorCode::ValueExpected,
            ErrorCode::CloseBracketExpected,
        ]
    );
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_exponent_without_digits() {
    let parse = parse("12e");
    assert_eq!(plain(&parse), json!(0));
    assert_eq!(codes(&parse), vec![ErrorCode::InvalidNumberFormat]);
}

#[test]
fn test_fraction_without_digits() {
    let parse = parse("[1.]");
    assert_eq!(plain(&parse), json!([1]));
    assert_eq!(codes(&parse), vec![ErrorCode::UnexpectedEndOfNumber]);
}

#[test]
fn test_lexical_errors_keep_the_token() {
    let parse = parse(r#"["a\qb", "\u00zz"]"#);
    assert_eq!(plain(&parse), json!(["ab", "zz"]));
    assert_eq!(
        codes(&parse),
        vec![ErrorCode::InvalidEscapeCharacter, ErrorCode::InvalidUnicode]
    );
}

#[test]
fn test_unknown_symbol() {
    let parse = parse("[1, undefined]");
    assert_eq!(plain(&parse), json!([1]));
    assert_eq!(
        codes(&parse),
        vec![ErrorCode::InvalidSymbol, ErrorCode::ValueExpected]
    );
}

// ============================================================================
// Top Level
// ============================================================================

#[test]
fn test_empty_input() {
    let parse = parse("");
    assert!(parse.root().is_none());
    assert_eq!(codes(&parse), vec![ErrorCode::ValueExpected]);
}

#[test]
fn test_comment_only_input() {
    let parse = parse("// nothing here\n/* at all */");
    assert!(parse.root().is_none());
    assert_eq!(codes(&parse), vec![ErrorCode::ValueExpected]);
}

#[test]
fn test_trailing_content() {
    let parse = parse("{} []");
    assert_eq!(plain(&parse), json!({}));
    assert_eq!(codes(&parse), vec![ErrorCode::EndOfFileExpected]);
}

#[test]
fn test_comments_disallowed() {
    let options = ParseOptions::new().allow_comments(false);
    let parse = parse_with_options("[1 /* x */]", &options);
    assert_eq!(plain(&parse), json!([1]));
    assert_eq!(codes(&parse), vec![ErrorCode::InvalidCommentToken]);
}

#[test]
fn test_unterminated_comment() {
    let parse = parse("[1] /* open");
    assert_eq!(plain(&parse), json!([1]));
    assert_eq!(codes(&parse), vec![ErrorCode::UnexpectedEndOfComment]);
}

// ============================================================================
// Depth Bound
// ============================================================================

#[test]
fn test_depth_bound() {
    let options = ParseOptions::new().max_depth(3);
    let parse = parse_with_options(r#"{"a": [[{"b": 1}]], "c": 2}"#, &options);
    assert_eq!(plain(&parse), json!({"a": [[]], "c": 2}));
    assert_eq!(codes(&parse), vec![ErrorCode::InvalidSymbol]);
}

#[test]
fn test_depth_bound_of_zero_refuses_root() {
    let options = ParseOptions::new().max_depth(0);
    let parse = parse_with_options("[1]", &options);
    assert!(parse.root().is_none());
    assert_eq!(codes(&parse), vec![ErrorCode::InvalidSymbol]);

    assert!(!visit("[1]", &options, &mut TreeBuilder::new()));
    assert!(visit("1", &options, &mut TreeBuilder::new()));
}

#[test]
fn test_deep_nesting_within_default_bound() {
    let depth = 200;
    let source = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let parse = parse(&source);
    assert!(parse.is_ok());

    let mut current = parse.root().unwrap();
    for _ in 1..depth {
        current = parse.tree.array(current).unwrap().get(0).unwrap();
    }
    assert!(parse.tree.array(current).unwrap().is_empty());
    assert_eq!(parse.tree.ancestors(current).count(), depth - 1);
}

// ============================================================================
// Recovery Keeps Structure Sound
// ============================================================================

#[test]
fn test_broken_documents_keep_links_consistent() {
    let sources = [
        r#"{"a": [1, 2, {"b": }], "a": {"c" 3}}"#,
        "[[[1, 2], [3 4]], {\"x\": [}",
        r#"{"k": {"k": {"k": [1,,]}}}"#,
        "[1, {\"open\": [true, ",
    ];
    for source in sources {
        let parse = parse(source);
        assert!(parse.root().is_some(), "{source}");
        assert_links_consistent(&parse.tree);
    }
}

#[test]
fn test_node_at_and_path() {
    let parse = parse("{\"a\": {\"b\": [10, 20]}}");
    let id: NodeId = parse.tree.node_at(Position::new(0, 17)).unwrap();
    assert_eq!(parse.tree[id].as_f64(), Some(20.0));
    assert_eq!(
        jsonish_syntax::format_path(&parse.tree.path(id)),
        "$.a.b[1]"
    );
}
