//! Tests for annotations, value maps, templates and value application

use super::*;
use crate::types::Value;

// ============================================================================
// Annotation Tests
// ============================================================================

#[test]
fn test_parse_scalar() {
    assert_eq!(
        Annotation::parse("?foo=1"),
        Some(Annotation::Scalar { key: "foo".to_string(), value: "1".to_string() })
    );
}

#[test]
fn test_parse_without_equal_sign() {
    assert_eq!(
        Annotation::parse("?noEqualSign"),
        Some(Annotation::Scalar { key: "noEqualSign".to_string(), value: String::new() })
    );
}

#[test]
fn test_parse_value_keeps_later_equal_signs() {
    assert_eq!(
        Annotation::parse("?filter=a=b"),
        Some(Annotation::Scalar { key: "filter".to_string(), value: "a=b".to_string() })
    );
}

#[test]
fn test_parse_append() {
    assert_eq!(
        Annotation::parse("?arr[]=a"),
        Some(Annotation::Append { key: "arr".to_string(), value: Some("a".to_string()) })
    );
    assert_eq!(
        Annotation::parse("?arr[]"),
        Some(Annotation::Append { key: "arr".to_string(), value: None })
    );
    assert_eq!(
        Annotation::parse("?arr[]="),
        Some(Annotation::Append { key: "arr".to_string(), value: Some(String::new()) })
    );
}

#[test]
fn test_parse_non_annotation() {
    assert_eq!(Annotation::parse("metabase:dashboard:4?district=1"), None);
    assert!(!Annotation::is_annotation("foo"));
    assert!(Annotation::is_annotation("?"));
}

#[test]
fn test_parse_bare_prefix() {
    let annotation = Annotation::parse("?").unwrap();
    assert_eq!(annotation.key(), "");
    assert_eq!(annotation, Annotation::Scalar { key: String::new(), value: String::new() });
}

#[test]
fn test_annotation_display() {
    for token in ["?foo=1", "?arr[]=a", "?arr[]", "?blank="] {
        assert_eq!(Annotation::parse(token).unwrap().to_string(), token);
    }
}

// ============================================================================
// Extraction Tests
// ============================================================================

#[test]
fn test_extract_values() {
    let abilities = ["other", "?foo=0", "?noEqualSign", "?blankValue=", "?foo=1", "?arr[]=a", "?arr[]=b"];
    let (values, remainder) = extract_values(&abilities);

    let expected = ValueMap::new()
        .with("foo", "1")
        .with("noEqualSign", "")
        .with("blankValue", "")
        .with("arr", ["a", "b"]);

    assert_eq!(values, expected);
    assert_eq!(remainder, vec!["other"]);
}

#[test]
fn test_extract_bare_list_key_registers_empty_list() {
    let (values, remainder) = extract_values(&["?arr[]"]);

    assert_eq!(values.get("arr"), Some(&Value::List(Vec::new())));
    assert!(values.candidates("arr").is_empty());
    assert!(remainder.is_empty());
}

#[test]
fn test_extract_scalar_then_list_resets() {
    let (values, _) = extract_values(&["?k=scalar", "?k[]=a"]);
    assert_eq!(values.get("k"), Some(&Value::from(["a"])));
}

#[test]
fn test_extract_list_then_scalar_overwrites() {
    let (values, _) = extract_values(&["?k[]=a", "?k=scalar"]);
    assert_eq!(values.get("k"), Some(&Value::from("scalar")));
}

#[test]
fn test_extract_preserves_remainder_order() {
    let (_, remainder) = extract_values(&["c", "?x=1", "a", "b"]);
    assert_eq!(remainder, vec!["c", "a", "b"]);
}

// ============================================================================
// Value Map Tests
// ============================================================================

#[test]
fn test_to_annotations() {
    let values = ValueMap::new().with("foo", "bar").with("baz", ["1", "2"]);
    assert_eq!(values.to_annotations(), vec!["?baz[]=1", "?baz[]=2", "?foo=bar"]);
}

#[test]
fn test_to_annotations_extracts_back() {
    let values = ValueMap::new()
        .with("foo", "bar")
        .with("empty", "")
        .with("none", Vec::<String>::new())
        .with("baz", ["1", "2"]);

    let (extracted, remainder) = extract_values(&values.to_annotations());
    assert_eq!(extracted, values);
    assert!(remainder.is_empty());
}

#[test]
fn test_value_map_from_json() {
    let values = ValueMap::from_json_str(r#"{"districtId": "1", "x": ["a", "b"]}"#).unwrap();

    assert_eq!(values.candidates("districtId"), &["1"]);
    assert_eq!(values.candidates("x"), &["a", "b"]);
    assert!(values.candidates("missing").is_empty());
    assert!(ValueMap::from_json_str(r#"{"x": 1}"#).is_err());
}

// ============================================================================
// Template Tests
// ============================================================================

#[test]
fn test_template_parse() {
    let template = Template::parse("arr:{x}:{y}:{x}").unwrap();

    assert_eq!(template.names(), &["x", "y"]);
    assert_eq!(
        template.segments(),
        &[
            Segment::Literal("arr:"),
            Segment::Placeholder("x"),
            Segment::Literal(":"),
            Segment::Placeholder("y"),
            Segment::Literal(":"),
            Segment::Placeholder("x"),
        ]
    );
    assert_eq!(template.render(&["a", "c"]), "arr:a:c:a");
}

#[test]
fn test_template_without_placeholders() {
    assert!(Template::parse("article:read").is_none());
    assert!(Template::parse("article:{}:read").is_none());
}

// ============================================================================
// Application Tests
// ============================================================================

#[test]
fn test_apply_values_and_drop_missing() {
    let abilities = ["metabase:dashboard:4?district={districtId}", "foo:{bar}", "arr:{x}:{y}"];
    let values = ValueMap::new()
        .with("districtId", "1")
        .with("x", ["a", "b"])
        .with("y", ["c", "d"]);

    assert_eq!(
        apply_values(&abilities, &values),
        vec![
            "metabase:dashboard:4?district=1",
            "arr:a:c",
            "arr:a:d",
            "arr:b:c",
            "arr:b:d",
        ]
    );
}

#[test]
fn test_apply_keeps_plain_abilities_in_place() {
    let values = ValueMap::new().with("id", ["1", "2"]);
    let applied = apply_values(&["first", "doc:{id}", "last"], &values);

    assert_eq!(applied, vec!["first", "doc:1", "doc:2", "last"]);
}

#[test]
fn test_apply_repeated_placeholder_is_consistent() {
    let values = ValueMap::new().with("x", ["a", "b"]);
    assert_eq!(apply_values(&["{x}:{x}"], &values), vec!["a:a", "b:b"]);
}

#[test]
fn test_apply_empty_scalar_is_a_value() {
    let values = ValueMap::new().with("blank", "");
    assert_eq!(apply_values(&["doc:{blank}"], &values), vec!["doc:"]);
}

#[test]
fn test_apply_empty_list_drops() {
    let values = ValueMap::new().with("ids", Vec::<String>::new());
    assert!(apply_values(&["doc:{ids}"], &values).is_empty());
}

#[test]
fn test_apply_does_not_reexpand_values() {
    let values = ValueMap::new().with("a", "{b}").with("b", "x");
    assert_eq!(apply_values(&["{a}-{b}"], &values), vec!["{b}-x"]);
}
