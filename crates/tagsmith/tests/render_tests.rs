//! Tests for JSON document loading and the render pipeline.

use tagsmith::dom::{BuildMode, Diagnostic, Error, InvalidAttributeValue, StructuralError};
use tagsmith::serializer::SerializeError;
use tagsmith::{LoadError, RenderError, RenderOptions, SerializerConfig, render};

/// Helper to render with default options
fn html(json: &str) -> String {
    render(json, &RenderOptions::default()).unwrap().html
}

/// Helper to get the load error of a rejected document
fn load_error(json: &str) -> LoadError {
    match render(json, &RenderOptions::default()) {
        Err(RenderError::Load(err)) => err,
        other => panic!("expected a load error, got {other:?}"),
    }
}

// ========== Catalog resolution ==========

#[test]
fn test_keyword_is_normalized() {
    let json = r#"{
        "element": "button",
        "attributes": [["type", "SUBMIT"], ["disabled", true]],
        "children": ["Go"]
    }"#;
    assert_eq!(html(json), r#"<button type="submit" disabled>Go</button>"#);
}

#[test]
fn test_keyword_outside_set_is_rejected() {
    let err = load_error(r#"{ "element": "button", "attributes": [["type", "big"]] }"#);
    assert!(matches!(
        err,
        LoadError::Build(Error::InvalidAttributeValue(InvalidAttributeValue::NotInKeywordSet { .. }))
    ));
}

#[test]
fn test_lists_and_numbers() {
    let json = r#"{
        "element": "img",
        "attributes": [
            ["srcset", ["a.png 1x", "b.png 2x"]],
            ["width", 640],
            ["class", ["hero", "wide"]]
        ]
    }"#;
    assert_eq!(
        html(json),
        r#"<img srcset="a.png 1x,b.png 2x" width="640" class="hero wide">"#
    );
}

#[test]
fn test_unknown_names() {
    assert!(matches!(
        load_error(r#"{ "element": "blinky" }"#),
        LoadError::UnknownElement(_)
    ));
    assert!(matches!(
        load_error(r#"{ "element": "div", "attributes": [["href", "/"]] }"#),
        LoadError::UnknownAttribute { .. }
    ));
    assert_eq!(
        html(r#"{ "element": "div", "attributes": [["data-state", "open"], ["aria-hidden", "true"]] }"#),
        r#"<div data-state="open" aria-hidden="true"></div>"#
    );
}

#[test]
fn test_value_must_fit_shape() {
    let err = load_error(r#"{ "element": "input", "attributes": [["disabled", "yes"]] }"#);
    assert_eq!(err.to_string(), "attribute input[disabled] expects a boolean");
}

#[test]
fn test_custom_element_infers_values() {
    let json = r#"{
        "element": "my-card",
        "attributes": [["open", true], ["size", 2], ["label", "x"]],
        "children": ["hi"]
    }"#;
    assert_eq!(html(json), r#"<my-card open size="2" label="x">hi</my-card>"#);
}

// ========== Node kinds ==========

#[test]
fn test_raw_text_is_guarded() {
    let json = r#"{ "element": "script", "children": [{ "raw": "</script><b>" }] }"#;
    assert_eq!(html(json), "<script><\\/script><b></script>");
}

#[test]
fn test_text_is_escaped_and_comments_validated() {
    let json = r#"{ "element": "p", "children": ["a < b", { "comment": " note " }] }"#;
    assert_eq!(html(json), "<p>a &lt; b<!-- note --></p>");

    let err = load_error(r#"{ "element": "p", "children": [{ "comment": "-->" }] }"#);
    assert!(matches!(
        err,
        LoadError::Build(Error::Structural(StructuralError::InvalidComment { .. }))
    ));
}

#[test]
fn test_malformed_json() {
    assert!(matches!(load_error("{ \"element\": "), LoadError::Json(_)));
}

// ========== Options ==========

#[test]
fn test_fragment_with_doctype() {
    let options = RenderOptions {
        serializer: SerializerConfig::new().with_doctype(),
        ..RenderOptions::default()
    };
    let rendered = render(r#"[{ "element": "p" }, "between", { "element": "p" }]"#, &options).unwrap();
    assert_eq!(rendered.html, "<!DOCTYPE html><p></p>between<p></p>");
}

#[test]
fn test_strict_mode_rejects_repeated_attributes() {
    let json = r#"{ "element": "div", "attributes": [["id", "a"], ["ID", "b"]] }"#;
    assert_eq!(html(json), r#"<div id="b"></div>"#);

    let options = RenderOptions {
        mode: BuildMode::Strict,
        ..RenderOptions::default()
    };
    assert!(matches!(
        render(json, &options),
        Err(RenderError::Load(LoadError::Build(Error::Structural(
            StructuralError::DuplicateAttributeRejected { .. }
        ))))
    ));
}

#[test]
fn test_depth_limit() {
    let options = RenderOptions {
        serializer: SerializerConfig::new().with_max_depth(1),
        ..RenderOptions::default()
    };
    let result = render(r#"{ "element": "div", "children": [{ "element": "div" }] }"#, &options);
    assert!(matches!(
        result,
        Err(RenderError::Serialize(SerializeError::DepthLimitExceeded { limit: 1 }))
    ));
}

#[test]
fn test_lint_on_request() {
    let json = r#"{
        "element": "body",
        "children": [
            { "element": "center", "attributes": [["id", "x"]] },
            { "element": "p", "attributes": [["id", "x"]] }
        ]
    }"#;
    assert!(render(json, &RenderOptions::default()).unwrap().diagnostics.is_empty());

    let options = RenderOptions {
        lint: true,
        ..RenderOptions::default()
    };
    let rendered = render(json, &options).unwrap();
    assert_eq!(rendered.diagnostics.len(), 2);
    assert!(matches!(
        &rendered.diagnostics[1],
        Diagnostic::DuplicateIdentifier { id, occurrences: 2 } if id == "x"
    ));
    assert_eq!(
        rendered.diagnostics[0].to_string(),
        "element <center> is deprecated; use CSS text-align"
    );
}
