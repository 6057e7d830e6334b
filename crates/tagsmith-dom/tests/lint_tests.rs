//! Tests for the advisory lint pass.

use tagsmith_dom::{
    Attribute, AttributeValue, Construct, Deprecation, Diagnostic, ElementBuilder,
    ElementDescriptor, Node, lint,
};

const DIV: ElementDescriptor = ElementDescriptor::new("div").block();
const CENTER: ElementDescriptor = ElementDescriptor::new("center")
    .block()
    .deprecated("CSS text-align");
const TD: ElementDescriptor = ElementDescriptor::new("td");

/// Helper to build a div with an id
fn div_with_id(id: &str) -> ElementBuilder {
    ElementBuilder::new(DIV).attr("id", AttributeValue::string(id))
}

#[test]
fn test_clean_tree_has_no_diagnostics() {
    let tree = ElementBuilder::new(DIV)
        .child(div_with_id("a"))
        .child(div_with_id("b"))
        .build()
        .unwrap();
    assert!(lint(&tree).is_empty());
}

#[test]
fn test_deprecated_element_reported() {
    let tree = ElementBuilder::new(DIV)
        .child(ElementBuilder::new(CENTER).child("hi"))
        .build()
        .unwrap();
    assert_eq!(
        lint(&tree),
        [Diagnostic::DeprecatedConstructUsed {
            construct: Construct::Element,
            name: "center".to_string(),
            suggested_replacement: "CSS text-align".to_string(),
        }]
    );
}

#[test]
fn test_deprecated_attribute_reported_only_when_present() {
    let align = |value: AttributeValue| {
        Attribute::new("nowrap", value).with_deprecation(Deprecation::new("CSS white-space"))
    };
    let tree = ElementBuilder::new(DIV)
        .child(ElementBuilder::new(TD).attribute(align(AttributeValue::boolean(true))))
        .child(ElementBuilder::new(TD).attribute(align(AttributeValue::boolean(false))))
        .build()
        .unwrap();

    let diagnostics = lint(&tree);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].to_string(),
        "attribute td[nowrap] is deprecated; use CSS white-space"
    );
}

#[test]
fn test_duplicate_ids_reported_once_each_in_first_occurrence_order() {
    let tree = ElementBuilder::new(DIV)
        .child(div_with_id("b"))
        .child(div_with_id("a").child(div_with_id("b")))
        .child(div_with_id("a"))
        .child(div_with_id("b"))
        .child(div_with_id("unique"))
        .build()
        .unwrap();

    assert_eq!(
        lint(&tree),
        [
            Diagnostic::DuplicateIdentifier {
                id: "b".to_string(),
                occurrences: 3,
            },
            Diagnostic::DuplicateIdentifier {
                id: "a".to_string(),
                occurrences: 2,
            },
        ]
    );
}

#[test]
fn test_blank_ids_are_ignored() {
    let tree = ElementBuilder::new(DIV)
        .child(div_with_id(""))
        .child(div_with_id(" "))
        .child(div_with_id(""))
        .build()
        .unwrap();
    assert!(lint(&tree).is_empty());
}

#[test]
fn test_lint_does_not_touch_the_tree() {
    let tree = ElementBuilder::new(CENTER)
        .child(div_with_id("x"))
        .child(div_with_id("x"))
        .build()
        .unwrap();
    let before = tree.clone();
    assert_eq!(lint(&tree).len(), 2);
    assert_eq!(tree, before);
}

#[test]
fn test_lint_on_leaf_nodes() {
    assert!(lint(&Node::text("plain")).is_empty());
    assert!(lint(&Node::raw("<b>")).is_empty());
}

#[test]
fn test_report_deduplicates() {
    let diagnostics = [Diagnostic::DuplicateIdentifier {
        id: "lint-report-test".to_string(),
        occurrences: 2,
    }];
    assert_eq!(lint::report(&diagnostics), 1);
    assert_eq!(lint::report(&diagnostics), 0);
}
