//! Tests for the element catalog and the typed builders.

use tagsmith_dom::{Construct, Diagnostic, Error, Node, StructuralError, lint};
use tagsmith_html::elements::{a, body, br, button, div, head, html, img, input, li, script, td, title, ul};
use tagsmith_html::{
    AttributeShape, ButtonType, GlobalAttributes, InputType, Loading, Tag, Target, attribute_spec,
    custom_element,
};
use tagsmith_serializer::{SerializerConfig, serialize, to_html};

/// Helper to render a finished builder with the default configuration
fn render(node: Result<Node, Error>) -> String {
    to_html(&node.unwrap())
}

// ========== Catalog lookups ==========

#[test]
fn test_tag_parse_is_case_insensitive() {
    assert_eq!("DIV".parse::<Tag>(), Ok(Tag::Div));
    assert_eq!("option".parse::<Tag>(), Ok(Tag::SelectOption));
    assert_eq!(Tag::SelectOption.to_string(), "option");

    let err = "blink-tag".parse::<Tag>().unwrap_err();
    assert_eq!(err.to_string(), "unknown element <blink-tag>");
}

#[test]
fn test_descriptor_facts() {
    assert!(Tag::Hr.descriptor().is_void());
    assert!(Tag::Hr.descriptor().is_block());
    assert!(Tag::Script.descriptor().is_raw_text());
    assert!(Tag::Pre.descriptor().is_preformatted());
    assert!(!Tag::Span.descriptor().is_block());

    assert!(Tag::Center.is_deprecated());
    assert_eq!(
        Tag::Acronym.descriptor().deprecation().map(|d| d.replacement),
        Some("abbr")
    );
    assert!(!Tag::Abbr.is_deprecated());
}

#[test]
fn test_attribute_spec_lookup() {
    let alt = attribute_spec("img", "ALT").unwrap();
    assert_eq!(alt.name, "alt");
    assert_eq!(alt.shape, AttributeShape::Text);

    assert_eq!(attribute_spec("div", "data-user").map(|spec| spec.name), Some("data-*"));
    assert_eq!(attribute_spec("span", "aria-label").map(|spec| spec.name), Some("aria-*"));
    assert_eq!(attribute_spec("div", "id").map(|spec| spec.name), Some("id"));
    assert!(attribute_spec("div", "href").is_none());
    assert!(attribute_spec("no-such", "id").is_none());
}

#[test]
fn test_keyword_and_deprecated_attribute_specs() {
    let kind = attribute_spec("button", "type").unwrap();
    assert_eq!(kind.shape, AttributeShape::Keyword(&["submit", "reset", "button"]));

    let name = attribute_spec("a", "name").unwrap();
    assert_eq!(name.deprecation.map(|d| d.replacement), Some("the id attribute"));
    assert!(attribute_spec("a", "href").unwrap().deprecation.is_none());
}

// ========== Typed builders ==========

#[test]
fn test_anchor_escapes_href() {
    let html = render(a().href("/search?q=1&lang=en").target(Target::Blank).text("Search").build());
    assert_eq!(html, r#"<a href="/search?q=1&amp;lang=en" target="_blank">Search</a>"#);
}

#[test]
fn test_button_with_keyword_and_flag() {
    let html = render(button().r#type(ButtonType::Submit).disabled(true).text("Go").build());
    assert_eq!(html, r#"<button type="submit" disabled>Go</button>"#);

    let html = render(button().disabled(false).text("Go").build());
    assert_eq!(html, "<button>Go</button>");
}

#[test]
fn test_void_element_attributes() {
    let html = render(
        img()
            .src("cat.png")
            .alt("")
            .width(640)
            .loading(Loading::Lazy)
            .build(),
    );
    assert_eq!(html, r#"<img src="cat.png" alt="" width="640" loading="lazy">"#);

    let html = render(input().r#type(InputType::Email).name("email").required(true).build());
    assert_eq!(html, r#"<input type="email" name="email" required>"#);
}

#[test]
fn test_global_attributes() {
    let html = render(
        div()
            .id("main")
            .class(["a", "b", "a"])
            .data("user-id", "7")
            .hidden(true)
            .spellcheck(false)
            .build(),
    );
    assert_eq!(
        html,
        r#"<div id="main" class="a b" data-user-id="7" hidden spellcheck="false"></div>"#
    );
}

#[test]
fn test_script_body_is_raw() {
    let html = render(script().raw("if (a < b) { go(); }").build());
    assert_eq!(html, "<script>if (a < b) { go(); }</script>");

    let html = render(script().raw("</SCRIPT><b>").build());
    assert_eq!(html, "<script><\\/SCRIPT><b></script>");
}

#[test]
fn test_document_pretty_printed() {
    let document = html()
        .lang("en")
        .child(head().child(title().text("Home")))
        .child(body().child(ul().child(li().text("one")).child(li().text("two"))))
        .build()
        .unwrap();
    let config = SerializerConfig::new().pretty().with_doctype();
    assert_eq!(
        serialize(&document, &config).unwrap(),
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n  \
           <head>\n    \
             <title>Home</title>\n  \
           </head>\n  \
           <body>\n    \
             <ul>\n      \
               <li>one</li>\n      \
               <li>two</li>\n    \
             </ul>\n  \
           </body>\n\
         </html>"
    );
}

#[test]
fn test_tag_builder_rejects_children_of_void() {
    let err = Tag::Br.builder().child("x").build().unwrap_err();
    assert_eq!(
        err,
        Error::Structural(StructuralError::VoidElementHasChildren {
            tag: "br".to_string()
        })
    );
    assert_eq!(render(br().build()), "<br>");
}

#[test]
fn test_invalid_comment_fails_build() {
    let err = div().comment("a --> b").build().unwrap_err();
    assert!(matches!(
        err,
        Error::Structural(StructuralError::InvalidComment { .. })
    ));
}

#[test]
fn test_custom_element() {
    let card = custom_element("my-card").unwrap().child("hi").build().unwrap();
    assert_eq!(to_html(&card), "<my-card>hi</my-card>");

    assert!(matches!(
        custom_element("card"),
        Err(StructuralError::InvalidTagName { .. })
    ));
}

// ========== Deprecated constructs ==========

#[test]
#[allow(deprecated)]
fn test_deprecated_constructs_reach_lint() {
    use tagsmith_html::elements::center;

    let tree = div()
        .child(center().text("old"))
        .child(td().nowrap(true).text("cell"))
        .build()
        .unwrap();

    let diagnostics = lint(&tree);
    assert_eq!(
        diagnostics,
        [
            Diagnostic::DeprecatedConstructUsed {
                construct: Construct::Element,
                name: "center".to_string(),
                suggested_replacement: "CSS text-align".to_string(),
            },
            Diagnostic::DeprecatedConstructUsed {
                construct: Construct::Attribute,
                name: "td[nowrap]".to_string(),
                suggested_replacement: "CSS white-space".to_string(),
            },
        ]
    );
    assert_eq!(
        to_html(&tree),
        "<div><center>old</center><td nowrap>cell</td></div>"
    );
}
