//! Tests for the HTML serializer: attribute encoding, escaping, raw text
//! safety, void styles, pretty printing and configuration.

use quickcheck_macros::quickcheck;
use tagsmith_dom::{
    Attribute, AttributeValue, ElementDescriptor, ListValue, Node, Number, TreeBuilder,
};
use tagsmith_serializer::{
    DOCTYPE, Markup, SerializeError, SerializerConfig, VoidStyle, serialize, serialize_all,
    to_html, write_to,
};

const A: ElementDescriptor = ElementDescriptor::new("a");
const ABBR: ElementDescriptor = ElementDescriptor::new("abbr");
const BUTTON: ElementDescriptor = ElementDescriptor::new("button");
const DIV: ElementDescriptor = ElementDescriptor::new("div").block();
const HR: ElementDescriptor = ElementDescriptor::new("hr").void().block();
const IMG: ElementDescriptor = ElementDescriptor::new("img").void();
const P: ElementDescriptor = ElementDescriptor::new("p").block();
const PRE: ElementDescriptor = ElementDescriptor::new("pre").block().preformatted();
const SCRIPT: ElementDescriptor = ElementDescriptor::new("script").raw_text();
const SPAN: ElementDescriptor = ElementDescriptor::new("span");
const STYLE: ElementDescriptor = ElementDescriptor::new("style").raw_text();

/// Helper to build an element with no error handling noise
fn element(descriptor: ElementDescriptor, attributes: Vec<Attribute>, children: Vec<Node>) -> Node {
    TreeBuilder::new()
        .element(descriptor, attributes, children)
        .expect("element should build")
}

/// Helper to build a string attribute
fn string_attr(name: &'static str, value: &str) -> Attribute {
    Attribute::new(name, AttributeValue::string(value))
}

/// Helper to build a boolean attribute
fn bool_attr(name: &'static str, present: bool) -> Attribute {
    Attribute::new(name, AttributeValue::boolean(present))
}

/// Helper to serialize with the default configuration
fn html(node: &Node) -> String {
    serialize(node, &SerializerConfig::default()).expect("serialization should succeed")
}

/// Helper to serialize with pretty printing enabled
fn pretty(node: &Node) -> String {
    serialize(node, &SerializerConfig::new().pretty()).expect("serialization should succeed")
}

// ========== basic shapes ==========

#[test]
fn test_void_element_has_no_end_tag() {
    assert_eq!(html(&element(HR, vec![], vec![])), "<hr>");
}

#[test]
fn test_empty_normal_element_has_end_tag() {
    assert_eq!(html(&element(ABBR, vec![], vec![])), "<abbr></abbr>");
}

#[test]
fn test_link_with_ampersand_in_href() {
    let link = element(
        A,
        vec![string_attr("href", "https://x.com?a=1&b=2")],
        vec![Node::text("go")],
    );
    assert_eq!(html(&link), r#"<a href="https://x.com?a=1&amp;b=2">go</a>"#);
}

#[test]
fn test_boolean_attribute_true_is_bare() {
    let button = element(BUTTON, vec![bool_attr("disabled", true)], vec![Node::text("Go")]);
    assert_eq!(html(&button), "<button disabled>Go</button>");
}

#[test]
fn test_boolean_attribute_false_is_omitted() {
    let button = element(
        BUTTON,
        vec![bool_attr("disabled", false), string_attr("name", "go")],
        vec![],
    );
    assert_eq!(html(&button), r#"<button name="go"></button>"#);
}

#[test]
fn test_xhtml_void_style() {
    let config = SerializerConfig::new().xhtml();
    assert_eq!(config.void_style, VoidStyle::Xhtml);
    let out = serialize(&element(HR, vec![], vec![]), &config).unwrap();
    assert_eq!(out, "<hr />");

    let img = element(IMG, vec![string_attr("src", "a.png")], vec![]);
    assert_eq!(serialize(&img, &config).unwrap(), r#"<img src="a.png" />"#);
}

#[test]
fn test_top_level_text_and_comment() {
    assert_eq!(html(&Node::text("1 < 2")), "1 &lt; 2");
    assert_eq!(html(&Node::comment(" note ").unwrap()), "<!-- note -->");
}

// ========== attributes ==========

#[test]
fn test_attributes_keep_insertion_order() {
    let span = element(
        SPAN,
        vec![string_attr("b", "1"), string_attr("a", "2"), string_attr("c", "3")],
        vec![],
    );
    assert_eq!(html(&span), r#"<span b="1" a="2" c="3"></span>"#);
}

#[test]
fn test_reassigned_attribute_keeps_first_position() {
    let span = element(
        SPAN,
        vec![string_attr("id", "x"), string_attr("class", "c"), string_attr("id", "y")],
        vec![],
    );
    assert_eq!(html(&span), r#"<span id="y" class="c"></span>"#);
}

#[test]
fn test_numeric_attributes() {
    let span = element(
        SPAN,
        vec![
            Attribute::new("tabindex", AttributeValue::number(-1_i32)),
            Attribute::new("data-ratio", Number::float(1.5).unwrap().into()),
            Attribute::new("data-zero", Number::float(-0.0).unwrap().into()),
        ],
        vec![],
    );
    assert_eq!(
        html(&span),
        r#"<span tabindex="-1" data-ratio="1.5" data-zero="0"></span>"#
    );
}

#[test]
fn test_list_attributes() {
    let img = element(
        IMG,
        vec![
            Attribute::new("class", AttributeValue::tokens(["big", " ", "round"])),
            Attribute::new("srcset", ListValue::comma_separated(["a.png 1x", "b.png 2x"]).into()),
            Attribute::new("data-empty", ListValue::space_separated(["", "  "]).into()),
        ],
        vec![],
    );
    assert_eq!(html(&img), r#"<img class="big round" srcset="a.png 1x,b.png 2x">"#);
}

#[test]
fn test_attribute_value_escaping() {
    let span = element(
        SPAN,
        vec![string_attr("title", "say \"hi\" & 'bye' <now>")],
        vec![],
    );
    assert_eq!(
        html(&span),
        r#"<span title="say &quot;hi&quot; &amp; 'bye' <now>"></span>"#
    );
}

// ========== escaping ==========

#[test]
fn test_text_is_escaped_exactly_once() {
    let p = element(P, vec![], vec![Node::text("a & b")]);
    assert_eq!(html(&p), "<p>a &amp; b</p>");

    let already = element(P, vec![], vec![Node::text("&amp;")]);
    assert_eq!(html(&already), "<p>&amp;amp;</p>");
}

#[test]
fn test_text_cannot_inject_markup() {
    let p = element(P, vec![], vec![Node::text("<script>alert(1)</script>")]);
    assert_eq!(html(&p), "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>");
}

#[test]
fn test_raw_outside_raw_text_is_verbatim() {
    let div = element(DIV, vec![], vec![Node::raw("<b>bold</b> & more")]);
    assert_eq!(html(&div), "<div><b>bold</b> & more</div>");
}

// ========== raw text elements ==========

#[test]
fn test_script_body_cannot_close_element() {
    let script = element(SCRIPT, vec![], vec![Node::raw("</script>alert(1)//")]);
    let out = html(&script);
    assert_eq!(out, r"<script><\/script>alert(1)//</script>");

    let body = out
        .strip_prefix("<script>")
        .and_then(|rest| rest.strip_suffix("</script>"))
        .unwrap();
    assert!(!body.to_ascii_lowercase().contains("</script"));
}

#[test]
fn test_script_guard_ignores_case() {
    let script = element(SCRIPT, vec![], vec![Node::raw("a</SCRIPT >b</Script")]);
    assert_eq!(html(&script), r"<script>a<\/SCRIPT >b<\/Script</script>");
}

#[test]
fn test_guard_spans_adjacent_raw_nodes() {
    let script = element(
        SCRIPT,
        vec![],
        vec![
            Node::raw("var s = '<"),
            Node::raw("/script><img src=x onerror=alert(1)>"),
        ],
    );
    assert_eq!(
        html(&script),
        r"<script>var s = '<\/script><img src=x onerror=alert(1)></script>"
    );

    let split_three_ways = element(SCRIPT, vec![], vec![Node::raw("<"), Node::raw("/scr"), Node::raw("IPT>")]);
    assert_eq!(html(&split_three_ways), r"<script><\/scrIPT></script>");
}

#[test]
fn test_guard_spans_raw_and_text_nodes() {
    let script = element(SCRIPT, vec![], vec![Node::raw("<"), Node::text("/script/")]);
    assert_eq!(html(&script), r"<script><\/script/</script>");
}

#[test]
fn test_raw_text_body_is_not_entity_escaped() {
    let script = element(SCRIPT, vec![], vec![Node::raw("if (a < b && c > d) {}")]);
    assert_eq!(html(&script), "<script>if (a < b && c > d) {}</script>");

    let style = element(STYLE, vec![], vec![Node::raw("p > a { color: red }")]);
    assert_eq!(html(&style), "<style>p > a { color: red }</style>");
}

#[test]
fn test_style_guard_targets_own_tag() {
    let style = element(STYLE, vec![], vec![Node::raw("</script></style>")]);
    assert_eq!(html(&style), r"<style></script><\/style></style>");
}

// ========== doctype ==========

#[test]
fn test_doctype_precedes_root() {
    let p = element(P, vec![], vec![Node::text("x")]);
    let compact = serialize(&p, &SerializerConfig::new().with_doctype()).unwrap();
    assert_eq!(compact, format!("{DOCTYPE}<p>x</p>"));

    let pretty = serialize(&p, &SerializerConfig::new().with_doctype().pretty()).unwrap();
    assert_eq!(pretty, "<!DOCTYPE html>\n<p>x</p>");
}

// ========== pretty printing ==========

#[test]
fn test_pretty_block_children_on_own_lines() {
    let div = element(
        DIV,
        vec![],
        vec![
            element(P, vec![], vec![Node::text("a")]),
            element(P, vec![], vec![Node::text("b")]),
        ],
    );
    assert_eq!(pretty(&div), "<div>\n  <p>a</p>\n  <p>b</p>\n</div>");
}

#[test]
fn test_pretty_nested_indentation() {
    let inner = element(DIV, vec![], vec![element(P, vec![], vec![Node::text("x")])]);
    let outer = element(DIV, vec![], vec![inner, element(HR, vec![], vec![])]);
    assert_eq!(
        pretty(&outer),
        "<div>\n  <div>\n    <p>x</p>\n  </div>\n  <hr>\n</div>"
    );
}

#[test]
fn test_pretty_custom_indent_unit() {
    let div = element(DIV, vec![], vec![element(P, vec![], vec![])]);
    let out = serialize(&div, &SerializerConfig::new().with_indent("\t")).unwrap();
    assert_eq!(out, "<div>\n\t<p></p>\n</div>");
}

#[test]
fn test_pretty_keeps_mixed_content_inline() {
    let div = element(
        DIV,
        vec![],
        vec![
            Node::text("hello "),
            element(P, vec![], vec![Node::text("there")]),
        ],
    );
    assert_eq!(pretty(&div), "<div>hello <p>there</p></div>");

    let p = element(P, vec![], vec![element(SPAN, vec![], vec![Node::text("x")])]);
    assert_eq!(pretty(&p), "<p><span>x</span></p>");
}

#[test]
fn test_pretty_leaves_preformatted_content_alone() {
    let pre = element(
        PRE,
        vec![],
        vec![element(DIV, vec![], vec![element(P, vec![], vec![Node::text("  a\n b")])])],
    );
    assert_eq!(pretty(&pre), "<pre><div><p>  a\n b</p></div></pre>");
}

#[test]
fn test_pretty_does_not_touch_raw_text() {
    let script = element(SCRIPT, vec![], vec![Node::raw("let a = 1;")]);
    assert_eq!(pretty(&script), "<script>let a = 1;</script>");
}

#[test]
fn test_comments_count_as_block_when_pretty() {
    let div = element(
        DIV,
        vec![],
        vec![Node::comment("c").unwrap(), element(P, vec![], vec![])],
    );
    assert_eq!(pretty(&div), "<div>\n  <!--c-->\n  <p></p>\n</div>");
}

// ========== depth limit ==========

/// Helper to build `levels` nested divs
fn nested(levels: usize) -> Node {
    let mut node = Node::text("leaf");
    for _ in 0..levels {
        node = element(DIV, vec![], vec![node]);
    }
    node
}

#[test]
fn test_depth_limit_rejects_deep_tree() {
    let tree = nested(4);
    let result = serialize(&tree, &SerializerConfig::new().with_max_depth(3));
    assert!(matches!(result, Err(SerializeError::DepthLimitExceeded { limit: 3 })));
}

#[test]
fn test_depth_limit_allows_tree_at_limit() {
    let tree = nested(3);
    let out = serialize(&tree, &SerializerConfig::new().with_max_depth(3)).unwrap();
    assert_eq!(out, "<div><div><div>leaf</div></div></div>");
}

#[test]
fn test_depth_limit_writes_nothing_on_failure() {
    let mut out = Vec::new();
    let result = write_to(&nested(5), &SerializerConfig::new().with_max_depth(1), &mut out);
    assert!(result.is_err());
    assert!(out.is_empty());
}

#[test]
fn test_very_deep_tree_serializes() {
    let out = html(&nested(2_000));
    assert!(out.starts_with("<div><div>"));
    assert!(out.ends_with("</div></div>"));
}

// ========== entry points ==========

#[test]
fn test_write_to_stream() {
    let mut out = Vec::new();
    let p = element(P, vec![], vec![Node::text("x")]);
    write_to(&p, &SerializerConfig::default(), &mut out).unwrap();
    assert_eq!(out, b"<p>x</p>");
}

#[test]
fn test_markup_display_and_to_html() {
    let p = element(P, vec![], vec![Node::text("a & b")]);
    assert_eq!(to_html(&p), "<p>a &amp; b</p>");
    assert_eq!(format!("{}", Markup::new(&p)), "<p>a &amp; b</p>");

    let config = SerializerConfig::new().with_doctype();
    assert_eq!(
        Markup::with_config(&p, &config).to_string(),
        "<!DOCTYPE html><p>a &amp; b</p>"
    );
}

#[test]
fn test_serialize_all_matches_sequential_output() {
    let nodes: Vec<Node> = (0_i32..50)
        .map(|index| {
            element(
                P,
                vec![Attribute::new("data-index", AttributeValue::number(index))],
                vec![Node::text(format!("item {index} & more"))],
            )
        })
        .collect();
    let config = SerializerConfig::default();

    let expected: String = nodes.iter().map(html).collect();
    assert_eq!(serialize_all(&nodes, &config).unwrap(), expected);
}

#[test]
fn test_serialize_all_writes_doctype_once() {
    let nodes = vec![element(HR, vec![], vec![]), element(HR, vec![], vec![])];
    let out = serialize_all(&nodes, &SerializerConfig::new().with_doctype()).unwrap();
    assert_eq!(out, "<!DOCTYPE html><hr><hr>");

    assert_eq!(serialize_all(&[], &SerializerConfig::default()).unwrap(), "");
}

#[test]
fn test_serialize_all_pretty_puts_roots_on_own_lines() {
    let nodes = vec![
        element(P, vec![], vec![Node::text("a")]),
        element(P, vec![], vec![Node::text("b")]),
        element(HR, vec![], vec![]),
    ];
    let out = serialize_all(&nodes, &SerializerConfig::new().pretty().with_doctype()).unwrap();
    assert_eq!(out, "<!DOCTYPE html>\n<p>a</p>\n<p>b</p>\n<hr>");
}

#[test]
fn test_serialize_all_reports_depth_error() {
    let nodes = vec![nested(1), nested(4)];
    let result = serialize_all(&nodes, &SerializerConfig::new().with_max_depth(2));
    assert!(matches!(result, Err(SerializeError::DepthLimitExceeded { limit: 2 })));
}

// ========== configuration ==========

#[test]
fn test_config_loads_from_json_with_defaults() {
    let config: SerializerConfig =
        serde_json::from_str(r#"{"void_style": "xhtml", "max_depth": 64}"#).unwrap();
    assert_eq!(config.void_style, VoidStyle::Xhtml);
    assert_eq!(config.max_depth, Some(64));
    assert!(!config.pretty_print);
    assert_eq!(config.indent_unit, "  ");
}

#[test]
fn test_config_rejects_unknown_fields() {
    let result: Result<SerializerConfig, _> = serde_json::from_str(r#"{"pretty": true}"#);
    assert!(result.is_err());
}

// ========== properties ==========

#[quickcheck]
fn prop_escaped_text_never_contains_markup(text: String) -> bool {
    let out = html(&element(P, vec![], vec![Node::text(text)]));
    let body = &out["<p>".len()..out.len() - "</p>".len()];
    !body.contains('<') && !body.contains('>')
}

#[quickcheck]
fn prop_escaped_attribute_never_breaks_quotes(value: String) -> bool {
    let out = html(&element(
        SPAN,
        vec![Attribute::new("title", AttributeValue::string(value))],
        vec![],
    ));
    let inner = &out[r#"<span title=""#.len()..out.len() - r#""></span>"#.len()];
    !inner.contains('"')
}

#[quickcheck]
fn prop_raw_script_body_never_closes(body: String) -> bool {
    let out = html(&element(SCRIPT, vec![], vec![Node::raw(body)]));
    let inner = &out["<script>".len()..out.len() - "</script>".len()];
    !inner.to_ascii_lowercase().contains("</script")
}

/// Pieces that tend to assemble a closing sequence across node boundaries
const CLOSING_PIECES: [&str; 6] = ["<", "/", "</", "script", "SCRIPT>", "</scr"];

#[quickcheck]
fn prop_split_script_body_never_closes(pieces: Vec<(bool, u8, String)>) -> bool {
    let children = pieces
        .into_iter()
        .map(|(is_raw, pick, free)| {
            let content = if pick % 2 == 0 {
                CLOSING_PIECES[usize::from(pick / 2) % CLOSING_PIECES.len()].to_string()
            } else {
                free
            };
            if is_raw { Node::raw(content) } else { Node::text(content) }
        })
        .collect();
    let out = html(&element(SCRIPT, vec![], children));
    let inner = &out["<script>".len()..out.len() - "</script>".len()];
    !inner.to_ascii_lowercase().contains("</script")
}
