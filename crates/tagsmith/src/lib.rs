//! Typed HTML construction and injection-safe HTML5 serialization.
//!
//! # Scope
//!
//! This crate provides:
//! - **Re-exports** of the node model ([`dom`]), the element catalog
//!   ([`html`]) and the serializer ([`serializer`])
//! - **JSON documents** - node trees described as JSON and resolved through
//!   the catalog ([`DocumentSpec`])
//! - **Rendering** - load, lint and serialize in one call ([`render`])
//!
//! # Example
//!
//! ```
//! use tagsmith::{RenderOptions, render};
//!
//! let json = r#"{ "element": "a", "attributes": [["href", "/?a=1&b=2"]], "children": ["next"] }"#;
//! let rendered = render(json, &RenderOptions::default()).unwrap();
//! assert_eq!(rendered.html, r#"<a href="/?a=1&amp;b=2">next</a>"#);
//! ```

/// JSON document loading.
pub mod document;
/// The render pipeline.
pub mod render;

pub use tagsmith_dom as dom;
pub use tagsmith_html as html;
pub use tagsmith_serializer as serializer;

pub use document::{DocumentSpec, ElementSpec, LoadError, NodeSpec};
pub use render::{RenderError, RenderOptions, Rendered, render};
pub use tagsmith_dom::{Node, TreeBuilder};
pub use tagsmith_serializer::{SerializerConfig, to_html};
