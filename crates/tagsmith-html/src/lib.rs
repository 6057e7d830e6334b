//! HTML element and attribute catalog for tagsmith.
//!
//! # Scope
//!
//! This crate provides:
//! - **Element catalog** ([WHATWG § 4](https://html.spec.whatwg.org/multipage/semantics.html))
//!   - One [`Tag`] per element with its void, raw text, block and
//!     deprecation facts
//!   - A typed builder per element with one setter per attribute
//!   - Obsolete elements from [§ 16](https://html.spec.whatwg.org/multipage/obsolete.html),
//!     marked `#[deprecated]`
//!
//! - **Attribute catalog**
//!   - The global attributes, including the `data-*` and `aria-*` families
//!   - Element-specific attribute tables with their value shapes
//!
//! - **Keyword types** for enumerated attributes
//!
//! # Example
//!
//! ```
//! use tagsmith_html::elements::{a, p};
//! use tagsmith_html::{GlobalAttributes, Target};
//!
//! let paragraph = p()
//!     .class(["intro"])
//!     .text("See ")
//!     .child(a().href("/docs?a=1&b=2").target(Target::Blank).text("the docs"))
//!     .build()
//!     .unwrap();
//! assert!(matches!(paragraph, tagsmith_dom::Node::Element(_)));
//! ```

/// Attribute descriptors and global attribute setters.
pub mod attributes;
/// The element catalog and typed builders.
pub mod elements;
/// Keyword types for enumerated attributes.
pub mod values;

pub use attributes::{AttributeShape, AttributeSpec, GLOBAL_ATTRIBUTES, GlobalAttributes, global_attribute};
pub use elements::{Tag, UnknownElement, attribute_spec, custom_element};
pub use values::*;
