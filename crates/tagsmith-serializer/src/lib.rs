//! HTML5 serialization for tagsmith node trees.
//!
//! # Scope
//!
//! This crate implements:
//! - **Escaping** ([WHATWG § 13.3](https://html.spec.whatwg.org/multipage/parsing.html#serialising-html-fragments))
//!   - Text mode: `&`, `<`, `>`
//!   - Attribute mode: `&`, `"`
//!   - Closing-sequence guard for raw text element bodies
//!
//! - **Serializer**
//!   - Attribute encoding by kind, in insertion order
//!   - HTML or XHTML void element style
//!   - Optional doctype and cosmetic pretty printing
//!   - Optional nesting limit, checked before any output is written
//!
//! - **Parallel rendering** of independent subtrees

/// Serializer options.
pub mod config;
/// Escaping tables and the raw text guard.
pub mod escape;
/// Parallel rendering of sibling subtrees.
pub mod parallel;
/// Tree walker producing HTML text.
pub mod serializer;

pub use config::{SerializerConfig, VoidStyle};
pub use escape::{escape_attribute, escape_text, guard_raw_text};
pub use parallel::serialize_all;
pub use serializer::{DOCTYPE, Markup, SerializeError, serialize, serialize_to, to_html, write_to};
