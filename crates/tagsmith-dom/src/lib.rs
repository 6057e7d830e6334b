//! Typed HTML node model for tagsmith.
//!
//! # Scope
//!
//! This crate provides:
//! - **Attribute values** - boolean, string, enumerated, numeric and list
//!   kinds with their encoding rules ([`AttributeValue::encode`])
//! - **Element descriptors** - void, raw text, block and deprecation facts
//!   about an element kind
//! - **Nodes** - immutable `Element` / `Text` / `Raw` / `Comment` trees
//! - **Tree builder** - construction that rejects illegal shapes up front
//! - **Lint** - advisory diagnostics for deprecated constructs and
//!   duplicate ids
//!
//! # Design
//!
//! Ownership only points from parent to child. A [`Node`] is a plain value:
//! independent subtrees can be built and serialized on different threads
//! without synchronization.

/// Attribute kinds and values.
pub mod attribute;
/// Tree construction and the fluent element builder.
pub mod builder;
/// Element descriptors.
pub mod descriptor;
/// Construction-time errors.
pub mod error;
/// Advisory diagnostics.
pub mod lint;
/// Node tree.
pub mod node;

pub use attribute::{
    Attribute, AttributeKind, AttributeList, AttributeValue, Encoded, EnumeratedValue, Keyword,
    ListSeparator, ListValue, Number,
};
pub use builder::{BuildMode, ElementBuilder, IntoNode, TreeBuilder};
pub use descriptor::{Deprecation, ElementDescriptor};
pub use error::{EncodingError, Error, InvalidAttributeValue, StructuralError};
pub use lint::{Construct, Diagnostic, lint};
pub use node::{Comment, Descendants, Element, Node};
