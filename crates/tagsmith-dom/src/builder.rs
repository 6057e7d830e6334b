//! Tree construction.
//!
//! [`TreeBuilder`] is the only way to create an [`Element`]. It enforces the
//! structural rules up front, so a [`Node`] that exists is always valid and
//! serialization itself never fails on shape.

use std::borrow::Cow;

use crate::attribute::{Attribute, AttributeList, AttributeValue, is_valid_attribute_name};
use crate::descriptor::ElementDescriptor;
use crate::error::{Error, StructuralError};
use crate::node::{Element, Node};

/// How repeated attribute names are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    /// The later assignment replaces the earlier one in place.
    #[default]
    Lenient,
    /// A repeated name fails with
    /// [`StructuralError::DuplicateAttributeRejected`].
    Strict,
}

/// Assembles nodes, rejecting trees that cannot be written as valid HTML.
///
/// Construction has no side effects beyond the returned value.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder {
    mode: BuildMode,
}

impl TreeBuilder {
    /// A builder applying last-write-wins to repeated attributes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: BuildMode::Lenient,
        }
    }

    /// A builder rejecting repeated attributes.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            mode: BuildMode::Strict,
        }
    }

    /// A builder with an explicit mode.
    #[must_use]
    pub const fn with_mode(mode: BuildMode) -> Self {
        Self { mode }
    }

    /// The duplicate-attribute policy in effect.
    #[must_use]
    pub const fn mode(&self) -> BuildMode {
        self.mode
    }

    /// Build an element.
    ///
    /// # Errors
    ///
    /// - [`StructuralError::InvalidAttributeName`] if an attribute name
    ///   cannot appear in HTML syntax.
    /// - [`StructuralError::DuplicateAttributeRejected`] if a name repeats
    ///   and the builder is strict.
    /// - [`StructuralError::VoidElementHasChildren`] if `descriptor` is void
    ///   and `children` is not empty.
    /// - [`StructuralError::ElementInRawText`] if `descriptor` is a raw text
    ///   element and a child is an element or a comment.
    pub fn element<A, C>(&self, descriptor: ElementDescriptor, attributes: A, children: C) -> Result<Node, Error>
    where
        A: IntoIterator<Item = Attribute>,
        C: IntoIterator<Item = Node>,
    {
        let mut list = AttributeList::new();
        for attribute in attributes {
            if !is_valid_attribute_name(&attribute.name) {
                return Err(StructuralError::InvalidAttributeName {
                    name: attribute.name.into_owned(),
                }
                .into());
            }
            if self.mode == BuildMode::Strict && list.contains(&attribute.name) {
                return Err(StructuralError::DuplicateAttributeRejected {
                    tag: descriptor.tag().to_string(),
                    name: attribute.name.into_owned(),
                }
                .into());
            }
            if let Some(previous) = list.set(attribute) {
                tracing::debug!(
                    tag = descriptor.tag(),
                    attribute = %previous.name,
                    "attribute reassigned, last write wins"
                );
            }
        }

        let children: Vec<Node> = children.into_iter().collect();
        if descriptor.is_void() && !children.is_empty() {
            return Err(StructuralError::VoidElementHasChildren {
                tag: descriptor.tag().to_string(),
            }
            .into());
        }
        if descriptor.is_raw_text()
            && let Some(child) = children
                .iter()
                .find(|child| matches!(child, Node::Element(_) | Node::Comment(_)))
        {
            return Err(StructuralError::ElementInRawText {
                tag: descriptor.tag().to_string(),
                child: child.describe(),
            }
            .into());
        }

        Ok(Node::Element(Element {
            descriptor,
            attributes: list,
            children,
        }))
    }
}

/// Conversion into a node that may fail, used to accept children of
/// different shapes (finished nodes, builders, plain strings).
pub trait IntoNode {
    /// Produce the node.
    ///
    /// # Errors
    ///
    /// Returns the construction error of the underlying builder.
    fn into_node(self) -> Result<Node, Error>;
}

impl IntoNode for Node {
    fn into_node(self) -> Result<Node, Error> {
        Ok(self)
    }
}

impl<E: Into<Error>> IntoNode for Result<Node, E> {
    fn into_node(self) -> Result<Node, Error> {
        self.map_err(Into::into)
    }
}

impl IntoNode for &str {
    fn into_node(self) -> Result<Node, Error> {
        Ok(Node::text(self))
    }
}

impl IntoNode for String {
    fn into_node(self) -> Result<Node, Error> {
        Ok(Node::Text(self))
    }
}

/// Fluent element construction.
///
/// Errors from attributes or children are held until [`build`](Self::build)
/// so calls can be chained; the first one recorded is returned and the
/// element is never produced.
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    descriptor: ElementDescriptor,
    builder: TreeBuilder,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
    error: Option<Error>,
}

impl ElementBuilder {
    /// Start building an element described by `descriptor`.
    #[must_use]
    pub const fn new(descriptor: ElementDescriptor) -> Self {
        Self {
            descriptor,
            builder: TreeBuilder::new(),
            attributes: Vec::new(),
            children: Vec::new(),
            error: None,
        }
    }

    /// Reject repeated attribute names instead of replacing them.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.builder = TreeBuilder::strict();
        self
    }

    /// The descriptor of the element under construction.
    #[must_use]
    pub const fn descriptor(&self) -> &ElementDescriptor {
        &self.descriptor
    }

    /// Add an attribute.
    #[must_use]
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Add an attribute by name and value.
    #[must_use]
    pub fn attr(self, name: impl Into<Cow<'static, str>>, value: AttributeValue) -> Self {
        self.attribute(Attribute::new(name, value))
    }

    /// Record an error raised while preparing an attribute or child.
    #[must_use]
    pub fn fail(mut self, error: impl Into<Error>) -> Self {
        if self.error.is_none() {
            self.error = Some(error.into());
        }
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(self, child: impl IntoNode) -> Self {
        match child.into_node() {
            Ok(node) => self.push_child(node),
            Err(error) => self.fail(error),
        }
    }

    /// Append several children in order.
    #[must_use]
    pub fn children<I>(self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoNode,
    {
        let mut builder = self;
        for child in children {
            builder = builder.child(child);
        }
        builder
    }

    fn push_child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Finish the element.
    ///
    /// # Errors
    ///
    /// Returns the first recorded error, or the error from
    /// [`TreeBuilder::element`].
    pub fn build(self) -> Result<Node, Error> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.builder.element(self.descriptor, self.attributes, self.children)
    }
}

impl IntoNode for ElementBuilder {
    fn into_node(self) -> Result<Node, Error> {
        self.build()
    }
}
