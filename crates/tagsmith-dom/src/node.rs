//! The node tree.
//!
//! Nodes are immutable values built bottom-up. A parent owns its children
//! by value; there are no parent or sibling pointers.

use std::borrow::Cow;
use std::fmt;
use std::mem;

use crate::attribute::AttributeList;
use crate::descriptor::ElementDescriptor;
use crate::error::{EncodingError, StructuralError, decode_utf8};

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// One node of a document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    Element(Element),
    /// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    ///
    /// Character data, escaped when serialized.
    Text(String),
    /// Verbatim data such as the body of a `script` or `style` element.
    Raw(String),
    /// [§ 4.7 Interface Comment](https://dom.spec.whatwg.org/#interface-comment)
    Comment(Comment),
}

impl Node {
    /// A text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// A text node decoded from bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError`] if `bytes` is not valid UTF-8.
    pub fn text_from_utf8(bytes: Vec<u8>) -> Result<Self, EncodingError> {
        decode_utf8(bytes).map(Self::Text)
    }

    /// A raw node.
    pub fn raw(content: impl Into<String>) -> Self {
        Self::Raw(content.into())
    }

    /// A raw node decoded from bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError`] if `bytes` is not valid UTF-8.
    pub fn raw_from_utf8(bytes: Vec<u8>) -> Result<Self, EncodingError> {
        decode_utf8(bytes).map(Self::Raw)
    }

    /// A comment node.
    ///
    /// # Errors
    ///
    /// See [`Comment::new`].
    pub fn comment(content: impl Into<String>) -> Result<Self, StructuralError> {
        Comment::new(content).map(Self::Comment)
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) | Self::Raw(_) | Self::Comment(_) => None,
        }
    }

    /// Children of this node; empty for everything but elements.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        self.as_element().map(Element::children).unwrap_or(&[])
    }

    /// Short description used in error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Element(element) => format!("element <{}>", element.tag()),
            Self::Text(_) => "text".to_string(),
            Self::Raw(_) => "raw content".to_string(),
            Self::Comment(_) => "a comment".to_string(),
        }
    }

    /// Iterate over this node and all its descendants in tree order.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Comment text that cannot end the comment early.
///
/// The text is private; [`Comment::new`] is the only way in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment(String);

impl Comment {
    /// [§ 13.1.6 Comments](https://html.spec.whatwg.org/multipage/syntax.html#comments)
    ///
    /// "The text must not start with the string ">", nor start with the
    /// string "->", nor contain the strings "<!--", "-->", or "--!>", nor
    /// end with the string "<!-"."
    ///
    /// # Errors
    ///
    /// Returns [`StructuralError::InvalidComment`] naming the violated rule.
    pub fn new(content: impl Into<String>) -> Result<Self, StructuralError> {
        let content = content.into();
        let reason = if content.starts_with('>') {
            Some("starts with \">\"")
        } else if content.starts_with("->") {
            Some("starts with \"->\"")
        } else if content.contains("<!--") {
            Some("contains \"<!--\"")
        } else if content.contains("-->") {
            Some("contains \"-->\"")
        } else if content.contains("--!>") {
            Some("contains \"--!>\"")
        } else if content.ends_with("<!-") {
            Some("ends with \"<!-\"")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(StructuralError::InvalidComment { reason }),
            None => Ok(Self(content)),
        }
    }

    /// The comment text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An element with its attributes and children.
///
/// Built by [`TreeBuilder`](crate::TreeBuilder), which guarantees that void
/// elements have no children and raw text elements hold only character data.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) descriptor: ElementDescriptor,
    pub(crate) attributes: AttributeList,
    pub(crate) children: Vec<Node>,
}

impl Element {
    /// The element's descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &ElementDescriptor {
        &self.descriptor
    }

    /// The element's tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        self.descriptor.tag()
    }

    /// Attributes in insertion order.
    #[must_use]
    pub const fn attributes(&self) -> &AttributeList {
        &self.attributes
    }

    /// Children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns the element's id attribute value if present.
    ///
    /// Per [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes):
    /// "The id attribute specifies its element's unique identifier (ID)."
    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.attributes
            .get("id")
            .and_then(|attr| attr.value.as_text())
            .map(Cow::into_owned)
    }
}

/// Pre-order iterator over a node and its descendants.
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push in reverse so the first child is visited next
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

// The derived drop recurses once per nesting level; unlink descendants
// onto a heap stack instead so deep trees drop in constant stack space.
impl Drop for Element {
    fn drop(&mut self) {
        let mut stack = mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            if let Node::Element(element) = &mut node {
                stack.append(&mut element.children);
            }
        }
    }
}
