//! HTML serializer - turn a node tree into HTML5 text.
//!
//! The walk is depth-first and pre-order, driven by an explicit stack so
//! that deep trees cannot exhaust the call stack.

use std::fmt::{self, Write};
use std::io;

use tagsmith_dom::{Element, Encoded, Node};
use thiserror::Error;

use crate::config::{SerializerConfig, VoidStyle};
use crate::escape::{escape_attribute, escape_text, guard_raw_text};

/// The literal written before the root when `emit_doctype` is set.
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// Failure while writing a tree.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// The tree nests elements deeper than
    /// [`SerializerConfig::max_depth`].
    #[error("elements are nested deeper than the limit of {limit}")]
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
    /// The output sink reported an error.
    #[error("failed to write output")]
    Format(#[from] fmt::Error),
    /// The output stream reported an error.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Serialize `node` into a new string.
///
/// Nothing is returned when the tree is rejected, so a failed call never
/// yields partial markup.
///
/// # Errors
///
/// Returns [`SerializeError::DepthLimitExceeded`] when the tree is deeper
/// than the configured limit.
pub fn serialize(node: &Node, config: &SerializerConfig) -> Result<String, SerializeError> {
    let mut out = String::new();
    serialize_to(node, config, &mut out)?;
    Ok(out)
}

/// Serialize `node` into any [`fmt::Write`] sink.
///
/// The depth limit is checked before the first byte is written.
///
/// # Errors
///
/// Returns [`SerializeError::DepthLimitExceeded`] for trees over the limit
/// and [`SerializeError::Format`] if the sink fails.
pub fn serialize_to<W: Write>(node: &Node, config: &SerializerConfig, out: &mut W) -> Result<(), SerializeError> {
    if let Some(limit) = config.max_depth
        && element_depth(node) > limit
    {
        return Err(SerializeError::DepthLimitExceeded { limit });
    }
    let mut serializer = Serializer::new(out, config);
    if config.emit_doctype {
        serializer.out.write_str(DOCTYPE)?;
        serializer.write_newline()?;
    }
    serializer.write_tree(node)?;
    Ok(())
}

/// Serialize `node` into an [`io::Write`] stream.
///
/// # Errors
///
/// Returns [`SerializeError::DepthLimitExceeded`] for trees over the limit
/// and [`SerializeError::Io`] if the stream fails.
pub fn write_to<W: io::Write>(node: &Node, config: &SerializerConfig, writer: &mut W) -> Result<(), SerializeError> {
    let html = serialize(node, config)?;
    writer.write_all(html.as_bytes())?;
    Ok(())
}

/// Serialize with the default configuration.
#[must_use]
pub fn to_html(node: &Node) -> String {
    Markup::new(node).to_string()
}

/// Display adapter writing a node with a given configuration.
///
/// A depth limit violation surfaces as [`fmt::Error`]; use [`serialize`]
/// to tell it apart.
#[derive(Debug, Clone, Copy)]
pub struct Markup<'a> {
    node: &'a Node,
    config: Option<&'a SerializerConfig>,
}

impl<'a> Markup<'a> {
    /// Display `node` with the default configuration.
    #[must_use]
    pub const fn new(node: &'a Node) -> Self {
        Self { node, config: None }
    }

    /// Display `node` with `config`.
    #[must_use]
    pub const fn with_config(node: &'a Node, config: &'a SerializerConfig) -> Self {
        Self {
            node,
            config: Some(config),
        }
    }
}

impl fmt::Display for Markup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let default = SerializerConfig::default();
        let config = self.config.unwrap_or(&default);
        serialize_to(self.node, config, f).map_err(|_| fmt::Error)
    }
}

/// Number of elements on the longest root-to-leaf path.
fn element_depth(root: &Node) -> usize {
    let mut deepest = 0;
    let mut stack = vec![(root, 0_usize)];
    while let Some((node, above)) = stack.pop() {
        if let Node::Element(element) = node {
            let depth = above + 1;
            deepest = deepest.max(depth);
            stack.extend(element.children().iter().map(|child| (child, depth)));
        }
    }
    deepest
}

/// Where a node sits relative to its surroundings.
#[derive(Debug, Clone, Copy)]
struct Context {
    /// Number of enclosing elements.
    depth: usize,
    /// The node starts on a fresh, indented line.
    own_line: bool,
    /// Some ancestor keeps its whitespace.
    preformatted: bool,
}

enum Step<'a> {
    Open(&'a Node, Context),
    Close {
        element: &'a Element,
        depth: usize,
        own_line: bool,
    },
}

struct Serializer<'a, W: Write> {
    out: &'a mut W,
    config: &'a SerializerConfig,
}

impl<'a, W: Write> Serializer<'a, W> {
    const fn new(out: &'a mut W, config: &'a SerializerConfig) -> Self {
        Self { out, config }
    }

    fn write_indent(&mut self, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            self.out.write_str(&self.config.indent_unit)?;
        }
        Ok(())
    }

    fn write_newline(&mut self) -> fmt::Result {
        if self.config.pretty_print {
            self.out.write_char('\n')?;
        }
        Ok(())
    }

    fn write_tree(&mut self, root: &'a Node) -> fmt::Result {
        let root_context = Context {
            depth: 0,
            own_line: false,
            preformatted: false,
        };
        let mut stack = vec![Step::Open(root, root_context)];

        while let Some(step) = stack.pop() {
            match step {
                Step::Open(node, context) => {
                    if context.own_line {
                        self.write_newline()?;
                        self.write_indent(context.depth)?;
                    }
                    match node {
                        Node::Text(text) => self.out.write_str(&escape_text(text))?,
                        // Outside raw text elements raw content is trusted markup
                        Node::Raw(raw) => self.out.write_str(raw)?,
                        Node::Comment(comment) => write!(self.out, "<!--{comment}-->")?,
                        Node::Element(element) => self.open_element(element, context, &mut stack)?,
                    }
                }
                Step::Close {
                    element,
                    depth,
                    own_line,
                } => {
                    if own_line {
                        self.write_newline()?;
                        self.write_indent(depth)?;
                    }
                    write!(self.out, "</{}>", element.tag())?;
                }
            }
        }
        Ok(())
    }

    fn open_element(&mut self, element: &'a Element, context: Context, stack: &mut Vec<Step<'a>>) -> fmt::Result {
        let descriptor = element.descriptor();
        tracing::trace!(tag = element.tag(), depth = context.depth, "serializing element");

        write!(self.out, "<{}", element.tag())?;
        self.write_attributes(element)?;

        if descriptor.is_void() {
            return match self.config.void_style {
                VoidStyle::Html => self.out.write_char('>'),
                VoidStyle::Xhtml => self.out.write_str(" />"),
            };
        }
        self.out.write_char('>')?;

        if descriptor.is_raw_text() {
            let body = raw_text_body(element.children());
            self.out.write_str(&guard_raw_text(&body, element.tag()))?;
            return write!(self.out, "</{}>", element.tag());
        }

        let preformatted = context.preformatted || descriptor.is_preformatted();
        let children = element.children();
        let block_layout = self.config.pretty_print
            && !preformatted
            && !children.is_empty()
            && children.iter().all(is_block_like);

        stack.push(Step::Close {
            element,
            depth: context.depth,
            own_line: block_layout,
        });
        let child_context = Context {
            depth: context.depth + 1,
            own_line: block_layout,
            preformatted,
        };
        stack.extend(children.iter().rev().map(|child| Step::Open(child, child_context)));
        Ok(())
    }

    fn write_attributes(&mut self, element: &Element) -> fmt::Result {
        for attribute in element.attributes() {
            match attribute.value.encode() {
                Encoded::Absent => {
                    tracing::debug!(
                        tag = element.tag(),
                        attribute = %attribute.name,
                        "omitting absent attribute"
                    );
                }
                Encoded::Bare => write!(self.out, " {}", attribute.name)?,
                Encoded::Value(value) => {
                    write!(self.out, " {}=\"{}\"", attribute.name, escape_attribute(&value))?;
                }
            }
        }
        Ok(())
    }
}

/// The body of a raw text element, before the closing-sequence guard.
///
/// A closing sequence may be split across adjacent children, so the guard
/// runs once over the joined body rather than per child.
fn raw_text_body(children: &[Node]) -> String {
    let mut body = String::new();
    for child in children {
        match child {
            Node::Text(text) => body.push_str(&escape_text(text)),
            Node::Raw(raw) => body.push_str(raw),
            // Rejected by the tree builder
            Node::Element(_) | Node::Comment(_) => {}
        }
    }
    body
}

/// Children that may be moved onto their own line without changing meaning.
fn is_block_like(node: &Node) -> bool {
    match node {
        Node::Element(element) => element.descriptor().is_block(),
        Node::Comment(_) => true,
        Node::Text(_) | Node::Raw(_) => false,
    }
}
