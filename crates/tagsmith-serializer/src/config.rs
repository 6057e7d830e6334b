//! Serializer configuration.

use serde::{Deserialize, Serialize};

/// How void elements close their start tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoidStyle {
    /// `<br>`
    #[default]
    Html,
    /// `<br />`, readable by XML tooling.
    Xhtml,
}

/// Options recognized by the serializer.
///
/// Deserializable so it can be loaded from a configuration file; missing
/// fields take their default values and unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SerializerConfig {
    /// Void element closing style.
    pub void_style: VoidStyle,
    /// Place block-level children on their own indented lines.
    pub pretty_print: bool,
    /// One level of indentation when pretty printing.
    pub indent_unit: String,
    /// Prepend `<!DOCTYPE html>`.
    pub emit_doctype: bool,
    /// Refuse trees whose elements nest deeper than this.
    pub max_depth: Option<usize>,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            void_style: VoidStyle::Html,
            pretty_print: false,
            indent_unit: "  ".to_string(),
            emit_doctype: false,
            max_depth: None,
        }
    }
}

impl SerializerConfig {
    /// Create new default options (compact output).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable pretty-printing with the current indentation.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty_print = true;
        self
    }

    /// Set a custom indentation string (implies pretty-printing).
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent_unit = indent.into();
        self.pretty_print = true;
        self
    }

    /// Close void elements XHTML-style.
    #[must_use]
    pub fn xhtml(mut self) -> Self {
        self.void_style = VoidStyle::Xhtml;
        self
    }

    /// Prepend the HTML5 doctype.
    #[must_use]
    pub fn with_doctype(mut self) -> Self {
        self.emit_doctype = true;
        self
    }

    /// Limit element nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }
}
