//! JSON documents resolved through the element catalog.
//!
//! A document is one node or an array of sibling nodes:
//!
//! ```json
//! { "element": "p", "attributes": [["class", ["intro"]]], "children": ["Hello"] }
//! ```
//!
//! A string is a text node, `{ "raw": .. }` is trusted markup and
//! `{ "comment": .. }` a comment. Attribute values are read according to
//! the catalog's shape for that attribute.

use serde::Deserialize;
use serde_json::Value;
use tagsmith_dom::{
    Attribute, AttributeValue, BuildMode, ElementBuilder, ElementDescriptor, EnumeratedValue, Error,
    ListSeparator, ListValue, Node, Number,
};
use tagsmith_html::{AttributeShape, AttributeSpec, Tag, UnknownElement};
use thiserror::Error;

/// Failure while loading a JSON document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input is not a well-formed document.
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),
    /// The tag is neither a catalog element nor a valid custom element name.
    #[error(transparent)]
    UnknownElement(#[from] UnknownElement),
    /// The element does not accept the attribute.
    #[error("<{tag}> does not accept attribute {name:?}")]
    UnknownAttribute {
        /// Tag name of the element.
        tag: String,
        /// The rejected attribute name.
        name: String,
    },
    /// The JSON value does not fit the attribute.
    #[error("attribute {tag}[{name}] expects {expected}")]
    UnsupportedValue {
        /// Tag name of the element.
        tag: String,
        /// The attribute name.
        name: String,
        /// What the attribute accepts.
        expected: &'static str,
    },
    /// The tree was rejected by the builder.
    #[error(transparent)]
    Build(#[from] Error),
}

/// One node of a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NodeSpec {
    /// Character data.
    Text(String),
    /// Trusted markup.
    Raw {
        /// The markup.
        raw: String,
    },
    /// A comment.
    Comment {
        /// The comment text.
        comment: String,
    },
    /// An element.
    Element(ElementSpec),
}

/// An element of a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementSpec {
    /// Tag name, from the catalog or a custom element name.
    pub element: String,
    /// `[name, value]` pairs in order.
    #[serde(default)]
    pub attributes: Vec<(String, Value)>,
    /// Child nodes in order.
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

/// A whole document: one root or several sibling roots.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DocumentSpec {
    /// Sibling roots, rendered in order.
    Fragment(Vec<NodeSpec>),
    /// A single root.
    Node(NodeSpec),
}

impl DocumentSpec {
    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] if `json` is not a document.
    pub fn parse(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve every root into a node.
    ///
    /// # Errors
    ///
    /// Returns the first error in document order.
    pub fn into_nodes(self, mode: BuildMode) -> Result<Vec<Node>, LoadError> {
        match self {
            Self::Fragment(roots) => roots.into_iter().map(|root| root.into_node(mode)).collect(),
            Self::Node(root) => Ok(vec![root.into_node(mode)?]),
        }
    }
}

impl NodeSpec {
    /// Resolve the node and its subtree.
    ///
    /// # Errors
    ///
    /// - [`LoadError::UnknownElement`] for tags outside the catalog that
    ///   are not valid custom element names.
    /// - [`LoadError::UnknownAttribute`] for attributes a catalog element
    ///   does not accept.
    /// - [`LoadError::UnsupportedValue`] for values that do not fit the
    ///   attribute.
    /// - [`LoadError::Build`] for trees the builder rejects.
    pub fn into_node(self, mode: BuildMode) -> Result<Node, LoadError> {
        match self {
            Self::Text(text) => Ok(Node::Text(text)),
            Self::Raw { raw } => Ok(Node::Raw(raw)),
            Self::Comment { comment } => Ok(Node::comment(comment).map_err(Error::from)?),
            Self::Element(element) => element.into_node(mode),
        }
    }
}

impl ElementSpec {
    /// Resolve the element and its subtree.
    ///
    /// # Errors
    ///
    /// See [`NodeSpec::into_node`].
    pub fn into_node(self, mode: BuildMode) -> Result<Node, LoadError> {
        let tag = self.element.parse::<Tag>().ok();
        let descriptor = match tag {
            Some(tag) => tag.descriptor(),
            None => ElementDescriptor::custom(self.element.as_str())
                .map_err(|_| UnknownElement { name: self.element.clone() })?,
        };

        let mut builder = ElementBuilder::new(descriptor);
        if mode == BuildMode::Strict {
            builder = builder.strict();
        }
        for (name, value) in self.attributes {
            let attribute = match tag {
                Some(tag) => {
                    let spec = tag.attribute(&name).ok_or_else(|| LoadError::UnknownAttribute {
                        tag: self.element.clone(),
                        name: name.clone(),
                    })?;
                    catalog_attribute(&self.element, name, &value, spec)?
                }
                None => {
                    let value = inferred_value(&self.element, &name, &value)?;
                    Attribute::new(name, value)
                }
            };
            builder = builder.attribute(attribute);
        }
        for child in self.children {
            builder = builder.child(child.into_node(mode)?);
        }
        Ok(builder.build()?)
    }
}

fn unsupported(tag: &str, name: &str, expected: &'static str) -> LoadError {
    LoadError::UnsupportedValue {
        tag: tag.to_string(),
        name: name.to_string(),
        expected,
    }
}

/// Read a value according to the catalog shape of the attribute.
fn catalog_attribute(tag: &str, name: String, value: &Value, spec: AttributeSpec) -> Result<Attribute, LoadError> {
    let value = match (spec.shape, value) {
        (AttributeShape::Flag, Value::Bool(present)) => AttributeValue::boolean(*present),
        (AttributeShape::Flag, _) => return Err(unsupported(tag, &name, "a boolean")),
        (AttributeShape::Number, Value::Number(number)) => number_value(tag, &name, number)?,
        (AttributeShape::Number, _) => return Err(unsupported(tag, &name, "a number")),
        (AttributeShape::Keyword(legal), Value::String(keyword)) => {
            EnumeratedValue::new(keyword, legal).map_err(Error::from)?.into()
        }
        (AttributeShape::Keyword(_), _) => return Err(unsupported(tag, &name, "a keyword string")),
        (AttributeShape::List(separator), Value::Array(items)) => list_value(tag, &name, items, separator)?,
        (AttributeShape::List(_) | AttributeShape::Text, Value::String(text)) => AttributeValue::string(text.as_str()),
        (AttributeShape::List(_), _) => return Err(unsupported(tag, &name, "a string or an array of strings")),
        (AttributeShape::Text, Value::Number(number)) => number_value(tag, &name, number)?,
        (AttributeShape::Text, _) => return Err(unsupported(tag, &name, "a string")),
    };
    // Catalog names are canonical; the open data-* and aria-* families keep theirs
    let attribute = if spec.name.ends_with('*') {
        Attribute::new(name, value)
    } else {
        Attribute::new(spec.name, value)
    };
    Ok(match spec.deprecation {
        Some(deprecation) => attribute.with_deprecation(deprecation),
        None => attribute,
    })
}

/// Read a value of a custom element attribute from its JSON type alone.
fn inferred_value(tag: &str, name: &str, value: &Value) -> Result<AttributeValue, LoadError> {
    match value {
        Value::Bool(present) => Ok(AttributeValue::boolean(*present)),
        Value::Number(number) => number_value(tag, name, number),
        Value::String(text) => Ok(AttributeValue::string(text.as_str())),
        Value::Array(items) => list_value(tag, name, items, ListSeparator::Space),
        Value::Null | Value::Object(_) => Err(unsupported(tag, name, "a boolean, number, string or array")),
    }
}

fn number_value(tag: &str, name: &str, number: &serde_json::Number) -> Result<AttributeValue, LoadError> {
    if let Some(integer) = number.as_i64() {
        return Ok(AttributeValue::number(integer));
    }
    let float = number.as_f64().ok_or_else(|| unsupported(tag, name, "a finite number"))?;
    Ok(Number::float(float).map_err(Error::from)?.into())
}

fn list_value(tag: &str, name: &str, items: &[Value], separator: ListSeparator) -> Result<AttributeValue, LoadError> {
    let items = items
        .iter()
        .map(|item| item.as_str().ok_or_else(|| unsupported(tag, name, "an array of strings")))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ListValue::new(items, separator).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_node_shapes() {
        let spec: NodeSpec = serde_json::from_str(r#"{ "raw": "<b>" }"#).unwrap();
        assert_eq!(spec, NodeSpec::Raw { raw: "<b>".to_string() });

        let spec: NodeSpec = serde_json::from_str(r#"{ "element": "br" }"#).unwrap();
        assert_eq!(
            spec,
            NodeSpec::Element(ElementSpec {
                element: "br".to_string(),
                attributes: Vec::new(),
                children: Vec::new(),
            })
        );
    }

    #[test]
    fn test_integer_and_float_numbers() {
        let value = number_value("td", "colspan", &serde_json::Number::from(2)).unwrap();
        assert_eq!(value.as_text().as_deref(), Some("2"));

        let float = serde_json::Number::from_f64(0.5).unwrap();
        let value = number_value("meter", "value", &float).unwrap();
        assert_eq!(value.as_text().as_deref(), Some("0.5"));
    }
}
