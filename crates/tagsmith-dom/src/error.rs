//! Construction-time errors.
//!
//! Every error here is raised while values are being built, never while a
//! tree is being serialized. A node that failed to build does not exist, so
//! no partial markup can reach the output.

use thiserror::Error;

/// Any failure raised while building attributes or nodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An attribute value was rejected.
    #[error(transparent)]
    InvalidAttributeValue(#[from] InvalidAttributeValue),
    /// The requested tree shape is not legal HTML.
    #[error(transparent)]
    Structural(#[from] StructuralError),
    /// Text input was not valid UTF-8.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// An attribute value outside the legal values for its kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAttributeValue {
    /// An enumerated attribute received a keyword outside its legal set.
    #[error("invalid attribute value {value:?}: expected one of {}", .legal.join(", "))]
    NotInKeywordSet {
        /// The rejected value.
        value: String,
        /// The keywords the attribute accepts.
        legal: &'static [&'static str],
    },
    /// A numeric attribute received NaN or an infinity.
    #[error("numeric attribute values must be finite")]
    NonFiniteNumber,
}

/// A tree shape that cannot be expressed as valid HTML.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#elements-2)
    ///
    /// "Void elements only have a start tag; end tags must not be specified
    /// for void elements."
    #[error("void element <{tag}> cannot have children")]
    VoidElementHasChildren {
        /// Tag name of the void element.
        tag: String,
    },
    /// The same attribute was assigned twice while building in strict mode.
    #[error("duplicate attribute {name:?} on <{tag}>")]
    DuplicateAttributeRejected {
        /// Tag name of the element.
        tag: String,
        /// Name of the repeated attribute.
        name: String,
    },
    /// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#elements-2)
    ///
    /// "Raw text elements can have text, though it has restrictions", so
    /// they never contain elements or comments.
    #[error("raw text element <{tag}> cannot contain {child}")]
    ElementInRawText {
        /// Tag name of the raw text element.
        tag: String,
        /// Description of the rejected child.
        child: String,
    },
    /// [§ 13.1.2.3 Attributes](https://html.spec.whatwg.org/multipage/syntax.html#attributes-2)
    ///
    /// "Attribute names must consist of one or more characters other than
    /// controls, U+0020 SPACE, U+0022 ("), U+0027 ('), U+003E (>),
    /// U+002F (/), U+003D (=), and noncharacters."
    #[error("invalid attribute name {name:?}")]
    InvalidAttributeName {
        /// The rejected name.
        name: String,
    },
    /// A custom element name that is not a valid custom element name.
    #[error("invalid tag name {name:?}")]
    InvalidTagName {
        /// The rejected name.
        name: String,
    },
    /// [§ 13.1.6 Comments](https://html.spec.whatwg.org/multipage/syntax.html#comments)
    #[error("invalid comment text: {reason}")]
    InvalidComment {
        /// Which comment rule was violated.
        reason: &'static str,
    },
}

/// Malformed text input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The bytes were not valid UTF-8.
    #[error("invalid UTF-8 after {valid_up_to} bytes")]
    InvalidUtf8 {
        /// Length of the longest valid prefix.
        valid_up_to: usize,
    },
}

impl From<std::str::Utf8Error> for EncodingError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        }
    }
}

impl From<std::string::FromUtf8Error> for EncodingError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        err.utf8_error().into()
    }
}

/// Decode `bytes` into an owned string, rejecting malformed UTF-8.
///
/// # Errors
///
/// Returns [`EncodingError::InvalidUtf8`] if `bytes` is not valid UTF-8.
pub fn decode_utf8(bytes: Vec<u8>) -> Result<String, EncodingError> {
    Ok(String::from_utf8(bytes)?)
}
