//! Static facts about element kinds.
//!
//! [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#elements-2)
//!
//! "There are six different kinds of elements: void elements, the template
//! element, raw text elements, escapable raw text elements, foreign
//! elements, and normal elements." The descriptor records the distinctions
//! that change how an element is built and written.

use std::borrow::Cow;

use crate::attribute::is_noncharacter;
use crate::error::StructuralError;

/// Marks an element or attribute as obsolete.
///
/// [§ 16 Obsolete features](https://html.spec.whatwg.org/multipage/obsolete.html)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deprecation {
    /// What authors should use instead.
    pub replacement: &'static str,
}

impl Deprecation {
    /// A deprecation pointing at `replacement`.
    #[must_use]
    pub const fn new(replacement: &'static str) -> Self {
        Self { replacement }
    }
}

/// Static facts about one element kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementDescriptor {
    tag: Cow<'static, str>,
    is_void: bool,
    is_raw_text: bool,
    is_block: bool,
    is_preformatted: bool,
    deprecation: Option<Deprecation>,
}

impl ElementDescriptor {
    /// A normal, inline element called `tag`.
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag: Cow::Borrowed(tag),
            is_void: false,
            is_raw_text: false,
            is_block: false,
            is_preformatted: false,
            deprecation: None,
        }
    }

    /// "Void elements: area, base, br, col, embed, hr, img, input, link,
    /// meta, source, track, wbr"
    #[must_use]
    pub const fn void(mut self) -> Self {
        self.is_void = true;
        self
    }

    /// "Raw text elements: script, style"
    #[must_use]
    pub const fn raw_text(mut self) -> Self {
        self.is_raw_text = true;
        self
    }

    /// Block-level for layout purposes; only consulted by pretty printing.
    #[must_use]
    pub const fn block(mut self) -> Self {
        self.is_block = true;
        self
    }

    /// Whitespace inside the element is significant (`pre`, `textarea`).
    #[must_use]
    pub const fn preformatted(mut self) -> Self {
        self.is_preformatted = true;
        self
    }

    /// Mark the element obsolete, suggesting `replacement`.
    #[must_use]
    pub const fn deprecated(mut self, replacement: &'static str) -> Self {
        self.deprecation = Some(Deprecation::new(replacement));
        self
    }

    /// [§ 4.13.2 Requirements for custom element constructors](https://html.spec.whatwg.org/multipage/custom-elements.html#valid-custom-element-name)
    ///
    /// An autonomous custom element. The name must be a valid custom
    /// element name: it starts with an ASCII lower alpha, contains a
    /// hyphen, has no ASCII upper alphas, and is not one of the reserved
    /// SVG/MathML names.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralError::InvalidTagName`] for any other name.
    pub fn custom(tag: impl Into<String>) -> Result<Self, StructuralError> {
        let tag = tag.into();
        if !is_valid_custom_element_name(&tag) {
            return Err(StructuralError::InvalidTagName { name: tag });
        }
        Ok(Self {
            tag: Cow::Owned(tag),
            is_void: false,
            is_raw_text: false,
            is_block: false,
            is_preformatted: false,
            deprecation: None,
        })
    }

    /// The tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether the element can never have children or an end tag.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        self.is_void
    }

    /// Whether children are written verbatim rather than escaped.
    #[must_use]
    pub const fn is_raw_text(&self) -> bool {
        self.is_raw_text
    }

    /// Whether the element is block-level.
    #[must_use]
    pub const fn is_block(&self) -> bool {
        self.is_block
    }

    /// Whether whitespace inside the element is significant.
    #[must_use]
    pub const fn is_preformatted(&self) -> bool {
        self.is_preformatted
    }

    /// The deprecation record, if the element is obsolete.
    #[must_use]
    pub const fn deprecation(&self) -> Option<Deprecation> {
        self.deprecation
    }
}

const RESERVED_CUSTOM_NAMES: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// "PotentialCustomElementName ::= [a-z] (PCENChar)* '-' (PCENChar)*"
fn is_valid_custom_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_lower = chars.next().is_some_and(|c| c.is_ascii_lowercase());
    starts_lower
        && name.contains('-')
        && name.chars().all(is_pcen_char)
        && !RESERVED_CUSTOM_NAMES.contains(&name)
}

/// "PCENChar ::= "-" | "." | [0-9] | "_" | [a-z] | #xB7 | [#xC0-#xD6] | ..."
///
/// Approximated as every non-ASCII scalar that is not a noncharacter,
/// plus the ASCII ranges listed.
fn is_pcen_char(c: char) -> bool {
    matches!(c, '-' | '.' | '_' | '0'..='9' | 'a'..='z') || (!c.is_ascii() && !is_noncharacter(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_element_names() {
        assert!(is_valid_custom_element_name("my-widget"));
        assert!(is_valid_custom_element_name("x-\u{00e9}l\u{00e8}ve"));
        assert!(!is_valid_custom_element_name("widget"));
        assert!(!is_valid_custom_element_name("My-widget"));
        assert!(!is_valid_custom_element_name("my-Widget"));
        assert!(!is_valid_custom_element_name("1-widget"));
        assert!(!is_valid_custom_element_name("my widget-x"));
        assert!(!is_valid_custom_element_name("font-face"));
    }
}
