//! Attribute descriptors and the global attribute set.
//!
//! [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes)

use std::borrow::Cow;

use tagsmith_dom::{
    Attribute, AttributeKind, AttributeValue, Deprecation, Keyword, ListSeparator, ListValue,
};

use crate::values::{
    Autocapitalize, ContentEditable, Dir, Draggable, EnterKeyHint, InputMode, Popover, Translate,
};

/// The value syntax an attribute accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeShape {
    /// Boolean presence.
    Flag,
    /// Free-form text.
    Text,
    /// An integer or finite float.
    Number,
    /// Tokens joined by the separator.
    List(ListSeparator),
    /// One of the listed keywords.
    Keyword(&'static [&'static str]),
}

impl AttributeShape {
    /// The attribute kind values of this shape are built with.
    #[must_use]
    pub const fn kind(self) -> AttributeKind {
        match self {
            Self::Flag => AttributeKind::Boolean,
            Self::Text => AttributeKind::String,
            Self::Number => AttributeKind::Numeric,
            Self::List(_) => AttributeKind::List,
            Self::Keyword(_) => AttributeKind::EnumeratedString,
        }
    }
}

/// Static facts about one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    /// The attribute name, or `data-*` / `aria-*` for the open families.
    pub name: &'static str,
    /// Accepted value syntax.
    pub shape: AttributeShape,
    /// Set when the attribute is obsolete.
    pub deprecation: Option<Deprecation>,
}

impl AttributeSpec {
    /// A current (non-obsolete) attribute.
    #[must_use]
    pub const fn new(name: &'static str, shape: AttributeShape) -> Self {
        Self {
            name,
            shape,
            deprecation: None,
        }
    }
}

const fn global(name: &'static str, shape: AttributeShape) -> AttributeSpec {
    AttributeSpec::new(name, shape)
}

const fn keywords<K: Keyword>() -> AttributeShape {
    AttributeShape::Keyword(K::KEYWORDS)
}

/// "The following attributes are common to and may be specified on all
/// HTML elements."
pub const GLOBAL_ATTRIBUTES: &[AttributeSpec] = &[
    global("accesskey", AttributeShape::List(ListSeparator::Space)),
    global("autocapitalize", keywords::<Autocapitalize>()),
    global("autofocus", AttributeShape::Flag),
    global("class", AttributeShape::List(ListSeparator::Space)),
    global("contenteditable", keywords::<ContentEditable>()),
    global("dir", keywords::<Dir>()),
    global("draggable", keywords::<Draggable>()),
    global("enterkeyhint", keywords::<EnterKeyHint>()),
    global("hidden", AttributeShape::Flag),
    global("id", AttributeShape::Text),
    global("inert", AttributeShape::Flag),
    global("inputmode", keywords::<InputMode>()),
    global("lang", AttributeShape::Text),
    global("nonce", AttributeShape::Text),
    global("popover", keywords::<Popover>()),
    global("role", AttributeShape::List(ListSeparator::Space)),
    global("slot", AttributeShape::Text),
    global("spellcheck", AttributeShape::Keyword(&["true", "false"])),
    global("style", AttributeShape::Text),
    global("tabindex", AttributeShape::Number),
    global("title", AttributeShape::Text),
    global("translate", keywords::<Translate>()),
];

const DATA_ATTRIBUTES: AttributeSpec = AttributeSpec::new("data-*", AttributeShape::Text);
const ARIA_ATTRIBUTES: AttributeSpec = AttributeSpec::new("aria-*", AttributeShape::Text);

/// Look up a global attribute, including the `data-*` and `aria-*`
/// families. Names match ASCII case-insensitively.
#[must_use]
pub fn global_attribute(name: &str) -> Option<AttributeSpec> {
    if let Some(spec) = GLOBAL_ATTRIBUTES
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(name))
    {
        return Some(*spec);
    }
    let lower = name.to_ascii_lowercase();
    if lower.len() > "data-".len() && lower.starts_with("data-") {
        return Some(DATA_ATTRIBUTES);
    }
    if lower.len() > "aria-".len() && lower.starts_with("aria-") {
        return Some(ARIA_ATTRIBUTES);
    }
    None
}

/// Build an attribute carrying the catalog's deprecation record.
pub(crate) fn catalog_attribute(
    name: &'static str,
    value: AttributeValue,
    deprecation: Option<Deprecation>,
) -> Attribute {
    let attribute = Attribute::new(name, value);
    match deprecation {
        Some(deprecation) => attribute.with_deprecation(deprecation),
        None => attribute,
    }
}

/// Setters for the attributes every element accepts.
///
/// Implemented by every element builder. Only
/// [`with_attribute`](Self::with_attribute) is required.
pub trait GlobalAttributes: Sized {
    /// Add an attribute, replacing any earlier one of the same name.
    #[must_use]
    fn with_attribute(self, attribute: Attribute) -> Self;

    /// "The id attribute specifies its element's unique identifier (ID)."
    #[must_use]
    fn id(self, id: impl Into<String>) -> Self {
        self.with_attribute(Attribute::new("id", AttributeValue::string(id)))
    }

    /// Class names, as an unordered set of unique tokens.
    #[must_use]
    fn class<I, S>(self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_attribute(Attribute::new("class", ListValue::token_set(classes).into()))
    }

    /// Inline CSS declarations.
    #[must_use]
    fn style(self, declarations: impl Into<String>) -> Self {
        self.with_attribute(Attribute::new("style", AttributeValue::string(declarations)))
    }

    /// Advisory information, typically shown as a tooltip.
    #[must_use]
    fn title(self, title: impl Into<String>) -> Self {
        self.with_attribute(Attribute::new("title", AttributeValue::string(title)))
    }

    /// The primary language of the element's contents, a BCP 47 tag.
    #[must_use]
    fn lang(self, language: impl Into<String>) -> Self {
        self.with_attribute(Attribute::new("lang", AttributeValue::string(language)))
    }

    /// Text directionality.
    #[must_use]
    fn dir(self, dir: Dir) -> Self {
        self.with_attribute(Attribute::new("dir", dir.into()))
    }

    /// "All HTML elements may have the hidden content attribute set."
    #[must_use]
    fn hidden(self, hidden: bool) -> Self {
        self.with_attribute(Attribute::new("hidden", AttributeValue::boolean(hidden)))
    }

    /// Focus order; negative values make the element focusable but
    /// unreachable by sequential navigation.
    #[must_use]
    fn tabindex(self, index: i32) -> Self {
        self.with_attribute(Attribute::new("tabindex", AttributeValue::number(index)))
    }

    /// A custom data attribute, written as `data-{name}`.
    #[must_use]
    fn data(self, name: &str, value: impl Into<String>) -> Self {
        self.with_attribute(Attribute::new(
            Cow::Owned(format!("data-{name}")),
            AttributeValue::string(value),
        ))
    }

    /// An ARIA state or property, written as `aria-{name}`.
    #[must_use]
    fn aria(self, name: &str, value: impl Into<String>) -> Self {
        self.with_attribute(Attribute::new(
            Cow::Owned(format!("aria-{name}")),
            AttributeValue::string(value),
        ))
    }

    /// ARIA roles, in order of preference.
    #[must_use]
    fn role<I, S>(self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_attribute(Attribute::new("role", AttributeValue::tokens(roles)))
    }

    /// Keyboard shortcut keys, in order of preference.
    #[must_use]
    fn accesskey<I, S>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_attribute(Attribute::new("accesskey", AttributeValue::tokens(keys)))
    }

    /// Capitalization of text entered by the user.
    #[must_use]
    fn autocapitalize(self, mode: Autocapitalize) -> Self {
        self.with_attribute(Attribute::new("autocapitalize", mode.into()))
    }

    /// Focus the element when the page loads.
    #[must_use]
    fn autofocus(self, autofocus: bool) -> Self {
        self.with_attribute(Attribute::new("autofocus", AttributeValue::boolean(autofocus)))
    }

    /// Whether the element is editable.
    #[must_use]
    fn contenteditable(self, state: ContentEditable) -> Self {
        self.with_attribute(Attribute::new("contenteditable", state.into()))
    }

    /// Whether the element can be dragged.
    #[must_use]
    fn draggable(self, state: Draggable) -> Self {
        self.with_attribute(Attribute::new("draggable", state.into()))
    }

    /// Label for the enter key of virtual keyboards.
    #[must_use]
    fn enterkeyhint(self, hint: EnterKeyHint) -> Self {
        self.with_attribute(Attribute::new("enterkeyhint", hint.into()))
    }

    /// Make the element and its subtree inert.
    #[must_use]
    fn inert(self, inert: bool) -> Self {
        self.with_attribute(Attribute::new("inert", AttributeValue::boolean(inert)))
    }

    /// Kind of virtual keyboard to show.
    #[must_use]
    fn inputmode(self, mode: InputMode) -> Self {
        self.with_attribute(Attribute::new("inputmode", mode.into()))
    }

    /// Cryptographic nonce for Content Security Policy checks.
    #[must_use]
    fn nonce(self, nonce: impl Into<String>) -> Self {
        self.with_attribute(Attribute::new("nonce", AttributeValue::string(nonce)))
    }

    /// Turn the element into a popover.
    #[must_use]
    fn popover(self, state: Popover) -> Self {
        self.with_attribute(Attribute::new("popover", state.into()))
    }

    /// Shadow tree slot name.
    #[must_use]
    fn slot(self, name: impl Into<String>) -> Self {
        self.with_attribute(Attribute::new("slot", AttributeValue::string(name)))
    }

    /// Written as the `true` or `false` keyword, not as a boolean
    /// attribute.
    #[must_use]
    fn spellcheck(self, enabled: bool) -> Self {
        let keyword = if enabled { "true" } else { "false" };
        self.with_attribute(Attribute::new("spellcheck", AttributeValue::string(keyword)))
    }

    /// Whether the contents should be translated.
    #[must_use]
    fn translate(self, state: Translate) -> Self {
        self.with_attribute(Attribute::new("translate", state.into()))
    }

    /// Any attribute by name; the name is validated when the element is
    /// built.
    #[must_use]
    fn attr(self, name: impl Into<Cow<'static, str>>, value: impl Into<AttributeValue>) -> Self {
        self.with_attribute(Attribute::new(name, value.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_attribute_lookup() {
        assert_eq!(global_attribute("ID").map(|spec| spec.name), Some("id"));
        assert_eq!(global_attribute("data-user-id"), Some(DATA_ATTRIBUTES));
        assert_eq!(global_attribute("aria-label"), Some(ARIA_ATTRIBUTES));
        assert_eq!(global_attribute("data-"), None);
        assert_eq!(global_attribute("href"), None);
    }

    #[test]
    fn test_shapes_map_to_kinds() {
        assert_eq!(AttributeShape::Flag.kind(), AttributeKind::Boolean);
        assert_eq!(keywords::<Dir>().kind(), AttributeKind::EnumeratedString);
        assert_eq!(
            AttributeShape::List(ListSeparator::Comma).kind(),
            AttributeKind::List
        );
    }
}
