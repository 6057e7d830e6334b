//! Typed attribute values.
//!
//! [§ 2.3 Common microsyntaxes](https://html.spec.whatwg.org/multipage/common-microsyntaxes.html)
//!
//! Each attribute occurrence carries a kind that decides how it is written:
//! boolean attributes by presence, everything else as a double-quoted value.

use std::borrow::Cow;
use std::fmt;

use crate::descriptor::Deprecation;
use crate::error::{EncodingError, InvalidAttributeValue, decode_utf8};

/// The closed set of attribute value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// [§ 2.3.2 Boolean attributes](https://html.spec.whatwg.org/multipage/common-microsyntaxes.html#boolean-attributes)
    Boolean,
    /// Free-form text.
    String,
    /// [§ 2.3.3 Keywords and enumerated attributes](https://html.spec.whatwg.org/multipage/common-microsyntaxes.html#keywords-and-enumerated-attributes)
    EnumeratedString,
    /// [§ 2.3.4 Numbers](https://html.spec.whatwg.org/multipage/common-microsyntaxes.html#numbers)
    Numeric,
    /// [§ 2.3.7 Space-separated tokens](https://html.spec.whatwg.org/multipage/common-microsyntaxes.html#space-separated-tokens)
    /// and [§ 2.3.8 Comma-separated tokens](https://html.spec.whatwg.org/multipage/common-microsyntaxes.html#comma-separated-tokens)
    List,
}

/// A numeric attribute value.
///
/// Always written with a `.` decimal separator and no grouping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// [§ 2.3.4.1 Signed integers](https://html.spec.whatwg.org/multipage/common-microsyntaxes.html#signed-integers)
    Integer(i64),
    /// [§ 2.3.4.3 Floating-point numbers](https://html.spec.whatwg.org/multipage/common-microsyntaxes.html#floating-point-numbers)
    ///
    /// Only finite values can be constructed, see [`Number::float`].
    Float(f64),
}

impl Number {
    /// Wrap a floating-point value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAttributeValue::NonFiniteNumber`] for NaN and the
    /// infinities, which have no valid floating-point number serialization.
    pub fn float(value: f64) -> Result<Self, InvalidAttributeValue> {
        if value.is_finite() {
            Ok(Self::Float(value))
        } else {
            Err(InvalidAttributeValue::NonFiniteNumber)
        }
    }
}

macro_rules! number_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Number {
                fn from(value: $int) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Integer(value) => write!(f, "{value}"),
            // -0.0 + 0.0 is +0.0, so negative zero prints as "0"
            Self::Float(value) => write!(f, "{}", value + 0.0),
        }
    }
}

/// A keyword type whose every value belongs to a fixed legal set.
///
/// Implemented by the catalog's enumerated value types so that a typed
/// keyword converts into an [`EnumeratedValue`] without a runtime check.
pub trait Keyword: Copy {
    /// Every keyword the attribute accepts, in canonical spelling.
    const KEYWORDS: &'static [&'static str];

    /// The canonical spelling of this keyword.
    fn keyword(self) -> &'static str;
}

/// A string drawn from a fixed set of legal keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumeratedValue {
    keyword: &'static str,
    legal: &'static [&'static str],
}

impl EnumeratedValue {
    /// Validate `value` against `legal`.
    ///
    /// "Keywords are always ASCII case-insensitive", so the match ignores
    /// ASCII case and the stored value is the canonical spelling from
    /// `legal`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAttributeValue::NotInKeywordSet`] if `value` is not
    /// one of `legal`.
    pub fn new(value: &str, legal: &'static [&'static str]) -> Result<Self, InvalidAttributeValue> {
        legal
            .iter()
            .find(|keyword| keyword.eq_ignore_ascii_case(value))
            .map(|&keyword| Self { keyword, legal })
            .ok_or_else(|| InvalidAttributeValue::NotInKeywordSet {
                value: value.to_string(),
                legal,
            })
    }

    /// The canonical keyword.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        self.keyword
    }

    /// The legal keyword set this value was validated against.
    #[must_use]
    pub const fn legal(&self) -> &'static [&'static str] {
        self.legal
    }
}

impl<K: Keyword> From<K> for EnumeratedValue {
    fn from(keyword: K) -> Self {
        Self {
            keyword: keyword.keyword(),
            legal: K::KEYWORDS,
        }
    }
}

/// Separator placed between the items of a list attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListSeparator {
    /// Items joined by a single U+0020 SPACE.
    Space,
    /// Items joined by a single U+002C COMMA.
    Comma,
}

impl ListSeparator {
    /// The separator character as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::Comma => ",",
        }
    }
}

/// An ordered collection of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListValue {
    items: Vec<String>,
    separator: ListSeparator,
}

impl ListValue {
    /// Build a list with an explicit separator, keeping every item in order.
    pub fn new<I, S>(items: I, separator: ListSeparator) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            separator,
        }
    }

    /// [§ 2.3.7 Space-separated tokens](https://html.spec.whatwg.org/multipage/common-microsyntaxes.html#space-separated-tokens)
    pub fn space_separated<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(items, ListSeparator::Space)
    }

    /// [§ 2.3.8 Comma-separated tokens](https://html.spec.whatwg.org/multipage/common-microsyntaxes.html#comma-separated-tokens)
    pub fn comma_separated<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(items, ListSeparator::Comma)
    }

    /// "A set of space-separated tokens is a string containing zero or more
    /// words ... separated by one or more ASCII whitespace, where words
    /// consist of any string of one or more characters, none of which are
    /// ASCII whitespace." Unordered sets must not repeat a token.
    ///
    /// Repeated tokens are dropped, keeping the first occurrence.
    pub fn token_set<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for item in items {
            let item = item.into();
            if !unique.contains(&item) {
                unique.push(item);
            }
        }
        Self {
            items: unique,
            separator: ListSeparator::Space,
        }
    }

    /// The items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// The separator used when joining.
    #[must_use]
    pub const fn separator(&self) -> ListSeparator {
        self.separator
    }

    /// Join the non-blank items, or `None` when there are none.
    #[must_use]
    pub fn joined(&self) -> Option<String> {
        let mut items = self
            .items
            .iter()
            .map(String::as_str)
            .map(str::trim)
            .filter(|item| !item.is_empty());
        let first = items.next()?;
        let mut joined = first.to_string();
        for item in items {
            joined.push_str(self.separator.as_str());
            joined.push_str(item);
        }
        Some(joined)
    }
}

/// One attribute value, tagged with its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Present when `true`, omitted when `false`.
    Boolean(bool),
    /// Arbitrary text.
    String(String),
    /// A validated keyword.
    Enumerated(EnumeratedValue),
    /// A finite number.
    Numeric(Number),
    /// A separator-joined token list.
    List(ListValue),
}

/// The serialized shape of an attribute value, before escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoded<'a> {
    /// The attribute is not written at all.
    Absent,
    /// Only the attribute name is written.
    Bare,
    /// `name="value"`, where `value` still needs attribute escaping.
    Value(Cow<'a, str>),
}

impl AttributeValue {
    /// A boolean-presence value.
    #[must_use]
    pub const fn boolean(present: bool) -> Self {
        Self::Boolean(present)
    }

    /// A free-form string value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// A string value decoded from bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError`] if `bytes` is not valid UTF-8.
    pub fn string_from_utf8(bytes: Vec<u8>) -> Result<Self, EncodingError> {
        decode_utf8(bytes).map(Self::String)
    }

    /// A typed keyword value.
    pub fn keyword<K: Keyword>(keyword: K) -> Self {
        Self::Enumerated(keyword.into())
    }

    /// A numeric value.
    pub fn number(value: impl Into<Number>) -> Self {
        Self::Numeric(value.into())
    }

    /// A space-separated token list.
    pub fn tokens<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(ListValue::space_separated(items))
    }

    /// The kind of this value.
    #[must_use]
    pub const fn kind(&self) -> AttributeKind {
        match self {
            Self::Boolean(_) => AttributeKind::Boolean,
            Self::String(_) => AttributeKind::String,
            Self::Enumerated(_) => AttributeKind::EnumeratedString,
            Self::Numeric(_) => AttributeKind::Numeric,
            Self::List(_) => AttributeKind::List,
        }
    }

    /// Decide how this value is written.
    ///
    /// `false` booleans and lists without a non-blank item are absent;
    /// there is no textual form for either.
    #[must_use]
    pub fn encode(&self) -> Encoded<'_> {
        match self {
            Self::Boolean(true) => Encoded::Bare,
            Self::Boolean(false) => Encoded::Absent,
            Self::String(value) => Encoded::Value(Cow::Borrowed(value)),
            Self::Enumerated(value) => Encoded::Value(Cow::Borrowed(value.keyword())),
            Self::Numeric(value) => Encoded::Value(Cow::Owned(value.to_string())),
            Self::List(list) => list.joined().map_or(Encoded::Absent, |joined| Encoded::Value(Cow::Owned(joined))),
        }
    }

    /// The value as plain text, if it is written with one.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self.encode() {
            Encoded::Value(text) => Some(text),
            Encoded::Absent | Encoded::Bare => None,
        }
    }
}

impl From<EnumeratedValue> for AttributeValue {
    fn from(value: EnumeratedValue) -> Self {
        Self::Enumerated(value)
    }
}

impl From<Number> for AttributeValue {
    fn from(value: Number) -> Self {
        Self::Numeric(value)
    }
}

impl From<ListValue> for AttributeValue {
    fn from(value: ListValue) -> Self {
        Self::List(value)
    }
}

/// [§ 13.1.2.3 Attributes](https://html.spec.whatwg.org/multipage/syntax.html#attributes-2)
///
/// One attribute occurrence on an element.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// "Attributes have a name and a value."
    pub name: Cow<'static, str>,
    /// The typed value.
    pub value: AttributeValue,
    /// Set when the attribute is obsolete on the element that carries it.
    pub deprecation: Option<Deprecation>,
}

impl Attribute {
    /// Create an attribute. The name is validated when the owning element
    /// is built.
    pub fn new(name: impl Into<Cow<'static, str>>, value: AttributeValue) -> Self {
        Self {
            name: name.into(),
            value,
            deprecation: None,
        }
    }

    /// Mark this attribute as deprecated.
    #[must_use]
    pub fn with_deprecation(mut self, deprecation: Deprecation) -> Self {
        self.deprecation = Some(deprecation);
        self
    }

    /// The kind of the attribute's value.
    #[must_use]
    pub const fn kind(&self) -> AttributeKind {
        self.value.kind()
    }

    /// Whether this attribute is written to the output at all.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.value.encode() != Encoded::Absent
    }
}

/// "Attribute names must consist of one or more characters other than
/// controls, U+0020 SPACE, U+0022 ("), U+0027 ('), U+003E (>), U+002F (/),
/// U+003D (=), and noncharacters."
///
/// U+003C (<) is rejected as well since parsers flag it as an error.
#[must_use]
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| {
            !c.is_control()
                && !c.is_ascii_whitespace()
                && !matches!(c, '"' | '\'' | '>' | '/' | '=' | '<')
                && !is_noncharacter(c)
        })
}

/// [Noncharacter](https://infra.spec.whatwg.org/#noncharacter): U+FDD0 to
/// U+FDEF and the last two code points of every plane.
pub(crate) fn is_noncharacter(c: char) -> bool {
    let code = u32::from(c);
    matches!(code, 0xFDD0..=0xFDEF) || (code & 0xFFFE) == 0xFFFE
}

/// Attributes of one element: names are unique, order is insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeList {
    entries: Vec<Attribute>,
}

impl AttributeList {
    /// An empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Position of the attribute called `name`.
    ///
    /// HTML attribute names are ASCII case-insensitive, so `ID` and `id`
    /// are the same attribute.
    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|attr| attr.name.eq_ignore_ascii_case(name))
    }

    /// Assign an attribute, last write wins.
    ///
    /// A reused name keeps its original position; the previous attribute is
    /// returned.
    pub fn set(&mut self, attribute: Attribute) -> Option<Attribute> {
        match self.position(&attribute.name) {
            Some(index) => self
                .entries
                .get_mut(index)
                .map(|slot| std::mem::replace(slot, attribute)),
            None => {
                self.entries.push(attribute);
                None
            }
        }
    }

    /// Assign an attribute and move it to the end of the iteration order.
    pub fn append(&mut self, attribute: Attribute) -> Option<Attribute> {
        let previous = self.remove(&attribute.name);
        self.entries.push(attribute);
        previous
    }

    /// Remove the attribute called `name`.
    pub fn remove(&mut self, name: &str) -> Option<Attribute> {
        self.position(name).map(|index| self.entries.remove(index))
    }

    /// The attribute called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.position(name).and_then(|index| self.entries.get(index))
    }

    /// Whether an attribute called `name` was assigned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Number of assigned attributes, including absent ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no attribute was assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a AttributeList {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Attribute> for AttributeList {
    fn from_iter<T: IntoIterator<Item = Attribute>>(iter: T) -> Self {
        let mut list = Self::new();
        for attribute in iter {
            let _ = list.set(attribute);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noncharacters() {
        assert!(is_noncharacter('\u{FDD0}'));
        assert!(is_noncharacter('\u{FFFF}'));
        assert!(is_noncharacter('\u{1FFFE}'));
        assert!(!is_noncharacter('a'));
        assert!(!is_noncharacter('\u{FFFD}'));
    }

    #[test]
    fn test_list_joined_skips_blank_items() {
        let list = ListValue::space_separated(["a", "  ", "b", ""]);
        assert_eq!(list.joined().as_deref(), Some("a b"));

        let blank = ListValue::comma_separated(["", " "]);
        assert_eq!(blank.joined(), None);
    }
}
