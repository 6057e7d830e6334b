//! [§ 13.3 Serializing HTML fragments](https://html.spec.whatwg.org/multipage/parsing.html#serialising-html-fragments)
//!
//! Escaping tables for character data and attribute values, and the guard
//! that keeps raw text from closing its element early.
//!
//! Each function returns the input unchanged (borrowed) when nothing needs
//! replacing.

use std::borrow::Cow;

/// Replace every byte matched by `table` with its entity.
fn escape_with(input: &str, table: fn(u8) -> Option<&'static str>) -> Cow<'_, str> {
    let Some(first) = input.bytes().position(|b| table(b).is_some()) else {
        return Cow::Borrowed(input);
    };

    let mut escaped = String::with_capacity(input.len() + 8);
    escaped.push_str(&input[..first]);
    let mut last = first;
    for (index, byte) in input.bytes().enumerate().skip(first) {
        if let Some(entity) = table(byte) {
            // Matched bytes are ASCII, so `index` is a char boundary
            escaped.push_str(&input[last..index]);
            escaped.push_str(entity);
            last = index + 1;
        }
    }
    escaped.push_str(&input[last..]);
    Cow::Owned(escaped)
}

const fn text_entity(byte: u8) -> Option<&'static str> {
    match byte {
        b'&' => Some("&amp;"),
        b'<' => Some("&lt;"),
        b'>' => Some("&gt;"),
        _ => None,
    }
}

const fn attribute_entity(byte: u8) -> Option<&'static str> {
    match byte {
        b'&' => Some("&amp;"),
        b'"' => Some("&quot;"),
        _ => None,
    }
}

/// "Escaping a string ... in text mode": replace `&`, `<` and `>`.
///
/// Quotes are left alone and nothing is converted to numeric references.
#[must_use]
pub fn escape_text(text: &str) -> Cow<'_, str> {
    escape_with(text, text_entity)
}

/// "Escaping a string ... in attribute mode": replace `&` and `"`.
///
/// Values are always double-quoted, so `'` needs no escaping, and newlines
/// are legal inside quoted values.
#[must_use]
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    escape_with(value, attribute_entity)
}

/// Break every ASCII case-insensitive `</tag` in `content` by rewriting it
/// as `<\/tag`, so the body of a raw text element cannot end the element.
///
/// `<\/` reads as `</` inside JavaScript strings and regular expressions
/// and as `/` in CSS escapes.
///
/// `content` must be the whole element body: guarding pieces separately
/// misses a closing sequence that straddles two of them.
#[must_use]
pub fn guard_raw_text<'a>(content: &'a str, tag: &str) -> Cow<'a, str> {
    let bytes = content.as_bytes();
    let tag = tag.as_bytes();
    let closes_at = |index: usize| {
        bytes.get(index..index + 2) == Some(b"</".as_slice())
            && bytes
                .get(index + 2..index + 2 + tag.len())
                .is_some_and(|name| name.eq_ignore_ascii_case(tag))
    };

    let mut guarded: Option<String> = None;
    let mut last = 0;
    let mut search = 0;
    while let Some(offset) = content[search..].find("</") {
        let index = search + offset;
        if closes_at(index) {
            let out = guarded.get_or_insert_with(|| String::with_capacity(content.len() + 8));
            // Keep the "<", insert the escape before "/"
            out.push_str(&content[last..=index]);
            out.push('\\');
            last = index + 1;
        }
        search = index + 2;
    }

    match guarded {
        Some(mut out) => {
            out.push_str(&content[last..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_with_borrows_clean_input() {
        assert!(matches!(escape_text("plain words"), Cow::Borrowed(_)));
        assert!(matches!(escape_attribute("a < b"), Cow::Borrowed(_)));
        assert!(matches!(guard_raw_text("a < b / c", "script"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_handles_multibyte_neighbours() {
        assert_eq!(escape_text("é<ü>&ß"), "é&lt;ü&gt;&amp;ß");
        assert_eq!(escape_attribute("“\"”&"), "“&quot;”&amp;");
    }
}
