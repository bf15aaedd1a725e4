//! Decoding of raw word tokens.

use std::borrow::Cow;

/// Decode the raw text of a word token.
///
/// A surrounding quote pair is stripped, and each backslash is dropped
/// with the character after it kept literally. Borrows from the input
/// when no rewriting is needed.
pub fn word_value(raw: &str) -> Cow<'_, str> {
    let bytes = raw.as_bytes();
    let interior = match bytes.first() {
        Some(q @ (b'"' | b'\'')) if bytes.len() >= 2 && bytes.last() == Some(q) => {
            &raw[1..raw.len() - 1]
        }
        _ => raw,
    };

    if !interior.contains('\\') {
        return Cow::Borrowed(interior);
    }

    let mut out = String::with_capacity(interior.len());
    let mut chars = interior.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}
