//! Whitespace tokenizer shared by every matching strategy.
//!
//! Tokens are maximal runs of non-separator bytes. Separators are the six
//! ASCII whitespace bytes (space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`); any
//! other byte, including non-ASCII whitespace, belongs to a token.
//! Punctuation is never stripped, so `"spam."` is one token.

/// Check whether a byte separates tokens.
#[inline]
pub fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

/// Fold ASCII letters to lowercase. Non-ASCII bytes pass through unchanged.
pub fn fold_case(text: &str) -> String {
    text.to_ascii_lowercase()
}

/// Split text into tokens, in input order, discarding empty ones.
///
/// Separators are ASCII, so every split point is a char boundary.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_ascii() && is_separator(c as u8))
        .filter(|t| !t.is_empty())
}

/// Check whether `text` contains any separator byte.
pub(crate) fn has_separator(text: &str) -> bool {
    text.bytes().any(is_separator)
}
