//! Space tokenizer and word validity check.
//!
//! Text is split on the space character only. Other whitespace is not a
//! separator: a tab or newline stays inside its token and fails the
//! validity check, so malformed input is reported instead of silently
//! re-tokenized.

/// Split text on spaces, discarding empty tokens.
pub fn split_into_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|word| !word.is_empty())
}

/// A word is valid when it contains no character below U+0020.
pub fn is_valid_word(word: &str) -> bool {
    !word.chars().any(|c| (c as u32) < 0x20)
}
