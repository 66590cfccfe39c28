//! Stop-word set validated at construction time.

use ahash::AHashSet;

use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::error::{JavelinError, Result};

/// An immutable set of stop words.
///
/// Every member is checked for validity once, at construction; an invalid
/// member fails construction so no partially-initialized set escapes.
/// Empty strings are discarded rather than rejected.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: AHashSet<String>,
}

impl StopWordSet {
    /// Build a stop-word set from a collection of words.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = AHashSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if !is_valid_word(word) {
                return Err(JavelinError::invalid_word(word));
            }
            set.insert(word.to_string());
        }
        Ok(StopWordSet { words: set })
    }

    /// Build a stop-word set from space-separated text.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::new(split_into_words(text))
    }

    /// Check whether a word is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stop words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
