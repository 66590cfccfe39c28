//! Raw query text -> structured query.
//!
//! A token with a leading `-` is a minus word: documents containing it are
//! excluded from results. Stop words are dropped entirely, minus marker or
//! not. The parser keeps tokens as borrowed slices of the raw query and
//! leaves deduplication to the ranking paths, which pick their own
//! strategy.

use crate::analysis::StopWordSet;
use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::error::{JavelinError, Result};

/// A parsed query: required plus words and excluding minus words.
///
/// Both lists may contain duplicates until [`Query::deduplicate`] is
/// called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query<'a> {
    /// Words a matching document should contain.
    pub plus_words: Vec<&'a str>,
    /// Words that unconditionally exclude a document.
    pub minus_words: Vec<&'a str>,
}

impl<'a> Query<'a> {
    /// Sort and deduplicate both word lists.
    pub fn deduplicate(&mut self) {
        self.plus_words.sort_unstable();
        self.plus_words.dedup();
        self.minus_words.sort_unstable();
        self.minus_words.dedup();
    }

    /// Whether the query has no plus words at all.
    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}

struct QueryWord<'a> {
    text: &'a str,
    is_minus: bool,
    is_stop: bool,
}

fn parse_query_word<'a>(token: &'a str, stop_words: &StopWordSet) -> Result<QueryWord<'a>> {
    let (word, is_minus) = match token.strip_prefix('-') {
        Some(stripped) => (stripped, true),
        None => (token, false),
    };

    if is_minus && (word.is_empty() || word.starts_with('-')) {
        return Err(JavelinError::invalid_query(format!(
            "malformed minus word {token:?}"
        )));
    }
    if !is_valid_word(word) {
        return Err(JavelinError::invalid_word(word));
    }

    Ok(QueryWord {
        text: word,
        is_minus,
        is_stop: stop_words.contains(word),
    })
}

/// Parse raw query text into plus and minus word lists.
///
/// Fails with [`JavelinError::InvalidQuery`] on a bare or doubled minus
/// marker and with [`JavelinError::InvalidWord`] on a control character.
pub fn parse_query<'a>(text: &'a str, stop_words: &StopWordSet) -> Result<Query<'a>> {
    let mut query = Query::default();
    for token in split_into_words(text) {
        let query_word = parse_query_word(token, stop_words)?;
        if query_word.is_stop {
            continue;
        }
        if query_word.is_minus {
            query.minus_words.push(query_word.text);
        } else {
            query.plus_words.push(query_word.text);
        }
    }
    Ok(query)
}
