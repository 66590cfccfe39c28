//! Dual-view inverted index.
//!
//! The index keeps two complementary views over one logical relation
//! (document x word x term frequency): word-major posting lists for
//! ranking, and a document-major slice for per-document frequency lookups
//! and removal. All mutation goes through [`InvertedIndex::add`] and the
//! two `remove_document_*` methods, which update both views.
//!
//! Each posting list sits behind its own `Mutex`, so parallel removal can
//! fan out one task per word: every task locks a distinct entry and the
//! outer maps are never reshaped concurrently.

use ahash::AHashMap;
use parking_lot::{Mutex, MutexGuard};
use rayon::prelude::*;

use crate::arena::WordId;

/// In-memory inverted index with word-major and document-major views.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    /// word -> (document -> term frequency)
    word_postings: AHashMap<WordId, Mutex<AHashMap<i32, f64>>>,
    /// document -> (word -> term frequency)
    doc_words: AHashMap<i32, AHashMap<WordId, f64>>,
}

impl InvertedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    /// Add a term-frequency contribution for one word occurrence.
    ///
    /// Repeated calls for the same (document, word) pair accumulate.
    pub fn add(&mut self, document_id: i32, word: WordId, tf_delta: f64) {
        *self
            .word_postings
            .entry(word)
            .or_default()
            .get_mut()
            .entry(document_id)
            .or_insert(0.0) += tf_delta;
        *self
            .doc_words
            .entry(document_id)
            .or_default()
            .entry(word)
            .or_insert(0.0) += tf_delta;
    }

    /// Lock and return the posting list of a word, if any was ever indexed.
    ///
    /// A list emptied by document removal is kept and reads as no
    /// postings.
    pub fn postings(&self, word: WordId) -> Option<MutexGuard<'_, AHashMap<i32, f64>>> {
        self.word_postings.get(&word).map(|list| list.lock())
    }

    /// Number of documents containing a word.
    pub fn posting_count(&self, word: WordId) -> usize {
        self.postings(word).map_or(0, |list| list.len())
    }

    /// The document-major slice: word -> term frequency for one document.
    pub fn document_words(&self, document_id: i32) -> Option<&AHashMap<WordId, f64>> {
        self.doc_words.get(&document_id)
    }

    /// Remove every trace of a document, one word at a time.
    pub fn remove_document_sequential(&mut self, document_id: i32) {
        let Some(words) = self.doc_words.remove(&document_id) else {
            return;
        };
        for word in words.keys() {
            if let Some(list) = self.word_postings.get_mut(word) {
                list.get_mut().remove(&document_id);
            }
        }
    }

    /// Remove every trace of a document, fanning out one task per word.
    ///
    /// Each word's posting list is a distinct map entry behind its own
    /// lock, so the tasks never contend on shared state.
    pub fn remove_document_parallel(&mut self, document_id: i32, pool: &rayon::ThreadPool) {
        let Some(words) = self.doc_words.remove(&document_id) else {
            return;
        };
        let word_ids: Vec<WordId> = words.keys().copied().collect();
        let word_postings = &self.word_postings;
        pool.install(|| {
            word_ids.par_iter().for_each(|word| {
                if let Some(list) = word_postings.get(word) {
                    list.lock().remove(&document_id);
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::WordArena;

    fn pool() -> rayon::ThreadPool {
        rayon::ThreadPoolBuilder::new().num_threads(4).build().unwrap()
    }

    #[test]
    fn test_add_updates_both_views() {
        let mut arena = WordArena::new();
        let cat = arena.intern("cat");
        let mut index = InvertedIndex::new();
        index.add(7, cat, 0.5);

        assert_eq!(index.posting_count(cat), 1);
        assert_eq!(index.postings(cat).unwrap().get(&7), Some(&0.5));
        assert_eq!(index.document_words(7).unwrap().get(&cat), Some(&0.5));
    }

    #[test]
    fn test_repeated_occurrences_accumulate() {
        let mut arena = WordArena::new();
        let cat = arena.intern("cat");
        let mut index = InvertedIndex::new();
        index.add(7, cat, 0.25);
        index.add(7, cat, 0.25);

        assert_eq!(index.postings(cat).unwrap().get(&7), Some(&0.5));
        assert_eq!(index.document_words(7).unwrap().get(&cat), Some(&0.5));
    }

    #[test]
    fn test_absent_word_has_no_postings() {
        let mut arena = WordArena::new();
        let cat = arena.intern("cat");
        let index = InvertedIndex::new();
        assert!(index.postings(cat).is_none());
        assert_eq!(index.posting_count(cat), 0);
    }

    #[test]
    fn test_sequential_removal() {
        let mut arena = WordArena::new();
        let cat = arena.intern("cat");
        let dog = arena.intern("dog");
        let mut index = InvertedIndex::new();
        index.add(1, cat, 0.5);
        index.add(1, dog, 0.5);
        index.add(2, cat, 1.0);

        index.remove_document_sequential(1);

        assert!(index.document_words(1).is_none());
        assert_eq!(index.posting_count(cat), 1);
        assert_eq!(index.posting_count(dog), 0);
        assert_eq!(index.postings(cat).unwrap().get(&2), Some(&1.0));
    }

    #[test]
    fn test_parallel_removal_matches_sequential() {
        let mut arena = WordArena::new();
        let words: Vec<WordId> = (0..64).map(|i| arena.intern(&format!("w{i}"))).collect();

        let mut seq = InvertedIndex::new();
        let mut par = InvertedIndex::new();
        for &word in &words {
            seq.add(1, word, 0.1);
            par.add(1, word, 0.1);
            seq.add(2, word, 0.2);
            par.add(2, word, 0.2);
        }

        seq.remove_document_sequential(1);
        par.remove_document_parallel(1, &pool());

        for &word in &words {
            assert_eq!(seq.posting_count(word), par.posting_count(word));
            assert_eq!(
                seq.postings(word).unwrap().get(&2),
                par.postings(word).unwrap().get(&2)
            );
        }
        assert!(par.document_words(1).is_none());
    }

    #[test]
    fn test_remove_unknown_document_is_noop() {
        let mut index = InvertedIndex::new();
        index.remove_document_sequential(99);
        index.remove_document_parallel(99, &pool());
    }
}
