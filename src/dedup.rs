//! Duplicate-document detection and removal.
//!
//! Two documents are duplicates when their vocabulary sets are equal;
//! term frequencies and ratings are ignored. The earliest id of each
//! vocabulary set survives.

use ahash::AHashSet;

use crate::search::{ExecutionMode, SearchEngine};

/// Remove every document whose vocabulary set duplicates an
/// earlier-added document's.
///
/// Walks live ids in ascending order, so the smallest id of each
/// duplicate group is kept. Returns the removed ids in ascending order.
pub fn remove_duplicates(engine: &mut SearchEngine, mode: ExecutionMode) -> Vec<i32> {
    let mut seen: AHashSet<Vec<String>> = AHashSet::new();
    let mut duplicates = Vec::new();

    for document_id in engine.document_ids() {
        // word_frequencies is keyed in lexicographic order, so the key
        // list is a canonical form of the vocabulary set.
        let vocabulary: Vec<String> = engine
            .word_frequencies(document_id)
            .keys()
            .map(|word| (*word).to_string())
            .collect();
        if !seen.insert(vocabulary) {
            duplicates.push(document_id);
        }
    }

    for &document_id in &duplicates {
        engine.remove_document(mode, document_id);
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentStatus;

    fn engine() -> SearchEngine {
        let mut engine = SearchEngine::new(["and", "with"]).unwrap();
        let docs = [
            (1, "funny pet and nasty rat"),
            (2, "funny pet with curly hair"),
            // duplicates of 2: word order and repetition do not matter
            (3, "funny pet with curly hair"),
            (4, "funny pet and curly hair"),
            (5, "funny funny pet and nasty nasty rat"),
            (6, "funny pet and not very nasty rat"),
            (7, "very nasty rat and not very funny pet"),
            (8, "pet with rat and rat and rat"),
            (9, "nasty rat with curly hair"),
        ];
        for (id, text) in docs {
            engine
                .add_document(id, text, DocumentStatus::Actual, &[1, 2])
                .unwrap();
        }
        engine
    }

    #[test]
    fn test_duplicates_removed_keeping_smallest_id() {
        let mut engine = engine();
        let removed = remove_duplicates(&mut engine, ExecutionMode::Sequential);
        assert_eq!(removed, vec![3, 4, 5, 7]);
        assert_eq!(engine.document_count(), 5);
        let live: Vec<i32> = engine.document_ids().collect();
        assert_eq!(live, vec![1, 2, 6, 8, 9]);
    }

    #[test]
    fn test_parallel_removal_same_result() {
        let mut engine = engine();
        let removed = remove_duplicates(&mut engine, ExecutionMode::Parallel);
        assert_eq!(removed, vec![3, 4, 5, 7]);
    }

    #[test]
    fn test_no_duplicates_is_noop() {
        let mut engine = SearchEngine::new(["the"]).unwrap();
        engine
            .add_document(1, "cat", DocumentStatus::Actual, &[])
            .unwrap();
        engine
            .add_document(2, "dog", DocumentStatus::Actual, &[])
            .unwrap();
        assert!(remove_duplicates(&mut engine, ExecutionMode::Sequential).is_empty());
        assert_eq!(engine.document_count(), 2);
    }
}
