//! TF-IDF relevance accumulation and result ordering.
//!
//! Both execution modes walk the deduplicated plus words in sorted order
//! and apply minus words to the accumulator afterwards, so a document
//! receives its per-word contributions in exactly the same order either
//! way and the accumulated sums are bit-identical across modes. The
//! parallel mode fans each word's posting list out across the worker pool
//! into a lock-striped [`ConcurrentMap`] and erases minus postings in
//! parallel once the plus barrier has passed.

use std::cmp::Ordering;

use ahash::AHashMap;
use rayon::prelude::*;

use crate::document::{DocumentStatus, ScoredDocument};
use crate::query::Query;
use crate::search::engine::SearchEngine;
use crate::search::{ExecutionMode, SearchConfig};
use crate::util::ConcurrentMap;

/// Inverse document frequency of a word with `posting_count` postings.
fn inverse_document_freq(document_count: usize, posting_count: usize) -> f64 {
    (document_count as f64 / posting_count as f64).ln()
}

/// Accumulate relevance for every document matching the query.
///
/// The caller must have deduplicated the query first.
pub(crate) fn find_all_documents<P>(
    mode: ExecutionMode,
    engine: &SearchEngine,
    query: &Query<'_>,
    predicate: &P,
) -> Vec<ScoredDocument>
where
    P: Fn(i32, DocumentStatus, i32) -> bool + Sync,
{
    let relevance = match mode {
        ExecutionMode::Sequential => find_all_sequential(engine, query, predicate),
        ExecutionMode::Parallel => find_all_parallel(engine, query, predicate),
    };

    relevance
        .into_iter()
        .filter_map(|(document_id, relevance)| {
            engine
                .documents
                .get(&document_id)
                .map(|record| ScoredDocument::new(document_id, relevance, record.rating))
        })
        .collect()
}

fn find_all_sequential<P>(
    engine: &SearchEngine,
    query: &Query<'_>,
    predicate: &P,
) -> AHashMap<i32, f64>
where
    P: Fn(i32, DocumentStatus, i32) -> bool,
{
    let document_count = engine.documents.len();
    let mut relevance: AHashMap<i32, f64> = AHashMap::new();

    for &word in &query.plus_words {
        let Some(word_id) = engine.arena.get(word) else {
            continue;
        };
        let Some(postings) = engine.index.postings(word_id) else {
            continue;
        };
        if postings.is_empty() {
            continue;
        }
        let idf = inverse_document_freq(document_count, postings.len());
        for (&document_id, &tf) in postings.iter() {
            if let Some(record) = engine.documents.get(&document_id) {
                if predicate(document_id, record.status, record.rating) {
                    *relevance.entry(document_id).or_insert(0.0) += tf * idf;
                }
            }
        }
    }

    for &word in &query.minus_words {
        let Some(word_id) = engine.arena.get(word) else {
            continue;
        };
        let Some(postings) = engine.index.postings(word_id) else {
            continue;
        };
        for document_id in postings.keys() {
            relevance.remove(document_id);
        }
    }

    relevance
}

fn find_all_parallel<P>(
    engine: &SearchEngine,
    query: &Query<'_>,
    predicate: &P,
) -> AHashMap<i32, f64>
where
    P: Fn(i32, DocumentStatus, i32) -> bool + Sync,
{
    let document_count = engine.documents.len();
    let accumulator: ConcurrentMap<i32, f64> = ConcurrentMap::new(engine.config().bucket_count);

    engine.pool.install(|| {
        for &word in &query.plus_words {
            // A word that is also a minus word contributes nothing: its
            // documents are erased below anyway.
            if query.minus_words.binary_search(&word).is_ok() {
                continue;
            }
            let Some(word_id) = engine.arena.get(word) else {
                continue;
            };
            let postings: Vec<(i32, f64)> = match engine.index.postings(word_id) {
                Some(postings) => postings.iter().map(|(&id, &tf)| (id, tf)).collect(),
                None => continue,
            };
            if postings.is_empty() {
                continue;
            }
            let idf = inverse_document_freq(document_count, postings.len());
            postings.par_iter().for_each(|&(document_id, tf)| {
                if let Some(record) = engine.documents.get(&document_id) {
                    if predicate(document_id, record.status, record.rating) {
                        accumulator.access(document_id, |value| *value += tf * idf);
                    }
                }
            });
        }

        // All plus contributions have landed; minus words touch disjoint
        // buckets only through their own locks.
        query.minus_words.par_iter().for_each(|&word| {
            let Some(word_id) = engine.arena.get(word) else {
                return;
            };
            let Some(postings) = engine.index.postings(word_id) else {
                return;
            };
            for document_id in postings.keys() {
                accumulator.remove(document_id);
            }
        });
    });

    accumulator.into_merged()
}

/// Order results by descending relevance, breaking near-ties by
/// descending rating and then ascending id, and truncate to the
/// configured maximum.
pub(crate) fn sort_and_truncate(results: &mut Vec<ScoredDocument>, config: &SearchConfig) {
    let epsilon = config.tie_epsilon;
    results.sort_unstable_by(|a, b| {
        if (a.relevance - b.relevance).abs() < epsilon {
            b.rating
                .cmp(&a.rating)
                .then_with(|| a.id.cmp(&b.id))
        } else {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(Ordering::Equal)
        }
    });
    results.truncate(config.max_results);
}
