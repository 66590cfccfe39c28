//! The search engine: the crate's public boundary surface.

use std::collections::BTreeMap;
use std::sync::Arc;

use ahash::AHashSet;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::analysis::StopWordSet;
use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::arena::{WordArena, WordId};
use crate::document::{DocumentStatus, ScoredDocument, compute_average_rating};
use crate::error::{JavelinError, Result};
use crate::index::InvertedIndex;
use crate::query::parse_query;
use crate::search::{ExecutionMode, SearchConfig, ranking};

/// Per-document metadata owned by the engine.
#[derive(Debug)]
pub(crate) struct DocumentRecord {
    pub(crate) rating: i32,
    pub(crate) status: DocumentStatus,
    pub(crate) words: AHashSet<WordId>,
}

/// An in-memory TF-IDF search engine.
///
/// Documents are added with an id, body text, rating list, and lifecycle
/// status; queries return the top matches ranked by TF-IDF relevance.
/// Every query and removal operation takes an [`ExecutionMode`] selecting
/// sequential or parallel execution; results are identical across modes.
pub struct SearchEngine {
    config: SearchConfig,
    stop_words: StopWordSet,
    pub(crate) arena: WordArena,
    pub(crate) index: InvertedIndex,
    pub(crate) documents: BTreeMap<i32, DocumentRecord>,
    pub(crate) pool: Arc<rayon::ThreadPool>,
}

impl SearchEngine {
    /// Create an engine with the given stop words and default
    /// configuration.
    ///
    /// Fails if any stop word contains a control character; no partially
    /// initialized engine is ever produced.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(stop_words, SearchConfig::default())
    }

    /// Create an engine from space-separated stop-word text.
    pub fn from_stop_words_text(text: &str) -> Result<Self> {
        Self::new(split_into_words(text))
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config<I, S>(stop_words: I, config: SearchConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = StopWordSet::new(stop_words)?;
        let pool_size = config.thread_pool_size.unwrap_or_else(num_cpus::get);
        let pool = ThreadPoolBuilder::new()
            .num_threads(pool_size)
            .thread_name(|i| format!("javelin-worker-{i}"))
            .build()
            .map_err(|e| JavelinError::internal(format!("failed to create thread pool: {e}")))?;

        Ok(SearchEngine {
            config,
            stop_words,
            arena: WordArena::new(),
            index: InvertedIndex::new(),
            documents: BTreeMap::new(),
            pool: Arc::new(pool),
        })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Index a document.
    ///
    /// The id must be non-negative and unused. Every word of the text is
    /// validated before stop words are dropped; the survivors are interned
    /// and indexed with `1/word_count` per occurrence. A document whose
    /// words are all stop words is stored and counted with an empty
    /// vocabulary.
    pub fn add_document(
        &mut self,
        document_id: i32,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if document_id < 0 || self.documents.contains_key(&document_id) {
            return Err(JavelinError::InvalidDocumentId { id: document_id });
        }

        let mut words = Vec::new();
        for word in split_into_words(text) {
            if !is_valid_word(word) {
                return Err(JavelinError::invalid_word(word));
            }
            if !self.stop_words.contains(word) {
                words.push(word);
            }
        }

        let mut document_words = AHashSet::with_capacity(words.len());
        if !words.is_empty() {
            let tf_per_occurrence = 1.0 / words.len() as f64;
            for word in words {
                let word_id = self.arena.intern(word);
                self.index.add(document_id, word_id, tf_per_occurrence);
                document_words.insert(word_id);
            }
        }

        self.documents.insert(
            document_id,
            DocumentRecord {
                rating: compute_average_rating(ratings),
                status,
                words: document_words,
            },
        );
        Ok(())
    }

    /// Remove a document. A no-op when the id is unknown.
    pub fn remove_document(&mut self, mode: ExecutionMode, document_id: i32) {
        if self.documents.remove(&document_id).is_none() {
            return;
        }
        match mode {
            ExecutionMode::Sequential => self.index.remove_document_sequential(document_id),
            ExecutionMode::Parallel => {
                let pool = Arc::clone(&self.pool);
                self.index.remove_document_parallel(document_id, &pool);
            }
        }
    }

    /// Number of live documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Iterate live document ids in ascending order.
    pub fn document_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.documents.keys().copied()
    }

    /// Term frequencies of one document, keyed by word.
    ///
    /// Returns an empty map for an unknown id; callers probing candidate
    /// ids need no prior existence check.
    pub fn word_frequencies(&self, document_id: i32) -> BTreeMap<&str, f64> {
        self.index
            .document_words(document_id)
            .map(|words| {
                words
                    .iter()
                    .map(|(&word_id, &tf)| (self.arena.resolve(word_id), tf))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Find the top matching documents with the default filter
    /// ([`DocumentStatus::Actual`] only).
    pub fn find_top_documents(
        &self,
        mode: ExecutionMode,
        raw_query: &str,
    ) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_by(mode, raw_query, |_, status, _| {
            status == DocumentStatus::Actual
        })
    }

    /// Find the top matching documents with exactly the given status.
    pub fn find_top_documents_with_status(
        &self,
        mode: ExecutionMode,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_by(mode, raw_query, move |_, document_status, _| {
            document_status == status
        })
    }

    /// Find the top matching documents accepted by a caller-supplied
    /// predicate over (id, status, rating).
    ///
    /// Results are sorted by descending relevance; ties (within the
    /// configured epsilon) break by descending rating, then ascending id.
    /// At most `config.max_results` documents are returned.
    pub fn find_top_documents_by<P>(
        &self,
        mode: ExecutionMode,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<ScoredDocument>>
    where
        P: Fn(i32, DocumentStatus, i32) -> bool + Sync,
    {
        let mut query = parse_query(raw_query, &self.stop_words)?;
        query.deduplicate();

        let mut matched = ranking::find_all_documents(mode, self, &query, &predicate);
        ranking::sort_and_truncate(&mut matched, &self.config);
        Ok(matched)
    }

    /// Words of the query that a specific document contains.
    ///
    /// Returns the intersection of the document's vocabulary with the
    /// query's plus words in lexicographic order, together with the
    /// document's status. If the document contains any minus word the
    /// word list is empty. Fails with [`JavelinError::DocumentNotFound`]
    /// for an id that is not live.
    pub fn match_document<'q>(
        &self,
        mode: ExecutionMode,
        raw_query: &'q str,
        document_id: i32,
    ) -> Result<(Vec<&'q str>, DocumentStatus)> {
        let record = self
            .documents
            .get(&document_id)
            .ok_or(JavelinError::DocumentNotFound(document_id))?;

        let mut query = parse_query(raw_query, &self.stop_words)?;
        query.deduplicate();

        let document_has = |word: &str| {
            self.arena
                .get(word)
                .is_some_and(|word_id| record.words.contains(&word_id))
        };

        let matched = match mode {
            ExecutionMode::Sequential => {
                if query.minus_words.iter().any(|word| document_has(word)) {
                    Vec::new()
                } else {
                    query
                        .plus_words
                        .iter()
                        .copied()
                        .filter(|word| document_has(word))
                        .collect()
                }
            }
            ExecutionMode::Parallel => self.pool.install(|| {
                if query.minus_words.par_iter().any(|word| document_has(word)) {
                    Vec::new()
                } else {
                    query
                        .plus_words
                        .par_iter()
                        .copied()
                        .filter(|word| document_has(word))
                        .collect()
                }
            }),
        };

        Ok((matched, record.status))
    }
}
