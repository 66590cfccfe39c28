//! Search engine: configuration, execution modes, ranking, and the public
//! boundary surface.

pub mod batch;
pub mod engine;
pub mod ranking;

pub use batch::{process_queries, process_queries_flat};
pub use engine::SearchEngine;

use serde::{Deserialize, Serialize};

/// Per-call execution mode selector.
///
/// Semantics are identical across modes; only performance and the internal
/// ordering of side effects differ, never observable results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExecutionMode {
    /// Single worker, no locking.
    #[default]
    Sequential,
    /// Work fanned out across the engine's thread pool.
    Parallel,
}

/// Configuration for a search engine instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of documents returned by a top-documents query.
    pub max_results: usize,

    /// Relevance difference below which two results count as tied and
    /// fall back to rating order.
    pub tie_epsilon: f64,

    /// Bucket count of the lock-striped accumulator used by parallel
    /// queries. Larger counts reduce contention, smaller counts reduce
    /// merge overhead.
    pub bucket_count: usize,

    /// Thread pool size for parallel execution.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_results: 5,
            tie_epsilon: 1e-6,
            bucket_count: 100,
            thread_pool_size: None,
        }
    }
}

impl SearchConfig {
    /// Set the maximum result count.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set the tie-breaking epsilon.
    pub fn with_tie_epsilon(mut self, tie_epsilon: f64) -> Self {
        self.tie_epsilon = tie_epsilon;
        self
    }

    /// Set the accumulator bucket count.
    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    /// Set the thread pool size.
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }
}
