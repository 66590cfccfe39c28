//! Multi-query ranking across the worker pool.
//!
//! Each query is ranked independently, so a batch fans out one task per
//! query; per-query ranking stays sequential inside its worker. Result
//! order follows the input query order.

use rayon::prelude::*;

use crate::document::ScoredDocument;
use crate::error::Result;
use crate::search::{ExecutionMode, SearchEngine};

/// Rank every query against the engine, in parallel.
///
/// Returns one result list per query, in query order. The first query
/// error aborts the batch.
pub fn process_queries<S>(engine: &SearchEngine, queries: &[S]) -> Result<Vec<Vec<ScoredDocument>>>
where
    S: AsRef<str> + Sync,
{
    engine.pool.install(|| {
        queries
            .par_iter()
            .map(|query| engine.find_top_documents(ExecutionMode::Sequential, query.as_ref()))
            .collect()
    })
}

/// Rank every query and flatten the per-query results into one list,
/// preserving query order.
pub fn process_queries_flat<S>(engine: &SearchEngine, queries: &[S]) -> Result<Vec<ScoredDocument>>
where
    S: AsRef<str> + Sync,
{
    let per_query = process_queries(engine, queries)?;
    Ok(per_query.into_iter().flatten().collect())
}
