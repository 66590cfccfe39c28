//! Trailing-window log of search requests.
//!
//! Records, for each query issued through it, whether the query returned
//! zero results, and reports how many of the most recent requests did.
//! The window is measured in requests, not wall time.

use std::collections::VecDeque;

use crate::document::{DocumentStatus, ScoredDocument};
use crate::error::Result;
use crate::search::{ExecutionMode, SearchEngine};

/// A search front-end that remembers which recent requests found nothing.
pub struct RequestLog<'a> {
    engine: &'a SearchEngine,
    window: usize,
    /// One entry per recorded request; `true` means zero results.
    outcomes: VecDeque<bool>,
    no_result_count: usize,
}

impl<'a> RequestLog<'a> {
    /// Default trailing window, in requests.
    pub const DEFAULT_WINDOW: usize = 1440;

    /// Create a log over an engine with the default window.
    pub fn new(engine: &'a SearchEngine) -> Self {
        Self::with_window(engine, Self::DEFAULT_WINDOW)
    }

    /// Create a log with an explicit window size (at least one request).
    pub fn with_window(engine: &'a SearchEngine, window: usize) -> Self {
        RequestLog {
            engine,
            window: window.max(1),
            outcomes: VecDeque::new(),
            no_result_count: 0,
        }
    }

    /// Run a query with the default filter and record its outcome.
    ///
    /// A query that fails to parse is not recorded.
    pub fn add_request(&mut self, raw_query: &str) -> Result<Vec<ScoredDocument>> {
        let results = self
            .engine
            .find_top_documents(ExecutionMode::Sequential, raw_query)?;
        self.record(results.is_empty());
        Ok(results)
    }

    /// Run a query filtered by status and record its outcome.
    pub fn add_request_with_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<ScoredDocument>> {
        let results = self.engine.find_top_documents_with_status(
            ExecutionMode::Sequential,
            raw_query,
            status,
        )?;
        self.record(results.is_empty());
        Ok(results)
    }

    /// Run a query filtered by a predicate and record its outcome.
    pub fn add_request_by<P>(&mut self, raw_query: &str, predicate: P) -> Result<Vec<ScoredDocument>>
    where
        P: Fn(i32, DocumentStatus, i32) -> bool + Sync,
    {
        let results =
            self.engine
                .find_top_documents_by(ExecutionMode::Sequential, raw_query, predicate)?;
        self.record(results.is_empty());
        Ok(results)
    }

    /// How many requests in the current window returned zero results.
    pub fn no_result_count(&self) -> usize {
        self.no_result_count
    }

    fn record(&mut self, empty: bool) {
        self.outcomes.push_back(empty);
        if empty {
            self.no_result_count += 1;
        }
        if self.outcomes.len() > self.window {
            if self.outcomes.pop_front() == Some(true) {
                self.no_result_count -= 1;
            }
        }
    }
}
