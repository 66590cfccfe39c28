//! # Javelin
//!
//! A fast, in-memory TF-IDF text search engine for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation, fully in-memory
//! - TF-IDF relevance ranking with stop words
//! - Required ("plus") and excluded ("minus") query terms
//! - Status-based and predicate-based result filtering
//! - Sequential and parallel execution modes with identical results
//! - Lock-striped concurrent accumulation for parallel queries
//!
//! ## Example
//!
//! ```
//! use javelin::document::DocumentStatus;
//! use javelin::search::{ExecutionMode, SearchEngine};
//!
//! let mut engine = SearchEngine::new(["and", "the"]).unwrap();
//! engine
//!     .add_document(0, "white cat and fancy collar", DocumentStatus::Actual, &[8])
//!     .unwrap();
//! engine
//!     .add_document(1, "fluffy cat fluffy tail", DocumentStatus::Actual, &[7])
//!     .unwrap();
//!
//! let results = engine
//!     .find_top_documents(ExecutionMode::Sequential, "fluffy cat")
//!     .unwrap();
//! assert_eq!(results[0].id, 1);
//! ```

pub mod analysis;
pub mod arena;
pub mod dedup;
pub mod document;
pub mod error;
pub mod index;
pub mod paginate;
pub mod query;
pub mod request_log;
pub mod search;
pub mod util;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
