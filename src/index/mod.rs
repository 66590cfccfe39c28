//! Inverted index storage.

pub mod inverted;

pub use inverted::InvertedIndex;
