//! Document types shared across the engine.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an indexed document.
///
/// The engine treats the four values as opaque tags consumed by result
/// filters; [`DocumentStatus::Actual`] is the implicit filter for
/// unqualified queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DocumentStatus {
    /// Live, relevant document (default filter target).
    #[default]
    Actual,
    /// Document kept in the index but no longer relevant.
    Irrelevant,
    /// Document banned from unqualified search results.
    Banned,
    /// Document scheduled for removal.
    Removed,
}

/// A single ranked search hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    /// Document id.
    pub id: i32,
    /// Accumulated TF-IDF relevance.
    pub relevance: f64,
    /// Average document rating.
    pub rating: i32,
}

impl ScoredDocument {
    /// Create a new scored document.
    pub fn new(id: i32, relevance: f64, rating: i32) -> Self {
        ScoredDocument {
            id,
            relevance,
            rating,
        }
    }
}

/// Compute the truncating integer average of a rating list.
///
/// Returns 0 for an empty list. The sum is accumulated in `i64` and the
/// quotient truncates toward zero, so `[5, -8, 2]` averages to `0`.
pub fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum / ratings.len() as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_rating_truncates_toward_zero() {
        assert_eq!(compute_average_rating(&[5, -8, 2]), 0);
        assert_eq!(compute_average_rating(&[-1, -2]), -1);
        assert_eq!(compute_average_rating(&[1, 2]), 1);
    }

    #[test]
    fn test_average_rating_empty() {
        assert_eq!(compute_average_rating(&[]), 0);
    }

    #[test]
    fn test_average_rating_large_values() {
        assert_eq!(compute_average_rating(&[i32::MAX, i32::MAX]), i32::MAX);
        assert_eq!(compute_average_rating(&[i32::MIN, i32::MIN]), i32::MIN);
    }

    #[test]
    fn test_default_status() {
        assert_eq!(DocumentStatus::default(), DocumentStatus::Actual);
    }
}
