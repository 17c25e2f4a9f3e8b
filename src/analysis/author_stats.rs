//! Per-author tweet counts
//!
//! The grouped query already counts tweets per author; this pass orders the
//! entries and derives the totals printed alongside the author table.

use crate::types::{AuthorCountEntry, AuthorReport};

/// Author tweet count aggregator
pub struct AuthorAggregator;

impl AuthorAggregator {
    /// Sort entries by tweet count (descending) and derive totals.
    ///
    /// The sort is stable: authors with equal counts keep their input order.
    pub fn aggregate(mut entries: Vec<AuthorCountEntry>) -> AuthorReport {
        entries.sort_by(|a, b| b.tweet_count.cmp(&a.tweet_count));

        let total_tweets = entries.iter().map(|e| e.tweet_count).sum();
        AuthorReport {
            total_authors: entries.len(),
            total_tweets,
            authors: entries,
        }
    }
}
