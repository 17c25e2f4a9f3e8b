//! Query abstraction consumed by the analysis passes.

use crate::errors::AppResult;
use crate::types::{AuthorCountEntry, FlagStatistics, RawTweet};

/// Read-only queries over the `tweets` table
pub trait TweetQueries {
    /// Tweet count per author, ordered by count descending
    fn author_tweet_counts(&self) -> AppResult<Vec<AuthorCountEntry>>;

    /// Whole-table reply / grok-reply / parent-id flag counts
    fn flag_statistics(&self) -> AppResult<FlagStatistics>;

    /// `(author, payload)` projection of every tweet
    fn engagement_rows(&self) -> AppResult<Vec<RawTweet>>;
}
