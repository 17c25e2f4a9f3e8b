//! `TweetQueries` implementation for the SQLite archive.

use super::helpers::{count_from_aggregate, payload_from_value, text_from_value};
use super::traits::TweetQueries;
use super::Database;
use crate::errors::AppResult;
use crate::types::{AuthorCountEntry, FlagStatistics, RawTweet};
use tracing::debug;

const AUTHOR_COUNTS_SQL: &str = "
    SELECT author_username, COUNT(*) AS tweet_count
    FROM tweets
    GROUP BY author_username
    ORDER BY tweet_count DESC";

const FLAG_STATISTICS_SQL: &str = "
    SELECT
        COUNT(*) AS total_tweets,
        SUM(CASE WHEN is_reply = 0 THEN 1 ELSE 0 END) AS is_reply_0_count,
        SUM(CASE WHEN is_reply = 1 THEN 1 ELSE 0 END) AS is_reply_1_count,
        SUM(CASE WHEN is_grok_reply = 0 THEN 1 ELSE 0 END) AS is_grok_reply_0_count,
        SUM(CASE WHEN is_grok_reply = 1 THEN 1 ELSE 0 END) AS is_grok_reply_1_count,
        SUM(CASE WHEN parent_id IS NULL OR parent_id = '' THEN 1 ELSE 0 END) AS parent_id_null_count,
        SUM(CASE WHEN parent_id IS NOT NULL AND parent_id != '' THEN 1 ELSE 0 END) AS parent_id_not_null_count,
        SUM(CASE WHEN is_reply = 0 AND is_grok_reply = 0 THEN 1 ELSE 0 END) AS combo_0_0_count,
        SUM(CASE WHEN is_reply = 0 AND is_grok_reply = 1 THEN 1 ELSE 0 END) AS combo_0_1_count,
        SUM(CASE WHEN is_reply = 1 AND is_grok_reply = 0 THEN 1 ELSE 0 END) AS combo_1_0_count,
        SUM(CASE WHEN is_reply = 1 AND is_grok_reply = 1 THEN 1 ELSE 0 END) AS combo_1_1_count
    FROM tweets";

const ENGAGEMENT_ROWS_SQL: &str = "SELECT author_username, json FROM tweets";

impl TweetQueries for Database {
    fn author_tweet_counts(&self) -> AppResult<Vec<AuthorCountEntry>> {
        let mut stmt = self.connection().prepare(AUTHOR_COUNTS_SQL)?;
        let entries = stmt
            .query_map([], |row| {
                Ok(AuthorCountEntry {
                    author: text_from_value(row.get_ref(0)?),
                    tweet_count: count_from_aggregate(row.get::<_, Option<i64>>(1)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Loaded tweet counts for {} authors", entries.len());
        Ok(entries)
    }

    fn flag_statistics(&self) -> AppResult<FlagStatistics> {
        let stats = self
            .connection()
            .query_row(FLAG_STATISTICS_SQL, [], |row| {
                let count = |idx: usize| -> rusqlite::Result<u64> {
                    Ok(count_from_aggregate(row.get::<_, Option<i64>>(idx)?))
                };
                Ok(FlagStatistics {
                    total_tweets: count(0)?,
                    is_reply_0: count(1)?,
                    is_reply_1: count(2)?,
                    is_grok_reply_0: count(3)?,
                    is_grok_reply_1: count(4)?,
                    parent_id_null: count(5)?,
                    parent_id_not_null: count(6)?,
                    combo_0_0: count(7)?,
                    combo_0_1: count(8)?,
                    combo_1_0: count(9)?,
                    combo_1_1: count(10)?,
                })
            })?;

        Ok(stats)
    }

    fn engagement_rows(&self) -> AppResult<Vec<RawTweet>> {
        let mut stmt = self.connection().prepare(ENGAGEMENT_ROWS_SQL)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(RawTweet {
                    author: text_from_value(row.get_ref(0)?),
                    payload: payload_from_value(row.get_ref(1)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Loaded {} tweet payloads", rows.len());
        Ok(rows)
    }
}
