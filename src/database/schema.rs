//! Layout of the `tweets` table the analyser reads.
//!
//! The analyser never writes to the archive; this DDL documents the columns
//! the queries rely on and is used to build fixture databases.

use crate::errors::AppResult;
use rusqlite::Connection;

/// Minimal `tweets` table: only the columns the analysis queries touch
pub const TWEETS_TABLE_SQL: &str = "
    CREATE TABLE IF NOT EXISTS tweets (
        id TEXT PRIMARY KEY,
        author_username TEXT,
        json TEXT,
        is_reply INTEGER NOT NULL DEFAULT 0,
        is_grok_reply INTEGER NOT NULL DEFAULT 0,
        parent_id TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_tweets_author ON tweets(author_username);
";

/// Create the `tweets` table on a writable connection
pub fn setup_schema(connection: &Connection) -> AppResult<()> {
    connection.execute_batch(TWEETS_TABLE_SQL)?;
    Ok(())
}
