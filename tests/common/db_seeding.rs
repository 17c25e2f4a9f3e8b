//! Database Seeding Helpers for Test Data Insertion

use crate::common::database::TestArchive;
use rusqlite::params;

/// One row of the `tweets` table
#[derive(Debug, Clone, Default)]
pub struct TweetRow {
    pub author: Option<String>,
    pub json: Option<String>,
    pub is_reply: i64,
    pub is_grok_reply: i64,
    pub parent_id: Option<String>,
}

impl TweetRow {
    pub fn new(author: Option<&str>, json: &str) -> Self {
        Self {
            author: author.map(str::to_string),
            json: Some(json.to_string()),
            ..Default::default()
        }
    }

    /// Reply to `parent`, optionally flagged as a grok reply
    pub fn reply(mut self, parent: &str, grok_reply: bool) -> Self {
        self.is_reply = 1;
        self.is_grok_reply = i64::from(grok_reply);
        self.parent_id = Some(parent.to_string());
        self
    }
}

/// Insert rows with sequential ids
pub fn seed_tweets(archive: &TestArchive, rows: &[TweetRow]) -> anyhow::Result<()> {
    let mut stmt = archive.connection().prepare(
        "INSERT INTO tweets (id, author_username, json, is_reply, is_grok_reply, parent_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;

    for (i, row) in rows.iter().enumerate() {
        stmt.execute(params![
            format!("tweet_{}", i),
            row.author,
            row.json,
            row.is_reply,
            row.is_grok_reply,
            row.parent_id,
        ])?;
    }
    Ok(())
}

/// `count` tweets by `author`, each with the given like count
pub fn author_tweets(author: &str, count: usize, likes: u64) -> Vec<TweetRow> {
    (0..count)
        .map(|_| TweetRow::new(Some(author), &format!(r#"{{"likeCount":{}}}"#, likes)))
        .collect()
}

/// The three-record archive used across the engagement tests:
/// grok with 5 likes, bob with 15, and an unparseable anonymous tweet
pub fn three_record_rows() -> Vec<TweetRow> {
    vec![
        TweetRow::new(Some("grok"), r#"{"likeCount":5}"#),
        TweetRow::new(Some("bob"), r#"{"likeCount":15}"#),
        TweetRow::new(None, "not json"),
    ]
}
