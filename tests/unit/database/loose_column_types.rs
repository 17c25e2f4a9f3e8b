//! SQLite does not enforce column types; rows with unexpected storage
//! classes must still be read.

use crate::common::database::TestArchive;
use rusqlite::params;
use tweet_analyser::analysis::EngagementAnalyser;
use tweet_analyser::database::TweetQueries;
use tweet_analyser::types::RawTweet;

#[test]
fn test_numeric_author_and_blob_payload() -> anyhow::Result<()> {
    let archive = TestArchive::new("loose_types")?;
    archive.connection().execute(
        "INSERT INTO tweets (id, author_username, json) VALUES (?1, ?2, ?3)",
        params!["t1", 42i64, br#"{"likeCount":9}"#.to_vec()],
    )?;
    // TEXT affinity stores the integer as the text "17"
    archive.connection().execute(
        "INSERT INTO tweets (id, author_username, json) VALUES (?1, ?2, ?3)",
        params!["t2", "bob", 17i64],
    )?;

    let db = archive.open_read_only()?;
    let rows = db.engagement_rows()?;

    assert_eq!(
        rows,
        vec![
            RawTweet::new(Some("42"), Some(r#"{"likeCount":9}"#)),
            RawTweet::new(Some("bob"), Some("17")),
        ]
    );

    // "17" is valid JSON but not an object
    let samples = EngagementAnalyser::accumulate(&rows, "grok", 10_000);
    assert_eq!(samples.parse_stats().parsed_records, 1);
    assert_eq!(samples.parse_stats().malformed_records, 1);
    Ok(())
}

#[test]
fn test_untyped_columns_keep_numeric_payloads() -> anyhow::Result<()> {
    let archive = TestArchive::empty("loose_types_untyped")?;
    archive
        .connection()
        .execute_batch("CREATE TABLE tweets (author_username, json)")?;
    for payload in [
        rusqlite::types::Value::Integer(17),
        rusqlite::types::Value::Real(2.5),
        rusqlite::types::Value::Text(r#"{"viewCount":8}"#.to_string()),
    ] {
        archive.connection().execute(
            "INSERT INTO tweets (author_username, json) VALUES ('bob', ?1)",
            params![payload],
        )?;
    }

    let rows = archive.open_read_only()?.engagement_rows()?;

    let payloads: Vec<Option<&str>> = rows.iter().map(|r| r.payload.as_deref()).collect();
    assert_eq!(payloads, vec![None, None, Some(r#"{"viewCount":8}"#)]);

    let samples = EngagementAnalyser::accumulate(&rows, "grok", 10_000);
    assert_eq!(samples.parse_stats().malformed_records, 2);
    assert_eq!(samples.parse_stats().parsed_records, 1);
    Ok(())
}

#[test]
fn test_author_counts_follow_query_order() -> anyhow::Result<()> {
    let archive = TestArchive::new("loose_types_counts")?;
    for (id, author) in [("a", "x"), ("b", "y"), ("c", "y")] {
        archive.connection().execute(
            "INSERT INTO tweets (id, author_username, json) VALUES (?1, ?2, '{}')",
            params![id, author],
        )?;
    }

    let counts = archive.open_read_only()?.author_tweet_counts()?;

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].author.as_deref(), Some("y"));
    assert_eq!(counts[0].tweet_count, 2);
    assert_eq!(counts[1].tweet_count, 1);
    Ok(())
}
