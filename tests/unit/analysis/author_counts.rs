//! Author pass against a seeded archive

use crate::common::database::TestArchive;
use crate::common::db_seeding::{author_tweets, seed_tweets, TweetRow};
use tweet_analyser::analysis::AnalysisEngine;

#[test]
fn test_author_counts_sorted_and_summed() -> anyhow::Result<()> {
    let archive = TestArchive::new("author_counts_sorted")?;
    let mut rows = author_tweets("alice", 2, 0);
    rows.extend(author_tweets("grok", 5, 1));
    rows.extend(author_tweets("bob", 1, 3));
    seed_tweets(&archive, &rows)?;

    let engine = AnalysisEngine::from_database(archive.open_read_only()?);
    let report = engine.analyse_authors()?;

    let names: Vec<&str> = report.authors.iter().map(|e| e.author_name()).collect();
    assert_eq!(names, vec!["grok", "alice", "bob"]);
    assert_eq!(report.total_authors, 3);
    assert_eq!(report.total_tweets, 8);

    let top = report.top_author().unwrap();
    assert_eq!(top.author_name(), "grok");
    assert_eq!(top.tweet_count, 5);
    Ok(())
}

#[test]
fn test_null_author_is_its_own_group() -> anyhow::Result<()> {
    let archive = TestArchive::new("author_counts_null")?;
    seed_tweets(
        &archive,
        &[
            TweetRow::new(None, "{}"),
            TweetRow::new(None, "{}"),
            TweetRow::new(Some("bob"), "{}"),
        ],
    )?;

    let report = AnalysisEngine::from_database(archive.open_read_only()?).analyse_authors()?;

    assert_eq!(report.total_authors, 2);
    assert_eq!(report.authors[0].author, None);
    assert_eq!(report.authors[0].tweet_count, 2);
    Ok(())
}

#[test]
fn test_empty_archive() -> anyhow::Result<()> {
    let archive = TestArchive::new("author_counts_empty")?;

    let report = AnalysisEngine::from_database(archive.open_read_only()?).analyse_authors()?;

    assert!(report.authors.is_empty());
    assert_eq!(report.total_tweets, 0);
    assert!(report.top_author().is_none());
    Ok(())
}
