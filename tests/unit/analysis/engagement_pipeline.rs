//! Engagement pass against a seeded archive

use crate::common::database::TestArchive;
use crate::common::db_seeding::{seed_tweets, three_record_rows, TweetRow};
use tweet_analyser::analysis::AnalysisEngine;
use tweet_analyser::types::{AuthorCategory, Metric};

#[test]
fn test_three_record_archive() -> anyhow::Result<()> {
    let archive = TestArchive::new("engagement_three_records")?;
    seed_tweets(&archive, &three_record_rows())?;

    let engine = AnalysisEngine::from_database(archive.open_read_only()?);
    let samples = engine.analyse_engagement("grok", 10_000)?;

    assert_eq!(
        samples.values(AuthorCategory::Distinguished, Metric::LikeCount),
        &[5]
    );
    assert_eq!(
        samples.values(AuthorCategory::Ordinary, Metric::LikeCount),
        &[15, 0]
    );
    assert_eq!(
        samples.values(AuthorCategory::Total, Metric::LikeCount),
        &[5, 15, 0]
    );
    assert_eq!(samples.parse_stats().malformed_records, 1);
    assert_eq!(samples.parse_stats().parsed_records, 2);

    let report = samples.report();
    let total_likes = report
        .distribution(AuthorCategory::Total, Metric::LikeCount)
        .and_then(|d| d.summary.as_ref())
        .unwrap();
    assert_eq!(total_likes.count, 3);
    assert_eq!(total_likes.median, 5.0);
    assert_eq!(total_likes.non_zero_median, Some(10.0));
    Ok(())
}

#[test]
fn test_distinguished_author_is_configurable() -> anyhow::Result<()> {
    let archive = TestArchive::new("engagement_distinguished")?;
    seed_tweets(
        &archive,
        &[
            TweetRow::new(Some("XAI"), r#"{"viewCount":1000}"#),
            TweetRow::new(Some("grok"), r#"{"viewCount":20}"#),
        ],
    )?;

    let engine = AnalysisEngine::from_database(archive.open_read_only()?);
    let samples = engine.analyse_engagement("xai", 1)?;

    assert_eq!(samples.distinguished_author(), "xai");
    assert_eq!(
        samples.values(AuthorCategory::Distinguished, Metric::ViewCount),
        &[1000]
    );
    assert_eq!(
        samples.values(AuthorCategory::Ordinary, Metric::ViewCount),
        &[20]
    );
    Ok(())
}

#[test]
fn test_field_values_are_coerced() -> anyhow::Result<()> {
    let archive = TestArchive::new("engagement_coercion")?;
    seed_tweets(
        &archive,
        &[
            TweetRow::new(
                Some("bob"),
                r#"{"likeCount":-4,"viewCount":12.9,"bookmarkCount":null,"quoteCount":"7","replyCount":true,"retweetCount":3}"#,
            ),
            TweetRow::new(Some("bob"), "[1, 2, 3]"),
        ],
    )?;

    let engine = AnalysisEngine::from_database(archive.open_read_only()?);
    let samples = engine.analyse_engagement("grok", 10_000)?;

    let first: Vec<u64> = Metric::ALL
        .iter()
        .map(|&m| samples.values(AuthorCategory::Ordinary, m)[0])
        .collect();
    assert_eq!(first, vec![0, 12, 0, 0, 0, 3]);

    // The array payload is the only record-level failure
    assert_eq!(samples.parse_stats().malformed_records, 1);
    for metric in Metric::ALL {
        assert_eq!(samples.values(AuthorCategory::Ordinary, metric)[1], 0);
    }
    Ok(())
}

#[test]
fn test_large_archive_accumulates_every_record() -> anyhow::Result<()> {
    let archive = TestArchive::new("engagement_large")?;
    let rows: Vec<TweetRow> = (0..2_500u64)
        .map(|i| {
            let author = if i % 5 == 0 { "grok" } else { "user" };
            TweetRow::new(Some(author), &format!(r#"{{"viewCount":{}}}"#, i * 100))
        })
        .collect();
    seed_tweets(&archive, &rows)?;

    let engine = AnalysisEngine::from_database(archive.open_read_only()?);
    let samples = engine.analyse_engagement("grok", 1_000)?;

    let grok = samples.values(AuthorCategory::Distinguished, Metric::ViewCount);
    let users = samples.values(AuthorCategory::Ordinary, Metric::ViewCount);
    let total = samples.values(AuthorCategory::Total, Metric::ViewCount);
    assert_eq!(grok.len(), 500);
    assert_eq!(users.len(), 2_000);
    assert_eq!(total.len(), 2_500);
    assert_eq!(samples.parse_stats().total_records, 2_500);
    assert_eq!(samples.row_count(), 2 * 6 * 2_500);

    let report = samples.report();
    let summary = report
        .distribution(AuthorCategory::Total, Metric::ViewCount)
        .and_then(|d| d.summary.as_ref())
        .unwrap();
    assert_eq!(summary.max, 249_900);
    assert_eq!(summary.zero_count, 1);
    let bucketed: usize = summary.buckets.iter().map(|b| b.count).sum();
    assert_eq!(bucketed, 2_500);
    Ok(())
}
