//! All passes over one archive, including both CSV exports

use crate::common::database::TestArchive;
use crate::common::db_seeding::{seed_tweets, three_record_rows, TweetRow};
use tweet_analyser::analysis::{AnalysisEngine, OutputFormat, ReportFormatter};
use tweet_analyser::cli::commands::all::{json_document, run_all};
use tweet_analyser::cli::commands::{authors, CommonArgs, PassOutput, RunSettings};
use tweet_analyser::config::AppConfig;

fn settings_with_format(archive: &TestArchive, no_export: bool, format: OutputFormat) -> RunSettings {
    let args = CommonArgs {
        database_path: Some(archive.path().to_path_buf()),
        output_dir: Some(archive.output_dir()),
        format,
        no_export,
    };
    args.resolve(&AppConfig::default(), None)
}

fn settings_for(archive: &TestArchive, no_export: bool) -> RunSettings {
    settings_with_format(archive, no_export, OutputFormat::Console)
}

#[test]
fn test_all_passes_write_both_csvs() -> anyhow::Result<()> {
    let archive = TestArchive::new("e2e_all_passes")?;
    seed_tweets(&archive, &three_record_rows())?;
    let settings = settings_for(&archive, false);

    let engine = settings.open_engine()?;
    run_all(&engine, &settings)?;

    let authors = std::fs::read_to_string(&settings.author_csv)?;
    let mut author_lines: Vec<&str> = authors.lines().collect();
    assert_eq!(author_lines.remove(0), "author_username,tweet_count");
    author_lines.sort_unstable();
    assert_eq!(author_lines, vec![",1", "bob,1", "grok,1"]);

    let values = std::fs::read_to_string(&settings.engagement_csv)?;
    let lines: Vec<&str> = values.lines().collect();
    assert_eq!(lines[0], "category,metric,value");
    // 3 tweets x 6 metrics, once in their own category and once in total
    assert_eq!(lines.len(), 1 + 36);
    assert_eq!(lines[1], "grok,likeCount,5");
    assert_eq!(lines[7], "users,likeCount,15");
    assert_eq!(lines[8], "users,likeCount,0");
    assert!(lines.contains(&"total,likeCount,15"));
    assert!(lines.iter().skip(1).all(|l| l.starts_with("grok,")
        || l.starts_with("users,")
        || l.starts_with("total,")));
    Ok(())
}

#[test]
fn test_no_export_writes_nothing() -> anyhow::Result<()> {
    let archive = TestArchive::new("e2e_no_export")?;
    seed_tweets(&archive, &three_record_rows())?;
    let settings = settings_for(&archive, true);

    let engine = settings.open_engine()?;
    run_all(&engine, &settings)?;

    assert!(!settings.author_csv.exists());
    assert!(!settings.engagement_csv.exists());
    Ok(())
}

#[test]
fn test_reports_render_from_archive() -> anyhow::Result<()> {
    let archive = TestArchive::new("e2e_reports")?;
    let mut rows = three_record_rows();
    rows.push(TweetRow::new(Some("Grok"), r#"{"viewCount":150000}"#).reply("tweet_1", true));
    seed_tweets(&archive, &rows)?;

    let engine = AnalysisEngine::from_database(archive.open_read_only()?);

    let authors = ReportFormatter::format_author_report(
        &engine.analyse_authors()?,
        &OutputFormat::Console,
    )?;
    assert!(authors.contains("Total tweets: 4"));

    let flags = ReportFormatter::format_flag_statistics(
        &engine.analyse_flags()?,
        &OutputFormat::Json,
    )?;
    let flags: serde_json::Value = serde_json::from_str(&flags)?;
    assert_eq!(flags["total_tweets"], 4);
    assert_eq!(flags["combo_1_1"], 1);

    let report = engine.analyse_engagement("grok", 10_000)?.report();
    let engagement = ReportFormatter::format_engagement_report(&report, &OutputFormat::Console)?;
    assert!(engagement.contains("JSON parsing: 3 successful, 1 errors"));
    assert!(engagement.contains("=== ENGAGEMENT METRICS DISTRIBUTION ==="));
    assert!(engagement.contains("> 100K"));
    Ok(())
}

#[test]
fn test_json_mode_emits_one_parseable_document() -> anyhow::Result<()> {
    let archive = TestArchive::new("e2e_json_document")?;
    seed_tweets(&archive, &three_record_rows())?;
    let settings = settings_with_format(&archive, false, OutputFormat::Json);

    let engine = settings.open_engine()?;
    let (document, failed) = json_document(&engine, &settings);
    assert!(failed.is_empty());

    // Exactly what `all --format json` writes to stdout
    let text = PassOutput::Json(serde_json::Value::Object(document)).to_text()?;
    let value: serde_json::Value = serde_json::from_str(&text)?;

    assert_eq!(value["authors"]["total_tweets"], 3);
    assert_eq!(value["flags"]["total_tweets"], 3);
    assert_eq!(value["engagement"]["parse_stats"]["malformed_records"], 1);
    assert_eq!(value["engagement"]["distributions"][0]["category"], "grok");
    assert_eq!(value["engagement"]["distributions"][0]["metric"], "likeCount");

    // CSVs are still written alongside the JSON report
    assert!(settings.author_csv.exists());
    assert!(settings.engagement_csv.exists());
    Ok(())
}

#[test]
fn test_single_pass_json_is_terminated_document() -> anyhow::Result<()> {
    let archive = TestArchive::new("e2e_json_single")?;
    seed_tweets(&archive, &three_record_rows())?;
    let settings = settings_with_format(&archive, false, OutputFormat::Json);

    let engine = settings.open_engine()?;
    let text = authors::run_pass(&engine, &settings)?.to_text()?;

    assert!(text.ends_with("}\n"));
    let value: serde_json::Value = serde_json::from_str(&text)?;
    assert_eq!(value["total_authors"], 3);
    Ok(())
}
