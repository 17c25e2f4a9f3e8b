//! A missing archive is fatal before any pass runs

use tweet_analyser::analysis::{AnalysisEngine, OutputFormat};
use tweet_analyser::cli::commands::CommonArgs;
use tweet_analyser::config::AppConfig;
use tweet_analyser::errors::AppError;

#[test]
fn test_missing_database_aborts_without_outputs() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("grok.sqlite3");
    let output_dir = dir.path().join("output");

    let settings = CommonArgs {
        database_path: Some(missing.clone()),
        output_dir: Some(output_dir.clone()),
        format: OutputFormat::Console,
        no_export: false,
    }
    .resolve(&AppConfig::default(), None);

    match settings.open_engine() {
        Err(AppError::DatabaseNotFound(path)) => assert_eq!(path, missing),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("engine opened a missing database"),
    }

    assert!(!missing.exists());
    assert!(!output_dir.exists());
    Ok(())
}

#[test]
fn test_error_message_names_the_path() {
    let err = match AnalysisEngine::new("/nonexistent/dir/tweets.sqlite3") {
        Err(e) => e,
        Ok(_) => panic!("engine opened a missing database"),
    };
    assert_eq!(
        err.to_string(),
        "Database file not found at /nonexistent/dir/tweets.sqlite3"
    );
}
