//! Analysis passes over the tweet archive
//!
//! ## Overview
//!
//! The module is organised around the `AnalysisEngine`, which owns the
//! read-only database and runs each pass independently:
//!
//! - **Author Counts** - tweets per author, sorted by count
//! - **Flag Statistics** - reply / grok-reply / parent-id distributions
//! - **Engagement Metrics** - per-category distributions of the six
//!   engagement counters embedded in each tweet's JSON
//!
//! The passes themselves are pure functions of query results
//! ([`AuthorAggregator::aggregate`], [`EngagementAnalyser::accumulate`]);
//! the engine only supplies those results.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tweet_analyser::analysis::AnalysisEngine;
//! use tweet_analyser::errors::AppResult;
//!
//! fn example() -> AppResult<()> {
//!     let engine = AnalysisEngine::new("./grok.sqlite3")?;
//!
//!     let authors = engine.analyse_authors()?;
//!     let flags = engine.analyse_flags()?;
//!     let samples = engine.analyse_engagement("grok", 10_000)?;
//!     let report = samples.report();
//!     Ok(())
//! }
//! ```

pub mod author_stats;
pub mod distribution;
pub mod engagement_metrics;
pub mod flag_stats;
pub mod payload;
pub mod reports;

pub use author_stats::AuthorAggregator;
pub use engagement_metrics::{EngagementAccumulator, EngagementAnalyser, EngagementSamples};
pub use flag_stats::FlagStatsAnalyser;
pub use reports::{OutputFormat, ReportFormatter};

use crate::database::{Database, TweetQueries};
use crate::errors::AppResult;
use crate::types::{AuthorReport, FlagStatistics};
use std::path::Path;
use tracing::info;

/// Main analysis engine
pub struct AnalysisEngine {
    database: Database,
}

impl AnalysisEngine {
    /// Create a new analysis engine over an existing tweet database
    ///
    /// # Errors
    /// `AppError::DatabaseNotFound` when the file does not exist.
    pub fn new<P: AsRef<Path>>(database_path: P) -> AppResult<Self> {
        let database = Database::open(database_path)?;
        Ok(Self { database })
    }

    pub fn from_database(database: Database) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Tweets per author, sorted by count descending
    pub fn analyse_authors(&self) -> AppResult<AuthorReport> {
        let entries = self.database.author_tweet_counts()?;
        let report = AuthorAggregator::aggregate(entries);
        info!(
            "Author pass: {} authors, {} tweets",
            report.total_authors, report.total_tweets
        );
        Ok(report)
    }

    /// Whole-table flag distribution
    pub fn analyse_flags(&self) -> AppResult<FlagStatistics> {
        FlagStatsAnalyser::analyse(&self.database)
    }

    /// Load every tweet payload and accumulate engagement samples
    pub fn analyse_engagement(
        &self,
        distinguished_author: &str,
        progress_interval: usize,
    ) -> AppResult<EngagementSamples> {
        info!("Loading tweets from database...");
        let tweets = self.database.engagement_rows()?;
        Ok(EngagementAnalyser::accumulate(
            &tweets,
            distinguished_author,
            progress_interval,
        ))
    }
}
