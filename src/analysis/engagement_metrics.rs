//! Engagement metrics pipeline
//!
//! Tweets are classified by author, their payloads decoded, and every metric
//! value appended to the sample for the tweet's category and to `Total`.
//! Once all tweets are in, [`EngagementAccumulator::finish`] freezes the
//! samples and [`EngagementSamples::report`] summarises them.

use super::distribution::summarise;
use super::payload::extract_metrics;
use crate::types::statistics::StatisticsCollector;
use crate::types::{
    AuthorCategory, EngagementReport, Metric, MetricDistribution, MetricValues, ParseStats,
    RawTweet,
};
use crate::utils::time::format_elapsed_time;
use tracing::{debug, info};

type SampleGrid = [[Vec<u64>; 6]; 3];

/// Collects per-category, per-metric samples during the record pass
pub struct EngagementAccumulator {
    distinguished_author: String,
    samples: SampleGrid,
    stats: ParseStats,
}

impl EngagementAccumulator {
    pub fn new(distinguished_author: &str) -> Self {
        Self {
            distinguished_author: distinguished_author.to_string(),
            samples: Default::default(),
            stats: ParseStats::new(),
        }
    }

    /// Add one tweet. Never fails: undecodable payloads contribute zeros
    /// and are counted as malformed.
    pub fn add(&mut self, author: Option<&str>, payload: Option<&str>) -> AuthorCategory {
        let category = AuthorCategory::classify(author, &self.distinguished_author);

        let values = match extract_metrics(payload) {
            Ok(values) => {
                self.stats.record_parsed();
                values
            }
            Err(e) => {
                debug!(
                    "Record {}: payload unusable ({}), counting all metrics as 0",
                    self.stats.total_records + 1,
                    e
                );
                self.stats.record_malformed();
                MetricValues::default()
            }
        };

        for (metric, value) in values.iter() {
            self.samples[category.index()][metric.index()].push(value);
            self.samples[AuthorCategory::Total.index()][metric.index()].push(value);
        }

        category
    }

    pub fn add_tweet(&mut self, tweet: &RawTweet) -> AuthorCategory {
        self.add(tweet.author.as_deref(), tweet.payload.as_deref())
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Stop accumulating; the returned samples are read-only
    pub fn finish(mut self) -> EngagementSamples {
        self.stats.finish();
        EngagementSamples {
            distinguished_author: self.distinguished_author,
            samples: self.samples,
            stats: self.stats,
        }
    }
}

/// Frozen engagement samples, ready for summarising and export
#[derive(Debug, Clone)]
pub struct EngagementSamples {
    distinguished_author: String,
    samples: SampleGrid,
    stats: ParseStats,
}

impl EngagementSamples {
    /// Values for one category/metric pair, in record order
    pub fn values(&self, category: AuthorCategory, metric: Metric) -> &[u64] {
        &self.samples[category.index()][metric.index()]
    }

    pub fn parse_stats(&self) -> &ParseStats {
        &self.stats
    }

    pub fn distinguished_author(&self) -> &str {
        &self.distinguished_author
    }

    /// Iterate `(category, metric, values)` in export order
    pub fn iter(&self) -> impl Iterator<Item = (AuthorCategory, Metric, &[u64])> + '_ {
        AuthorCategory::ALL.into_iter().flat_map(move |category| {
            Metric::ALL
                .into_iter()
                .map(move |metric| (category, metric, self.values(category, metric)))
        })
    }

    /// Total number of exploded `(category, metric, value)` rows
    pub fn row_count(&self) -> usize {
        self.iter().map(|(_, _, values)| values.len()).sum()
    }

    /// Summarise every category/metric pair
    pub fn report(&self) -> EngagementReport {
        let distributions = self
            .iter()
            .map(|(category, metric, values)| MetricDistribution {
                category,
                metric,
                summary: summarise(values),
            })
            .collect();

        EngagementReport {
            distinguished_author: self.distinguished_author.clone(),
            parse_stats: self.stats.clone(),
            distributions,
        }
    }
}

/// Record-level driver for the engagement pass
pub struct EngagementAnalyser;

impl EngagementAnalyser {
    /// Accumulate every tweet, logging progress every `progress_interval` records
    pub fn accumulate(
        tweets: &[RawTweet],
        distinguished_author: &str,
        progress_interval: usize,
    ) -> EngagementSamples {
        let total = tweets.len();
        info!("Processing {} tweets...", total);

        let mut accumulator = EngagementAccumulator::new(distinguished_author);
        for (i, tweet) in tweets.iter().enumerate() {
            accumulator.add_tweet(tweet);

            if progress_interval > 0 && (i + 1) % progress_interval == 0 {
                info!("  Processed {}/{} tweets...", i + 1, total);
            }
        }

        let samples = accumulator.finish();
        let stats = samples.parse_stats();
        info!("{}", stats.summary());
        info!(
            "Engagement pass finished in {}",
            format_elapsed_time(stats.duration().as_secs_f64())
        );
        samples
    }
}
