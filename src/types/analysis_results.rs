//! Result types produced by the analysis passes
//!
//! All reports derive `Serialize` so they can be emitted as JSON as well as
//! formatted for the console.

use super::engagement::{AuthorCategory, Metric};
use super::statistics::ParseStats;
use serde::Serialize;

// ===== Author Counts =====

/// Tweet count for one author as produced by the grouped query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorCountEntry {
    /// `None` when the author column is NULL
    pub author: Option<String>,
    pub tweet_count: u64,
}

impl AuthorCountEntry {
    pub fn new(author: Option<&str>, tweet_count: u64) -> Self {
        Self {
            author: author.map(str::to_string),
            tweet_count,
        }
    }

    /// Author name as written to reports (empty for NULL authors)
    pub fn author_name(&self) -> &str {
        self.author.as_deref().unwrap_or("")
    }
}

/// Author tweet counts sorted by count (descending) with derived totals
#[derive(Debug, Clone, Serialize)]
pub struct AuthorReport {
    pub authors: Vec<AuthorCountEntry>,
    pub total_authors: usize,
    pub total_tweets: u64,
}

impl AuthorReport {
    /// Author with the most tweets, if any
    pub fn top_author(&self) -> Option<&AuthorCountEntry> {
        self.authors.first()
    }
}

// ===== Flag Statistics =====

/// Whole-table counts for the reply / grok-reply / parent-id flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FlagStatistics {
    pub total_tweets: u64,
    pub is_reply_0: u64,
    pub is_reply_1: u64,
    pub is_grok_reply_0: u64,
    pub is_grok_reply_1: u64,
    pub parent_id_null: u64,
    pub parent_id_not_null: u64,
    /// (is_reply, is_grok_reply) = (0, 0)
    pub combo_0_0: u64,
    pub combo_0_1: u64,
    pub combo_1_0: u64,
    pub combo_1_1: u64,
}

impl FlagStatistics {
    pub fn combo_total(&self) -> u64 {
        self.combo_0_0 + self.combo_0_1 + self.combo_1_0 + self.combo_1_1
    }

    /// Describe every sum identity that does not hold.
    ///
    /// Flags holding values other than 0/1 (or NULL) make these identities
    /// fail on real data; an empty list means the record is consistent.
    pub fn invariant_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        let total = self.total_tweets;

        if self.combo_total() != total {
            violations.push(format!(
                "flag combinations sum to {} but table has {} tweets",
                self.combo_total(),
                total
            ));
        }
        if self.is_reply_0 + self.is_reply_1 != total {
            violations.push(format!(
                "is_reply counts sum to {} but table has {} tweets",
                self.is_reply_0 + self.is_reply_1,
                total
            ));
        }
        if self.parent_id_null + self.parent_id_not_null != total {
            violations.push(format!(
                "parent_id counts sum to {} but table has {} tweets",
                self.parent_id_null + self.parent_id_not_null,
                total
            ));
        }

        violations
    }
}

// ===== Engagement Metrics =====

/// Floor-index percentiles (nearest-rank, no interpolation)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValuePercentiles {
    pub p25: u64,
    pub p50: u64,
    pub p75: u64,
    pub p90: u64,
    pub p95: u64,
    pub p99: u64,
}

/// One histogram bucket with its share of the sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementBucket {
    pub label: &'static str,
    pub range_min: u64,
    /// `None` for the open-ended top bucket
    pub range_max: Option<u64>,
    pub count: usize,
    pub percentage: f64,
}

/// Descriptive statistics for one (category, metric) sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub count: usize,
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub median: f64,
    pub zero_count: usize,
    pub zero_percentage: f64,
    pub non_zero_count: usize,
    pub non_zero_percentage: f64,
    /// `None` when every value is zero
    pub non_zero_min: Option<u64>,
    pub non_zero_mean: Option<f64>,
    pub non_zero_median: Option<f64>,
    pub percentiles: ValuePercentiles,
    pub buckets: Vec<EngagementBucket>,
}

impl MetricSummary {
    pub fn all_zero(&self) -> bool {
        self.non_zero_count == 0
    }
}

/// Summary for one category/metric pair; `summary` is `None` for an empty sample
#[derive(Debug, Clone, Serialize)]
pub struct MetricDistribution {
    pub category: AuthorCategory,
    pub metric: Metric,
    pub summary: Option<MetricSummary>,
}

/// Complete engagement analysis: parse outcome plus every distribution
#[derive(Debug, Clone, Serialize)]
pub struct EngagementReport {
    pub distinguished_author: String,
    pub parse_stats: ParseStats,
    /// Ordered by category, then metric
    pub distributions: Vec<MetricDistribution>,
}

impl EngagementReport {
    pub fn distribution(&self, category: AuthorCategory, metric: Metric) -> Option<&MetricDistribution> {
        self.distributions
            .iter()
            .find(|d| d.category == category && d.metric == metric)
    }
}
