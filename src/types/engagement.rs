//! Engagement metric and author category definitions
//!
//! `Metric` and `AuthorCategory` are closed enumerations; their `ALL` arrays
//! fix the order used by reports and CSV exports.

use serde::{Deserialize, Serialize};

/// Engagement counters embedded in each tweet's JSON payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    LikeCount,
    ViewCount,
    BookmarkCount,
    QuoteCount,
    ReplyCount,
    RetweetCount,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::LikeCount,
        Metric::ViewCount,
        Metric::BookmarkCount,
        Metric::QuoteCount,
        Metric::ReplyCount,
        Metric::RetweetCount,
    ];

    /// JSON field name in the tweet payload (also used as the CSV label)
    pub fn field_name(&self) -> &'static str {
        match self {
            Metric::LikeCount => "likeCount",
            Metric::ViewCount => "viewCount",
            Metric::BookmarkCount => "bookmarkCount",
            Metric::QuoteCount => "quoteCount",
            Metric::ReplyCount => "replyCount",
            Metric::RetweetCount => "retweetCount",
        }
    }

    /// Position in [`Metric::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Author grouping for engagement statistics
///
/// Every tweet belongs to exactly one of `Distinguished` / `Ordinary` and
/// always to `Total`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AuthorCategory {
    #[serde(rename = "grok")]
    Distinguished,
    #[serde(rename = "users")]
    Ordinary,
    #[serde(rename = "total")]
    Total,
}

impl AuthorCategory {
    pub const ALL: [AuthorCategory; 3] = [
        AuthorCategory::Distinguished,
        AuthorCategory::Ordinary,
        AuthorCategory::Total,
    ];

    /// Short label used in CSV exports
    pub fn label(&self) -> &'static str {
        match self {
            AuthorCategory::Distinguished => "grok",
            AuthorCategory::Ordinary => "users",
            AuthorCategory::Total => "total",
        }
    }

    /// Human-readable name for console reports
    pub fn display_name(&self) -> &'static str {
        match self {
            AuthorCategory::Distinguished => "Grok",
            AuthorCategory::Ordinary => "Users",
            AuthorCategory::Total => "Total",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Classify an author against the distinguished account name.
    ///
    /// Comparison is ASCII case-insensitive; missing or empty authors are
    /// always `Ordinary`. Never returns `Total`.
    pub fn classify(author: Option<&str>, distinguished: &str) -> Self {
        match author {
            Some(name) if !name.is_empty() && name.eq_ignore_ascii_case(distinguished) => {
                AuthorCategory::Distinguished
            }
            _ => AuthorCategory::Ordinary,
        }
    }
}

impl std::fmt::Display for AuthorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the `(author, payload)` projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTweet {
    pub author: Option<String>,
    pub payload: Option<String>,
}

impl RawTweet {
    pub fn new(author: Option<&str>, payload: Option<&str>) -> Self {
        Self {
            author: author.map(str::to_string),
            payload: payload.map(str::to_string),
        }
    }
}

/// Extracted value for every metric of one tweet, indexed by [`Metric::index`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricValues([u64; 6]);

impl MetricValues {
    pub fn get(&self, metric: Metric) -> u64 {
        self.0[metric.index()]
    }

    pub fn set(&mut self, metric: Metric, value: u64) {
        self.0[metric.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, u64)> + '_ {
        Metric::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}
