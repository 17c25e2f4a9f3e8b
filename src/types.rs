//! Tweet Analyser - Type System
//!
//! - `engagement`: metric and author category enumerations, raw tweet rows
//! - `analysis_results`: report structures produced by the analysis passes
//! - `statistics`: processing counters and timing

pub mod analysis_results;
pub mod engagement;
pub mod statistics;

pub use analysis_results::{
    AuthorCountEntry, AuthorReport, EngagementBucket, EngagementReport, FlagStatistics,
    MetricDistribution, MetricSummary, ValuePercentiles,
};
pub use engagement::{AuthorCategory, Metric, MetricValues, RawTweet};
pub use statistics::{ParseStats, StatisticsCollector, TimingInfo};
