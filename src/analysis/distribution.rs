//! Descriptive statistics over one engagement sample
//!
//! The median is the conventional middle element (or mean of the two middle
//! elements); percentiles index the sorted sample at `floor(p * n)` with no
//! interpolation. The two must not be unified: on even-sized samples the
//! median and p50 differ.

use crate::types::{EngagementBucket, MetricSummary, ValuePercentiles};
use crate::utils::math::{mean_u64, safe_percentage};

/// Engagement histogram buckets - single source of truth
/// Bucket semantics: [min, max] - both bounds inclusive.
/// Except last bucket which is (100000, ∞) - open-ended.
pub const ENGAGEMENT_BUCKET_RANGES: &[(u64, Option<u64>, &str)] = &[
    (0, Some(0), "= 0"),
    (1, Some(10), "1-10"),
    (11, Some(100), "11-100"),
    (101, Some(1_000), "101-1K"),
    (1_001, Some(10_000), "1K-10K"),
    (10_001, Some(100_000), "10K-100K"),
    (100_001, None, "> 100K"),
];

pub const BUCKET_COUNT: usize = ENGAGEMENT_BUCKET_RANGES.len();

/// Index of the bucket containing `value`
pub fn bucket_index(value: u64) -> usize {
    ENGAGEMENT_BUCKET_RANGES
        .iter()
        .position(|&(min, max, _)| value >= min && max.map_or(true, |max| value <= max))
        .unwrap_or(BUCKET_COUNT - 1)
}

/// Count values per bucket
pub fn bucket_counts(values: &[u64]) -> [usize; BUCKET_COUNT] {
    let mut counts = [0usize; BUCKET_COUNT];
    for &value in values {
        counts[bucket_index(value)] += 1;
    }
    counts
}

/// Histogram with counts and percentages of `values.len()`
pub fn histogram(values: &[u64]) -> Vec<EngagementBucket> {
    let counts = bucket_counts(values);
    ENGAGEMENT_BUCKET_RANGES
        .iter()
        .zip(counts)
        .map(|(&(range_min, range_max, label), count)| EngagementBucket {
            label,
            range_min,
            range_max,
            count,
            percentage: safe_percentage(count, values.len()),
        })
        .collect()
}

/// Floor-index percentile of an ascending slice.
///
/// `index = floor(percent * n / 100)`, computed exactly in integer arithmetic
/// and clamped to the last element. Returns `None` for an empty slice.
pub fn floor_index_percentile(sorted: &[u64], percent: usize) -> Option<u64> {
    if sorted.is_empty() {
        return None;
    }
    let len = sorted.len();
    let index = ((len as u128 * percent as u128) / 100) as usize;
    Some(sorted[index.min(len - 1)])
}

/// Floor-index percentiles of an ascending slice (all zeros when empty)
pub fn percentiles(sorted: &[u64]) -> ValuePercentiles {
    let at = |percent| floor_index_percentile(sorted, percent).unwrap_or(0);
    ValuePercentiles {
        p25: at(25),
        p50: at(50),
        p75: at(75),
        p90: at(90),
        p95: at(95),
        p99: at(99),
    }
}

/// Conventional median of an ascending slice
pub fn median(sorted: &[u64]) -> Option<f64> {
    let len = sorted.len();
    if len == 0 {
        return None;
    }
    let mid = len / 2;
    if len % 2 == 1 {
        Some(sorted[mid] as f64)
    } else {
        Some((sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0)
    }
}

/// Summarise one sample; `None` when the sample is empty.
pub fn summarise(values: &[u64]) -> Option<MetricSummary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    // Zeros sort first, so the non-zero values are a suffix
    let zero_count = sorted.partition_point(|&v| v == 0);
    let non_zero = &sorted[zero_count..];
    let count = sorted.len();

    Some(MetricSummary {
        count,
        min: sorted[0],
        max: sorted[count - 1],
        mean: mean_u64(&sorted).unwrap_or(0.0),
        median: median(&sorted).unwrap_or(0.0),
        zero_count,
        zero_percentage: safe_percentage(zero_count, count),
        non_zero_count: non_zero.len(),
        non_zero_percentage: safe_percentage(non_zero.len(), count),
        non_zero_min: non_zero.first().copied(),
        non_zero_mean: mean_u64(non_zero),
        non_zero_median: median(non_zero),
        percentiles: percentiles(&sorted),
        buckets: histogram(&sorted),
    })
}
