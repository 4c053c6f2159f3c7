//! Per-bucket summaries relative to a reference year.

use serde::Serialize;

use kislev_stats::gap_stats;

use crate::bucket::Bucket;
use crate::report::CoincidenceReport;

/// What a report says about one bucket, seen from `current_year`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketSummary {
    /// The summarised bucket.
    pub bucket: Bucket,
    /// Share of the queried span, in percent.
    pub share_percent: f64,
    /// Most recent year strictly before the reference year.
    pub last_before: Option<i32>,
    /// First year strictly after the reference year.
    pub next_after: Option<i32>,
    /// Number of years strictly before the reference year.
    pub count_before: usize,
    /// Earliest year in the bucket.
    pub first: Option<i32>,
    /// Latest year in the bucket.
    pub last: Option<i32>,
    /// Mean recurrence interval; `None` with fewer than two years.
    pub mean_gap: Option<f64>,
    /// The bucket's years, ascending.
    pub years: Vec<i32>,
}

impl BucketSummary {
    /// Summarises `bucket` of `report` relative to `current_year`.
    pub fn new(report: &CoincidenceReport, bucket: Bucket, current_year: i32) -> Self {
        let years = report.bucket(bucket).to_vec();
        let before = years.partition_point(|&y| y < current_year);
        let after = years.partition_point(|&y| y <= current_year);
        let share_percent = if report.span() == 0 {
            0.0
        } else {
            100.0 * years.len() as f64 / f64::from(report.span())
        };
        Self {
            bucket,
            share_percent,
            last_before: before.checked_sub(1).map(|i| years[i]),
            next_after: years.get(after).copied(),
            count_before: before,
            first: years.first().copied(),
            last: years.last().copied(),
            mean_gap: gap_stats(&years).ok().map(|stats| stats.mean),
            years,
        }
    }

    /// Label of the summarised bucket.
    pub fn label(&self) -> &'static str {
        self.bucket.label()
    }
}

/// Summaries of every reported bucket, in print order.
pub fn summarize(report: &CoincidenceReport, current_year: i32) -> Vec<BucketSummary> {
    Bucket::REPORTED
        .into_iter()
        .map(|bucket| BucketSummary::new(report, bucket, current_year))
        .collect()
}
