//! Recurrence statistics for year buckets.

mod error;

pub use error::StatsError;

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Differences between consecutive years.
///
/// Expects ascending input; an input of length n yields n - 1 gaps.
pub fn consecutive_gaps(years: &[i32]) -> Vec<i32> {
    years.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Gaps between consecutive occurrences and their mean.
#[derive(Debug, Clone, PartialEq)]
pub struct GapStats {
    /// Year differences, one per consecutive pair.
    pub gaps: Vec<i32>,
    /// Mean recurrence interval in years.
    pub mean: f64,
}

/// Computes the recurrence interval statistics of an ascending year list.
///
/// # Errors
///
/// Returns [`StatsError::InvalidInput`] if fewer than two years are given.
pub fn gap_stats(years: &[i32]) -> Result<GapStats, StatsError> {
    if years.len() < 2 {
        return Err(StatsError::InvalidInput { len: years.len() });
    }
    let gaps = consecutive_gaps(years);
    let as_f64: Vec<f64> = gaps.iter().map(|&g| f64::from(g)).collect();
    Ok(GapStats {
        mean: mean(&as_f64),
        gaps,
    })
}
