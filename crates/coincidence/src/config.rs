//! Configuration for a coincidence query.

use std::ops::Range;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use kislev_calendar::GREGORIAN_START_YEAR;

use crate::error::CoincidenceError;

/// Default width of the query range in years.
pub const DEFAULT_SPAN: u32 = 2000;

/// Year range of a coincidence query, centered on one year.
///
/// The range is `[max(center_year - span / 2, 1582), start + span)`, with
/// the half rounded to even. It is clamped at the Gregorian reform but keeps
/// its full width.
///
/// # Example
///
/// ```
/// use kislev_coincidence::AggregateConfig;
///
/// let config = AggregateConfig::new(2025).with_span(100);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.years(), 1975..2075);
///
/// let clamped = AggregateConfig::new(1600).with_span(100);
/// assert_eq!(clamped.years(), 1582..1682);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateConfig {
    center_year: i32,
    span: u32,
}

impl AggregateConfig {
    /// Creates a configuration centered on `center_year`.
    ///
    /// Defaults: `span = 2000`.
    pub fn new(center_year: i32) -> Self {
        Self {
            center_year,
            span: DEFAULT_SPAN,
        }
    }

    /// Sets the width of the range in years.
    pub fn with_span(mut self, span: u32) -> Self {
        self.span = span;
        self
    }

    /// Returns the year the range is centered on.
    pub fn center_year(&self) -> i32 {
        self.center_year
    }

    /// Returns the width of the range in years.
    pub fn span(&self) -> u32 {
        self.span
    }

    /// `span / 2` rounded half to even: spans 5 and 7 give 2 and 4.
    fn half_span(&self) -> u32 {
        let half = self.span / 2;
        if self.span % 2 == 1 && half % 2 == 1 {
            half + 1
        } else {
            half
        }
    }

    fn bounds(&self) -> (i64, i64) {
        let start = (i64::from(self.center_year) - i64::from(self.half_span()))
            .max(i64::from(GREGORIAN_START_YEAR));
        (start, start + i64::from(self.span))
    }

    /// First year of the range (inclusive).
    pub fn start_year(&self) -> i32 {
        // start never exceeds max(center_year, 1582)
        self.bounds().0 as i32
    }

    /// End of the range (exclusive), saturating at `i32::MAX`.
    pub fn end_year(&self) -> i32 {
        i32::try_from(self.bounds().1).unwrap_or(i32::MAX)
    }

    /// The queried years in ascending order.
    pub fn years(&self) -> Range<i32> {
        self.start_year()..self.end_year()
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the span is zero or the last year of the range
    /// cannot be represented as a date.
    pub fn validate(&self) -> Result<(), CoincidenceError> {
        if self.span == 0 {
            return Err(CoincidenceError::InvalidSpan { span: self.span });
        }
        let last = self.bounds().1 - 1;
        if last > i64::from(NaiveDate::MAX.year()) {
            return Err(CoincidenceError::InvalidDomain {
                year: i32::try_from(last).unwrap_or(i32::MAX),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AggregateConfig::new(2025);
        assert_eq!(cfg.center_year(), 2025);
        assert_eq!(cfg.span(), DEFAULT_SPAN);
        assert_eq!(cfg.years(), 1582..3582);
    }

    #[test]
    fn test_default_span_unclamped() {
        let cfg = AggregateConfig::new(3000);
        assert_eq!(cfg.years(), 2000..4000);
    }

    #[test]
    fn test_odd_span_rounds_half_to_even() {
        // 2.5 -> 2, 3.5 -> 4, 4.5 -> 4
        assert_eq!(AggregateConfig::new(2000).with_span(5).years(), 1998..2003);
        assert_eq!(AggregateConfig::new(3000).with_span(7).years(), 2996..3003);
        assert_eq!(AggregateConfig::new(3000).with_span(9).years(), 2996..3005);
        assert_eq!(AggregateConfig::new(3000).with_span(1).years(), 3000..3001);
    }

    #[test]
    fn test_clamped_at_reform() {
        let cfg = AggregateConfig::new(1500).with_span(10);
        assert_eq!(cfg.start_year(), 1582);
        assert_eq!(cfg.end_year(), 1592);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_zero_span_rejected() {
        let err = AggregateConfig::new(2025).with_span(0).validate().unwrap_err();
        assert_eq!(err, CoincidenceError::InvalidSpan { span: 0 });
    }

    #[test]
    fn test_beyond_representable_range_rejected() {
        let cfg = AggregateConfig::new(i32::MAX).with_span(2);
        assert!(matches!(
            cfg.validate(),
            Err(CoincidenceError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn test_last_representable_year_accepted() {
        let max = NaiveDate::MAX.year();
        let cfg = AggregateConfig::new(max).with_span(2);
        assert_eq!(cfg.years(), max - 1..max + 1);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_serde_shape() {
        let cfg = AggregateConfig::new(2025).with_span(100);
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(json, r#"{"center_year":2025,"span":100}"#);
    }
}
