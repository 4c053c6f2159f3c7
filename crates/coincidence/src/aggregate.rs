//! The per-year aggregation pass.

use tracing::{debug, info};

use kislev_calendar::LunisolarConverter;
use kislev_holidays::HolidayLookup;

use crate::bucket::{Bucket, classify_onset};
use crate::config::AggregateConfig;
use crate::error::CoincidenceError;
use crate::report::{CoincidenceReport, ReportBuilder};

/// Classifies every year of the configured range.
///
/// Years are walked in ascending order, so every primary bucket comes out
/// sorted. A year without an onset lands only in [`Bucket::NoHanukkah`];
/// every onset is recorded in both histograms.
///
/// # Errors
///
/// Returns [`CoincidenceError::InvalidSpan`] or
/// [`CoincidenceError::InvalidDomain`] before any year is resolved if the
/// configuration is invalid, and [`CoincidenceError::OutsideWindow`] if an
/// onset falls outside the month-day histogram window.
///
/// # Example
///
/// ```
/// use kislev_coincidence::{AggregateConfig, Bucket, aggregate};
/// use kislev_holidays::HolidayLookup;
///
/// let mut lookup: HolidayLookup = HolidayLookup::default();
/// let config = AggregateConfig::new(2025).with_span(100);
/// let report = aggregate(&mut lookup, &config).unwrap();
/// assert_eq!(report.bucket(Bucket::ChristmasDay), [2005, 2024, 2035, 2054]);
/// ```
#[tracing::instrument(skip_all, fields(start = config.start_year(), end = config.end_year()))]
pub fn aggregate<C: LunisolarConverter>(
    lookup: &mut HolidayLookup<'_, C>,
    config: &AggregateConfig,
) -> Result<CoincidenceReport, CoincidenceError> {
    config.validate()?;

    let mut builder = ReportBuilder::new(config.start_year(), config.end_year());
    for year in config.years() {
        let onsets = lookup.hanukkah_starts(year)?;
        let thanksgiving = lookup.thanksgiving(year)?;

        if onsets.is_empty() {
            builder.push(Bucket::NoHanukkah, year);
        }
        for &onset in &onsets {
            for bucket in classify_onset(onset, thanksgiving) {
                builder.push(bucket, year);
            }
            builder.record_onset(onset, year)?;
        }

        if year % 100 == 99 {
            debug!(through = year, "century processed");
        }
    }

    let report = builder.finish();
    info!(
        years = report.span(),
        onsets = report.onset_count(),
        empty_years = report.bucket(Bucket::NoHanukkah).len(),
        "aggregation complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};
    use kislev_calendar::LunisolarDate;
    use kislev_holidays::{HanukkahResolver, ONSET_DAY, ONSET_MONTH};

    /// Places the onset on a fixed Gregorian month-day every year, except
    /// even years which get none.
    struct EveryOddYear(u32, u32);

    impl LunisolarConverter for EveryOddYear {
        fn to_lunisolar(&self, date: NaiveDate) -> LunisolarDate {
            if date.year() % 2 != 0 && (date.month(), date.day()) == (self.0, self.1) {
                LunisolarDate::new(date.year(), ONSET_MONTH, ONSET_DAY)
            } else {
                LunisolarDate::new(date.year(), 1, 1)
            }
        }
    }

    #[test]
    fn empty_years_and_christmas_eve_from_stub() {
        let mut lookup = HolidayLookup::new(HanukkahResolver::new(EveryOddYear(12, 25)));
        let config = AggregateConfig::new(2005).with_span(10);
        let report = aggregate(&mut lookup, &config).unwrap();
        assert_eq!(report.bucket(Bucket::NoHanukkah), [2000, 2002, 2004, 2006, 2008]);
        assert_eq!(report.bucket(Bucket::ChristmasEve), [2001, 2003, 2005, 2007, 2009]);
        assert_eq!(report.bucket(Bucket::Christmas), report.bucket(Bucket::ChristmasEve));
        assert_eq!(report.onset_count(), 5);
    }

    #[test]
    fn onset_outside_window_is_an_error() {
        let mut lookup = HolidayLookup::new(HanukkahResolver::new(EveryOddYear(6, 1)));
        let config = AggregateConfig::new(2001).with_span(2);
        let err = aggregate(&mut lookup, &config).unwrap_err();
        assert_eq!(
            err,
            CoincidenceError::OutsideWindow {
                date: NaiveDate::from_ymd_opt(2001, 6, 1).unwrap()
            }
        );
    }

    #[test]
    fn invalid_span_fails_before_work() {
        let mut lookup = HolidayLookup::new(HanukkahResolver::new(EveryOddYear(6, 1)));
        let config = AggregateConfig::new(2001).with_span(0);
        assert_eq!(
            aggregate(&mut lookup, &config).unwrap_err(),
            CoincidenceError::InvalidSpan { span: 0 }
        );
    }
}
