//! Hanukkah onset resolver.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use kislev_calendar::{
    GREGORIAN_START_YEAR, HebrewCalendar, KISLEV, LunisolarConverter, gregorian_year_days,
};

use crate::error::HolidayError;

/// Lunisolar month in which Hanukkah begins (Kislev).
pub const ONSET_MONTH: u8 = KISLEV;
/// Lunisolar day-of-month on which Hanukkah begins.
pub const ONSET_DAY: u8 = 25;

/// The Gregorian dates on which Hanukkah begins within one Gregorian year.
///
/// Because the Hebrew year drifts against the Gregorian year, a year can hold
/// zero, one or two onsets. Dates are kept in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<NaiveDate>", into = "Vec<NaiveDate>")]
pub struct Onsets(Vec<NaiveDate>);

impl Onsets {
    /// Creates an onset list, sorting the dates chronologically.
    pub fn new(mut dates: Vec<NaiveDate>) -> Self {
        dates.sort_unstable();
        Self(dates)
    }

    /// Returns the onset dates as a slice.
    pub fn as_slice(&self) -> &[NaiveDate] {
        &self.0
    }

    /// Returns the number of onsets (0, 1 or 2).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the onset fell entirely into a neighbouring year.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the onset dates in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, NaiveDate> {
        self.0.iter()
    }

    /// Consumes the list, returning the dates.
    pub fn into_vec(self) -> Vec<NaiveDate> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Onsets {
    type Item = &'a NaiveDate;
    type IntoIter = std::slice::Iter<'a, NaiveDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<NaiveDate>> for Onsets {
    fn from(dates: Vec<NaiveDate>) -> Self {
        Self::new(dates)
    }
}

impl From<Onsets> for Vec<NaiveDate> {
    fn from(onsets: Onsets) -> Self {
        onsets.0
    }
}

/// Finds Hanukkah onsets by scanning a Gregorian year day by day.
///
/// Generic over the [`LunisolarConverter`] so tests can substitute a stub
/// calendar; defaults to the arithmetic [`HebrewCalendar`].
#[derive(Debug, Clone, Default)]
pub struct HanukkahResolver<C = HebrewCalendar> {
    converter: C,
}

impl<C: LunisolarConverter> HanukkahResolver<C> {
    /// Creates a resolver backed by `converter`.
    pub fn new(converter: C) -> Self {
        Self { converter }
    }

    /// Returns the dates in `year` whose lunisolar date is 25 Kislev.
    ///
    /// Every Gregorian day of the year is converted in order, so the result
    /// is chronological and never leaves `year`. The reform year 1582 is
    /// scanned from October 15 onward.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError::InvalidDomain`] for years before 1582, before
    /// any conversion happens.
    pub fn starts(&self, year: i32) -> Result<Onsets, HolidayError> {
        if year < GREGORIAN_START_YEAR {
            return Err(HolidayError::InvalidDomain { year });
        }
        let dates: Vec<NaiveDate> = gregorian_year_days(year)?
            .into_iter()
            .filter(|&date| {
                self.converter.to_lunisolar(date).month_day() == (ONSET_MONTH, ONSET_DAY)
            })
            .collect();
        trace!(year, n_onsets = dates.len(), "scanned year");
        Ok(Onsets(dates))
    }
}

/// Returns the Hanukkah onset date(s) in `year` using the Hebrew calendar.
///
/// # Errors
///
/// Returns [`HolidayError::InvalidDomain`] for years before 1582.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use kislev_holidays::hanukkah_starts;
///
/// let onsets = hanukkah_starts(2024).unwrap();
/// assert_eq!(onsets.as_slice(), [NaiveDate::from_ymd_opt(2024, 12, 26).unwrap()]);
/// assert!(hanukkah_starts(3031).unwrap().is_empty());
/// ```
pub fn hanukkah_starts(year: i32) -> Result<Onsets, HolidayError> {
    HanukkahResolver::new(HebrewCalendar).starts(year)
}
