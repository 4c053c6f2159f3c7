//! Day sequences over a Gregorian year.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::gregorian::{GREGORIAN_START_YEAR, gregorian_start};

/// Generates every Gregorian day of `year` in chronological order.
///
/// The reform year 1582 starts on October 15; earlier days of that year
/// never existed in the Gregorian calendar.
///
/// # Errors
///
/// Returns [`CalendarError::YearBeforeGregorian`] for years before 1582 and
/// [`CalendarError::OutOfRange`] if the year cannot be represented.
///
/// # Example
///
/// ```
/// use kislev_calendar::gregorian_year_days;
///
/// assert_eq!(gregorian_year_days(2024).unwrap().len(), 366);
/// assert_eq!(gregorian_year_days(1582).unwrap().len(), 78);
/// ```
pub fn gregorian_year_days(year: i32) -> Result<Vec<NaiveDate>, CalendarError> {
    if year < GREGORIAN_START_YEAR {
        return Err(CalendarError::YearBeforeGregorian { year });
    }
    let first = if year == GREGORIAN_START_YEAR {
        gregorian_start()
    } else {
        NaiveDate::from_ymd_opt(year, 1, 1).ok_or(CalendarError::OutOfRange { year })?
    };
    // Dec 31 must exist too, otherwise the sequence would be cut short.
    NaiveDate::from_ymd_opt(year, 12, 31).ok_or(CalendarError::OutOfRange { year })?;

    Ok(std::iter::successors(Some(first), |d| d.succ_opt())
        .take_while(|d| d.year() == year)
        .collect())
}
