//! Error types for the kislev-holidays crate.

use kislev_calendar::CalendarError;

/// Error type for all fallible operations in the kislev-holidays crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HolidayError {
    /// Returned when a query reaches before the Gregorian reform (1582-10-15).
    #[error("year {year} is outside the Gregorian calendar (valid from 1582-10-15)")]
    InvalidDomain {
        /// The rejected Gregorian year.
        year: i32,
    },

    /// Wraps an error originating from the kislev-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },
}

impl From<CalendarError> for HolidayError {
    fn from(e: CalendarError) -> Self {
        match e {
            CalendarError::YearBeforeGregorian { year } => HolidayError::InvalidDomain { year },
            other => HolidayError::Calendar {
                reason: other.to_string(),
            },
        }
    }
}
