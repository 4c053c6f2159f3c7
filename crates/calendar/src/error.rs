//! Error types for the kislev-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the kislev-calendar crate.
///
/// Covers dates that fall before the Gregorian reform, years outside the
/// range `chrono` can represent, and invalid month numbers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a date precedes 1582-10-15.
    #[error("date {date} precedes the Gregorian calendar (valid from 1582-10-15)")]
    DateBeforeGregorian {
        /// The rejected date.
        date: NaiveDate,
    },

    /// Returned when a whole year precedes the Gregorian reform year.
    #[error("year {year} precedes the Gregorian calendar (valid from 1582)")]
    YearBeforeGregorian {
        /// The rejected year.
        year: i32,
    },

    /// Returned when a year cannot be represented as a Gregorian date.
    #[error("year {year} is outside the supported date range")]
    OutOfRange {
        /// The unrepresentable year.
        year: i32,
    },

    /// Returned when a month number is outside the calendar's range.
    #[error("invalid month: {month} (must be 1..={max_month})")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
        /// The last valid month number for the year in question.
        max_month: u8,
    },

}
