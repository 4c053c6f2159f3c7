//! Error types for the kislev-coincidence crate.

use chrono::NaiveDate;
use kislev_holidays::HolidayError;

/// Error type for all fallible operations in the kislev-coincidence crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoincidenceError {
    /// Returned when the requested span is zero.
    #[error("span must be >= 1, got {span}")]
    InvalidSpan {
        /// The invalid span.
        span: u32,
    },

    /// Returned when the query range leaves the supported Gregorian range.
    #[error("year {year} is outside the supported Gregorian range")]
    InvalidDomain {
        /// The first offending year.
        year: i32,
    },

    /// Wraps a non-domain error from the holiday engines.
    #[error("holiday lookup failed: {reason}")]
    Holiday {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when an onset falls outside the month-day histogram window.
    #[error("onset {date} lies outside the 11-15..01-31 histogram window")]
    OutsideWindow {
        /// The offending onset.
        date: NaiveDate,
    },

    /// Returned when the report cannot be serialised.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the serialisation failure.
        reason: String,
    },
}

impl From<HolidayError> for CoincidenceError {
    fn from(e: HolidayError) -> Self {
        match e {
            HolidayError::InvalidDomain { year } => CoincidenceError::InvalidDomain { year },
            other => CoincidenceError::Holiday {
                reason: other.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for CoincidenceError {
    fn from(e: serde_json::Error) -> Self {
        CoincidenceError::Serialization {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_span() {
        let err = CoincidenceError::InvalidSpan { span: 0 };
        assert_eq!(err.to_string(), "span must be >= 1, got 0");
    }

    #[test]
    fn error_outside_window() {
        let err = CoincidenceError::OutsideWindow {
            date: NaiveDate::from_ymd_opt(2000, 3, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "onset 2000-03-01 lies outside the 11-15..01-31 histogram window"
        );
    }

    #[test]
    fn holiday_domain_error_maps_to_invalid_domain() {
        let err: CoincidenceError = HolidayError::InvalidDomain { year: 1500 }.into();
        assert_eq!(err, CoincidenceError::InvalidDomain { year: 1500 });
    }

    #[test]
    fn other_holiday_errors_keep_their_message() {
        let err: CoincidenceError = HolidayError::Calendar {
            reason: "boom".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "holiday lookup failed: calendar error: boom");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CoincidenceError>();
    }
}
