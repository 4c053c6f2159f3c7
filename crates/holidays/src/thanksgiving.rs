//! US Thanksgiving rule engine.
//!
//! The observance date has moved several times since the 1863 proclamation.
//! Rules are kept as a prioritised list and the first matching rule wins.
//! That ordering is historical data, including its quirks: the 1933 clause
//! of the modern rule is shadowed by the last-Thursday rule, so 1933 resolves
//! to the last Thursday of November.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use kislev_calendar::{first_weekday_of_month, last_weekday_of_month};

use crate::error::HolidayError;

/// Year of Lincoln's proclamation; earlier years have no federal date.
pub const FIRST_OBSERVED_YEAR: i32 = 1863;

/// The rule that fixes Thanksgiving in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThanksgivingRule {
    /// No federally consistent date (before 1863).
    Unobserved,
    /// Last Thursday of November (1863 proclamation).
    LastThursdayOfNovember,
    /// First Thursday of December (1865 proclamation).
    FirstThursdayOfDecember,
    /// First Thursday of November plus three weeks.
    FourthThursdayOfNovember,
}

struct Rule {
    applies: fn(i32) -> bool,
    rule: ThanksgivingRule,
}

fn before_proclamation(year: i32) -> bool {
    year < FIRST_OBSERVED_YEAR
}

fn lincoln_era(year: i32) -> bool {
    (FIRST_OBSERVED_YEAR..1941).contains(&year) && year != 1865
}

fn johnson_1865(year: i32) -> bool {
    year == 1865
}

fn modern_era(year: i32) -> bool {
    year >= 1941 || year == 1933
}

/// Evaluated in order; the first rule whose predicate holds applies.
const RULES: [Rule; 4] = [
    Rule {
        applies: before_proclamation,
        rule: ThanksgivingRule::Unobserved,
    },
    Rule {
        applies: lincoln_era,
        rule: ThanksgivingRule::LastThursdayOfNovember,
    },
    Rule {
        applies: johnson_1865,
        rule: ThanksgivingRule::FirstThursdayOfDecember,
    },
    Rule {
        applies: modern_era,
        rule: ThanksgivingRule::FourthThursdayOfNovember,
    },
];

impl ThanksgivingRule {
    /// Returns the rule in force for `year`.
    pub fn for_year(year: i32) -> Self {
        RULES
            .iter()
            .find(|r| (r.applies)(year))
            .map_or(ThanksgivingRule::Unobserved, |r| r.rule)
    }

    /// Applies this rule to `year`.
    ///
    /// Returns `Ok(None)` for [`ThanksgivingRule::Unobserved`].
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError::Calendar`] if the year cannot be represented.
    pub fn date(self, year: i32) -> Result<Option<NaiveDate>, HolidayError> {
        let date = match self {
            Self::Unobserved => return Ok(None),
            Self::LastThursdayOfNovember => last_weekday_of_month(year, 11, Weekday::Thu)?,
            Self::FirstThursdayOfDecember => first_weekday_of_month(year, 12, Weekday::Thu)?,
            Self::FourthThursdayOfNovember => {
                let first = first_weekday_of_month(year, 11, Weekday::Thu)?;
                first
                    .checked_add_days(chrono::Days::new(21))
                    .ok_or(HolidayError::Calendar {
                        reason: format!("date overflow adding three weeks to {first}"),
                    })?
            }
        };
        Ok(Some(date))
    }

    /// Short human-readable description of the rule.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Unobserved => "not observed",
            Self::LastThursdayOfNovember => "last Thursday of November",
            Self::FirstThursdayOfDecember => "first Thursday of December",
            Self::FourthThursdayOfNovember => "first Thursday of November plus three weeks",
        }
    }
}

/// Returns the US Thanksgiving date for `year`, or `None` before 1863.
///
/// # Errors
///
/// Returns [`HolidayError::Calendar`] if the year cannot be represented.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use kislev_holidays::thanksgiving;
///
/// assert_eq!(
///     thanksgiving(2024).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 11, 28)
/// );
/// assert_eq!(thanksgiving(1776).unwrap(), None);
/// ```
pub fn thanksgiving(year: i32) -> Result<Option<NaiveDate>, HolidayError> {
    ThanksgivingRule::for_year(year).date(year)
}
