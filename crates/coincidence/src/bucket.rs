//! Classification buckets.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A named classification of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// Onset on December 26: first candle on the evening of Christmas Day.
    ChristmasDay,
    /// Onset on December 25: first candle on Christmas Eve.
    ChristmasEve,
    /// Union of [`Bucket::ChristmasDay`] and [`Bucket::ChristmasEve`], deduplicated.
    Christmas,
    /// No onset in the Gregorian year.
    NoHanukkah,
    /// Concatenation of [`Bucket::Thanksgiving`] and [`Bucket::DayAfterThanksgiving`].
    ThanksgivingAny,
    /// Onset on the month-day of Thanksgiving.
    Thanksgiving,
    /// Onset on the month-day of the day after Thanksgiving.
    DayAfterThanksgiving,
}

impl Bucket {
    /// Every bucket, primary ones first.
    pub const ALL: [Bucket; 7] = [
        Bucket::ChristmasDay,
        Bucket::ChristmasEve,
        Bucket::Thanksgiving,
        Bucket::DayAfterThanksgiving,
        Bucket::NoHanukkah,
        Bucket::Christmas,
        Bucket::ThanksgivingAny,
    ];

    /// Buckets printed in a report, in print order.
    pub const REPORTED: [Bucket; 5] = [
        Bucket::ChristmasDay,
        Bucket::ChristmasEve,
        Bucket::Christmas,
        Bucket::NoHanukkah,
        Bucket::ThanksgivingAny,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Bucket::ChristmasDay => "Start on Christmas day",
            Bucket::ChristmasEve => "Start on Christmas eve",
            Bucket::Christmas => "overlap Christmas",
            Bucket::NoHanukkah => "No Hanukkah",
            Bucket::ThanksgivingAny => "overlap Thanksgiving",
            Bucket::Thanksgiving => "Start on Thanksgiving",
            Bucket::DayAfterThanksgiving => "Start on the day after Thanksgiving",
        }
    }

    /// Returns `true` for buckets computed from other buckets.
    pub fn is_derived(self) -> bool {
        matches!(self, Bucket::Christmas | Bucket::ThanksgivingAny)
    }
}

/// Primary buckets an onset date falls into.
///
/// Thanksgiving matches compare month and day only; the day after
/// Thanksgiving may fall in December.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use kislev_coincidence::{Bucket, classify_onset};
///
/// let onset = NaiveDate::from_ymd_opt(2013, 11, 28).unwrap();
/// let turkey = NaiveDate::from_ymd_opt(2013, 11, 28);
/// assert_eq!(classify_onset(onset, turkey), vec![Bucket::Thanksgiving]);
/// ```
pub fn classify_onset(onset: NaiveDate, thanksgiving: Option<NaiveDate>) -> Vec<Bucket> {
    let mut buckets = Vec::new();
    match (onset.month(), onset.day()) {
        (12, 26) => buckets.push(Bucket::ChristmasDay),
        (12, 25) => buckets.push(Bucket::ChristmasEve),
        _ => {}
    }
    if let Some(turkey) = thanksgiving {
        if same_month_day(onset, turkey) {
            buckets.push(Bucket::Thanksgiving);
        }
        if turkey
            .succ_opt()
            .is_some_and(|after| same_month_day(onset, after))
        {
            buckets.push(Bucket::DayAfterThanksgiving);
        }
    }
    buckets
}

fn same_month_day(a: NaiveDate, b: NaiveDate) -> bool {
    (a.month(), a.day()) == (b.month(), b.day())
}
