//! The lunisolar conversion seam.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A date in a lunisolar calendar: year, month and day-of-month.
///
/// Month numbering is owned by the calendar that produced the date. For
/// [`HebrewCalendar`](crate::HebrewCalendar) it is Nisan-first
/// (Tishri = 7, Kislev = 9, Adar II = 13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LunisolarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl LunisolarDate {
    /// Creates a date without validating it against any calendar.
    ///
    /// Use [`HebrewCalendar::date`](crate::HebrewCalendar::date) for a
    /// checked Hebrew date.
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month.
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        (self.month, self.day)
    }
}

/// Maps Gregorian dates onto a lunisolar calendar.
///
/// Implementations must be pure: the same date always yields the same
/// result and no state changes between calls.
pub trait LunisolarConverter {
    /// Converts a Gregorian date to its lunisolar equivalent.
    fn to_lunisolar(&self, date: NaiveDate) -> LunisolarDate;
}

impl<T: LunisolarConverter + ?Sized> LunisolarConverter for &T {
    fn to_lunisolar(&self, date: NaiveDate) -> LunisolarDate {
        (**self).to_lunisolar(date)
    }
}
