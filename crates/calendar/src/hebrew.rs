//! Hebrew calendar backed by `calendrical_calculations`.
//!
//! Months are numbered from Nisan (1) through Elul (6), Tishri (7) through
//! Adar (12), with Adar II (13) in leap years. The civil year starts on
//! 1 Tishri.

use calendrical_calculations::hebrew::BookHebrew;
use calendrical_calculations::rata_die::RataDie;
use chrono::{Datelike, NaiveDate};

use crate::converter::{LunisolarConverter, LunisolarDate};

/// Nisan, the first month in the ecclesiastical numbering.
pub const NISAN: u8 = 1;
/// Tishri, the first month of the civil year.
pub const TISHRI: u8 = 7;
/// Kislev, the month in which Hanukkah begins.
pub const KISLEV: u8 = 9;
/// Adar II, present only in leap years.
pub const ADAR_II: u8 = 13;

/// The arithmetic Hebrew calendar.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use kislev_calendar::{HebrewCalendar, LunisolarConverter};
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 26).unwrap();
/// let hebrew = HebrewCalendar.to_lunisolar(date);
/// assert_eq!((hebrew.year(), hebrew.month(), hebrew.day()), (5785, 9, 25));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HebrewCalendar;

impl LunisolarConverter for HebrewCalendar {
    fn to_lunisolar(&self, date: NaiveDate) -> LunisolarDate {
        // chrono and R.D. both count 0001-01-01 as day 1.
        let fixed = RataDie::new(i64::from(date.num_days_from_ce()));
        let hebrew = BookHebrew::book_hebrew_from_fixed(fixed);
        LunisolarDate::new(hebrew.year, hebrew.month, hebrew.day)
    }
}
