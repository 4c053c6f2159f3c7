//! Month-day and weekday histograms of onset years.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::ser::{Serialize, SerializeMap, Serializer};

use kislev_calendar::{WEEKDAYS, weekday_name};

use crate::error::CoincidenceError;

/// Number of month-days in the histogram window (11-15 through 01-31).
pub const WINDOW_LEN: usize = 78;

// (month, first day, last day) of each window segment, in window order.
const WINDOW: [(u8, u8, u8); 3] = [(11, 15, 30), (12, 1, 31), (1, 1, 31)];

/// A month and day without a year, rendered `MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// Creates a month-day. No validation against month lengths is done.
    pub const fn new(month: u8, day: u8) -> Self {
        Self { month, day }
    }

    /// Month-day of `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }

    /// Returns the month (1-12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of the month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Position of this month-day in the histogram window, if inside it.
    pub fn window_index(self) -> Option<usize> {
        let mut offset = 0;
        for (month, first, last) in WINDOW {
            if self.month == month && (first..=last).contains(&self.day) {
                return Some(offset + usize::from(self.day - first));
            }
            offset += usize::from(last - first + 1);
        }
        None
    }

    /// All month-days of the histogram window in order.
    pub fn window() -> impl Iterator<Item = MonthDay> {
        WINDOW.into_iter().flat_map(|(month, first, last)| {
            (first..=last).map(move |day| MonthDay::new(month, day))
        })
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl Serialize for MonthDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Onset years keyed by month-day over the 11-15..01-31 window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateHistogram {
    years: Vec<Vec<i32>>,
}

impl DateHistogram {
    /// Creates a histogram with all 78 keys present and empty.
    pub fn new() -> Self {
        Self {
            years: vec![Vec::new(); WINDOW_LEN],
        }
    }

    /// Records `year` under the month-day of `onset`.
    ///
    /// # Errors
    ///
    /// Returns [`CoincidenceError::OutsideWindow`] if the month-day is not in
    /// the window.
    pub fn record(&mut self, onset: NaiveDate, year: i32) -> Result<(), CoincidenceError> {
        let idx = MonthDay::from_date(onset)
            .window_index()
            .ok_or(CoincidenceError::OutsideWindow { date: onset })?;
        self.years[idx].push(year);
        Ok(())
    }

    /// Years recorded under `key`; empty outside the window.
    pub fn get(&self, key: MonthDay) -> &[i32] {
        key.window_index()
            .map_or(&[][..], |idx| self.years[idx].as_slice())
    }

    /// Iterates keys in window order with their years.
    pub fn iter(&self) -> impl Iterator<Item = (MonthDay, &[i32])> {
        MonthDay::window().zip(self.years.iter().map(Vec::as_slice))
    }

    /// Entries from `from` through `to` inclusive, in window order.
    ///
    /// Empty if either bound lies outside the window or `to` precedes `from`.
    pub fn between(&self, from: MonthDay, to: MonthDay) -> Vec<(MonthDay, &[i32])> {
        match (from.window_index(), to.window_index()) {
            (Some(lo), Some(hi)) if lo <= hi => self.iter().skip(lo).take(hi - lo + 1).collect(),
            _ => Vec::new(),
        }
    }

    /// Total number of recorded onsets.
    pub fn total(&self) -> usize {
        self.years.iter().map(Vec::len).sum()
    }
}

impl Default for DateHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for DateHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(WINDOW_LEN))?;
        for (key, years) in self.iter() {
            map.serialize_entry(&key, years)?;
        }
        map.end()
    }
}

/// Onset years keyed by weekday, Sunday first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekdayHistogram {
    years: [Vec<i32>; 7],
}

impl WeekdayHistogram {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `year` under the weekday of `onset`.
    pub fn record(&mut self, onset: NaiveDate, year: i32) {
        self.years[onset.weekday().num_days_from_sunday() as usize].push(year);
    }

    /// Years recorded under `weekday`.
    pub fn get(&self, weekday: Weekday) -> &[i32] {
        &self.years[weekday.num_days_from_sunday() as usize]
    }

    /// Iterates Sunday through Saturday with their years.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[i32])> {
        WEEKDAYS.into_iter().map(|wd| (wd, self.get(wd)))
    }

    /// Total number of recorded onsets.
    pub fn total(&self) -> usize {
        self.years.iter().map(Vec::len).sum()
    }
}

impl Serialize for WeekdayHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(7))?;
        for (weekday, years) in self.iter() {
            map.serialize_entry(weekday_name(weekday), years)?;
        }
        map.end()
    }
}
