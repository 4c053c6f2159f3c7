//! The aggregated coincidence report.

use chrono::NaiveDate;
use serde::Serialize;

use crate::bucket::Bucket;
use crate::error::CoincidenceError;
use crate::histogram::{DateHistogram, WeekdayHistogram};

/// Classification of every year in `[start_year, end_year)`.
///
/// Bucket lists are ascending. The derived buckets are computed once when
/// the report is finished and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoincidenceReport {
    start_year: i32,
    end_year: i32,
    christmas_day: Vec<i32>,
    christmas_eve: Vec<i32>,
    thanksgiving: Vec<i32>,
    day_after_thanksgiving: Vec<i32>,
    no_hanukkah: Vec<i32>,
    christmas: Vec<i32>,
    thanksgiving_any: Vec<i32>,
    by_date: DateHistogram,
    by_weekday: WeekdayHistogram,
}

impl CoincidenceReport {
    /// First year of the range (inclusive).
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// End of the range (exclusive).
    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Number of years covered.
    pub fn span(&self) -> u32 {
        self.end_year.abs_diff(self.start_year)
    }

    /// Years in `bucket`, ascending.
    pub fn bucket(&self, bucket: Bucket) -> &[i32] {
        match bucket {
            Bucket::ChristmasDay => &self.christmas_day,
            Bucket::ChristmasEve => &self.christmas_eve,
            Bucket::Christmas => &self.christmas,
            Bucket::NoHanukkah => &self.no_hanukkah,
            Bucket::ThanksgivingAny => &self.thanksgiving_any,
            Bucket::Thanksgiving => &self.thanksgiving,
            Bucket::DayAfterThanksgiving => &self.day_after_thanksgiving,
        }
    }

    /// Onset years by month-day.
    pub fn by_date(&self) -> &DateHistogram {
        &self.by_date
    }

    /// Onset years by weekday.
    pub fn by_weekday(&self) -> &WeekdayHistogram {
        &self.by_weekday
    }

    /// Total number of onsets found in the range.
    pub fn onset_count(&self) -> usize {
        self.by_date.total()
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CoincidenceError::Serialization`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, CoincidenceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Accumulates per-year results in chronological order.
#[derive(Debug)]
pub(crate) struct ReportBuilder {
    start_year: i32,
    end_year: i32,
    christmas_day: Vec<i32>,
    christmas_eve: Vec<i32>,
    thanksgiving: Vec<i32>,
    day_after_thanksgiving: Vec<i32>,
    no_hanukkah: Vec<i32>,
    by_date: DateHistogram,
    by_weekday: WeekdayHistogram,
}

impl ReportBuilder {
    pub(crate) fn new(start_year: i32, end_year: i32) -> Self {
        Self {
            start_year,
            end_year,
            christmas_day: Vec::new(),
            christmas_eve: Vec::new(),
            thanksgiving: Vec::new(),
            day_after_thanksgiving: Vec::new(),
            no_hanukkah: Vec::new(),
            by_date: DateHistogram::new(),
            by_weekday: WeekdayHistogram::new(),
        }
    }

    /// Adds `year` to a primary bucket. Derived buckets are ignored.
    pub(crate) fn push(&mut self, bucket: Bucket, year: i32) {
        let list = match bucket {
            Bucket::ChristmasDay => &mut self.christmas_day,
            Bucket::ChristmasEve => &mut self.christmas_eve,
            Bucket::Thanksgiving => &mut self.thanksgiving,
            Bucket::DayAfterThanksgiving => &mut self.day_after_thanksgiving,
            Bucket::NoHanukkah => &mut self.no_hanukkah,
            Bucket::Christmas | Bucket::ThanksgivingAny => return,
        };
        list.push(year);
    }

    pub(crate) fn record_onset(
        &mut self,
        onset: NaiveDate,
        year: i32,
    ) -> Result<(), CoincidenceError> {
        self.by_date.record(onset, year)?;
        self.by_weekday.record(onset, year);
        Ok(())
    }

    pub(crate) fn finish(self) -> CoincidenceReport {
        let mut christmas: Vec<i32> = self
            .christmas_day
            .iter()
            .chain(&self.christmas_eve)
            .copied()
            .collect();
        christmas.sort_unstable();
        christmas.dedup();

        let mut thanksgiving_any: Vec<i32> = self
            .thanksgiving
            .iter()
            .chain(&self.day_after_thanksgiving)
            .copied()
            .collect();
        thanksgiving_any.sort_unstable();

        CoincidenceReport {
            start_year: self.start_year,
            end_year: self.end_year,
            christmas_day: self.christmas_day,
            christmas_eve: self.christmas_eve,
            thanksgiving: self.thanksgiving,
            day_after_thanksgiving: self.day_after_thanksgiving,
            no_hanukkah: self.no_hanukkah,
            christmas,
            thanksgiving_any,
            by_date: self.by_date,
            by_weekday: self.by_weekday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> CoincidenceReport {
        let mut builder = ReportBuilder::new(2000, 2010);
        builder.push(Bucket::ChristmasEve, 2001);
        builder.push(Bucket::ChristmasDay, 2001);
        builder.push(Bucket::ChristmasDay, 2005);
        builder.push(Bucket::DayAfterThanksgiving, 2002);
        builder.push(Bucket::Thanksgiving, 2008);
        builder.push(Bucket::Thanksgiving, 2003);
        builder.push(Bucket::Christmas, 1999);
        builder.push(Bucket::NoHanukkah, 2009);
        builder.record_onset(ymd(2005, 12, 26), 2005).unwrap();
        builder.finish()
    }

    #[test]
    fn christmas_union_is_deduplicated() {
        assert_eq!(sample().bucket(Bucket::Christmas), [2001, 2005]);
    }

    #[test]
    fn thanksgiving_union_is_sorted() {
        assert_eq!(sample().bucket(Bucket::ThanksgivingAny), [2002, 2003, 2008]);
    }

    #[test]
    fn accessors() {
        let report = sample();
        assert_eq!(report.start_year(), 2000);
        assert_eq!(report.end_year(), 2010);
        assert_eq!(report.span(), 10);
        assert_eq!(report.bucket(Bucket::NoHanukkah), [2009]);
        assert_eq!(report.onset_count(), 1);
    }

    #[test]
    fn json_contains_buckets_and_histograms() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["start_year"], 2000);
        assert_eq!(json["christmas"], serde_json::json!([2001, 2005]));
        assert_eq!(json["by_date"]["12-26"], serde_json::json!([2005]));
        assert_eq!(json["by_weekday"]["Monday"], serde_json::json!([2005]));
    }
}
