use chrono::{NaiveDate, Weekday};
use kislev_coincidence::{AggregateConfig, Bucket, CoincidenceError, MonthDay, aggregate};
use kislev_holidays::{HolidayLookup, MemoryCache, Onsets, hanukkah_starts};

fn hebrew<'a>() -> HolidayLookup<'a> {
    HolidayLookup::default()
}

#[test]
fn century_around_2026() {
    let config = AggregateConfig::new(2026).with_span(100);
    let report = aggregate(&mut hebrew(), &config).unwrap();

    assert_eq!((report.start_year(), report.end_year()), (1976, 2076));
    assert_eq!(report.bucket(Bucket::ChristmasEve), [1978, 2016, 2027, 2073]);
    assert_eq!(report.bucket(Bucket::ChristmasDay), [2005, 2024, 2035, 2054]);
    assert_eq!(
        report.bucket(Bucket::Christmas),
        [1978, 2005, 2016, 2024, 2027, 2035, 2054, 2073]
    );
    assert_eq!(report.bucket(Bucket::Thanksgiving), [2013]);
    assert_eq!(report.bucket(Bucket::DayAfterThanksgiving), [2070]);
    assert_eq!(report.bucket(Bucket::ThanksgivingAny), [2013, 2070]);
    assert!(report.bucket(Bucket::NoHanukkah).is_empty());
    assert_eq!(report.onset_count(), 100);
}

#[test]
fn histograms_place_known_onsets() {
    let config = AggregateConfig::new(2026).with_span(100);
    let report = aggregate(&mut hebrew(), &config).unwrap();

    assert!(report.by_date().get(MonthDay::new(11, 28)).contains(&2013));
    assert!(report.by_date().get(MonthDay::new(12, 2)).contains(&2075));
    assert!(report.by_weekday().get(Weekday::Fri).contains(&1976));
    assert!(report.by_weekday().get(Weekday::Mon).contains(&1977));
    assert!(report.by_weekday().get(Weekday::Thu).contains(&2013));
    assert!(report.by_weekday().get(Weekday::Mon).contains(&2075));
    assert_eq!(report.by_weekday().total(), report.by_date().total());
}

#[test]
fn long_range_reaches_empty_and_double_years() {
    let mut cache: MemoryCache<Onsets> = MemoryCache::new();
    let config = AggregateConfig::new(2800).with_span(1600);
    let report = {
        let mut lookup = hebrew().with_onset_cache(&mut cache);
        aggregate(&mut lookup, &config).unwrap()
    };

    assert!(report.bucket(Bucket::ChristmasDay).contains(&2024));
    assert!(report.bucket(Bucket::NoHanukkah).contains(&3031));

    // Every year was resolved exactly once and the buckets agree with it.
    assert_eq!(cache.len(), 1600);
    let mut onsets = 0;
    for (year, found) in cache.iter() {
        let empty = report.bucket(Bucket::NoHanukkah).binary_search(&year).is_ok();
        assert_eq!(empty, found.is_empty(), "year {year}");
        onsets += found.len();
    }
    assert_eq!(report.onset_count(), onsets);
    assert_eq!(report.by_weekday().total(), onsets);
}

#[test]
fn range_is_clamped_at_reform() {
    let config = AggregateConfig::new(1590).with_span(20);
    let report = aggregate(&mut hebrew(), &config).unwrap();
    assert_eq!((report.start_year(), report.end_year()), (1582, 1602));
    assert_eq!(report.onset_count(), 20);
}

#[test]
fn cached_and_uncached_reports_match() {
    let config = AggregateConfig::new(3040).with_span(30);
    let uncached = aggregate(&mut hebrew(), &config).unwrap();

    let mut onsets: MemoryCache<Onsets> = MemoryCache::new();
    let mut turkeys: MemoryCache<Option<NaiveDate>> = MemoryCache::new();
    let mut lookup = hebrew()
        .with_onset_cache(&mut onsets)
        .with_thanksgiving_cache(&mut turkeys);
    let cold = aggregate(&mut lookup, &config).unwrap();
    let warm = aggregate(&mut lookup, &config).unwrap();

    assert_eq!(cold, uncached);
    assert_eq!(warm, uncached);
    assert_eq!(uncached.bucket(Bucket::NoHanukkah), [3031, 3050]);
}

#[test]
fn zero_span_is_rejected() {
    let config = AggregateConfig::new(2026).with_span(0);
    assert_eq!(
        aggregate(&mut hebrew(), &config).unwrap_err(),
        CoincidenceError::InvalidSpan { span: 0 }
    );
}

#[test]
fn json_report_round_trips_through_value() {
    let config = AggregateConfig::new(2026).with_span(10);
    let report = aggregate(&mut hebrew(), &config).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["start_year"], 2021);
    assert_eq!(json["christmas_day"], serde_json::json!([2024]));
    assert_eq!(json["by_date"].as_object().unwrap().len(), 78);
    assert_eq!(json["by_weekday"].as_object().unwrap().len(), 7);
}

#[test]
fn empty_years_match_resolver() {
    let config = AggregateConfig::new(3050).with_span(40);
    let report = aggregate(&mut hebrew(), &config).unwrap();
    for year in config.years() {
        let empty = hanukkah_starts(year).unwrap().is_empty();
        assert_eq!(report.bucket(Bucket::NoHanukkah).contains(&year), empty, "{year}");
    }
}
