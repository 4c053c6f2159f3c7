use chrono::{Datelike, NaiveDate};
use kislev_calendar::gregorian_year_days;

#[test]
fn lengths_follow_gregorian_leap_rule() {
    let cases = [
        (1700, 365),
        (1800, 365),
        (1900, 365),
        (2000, 366),
        (2023, 365),
        (2024, 366),
        (2100, 365),
    ];
    for (year, expected) in cases {
        assert_eq!(
            gregorian_year_days(year).unwrap().len(),
            expected,
            "length of {year}"
        );
    }
}

#[test]
fn month_boundaries() {
    let days = gregorian_year_days(2023).unwrap();

    // Index 30: Jan 31
    assert_eq!(days[30], NaiveDate::from_ymd_opt(2023, 1, 31).unwrap());
    // Index 31: Feb 1
    assert_eq!(days[31], NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
    // Index 58: Feb 28, Index 59: Mar 1
    assert_eq!(days[58], NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
    assert_eq!(days[59], NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());
    // Index 364: Dec 31
    assert_eq!(days[364], NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
}

#[test]
fn every_day_belongs_to_requested_year() {
    for year in [1582, 1583, 2024, 3031, 3032] {
        assert!(
            gregorian_year_days(year)
                .unwrap()
                .iter()
                .all(|d| d.year() == year),
            "stray day in {year}"
        );
    }
}
