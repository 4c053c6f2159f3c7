//! Gregorian validity bounds and weekday arithmetic.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::CalendarError;

/// First year in which the Gregorian calendar was in force.
pub const GREGORIAN_START_YEAR: i32 = 1582;

/// Weekdays in reporting order, Sunday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Returns 1582-10-15, the first day of the Gregorian calendar.
pub fn gregorian_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(GREGORIAN_START_YEAR, 10, 15).expect("1582-10-15 is a valid date")
}

/// Checks that `date` lies within the Gregorian calendar's validity.
///
/// # Errors
///
/// Returns [`CalendarError::DateBeforeGregorian`] for dates before 1582-10-15.
pub fn ensure_gregorian(date: NaiveDate) -> Result<NaiveDate, CalendarError> {
    if date < gregorian_start() {
        return Err(CalendarError::DateBeforeGregorian { date });
    }
    Ok(date)
}

/// Returns the English name of a weekday ("Sunday", "Monday", ...).
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Returns the first occurrence of `weekday` in the given month.
///
/// Computed as the month's first day plus
/// `(weekday - weekday(1st)) mod 7` days.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12 and
/// [`CalendarError::OutOfRange`] if the year cannot be represented.
pub fn first_weekday_of_month(
    year: i32,
    month: u8,
    weekday: Weekday,
) -> Result<NaiveDate, CalendarError> {
    check_month(month)?;
    let first = NaiveDate::from_ymd_opt(year, u32::from(month), 1)
        .ok_or(CalendarError::OutOfRange { year })?;
    let offset = days_between(first.weekday(), weekday);
    first
        .checked_add_days(Days::new(offset))
        .ok_or(CalendarError::OutOfRange { year })
}

/// Returns the last occurrence of `weekday` in the given month.
///
/// Computed as the month's last day minus
/// `(weekday(last) - weekday) mod 7` days.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12 and
/// [`CalendarError::OutOfRange`] if the year cannot be represented.
pub fn last_weekday_of_month(
    year: i32,
    month: u8,
    weekday: Weekday,
) -> Result<NaiveDate, CalendarError> {
    check_month(month)?;
    let last = last_day_of_month(year, month).ok_or(CalendarError::OutOfRange { year })?;
    let offset = days_between(weekday, last.weekday());
    last.checked_sub_days(Days::new(offset))
        .ok_or(CalendarError::OutOfRange { year })
}

fn check_month(month: u8) -> Result<(), CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth {
            month,
            max_month: 12,
        });
    }
    Ok(())
}

fn last_day_of_month(year: i32, month: u8) -> Option<NaiveDate> {
    if month == 12 {
        NaiveDate::from_ymd_opt(year, 12, 31)
    } else {
        NaiveDate::from_ymd_opt(year, u32::from(month) + 1, 1)?.pred_opt()
    }
}

/// Days to walk forward from `from` to reach `to` (0..=6).
fn days_between(from: Weekday, to: Weekday) -> u64 {
    let from = i64::from(from.num_days_from_monday());
    let to = i64::from(to.num_days_from_monday());
    (to - from).rem_euclid(7) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn start_date() {
        assert_eq!(gregorian_start(), ymd(1582, 10, 15));
        assert_eq!(gregorian_start().weekday(), Weekday::Fri);
    }

    #[test]
    fn ensure_accepts_reform_day() {
        assert_eq!(ensure_gregorian(ymd(1582, 10, 15)).unwrap(), ymd(1582, 10, 15));
    }

    #[test]
    fn ensure_rejects_day_before_reform() {
        assert_eq!(
            ensure_gregorian(ymd(1582, 10, 14)).unwrap_err(),
            CalendarError::DateBeforeGregorian {
                date: ymd(1582, 10, 14)
            }
        );
    }

    #[test]
    fn weekday_names_in_order() {
        let names: Vec<_> = WEEKDAYS.iter().map(|&w| weekday_name(w)).collect();
        assert_eq!(
            names,
            [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday"
            ]
        );
    }

    #[test]
    fn first_thursday_when_first_is_thursday() {
        // 2024-08-01 is a Thursday
        assert_eq!(
            first_weekday_of_month(2024, 8, Weekday::Thu).unwrap(),
            ymd(2024, 8, 1)
        );
    }

    #[test]
    fn first_thursday_when_first_is_friday() {
        // 2024-11-01 is a Friday
        assert_eq!(
            first_weekday_of_month(2024, 11, Weekday::Thu).unwrap(),
            ymd(2024, 11, 7)
        );
    }

    #[test]
    fn last_thursday_when_last_is_thursday() {
        // 1939-11-30 is a Thursday
        assert_eq!(
            last_weekday_of_month(1939, 11, Weekday::Thu).unwrap(),
            ymd(1939, 11, 30)
        );
    }

    #[test]
    fn last_thursday_when_last_is_wednesday() {
        // 1870-11-30 is a Wednesday
        assert_eq!(
            last_weekday_of_month(1870, 11, Weekday::Thu).unwrap(),
            ymd(1870, 11, 24)
        );
    }

    #[test]
    fn last_weekday_of_december() {
        assert_eq!(
            last_weekday_of_month(2024, 12, Weekday::Tue).unwrap(),
            ymd(2024, 12, 31)
        );
    }

    #[test]
    fn last_weekday_of_leap_february() {
        assert_eq!(
            last_weekday_of_month(2024, 2, Weekday::Thu).unwrap(),
            ymd(2024, 2, 29)
        );
    }

    #[test]
    fn invalid_month_rejected() {
        assert_eq!(
            first_weekday_of_month(2024, 13, Weekday::Thu).unwrap_err(),
            CalendarError::InvalidMonth {
                month: 13,
                max_month: 12
            }
        );
        assert_eq!(
            last_weekday_of_month(2024, 0, Weekday::Thu).unwrap_err(),
            CalendarError::InvalidMonth {
                month: 0,
                max_month: 12
            }
        );
    }

    #[test]
    fn unrepresentable_year() {
        assert_eq!(
            first_weekday_of_month(i32::MAX, 11, Weekday::Thu).unwrap_err(),
            CalendarError::OutOfRange { year: i32::MAX }
        );
    }

    #[test]
    fn every_month_first_and_last_are_in_month() {
        for month in 1..=12u8 {
            for &weekday in &WEEKDAYS {
                let first = first_weekday_of_month(2023, month, weekday).unwrap();
                let last = last_weekday_of_month(2023, month, weekday).unwrap();
                assert_eq!(first.weekday(), weekday);
                assert_eq!(last.weekday(), weekday);
                assert_eq!(first.month(), u32::from(month));
                assert_eq!(last.month(), u32::from(month));
                assert!(first.day() <= 7);
                assert!(last.day() > 21);
            }
        }
    }
}
