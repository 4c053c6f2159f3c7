//! Bar charts of the onset distributions.

use chrono::Month;

use kislev_calendar::weekday_name;
use kislev_coincidence::{CoincidenceReport, MonthDay};
use kislev_io::{Bar, BarChart};

/// First month-day of the date chart.
pub const DATE_CHART_FROM: MonthDay = MonthDay::new(11, 20);
/// Last month-day of the date chart.
pub const DATE_CHART_TO: MonthDay = MonthDay::new(1, 5);

fn date_color(key: MonthDay) -> &'static str {
    match (key.month(), key.day()) {
        (12, 25) => "red",
        (12, 24) => "green",
        _ => "blue",
    }
}

fn month_abbrev(month: u8) -> String {
    Month::try_from(month)
        .map(|m| m.name().chars().take(3).collect())
        .unwrap_or_default()
}

/// Onset counts per month-day, with a month tick at each month's first bar.
pub fn date_chart(report: &CoincidenceReport) -> BarChart {
    let mut previous_month = None;
    let bars = report
        .by_date()
        .between(DATE_CHART_FROM, DATE_CHART_TO)
        .into_iter()
        .map(|(key, years)| {
            let bar = Bar::new(key.to_string(), years.len()).with_color(date_color(key));
            if previous_month.replace(key.month()) == Some(key.month()) {
                bar
            } else {
                bar.with_tick(month_abbrev(key.month()))
            }
        })
        .collect();
    BarChart::new(bars)
}

/// Onset counts per weekday, Sunday first.
pub fn weekday_chart(report: &CoincidenceReport) -> BarChart {
    let bars = report
        .by_weekday()
        .iter()
        .map(|(weekday, years)| {
            let name = weekday_name(weekday);
            Bar::new(name, years.len())
                .with_color("lightblue")
                .with_tick(name)
        })
        .collect();
    BarChart::new(bars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kislev_coincidence::{AggregateConfig, aggregate};
    use kislev_holidays::HolidayLookup;

    fn report() -> CoincidenceReport {
        let mut lookup: HolidayLookup = HolidayLookup::default();
        aggregate(&mut lookup, &AggregateConfig::new(2026).with_span(100)).unwrap()
    }

    #[test]
    fn date_chart_covers_window_slice() {
        let chart = date_chart(&report());
        let bars = chart.bars();
        // Nov 20..30, Dec 1..31, Jan 1..5
        assert_eq!(bars.len(), 11 + 31 + 5);
        assert_eq!(bars[0].label(), "11-20");
        assert_eq!(bars.last().unwrap().label(), "01-05");
    }

    #[test]
    fn date_chart_colors() {
        let chart = date_chart(&report());
        let color = |label: &str| {
            chart
                .bars()
                .iter()
                .find(|b| b.label() == label)
                .map(|b| b.color().to_string())
                .unwrap()
        };
        assert_eq!(color("12-25"), "red");
        assert_eq!(color("12-24"), "green");
        assert_eq!(color("12-26"), "blue");
    }

    #[test]
    fn date_chart_month_ticks() {
        let chart = date_chart(&report());
        let ticks: Vec<(&str, &str)> = chart
            .bars()
            .iter()
            .filter_map(|b| b.tick().map(|t| (b.label(), t)))
            .collect();
        assert_eq!(ticks, vec![("11-20", "Nov"), ("12-01", "Dec"), ("01-01", "Jan")]);
    }

    #[test]
    fn date_chart_counts_christmas_day() {
        let chart = date_chart(&report());
        let christmas = chart.bars().iter().find(|b| b.label() == "12-25").unwrap();
        // 2005, 2024, 2035, 2054
        assert_eq!(christmas.count(), 4);
    }

    #[test]
    fn weekday_chart_sunday_first() {
        let report = report();
        let chart = weekday_chart(&report);
        let labels: Vec<&str> = chart.bars().iter().map(Bar::label).collect();
        assert_eq!(
            labels,
            ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
        );
        assert!(chart.bars().iter().all(|b| b.color() == "lightblue"));
        let total: usize = chart.bars().iter().map(Bar::count).sum();
        assert_eq!(total, report.onset_count());
    }
}
