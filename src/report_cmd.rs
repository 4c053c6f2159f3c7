use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use serde::de::DeserializeOwned;
use tracing::{info, info_span, warn};

use kislev_coincidence::{BucketSummary, CoincidenceReport, aggregate, summarize};
use kislev_holidays::{HolidayLookup, Onsets};
use kislev_io::{IoError, JsonYearCache, write_svg};

use crate::charts::{date_chart, weekday_chart};
use crate::cli::ReportArgs;
use crate::config::{self, KislevConfig};
use crate::convert::build_aggregate_config;

/// Store name of the Hanukkah onset cache.
const ONSET_STORE: &str = "hanukkah_dates";
/// Store name of the Thanksgiving date cache.
const THANKSGIVING_STORE: &str = "thanksgiving_dates";

/// Runs the `report` subcommand.
pub fn run(args: ReportArgs) -> Result<()> {
    let _cmd = info_span!("report").entered();

    let mut config = config::load(args.config.as_deref())?;
    apply_overrides(&mut config, &args);

    let current_year = Local::now().year();
    let agg_config = build_aggregate_config(&config.query, current_year)?;
    info!(
        start = agg_config.start_year(),
        end = agg_config.end_year(),
        "aggregating"
    );

    let (mut onset_cache, mut thanksgiving_cache) = if config.cache.enabled {
        (
            open_cache::<Onsets>(&config.cache.dir, ONSET_STORE)?,
            open_cache::<Option<NaiveDate>>(&config.cache.dir, THANKSGIVING_STORE)?,
        )
    } else {
        (None, None)
    };

    let report = {
        let mut lookup: HolidayLookup = HolidayLookup::default();
        if let Some(cache) = onset_cache.as_mut() {
            lookup = lookup.with_onset_cache(cache);
        }
        if let Some(cache) = thanksgiving_cache.as_mut() {
            lookup = lookup.with_thanksgiving_cache(cache);
        }
        aggregate(&mut lookup, &agg_config).context("aggregation failed")?
    };

    if let Some(cache) = onset_cache.as_mut() {
        cache.save().context("failed to save onset cache")?;
    }
    if let Some(cache) = thanksgiving_cache.as_mut() {
        cache.save().context("failed to save thanksgiving cache")?;
    }

    print!("{}", render_text(&report, current_year));
    write_outputs(&report, &config)?;
    Ok(())
}

fn apply_overrides(config: &mut KislevConfig, args: &ReportArgs) {
    if let Some(year) = args.center_year {
        config.query.center_year = Some(year);
    }
    if let Some(span) = args.span {
        config.query.span = span;
    }
    if args.no_cache {
        config.cache.enabled = false;
    }
    if let Some(ref dir) = args.cache_dir {
        config.cache.dir = dir.clone();
    }
    if let Some(ref path) = args.json {
        config.output.json = Some(path.clone());
    }
    if let Some(ref dir) = args.charts_dir {
        config.output.charts_dir = dir.clone();
    }
}

/// Opens a cache store; a corrupt store is skipped with a warning.
fn open_cache<V>(dir: &Path, name: &str) -> Result<Option<JsonYearCache<V>>>
where
    V: Clone + serde::Serialize + DeserializeOwned,
{
    match JsonYearCache::open(dir, name) {
        Ok(cache) => {
            info!(store = name, entries = cache.len(), "cache opened");
            Ok(Some(cache))
        }
        Err(e @ IoError::Cache { .. }) => {
            warn!(store = name, error = %e, "ignoring unreadable cache, running cold");
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("failed to open cache {name}")),
    }
}

fn write_outputs(report: &CoincidenceReport, config: &KislevConfig) -> Result<()> {
    let out = &config.output;
    let date_path = out.charts_dir.join(&out.date_chart);
    write_svg(&date_path, &date_chart(report))
        .with_context(|| format!("failed to write {}", date_path.display()))?;
    let weekday_path = out.charts_dir.join(&out.weekday_chart);
    write_svg(&weekday_path, &weekday_chart(report))
        .with_context(|| format!("failed to write {}", weekday_path.display()))?;

    if let Some(ref path) = out.json {
        let json = report.to_json().context("failed to serialize report")?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote JSON report");
    }
    Ok(())
}

/// Renders the plain-text report printed to stdout.
fn render_text(report: &CoincidenceReport, current_year: i32) -> String {
    let mut out = format!("Hanukkah coincidence as of {current_year}\n\n");
    for summary in summarize(report, current_year) {
        out.push_str(&render_summary(&summary, report));
        out.push('\n');
    }
    out
}

fn render_summary(summary: &BucketSummary, report: &CoincidenceReport) -> String {
    let start = report.start_year();
    let through = report.end_year() - 1;

    let mut out = format!("{:.2}% {}:\n", summary.share_percent, summary.label());
    out.push_str(&match summary.last_before {
        Some(year) => format!(" last in {year},"),
        None => format!(" hasn't happened since at least {start}"),
    });
    out.push_str(&match summary.next_after {
        Some(year) => format!(" next in {year}\n"),
        None => format!(" and wont happen again through at least {through}\n"),
    });
    if summary.count_before > 0 {
        out.push_str(&format!(
            " happened {} times since the year {start}\n",
            summary.count_before
        ));
    }
    if let (Some(mean), Some(first), Some(last)) = (summary.mean_gap, summary.first, summary.last) {
        out.push_str(&format!(
            " separated by {} years on average (between {first} and {last})\n",
            mean.round()
        ));
    }
    let years = if summary.years.is_empty() {
        "none".to_string()
    } else {
        summary
            .years
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    out.push_str(&format!(" in these years: {years}\n"));
    out
}
