use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::info_span;

use kislev_calendar::weekday_name;
use kislev_holidays::{Onsets, hanukkah_starts};

use crate::cli::YearsArgs;

/// Runs the `onsets` subcommand.
pub fn run(args: YearsArgs) -> Result<()> {
    let _cmd = info_span!("onsets").entered();
    for year in args.years {
        let onsets = hanukkah_starts(year)
            .with_context(|| format!("failed to resolve Hanukkah onsets for {year}"))?;
        println!("{}", format_onsets(year, &onsets));
    }
    Ok(())
}

fn format_onsets(year: i32, onsets: &Onsets) -> String {
    if onsets.is_empty() {
        return format!("{year}: none");
    }
    let dates = onsets
        .iter()
        .map(|date| format!("{date} ({})", weekday_name(date.weekday())))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{year}: {dates}")
}
