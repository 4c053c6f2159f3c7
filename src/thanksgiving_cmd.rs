use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info_span;

use kislev_holidays::{ThanksgivingRule, thanksgiving};

use crate::cli::YearsArgs;

/// Runs the `thanksgiving` subcommand.
pub fn run(args: YearsArgs) -> Result<()> {
    let _cmd = info_span!("thanksgiving").entered();
    for year in args.years {
        let date = thanksgiving(year)
            .with_context(|| format!("failed to resolve Thanksgiving for {year}"))?;
        println!("{}", format_thanksgiving(year, date));
    }
    Ok(())
}

fn format_thanksgiving(year: i32, date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!(
            "{year}: {date} ({})",
            ThanksgivingRule::for_year(year).describe()
        ),
        None => format!("{year}: not observed"),
    }
}
