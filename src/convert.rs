//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use kislev_coincidence::AggregateConfig;

use crate::config::QueryToml;

/// Builds an [`AggregateConfig`] from the TOML query settings.
///
/// An unset `center_year` falls back to `current_year`. The result is
/// validated so a bad span fails before any per-year work.
pub fn build_aggregate_config(query: &QueryToml, current_year: i32) -> Result<AggregateConfig> {
    let config = AggregateConfig::new(query.center_year.unwrap_or(current_year))
        .with_span(query.span);
    config.validate().context("invalid [query] settings")?;
    Ok(config)
}
