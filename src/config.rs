use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file picked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "kislev.toml";

/// Top-level Kislev configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KislevConfig {
    /// Year range settings.
    #[serde(default)]
    pub query: QueryToml,

    /// Persistent cache settings.
    #[serde(default)]
    pub cache: CacheToml,

    /// Chart and JSON output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryToml {
    /// Defaults to the current local year when unset.
    #[serde(default)]
    pub center_year: Option<i32>,
    #[serde(default = "default_span")]
    pub span: u32,
}

impl Default for QueryToml {
    fn default() -> Self {
        Self {
            center_year: None,
            span: default_span(),
        }
    }
}

fn default_span() -> u32 {
    kislev_coincidence::DEFAULT_SPAN
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheToml {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_cache_dir")]
    pub dir: PathBuf,
}

impl Default for CacheToml {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: default_cache_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_cache_dir() -> PathBuf {
    PathBuf::from(".kislev-cache")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_charts_dir")]
    pub charts_dir: PathBuf,
    #[serde(default = "default_date_chart")]
    pub date_chart: PathBuf,
    #[serde(default = "default_weekday_chart")]
    pub weekday_chart: PathBuf,
    #[serde(default)]
    pub json: Option<PathBuf>,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            charts_dir: default_charts_dir(),
            date_chart: default_date_chart(),
            weekday_chart: default_weekday_chart(),
            json: None,
        }
    }
}

fn default_charts_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_date_chart() -> PathBuf {
    PathBuf::from("hanukkah_dates.svg")
}
fn default_weekday_chart() -> PathBuf {
    PathBuf::from("hanukkah_dows.svg")
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, `kislev.toml` in the working
/// directory is read if present and defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<KislevConfig> {
    let path = match path {
        Some(p) => p,
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_PATH);
            if !fallback.exists() {
                return Ok(KislevConfig::default());
            }
            fallback
        }
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
}
