//! JSON-file backed year caches.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use kislev_holidays::YearCache;

use crate::error::IoError;

/// A [`YearCache`] persisted as one JSON object per store.
///
/// The file lives at `<dir>/<name>.json` and maps decimal year strings to
/// values. Changes stay in memory until [`save`](Self::save) is called.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use kislev_holidays::{HolidayLookup, Onsets};
/// use kislev_io::JsonYearCache;
///
/// let mut cache: JsonYearCache<Onsets> =
///     JsonYearCache::open(Path::new(".kislev-cache"), "hanukkah_dates").unwrap();
/// {
///     let mut lookup: HolidayLookup = HolidayLookup::default().with_onset_cache(&mut cache);
///     lookup.hanukkah_starts(2024).unwrap();
/// }
/// cache.save().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct JsonYearCache<V> {
    path: PathBuf,
    entries: BTreeMap<i32, V>,
    dirty: bool,
}

impl<V: Serialize + DeserializeOwned> JsonYearCache<V> {
    /// Opens the store `name` in `dir`. A missing file is an empty cache.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Io`] if the file exists but cannot be read and
    /// [`IoError::Cache`] if its contents cannot be decoded.
    pub fn open(dir: &Path, name: &str) -> Result<Self, IoError> {
        let path = dir.join(format!("{name}.json"));
        let entries = if path.exists() {
            let text = fs::read_to_string(&path).map_err(|e| IoError::io(&path, e))?;
            decode(&path, &text)?
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), entries = entries.len(), "opened year cache");
        Ok(Self {
            path,
            entries,
            dirty: false,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of cached years.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if entries were added since the last load or save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes the cache back to disk if it changed.
    ///
    /// The file is written to a sibling temp file first and renamed over the
    /// old one, so readers never see a partial file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Io`] on filesystem failures and
    /// [`IoError::Serialization`] if a value cannot be encoded.
    pub fn save(&mut self) -> Result<(), IoError> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| IoError::io(parent, e))?;
        }
        let keyed: BTreeMap<String, &V> = self
            .entries
            .iter()
            .map(|(year, value)| (year.to_string(), value))
            .collect();
        let text = serde_json::to_string(&keyed)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text).map_err(|e| IoError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| IoError::io(&self.path, e))?;
        self.dirty = false;
        debug!(path = %self.path.display(), entries = self.entries.len(), "saved year cache");
        Ok(())
    }
}

fn decode<V: DeserializeOwned>(path: &Path, text: &str) -> Result<BTreeMap<i32, V>, IoError> {
    let corrupt = |reason: String| IoError::Cache {
        path: path.to_path_buf(),
        reason,
    };
    let raw: BTreeMap<String, V> =
        serde_json::from_str(text).map_err(|e| corrupt(e.to_string()))?;
    raw.into_iter()
        .map(|(key, value)| {
            key.parse::<i32>()
                .map(|year| (year, value))
                .map_err(|_| corrupt(format!("invalid year key '{key}'")))
        })
        .collect()
}

impl<V: Clone> YearCache<V> for JsonYearCache<V> {
    fn get(&self, year: i32) -> Option<V> {
        self.entries.get(&year).cloned()
    }

    fn put(&mut self, year: i32, value: V) {
        self.entries.insert(year, value);
        self.dirty = true;
    }
}
