//! Cached holiday lookups.

use chrono::NaiveDate;
use tracing::debug;

use kislev_calendar::{GREGORIAN_START_YEAR, HebrewCalendar, LunisolarConverter};

use crate::cache::YearCache;
use crate::error::HolidayError;
use crate::hanukkah::{HanukkahResolver, Onsets};
use crate::thanksgiving::thanksgiving;

/// Holiday queries with optional per-year memoization.
///
/// Caches are borrowed so the caller decides their lifetime and can persist
/// them afterwards. A lookup with caches returns exactly what the uncached
/// functions return.
///
/// # Example
///
/// ```
/// use kislev_calendar::HebrewCalendar;
/// use kislev_holidays::{HanukkahResolver, HolidayLookup, MemoryCache, Onsets};
///
/// let mut cache: MemoryCache<Onsets> = MemoryCache::new();
/// let mut lookup = HolidayLookup::new(HanukkahResolver::new(HebrewCalendar))
///     .with_onset_cache(&mut cache);
/// let first = lookup.hanukkah_starts(2024).unwrap();
/// let second = lookup.hanukkah_starts(2024).unwrap();
/// assert_eq!(first, second);
/// drop(lookup);
/// assert_eq!(cache.len(), 1);
/// ```
pub struct HolidayLookup<'a, C = HebrewCalendar> {
    resolver: HanukkahResolver<C>,
    onset_cache: Option<&'a mut dyn YearCache<Onsets>>,
    thanksgiving_cache: Option<&'a mut dyn YearCache<Option<NaiveDate>>>,
}

impl<'a, C: LunisolarConverter> HolidayLookup<'a, C> {
    /// Creates an uncached lookup around `resolver`.
    pub fn new(resolver: HanukkahResolver<C>) -> Self {
        Self {
            resolver,
            onset_cache: None,
            thanksgiving_cache: None,
        }
    }

    /// Memoizes Hanukkah onsets in `cache`.
    pub fn with_onset_cache(mut self, cache: &'a mut dyn YearCache<Onsets>) -> Self {
        self.onset_cache = Some(cache);
        self
    }

    /// Memoizes Thanksgiving dates in `cache`.
    pub fn with_thanksgiving_cache(
        mut self,
        cache: &'a mut dyn YearCache<Option<NaiveDate>>,
    ) -> Self {
        self.thanksgiving_cache = Some(cache);
        self
    }

    /// Returns the Hanukkah onsets in `year`, consulting the cache first.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError::InvalidDomain`] for years before 1582; the
    /// cache is never consulted for such years.
    pub fn hanukkah_starts(&mut self, year: i32) -> Result<Onsets, HolidayError> {
        if year < GREGORIAN_START_YEAR {
            return Err(HolidayError::InvalidDomain { year });
        }
        if let Some(cache) = self.onset_cache.as_mut()
            && let Some(hit) = cache.get(year)
        {
            debug!(year, "onset cache hit");
            return Ok(hit);
        }
        let onsets = self.resolver.starts(year)?;
        if let Some(cache) = self.onset_cache.as_mut() {
            debug!(year, "onset cache miss, storing");
            cache.put(year, onsets.clone());
        }
        Ok(onsets)
    }

    /// Returns the Thanksgiving date in `year`, consulting the cache first.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError::Calendar`] if the year cannot be represented.
    pub fn thanksgiving(&mut self, year: i32) -> Result<Option<NaiveDate>, HolidayError> {
        if let Some(cache) = self.thanksgiving_cache.as_mut()
            && let Some(hit) = cache.get(year)
        {
            debug!(year, "thanksgiving cache hit");
            return Ok(hit);
        }
        let date = thanksgiving(year)?;
        if let Some(cache) = self.thanksgiving_cache.as_mut() {
            debug!(year, "thanksgiving cache miss, storing");
            cache.put(year, date);
        }
        Ok(date)
    }
}

impl Default for HolidayLookup<'_, HebrewCalendar> {
    fn default() -> Self {
        Self::new(HanukkahResolver::default())
    }
}
