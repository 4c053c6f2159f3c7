//! # kislev-holidays
//!
//! Holiday date engines: the US Thanksgiving rule table and the Hanukkah
//! onset resolver, plus a year-keyed cache seam for memoizing both.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["year"] -->|"thanksgiving()"| B["Option of NaiveDate"]
//!     A -->|"HanukkahResolver::starts()"| C["Onsets"]
//!     D["HolidayLookup"] -->|get/put| E["YearCache"]
//!     D --> B
//!     D --> C
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use kislev_holidays::{hanukkah_starts, thanksgiving};
//!
//! let onsets = hanukkah_starts(2013).unwrap();
//! let turkey = thanksgiving(2013).unwrap();
//! assert_eq!(onsets.as_slice().first().copied(), turkey);
//! assert_eq!(turkey, NaiveDate::from_ymd_opt(2013, 11, 28));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `thanksgiving` | Prioritised Thanksgiving rule table |
//! | `hanukkah` | Kislev 25 scan over a Gregorian year |
//! | `cache` | `YearCache` trait and in-memory implementation |
//! | `lookup` | Cached lookups over both engines |
//! | `error` | Error types |

mod cache;
mod error;
mod hanukkah;
mod lookup;
mod thanksgiving;

pub use cache::{MemoryCache, YearCache};
pub use error::HolidayError;
pub use hanukkah::{HanukkahResolver, ONSET_DAY, ONSET_MONTH, Onsets, hanukkah_starts};
pub use lookup::HolidayLookup;
pub use thanksgiving::{FIRST_OBSERVED_YEAR, ThanksgivingRule, thanksgiving};
