//! # kislev-calendar
//!
//! Calendar arithmetic underneath the holiday engines: Gregorian validity
//! bounds, per-year day sequences, weekday arithmetic, and the arithmetic
//! Hebrew calendar behind the [`LunisolarConverter`] seam.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["year"] -->|"gregorian_year_days()"| B["Vec of NaiveDate"]
//!     B -->|"LunisolarConverter::to_lunisolar()"| C["LunisolarDate"]
//!     D["HebrewCalendar"] -.->|implements| E["LunisolarConverter"]
//!     F["(year, month, weekday)"] -->|"first/last_weekday_of_month()"| G["NaiveDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::{NaiveDate, Weekday};
//! use kislev_calendar::{
//!     HebrewCalendar, KISLEV, LunisolarConverter, gregorian_year_days, last_weekday_of_month,
//! };
//!
//! let days = gregorian_year_days(2024).unwrap();
//! let kislev_25: Vec<NaiveDate> = days
//!     .into_iter()
//!     .filter(|&d| HebrewCalendar.to_lunisolar(d).month_day() == (KISLEV, 25))
//!     .collect();
//! assert_eq!(kislev_25, vec![NaiveDate::from_ymd_opt(2024, 12, 26).unwrap()]);
//!
//! let last_thursday = last_weekday_of_month(1900, 11, Weekday::Thu).unwrap();
//! assert_eq!(last_thursday, NaiveDate::from_ymd_opt(1900, 11, 29).unwrap());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `gregorian` | Reform date, validity checks, weekday arithmetic |
//! | `sequence` | Day sequences over a Gregorian year |
//! | `converter` | `LunisolarDate` and the `LunisolarConverter` trait |
//! | `hebrew` | Hebrew calendar via `calendrical_calculations` |
//! | `error` | Error types |

mod converter;
mod error;
mod gregorian;
mod hebrew;
mod sequence;

pub use converter::{LunisolarConverter, LunisolarDate};
pub use error::CalendarError;
pub use gregorian::{
    GREGORIAN_START_YEAR, WEEKDAYS, ensure_gregorian, first_weekday_of_month, gregorian_start,
    last_weekday_of_month, weekday_name,
};
pub use hebrew::{ADAR_II, HebrewCalendar, KISLEV, NISAN, TISHRI};
pub use sequence::gregorian_year_days;
