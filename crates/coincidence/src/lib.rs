//! # kislev-coincidence
//!
//! Folds Hanukkah onsets and Thanksgiving dates over a range of years into
//! classification buckets and histograms.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["AggregateConfig"] -->|"aggregate()"| B["CoincidenceReport"]
//!     C["HolidayLookup"] --> B
//!     B -->|"BucketSummary::new()"| D["BucketSummary"]
//!     B -->|"to_json()"| E["JSON"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use kislev_coincidence::{AggregateConfig, Bucket, aggregate, summarize};
//! use kislev_holidays::HolidayLookup;
//!
//! let mut lookup: HolidayLookup = HolidayLookup::default();
//! let report = aggregate(&mut lookup, &AggregateConfig::new(2025).with_span(100)).unwrap();
//! assert_eq!(report.bucket(Bucket::Thanksgiving), [2013]);
//!
//! let summaries = summarize(&report, 2025);
//! assert_eq!(summaries[0].last_before, Some(2024));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Query range configuration |
//! | `bucket` | Bucket names and onset classification |
//! | `histogram` | Month-day and weekday histograms |
//! | `aggregate` | The per-year aggregation pass |
//! | `report` | Aggregated report and JSON rendering |
//! | `summary` | Per-bucket summaries for printing |
//! | `error` | Error types |

mod aggregate;
mod bucket;
mod config;
mod error;
mod histogram;
mod report;
mod summary;

pub use aggregate::aggregate;
pub use bucket::{Bucket, classify_onset};
pub use config::{AggregateConfig, DEFAULT_SPAN};
pub use error::CoincidenceError;
pub use histogram::{DateHistogram, MonthDay, WINDOW_LEN, WeekdayHistogram};
pub use report::CoincidenceReport;
pub use summary::{BucketSummary, summarize};
