//! # kislev-io
//!
//! File-backed collaborators of the holiday engines: JSON year caches that
//! persist lookups between runs, and SVG bar charts for the report.

mod cache;
mod chart;
mod error;
mod validate;
mod writer;

pub use cache::JsonYearCache;
pub use chart::{Bar, BarChart, ChartConfig};
pub use error::IoError;
pub use writer::write_svg;
