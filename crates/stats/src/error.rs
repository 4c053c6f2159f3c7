//! Error types for the kislev-stats crate.

/// Error type for all fallible operations in the kislev-stats crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    /// Returned when fewer than two years are supplied, so no gap exists.
    #[error("at least 2 years are required for gap statistics, got {len}")]
    InvalidInput {
        /// Number of years supplied.
        len: usize,
    },
}
