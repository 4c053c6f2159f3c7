//! Chart setting checks that report every problem at once.

use crate::error::IoError;

/// Collects violated constraints and folds them into one
/// [`IoError::Validation`].
pub(crate) struct ValidationCollector {
    problems: Vec<String>,
}

impl ValidationCollector {
    pub(crate) fn new() -> Self {
        Self {
            problems: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.problems.push(msg.into());
    }

    /// Flags `value` unless it is finite and strictly positive.
    pub(crate) fn require_positive(&mut self, name: &str, value: f64) {
        if !value.is_finite() || value <= 0.0 {
            self.push(format!("{name} must be finite and positive, got {value}"));
        }
    }

    /// Flags `value` unless it is finite and not negative.
    pub(crate) fn require_non_negative(&mut self, name: &str, value: f64) {
        if !value.is_finite() || value < 0.0 {
            self.push(format!("{name} must be finite and non-negative, got {value}"));
        }
    }

    /// Flags `value` unless `0 < value <= 1`.
    pub(crate) fn require_fraction(&mut self, name: &str, value: f64) {
        if !(value > 0.0 && value <= 1.0) {
            self.push(format!("{name} must be in (0, 1], got {value}"));
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.problems.len()
    }

    /// `Ok(())` when nothing was flagged; otherwise all messages joined
    /// with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.problems.is_empty() {
            return Ok(());
        }
        Err(IoError::Validation {
            count: self.problems.len(),
            details: self.problems.join("; "),
        })
    }
}
