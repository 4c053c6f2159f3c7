//! Error types for kislev-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the kislev-io crate.
///
/// This enum covers filesystem failures, unreadable cache files, invalid
/// chart configuration and serialisation problems.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when reading or writing a file fails.
    #[error("i/o error on {}: {reason}", path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a cache file exists but cannot be decoded.
    #[error("corrupt cache file {}: {reason}", path.display())]
    Cache {
        /// Path to the cache file.
        path: PathBuf,
        /// Description of the decoding failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a value cannot be serialised.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the serialisation failure.
        reason: String,
    },
}

impl IoError {
    pub(crate) fn io(path: impl Into<PathBuf>, e: std::io::Error) -> Self {
        IoError::Io {
            path: path.into(),
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Serialization {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_io() {
        let err = IoError::Io {
            path: PathBuf::from("/tmp/out.svg"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(err.to_string(), "i/o error on /tmp/out.svg: permission denied");
    }

    #[test]
    fn display_cache() {
        let err = IoError::Cache {
            path: PathBuf::from("/tmp/hanukkah_dates.json"),
            reason: "expected value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "corrupt cache file /tmp/hanukkah_dates.json: expected value"
        );
    }

    #[test]
    fn display_validation() {
        let err = IoError::Validation {
            count: 2,
            details: "width must be positive; font_size must be positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "2 validation error(s): width must be positive; font_size must be positive"
        );
    }

    #[test]
    fn from_io_error_keeps_path() {
        let err = IoError::io(
            "/data/cache.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, IoError::Io { .. }));
        assert!(err.to_string().contains("/data/cache.json"));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err: IoError = json_err.into();
        assert!(matches!(err, IoError::Serialization { .. }));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<IoError>();
    }
}
