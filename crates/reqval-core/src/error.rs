//! Error type for required-value accessors.

use http::StatusCode;
use thiserror::Error;

/// Error returned by the `require` accessor family.
///
/// The fallback-based accessors never fail; this type exists for callers
/// that want absence or a malformed value to be a hard error instead of a
/// substituted fallback.
///
/// # Example
///
/// ```rust
/// use reqval_core::{RawValues, ValueError};
/// use http::StatusCode;
///
/// let values = RawValues::new(vec![Some("nope")]);
/// let err = values.require::<i32>("limit").unwrap_err();
///
/// assert!(matches!(err, ValueError::Invalid { .. }));
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// assert!(err.to_string().contains("limit"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// No value is present for the key.
    #[error("missing required value for '{key}'")]
    Missing {
        /// The key that was looked up.
        key: String,
    },

    /// A value is present but does not match the target type's grammar.
    #[error("invalid value '{value}' for '{key}': expected {expected}")]
    Invalid {
        /// The key that was looked up.
        key: String,
        /// The raw value that failed to parse.
        value: String,
        /// Human-readable name of the expected type.
        expected: &'static str,
    },
}

impl ValueError {
    /// Returns the key the failed lookup was for.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Missing { key } | Self::Invalid { key, .. } => key,
        }
    }

    /// Returns the appropriate HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Missing { .. } | Self::Invalid { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_error() {
        let err = ValueError::Missing {
            key: "user_id".to_string(),
        };

        assert_eq!(err.key(), "user_id");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("user_id"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_invalid_error() {
        let err = ValueError::Invalid {
            key: "limit".to_string(),
            value: "nope".to_string(),
            expected: "i32",
        };

        assert_eq!(err.key(), "limit");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("limit"));
        assert!(err.to_string().contains("nope"));
        assert!(err.to_string().contains("i32"));
    }
}
