//! The keyed value-source capability and the header adapter.

use http::HeaderMap;
use reqval_core::{FromToken, RawValues, ValueError};

/// A key to ordered-many-optional-strings lookup over a request surface.
///
/// Implementors provide [`raw`](Self::raw); every typed accessor is a
/// provided method so the fallback and drop policies live in one place
/// instead of being restated per collection type.
///
/// # Example
///
/// ```rust
/// use reqval_http::ValueSource;
/// use http::HeaderMap;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("x-limit", "25".parse().unwrap());
/// headers.append("x-ids", "1,2".parse().unwrap());
/// headers.append("x-ids", "3".parse().unwrap());
///
/// assert_eq!(headers.get_value::<i32>("x-limit"), 25);
/// assert_eq!(headers.get_vec::<i32>("x-ids"), vec![1, 2, 3]);
/// assert_eq!(headers.get_or::<i32>("x-missing", 7), 7);
/// ```
pub trait ValueSource {
    /// Returns all occurrences of `key`, in encounter order.
    ///
    /// An unknown key yields an empty sequence. An occurrence that cannot
    /// be represented as a string (for example a non-UTF-8 header value)
    /// yields an absent entry.
    fn raw(&self, key: &str) -> RawValues<'_>;

    /// Returns `true` if at least one occurrence of `key` is present.
    fn has(&self, key: &str) -> bool {
        !self.raw(key).is_empty()
    }

    /// Returns the first raw string for `key`, or `None` when absent or
    /// whitespace-only.
    fn get_string(&self, key: &str) -> Option<&str> {
        self.raw(key).first()
    }

    /// Returns the first raw string for `key`, or `fallback` when absent
    /// or whitespace-only.
    fn get_string_or<'s>(&'s self, key: &str, fallback: &'s str) -> &'s str {
        self.get_string(key).unwrap_or(fallback)
    }

    /// Parses the first occurrence of `key`, substituting the type's zero
    /// value on absence or parse failure.
    fn get_value<T: FromToken + Default>(&self, key: &str) -> T {
        self.raw(key).to()
    }

    /// Parses the first occurrence of `key`, substituting `fallback` on
    /// absence or parse failure.
    fn get_or<T: FromToken>(&self, key: &str, fallback: T) -> T {
        self.raw(key).to_or(fallback)
    }

    /// Parses the first occurrence of `key`, returning `None` on absence
    /// or parse failure.
    fn get_opt<T: FromToken>(&self, key: &str) -> Option<T> {
        self.raw(key).to_opt()
    }

    /// Parses the first occurrence of `key`, returning a [`ValueError`]
    /// when the value is absent or malformed.
    fn require<T: FromToken>(&self, key: &str) -> Result<T, ValueError> {
        self.raw(key).require(key)
    }

    /// Flattens every occurrence of `key` into a fixed-size sequence
    /// using the default separator set.
    fn get_array<T: FromToken>(&self, key: &str) -> Box<[T]> {
        self.raw(key).to_array()
    }

    /// Flattens every occurrence of `key` into a fixed-size sequence
    /// using the given separator set.
    fn get_array_with<T: FromToken>(&self, key: &str, separators: &[char]) -> Box<[T]> {
        self.raw(key).to_array_with(separators)
    }

    /// Flattens every occurrence of `key` into a growable list using the
    /// default separator set.
    fn get_vec<T: FromToken>(&self, key: &str) -> Vec<T> {
        self.raw(key).to_vec()
    }

    /// Flattens every occurrence of `key` into a growable list using the
    /// given separator set.
    fn get_vec_with<T: FromToken>(&self, key: &str, separators: &[char]) -> Vec<T> {
        self.raw(key).to_vec_with(separators)
    }
}

impl ValueSource for HeaderMap {
    fn raw(&self, key: &str) -> RawValues<'_> {
        self.get_all(key)
            .iter()
            .map(|value| {
                let text = value.to_str().ok();
                if text.is_none() {
                    tracing::debug!(key, "skipping non-UTF-8 header value");
                }
                text
            })
            .collect()
    }
}
