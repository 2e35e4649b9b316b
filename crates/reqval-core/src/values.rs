//! Ordered multi-value sequences and their typed accessors.

use crate::{parse_token, FromToken, ValueError};

/// Default separator set used when flattening raw strings into pieces.
///
/// Each raw string is additionally split on these characters before
/// per-piece parsing, so `"1,2"` contributes two integers.
pub const DEFAULT_SEPARATORS: [char; 5] = [',', ' ', '\r', '\n', '\t'];

/// All occurrences of one key as an ordered sequence of optional strings.
///
/// A key in a header, query or form collection may repeat, and an
/// individual occurrence may be absent (for example a non-UTF-8 header
/// value). `RawValues` captures that shape without committing to any
/// framework's collection type.
///
/// Accessors come in two families:
///
/// - scalar (`to`, `to_or`, `to_opt`, `require`) - consider only the
///   first occurrence and substitute a fallback on absence or parse
///   failure;
/// - collection (`to_array`, `to_vec` and their `_with` variants) -
///   flatten every occurrence, splitting on a separator set and silently
///   dropping pieces that fail to parse.
///
/// All accessors are pure: the same input always yields the same output,
/// and nothing panics.
///
/// # Example
///
/// ```rust
/// use reqval_core::RawValues;
///
/// let values = RawValues::new(vec![Some("10"), Some("20")]);
///
/// assert_eq!(values.to::<i32>(), 10);
/// assert_eq!(values.to_vec::<i32>(), vec![10, 20]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawValues<'a> {
    values: Vec<Option<&'a str>>,
}

impl<'a> RawValues<'a> {
    /// Creates a sequence from the given occurrences.
    #[must_use]
    pub fn new(values: Vec<Option<&'a str>>) -> Self {
        Self { values }
    }

    /// Creates an empty sequence (the key was not present at all).
    #[must_use]
    pub fn empty() -> Self {
        Self { values: Vec::new() }
    }

    /// Returns the number of occurrences, including absent ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no occurrences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the raw occurrences.
    #[must_use]
    pub fn as_slice(&self) -> &[Option<&'a str>] {
        &self.values
    }

    /// Returns the first raw string, or `None` if the sequence is empty,
    /// the first occurrence is absent, or it is whitespace-only.
    ///
    /// Scalar accessors deliberately look at position 0 only; occurrences
    /// beyond the first are never scanned for a usable value.
    #[must_use]
    pub fn first(&self) -> Option<&'a str> {
        match self.values.first().copied().flatten() {
            Some(raw) if !raw.trim().is_empty() => Some(raw),
            _ => None,
        }
    }

    /// Parses the first occurrence, substituting the type's zero value
    /// (`Default`) on absence or parse failure.
    #[must_use]
    pub fn to<T: FromToken + Default>(&self) -> T {
        self.to_or(T::default())
    }

    /// Parses the first occurrence, substituting `fallback` on absence or
    /// parse failure.
    #[must_use]
    pub fn to_or<T: FromToken>(&self, fallback: T) -> T {
        self.to_opt().unwrap_or(fallback)
    }

    /// Parses the first occurrence, returning `None` on absence or parse
    /// failure. This is the non-throwing try-get form.
    #[must_use]
    pub fn to_opt<T: FromToken>(&self) -> Option<T> {
        self.first().and_then(parse_token)
    }

    /// Parses the first occurrence, returning a [`ValueError`] when the
    /// value is absent or does not match the target type's grammar.
    ///
    /// `key` is only used for diagnostics in the returned error.
    pub fn require<T: FromToken>(&self, key: &str) -> Result<T, ValueError> {
        let raw = self.first().ok_or_else(|| ValueError::Missing {
            key: key.to_string(),
        })?;
        parse_token(raw).ok_or_else(|| ValueError::Invalid {
            key: key.to_string(),
            value: raw.to_string(),
            expected: std::any::type_name::<T>(),
        })
    }

    /// Flattens every occurrence into a fixed-size sequence using the
    /// default separator set.
    #[must_use]
    pub fn to_array<T: FromToken>(&self) -> Box<[T]> {
        self.to_array_with(&DEFAULT_SEPARATORS)
    }

    /// Flattens every occurrence into a fixed-size sequence using the
    /// given separator set.
    #[must_use]
    pub fn to_array_with<T: FromToken>(&self, separators: &[char]) -> Box<[T]> {
        self.to_vec_with(separators).into_boxed_slice()
    }

    /// Flattens every occurrence into a growable list using the default
    /// separator set.
    #[must_use]
    pub fn to_vec<T: FromToken>(&self) -> Vec<T> {
        self.to_vec_with(&DEFAULT_SEPARATORS)
    }

    /// Flattens every occurrence into a growable list using the given
    /// separator set.
    ///
    /// Absent occurrences are skipped, each raw string is split on
    /// `separators` with empty pieces discarded, each piece is parsed
    /// independently, and unparseable pieces are silently dropped. The
    /// result preserves encounter order.
    ///
    /// An explicitly empty separator set performs no splitting: each raw
    /// string is treated as a single token.
    #[must_use]
    pub fn to_vec_with<T: FromToken>(&self, separators: &[char]) -> Vec<T> {
        let mut out = Vec::new();
        for raw in self.values.iter().copied().flatten() {
            for piece in raw.split(|c| separators.contains(&c)) {
                if let Some(value) = parse_token(piece) {
                    out.push(value);
                }
            }
        }
        out
    }
}

impl<'a> From<&'a str> for RawValues<'a> {
    fn from(value: &'a str) -> Self {
        Self::new(vec![Some(value)])
    }
}

impl<'a> From<Option<&'a str>> for RawValues<'a> {
    fn from(value: Option<&'a str>) -> Self {
        Self::new(vec![value])
    }
}

impl<'a> FromIterator<Option<&'a str>> for RawValues<'a> {
    fn from_iter<I: IntoIterator<Item = Option<&'a str>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for RawValues<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Some).collect())
    }
}
