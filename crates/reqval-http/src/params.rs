//! Ordered parameter maps for query strings and urlencoded form bodies.

use crate::ValueSource;
use indexmap::IndexMap;
use reqval_core::RawValues;
use std::borrow::Cow;

/// An ordered key to many-strings map.
///
/// `ParamMap` is the one adapter shape shared by query strings and
/// `application/x-www-form-urlencoded` bodies: both are percent-encoded
/// key/value pair lists where a key may repeat. Keys keep first-seen
/// order; values keep encounter order within a key.
///
/// # Example
///
/// ```rust
/// use reqval_http::{ParamMap, ValueSource};
///
/// let query = ParamMap::parse_query("?ids=1,2&ids=3&name=Hello%20World");
///
/// assert_eq!(query.get_vec::<i32>("ids"), vec![1, 2, 3]);
/// assert_eq!(query.get_string("name"), Some("Hello World"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParamMap {
    inner: IndexMap<String, Vec<String>>,
}

impl ParamMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a URL query string. A leading `?` is tolerated.
    ///
    /// Percent-encoding is decoded and `+` becomes a space. A key without
    /// `=` contributes an empty-string value, which scalar accessors
    /// treat as absent.
    #[must_use]
    pub fn parse_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let map = Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()));
        tracing::trace!(keys = map.len(), "parsed query string");
        map
    }

    /// Parses an `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn parse_form(body: &[u8]) -> Self {
        let map = Self::from_pairs(url::form_urlencoded::parse(body));
        tracing::trace!(keys = map.len(), "parsed form body");
        map
    }

    fn from_pairs<'p>(pairs: impl Iterator<Item = (Cow<'p, str>, Cow<'p, str>)>) -> Self {
        let mut map = Self::new();
        for (key, value) in pairs {
            map.append(key.into_owned(), value.into_owned());
        }
        map
    }

    /// Appends an occurrence of `key` with the given value.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.entry(key.into()).or_default().push(value.into());
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Returns all occurrences of `key`, or `None` if absent.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Option<&[String]> {
        self.inner.get(key).map(Vec::as_slice)
    }

    /// Returns the keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Returns the number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the map holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl ValueSource for ParamMap {
    fn raw(&self, key: &str) -> RawValues<'_> {
        self.inner
            .get(key)
            .map(|values| values.iter().map(|value| Some(value.as_str())).collect())
            .unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.append(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_parse_query_basic() {
        let query = ParamMap::parse_query("limit=10&offset=20");

        assert_eq!(query.get_value::<i32>("limit"), 10);
        assert_eq!(query.get_value::<i32>("offset"), 20);
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn test_parse_query_leading_question_mark() {
        let query = ParamMap::parse_query("?limit=10");
        assert_eq!(query.get_value::<i32>("limit"), 10);
    }

    #[test]
    fn test_parse_query_percent_decoding() {
        let query = ParamMap::parse_query("name=Hello%20World&q=rust%2Blang&s=a+b");

        assert_eq!(query.get_string("name"), Some("Hello World"));
        assert_eq!(query.get_string("q"), Some("rust+lang"));
        assert_eq!(query.get_string("s"), Some("a b"));
    }

    #[test]
    fn test_empty_value_is_absent_for_scalars() {
        let fallback: Uuid = "c77e1e78-4d79-4a3a-8776-54f6a6fd9587".parse().unwrap();
        let expected: Uuid = "7ce565ca-3dfe-4bc8-9166-4c4a5d1a9cbb".parse().unwrap();

        let query = ParamMap::parse_query("a=&b=nope&c=7ce565ca-3dfe-4bc8-9166-4c4a5d1a9cbb");

        assert_eq!(query.get_value::<Uuid>("a"), Uuid::nil());
        assert_eq!(query.get_or::<Uuid>("a", fallback), fallback);

        assert_eq!(query.get_value::<Uuid>("b"), Uuid::nil());
        assert_eq!(query.get_or::<Uuid>("b", fallback), fallback);

        assert_eq!(query.get_value::<Uuid>("c"), expected);
        assert_eq!(query.get_or::<Uuid>("c", fallback), expected);
    }

    #[test]
    fn test_get_opt_mirrors_or_null() {
        let query = ParamMap::parse_query("a=&b=nope&c=42");

        assert_eq!(query.get_opt::<i32>("a"), None);
        assert_eq!(query.get_opt::<i32>("b"), None);
        assert_eq!(query.get_opt::<i32>("c"), Some(42));
    }

    #[test]
    fn test_repeated_keys_flatten_in_order() {
        let query = ParamMap::parse_query("ids=3,1&ids=2&ids=nope");

        assert_eq!(query.get_vec::<i32>("ids"), vec![3, 1, 2]);
        assert_eq!(query.get_array::<i32>("ids").as_ref(), &[3, 1, 2]);
    }

    #[test]
    fn test_array_and_vec_agree() {
        let query = ParamMap::parse_query("ids=1,2&ids=nope&ids=3");

        let array = query.get_array::<i64>("ids");
        let vec = query.get_vec::<i64>("ids");
        assert_eq!(array.as_ref(), vec.as_slice());
    }

    #[test]
    fn test_parse_form_body() {
        let form = ParamMap::parse_form(b"name=Alice&age=30&tags=a,b&tags=c");

        assert_eq!(form.get_string("name"), Some("Alice"));
        assert_eq!(form.get_value::<u32>("age"), 30);
        assert_eq!(
            form.get_vec::<String>("tags"),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_key_without_equals() {
        let query = ParamMap::parse_query("flag&x=1");

        assert!(query.contains_key("flag"));
        assert_eq!(query.get_string("flag"), None);
        assert_eq!(query.get_opt::<bool>("flag"), None);
    }

    #[test]
    fn test_keys_keep_first_seen_order() {
        let query = ParamMap::parse_query("b=1&a=2&b=3");

        let keys: Vec<&str> = query.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(query.get_all("b"), Some(&["1".to_string(), "3".to_string()][..]));
    }

    #[test]
    fn test_from_iterator() {
        let map: ParamMap = [("a", "1"), ("a", "2"), ("b", "x")].into_iter().collect();

        assert_eq!(map.get_vec::<i32>("a"), vec![1, 2]);
        assert_eq!(map.get_string("b"), Some("x"));
    }
}
