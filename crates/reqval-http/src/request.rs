//! Request-level conveniences: well-known headers and URI reconstruction.

use crate::ValueSource;
use http::HeaderMap;
use url::Url;

/// Reconstructs the full request URL from its parts.
///
/// `host` may carry an explicit port (`"example.com:8080"`); when it does
/// not, the scheme's well-known default applies (`https` is 443, `http`
/// is 80) and is omitted from the rendered URL.
///
/// # Example
///
/// ```rust
/// use reqval_http::request::request_uri;
///
/// let url = request_uri("https", "example.com", "/users?limit=10").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/users?limit=10");
/// assert_eq!(url.port_or_known_default(), Some(443));
/// ```
pub fn request_uri(scheme: &str, host: &str, path_and_query: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!("{scheme}://{host}{path_and_query}"))
}

/// Returns the value of the `Accept` header, or `None` if not present.
#[must_use]
pub fn accept(headers: &HeaderMap) -> Option<&str> {
    headers.get_string("accept")
}

/// Returns the value of the `Accept-Encoding` header, or `None` if not present.
#[must_use]
pub fn accept_encoding(headers: &HeaderMap) -> Option<&str> {
    headers.get_string("accept-encoding")
}

/// Returns the value of the `Accept-Language` header, or `None` if not present.
#[must_use]
pub fn accept_language(headers: &HeaderMap) -> Option<&str> {
    headers.get_string("accept-language")
}

/// Returns the value of the `User-Agent` header, or `None` if not present.
#[must_use]
pub fn user_agent(headers: &HeaderMap) -> Option<&str> {
    headers.get_string("user-agent")
}

/// Returns the value of the `Referer` header, or `None` if not present.
#[must_use]
pub fn referrer(headers: &HeaderMap) -> Option<&str> {
    headers.get_string("referer")
}

/// Returns the value of the `X-Forwarded-For` header, or `None` if not present.
#[must_use]
pub fn forwarded_for(headers: &HeaderMap) -> Option<&str> {
    headers.get_string("x-forwarded-for")
}
