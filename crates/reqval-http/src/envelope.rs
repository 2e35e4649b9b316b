//! JSON response envelope with a stable field layout.
//!
//! An [`Envelope`] standardizes API response bodies as an object with the
//! keys `meta`, `pagination` and `data`, in that order. `pagination` and
//! `data` are omitted entirely when absent, and `meta.error` is omitted
//! when there is no error message.
//!
//! The envelope serializes through two independent paths that must agree
//! byte-for-byte: the [`serde::Serialize`] impl and [`Envelope::to_value`].
//!
//! # Example
//!
//! ```rust
//! use reqval_http::Envelope;
//!
//! let body = Envelope::ok("Hello there!").with_offset_pagination(1, 2, 3);
//!
//! assert_eq!(
//!     serde_json::to_string(&body).unwrap(),
//!     r#"{"meta":{"code":200},"pagination":{"total":1,"limit":2,"offset":3},"data":"Hello there!"}"#
//! );
//! ```

use bytes::Bytes;
use http::{header, Response, StatusCode};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};
use std::fmt;

/// Meta data of a JSON response: a status code and an optional error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meta {
    code: StatusCode,
    error: Option<String>,
}

impl Meta {
    /// Creates meta data with the given status code and no error.
    #[must_use]
    pub const fn new(code: StatusCode) -> Self {
        Self { code, error: None }
    }

    /// Returns the status code.
    #[must_use]
    pub const fn code(&self) -> StatusCode {
        self.code
    }

    /// Returns the error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Default for Meta {
    fn default() -> Self {
        Self::new(StatusCode::OK)
    }
}

impl Serialize for Meta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 1 + usize::from(self.error.is_some());
        let mut state = serializer.serialize_struct("Meta", len)?;
        state.serialize_field("code", &self.code.as_u16())?;
        if let Some(error) = &self.error {
            state.serialize_field("error", error)?;
        }
        state.end()
    }
}

/// Serialization capability for the `pagination` part of an envelope.
///
/// Implementations render themselves as some JSON object; the envelope
/// does not care about the shape beyond that. [`OffsetPagination`] is the
/// stock implementation.
pub trait Pagination: fmt::Debug + Send + Sync {
    /// Renders the pagination information as a JSON value.
    fn to_value(&self) -> Value;
}

/// Offset-based pagination: total item count, page limit and offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OffsetPagination {
    /// Total amount of items across all pages.
    pub total: i64,
    /// Maximum amount of items per page.
    pub limit: i64,
    /// Offset of the first returned item.
    pub offset: i64,
}

impl OffsetPagination {
    /// Creates pagination information from the three counters.
    #[must_use]
    pub const fn new(total: i64, limit: i64, offset: i64) -> Self {
        Self { total, limit, offset }
    }
}

impl Pagination for OffsetPagination {
    fn to_value(&self) -> Value {
        json!({
            "total": self.total,
            "limit": self.limit,
            "offset": self.offset,
        })
    }
}

/// A standardized JSON response body.
///
/// Constructors fix the meta code to a status family; the `with_` setters
/// chain for the rest.
///
/// # Example
///
/// ```rust
/// use reqval_http::Envelope;
///
/// let body = Envelope::bad_request("msg");
///
/// assert_eq!(
///     serde_json::to_string(&body).unwrap(),
///     r#"{"meta":{"code":400,"error":"msg"}}"#
/// );
/// ```
#[derive(Debug)]
pub struct Envelope {
    meta: Meta,
    pagination: Option<Box<dyn Pagination>>,
    data: Option<Value>,
}

impl Envelope {
    /// Creates an envelope with the given status code, no error, no
    /// pagination and no data.
    #[must_use]
    pub fn status(code: StatusCode) -> Self {
        Self {
            meta: Meta::new(code),
            pagination: None,
            data: None,
        }
    }

    /// Creates a `200 OK` envelope carrying `data`.
    #[must_use]
    pub fn ok(data: impl Into<Value>) -> Self {
        Self::status(StatusCode::OK).with_data(data)
    }

    /// Creates a `200 OK` envelope carrying `data` and pagination.
    #[must_use]
    pub fn ok_with(data: impl Into<Value>, pagination: impl Pagination + 'static) -> Self {
        Self::ok(data).with_pagination(pagination)
    }

    /// Creates a `201 Created` envelope carrying `data`.
    #[must_use]
    pub fn created(data: impl Into<Value>) -> Self {
        Self::status(StatusCode::CREATED).with_data(data)
    }

    /// Creates a `400 Bad Request` envelope with an error message.
    #[must_use]
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::status(StatusCode::BAD_REQUEST).with_error(error)
    }

    /// Creates a `401 Unauthorized` envelope with an error message.
    #[must_use]
    pub fn unauthorized(error: impl Into<String>) -> Self {
        Self::status(StatusCode::UNAUTHORIZED).with_error(error)
    }

    /// Creates a `403 Forbidden` envelope with an error message.
    #[must_use]
    pub fn forbidden(error: impl Into<String>) -> Self {
        Self::status(StatusCode::FORBIDDEN).with_error(error)
    }

    /// Creates a `404 Not Found` envelope with an error message.
    #[must_use]
    pub fn not_found(error: impl Into<String>) -> Self {
        Self::status(StatusCode::NOT_FOUND).with_error(error)
    }

    /// Creates a `500 Internal Server Error` envelope with an error message.
    #[must_use]
    pub fn internal_server_error(error: impl Into<String>) -> Self {
        Self::status(StatusCode::INTERNAL_SERVER_ERROR).with_error(error)
    }

    /// Sets the meta status code.
    #[must_use]
    pub fn with_status(mut self, code: StatusCode) -> Self {
        self.meta.code = code;
        self
    }

    /// Sets the meta error message.
    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.meta.error = Some(error.into());
        self
    }

    /// Sets the data payload.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Serializes `data` into the payload slot.
    ///
    /// Use this for payload types that implement [`serde::Serialize`] but
    /// not `Into<serde_json::Value>`.
    pub fn with_serialized<T: Serialize>(self, data: &T) -> Result<Self, serde_json::Error> {
        let value = serde_json::to_value(data)?;
        Ok(self.with_data(value))
    }

    /// Sets the pagination information.
    #[must_use]
    pub fn with_pagination(mut self, pagination: impl Pagination + 'static) -> Self {
        self.pagination = Some(Box::new(pagination));
        self
    }

    /// Sets offset-based pagination from the three counters.
    #[must_use]
    pub fn with_offset_pagination(self, total: i64, limit: i64, offset: i64) -> Self {
        self.with_pagination(OffsetPagination::new(total, limit, offset))
    }

    /// Returns the meta data.
    #[must_use]
    pub const fn meta(&self) -> &Meta {
        &self.meta
    }

    /// Returns the pagination information, if any.
    #[must_use]
    pub fn pagination(&self) -> Option<&dyn Pagination> {
        self.pagination.as_deref()
    }

    /// Returns the data payload, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Renders the envelope as a JSON value tree.
    ///
    /// This is an independent serialization path from the
    /// [`serde::Serialize`] impl; the two are required to produce
    /// byte-identical output.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut meta = Map::new();
        meta.insert("code".to_string(), self.meta.code.as_u16().into());
        if let Some(error) = &self.meta.error {
            meta.insert("error".to_string(), error.clone().into());
        }

        let mut body = Map::new();
        body.insert("meta".to_string(), Value::Object(meta));
        if let Some(pagination) = &self.pagination {
            body.insert("pagination".to_string(), pagination.to_value());
        }
        if let Some(data) = &self.data {
            body.insert("data".to_string(), data.clone());
        }
        Value::Object(body)
    }

    /// Builds an HTTP response with the meta code as status and the
    /// envelope as an `application/json` body.
    ///
    /// # Panics
    ///
    /// Panics if JSON serialization fails.
    #[must_use]
    pub fn into_response(self) -> Response<Bytes> {
        let body = serde_json::to_vec(&self).expect("JSON serialization failed");

        Response::builder()
            .status(self.meta.code)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Bytes::from(body))
            .expect("Failed to build response")
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::status(StatusCode::OK)
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 1 + usize::from(self.pagination.is_some()) + usize::from(self.data.is_some());
        let mut state = serializer.serialize_struct("Envelope", len)?;
        state.serialize_field("meta", &self.meta)?;
        if let Some(pagination) = &self.pagination {
            state.serialize_field("pagination", &pagination.to_value())?;
        }
        if let Some(data) = &self.data {
            state.serialize_field("data", data)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(envelope: &Envelope) -> String {
        let via_serde = serde_json::to_string(envelope).unwrap();
        let via_value = serde_json::to_string(&envelope.to_value()).unwrap();
        // Both serialization paths must agree byte-for-byte.
        assert_eq!(via_serde, via_value);
        via_serde
    }

    #[test]
    fn test_ok_with_pagination_layout() {
        let body = Envelope::ok("x").with_offset_pagination(1, 2, 3);

        assert_eq!(
            render(&body),
            r#"{"meta":{"code":200},"pagination":{"total":1,"limit":2,"offset":3},"data":"x"}"#
        );
    }

    #[test]
    fn test_bad_request_layout() {
        let body = Envelope::bad_request("msg");

        assert_eq!(render(&body), r#"{"meta":{"code":400,"error":"msg"}}"#);
    }

    #[test]
    fn test_ok_without_pagination_or_error() {
        let body = Envelope::ok("Hello there!");

        assert_eq!(body.meta().code(), StatusCode::OK);
        assert_eq!(body.meta().error(), None);
        assert!(body.pagination().is_none());

        assert_eq!(render(&body), r#"{"meta":{"code":200},"data":"Hello there!"}"#);
    }

    #[test]
    fn test_status_constructors() {
        assert_eq!(Envelope::created(1).meta().code(), StatusCode::CREATED);
        assert_eq!(
            Envelope::unauthorized("x").meta().code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(Envelope::forbidden("x").meta().code(), StatusCode::FORBIDDEN);
        assert_eq!(Envelope::not_found("x").meta().code(), StatusCode::NOT_FOUND);
        assert_eq!(
            Envelope::internal_server_error("Oh noes!!!!").meta().code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_server_error_fields() {
        let body = Envelope::internal_server_error("Oh noes!!!!");

        assert_eq!(body.meta().error(), Some("Oh noes!!!!"));
        assert!(body.pagination().is_none());
        assert!(body.data().is_none());
    }

    #[test]
    fn test_error_with_data_payload() {
        let body = Envelope::not_found("gone").with_data(json!({"id": 7}));

        assert_eq!(
            render(&body),
            r#"{"meta":{"code":404,"error":"gone"},"data":{"id":7}}"#
        );
    }

    #[test]
    fn test_with_serialized_payload() {
        #[derive(Serialize)]
        struct User {
            id: u64,
            name: String,
        }

        let body = Envelope::status(StatusCode::OK)
            .with_serialized(&User {
                id: 1,
                name: "Alice".into(),
            })
            .unwrap();

        assert_eq!(
            render(&body),
            r#"{"meta":{"code":200},"data":{"id":1,"name":"Alice"}}"#
        );
    }

    #[test]
    fn test_chained_setters() {
        let body = Envelope::ok("x")
            .with_status(StatusCode::ACCEPTED)
            .with_error("warn");

        assert_eq!(body.meta().code(), StatusCode::ACCEPTED);
        assert_eq!(body.meta().error(), Some("warn"));
    }

    #[test]
    fn test_offset_pagination_backends_agree() {
        let pagination = OffsetPagination::new(100, 25, 50);

        assert_eq!(
            serde_json::to_string(&pagination).unwrap(),
            serde_json::to_string(&pagination.to_value()).unwrap()
        );
    }

    #[derive(Debug)]
    struct CursorPagination {
        next: &'static str,
    }

    impl Pagination for CursorPagination {
        fn to_value(&self) -> Value {
            json!({ "next": self.next })
        }
    }

    #[test]
    fn test_custom_pagination_shape() {
        let body = Envelope::ok(1).with_pagination(CursorPagination { next: "abc" });

        assert_eq!(
            render(&body),
            r#"{"meta":{"code":200},"pagination":{"next":"abc"},"data":1}"#
        );
    }

    #[test]
    fn test_into_response() {
        let response = Envelope::bad_request("msg").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            response.body().as_ref(),
            br#"{"meta":{"code":400,"error":"msg"}}"#
        );
    }
}
