//! # Reqval HTTP
//!
//! Adapters that expose HTTP request surfaces as typed multi-value
//! sources, plus a JSON response envelope with a stable field layout.
//!
//! ## Value sources
//!
//! The [`ValueSource`] trait is the keyed accessor surface: one `raw`
//! method per adapter, and a provided family of typed accessors on top
//! of it so the fallback/drop policy is stated once.
//!
//! | Adapter | Source |
//! |---------|--------|
//! | [`http::HeaderMap`] | HTTP headers (all occurrences, in order) |
//! | [`ParamMap`] | Query strings and urlencoded form bodies |
//!
//! ## Example
//!
//! ```rust
//! use reqval_http::{ParamMap, ValueSource};
//!
//! let query = ParamMap::parse_query("limit=10&ids=1,2&ids=3");
//!
//! assert_eq!(query.get_value::<i32>("limit"), 10);
//! assert_eq!(query.get_or::<i32>("offset", 20), 20);
//! assert_eq!(query.get_vec::<i32>("ids"), vec![1, 2, 3]);
//! ```
//!
//! ## Response envelope
//!
//! [`Envelope`] standardizes API response bodies as
//! `{ "meta": .., "pagination": .., "data": .. }` with `pagination` and
//! `data` omitted entirely when absent:
//!
//! ```rust
//! use reqval_http::Envelope;
//!
//! let body = Envelope::ok("Hello there!").with_offset_pagination(1, 2, 3);
//! let response = body.into_response();
//!
//! assert_eq!(response.status(), http::StatusCode::OK);
//! ```

#![doc(html_root_url = "https://docs.rs/reqval-http/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod envelope;
mod params;
pub mod request;
mod source;

pub use envelope::{Envelope, Meta, OffsetPagination, Pagination};
pub use params::ParamMap;
pub use source::ValueSource;

// Re-export the core parsing surface so adapter users need one import.
pub use reqval_core::{parse_token, FromToken, RawValues, ValueError, DEFAULT_SEPARATORS};
