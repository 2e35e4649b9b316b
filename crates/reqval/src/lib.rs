//! # Reqval
//!
//! **Typed access to multi-value HTTP request parameters**
//!
//! Reqval turns the raw string values found in request surfaces (headers,
//! query strings, urlencoded form bodies) into strongly typed primitive
//! values, and ships a JSON response envelope with a stable field layout:
//!
//! - **Fallback, never throw** - scalar accessors substitute a fallback
//!   (or the type's zero value) when a value is absent or unparseable
//! - **Flattening collections** - repeated keys and comma/whitespace
//!   separated values flatten into typed arrays, silently dropping the
//!   pieces that do not parse
//! - **One grammar per type** - integers, floats, booleans, UUIDs and
//!   unit enums share a single generic conversion layer
//! - **Response envelope** - `{ meta, pagination, data }` bodies with
//!   stable key order and omission rules
//!
//! ## Quick Start
//!
//! ```rust
//! use reqval::prelude::*;
//!
//! let query = ParamMap::parse_query("limit=10&ids=1,2&ids=3");
//!
//! assert_eq!(query.get_value::<i32>("limit"), 10);
//! assert_eq!(query.get_or::<i32>("offset", 0), 0);
//! assert_eq!(query.get_vec::<i32>("ids"), vec![1, 2, 3]);
//!
//! let body = Envelope::ok("Hello there!").with_offset_pagination(1, 2, 3);
//! assert_eq!(body.meta().code().as_u16(), 200);
//! ```

#![doc(html_root_url = "https://docs.rs/reqval/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export the parsing core
pub use reqval_core as core;

// Re-export the HTTP adapters and envelope
pub use reqval_http as http;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use reqval::prelude::*;
/// ```
pub mod prelude {
    pub use reqval_core::{
        enum_token, parse_token, FromToken, RawValues, ValueError, DEFAULT_SEPARATORS,
    };

    pub use reqval_http::{Envelope, Meta, OffsetPagination, Pagination, ParamMap, ValueSource};
}
