//! # Reqval Core
//!
//! Framework-independent typed parsing of raw string values.
//!
//! This crate provides the foundational types used throughout reqval:
//!
//! - [`FromToken`] - Per-type token grammar (`tryParse`-style, no panics)
//! - [`RawValues`] - All occurrences of a key as an ordered sequence of
//!   optional strings, with scalar and collection accessors
//! - [`ValueError`] - Structured error for callers that require a value
//! - [`enum_token!`] - Case-insensitive name parsing for unit enums
//!
//! The conversion policy is stated once and shared by every target type:
//! scalar accessors substitute a fallback when the value is absent or
//! unparseable, collection accessors silently drop unparseable pieces.
//!
//! ## Example
//!
//! ```rust
//! use reqval_core::RawValues;
//!
//! let values = RawValues::new(vec![Some("1,2"), Some("3"), Some("nope"), None]);
//!
//! // Scalar accessors only consider the first occurrence.
//! assert_eq!(values.to_or::<i32>(-1), -1); // "1,2" is not a single integer
//!
//! // Collection accessors flatten every occurrence.
//! assert_eq!(values.to_vec::<i32>(), vec![1, 2, 3]);
//! ```

#![doc(html_root_url = "https://docs.rs/reqval-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod token;
mod values;

pub use error::ValueError;
pub use token::{parse_token, FromToken};
pub use values::{RawValues, DEFAULT_SEPARATORS};
