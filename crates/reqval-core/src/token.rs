//! Per-type token grammars.
//!
//! [`FromToken`] is the single extension point of the parsing layer: one
//! `tryParse`-style function per target type. Everything else (fallback
//! substitution, flattening, silent drops) is generic over it.

use uuid::Uuid;

/// Parses a single raw token into a typed value.
///
/// Implementations receive a token that is already trimmed and non-empty
/// (see [`parse_token`]) and return `None` when the token does not match
/// the type's grammar. Implementations never panic.
///
/// # Example
///
/// ```rust
/// use reqval_core::FromToken;
///
/// assert_eq!(i32::from_token("-42"), Some(-42));
/// assert_eq!(i32::from_token("nope"), None);
/// assert_eq!(bool::from_token("True"), Some(true));
/// ```
pub trait FromToken: Sized {
    /// Attempts to parse `token` into this type.
    fn from_token(token: &str) -> Option<Self>;
}

/// Parses a raw token, treating empty and whitespace-only input as absent.
///
/// Surrounding ASCII whitespace is trimmed before the type grammar is
/// applied, so `" 42 "` parses as an integer the same way `"42"` does.
pub fn parse_token<T: FromToken>(token: &str) -> Option<T> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    T::from_token(token)
}

macro_rules! impl_from_token_via_from_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromToken for $ty {
                fn from_token(token: &str) -> Option<Self> {
                    token.parse().ok()
                }
            }
        )+
    };
}

// Integers: optional sign plus decimal digits. Floats: invariant decimal
// with optional exponent. Both match Rust's `FromStr` grammar exactly.
impl_from_token_via_from_str!(i8, i16, i32, i64, i128, isize);
impl_from_token_via_from_str!(u8, u16, u32, u64, u128, usize);
impl_from_token_via_from_str!(f32, f64);

impl FromToken for bool {
    /// Accepts `true`/`1`/`t` and `false`/`0`/`f`, case-insensitively.
    /// Any other token is a parse failure, not `false`.
    fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("true")
            || token.eq_ignore_ascii_case("t")
            || token == "1"
        {
            Some(true)
        } else if token.eq_ignore_ascii_case("false")
            || token.eq_ignore_ascii_case("f")
            || token == "0"
        {
            Some(false)
        } else {
            None
        }
    }
}

impl FromToken for String {
    fn from_token(token: &str) -> Option<Self> {
        Some(token.to_string())
    }
}

impl FromToken for Uuid {
    /// Accepts the standard 32-hex-digit forms: hyphenated, simple,
    /// braced and URN.
    fn from_token(token: &str) -> Option<Self> {
        Uuid::parse_str(token).ok()
    }
}

/// Implements [`FromToken`] for a unit enum by case-insensitive variant
/// name matching.
///
/// The lookup is a name match, never a numeric index parse: `"1"` does not
/// resolve to the second variant. Unknown names are a parse failure and
/// follow the usual fallback/drop rules.
///
/// # Example
///
/// ```rust
/// use reqval_core::{enum_token, FromToken};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// enum SortOrder {
///     #[default]
///     Asc,
///     Desc,
/// }
///
/// enum_token!(SortOrder { Asc, Desc });
///
/// assert_eq!(SortOrder::from_token("desc"), Some(SortOrder::Desc));
/// assert_eq!(SortOrder::from_token("DESC"), Some(SortOrder::Desc));
/// assert_eq!(SortOrder::from_token("unknown"), None);
/// ```
#[macro_export]
macro_rules! enum_token {
    ($ty:ty { $($variant:ident),+ $(,)? }) => {
        impl $crate::FromToken for $ty {
            fn from_token(token: &str) -> Option<Self> {
                $(
                    if token.eq_ignore_ascii_case(stringify!($variant)) {
                        return Some(Self::$variant);
                    }
                )+
                None
            }
        }
    };
}
