//! Scalar tag values.
//!
//! Every setter accepts anything implementing [`IntoScalar`]. `None` stands
//! for an absent value and is what the skip-empty rule in
//! [`MetaTags::set`](crate::MetaTags::set) looks at.

pub mod date;
pub mod sanitize;

use chrono::{DateTime, FixedOffset, TimeZone};
use std::fmt;

/// A string-coercible tag value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    /// Any primitive integer, kept exact.
    Integer(i128),
    Number(f64),
    Boolean(bool),
    Timestamp(DateTime<FixedOffset>),
}

impl fmt::Display for Scalar {
    /// Numbers print without a trailing `.0`, booleans as `1` / empty,
    /// timestamps as `YYYY-MM-DDTHH:MM:SS±HHMM`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(true) => f.write_str("1"),
            Self::Boolean(false) => Ok(()),
            Self::Timestamp(date) => f.write_str(&date::to_iso8601(date)),
        }
    }
}

// ============================================================================
// Conversion
// ============================================================================

/// Conversion into an optional [`Scalar`].
pub trait IntoScalar {
    fn into_scalar(self) -> Option<Scalar>;
}

impl IntoScalar for Scalar {
    fn into_scalar(self) -> Option<Scalar> {
        Some(self)
    }
}

impl<T: IntoScalar> IntoScalar for Option<T> {
    fn into_scalar(self) -> Option<Scalar> {
        self.and_then(IntoScalar::into_scalar)
    }
}

impl IntoScalar for &str {
    fn into_scalar(self) -> Option<Scalar> {
        Some(Scalar::Text(self.to_owned()))
    }
}

impl IntoScalar for String {
    fn into_scalar(self) -> Option<Scalar> {
        Some(Scalar::Text(self))
    }
}

impl IntoScalar for &String {
    fn into_scalar(self) -> Option<Scalar> {
        Some(Scalar::Text(self.clone()))
    }
}

impl IntoScalar for bool {
    fn into_scalar(self) -> Option<Scalar> {
        Some(Scalar::Boolean(self))
    }
}

impl<Tz: TimeZone> IntoScalar for DateTime<Tz> {
    fn into_scalar(self) -> Option<Scalar> {
        Some(Scalar::Timestamp(self.fixed_offset()))
    }
}

macro_rules! impl_number {
    ($variant:ident as $target:ty: $($ty:ty),*) => {
        $(
            impl IntoScalar for $ty {
                fn into_scalar(self) -> Option<Scalar> {
                    Some(Scalar::$variant(self as $target))
                }
            }
        )*
    };
}

impl_number!(Integer as i128: i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_number!(Number as f64: f32, f64);

/// Convert to the stored string form, keeping absence.
///
/// Timestamps are formatted; nothing else is touched.
#[inline]
pub(crate) fn display(value: impl IntoScalar) -> Option<String> {
    value.into_scalar().map(|scalar| scalar.to_string())
}
