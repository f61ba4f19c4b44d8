//! Timestamp formatting for tag values.
//!
//! Two layouts are in use:
//!
//! | Layout   | Example                     | Used by                             |
//! |----------|-----------------------------|-------------------------------------|
//! | ISO-8601 | `2010-07-18T17:15:00+0000`  | `set`, `open_graph`, googlebot      |
//! | ATOM     | `2010-07-18T17:15:00+00:00` | article and book Open Graph dates   |

use chrono::{DateTime, Datelike, FixedOffset};

/// Basic ISO-8601 with a colon-less offset.
const ISO8601: &str = "%Y-%m-%dT%H:%M:%S%z";

/// RFC 3339 profile used by Atom feeds.
const ATOM: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Format as `YYYY-MM-DDTHH:MM:SS±HHMM`.
#[inline]
pub fn to_iso8601(date: &DateTime<FixedOffset>) -> String {
    date.format(ISO8601).to_string()
}

/// Format as `YYYY-MM-DDTHH:MM:SS±HH:MM`.
#[inline]
pub fn to_atom(date: &DateTime<FixedOffset>) -> String {
    date.format(ATOM).to_string()
}

/// Day of week with Sunday as 0.
#[inline]
pub fn weekday_index(date: &DateTime<FixedOffset>) -> usize {
    date.weekday().num_days_from_sunday() as usize
}
