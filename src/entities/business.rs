//! Opening hours.

use crate::value::date;
use chrono::{DateTime, TimeZone};
use std::{fmt, str::FromStr};

/// Day of week, numbered from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// 0 is Sunday, 6 is Saturday.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The weekday a date falls on, in the date's own offset.
    pub fn from_date<Tz: TimeZone>(date: &DateTime<Tz>) -> Self {
        Self::ALL[date::weekday_index(&date.fixed_offset())]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a day name that is not a weekday.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown weekday `{0}`")]
pub struct UnknownWeekday(pub String);

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    /// Case-insensitive full day name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == lower)
            .ok_or_else(|| UnknownWeekday(s.to_owned()))
    }
}

/// Opening hours for one day, e.g. monday 09:00 to 17:00.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessDay {
    pub day: Weekday,
    pub start: String,
    pub end: String,
}

impl BusinessDay {
    pub fn new(day: Weekday, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            day,
            start: start.into(),
            end: end.into(),
        }
    }

    /// Build from a day name such as `"Monday"`.
    pub fn from_name(
        day: &str,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Result<Self, UnknownWeekday> {
        Ok(Self::new(day.parse()?, start, end))
    }

    /// Build from the weekday a date falls on.
    pub fn from_date<Tz: TimeZone>(
        date: &DateTime<Tz>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self::new(Weekday::from_date(date), start, end)
    }
}
