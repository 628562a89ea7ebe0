//! Times, datetimes and interval endpoints with an optional fixed offset.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use super::UtcOffset;
use crate::iso::duration::{Direction, Shift};

/// A time of day, optionally pinned to a UTC offset.
///
/// A missing offset means local time, which is not the same as UTC.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Time {
    naive: NaiveTime,
    offset: Option<UtcOffset>,
}

impl Time {
    #[must_use]
    pub const fn new(naive: NaiveTime, offset: Option<UtcOffset>) -> Self {
        Self { naive, offset }
    }

    #[must_use]
    pub const fn naive(&self) -> NaiveTime {
        self.naive
    }

    #[must_use]
    pub const fn offset(&self) -> Option<&UtcOffset> {
        self.offset.as_ref()
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.naive)?;
        if let Some(offset) = &self.offset {
            write!(f, " {}", offset.name())?;
        }
        Ok(())
    }
}

/// A calendar date and time of day, optionally pinned to a UTC offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateTime {
    naive: NaiveDateTime,
    offset: Option<UtcOffset>,
}

impl DateTime {
    #[must_use]
    pub const fn new(naive: NaiveDateTime, offset: Option<UtcOffset>) -> Self {
        Self { naive, offset }
    }

    /// Midnight at the start of `date`, local time.
    #[must_use]
    pub fn midnight(date: NaiveDate) -> Self {
        Self::new(date.and_time(NaiveTime::MIN), None)
    }

    #[must_use]
    pub const fn naive(&self) -> NaiveDateTime {
        self.naive
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.naive.date()
    }

    #[must_use]
    pub const fn time(&self) -> NaiveTime {
        self.naive.time()
    }

    #[must_use]
    pub const fn offset(&self) -> Option<&UtcOffset> {
        self.offset.as_ref()
    }

    /// The same instant expressed in UTC, or `None` for local times and
    /// results outside chrono's range.
    #[must_use]
    pub fn to_utc(&self) -> Option<NaiveDateTime> {
        let offset = self.offset.as_ref()?;
        self.naive.checked_sub_signed(offset.as_time_delta())
    }

    /// Moves the wall-clock value by `duration`, keeping the offset.
    #[must_use]
    pub fn shift<D: Shift>(&self, duration: &D, direction: Direction) -> Option<Self> {
        let naive = duration.shift_datetime(self.naive, direction)?;
        Some(Self::new(naive, self.offset.clone()))
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.naive.date(), self.naive.time())?;
        if let Some(offset) = &self.offset {
            write!(f, " {}", offset.name())?;
        }
        Ok(())
    }
}

/// An interval endpoint or repeating-interval element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Moment {
    Date(NaiveDate),
    DateTime(DateTime),
}

impl Moment {
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::DateTime(_) => None,
        }
    }

    #[must_use]
    pub const fn as_datetime(&self) -> Option<&DateTime> {
        match self {
            Self::Date(_) => None,
            Self::DateTime(datetime) => Some(datetime),
        }
    }

    /// Returns this moment as a datetime, using midnight for a bare date.
    #[must_use]
    pub fn to_datetime(&self) -> DateTime {
        match self {
            Self::Date(date) => DateTime::midnight(*date),
            Self::DateTime(datetime) => datetime.clone(),
        }
    }

    /// Moves this moment by `duration`. Dates stay dates and move by whole days.
    #[must_use]
    pub fn shift<D: Shift>(&self, duration: &D, direction: Direction) -> Option<Self> {
        match self {
            Self::Date(date) => duration.shift_date(*date, direction).map(Self::Date),
            Self::DateTime(datetime) => datetime.shift(duration, direction).map(Self::DateTime),
        }
    }
}

impl From<NaiveDate> for Moment {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<DateTime> for Moment {
    fn from(datetime: DateTime) -> Self {
        Self::DateTime(datetime)
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{date}"),
            Self::DateTime(datetime) => write!(f, "{datetime}"),
        }
    }
}

/// An interval with both endpoints known.
///
/// `end` may precede `start`; the endpoints are kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedInterval {
    pub start: Moment,
    pub end: Moment,
}

impl ResolvedInterval {
    #[must_use]
    pub const fn new(start: Moment, end: Moment) -> Self {
        Self { start, end }
    }

    /// The implicit duration `end - start`.
    ///
    /// Dates count from midnight. When both endpoints carry an offset the
    /// difference is taken between the UTC instants, otherwise between the
    /// wall-clock values.
    #[must_use]
    pub fn elapsed(&self) -> TimeDelta {
        let start = self.start.to_datetime();
        let end = self.end.to_datetime();
        let wall = end.naive().signed_duration_since(start.naive());
        match (start.offset(), end.offset()) {
            (Some(from), Some(to)) => wall - (to.as_time_delta() - from.as_time_delta()),
            _ => wall,
        }
    }
}

impl fmt::Display for ResolvedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}
