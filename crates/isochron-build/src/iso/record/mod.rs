//! Intermediate records handed over by the parsing layer.
//!
//! These types are designed for:
//! - Text preservation: numeric fields stay strings so the builder controls
//!   width semantics and conversion
//! - Type safety: each record family is a sum type, so only one date
//!   representation or one interval shape can be populated at a time
//!
//! Records are transient: built once by the parser, consumed by a builder.

mod date;
mod duration;
mod interval;
mod time;

pub use date::{DateFields, DatetimeFields};
pub use duration::DurationFields;
pub use interval::{EndpointFields, IntervalFields, Repeat, RepeatingIntervalFields};
pub use time::{TimeFields, TimezoneFields};

/// Any record the parsing layer can produce, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedRecord {
    Date(DateFields),
    Time(TimeFields),
    DateTime(DatetimeFields),
    Duration(DurationFields),
    Interval(IntervalFields),
    RepeatingInterval(RepeatingIntervalFields),
    Timezone(TimezoneFields),
}

impl ParsedRecord {
    /// Returns the lowercase kind name of this record.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Date(_) => "date",
            Self::Time(_) => "time",
            Self::DateTime(_) => "datetime",
            Self::Duration(_) => "duration",
            Self::Interval(_) => "interval",
            Self::RepeatingInterval(_) => "repeatinginterval",
            Self::Timezone(_) => "timezone",
        }
    }
}

impl From<DateFields> for ParsedRecord {
    fn from(fields: DateFields) -> Self {
        Self::Date(fields)
    }
}

impl From<TimeFields> for ParsedRecord {
    fn from(fields: TimeFields) -> Self {
        Self::Time(fields)
    }
}

impl From<DatetimeFields> for ParsedRecord {
    fn from(fields: DatetimeFields) -> Self {
        Self::DateTime(fields)
    }
}

impl From<DurationFields> for ParsedRecord {
    fn from(fields: DurationFields) -> Self {
        Self::Duration(fields)
    }
}

impl From<IntervalFields> for ParsedRecord {
    fn from(fields: IntervalFields) -> Self {
        Self::Interval(fields)
    }
}

impl From<RepeatingIntervalFields> for ParsedRecord {
    fn from(fields: RepeatingIntervalFields) -> Self {
        Self::RepeatingInterval(fields)
    }
}

impl From<TimezoneFields> for ParsedRecord {
    fn from(fields: TimezoneFields) -> Self {
        Self::Timezone(fields)
    }
}
