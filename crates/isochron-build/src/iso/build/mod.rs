//! Builders turning intermediate records into resolved values.
//!
//! ## Builders
//!
//! - [`ConcreteBuilder`] - validated values, durations as exact elapsed time
//! - [`RelativeBuilder`] - validated values, years and months as calendar steps
//! - [`RecordBuilder`] - hands the records back unchanged, for inspection
//!
//! All three implement [`TimeBuilder`], whose provided
//! [`build_object`](TimeBuilder::build_object) routes any [`ParsedRecord`] to
//! the matching `build_*` operation.

mod concrete;
mod repeat;
mod structural;

#[cfg(test)]
mod tests;

use std::fmt;

use crate::error::BuildResult;
use crate::iso::record::{
    DateFields, DatetimeFields, DurationFields, IntervalFields, ParsedRecord,
    RepeatingIntervalFields, TimeFields, TimezoneFields,
};

pub use concrete::{ConcreteBuilder, ObjectBuilder, RelativeBuilder};
pub use repeat::Recurrence;
pub use structural::RecordBuilder;

/// One construction operation per record kind.
///
/// Every operation is a pure function of its input: it either returns the
/// resolved value or fails with a single [`BuildError`](crate::BuildError).
pub trait TimeBuilder {
    type Date;
    type Time;
    type DateTime;
    type Duration;
    type Interval;
    type RepeatingInterval;
    type Timezone;

    /// ## Errors
    /// Fails if the fields are non-numeric or out of bounds for the date.
    fn build_date(&self, fields: &DateFields) -> BuildResult<Self::Date>;

    /// ## Errors
    /// Fails if the fields are non-numeric, out of bounds, or name a leap second.
    fn build_time(&self, fields: &TimeFields) -> BuildResult<Self::Time>;

    /// ## Errors
    /// Fails as [`build_date`](Self::build_date) or [`build_time`](Self::build_time) would.
    fn build_datetime(&self, fields: &DatetimeFields) -> BuildResult<Self::DateTime>;

    /// ## Errors
    /// Fails if the duration is empty, negative or cannot be represented.
    fn build_duration(&self, fields: &DurationFields) -> BuildResult<Self::Duration>;

    /// ## Errors
    /// Fails if an endpoint or the duration is invalid, or if a computed
    /// endpoint leaves the supported calendar range.
    fn build_interval(&self, fields: &IntervalFields) -> BuildResult<Self::Interval>;

    /// ## Errors
    /// Fails if the repeat count or the interval is invalid.
    fn build_repeating_interval(
        &self,
        fields: &RepeatingIntervalFields,
    ) -> BuildResult<Self::RepeatingInterval>;

    /// ## Errors
    /// Fails if the offset is out of bounds or a negative zero.
    fn build_timezone(&self, fields: &TimezoneFields) -> BuildResult<Self::Timezone>;

    /// Builds whatever kind of record is given.
    ///
    /// ## Errors
    /// Returns the error of the `build_*` operation the record routes to.
    fn build_object(&self, record: &ParsedRecord) -> BuildResult<Built<Self>>
    where
        Self: Sized,
    {
        tracing::trace!(kind = record.kind(), "Building record");

        Ok(match record {
            ParsedRecord::Date(fields) => Built::Date(self.build_date(fields)?),
            ParsedRecord::Time(fields) => Built::Time(self.build_time(fields)?),
            ParsedRecord::DateTime(fields) => Built::DateTime(self.build_datetime(fields)?),
            ParsedRecord::Duration(fields) => Built::Duration(self.build_duration(fields)?),
            ParsedRecord::Interval(fields) => Built::Interval(self.build_interval(fields)?),
            ParsedRecord::RepeatingInterval(fields) => {
                Built::RepeatingInterval(self.build_repeating_interval(fields)?)
            }
            ParsedRecord::Timezone(fields) => Built::Timezone(self.build_timezone(fields)?),
        })
    }
}

/// The output of [`TimeBuilder::build_object`], one variant per record kind.
pub enum Built<B: TimeBuilder> {
    Date(B::Date),
    Time(B::Time),
    DateTime(B::DateTime),
    Duration(B::Duration),
    Interval(B::Interval),
    RepeatingInterval(B::RepeatingInterval),
    Timezone(B::Timezone),
}

impl<B: TimeBuilder> Built<B> {
    /// Returns the lowercase kind name, matching [`ParsedRecord::kind`].
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

impl<B> fmt::Debug for Built<B>
where
    B: TimeBuilder,
    B::Date: fmt::Debug,
    B::Time: fmt::Debug,
    B::DateTime: fmt::Debug,
    B::Duration: fmt::Debug,
    B::Interval: fmt::Debug,
    B::RepeatingInterval: fmt::Debug,
    B::Timezone: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(value) => f.debug_tuple("Date").field(value).finish(),
            Self::Time(value) => f.debug_tuple("Time").field(value).finish(),
            Self::DateTime(value) => f.debug_tuple("DateTime").field(value).finish(),
            Self::Duration(value) => f.debug_tuple("Duration").field(value).finish(),
            Self::Interval(value) => f.debug_tuple("Interval").field(value).finish(),
            Self::RepeatingInterval(value) => {
                f.debug_tuple("RepeatingInterval").field(value).finish()
            }
            Self::Timezone(value) => f.debug_tuple("Timezone").field(value).finish(),
        }
    }
}
