//! Interval and repeating interval records (ISO 8601 §4.4.4, §4.5).

use super::{DateFields, DatetimeFields, DurationFields};
use crate::error::{BuildError, BuildResult};

/// An interval endpoint: a date or a datetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EndpointFields {
    Date(DateFields),
    DateTime(DatetimeFields),
}

impl From<DateFields> for EndpointFields {
    fn from(fields: DateFields) -> Self {
        Self::Date(fields)
    }
}

impl From<DatetimeFields> for EndpointFields {
    fn from(fields: DatetimeFields) -> Self {
        Self::DateTime(fields)
    }
}

/// The three legal interval shapes. The missing member is computed when
/// the interval is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IntervalFields {
    /// `start/end`
    StartEnd {
        start: EndpointFields,
        end: EndpointFields,
    },
    /// `start/duration`
    StartDuration {
        start: EndpointFields,
        duration: DurationFields,
    },
    /// `duration/end`
    DurationEnd {
        duration: DurationFields,
        end: EndpointFields,
    },
}

impl IntervalFields {
    /// Assembles an interval from the optional members a parser collected.
    ///
    /// ## Errors
    /// Returns `FormatError` unless exactly one legal pair is present.
    pub fn from_parts(
        start: Option<EndpointFields>,
        end: Option<EndpointFields>,
        duration: Option<DurationFields>,
    ) -> BuildResult<Self> {
        match (start, end, duration) {
            (Some(start), Some(end), None) => Ok(Self::StartEnd { start, end }),
            (Some(start), None, Some(duration)) => Ok(Self::StartDuration { start, duration }),
            (None, Some(end), Some(duration)) => Ok(Self::DurationEnd { duration, end }),
            _ => Err(BuildError::FormatError(
                "interval requires exactly two of start, end and duration".to_string(),
            )),
        }
    }

    /// Returns the duration member, if this interval carries one.
    #[must_use]
    pub const fn duration(&self) -> Option<&DurationFields> {
        match self {
            Self::StartEnd { .. } => None,
            Self::StartDuration { duration, .. } | Self::DurationEnd { duration, .. } => {
                Some(duration)
            }
        }
    }
}

/// How often a repeating interval recurs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Repeat {
    /// `R/...`: unbounded.
    Forever,
    /// `Rn/...`: the raw repetition count text.
    Count(String),
}

/// A repeating interval `R[n]/interval`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepeatingIntervalFields {
    pub repeat: Repeat,
    pub interval: IntervalFields,
}

impl RepeatingIntervalFields {
    #[must_use]
    pub const fn new(repeat: Repeat, interval: IntervalFields) -> Self {
        Self { repeat, interval }
    }

    /// Assembles a repeating interval from the parser's flag and count.
    ///
    /// ## Errors
    /// Returns `FormatError` if both or neither of `forever` and `count` are
    /// given.
    pub fn from_parts(
        forever: bool,
        count: Option<&str>,
        interval: IntervalFields,
    ) -> BuildResult<Self> {
        let repeat = match (forever, count) {
            (true, None) => Repeat::Forever,
            (false, Some(count)) => Repeat::Count(count.to_string()),
            (true, Some(_)) => {
                return Err(BuildError::FormatError(
                    "repeat count given for an unbounded repeating interval".to_string(),
                ));
            }
            (false, None) => {
                return Err(BuildError::FormatError(
                    "repeating interval has neither a repeat count nor an unbounded flag"
                        .to_string(),
                ));
            }
        };
        Ok(Self { repeat, interval })
    }
}
