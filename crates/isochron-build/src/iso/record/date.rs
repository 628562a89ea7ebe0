//! Date records (ISO 8601 §4.1.2 - §4.1.4).

use super::TimeFields;

/// A date in one of its three mutually exclusive representations.
///
/// Absent fields take the ISO defaults when built: month and day default to
/// 1, weekday defaults to Monday.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateFields {
    /// `YYYY[-MM[-DD]]`
    Calendar {
        year: String,
        month: Option<String>,
        day: Option<String>,
    },
    /// `YYYY-Www[-D]`
    Week {
        year: String,
        week: String,
        weekday: Option<String>,
    },
    /// `YYYY-DDD`
    Ordinal { year: String, day: String },
}

impl DateFields {
    /// Creates a calendar date record.
    #[must_use]
    pub fn calendar(year: impl Into<String>, month: Option<&str>, day: Option<&str>) -> Self {
        Self::Calendar {
            year: year.into(),
            month: month.map(String::from),
            day: day.map(String::from),
        }
    }

    /// Creates a calendar date record from a complete `YYYY-MM-DD` triple.
    #[must_use]
    pub fn ymd(year: &str, month: &str, day: &str) -> Self {
        Self::calendar(year, Some(month), Some(day))
    }

    /// Creates a record holding only a year (reduced precision).
    #[must_use]
    pub fn year(year: impl Into<String>) -> Self {
        Self::calendar(year, None, None)
    }

    /// Creates a week date record.
    #[must_use]
    pub fn week(year: impl Into<String>, week: impl Into<String>, weekday: Option<&str>) -> Self {
        Self::Week {
            year: year.into(),
            week: week.into(),
            weekday: weekday.map(String::from),
        }
    }

    /// Creates an ordinal date record.
    #[must_use]
    pub fn ordinal(year: impl Into<String>, day: impl Into<String>) -> Self {
        Self::Ordinal {
            year: year.into(),
            day: day.into(),
        }
    }

    /// Returns the raw year text common to every representation.
    #[must_use]
    pub fn year_text(&self) -> &str {
        match self {
            Self::Calendar { year, .. } | Self::Week { year, .. } | Self::Ordinal { year, .. } => {
                year
            }
        }
    }
}

/// A date combined with a time of day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatetimeFields {
    pub date: DateFields,
    pub time: TimeFields,
}

impl DatetimeFields {
    #[must_use]
    pub const fn new(date: DateFields, time: TimeFields) -> Self {
        Self { date, time }
    }
}
