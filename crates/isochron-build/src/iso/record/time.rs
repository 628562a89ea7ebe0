//! Time of day and UTC offset records (ISO 8601 §4.2).

/// A UTC offset as written: `Z`, `±hh`, `±hhmm` or `±hh:mm`.
///
/// `name` preserves the original designator text so that `+01` and `+01:00`
/// stay distinguishable after building.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TimezoneFields {
    pub negative: bool,
    /// The `Z` designator was used.
    pub utc: bool,
    pub hours: Option<String>,
    pub minutes: Option<String>,
    pub name: String,
}

impl TimezoneFields {
    /// Creates a record for the `Z` designator.
    #[must_use]
    pub fn utc(name: impl Into<String>) -> Self {
        Self {
            utc: true,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates a record for a signed hour/minute offset.
    #[must_use]
    pub fn offset(
        negative: bool,
        hours: impl Into<String>,
        minutes: Option<&str>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            negative,
            utc: false,
            hours: Some(hours.into()),
            minutes: minutes.map(String::from),
            name: name.into(),
        }
    }
}

/// A time of day. Absent components default to zero.
///
/// Only the last present component may carry a fraction (`hh.hhh`,
/// `hh:mm.mmm`, `hh:mm:ss.sss`). A missing `timezone` means local time, which
/// is distinct from UTC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TimeFields {
    pub hour: Option<String>,
    pub minute: Option<String>,
    pub second: Option<String>,
    pub timezone: Option<TimezoneFields>,
}

impl TimeFields {
    /// Creates a local time record.
    #[must_use]
    pub fn new(hour: Option<&str>, minute: Option<&str>, second: Option<&str>) -> Self {
        Self {
            hour: hour.map(String::from),
            minute: minute.map(String::from),
            second: second.map(String::from),
            timezone: None,
        }
    }

    /// Creates a local time record from a complete `hh:mm:ss` triple.
    #[must_use]
    pub fn hms(hour: &str, minute: &str, second: &str) -> Self {
        Self::new(Some(hour), Some(minute), Some(second))
    }

    /// Returns this record with the given offset attached.
    #[must_use]
    pub fn with_timezone(self, timezone: TimezoneFields) -> Self {
        Self {
            timezone: Some(timezone),
            ..self
        }
    }
}
