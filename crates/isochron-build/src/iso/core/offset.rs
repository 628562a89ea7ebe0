//! Fixed UTC offsets.

use std::fmt;

use chrono::{FixedOffset, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::constants::{MINUTES_PER_DAY, MINUTES_PER_HOUR, SECONDS_PER_MINUTE, UTC_NAME};

/// A timezone that is nothing but a constant offset from UTC and a name.
///
/// Equality and hashing cover both parts, so `+01` and `+01:00` are distinct
/// values even though they describe the same offset. There are no daylight
/// saving rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UtcOffset {
    minutes: i32,
    name: String,
}

impl UtcOffset {
    #[must_use]
    pub fn new(name: impl Into<String>, minutes: i32) -> Self {
        Self {
            minutes,
            name: name.into(),
        }
    }

    /// The zero offset named `UTC`.
    #[must_use]
    pub fn utc() -> Self {
        Self::new(UTC_NAME, 0)
    }

    /// Signed offset from UTC in minutes.
    #[must_use]
    pub const fn minutes(&self) -> i32 {
        self.minutes
    }

    /// The designator this offset was written with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn as_time_delta(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.minutes))
    }

    /// Daylight saving adjustment, which is always zero.
    #[must_use]
    pub const fn dst(&self) -> TimeDelta {
        TimeDelta::zero()
    }

    /// Converts to a chrono offset. `None` when the magnitude is a day or more.
    #[must_use]
    pub fn fixed(&self) -> Option<FixedOffset> {
        let seconds = self.minutes.checked_mul(i32::try_from(SECONDS_PER_MINUTE).ok()?)?;
        FixedOffset::east_opt(seconds)
    }
}

impl fmt::Display for UtcOffset {
    /// Renders as `±H:MM:SS UTC`, prefixed by `N day(s), ` once the
    /// magnitude reaches 24 hours.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let magnitude = self.minutes.unsigned_abs();
        let minutes_per_day = MINUTES_PER_DAY.unsigned_abs();
        let minutes_per_hour = MINUTES_PER_HOUR.unsigned_abs();

        let days = magnitude / minutes_per_day;
        let rest = magnitude % minutes_per_day;
        let hours = rest / minutes_per_hour;
        let minutes = rest % minutes_per_hour;

        write!(f, "{sign}")?;
        match days {
            0 => {}
            1 => f.write_str("1 day, ")?,
            n => write!(f, "{n} days, ")?,
        }
        write!(f, "{hours}:{minutes:02}:00 UTC")
    }
}
