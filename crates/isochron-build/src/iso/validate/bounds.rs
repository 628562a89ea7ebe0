//! Range checks for every ISO 8601 field.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::cast::{cast, cast_optional_decimal, checked_scale, widen_year};
use crate::constants::{
    MAX_YEAR, MICROS_PER_SECOND, MIN_YEAR, MINUTES_PER_HOUR, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};
use crate::error::{BuildError, BuildResult};
use crate::iso::calendar::{days_in_month, days_in_year, weeks_in_year};

/// Widens and converts a year, which must lie in `1..=9999`.
///
/// ## Errors
/// Returns `FormatError` for non-numeric text and `YearOutOfBounds` outside
/// the supported range.
pub fn check_year(text: &str) -> BuildResult<i32> {
    let year = cast::<i32>(&widen_year(text)?, "year")?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(BuildError::YearOutOfBounds(format!(
            "year {year} must be between {MIN_YEAR}..{MAX_YEAR}"
        )));
    }
    Ok(year)
}

/// ## Errors
/// Returns `DateOutOfBounds` unless the month is in `1..=12`.
pub fn check_month(text: &str) -> BuildResult<u32> {
    let month = cast::<u32>(text, "month")?;
    if !(1..=12).contains(&month) {
        return Err(BuildError::DateOutOfBounds(format!(
            "month {month} must be between 1..12"
        )));
    }
    Ok(month)
}

/// ## Errors
/// Returns `DayOutOfBounds` unless the day exists in the given month.
pub fn check_day_of_month(year: i32, month: u32, text: &str) -> BuildResult<u32> {
    let day = cast::<u32>(text, "day")?;
    let last = days_in_month(year, month);
    if !(1..=last).contains(&day) {
        return Err(BuildError::DayOutOfBounds(format!(
            "day {day} must be between 1..{last} for {year:04}-{month:02}"
        )));
    }
    Ok(day)
}

/// ## Errors
/// Returns `DayOutOfBounds` unless the day is in `1..=365`, or `1..=366` in
/// a leap year.
pub fn check_ordinal_day(year: i32, text: &str) -> BuildResult<u32> {
    let day = cast::<u32>(text, "day of year")?;
    let last = days_in_year(year);
    if !(1..=last).contains(&day) {
        return Err(BuildError::DayOutOfBounds(format!(
            "day of year {day} must be between 1..{last} for {year:04}"
        )));
    }
    Ok(day)
}

/// ## Errors
/// Returns `WeekOutOfBounds` unless the week exists in the ISO week-numbering
/// year (52 or 53 weeks).
pub fn check_week(year: i32, text: &str) -> BuildResult<u32> {
    let week = cast::<u32>(text, "week")?;
    let last = weeks_in_year(year);
    if !(1..=last).contains(&week) {
        return Err(BuildError::WeekOutOfBounds(format!(
            "week {week} must be between 1..{last} for {year:04}"
        )));
    }
    Ok(week)
}

/// ## Errors
/// Returns `DayOutOfBounds` unless the weekday is in `1..=7`.
pub fn check_weekday(text: &str) -> BuildResult<u32> {
    let weekday = cast::<u32>(text, "weekday")?;
    if !(1..=7).contains(&weekday) {
        return Err(BuildError::DayOutOfBounds(format!(
            "weekday {weekday} must be between 1..7"
        )));
    }
    Ok(weekday)
}

/// Checks a UTC offset's magnitude and returns it as signed minutes.
///
/// ## Errors
/// Returns `HoursOutOfBounds` above 23 hours, `MinutesOutOfBounds` above 59
/// minutes and `FormatError` for a negative zero offset.
pub fn check_offset(negative: bool, hours: &str, minutes: Option<&str>) -> BuildResult<i32> {
    let hh = cast::<i32>(hours, "offset hours")?;
    let mm = minutes.map_or(Ok(0), |text| cast::<i32>(text, "offset minutes"))?;

    if !(0..=23).contains(&hh) {
        return Err(BuildError::HoursOutOfBounds(format!(
            "offset hours {hh} must be between 0..23"
        )));
    }
    if !(0..=59).contains(&mm) {
        return Err(BuildError::MinutesOutOfBounds(format!(
            "offset minutes {mm} must be between 0..59"
        )));
    }
    if negative && hh == 0 && mm == 0 {
        return Err(BuildError::FormatError(
            "negative zero UTC offset is not allowed".to_string(),
        ));
    }

    let magnitude = hh * MINUTES_PER_HOUR + mm;
    Ok(if negative { -magnitude } else { magnitude })
}

/// A validated time of day with exact decimal components.
///
/// Hour 24 has already been folded to hour 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: Decimal,
    pub minute: Decimal,
    pub second: Decimal,
}

impl ClockTime {
    /// Returns the elapsed microseconds since midnight, truncated, or `None`
    /// if the components are too large to combine.
    #[must_use]
    pub fn micros(&self) -> Option<Decimal> {
        let mut total = Decimal::ZERO;
        for (amount, unit) in [
            (self.hour, SECONDS_PER_HOUR * MICROS_PER_SECOND),
            (self.minute, SECONDS_PER_MINUTE * MICROS_PER_SECOND),
            (self.second, MICROS_PER_SECOND),
        ] {
            total = total.checked_add(checked_scale(amount, unit)?)?;
        }
        Some(total.trunc())
    }

    /// Converts to a chrono time at microsecond resolution.
    ///
    /// ## Errors
    /// Returns `HoursOutOfBounds` if the combined components reach the next day.
    pub fn to_naive(&self) -> BuildResult<NaiveTime> {
        let overflow = || {
            BuildError::HoursOutOfBounds(format!(
                "{}:{}:{} does not fit in one day",
                self.hour, self.minute, self.second
            ))
        };

        let micros = self
            .micros()
            .and_then(|micros| micros.to_i64())
            .ok_or_else(overflow)?;
        let seconds = micros / MICROS_PER_SECOND;
        if seconds >= SECONDS_PER_DAY {
            return Err(overflow());
        }
        let seconds = u32::try_from(seconds).map_err(|_e| overflow())?;
        let nanos = u32::try_from((micros % MICROS_PER_SECOND) * 1_000).map_err(|_e| overflow())?;
        NaiveTime::from_num_seconds_from_midnight_opt(seconds, nanos).ok_or_else(overflow)
    }
}

/// Converts and checks the components of a time of day.
///
/// Absent components are zero. The checks run in this order: hours above 24,
/// minutes of 60 or more, the leap second `23:59:60`, other seconds of 60 or
/// more, and finally hour 24 with a nonzero minute or second.
///
/// ## Errors
/// Returns `HoursOutOfBounds`, `MinutesOutOfBounds`, `LeapSecondError`,
/// `SecondsOutOfBounds` or `MidnightBoundsError` as described above, and
/// `FormatError` for non-numeric text.
pub fn check_time(
    hour: Option<&str>,
    minute: Option<&str>,
    second: Option<&str>,
) -> BuildResult<ClockTime> {
    let hh = cast_optional_decimal(hour, "hour")?;
    let mm = cast_optional_decimal(minute, "minute")?;
    let ss = cast_optional_decimal(second, "second")?;

    let twenty_four = Decimal::from(24);
    let sixty = Decimal::from(60);

    if hh < Decimal::ZERO || hh > twenty_four {
        return Err(BuildError::HoursOutOfBounds(format!(
            "hour {hh} must be between 0..24"
        )));
    }
    if mm < Decimal::ZERO || mm >= sixty {
        return Err(BuildError::MinutesOutOfBounds(format!(
            "minute {mm} must be between 0..59"
        )));
    }
    if hh == Decimal::from(23) && mm == Decimal::from(59) && ss.trunc() == sixty {
        return Err(BuildError::LeapSecondError(format!(
            "leap second 23:59:{ss} is not supported"
        )));
    }
    if ss < Decimal::ZERO || ss >= sixty {
        return Err(BuildError::SecondsOutOfBounds(format!(
            "second {ss} must be between 0..59"
        )));
    }
    if hh == twenty_four {
        if !mm.is_zero() || !ss.is_zero() {
            return Err(BuildError::MidnightBoundsError(format!(
                "hour 24 may only represent midnight, found 24:{mm}:{ss}"
            )));
        }
        return Ok(ClockTime {
            hour: Decimal::ZERO,
            minute: Decimal::ZERO,
            second: Decimal::ZERO,
        });
    }

    Ok(ClockTime {
        hour: hh,
        minute: mm,
        second: ss,
    })
}
