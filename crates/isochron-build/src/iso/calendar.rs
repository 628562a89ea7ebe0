//! Calendar normalization.
//!
//! Resolves calendar, week and ordinal dates to one canonical
//! `(year, month, day)` in the proleptic Gregorian calendar.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{BuildError, BuildResult};
use crate::iso::record::DateFields;
use crate::iso::validate::{
    check_day_of_month, check_month, check_ordinal_day, check_week, check_weekday, check_year,
};

/// Gregorian leap year rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`; zero for a month outside `1..=12`.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

#[must_use]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// ISO weekday (1 = Monday .. 7 = Sunday) of January 1st.
#[must_use]
pub const fn jan1_weekday(year: i32) -> u32 {
    let y = year - 1;
    let sunday_based =
        (1 + 5 * y.rem_euclid(4) + 4 * y.rem_euclid(100) + 6 * y.rem_euclid(400)).rem_euclid(7);
    if sunday_based == 0 {
        7
    } else {
        sunday_based.unsigned_abs()
    }
}

/// Number of ISO weeks in the week-numbering year.
///
/// A year is long (53 weeks) when January 1st is a Thursday, or when it is a
/// leap year starting on a Wednesday; both mean the year touches four days
/// of a 53rd Monday-based week.
#[must_use]
pub const fn weeks_in_year(year: i32) -> u32 {
    match jan1_weekday(year) {
        4 => 53,
        3 if is_leap_year(year) => 53,
        _ => 52,
    }
}

fn out_of_range(year: i32) -> BuildError {
    BuildError::YearOutOfBounds(format!("year {year} is outside the supported calendar"))
}

/// Monday of week 1: the Monday on or before January 4th.
///
/// ## Errors
/// Returns `YearOutOfBounds` if the year cannot be represented.
pub fn iso_year_start(year: i32) -> BuildResult<NaiveDate> {
    let fourth = NaiveDate::from_ymd_opt(year, 1, 4).ok_or_else(|| out_of_range(year))?;
    let back = u64::from(fourth.weekday().num_days_from_monday());
    fourth
        .checked_sub_days(Days::new(back))
        .ok_or_else(|| out_of_range(year))
}

/// ## Errors
/// Returns `DayOutOfBounds` if the day does not exist in the month.
pub fn calendar_date(year: i32, month: u32, day: u32) -> BuildResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        BuildError::DayOutOfBounds(format!(
            "{year:04}-{month:02}-{day:02} is not a calendar date"
        ))
    })
}

/// Resolves an already range-checked day of year by walking the month lengths.
///
/// ## Errors
/// Returns `DayOutOfBounds` if the day exceeds the length of the year.
pub fn ordinal_date(year: i32, day: u32) -> BuildResult<NaiveDate> {
    let mut remaining = day;
    for month in 1..=12 {
        let length = days_in_month(year, month);
        if remaining <= length {
            return calendar_date(year, month, remaining);
        }
        remaining -= length;
    }
    Err(BuildError::DayOutOfBounds(format!(
        "day of year {day} exceeds {} days in {year:04}",
        days_in_year(year)
    )))
}

/// Resolves an already range-checked week date. The result may fall in the
/// neighbouring calendar year.
///
/// ## Errors
/// Returns `YearOutOfBounds` if the result cannot be represented.
pub fn week_date(year: i32, week: u32, weekday: u32) -> BuildResult<NaiveDate> {
    let offset = u64::from(week.saturating_sub(1)) * 7 + u64::from(weekday.saturating_sub(1));
    iso_year_start(year)?
        .checked_add_days(Days::new(offset))
        .ok_or_else(|| out_of_range(year))
}

/// Checks every field of a date record and resolves it to a calendar date.
///
/// ## Errors
/// Returns the bounds error of the first field that fails, or `FormatError`
/// for non-numeric text.
pub fn normalize(fields: &DateFields) -> BuildResult<NaiveDate> {
    match fields {
        DateFields::Calendar { year, month, day } => {
            let year = check_year(year)?;
            let month = month.as_deref().map(check_month).transpose()?.unwrap_or(1);
            let day = day
                .as_deref()
                .map(|text| check_day_of_month(year, month, text))
                .transpose()?
                .unwrap_or(1);
            calendar_date(year, month, day)
        }
        DateFields::Week {
            year,
            week,
            weekday,
        } => {
            let year = check_year(year)?;
            let week = check_week(year, week)?;
            let weekday = weekday.as_deref().map(check_weekday).transpose()?.unwrap_or(1);
            let date = week_date(year, week, weekday)?;
            tracing::trace!(year, week, weekday, %date, "Resolved week date");
            Ok(date)
        }
        DateFields::Ordinal { year, day } => {
            let year = check_year(year)?;
            let day = check_ordinal_day(year, day)?;
            let date = ordinal_date(year, day)?;
            tracing::trace!(year, day, %date, "Resolved ordinal date");
            Ok(date)
        }
    }
}
