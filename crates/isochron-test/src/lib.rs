//! Test support for the isochron workspace.
//!
//! Record fixtures render chrono dates back into the string-typed records the
//! parsing layer would produce, so behaviour tests can sweep whole calendar
//! ranges through the builders.

pub use isochron_build as build;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use isochron_build::iso::core::{DateTime, Moment, UtcOffset};
use isochron_build::iso::record::{DateFields, DatetimeFields, EndpointFields, TimeFields};

/// `YYYY-MM-DD` record for `date`.
#[must_use]
pub fn calendar_record(date: NaiveDate) -> DateFields {
    DateFields::ymd(
        &format!("{:04}", date.year()),
        &format!("{:02}", date.month()),
        &format!("{:02}", date.day()),
    )
}

/// `YYYY-DDD` record for `date`.
#[must_use]
pub fn ordinal_record(date: NaiveDate) -> DateFields {
    DateFields::ordinal(
        format!("{:04}", date.year()),
        format!("{:03}", date.ordinal()),
    )
}

/// `YYYY-Www-D` record for `date`, using its ISO week-numbering year.
#[must_use]
pub fn week_record(date: NaiveDate) -> DateFields {
    let week = date.iso_week();
    DateFields::week(
        format!("{:04}", week.year()),
        format!("{:02}", week.week()),
        Some(&date.weekday().number_from_monday().to_string()),
    )
}

/// Every day of `year`, in order. Empty for years chrono cannot represent.
pub fn days_of_year(year: i32) -> impl Iterator<Item = NaiveDate> {
    NaiveDate::from_yo_opt(year, 1)
        .into_iter()
        .flat_map(|first| first.iter_days())
        .take_while(move |date| date.year() == year)
}

/// A date-only interval endpoint.
#[must_use]
pub fn date_endpoint(date: NaiveDate) -> EndpointFields {
    calendar_record(date).into()
}

/// A datetime interval endpoint for `date` at the given local time.
#[must_use]
pub fn datetime_endpoint(date: NaiveDate, time: TimeFields) -> EndpointFields {
    DatetimeFields::new(calendar_record(date), time).into()
}

#[must_use]
pub fn local(naive: NaiveDateTime) -> Moment {
    Moment::DateTime(DateTime::new(naive, None))
}

#[must_use]
pub fn with_offset(naive: NaiveDateTime, offset: UtcOffset) -> Moment {
    Moment::DateTime(DateTime::new(naive, Some(offset)))
}
