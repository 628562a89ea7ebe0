//! Builder tests, grouped by builder.


use chrono::{NaiveDate, NaiveDateTime};

use crate::iso::core::{DateTime, Moment, UtcOffset};
use crate::iso::record::{
    DateFields, DatetimeFields, DurationFields, EndpointFields, IntervalFields, TimeFields,
    TimezoneFields,
};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn at(date: NaiveDate, hour: u32, minute: u32, second: u32, micro: u32) -> NaiveDateTime {
    date.and_hms_micro_opt(hour, minute, second, micro).unwrap()
}

fn date_moment(year: i32, month: u32, day: u32) -> Moment {
    Moment::Date(ymd(year, month, day))
}

fn local_moment(naive: NaiveDateTime) -> Moment {
    Moment::DateTime(DateTime::new(naive, None))
}

fn utc_moment(naive: NaiveDateTime) -> Moment {
    Moment::DateTime(DateTime::new(naive, Some(UtcOffset::utc())))
}

fn date_endpoint(year: &str, month: &str, day: &str) -> EndpointFields {
    DateFields::ymd(year, month, day).into()
}

fn datetime_endpoint(date: (&str, &str, &str), time: TimeFields) -> EndpointFields {
    DatetimeFields::new(DateFields::ymd(date.0, date.1, date.2), time).into()
}

fn zulu(hour: &str, minute: &str, second: &str) -> TimeFields {
    TimeFields::hms(hour, minute, second).with_timezone(TimezoneFields::utc("Z"))
}

fn start_duration(start: EndpointFields, duration: DurationFields) -> IntervalFields {
    IntervalFields::StartDuration { start, duration }
}

fn duration_end(duration: DurationFields, end: EndpointFields) -> IntervalFields {
    IntervalFields::DurationEnd { duration, end }
}

fn start_end(start: EndpointFields, end: EndpointFields) -> IntervalFields {
    IntervalFields::StartEnd { start, end }
}
