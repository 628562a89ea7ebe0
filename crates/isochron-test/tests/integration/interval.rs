use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use isochron_build::iso::build::{ConcreteBuilder, RelativeBuilder, TimeBuilder};
use isochron_build::iso::core::{Moment, UtcOffset};
use isochron_build::iso::record::{DurationFields, IntervalFields, TimeFields, TimezoneFields};
use isochron_test::{date_endpoint, datetime_endpoint, days_of_year, local, with_offset};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn hm(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).unwrap()
}

/// ## Summary
/// Forward month steps from any day of a year land on the same day of the
/// next month, or on its last day when that day does not exist.
#[test_log::test]
fn relative_month_steps_clamp_to_month_end() {
    let builder = RelativeBuilder::new();

    for start in days_of_year(2024) {
        let fields = IntervalFields::StartDuration {
            start: date_endpoint(start),
            duration: DurationFields::default().months("1"),
        };
        let interval = builder.build_interval(&fields).unwrap();
        let end = interval.end.as_date().unwrap();

        let expected = start
            .checked_add_months(chrono::Months::new(1))
            .unwrap();
        assert_eq!(end, expected, "{start}");
        assert!(end.day0() <= start.day0());
    }
}

/// ## Summary
/// Backward month steps clamp the same way instead of overflowing into the
/// following month.
#[test_log::test]
fn relative_month_steps_backwards_clamp() {
    let builder = RelativeBuilder::new();
    let cases = [
        (ymd(2004, 3, 31), ymd(2004, 2, 29)),
        (ymd(2003, 3, 31), ymd(2003, 2, 28)),
        (ymd(2003, 5, 31), ymd(2003, 4, 30)),
        (ymd(2003, 1, 31), ymd(2002, 12, 31)),
    ];

    for (end, start) in cases {
        let fields = IntervalFields::DurationEnd {
            duration: DurationFields::default().months("1"),
            end: date_endpoint(end),
        };
        let interval = builder.build_interval(&fields).unwrap();
        assert_eq!(interval.start, Moment::Date(start));
        assert_eq!(interval.end, Moment::Date(end));
    }
}

/// ## Summary
/// Exact and relative strategies differ on month lengths but agree on
/// elapsed-only durations.
#[test_log::test]
fn strategies_differ_only_on_calendar_steps() {
    let start = date_endpoint(ymd(2003, 1, 31));

    let months = IntervalFields::StartDuration {
        start: start.clone(),
        duration: DurationFields::default().months("1"),
    };
    let exact = ConcreteBuilder::new().build_interval(&months).unwrap();
    let relative = RelativeBuilder::new().build_interval(&months).unwrap();
    assert_eq!(exact.end, Moment::Date(ymd(2003, 3, 2)));
    assert_eq!(relative.end, Moment::Date(ymd(2003, 2, 28)));

    let days = IntervalFields::StartDuration {
        start,
        duration: DurationFields::default().weeks("2").days("3"),
    };
    assert_eq!(
        ConcreteBuilder::new().build_interval(&days).unwrap(),
        RelativeBuilder::new().build_interval(&days).unwrap()
    );
}

/// ## Summary
/// The implicit duration of a start/end interval compares instants when
/// both endpoints carry offsets.
#[test_log::test]
fn elapsed_between_offset_endpoints() {
    let builder = ConcreteBuilder::new();
    let fields = IntervalFields::StartEnd {
        start: datetime_endpoint(
            ymd(2050, 3, 1),
            TimeFields::hms("13", "00", "00").with_timezone(TimezoneFields::utc("Z")),
        ),
        end: datetime_endpoint(
            ymd(2050, 3, 1),
            TimeFields::hms("15", "30", "00").with_timezone(TimezoneFields::offset(
                false,
                "02",
                None,
                "+02",
            )),
        ),
    };

    let interval = builder.build_interval(&fields).unwrap();
    assert_eq!(interval.start, with_offset(hm(ymd(2050, 3, 1), 13, 0), UtcOffset::utc()));
    assert_eq!(
        interval.end,
        with_offset(hm(ymd(2050, 3, 1), 15, 30), UtcOffset::new("+02", 120))
    );
    assert_eq!(interval.elapsed(), TimeDelta::minutes(30));
}

/// ## Summary
/// Offsets travel with the given endpoint onto the computed one.
#[test_log::test]
fn computed_endpoint_keeps_offset() {
    let fields = IntervalFields::StartDuration {
        start: datetime_endpoint(
            ymd(2050, 3, 1),
            TimeFields::hms("23", "00", "00").with_timezone(TimezoneFields::offset(
                true,
                "05",
                Some("30"),
                "-05:30",
            )),
        ),
        duration: DurationFields::default().hours("2"),
    };

    let interval = ConcreteBuilder::new().build_interval(&fields).unwrap();
    assert_eq!(
        interval.end,
        with_offset(hm(ymd(2050, 3, 2), 1, 0), UtcOffset::new("-05:30", -330))
    );
}

/// ## Summary
/// Hour 24 means midnight of the written date; the date is not rolled.
#[test_log::test]
fn midnight_endpoint_stays_on_written_date() {
    let fields = IntervalFields::StartEnd {
        start: datetime_endpoint(ymd(1981, 4, 5), TimeFields::new(Some("24"), None, None)),
        end: date_endpoint(ymd(1981, 4, 6)),
    };

    let interval = ConcreteBuilder::new().build_interval(&fields).unwrap();
    assert_eq!(interval.start, local(hm(ymd(1981, 4, 5), 0, 0)));
    assert_eq!(interval.elapsed(), TimeDelta::days(1));
}
