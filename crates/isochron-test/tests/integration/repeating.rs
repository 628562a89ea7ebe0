use chrono::{Datelike, NaiveDate, TimeDelta};
use isochron_build::iso::build::{ConcreteBuilder, RelativeBuilder, TimeBuilder};
use isochron_build::iso::core::Moment;
use isochron_build::iso::record::{
    DurationFields, IntervalFields, Repeat, RepeatingIntervalFields, TimeFields,
};
use isochron_test::{date_endpoint, datetime_endpoint, local};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn daily_from(start: NaiveDate, repeat: Repeat) -> RepeatingIntervalFields {
    RepeatingIntervalFields::new(
        repeat,
        IntervalFields::StartDuration {
            start: date_endpoint(start),
            duration: DurationFields::default().days("1"),
        },
    )
}

/// ## Summary
/// A repeat count of N yields exactly N elements for every N.
#[test_log::test]
fn count_bounds_the_sequence() {
    let builder = ConcreteBuilder::new();

    for count in [0_u32, 1, 2, 3, 10, 366] {
        let fields = daily_from(ymd(1981, 4, 5), Repeat::Count(count.to_string()));
        let recurrence = builder.build_repeating_interval(&fields).unwrap();
        assert_eq!(recurrence.remaining(), Some(count));
        assert_eq!(recurrence.count(), usize::try_from(count).unwrap());
    }
}

/// ## Summary
/// An unbounded sequence hands out elements on demand and can be resumed
/// from a clone without disturbing the original.
#[test_log::test]
fn unbounded_sequence_is_pull_based() {
    let fields = daily_from(ymd(1981, 4, 5), Repeat::Forever);
    let mut recurrence = ConcreteBuilder::new()
        .build_repeating_interval(&fields)
        .unwrap();

    let first: Vec<_> = recurrence.by_ref().take(11).collect();
    assert_eq!(first.len(), 11);
    assert_eq!(first[10], Moment::Date(ymd(1981, 4, 15)));

    let mut snapshot = recurrence.clone();
    assert_eq!(recurrence.next(), Some(Moment::Date(ymd(1981, 4, 16))));
    assert_eq!(snapshot.nth(1), Some(Moment::Date(ymd(1981, 4, 17))));
}

/// ## Summary
/// An unbounded sequence stops at the end of the supported calendar.
#[test_log::test]
fn unbounded_sequence_ends_at_calendar_edge() {
    let fields = RepeatingIntervalFields::new(
        Repeat::Forever,
        IntervalFields::StartDuration {
            start: date_endpoint(ymd(9990, 1, 1)),
            duration: DurationFields::default().years("1"),
        },
    );

    let years: Vec<i32> = RelativeBuilder::new()
        .build_repeating_interval(&fields)
        .unwrap()
        .filter_map(|moment| moment.as_date())
        .map(|date| date.year())
        .collect();
    assert_eq!(years, (9990..=9999).collect::<Vec<_>>());
}

/// ## Summary
/// Backward stepping from an end datetime mirrors forward stepping.
#[test_log::test]
fn backward_sequence_from_end() {
    let fields = RepeatingIntervalFields::new(
        Repeat::Count("4".to_string()),
        IntervalFields::DurationEnd {
            duration: DurationFields::default().days("1").hours("12"),
            end: datetime_endpoint(ymd(2018, 8, 29), TimeFields::hms("12", "00", "00")),
        },
    );

    let moments: Vec<_> = ConcreteBuilder::new()
        .build_repeating_interval(&fields)
        .unwrap()
        .collect();
    let end = ymd(2018, 8, 29).and_hms_opt(12, 0, 0).unwrap();
    let step = TimeDelta::hours(36);
    assert_eq!(
        moments,
        vec![
            local(end),
            local(end - step),
            local(end - step * 2),
            local(end - step * 3),
        ]
    );
}

/// ## Summary
/// A start/end repeating interval yields its two endpoints, truncated by the
/// repeat count.
#[test_log::test]
fn endpoint_sequence_respects_count() {
    let interval = IntervalFields::StartEnd {
        start: date_endpoint(ymd(1980, 3, 5)),
        end: date_endpoint(ymd(1981, 4, 5)),
    };
    let builder = ConcreteBuilder::new();

    let lengths: Vec<usize> = ["0", "1", "2", "5"]
        .into_iter()
        .map(|count| {
            let fields = RepeatingIntervalFields::new(
                Repeat::Count(count.to_string()),
                interval.clone(),
            );
            builder.build_repeating_interval(&fields).unwrap().count()
        })
        .collect();
    assert_eq!(lengths, vec![0, 1, 2, 2]);

    let forever = RepeatingIntervalFields::new(Repeat::Forever, interval);
    assert_eq!(builder.build_repeating_interval(&forever).unwrap().count(), 2);
}
