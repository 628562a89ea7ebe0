use isochron_build::BuildError;
use isochron_build::iso::build::{Built, ConcreteBuilder, RecordBuilder, TimeBuilder};
use isochron_build::iso::core::{ResolvedInterval, UtcOffset};
use isochron_build::iso::record::{
    DateFields, DurationFields, EndpointFields, IntervalFields, ParsedRecord, Repeat,
    RepeatingIntervalFields, TimezoneFields,
};

fn endpoint() -> EndpointFields {
    DateFields::ymd("1981", "04", "05").into()
}

/// ## Summary
/// Intervals assemble only from one of the three legal pairs.
#[test_log::test]
fn interval_from_parts() {
    let duration = || DurationFields::default().days("1");

    assert!(matches!(
        IntervalFields::from_parts(Some(endpoint()), Some(endpoint()), None),
        Ok(IntervalFields::StartEnd { .. })
    ));
    assert!(matches!(
        IntervalFields::from_parts(Some(endpoint()), None, Some(duration())),
        Ok(IntervalFields::StartDuration { .. })
    ));
    assert!(matches!(
        IntervalFields::from_parts(None, Some(endpoint()), Some(duration())),
        Ok(IntervalFields::DurationEnd { .. })
    ));

    for (start, end, duration) in [
        (None, None, None),
        (Some(endpoint()), None, None),
        (None, None, Some(duration())),
        (Some(endpoint()), Some(endpoint()), Some(duration())),
    ] {
        assert!(matches!(
            IntervalFields::from_parts(start, end, duration),
            Err(BuildError::FormatError(_))
        ));
    }
}

/// ## Summary
/// Repetition is either unbounded or counted, never both or neither.
#[test_log::test]
fn repeating_interval_from_parts() {
    let interval = || IntervalFields::StartEnd {
        start: endpoint(),
        end: endpoint(),
    };

    assert_eq!(
        RepeatingIntervalFields::from_parts(true, None, interval())
            .unwrap()
            .repeat,
        Repeat::Forever
    );
    assert_eq!(
        RepeatingIntervalFields::from_parts(false, Some("3"), interval())
            .unwrap()
            .repeat,
        Repeat::Count("3".to_string())
    );
    assert!(RepeatingIntervalFields::from_parts(true, Some("3"), interval()).is_err());
    assert!(RepeatingIntervalFields::from_parts(false, None, interval()).is_err());
}

/// ## Summary
/// The same record routed through the validating and structural builders.
#[test_log::test]
fn build_object_through_both_builders() {
    let record: ParsedRecord = TimezoneFields::offset(false, "01", Some("30"), "+01:30").into();

    match ConcreteBuilder::new().build_object(&record).unwrap() {
        Built::Timezone(offset) => assert_eq!(offset, UtcOffset::new("+01:30", 90)),
        other => panic!("expected a timezone, got {other:?}"),
    }
    match RecordBuilder.build_object(&record).unwrap() {
        Built::Timezone(fields) => assert_eq!(ParsedRecord::Timezone(fields), record),
        other => panic!("expected a timezone record, got {other:?}"),
    }
}

/// ## Summary
/// Built values survive a JSON round trip with their offsets intact.
#[test_log::test]
fn built_values_serialize() {
    let record: ParsedRecord = IntervalFields::StartDuration {
        start: endpoint(),
        duration: DurationFields::default().hours("1"),
    }
    .into();

    let Built::Interval(interval) = ConcreteBuilder::new().build_object(&record).unwrap() else {
        panic!("expected an interval");
    };
    let json = serde_json::to_string(&interval).unwrap();
    let back: ResolvedInterval = serde_json::from_str(&json).unwrap();
    assert_eq!(interval, back);

    let offset = UtcOffset::new("+11:15", 675);
    let json = serde_json::to_string(&offset).unwrap();
    assert_eq!(serde_json::from_str::<UtcOffset>(&json).unwrap(), offset);
}
