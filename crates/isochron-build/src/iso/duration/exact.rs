//! Exact-elapsed duration strategy.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use super::{
    Direction, DurationResolver, MICROS_PER_DAY, MICROS_PER_HOUR, MICROS_PER_MINUTE, Shift,
    require_component, sum_elapsed,
};
use crate::constants::{DAYS_PER_WEEK, EXACT_DAYS_PER_MONTH, EXACT_DAYS_PER_YEAR, MICROS_PER_SECOND};
use crate::error::BuildResult;
use crate::iso::record::DurationFields;

/// Resolves every component to fixed elapsed time.
///
/// Years count as 365 days and months as 30 days regardless of the calendar
/// position the duration is later applied at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exact;

impl DurationResolver for Exact {
    type Duration = TimeDelta;

    fn resolve(fields: &DurationFields) -> BuildResult<TimeDelta> {
        require_component(fields)?;
        sum_elapsed(&[
            (
                fields.years.as_deref(),
                "years",
                EXACT_DAYS_PER_YEAR * MICROS_PER_DAY,
            ),
            (
                fields.months.as_deref(),
                "months",
                EXACT_DAYS_PER_MONTH * MICROS_PER_DAY,
            ),
            (
                fields.weeks.as_deref(),
                "weeks",
                DAYS_PER_WEEK * MICROS_PER_DAY,
            ),
            (fields.days.as_deref(), "days", MICROS_PER_DAY),
            (fields.hours.as_deref(), "hours", MICROS_PER_HOUR),
            (fields.minutes.as_deref(), "minutes", MICROS_PER_MINUTE),
            (fields.seconds.as_deref(), "seconds", MICROS_PER_SECOND),
        ])
    }
}

impl Shift for TimeDelta {
    fn shift_date(&self, date: NaiveDate, direction: Direction) -> Option<NaiveDate> {
        let days = TimeDelta::try_days(self.num_days())?;
        match direction {
            Direction::Forward => date.checked_add_signed(days),
            Direction::Backward => date.checked_sub_signed(days),
        }
    }

    fn shift_datetime(
        &self,
        datetime: NaiveDateTime,
        direction: Direction,
    ) -> Option<NaiveDateTime> {
        match direction {
            Direction::Forward => datetime.checked_add_signed(*self),
            Direction::Backward => datetime.checked_sub_signed(*self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuildError;

    fn days(days: i64) -> TimeDelta {
        TimeDelta::days(days)
    }

    #[test]
    fn resolve_table() {
        let cases = [
            (
                DurationFields::default()
                    .years("1")
                    .months("2")
                    .days("3")
                    .hours("4")
                    .minutes("54")
                    .seconds("6"),
                days(428) + TimeDelta::hours(4) + TimeDelta::minutes(54) + TimeDelta::seconds(6),
            ),
            (
                DurationFields::default().years("1").months("2").days("3.5"),
                days(428) + TimeDelta::hours(12),
            ),
            (
                DurationFields::default()
                    .hours("4")
                    .minutes("54")
                    .seconds("6.5"),
                TimeDelta::hours(4)
                    + TimeDelta::minutes(54)
                    + TimeDelta::milliseconds(6_500),
            ),
            (DurationFields::default().years("1"), days(365)),
            (
                DurationFields::default().years("1.5"),
                days(547) + TimeDelta::hours(12),
            ),
            (DurationFields::default().months("1"), days(30)),
            (DurationFields::default().months("1.5"), days(45)),
            (DurationFields::default().weeks("1"), days(7)),
            (
                DurationFields::default().weeks("1.5"),
                days(10) + TimeDelta::hours(12),
            ),
            (
                DurationFields::default()
                    .years("0003")
                    .months("06")
                    .days("04")
                    .hours("12")
                    .minutes("30")
                    .seconds("05"),
                days(1279) + TimeDelta::hours(12) + TimeDelta::minutes(30) + TimeDelta::seconds(5),
            ),
            (
                DurationFields::default()
                    .years("0001")
                    .months("02")
                    .days("03")
                    .hours("14")
                    .minutes("43")
                    .seconds("59.9999997"),
                days(428)
                    + TimeDelta::hours(14)
                    + TimeDelta::minutes(43)
                    + TimeDelta::seconds(59)
                    + TimeDelta::microseconds(999_999),
            ),
            (
                DurationFields::default().seconds("2.0000048"),
                TimeDelta::seconds(2) + TimeDelta::microseconds(4),
            ),
            (DurationFields::default().seconds("0.0000001"), TimeDelta::zero()),
            (
                DurationFields::default().hours("36"),
                days(1) + TimeDelta::hours(12),
            ),
        ];

        for (fields, expected) in cases {
            assert_eq!(Exact::resolve(&fields).unwrap(), expected, "{fields:?}");
        }
    }

    #[test]
    fn resolve_truncates_long_fractions() {
        let fields = DurationFields::default().seconds(&format!("0.{}", "9".repeat(29)));
        assert_eq!(
            Exact::resolve(&fields).unwrap(),
            TimeDelta::microseconds(999_999)
        );

        let fields = DurationFields::default()
            .minutes("1")
            .seconds(&format!("59,{}", "9".repeat(40)));
        assert_eq!(
            Exact::resolve(&fields).unwrap(),
            TimeDelta::seconds(119) + TimeDelta::microseconds(999_999)
        );
    }

    #[test]
    fn resolve_rejects_empty() {
        assert!(matches!(
            Exact::resolve(&DurationFields::default()),
            Err(BuildError::FormatError(_))
        ));
    }

    #[test]
    fn dates_move_by_whole_days() {
        let date = NaiveDate::from_ymd_opt(2018, 3, 6).unwrap();
        let delta = days(547) + TimeDelta::hours(12);

        assert_eq!(
            delta.shift_date(date, Direction::Backward),
            NaiveDate::from_ymd_opt(2016, 9, 5)
        );
        assert_eq!(
            days(75).shift_date(date, Direction::Forward),
            NaiveDate::from_ymd_opt(2018, 5, 20)
        );
    }
}
