//! Validating builders over a duration strategy.

use std::marker::PhantomData;

use chrono::{Datelike, NaiveDate};

use super::{Recurrence, TimeBuilder};
use crate::constants::{MAX_YEAR, MIN_YEAR, UTC_NAME};
use crate::error::{BuildError, BuildResult};
use crate::iso::calendar;
use crate::iso::core::{DateTime, Moment, ResolvedInterval, Time, UtcOffset};
use crate::iso::duration::{Direction, DurationResolver, Exact, Relative};
use crate::iso::record::{
    DateFields, DatetimeFields, DurationFields, EndpointFields, IntervalFields, Repeat,
    RepeatingIntervalFields, TimeFields, TimezoneFields,
};
use crate::iso::validate::{cast, check_offset, check_time};

/// Builds validated values, resolving durations with the strategy `R`.
#[derive(Debug, Clone, Default)]
pub struct ObjectBuilder<R> {
    strategy: PhantomData<R>,
}

/// Durations are fixed elapsed time; a year is 365 days and a month 30.
pub type ConcreteBuilder = ObjectBuilder<Exact>;

/// Years and months are calendar steps clamped to the end of shorter months.
pub type RelativeBuilder = ObjectBuilder<Relative>;

impl<R> ObjectBuilder<R> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strategy: PhantomData,
        }
    }
}

/// Reports whether `moment` falls inside the supported year range.
pub(crate) fn in_calendar(moment: &Moment) -> bool {
    let year = match moment {
        Moment::Date(date) => date.year(),
        Moment::DateTime(datetime) => datetime.date().year(),
    };
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

/// Promotes a date to midnight when the duration carries a time component,
/// so that hours, minutes and seconds are not dropped.
fn anchor(moment: Moment, duration: &DurationFields) -> Moment {
    match moment {
        Moment::Date(date) if duration.has_time_component() => {
            Moment::DateTime(DateTime::midnight(date))
        }
        other => other,
    }
}

impl<R: DurationResolver> ObjectBuilder<R> {
    fn build_endpoint(&self, fields: &EndpointFields) -> BuildResult<Moment> {
        Ok(match fields {
            EndpointFields::Date(date) => Moment::Date(self.build_date(date)?),
            EndpointFields::DateTime(datetime) => Moment::DateTime(self.build_datetime(datetime)?),
        })
    }

    /// Computes the missing endpoint by applying `duration` to `base`.
    fn project(
        base: &Moment,
        fields: &DurationFields,
        duration: &R::Duration,
        direction: Direction,
    ) -> BuildResult<Moment> {
        anchor(base.clone(), fields)
            .shift(duration, direction)
            .filter(in_calendar)
            .ok_or_else(|| {
                BuildError::YearOutOfBounds(format!(
                    "applying the duration to {base} leaves years {MIN_YEAR}..{MAX_YEAR}"
                ))
            })
    }
}

impl<R: DurationResolver> TimeBuilder for ObjectBuilder<R> {
    type Date = NaiveDate;
    type Time = Time;
    type DateTime = DateTime;
    type Duration = R::Duration;
    type Interval = ResolvedInterval;
    type RepeatingInterval = Recurrence<R::Duration>;
    type Timezone = UtcOffset;

    fn build_date(&self, fields: &DateFields) -> BuildResult<NaiveDate> {
        calendar::normalize(fields)
    }

    fn build_time(&self, fields: &TimeFields) -> BuildResult<Time> {
        let clock = check_time(
            fields.hour.as_deref(),
            fields.minute.as_deref(),
            fields.second.as_deref(),
        )?;
        let offset = fields
            .timezone
            .as_ref()
            .map(|timezone| self.build_timezone(timezone))
            .transpose()?;
        Ok(Time::new(clock.to_naive()?, offset))
    }

    fn build_datetime(&self, fields: &DatetimeFields) -> BuildResult<DateTime> {
        let date = self.build_date(&fields.date)?;
        let time = self.build_time(&fields.time)?;
        Ok(DateTime::new(
            date.and_time(time.naive()),
            time.offset().cloned(),
        ))
    }

    fn build_duration(&self, fields: &DurationFields) -> BuildResult<R::Duration> {
        R::resolve(fields)
    }

    #[tracing::instrument(level = "trace", skip(self, fields))]
    fn build_interval(&self, fields: &IntervalFields) -> BuildResult<ResolvedInterval> {
        let interval = match fields {
            IntervalFields::StartEnd { start, end } => {
                tracing::trace!("Interval given by both endpoints");
                ResolvedInterval::new(self.build_endpoint(start)?, self.build_endpoint(end)?)
            }
            IntervalFields::StartDuration { start, duration } => {
                tracing::trace!("Interval end computed from start");
                let start = self.build_endpoint(start)?;
                let step = R::resolve(duration)?;
                let end = Self::project(&start, duration, &step, Direction::Forward)?;
                ResolvedInterval::new(start, end)
            }
            IntervalFields::DurationEnd { duration, end } => {
                tracing::trace!("Interval start computed from end");
                let end = self.build_endpoint(end)?;
                let step = R::resolve(duration)?;
                let start = Self::project(&end, duration, &step, Direction::Backward)?;
                ResolvedInterval::new(start, end)
            }
        };

        tracing::debug!(start = %interval.start, end = %interval.end, "Interval resolved");
        Ok(interval)
    }

    #[tracing::instrument(level = "trace", skip(self, fields))]
    fn build_repeating_interval(
        &self,
        fields: &RepeatingIntervalFields,
    ) -> BuildResult<Recurrence<R::Duration>> {
        let limit = match &fields.repeat {
            Repeat::Forever => None,
            Repeat::Count(count) => Some(cast::<u32>(count, "repeat count")?),
        };

        let recurrence = match &fields.interval {
            IntervalFields::StartEnd { start, end } => {
                Recurrence::endpoints(self.build_endpoint(start)?, self.build_endpoint(end)?, limit)
            }
            IntervalFields::StartDuration { start, duration } => Recurrence::stepping(
                anchor(self.build_endpoint(start)?, duration),
                R::resolve(duration)?,
                Direction::Forward,
                limit,
            ),
            IntervalFields::DurationEnd { duration, end } => Recurrence::stepping(
                anchor(self.build_endpoint(end)?, duration),
                R::resolve(duration)?,
                Direction::Backward,
                limit,
            ),
        };

        tracing::debug!(?limit, "Repeating interval constructed");
        Ok(recurrence)
    }

    fn build_timezone(&self, fields: &TimezoneFields) -> BuildResult<UtcOffset> {
        if fields.utc {
            return Ok(UtcOffset::new(UTC_NAME, 0));
        }

        let hours = fields.hours.as_deref().ok_or_else(|| {
            BuildError::FormatError(format!("UTC offset {} has no hours", fields.name))
        })?;
        let minutes = check_offset(fields.negative, hours, fields.minutes.as_deref())?;
        Ok(UtcOffset::new(fields.name.clone(), minutes))
    }
}
