//! Calendar-relative duration strategy.

use chrono::{Months, NaiveDate, NaiveDateTime, TimeDelta};
use rust_decimal::prelude::ToPrimitive;

use super::{
    Direction, DurationResolver, MICROS_PER_DAY, MICROS_PER_HOUR, MICROS_PER_MINUTE, Shift,
    component, require_component, sum_elapsed,
};
use crate::constants::{DAYS_PER_WEEK, MICROS_PER_SECOND};
use crate::error::{BuildError, BuildResult};
use crate::iso::record::DurationFields;

/// A duration whose years and months are calendar steps.
///
/// Applying it moves by `years * 12 + months` calendar months first, using
/// the last day of the target month when the day does not exist there
/// (Jan 31 + 1 month = Feb 28/29), and then by the elapsed part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelativeDuration {
    years: u32,
    months: u32,
    elapsed: TimeDelta,
}

impl RelativeDuration {
    #[must_use]
    pub const fn new(years: u32, months: u32, elapsed: TimeDelta) -> Self {
        Self {
            years,
            months,
            elapsed,
        }
    }

    #[must_use]
    pub const fn years(&self) -> u32 {
        self.years
    }

    #[must_use]
    pub const fn months(&self) -> u32 {
        self.months
    }

    /// The weeks, days, hours, minutes and seconds as one elapsed time.
    #[must_use]
    pub const fn elapsed(&self) -> TimeDelta {
        self.elapsed
    }

    /// Total calendar months to step, `None` on overflow.
    #[must_use]
    pub fn calendar_months(&self) -> Option<Months> {
        let total = self.years.checked_mul(12)?.checked_add(self.months)?;
        Some(Months::new(total))
    }
}

impl Default for RelativeDuration {
    fn default() -> Self {
        Self::new(0, 0, TimeDelta::zero())
    }
}

impl Shift for RelativeDuration {
    fn shift_date(&self, date: NaiveDate, direction: Direction) -> Option<NaiveDate> {
        let months = self.calendar_months()?;
        let days = TimeDelta::try_days(self.elapsed.num_days())?;
        match direction {
            Direction::Forward => date.checked_add_months(months)?.checked_add_signed(days),
            Direction::Backward => date.checked_sub_months(months)?.checked_sub_signed(days),
        }
    }

    fn shift_datetime(
        &self,
        datetime: NaiveDateTime,
        direction: Direction,
    ) -> Option<NaiveDateTime> {
        let months = self.calendar_months()?;
        match direction {
            Direction::Forward => datetime
                .checked_add_months(months)?
                .checked_add_signed(self.elapsed),
            Direction::Backward => datetime
                .checked_sub_months(months)?
                .checked_sub_signed(self.elapsed),
        }
    }
}

/// Keeps years and months as calendar steps; the remaining components
/// resolve to elapsed time as in [`super::Exact`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Relative;

/// Converts a year or month component, which must be a whole number.
fn calendar_steps(value: Option<&str>, field: &str) -> BuildResult<u32> {
    let amount = component(value, field)?;
    if !amount.fract().is_zero() {
        return Err(BuildError::RelativeValueError(format!(
            "fractional {field} {amount} cannot be applied as calendar steps"
        )));
    }
    amount.to_u32().ok_or_else(|| {
        BuildError::FormatError(format!("duration {field} {amount} is too large to represent"))
    })
}

impl DurationResolver for Relative {
    type Duration = RelativeDuration;

    fn resolve(fields: &DurationFields) -> BuildResult<RelativeDuration> {
        require_component(fields)?;
        let years = calendar_steps(fields.years.as_deref(), "years")?;
        let months = calendar_steps(fields.months.as_deref(), "months")?;
        let elapsed = sum_elapsed(&[
            (
                fields.weeks.as_deref(),
                "weeks",
                DAYS_PER_WEEK * MICROS_PER_DAY,
            ),
            (fields.days.as_deref(), "days", MICROS_PER_DAY),
            (fields.hours.as_deref(), "hours", MICROS_PER_HOUR),
            (fields.minutes.as_deref(), "minutes", MICROS_PER_MINUTE),
            (fields.seconds.as_deref(), "seconds", MICROS_PER_SECOND),
        ])?;
        Ok(RelativeDuration::new(years, months, elapsed))
    }
}
