//! Duration resolution.
//!
//! A [`DurationFields`] record resolves through one of two strategies:
//! - [`Exact`] - everything becomes one fixed elapsed time (`chrono::TimeDelta`),
//!   years counted as 365 days and months as 30
//! - [`Relative`] - years and months stay calendar steps
//!   ([`RelativeDuration`]) applied with end-of-month clamping
//!
//! Both produce a value implementing [`Shift`], which is all interval and
//! repeating-interval resolution needs.

mod exact;
mod relative;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::constants::{MICROS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::error::{BuildError, BuildResult};
use crate::iso::record::DurationFields;
use crate::iso::validate::{cast_optional_decimal, checked_scale};

pub use exact::Exact;
pub use relative::{Relative, RelativeDuration};

/// Which way a duration is applied to an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

/// Moves a date or datetime by a resolved duration.
///
/// Dates move by whole days only; any sub-day remainder is dropped.
/// `None` means the result is outside chrono's representable range.
pub trait Shift {
    fn shift_date(&self, date: NaiveDate, direction: Direction) -> Option<NaiveDate>;

    fn shift_datetime(&self, datetime: NaiveDateTime, direction: Direction)
    -> Option<NaiveDateTime>;
}

/// A duration strategy: resolves duration records into a [`Shift`] value.
pub trait DurationResolver {
    type Duration: Shift + Clone + std::fmt::Debug + PartialEq;

    /// ## Errors
    /// Returns `FormatError` for empty records, negative or non-numeric
    /// components and values too large to represent; strategies may add
    /// their own failures.
    fn resolve(fields: &DurationFields) -> BuildResult<Self::Duration>;
}

pub(crate) const MICROS_PER_MINUTE: i64 = SECONDS_PER_MINUTE * MICROS_PER_SECOND;
pub(crate) const MICROS_PER_HOUR: i64 = SECONDS_PER_HOUR * MICROS_PER_SECOND;
pub(crate) const MICROS_PER_DAY: i64 = SECONDS_PER_DAY * MICROS_PER_SECOND;

fn too_large(field: &str) -> BuildError {
    BuildError::FormatError(format!("duration {field} is too large to represent"))
}

/// Rejects a record with no component at all.
pub(crate) fn require_component(fields: &DurationFields) -> BuildResult<()> {
    if fields.is_empty() {
        return Err(BuildError::FormatError(
            "duration has no components".to_string(),
        ));
    }
    Ok(())
}

/// Converts a non-negative duration component.
pub(crate) fn component(value: Option<&str>, field: &str) -> BuildResult<Decimal> {
    let amount = cast_optional_decimal(value, field)?;
    if amount < Decimal::ZERO {
        return Err(BuildError::FormatError(format!(
            "duration {field} {amount} must not be negative"
        )));
    }
    Ok(amount)
}

/// Sums `(text, field, microseconds per unit)` components and truncates the
/// total to whole microseconds. No step rounds up.
pub(crate) fn sum_elapsed(parts: &[(Option<&str>, &str, i64)]) -> BuildResult<TimeDelta> {
    let mut total = Decimal::ZERO;
    for &(value, field, unit) in parts {
        let micros = checked_scale(component(value, field)?, unit).ok_or_else(|| too_large(field))?;
        total = total.checked_add(micros).ok_or_else(|| too_large(field))?;
    }
    let micros = total.trunc().to_i64().ok_or_else(|| too_large("total"))?;
    Ok(TimeDelta::microseconds(micros))
}
