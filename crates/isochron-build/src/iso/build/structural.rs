//! A builder that returns the records it is given.

use super::TimeBuilder;
use crate::error::BuildResult;
use crate::iso::record::{
    DateFields, DatetimeFields, DurationFields, IntervalFields, RepeatingIntervalFields,
    TimeFields, TimezoneFields,
};

/// Performs no conversion or validation; every operation clones its input.
///
/// Useful for inspecting what the parsing layer produced, through the same
/// [`TimeBuilder`] interface as the validating builders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordBuilder;

impl TimeBuilder for RecordBuilder {
    type Date = DateFields;
    type Time = TimeFields;
    type DateTime = DatetimeFields;
    type Duration = DurationFields;
    type Interval = IntervalFields;
    type RepeatingInterval = RepeatingIntervalFields;
    type Timezone = TimezoneFields;

    fn build_date(&self, fields: &DateFields) -> BuildResult<DateFields> {
        Ok(fields.clone())
    }

    fn build_time(&self, fields: &TimeFields) -> BuildResult<TimeFields> {
        Ok(fields.clone())
    }

    fn build_datetime(&self, fields: &DatetimeFields) -> BuildResult<DatetimeFields> {
        Ok(fields.clone())
    }

    fn build_duration(&self, fields: &DurationFields) -> BuildResult<DurationFields> {
        Ok(fields.clone())
    }

    fn build_interval(&self, fields: &IntervalFields) -> BuildResult<IntervalFields> {
        Ok(fields.clone())
    }

    fn build_repeating_interval(
        &self,
        fields: &RepeatingIntervalFields,
    ) -> BuildResult<RepeatingIntervalFields> {
        Ok(fields.clone())
    }

    fn build_timezone(&self, fields: &TimezoneFields) -> BuildResult<TimezoneFields> {
        Ok(fields.clone())
    }
}
