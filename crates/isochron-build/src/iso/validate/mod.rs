//! Numeric conversion and ISO 8601 range checks.
//!
//! Every check returns the converted value or one specific [`BuildError`]
//! kind; nothing is clamped.
//!
//! [`BuildError`]: crate::error::BuildError

mod bounds;
mod cast;

pub use bounds::{
    ClockTime, check_day_of_month, check_month, check_offset, check_ordinal_day, check_time,
    check_week, check_weekday, check_year,
};
pub use cast::{cast, cast_decimal, cast_optional_decimal, checked_scale, widen_year};
