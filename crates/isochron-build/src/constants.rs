/// Smallest year the concrete builders accept.
pub const MIN_YEAR: i32 = 1;
/// Largest year the concrete builders accept.
pub const MAX_YEAR: i32 = 9999;
/// Width a year field is widened to before conversion.
pub const YEAR_WIDTH: usize = 4;

/// Days counted for one year by the exact-elapsed duration strategy.
pub const EXACT_DAYS_PER_YEAR: i64 = 365;
/// Days counted for one month by the exact-elapsed duration strategy.
pub const EXACT_DAYS_PER_MONTH: i64 = 30;
pub const DAYS_PER_WEEK: i64 = 7;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;
pub const MINUTES_PER_HOUR: i32 = 60;
pub const MINUTES_PER_DAY: i32 = 1_440;

/// Resolution of every built time value: fractional input below one
/// microsecond is truncated.
pub const MICROS_PER_SECOND: i64 = 1_000_000;

/// Display name given to offsets built from the `Z` designator.
pub const UTC_NAME: &str = "UTC";
