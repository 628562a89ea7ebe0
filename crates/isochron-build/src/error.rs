use thiserror::Error;

/// Failures raised while turning intermediate records into temporal values.
///
/// Every variant is a permanent input-validation failure attributable to the
/// original text. The message names the offending field and value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Format error: {0}")]
    FormatError(String),

    #[error("Year out of bounds: {0}")]
    YearOutOfBounds(String),

    /// Month outside `1..=12`.
    #[error("Date out of bounds: {0}")]
    DateOutOfBounds(String),

    #[error("Day out of bounds: {0}")]
    DayOutOfBounds(String),

    #[error("Week out of bounds: {0}")]
    WeekOutOfBounds(String),

    #[error("Hours out of bounds: {0}")]
    HoursOutOfBounds(String),

    #[error("Minutes out of bounds: {0}")]
    MinutesOutOfBounds(String),

    #[error("Seconds out of bounds: {0}")]
    SecondsOutOfBounds(String),

    /// Hour 24 combined with a nonzero minute or second.
    #[error("Midnight bounds error: {0}")]
    MidnightBoundsError(String),

    /// `23:59:60`. Leap seconds are unsupported rather than invalid.
    #[error("Leap second error: {0}")]
    LeapSecondError(String),

    /// Fractional years or months given to calendar-relative resolution.
    #[error("Relative value error: {0}")]
    RelativeValueError(String),
}

pub type BuildResult<T> = std::result::Result<T, BuildError>;
