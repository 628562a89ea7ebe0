//! Duration records (ISO 8601 §4.4.3).

/// The components of `PnYnMnWnDTnHnMnS`, each an optional decimal text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DurationFields {
    pub years: Option<String>,
    pub months: Option<String>,
    pub weeks: Option<String>,
    pub days: Option<String>,
    pub hours: Option<String>,
    pub minutes: Option<String>,
    pub seconds: Option<String>,
}

impl DurationFields {
    #[must_use]
    pub fn years(mut self, value: &str) -> Self {
        self.years = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn months(mut self, value: &str) -> Self {
        self.months = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn weeks(mut self, value: &str) -> Self {
        self.weeks = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn days(mut self, value: &str) -> Self {
        self.days = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn hours(mut self, value: &str) -> Self {
        self.hours = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn minutes(mut self, value: &str) -> Self {
        self.minutes = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn seconds(mut self, value: &str) -> Self {
        self.seconds = Some(value.to_string());
        self
    }

    /// Returns whether any `T` component (hours, minutes, seconds) is present.
    ///
    /// A date endpoint combined with such a duration resolves to a datetime.
    #[must_use]
    pub const fn has_time_component(&self) -> bool {
        self.hours.is_some() || self.minutes.is_some() || self.seconds.is_some()
    }

    /// Returns whether no component at all is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.years.is_none()
            && self.months.is_none()
            && self.weeks.is_none()
            && self.days.is_none()
            && !self.has_time_component()
    }
}
