use std::fmt;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};

use crate::error::SubmitError;

/// Days ahead used for the proposed due date when a view opens.
pub const DEFAULT_DUE_DAYS: i64 = 7;

/// Calendar due date attached to a batch of certificate requests.
///
/// The floor check ("not earlier than today") compares calendar dates in the
/// caller's local reckoning, independent of time zone. On the wire the date
/// becomes a UTC instant: midnight at the deployment's fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DueDate(NaiveDate);

impl DueDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse `YYYY-MM-DD` form input.
    pub fn parse(value: &str) -> Result<Self, SubmitError> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| SubmitError::InvalidDueDate(value.to_string()))
    }

    /// Default proposal shown when a view opens: a week from today.
    pub fn proposal(today: NaiveDate) -> Self {
        Self(today + Duration::days(DEFAULT_DUE_DAYS))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn is_on_or_after(&self, today: NaiveDate) -> bool {
        self.0 >= today
    }

    /// Timezone-normalized wire form: midnight of the due date at `offset`,
    /// expressed as a UTC instant.
    pub fn to_instant(&self, offset: FixedOffset) -> DateTime<Utc> {
        let midnight = self.0.and_time(NaiveTime::MIN);
        let utc_naive = midnight - Duration::seconds(i64::from(offset.local_minus_utc()));
        DateTime::from_naive_utc_and_offset(utc_naive, Utc)
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
