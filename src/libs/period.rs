use super::error::AttritionError;
use chrono::{Duration, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Rolling window ending today used to bound termination counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Quarterly,
    Yearly,
}

impl Period {
    pub fn days(&self) -> i64 {
        match self {
            Period::Quarterly => 90,
            Period::Yearly => 365,
        }
    }

    /// First day included in the window.
    pub fn window_start(&self, today: NaiveDate) -> NaiveDate {
        today - Duration::days(self.days())
    }
}

impl FromStr for Period {
    type Err = AttritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quarterly" => Ok(Period::Quarterly),
            "yearly" => Ok(Period::Yearly),
            other => Err(AttritionError::UnsupportedPeriod(other.to_string())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Quarterly => write!(f, "quarterly"),
            Period::Yearly => write!(f, "yearly"),
        }
    }
}
