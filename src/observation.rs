use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::stats::format_float;

/// One recorded day: date, temperature in degrees Celsius, and a free-text
/// condition label.
///
/// Observations are only built by [`RecordStore::submit`](crate::store::RecordStore::submit)
/// after validation and are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Temperature")]
    temperature: f64,
    #[serde(rename = "Condition")]
    condition: String,
}

impl Observation {
    pub(crate) fn new(date: NaiveDate, temperature: f64, condition: impl Into<String>) -> Self {
        Self {
            date,
            temperature,
            condition: condition.into(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }
}

/// Single-line listing used by the entries view.
impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {}°C | {}",
            self.date.format("%Y-%m-%d"),
            format_float(self.temperature),
            self.condition
        )
    }
}
