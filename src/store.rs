//! In-memory record store.
//!
//! Append-only: observations are kept in entry order and each date may be
//! recorded once. Nothing is persisted; the export files are the only output.

use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::debug;

use crate::error::{RecorderError, Result};
use crate::observation::Observation;
use crate::validate::{parse_date, parse_temperature};

#[derive(Debug, Default)]
pub struct RecordStore {
    observations: Vec<Observation>,
    seen_dates: HashSet<NaiveDate>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates raw form input and records it.
    ///
    /// Checks run in a fixed order and stop at the first failure: date
    /// format, duplicate date, temperature. The store is untouched on error.
    pub fn submit(
        &mut self,
        date: &str,
        temperature: &str,
        condition: &str,
    ) -> Result<&Observation> {
        let date = parse_date(date)?;
        if self.contains_date(date) {
            return Err(RecorderError::DuplicateDate { date });
        }
        let temperature = parse_temperature(temperature)?;

        self.add(Observation::new(date, temperature, condition))
    }

    /// Appends an observation whose date has not been seen yet.
    pub fn add(&mut self, observation: Observation) -> Result<&Observation> {
        let date = observation.date();
        if !self.seen_dates.insert(date) {
            return Err(RecorderError::DuplicateDate { date });
        }
        self.observations.push(observation);
        debug!(%date, total = self.observations.len(), "Observation stored");

        Ok(&self.observations[self.observations.len() - 1])
    }

    /// All observations in entry order.
    pub fn all(&self) -> &[Observation] {
        &self.observations
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.seen_dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}
