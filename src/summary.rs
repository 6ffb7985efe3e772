//! Descriptive statistics over the recorded observations.

use serde::Serialize;
use std::fmt;

use crate::error::{RecorderError, Result};
use crate::observation::Observation;
use crate::stats::{format_float, mean, mean_successive_delta, mode, round2, sample_stddev};

pub const SUMMARY_TITLE: &str = "Weather Data Summary";
pub const SUMMARY_SEPARATOR: &str = "====================";

/// Direction of the temperature series when read in date order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Increasing,
    Decreasing,
}

impl Trend {
    /// `Increasing` only when the mean successive difference is strictly
    /// positive. A flat series, or one with fewer than two points, reads as
    /// `Decreasing`.
    fn from_mean_delta(delta: Option<f64>) -> Self {
        match delta {
            Some(d) if d > 0.0 => Trend::Increasing,
            _ => Trend::Decreasing,
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Increasing => f.write_str("Increasing"),
            Trend::Decreasing => f.write_str("Decreasing"),
        }
    }
}

/// Summary report. Values are kept at full precision; rounding happens in
/// [`Summary::fields`] and `Display`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub average_temperature: f64,
    pub max_temperature: f64,
    pub min_temperature: f64,
    /// `None` when fewer than two observations exist.
    pub std_dev: Option<f64>,
    pub most_common_condition: String,
    pub trend: Trend,
}

impl Summary {
    /// Labelled display values in report order, numbers rounded to two
    /// decimals. An undefined standard deviation renders as `nan`.
    pub fn fields(&self) -> [(&'static str, String); 6] {
        let num = |v: f64| format_float(round2(v));
        [
            ("Average Temperature", num(self.average_temperature)),
            ("Max Temperature", num(self.max_temperature)),
            ("Min Temperature", num(self.min_temperature)),
            ("Std Dev", self.std_dev.map_or_else(|| "nan".to_string(), num)),
            ("Most Common Condition", self.most_common_condition.clone()),
            ("Trend", self.trend.to_string()),
        ]
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.fields().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}

/// Builds a [`Summary`] for a non-empty set of observations.
///
/// # Errors
///
/// Returns [`RecorderError::NothingToSummarize`] for empty input.
pub fn summarize(observations: &[Observation]) -> Result<Summary> {
    if observations.is_empty() {
        return Err(RecorderError::NothingToSummarize);
    }

    let temps: Vec<f64> = observations.iter().map(Observation::temperature).collect();
    let average = mean(&temps);
    let max = temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = temps.iter().copied().fold(f64::INFINITY, f64::min);

    let most_common = mode(observations.iter().map(Observation::condition))
        .unwrap_or_default()
        .to_string();

    let mut by_date: Vec<&Observation> = observations.iter().collect();
    by_date.sort_by_key(|o| o.date());
    let dated_temps: Vec<f64> = by_date.iter().map(|o| o.temperature()).collect();

    Ok(Summary {
        average_temperature: average,
        max_temperature: max,
        min_temperature: min,
        std_dev: sample_stddev(&temps, average),
        most_common_condition: most_common,
        trend: Trend::from_mean_delta(mean_successive_delta(&dated_temps)),
    })
}
