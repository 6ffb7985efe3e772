//! Output formatting and persistence for recorded observations.
//!
//! Writes the observation table as CSV and the summary as plain text, and
//! reads a previously exported table back into a [`RecordStore`].

use csv::WriterBuilder;
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{RecorderError, Result};
use crate::observation::Observation;
use crate::store::RecordStore;
use crate::summary::{SUMMARY_SEPARATOR, SUMMARY_TITLE, Summary};

pub const DEFAULT_DATA_FILE: &str = "weather_data.csv";
pub const DEFAULT_SUMMARY_FILE: &str = "weather_summary.txt";

const CSV_HEADER: [&str; 3] = ["Date", "Temperature", "Condition"];

/// Where the two export files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub data: PathBuf,
    pub summary: PathBuf,
}

impl Default for ExportPaths {
    fn default() -> Self {
        Self {
            data: PathBuf::from(DEFAULT_DATA_FILE),
            summary: PathBuf::from(DEFAULT_SUMMARY_FILE),
        }
    }
}

/// Logs the observations using Rust's debug pretty-print format.
pub fn print_pretty(observations: &[Observation]) {
    debug!("{:#?}", observations);
}

/// Renders the summary as pretty-printed JSON.
pub fn summary_json(summary: &Summary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

/// Writes all observations to `path`, replacing any existing file.
///
/// The header row is always written, followed by one row per observation
/// in store order.
pub fn write_observations(path: &Path, observations: &[Observation]) -> Result<()> {
    let csv_err = |source| RecorderError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|source| RecorderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = WriterBuilder::new()
        .has_headers(false) // header written explicitly so an empty table still has one
        .from_writer(file);

    writer.write_record(CSV_HEADER).map_err(csv_err)?;
    for observation in observations {
        writer.serialize(observation).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| RecorderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), rows = observations.len(), "Observation table written");
    Ok(())
}

/// Renders the summary file body: title, separator, then one `Key: Value`
/// line per field. Every line ends with a newline.
pub fn render_summary(summary: &Summary) -> String {
    let mut out = format!("{SUMMARY_TITLE}\n{SUMMARY_SEPARATOR}\n");
    for (key, value) in summary.fields() {
        out.push_str(&format!("{key}: {value}\n"));
    }
    out
}

/// Writes the rendered summary to `path`, replacing any existing file.
pub fn write_summary(path: &Path, summary: &Summary) -> Result<()> {
    std::fs::write(path, render_summary(summary)).map_err(|source| RecorderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "Summary written");
    Ok(())
}

/// A raw row from an exported table. Fields stay as text so they go
/// through the same validation as form input.
#[derive(Debug, Deserialize)]
struct ObservationRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Temperature")]
    temperature: String,
    #[serde(rename = "Condition")]
    condition: String,
}

/// Counts from [`load_observations`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub accepted: usize,
    pub rejected: usize,
}

/// Reads an exported table and submits every row to `store`.
///
/// Rows that fail validation or repeat a date are logged and skipped.
/// Only an unreadable file or malformed CSV aborts the load.
pub fn load_observations(path: &Path, store: &mut RecordStore) -> Result<LoadReport> {
    let csv_err = |source| RecorderError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|source| RecorderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut report = LoadReport::default();

    for (index, result) in rdr.deserialize().enumerate() {
        let row: ObservationRow = result.map_err(csv_err)?;
        match store.submit(&row.date, &row.temperature, &row.condition) {
            Ok(_) => report.accepted += 1,
            Err(e) => {
                // header is line 1
                warn!(line = index + 2, date = %row.date, error = %e, "Skipping row");
                report.rejected += 1;
            }
        }
    }

    info!(
        path = %path.display(),
        accepted = report.accepted,
        rejected = report.rejected,
        "Observation table loaded"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::summarize;
    use std::fs;
    use tempfile::tempdir;

    fn two_row_store() -> RecordStore {
        let mut store = RecordStore::new();
        store.submit("2024-01-01", "10", "Sunny").unwrap();
        store.submit("2024-01-02", "20", "Rainy").unwrap();
        store
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(two_row_store().all());
    }

    #[test]
    fn test_summary_json_has_null_std_dev_for_single_row() {
        let mut store = RecordStore::new();
        store.submit("2024-01-01", "10", "Sunny").unwrap();
        let summary = summarize(store.all()).unwrap();

        let rendered = summary_json(&summary).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert!(json["std_dev"].is_null());
        assert_eq!(json["trend"], "Decreasing");
        assert_eq!(json["most_common_condition"], "Sunny");
    }

    #[test]
    fn test_write_observations_header_and_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weather_data.csv");

        write_observations(&path, two_row_store().all()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Date,Temperature,Condition",
                "2024-01-01,10.0,Sunny",
                "2024-01-02,20.0,Rainy",
            ]
        );
    }

    #[test]
    fn test_write_observations_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weather_data.csv");
        fs::write(&path, "stale\nstale\nstale\nstale\nstale\n").unwrap();

        write_observations(&path, two_row_store().all()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 3);
    }

    #[test]
    fn test_condition_with_comma_is_quoted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weather_data.csv");
        let mut store = RecordStore::new();
        store.submit("2024-05-01", "18.5", "Windy, light rain").unwrap();

        write_observations(&path, store.all()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("2024-05-01,18.5,\"Windy, light rain\""));
    }

    #[test]
    fn test_write_summary_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weather_summary.txt");
        let summary = summarize(two_row_store().all()).unwrap();

        write_summary(&path, &summary).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2 + summary.fields().len());
        assert_eq!(lines[0], "Weather Data Summary");
        assert_eq!(lines[1], "====================");
        assert_eq!(lines[2], "Average Temperature: 15.0");
        assert_eq!(lines[7], "Trend: Increasing");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("weather_data.csv");

        let err = write_observations(&path, two_row_store().all()).unwrap_err();
        assert!(matches!(err, RecorderError::Io { .. }));
    }

    #[test]
    fn test_load_round_trips_export() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weather_data.csv");
        let original = two_row_store();
        write_observations(&path, original.all()).unwrap();

        let mut loaded = RecordStore::new();
        let report = load_observations(&path, &mut loaded).unwrap();

        assert_eq!(report, LoadReport { accepted: 2, rejected: 0 });
        assert_eq!(loaded.all(), original.all());
    }

    #[test]
    fn test_load_skips_invalid_and_duplicate_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weather_data.csv");
        fs::write(
            &path,
            "Date,Temperature,Condition\n\
             2024-01-01,10,Sunny\n\
             2024-1-2,11,Sunny\n\
             2024-01-01,12,Rainy\n\
             2024-01-03,hot,Sunny\n\
             2024-01-04,-2.5,Snow\n",
        )
        .unwrap();

        let mut store = RecordStore::new();
        let report = load_observations(&path, &mut store).unwrap();

        assert_eq!(report, LoadReport { accepted: 2, rejected: 3 });
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[1].temperature(), -2.5);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let mut store = RecordStore::new();
        let err = load_observations(&dir.path().join("nope.csv"), &mut store).unwrap_err();
        assert!(matches!(err, RecorderError::Io { .. }));
    }
}
