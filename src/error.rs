//! Error taxonomy for the recorder.
//!
//! Every variant is recoverable: the shell turns it into a notice and the
//! session continues. [`RecorderError::title`] and [`RecorderError::severity`]
//! describe how that notice is presented.

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecorderError>;

/// How loudly a notice should be presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("Please use YYYY-MM-DD format.")]
    InvalidDate { input: String },

    #[error("This date already has data.")]
    DuplicateDate { date: NaiveDate },

    #[error("Temperature must be a number.")]
    InvalidTemperature { input: String },

    #[error("Nothing to summarize.")]
    NothingToSummarize,

    #[error("No entries yet.")]
    NoEntries,

    #[error("CSV error on {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RecorderError {
    /// Short heading shown above the message.
    pub fn title(&self) -> &'static str {
        match self {
            RecorderError::InvalidDate { .. } => "Invalid Date",
            RecorderError::DuplicateDate { .. } => "Duplicate",
            RecorderError::InvalidTemperature { .. } => "Invalid Input",
            RecorderError::NothingToSummarize | RecorderError::NoEntries => "No Data",
            RecorderError::Csv { .. } | RecorderError::Io { .. } => "File Error",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            RecorderError::DuplicateDate { .. } => Severity::Warning,
            RecorderError::NothingToSummarize | RecorderError::NoEntries => Severity::Info,
            _ => Severity::Error,
        }
    }

    /// True for failures reading or writing a data file.
    pub fn is_file_failure(&self) -> bool {
        matches!(self, RecorderError::Csv { .. } | RecorderError::Io { .. })
    }
}
