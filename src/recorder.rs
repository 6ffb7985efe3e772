//! Application controller: owns the store and runs one handler per user
//! action.

use std::path::PathBuf;
use tracing::{info, warn};

use crate::error::{RecorderError, Result};
use crate::observation::Observation;
use crate::opener::FileOpener;
use crate::output::{ExportPaths, print_pretty, write_observations, write_summary};
use crate::store::RecordStore;
use crate::summary::{Summary, summarize};

/// What a successful summarize-and-export produced.
#[derive(Debug)]
pub struct ExportReport {
    pub summary: Summary,
    pub paths: ExportPaths,
    /// Files that were written but could not be opened, with the reason.
    pub open_failures: Vec<(PathBuf, String)>,
}

pub struct Recorder {
    store: RecordStore,
    paths: ExportPaths,
    opener: Box<dyn FileOpener>,
}

impl Recorder {
    pub fn new(paths: ExportPaths, opener: Box<dyn FileOpener>) -> Self {
        Self::with_store(RecordStore::new(), paths, opener)
    }

    /// Starts from an already populated store.
    pub fn with_store(store: RecordStore, paths: ExportPaths, opener: Box<dyn FileOpener>) -> Self {
        Self {
            store,
            paths,
            opener,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Validates and records one form submission.
    #[tracing::instrument(skip(self))]
    pub fn add_entry(
        &mut self,
        date: &str,
        temperature: &str,
        condition: &str,
    ) -> Result<&Observation> {
        match self.store.submit(date, temperature, condition) {
            Ok(observation) => {
                info!(date = %observation.date(), "Weather data added");
                Ok(observation)
            }
            Err(e) => {
                warn!(error = %e, "Entry rejected");
                Err(e)
            }
        }
    }

    /// All entries in the order they were added.
    pub fn view_entries(&self) -> Result<&[Observation]> {
        if self.store.is_empty() {
            return Err(RecorderError::NoEntries);
        }
        Ok(self.store.all())
    }

    /// Summarizes the store, writes both export files and opens them.
    ///
    /// Nothing is written for an empty store. A failure to open a file is
    /// logged and reported but does not fail the export.
    #[tracing::instrument(skip(self), fields(entries = self.store.len()))]
    pub fn summarize_and_export(&self) -> Result<ExportReport> {
        let summary = summarize(self.store.all())?;

        write_observations(&self.paths.data, self.store.all())?;
        write_summary(&self.paths.summary, &summary)?;
        print_pretty(self.store.all());
        info!(
            data = %self.paths.data.display(),
            summary = %self.paths.summary.display(),
            "Exports written"
        );

        let mut open_failures = Vec::new();
        for path in [&self.paths.data, &self.paths.summary] {
            if let Err(e) = self.opener.open(path) {
                warn!(path = %path.display(), error = %e, "Failed to open exported file");
                open_failures.push((path.clone(), e.to_string()));
            }
        }

        Ok(ExportReport {
            summary,
            paths: self.paths.clone(),
            open_failures,
        })
    }
}
