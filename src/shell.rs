//! Terminal form for the recorder.
//!
//! Mirrors the four buttons of a desktop form: add an entry, view entries,
//! summarize and export, exit. Every handler result is printed as a notice.

use std::io::{self, BufRead, Write};
use tracing::{debug, error};

use crate::error::{RecorderError, Severity};
use crate::recorder::Recorder;

const MENU: &str = "\
  1) Add Entry
  2) View Entries
  3) Summarize & Export
  4) Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    View,
    Summarize,
    Exit,
}

impl Action {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "a" | "add" => Some(Action::Add),
            "2" | "v" | "view" => Some(Action::View),
            "3" | "s" | "summarize" | "export" => Some(Action::Summarize),
            "4" | "q" | "quit" | "exit" => Some(Action::Exit),
            _ => None,
        }
    }
}

pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs until the user exits or input ends.
    pub fn run(&mut self, recorder: &mut Recorder) -> io::Result<()> {
        writeln!(self.output, "Weather Data Recorder")?;

        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(choice) = self.prompt("> ")? else {
                break;
            };
            if choice.trim().is_empty() {
                continue;
            }

            match Action::parse(&choice) {
                Some(Action::Add) => {
                    if !self.add_entry(recorder)? {
                        break;
                    }
                }
                Some(Action::View) => self.view_entries(recorder)?,
                Some(Action::Summarize) => self.summarize_and_export(recorder)?,
                Some(Action::Exit) => break,
                None => {
                    debug!(choice = %choice.trim(), "Unknown menu choice");
                    writeln!(self.output, "Unknown choice: {}", choice.trim())?;
                }
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()
    }

    /// Returns `false` when input ended part way through the form.
    fn add_entry(&mut self, recorder: &mut Recorder) -> io::Result<bool> {
        let Some(date) = self.prompt("Date (YYYY-MM-DD): ")? else {
            return Ok(false);
        };
        let Some(temperature) = self.prompt("Temperature (°C): ")? else {
            return Ok(false);
        };
        let Some(condition) = self.prompt("Condition (e.g., Sunny, Rainy): ")? else {
            return Ok(false);
        };

        match recorder.add_entry(&date, &temperature, &condition) {
            Ok(_) => self.notice(Severity::Info, "Success", "Weather data added successfully.")?,
            Err(e) => self.error_notice(&e)?,
        }
        Ok(true)
    }

    fn view_entries(&mut self, recorder: &Recorder) -> io::Result<()> {
        match recorder.view_entries() {
            Ok(entries) => {
                writeln!(self.output, "All Weather Entries")?;
                for entry in entries {
                    writeln!(self.output, "{entry}")?;
                }
                Ok(())
            }
            Err(e) => self.error_notice(&e),
        }
    }

    fn summarize_and_export(&mut self, recorder: &Recorder) -> io::Result<()> {
        let report = match recorder.summarize_and_export() {
            Ok(report) => report,
            Err(e) => {
                if e.is_file_failure() {
                    error!(error = %e, "Export failed, session continues");
                }
                return self.error_notice(&e);
            }
        };

        self.notice(Severity::Info, "Summary", &report.summary.to_string())?;
        writeln!(
            self.output,
            "Exported {} and {}",
            report.paths.data.display(),
            report.paths.summary.display()
        )?;
        for (path, reason) in &report.open_failures {
            let message = format!("Could not open {}: {reason}", path.display());
            self.notice(Severity::Warning, "Open Failed", &message)?;
        }
        Ok(())
    }

    fn error_notice(&mut self, error: &RecorderError) -> io::Result<()> {
        self.notice(error.severity(), error.title(), &error.to_string())
    }

    fn notice(&mut self, severity: Severity, title: &str, message: &str) -> io::Result<()> {
        let marker = match severity {
            Severity::Info => "[i]",
            Severity::Warning => "[!]",
            Severity::Error => "[x]",
        };
        writeln!(self.output, "{marker} {title}")?;
        writeln!(self.output, "{message}")
    }

    /// Reads one line with the line ending stripped. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
