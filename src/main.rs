//! CLI entry point for the weather recorder.
//!
//! Runs the interactive entry form by default, or recomputes the summary
//! from a previously exported observation table.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use weather_recorder::opener::{FileOpener, NoopOpener, PlatformOpener};
use weather_recorder::output::{
    DEFAULT_DATA_FILE, DEFAULT_SUMMARY_FILE, ExportPaths, load_observations, render_summary,
    summary_json,
};
use weather_recorder::shell::Shell;
use weather_recorder::{RecordStore, Recorder};

#[derive(Parser)]
#[command(name = "weather_recorder")]
#[command(about = "Record daily weather observations and export a summary", long_about = None)]
struct Cli {
    /// CSV file the observation table is exported to
    #[arg(long, global = true, default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Text file the summary is exported to
    #[arg(long, global = true, default_value = DEFAULT_SUMMARY_FILE)]
    summary_file: PathBuf,

    /// Do not open exported files with the default application
    #[arg(long, global = true, default_value_t = false)]
    no_open: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter observations interactively (default)
    Record,
    /// Load an exported observation table, then summarize and export it
    Summarize {
        /// CSV file with Date,Temperature,Condition columns
        #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
        input: PathBuf,

        /// Print the summary as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_tracing()?;

    let cli = Cli::parse();

    let paths = ExportPaths {
        data: cli.data_file,
        summary: cli.summary_file,
    };
    let opener: Box<dyn FileOpener> = if cli.no_open {
        info!("File opening disabled");
        Box::new(NoopOpener)
    } else {
        let platform = PlatformOpener::detect();
        info!(opener = ?platform, "File opener selected");
        Box::new(platform)
    };

    match cli.command.unwrap_or(Commands::Record) {
        Commands::Record => {
            let mut recorder = Recorder::new(paths, opener);
            Shell::new(io::stdin().lock(), io::stdout()).run(&mut recorder)?;
        }
        Commands::Summarize { input, json } => {
            let mut store = RecordStore::new();
            let loaded = load_observations(&input, &mut store)?;
            if loaded.rejected > 0 {
                warn!(rejected = loaded.rejected, "Some rows were skipped");
            }

            let recorder = Recorder::with_store(store, paths, opener);
            let report = recorder.summarize_and_export()?;

            if json {
                println!("{}", summary_json(&report.summary)?);
            } else {
                print!("{}", render_summary(&report.summary));
            }
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file.
///
/// The returned guard flushes the file writer and must live until exit.
fn init_tracing() -> Result<WorkerGuard> {
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/weather_recorder.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("weather_recorder.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    // stderr stays quiet by default so it does not interleave with the form
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(file_guard)
}
