//! Write-only event log used by every stage of a run.
//!
//! Components report through a [`DiagnosticsSink`]. The production sink,
//! [`TracingSink`], forwards to `tracing`, and [`install`] wires two
//! independent fmt layers under one subscriber:
//!
//! - a console layer on stdout for the person or scheduler watching the run,
//! - a durable layer appending plain text to the log file.
//!
//! Each line carries a timestamp, the severity and the message. The durable
//! layer is best effort: if the file cannot be opened the run continues with
//! console output only, and write errors on an open file are dropped by the
//! subscriber instead of reaching the caller.

use std::fmt::{Display, Formatter};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Severity of a diagnostic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Append-only destination for run diagnostics. There is no read API.
pub trait DiagnosticsSink: Send + Sync {
    fn record(&self, level: Level, message: &str);
}

/// Forwards entries to `tracing`, tagging each with the id of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingSink {
    run_id: Uuid,
}

impl TracingSink {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
        }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticsSink for TracingSink {
    fn record(&self, level: Level, message: &str) {
        let run_id = self.run_id.simple();
        match level {
            Level::Debug => tracing::debug!(run = %run_id, "{message}"),
            Level::Info => tracing::info!(run = %run_id, "{message}"),
            Level::Warn => tracing::warn!(run = %run_id, "{message}"),
            Level::Error => tracing::error!(run = %run_id, "{message}"),
        }
    }
}

/// One captured entry of a [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEntry {
    pub level: Level,
    pub message: String,
}

/// Sink that keeps entries in memory, for tests and embedding callers.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<DiagnosticEntry>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn contains(&self, level: Level, fragment: &str) -> bool {
        self.entries()
            .iter()
            .any(|entry| entry.level == level && entry.message.contains(fragment))
    }
}

impl DiagnosticsSink for MemorySink {
    fn record(&self, level: Level, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(DiagnosticEntry {
                level,
                message: message.to_owned(),
            });
        }
    }
}

#[derive(Debug, Error)]
pub enum DiagnosticsError {
    #[error("invalid log filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },

    #[error("diagnostics are already installed: {0}")]
    AlreadyInstalled(String),
}

/// Outcome of opening the durable log: a writer, or the reason there is none.
#[derive(Debug, Default)]
struct DurableLog {
    writer: Option<Mutex<fs::File>>,
    unavailable: Option<std::io::Error>,
}

impl DurableLog {
    fn open(log_file: Option<&Path>) -> Self {
        match log_file.map(open_durable_log) {
            Some(Ok(file)) => Self {
                writer: Some(Mutex::new(file)),
                unavailable: None,
            },
            Some(Err(error)) => Self {
                writer: None,
                unavailable: Some(error),
            },
            None => Self::default(),
        }
    }
}

/// Install the global console + durable subscriber.
///
/// `filter` accepts `EnvFilter` directives such as `info` or `fxrate_core=debug`.
/// A log file that cannot be opened only costs the durable layer.
pub fn install(filter: &str, log_file: Option<&Path>) -> Result<(), DiagnosticsError> {
    let env_filter =
        EnvFilter::try_new(filter).map_err(|error| DiagnosticsError::InvalidFilter {
            filter: filter.to_owned(),
            message: error.to_string(),
        })?;

    let DurableLog {
        writer,
        unavailable,
    } = DurableLog::open(log_file);

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stdout);
    let durable = writer.map(|file| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(file)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(durable)
        .try_init()
        .map_err(|error| DiagnosticsError::AlreadyInstalled(error.to_string()))?;

    if let (Some(path), Some(error)) = (log_file, unavailable) {
        tracing::warn!(
            "durable log {} unavailable, continuing with console output only: {error}",
            path.display()
        );
    }

    Ok(())
}

fn open_durable_log(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
