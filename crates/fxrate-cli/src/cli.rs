//! CLI argument definitions for fxrate.
//!
//! One invocation performs one lookup: a source currency, a target currency
//! and a date. Every option can also come from the environment, which is how
//! a scheduler or container usually supplies them.
//!
//! # Options
//!
//! | Option | Env | Default | Description |
//! |--------|-----|---------|-------------|
//! | `--base-url` | `FXRATE_BASE_URL` | `http://localhost:8080` | Rate service root |
//! | `--api-key` | `FXRATE_API_KEY` | `EXAMPLE_API_KEY` | Key sent with every call |
//! | `--output-dir` | `FXRATE_OUTPUT_DIR` | `data` | Artifact directory |
//! | `--log-file` | `FXRATE_LOG_FILE` | `error.log` | Durable diagnostics log |
//! | `--timeout-ms` | `FXRATE_TIMEOUT_MS` | `3000` | Per-call timeout |
//! | `--window-start` | `FXRATE_WINDOW_START` | `2025-01-01` | First accepted date |
//! | `--window-end` | `FXRATE_WINDOW_END` | `2025-09-15` | Last accepted date |
//! | `--log-level` | `FXRATE_LOG` | `info` | Diagnostics filter |
//! | `--format` | | `text` | Summary format (text, json) |
//! | `--pretty` | | `false` | Indent JSON output |
//!
//! # Examples
//!
//! ```bash
//! # Fetch the USD to EUR rate for a day
//! fxrate USD EUR 2025-01-15
//!
//! # Against another service, printing the stored record
//! fxrate mdl ron 2025-03-01 --base-url http://rates:8080 --format json --pretty
//! ```

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, ValueEnum};
use fxrate_core::config::{
    DEFAULT_API_KEY, DEFAULT_BASE_URL, DEFAULT_LOG_FILE, DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT_MS,
};

/// Fetch one exchange rate and store it with its request provenance.
#[derive(Debug, Parser)]
#[command(
    name = "fxrate",
    author,
    version,
    about = "Fetch and store a currency exchange rate",
    long_about = "Validates a currency pair and date against the rate service catalog and the \
supported date window, fetches the rate once and writes {FROM}_{TO}_{DATE}.json into the \
output directory.\n\
\n\
Exit statuses: 0 stored, 1 configuration, 2 usage or validation, 3 catalog, 4 rate fetch, \
5 persistence."
)]
pub struct Cli {
    /// Source currency code, e.g. USD.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub from: String,

    /// Target currency code, e.g. EUR.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub to: String,

    /// Date of the rate, YYYY-MM-DD.
    pub date: String,

    /// Root URL of the rate service.
    #[arg(long, env = "FXRATE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// API key sent as the `key` form field.
    #[arg(long, env = "FXRATE_API_KEY", default_value = DEFAULT_API_KEY, hide_env_values = true)]
    pub api_key: String,

    /// Directory receiving the JSON artifacts.
    #[arg(long, env = "FXRATE_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Append-only diagnostics log.
    #[arg(long, env = "FXRATE_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Disable the durable diagnostics log.
    #[arg(long, default_value_t = false)]
    pub no_log_file: bool,

    /// Request timeout budget in milliseconds.
    #[arg(long, env = "FXRATE_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// First date accepted by validation.
    #[arg(long, env = "FXRATE_WINDOW_START", default_value = "2025-01-01")]
    pub window_start: String,

    /// Last date accepted by validation.
    #[arg(long, env = "FXRATE_WINDOW_END", default_value = "2025-09-15")]
    pub window_end: String,

    /// Diagnostics filter, e.g. `info` or `fxrate_core=debug`.
    #[arg(long, env = "FXRATE_LOG", default_value = "info")]
    pub log_level: String,

    /// Output format for the summary of a successful run.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

impl Cli {
    pub fn log_file(&self) -> Option<PathBuf> {
        (!self.no_log_file).then(|| self.log_file.clone())
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary lines.
    Text,
    /// The persisted record as JSON.
    Json,
}
