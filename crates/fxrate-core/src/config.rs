//! Client configuration shared by every stage of a run.

use std::path::PathBuf;

use crate::{ConfigError, DateWindow};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_API_KEY: &str = "EXAMPLE_API_KEY";
pub const DEFAULT_OUTPUT_DIR: &str = "data";
pub const DEFAULT_LOG_FILE: &str = "error.log";
pub const DEFAULT_TIMEOUT_MS: u64 = 3_000;

/// Everything a run needs besides the three request arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Passed through verbatim as the `key` form field; never logged.
    pub api_key: String,
    pub output_dir: PathBuf,
    /// Durable diagnostics destination; `None` keeps diagnostics console-only.
    pub log_file: Option<PathBuf>,
    pub timeout_ms: u64,
    pub window: DateWindow,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            api_key: String::from(DEFAULT_API_KEY),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            window: DateWindow::default(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        self.log_file = log_file;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_window(mut self, window: DateWindow) -> Self {
        self.window = window;
        self
    }

    /// Reject values that would make every run fail in a confusing way.
    ///
    /// The window is already ordered by [`DateWindow::new`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_deployment() {
        let config = ClientConfig::default();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.output_dir, PathBuf::from("data"));
        assert_eq!(config.log_file, Some(PathBuf::from("error.log")));
        assert_eq!(config.window.to_string(), "2025-01-01..=2025-09-15");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_base_url_and_zero_timeout() {
        let err = ClientConfig::default()
            .with_base_url("  ")
            .validate()
            .expect_err("must fail");
        assert_eq!(err, ConfigError::EmptyBaseUrl);

        let err = ClientConfig::default()
            .with_timeout_ms(0)
            .validate()
            .expect_err("must fail");
        assert_eq!(err, ConfigError::ZeroTimeout);
    }
}
