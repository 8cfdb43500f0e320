use fxrate_core::{exit_code, ConfigError, DiagnosticsError, RunError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Diagnostics(#[from] DiagnosticsError),

    #[error(transparent)]
    Run(#[from] RunError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Diagnostics(_) | Self::Serialization(_) => exit_code::CONFIG,
            Self::Run(error) => error.exit_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use fxrate_core::{FetchError, ValidationError};

    use super::*;

    #[test]
    fn run_errors_keep_their_stage_exit_code() {
        let validation = CliError::from(RunError::from(ValidationError::UnsupportedCurrency {
            code: String::from("XXX"),
        }));
        let fetch = CliError::from(RunError::from(FetchError::Network {
            message: String::from("refused"),
        }));

        assert_eq!(validation.exit_code(), exit_code::VALIDATION);
        assert_eq!(fetch.exit_code(), exit_code::FETCH);
    }

    #[test]
    fn configuration_errors_exit_with_config_status() {
        assert_eq!(
            CliError::from(ConfigError::ZeroTimeout).exit_code(),
            exit_code::CONFIG
        );
    }
}
