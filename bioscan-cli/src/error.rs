//! CLI-specific error types and exit code mapping

use bioscan_core::error::BioscanError;
use bioscan_core::types::RiskTier;

/// CLI-specific error type.
///
/// The `exit_code()` method maps errors to process exit codes.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// A subcommand-specific operation failed.
    #[error("{0}")]
    Command(String),

    /// `--fail-on` threshold reached.
    #[error("{count} risk(s) at or above {tier} detected")]
    RiskThreshold { count: usize, tier: RiskTier },

    /// The product database has no record for the request.
    #[error("product not found: {0}")]
    NotFound(String),

    /// JSON serialisation failed during output rendering.
    #[error("json output error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// IO error (file read, stdout write, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped domain error.
    #[error("{0}")]
    Core(#[from] BioscanError),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                         |
    /// |------|---------------------------------|
    /// | 0    | Success                         |
    /// | 1    | General / command error         |
    /// | 2    | Configuration error             |
    /// | 4    | Risk threshold reached          |
    /// | 5    | Product not found               |
    /// | 10   | IO error                        |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Core(BioscanError::Config(_)) => 2,
            Self::RiskThreshold { .. } => 4,
            Self::NotFound(_) => 5,
            Self::Io(_) | Self::Core(BioscanError::Io(_)) => 10,
            Self::JsonSerialize(_) | Self::Command(_) | Self::Core(_) => 1,
        }
    }
}

impl From<bioscan_report::ReportEngineError> for CliError {
    fn from(e: bioscan_report::ReportEngineError) -> Self {
        Self::Core(e.into())
    }
}

impl From<bioscan_lookup::ProductLookupError> for CliError {
    fn from(e: bioscan_lookup::ProductLookupError) -> Self {
        Self::Core(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bioscan_core::error::{ConfigError, LookupError};

    #[test]
    fn test_exit_code_config_error() {
        assert_eq!(CliError::Config("bad".to_owned()).exit_code(), 2);
        let core = CliError::Core(BioscanError::Config(ConfigError::ParseFailed {
            reason: "x".to_owned(),
        }));
        assert_eq!(core.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_risk_threshold() {
        let err = CliError::RiskThreshold {
            count: 2,
            tier: RiskTier::High,
        };
        assert_eq!(err.exit_code(), 4);
        assert_eq!(err.to_string(), "2 risk(s) at or above High detected");
    }

    #[test]
    fn test_exit_code_not_found() {
        let err = CliError::NotFound("barcode 123".to_owned());
        assert_eq!(err.exit_code(), 5);
        assert!(err.to_string().contains("barcode 123"));
    }

    #[test]
    fn test_exit_code_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        assert_eq!(CliError::Io(io_err).exit_code(), 10);
    }

    #[test]
    fn test_exit_code_command_and_domain_errors() {
        assert_eq!(CliError::Command("x".to_owned()).exit_code(), 1);
        let lookup = CliError::Core(BioscanError::Lookup(LookupError::MalformedResponse(
            "x".to_owned(),
        )));
        assert_eq!(lookup.exit_code(), 1);
    }

    #[test]
    fn test_from_report_engine_error() {
        let err: CliError = bioscan_report::ReportEngineError::Decode("not an object".to_owned()).into();
        assert!(matches!(err, CliError::Core(BioscanError::Report(_))));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_from_lookup_config_error_maps_to_config_exit() {
        let err: CliError = bioscan_lookup::ProductLookupError::Config {
            field: "max_record_bytes".to_owned(),
            reason: "must be 1-16777216".to_owned(),
        }
        .into();
        assert_eq!(err.exit_code(), 2);
    }
}
