//! Error types for summit.
//!
//! The calculator itself never fails: incomplete inputs are reported through
//! `RatioReport::valid`. Errors only come from the outer surfaces (config
//! files, writing output, command-line input) and carry a stable code:
//!
//! - E001-E009: I/O and filesystem errors
//! - E020-E029: Configuration errors
//! - E040-E049: CLI input errors
//! - E060-E069: Output rendering errors

use std::path::PathBuf;
use thiserror::Error;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// I/O error - file not found
    pub const IO_FILE_NOT_FOUND: ErrorCode = ErrorCode("E001");
    /// I/O error - generic
    pub const IO_GENERIC: ErrorCode = ErrorCode("E009");
    /// Config error - invalid value or syntax
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E020");
    /// Config error - file already exists
    pub const CONFIG_EXISTS: ErrorCode = ErrorCode("E023");
    /// CLI error - invalid argument
    pub const CLI_INVALID_ARG: ErrorCode = ErrorCode("E042");
    /// Output error - rendering failed
    pub const OUTPUT_RENDER: ErrorCode = ErrorCode("E060");

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum SummitError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration{}: {message}", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Configuration file already exists: {}. Use --force to overwrite.", .0.display())]
    ConfigExists(PathBuf),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to render output: {0}")]
    Output(String),
}

impl SummitError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                ErrorCode::IO_FILE_NOT_FOUND
            }
            Self::Io { .. } => ErrorCode::IO_GENERIC,
            Self::Config { .. } => ErrorCode::CONFIG_INVALID,
            Self::ConfigExists(_) => ErrorCode::CONFIG_EXISTS,
            Self::InvalidInput(_) => ErrorCode::CLI_INVALID_ARG,
            Self::Output(_) => ErrorCode::OUTPUT_RENDER,
        }
    }

    /// Whether the user can fix the problem by changing their input or files.
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, Self::Io { .. } | Self::Output(_))
    }
}

impl From<serde_json::Error> for SummitError {
    fn from(e: serde_json::Error) -> Self {
        Self::Output(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SummitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gets_not_found_code() {
        let err = SummitError::io(
            "/nope/.summit.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.code(), ErrorCode::IO_FILE_NOT_FOUND);
        assert!(!err.is_user_fixable());
        assert!(err.to_string().contains("/nope/.summit.toml"));
    }

    #[test]
    fn test_config_message_includes_path() {
        let err = SummitError::config("bad value", Some(PathBuf::from("a.toml")));
        assert_eq!(err.to_string(), "Invalid configuration in a.toml: bad value");
        assert_eq!(err.code().as_str(), "E020");

        let no_path = SummitError::config("bad value", None);
        assert_eq!(no_path.to_string(), "Invalid configuration: bad value");
    }

    #[test]
    fn test_input_errors_are_user_fixable() {
        let err = SummitError::InvalidInput("fraction must be a number".into());
        assert!(err.is_user_fixable());
        assert_eq!(err.code(), ErrorCode::CLI_INVALID_ARG);
    }
}
