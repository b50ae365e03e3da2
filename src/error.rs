//! Error types for denops-test.
//!
//! Uses thiserror for derive macros. Messages are single-line and name the
//! thing the user has to fix.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for denops-test operations.
#[derive(Error, Debug)]
pub enum DenopsTestError {
    /// A mandatory environment variable is unset or empty.
    #[error("Environment variable '{var}' is required")]
    MissingRequiredConfig { var: &'static str },

    /// The configured plugin-host path could not be made absolute.
    #[error("failed to resolve path '{}': {source}", .path.display())]
    ResolvePath {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A run mode string that is neither `vim` nor `nvim`.
    #[error("unreachable run mode '{0}' (expected 'vim' or 'nvim')")]
    InvalidRunMode(String),

    /// The editor process could not be created. Displays the OS error as-is.
    #[error(transparent)]
    Spawn(#[from] std::io::Error),

    /// Waiting on a spawned editor failed.
    #[error("failed to wait for {mode}: {source}")]
    Wait {
        mode: String,
        #[source]
        source: std::io::Error,
    },

    /// The editor did not exit in time and was killed.
    #[error("{mode} did not exit within {timeout_seconds} seconds")]
    EditorTimedOut { mode: String, timeout_seconds: u64 },

    /// The editor exited unsuccessfully.
    #[error("{mode} exited unsuccessfully ({})", describe_exit(.code))]
    EditorFailed { mode: String, code: Option<i32> },

    /// Configuration could not be rendered as JSON.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl DenopsTestError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DenopsTestError::MissingRequiredConfig { .. } => exit_codes::USER_ERROR,
            DenopsTestError::ResolvePath { .. } => exit_codes::USER_ERROR,
            DenopsTestError::InvalidRunMode(_) => exit_codes::USER_ERROR,
            DenopsTestError::Spawn(_) => exit_codes::SPAWN_FAILURE,
            DenopsTestError::Wait { .. } => exit_codes::EDITOR_FAILURE,
            DenopsTestError::EditorTimedOut { .. } => exit_codes::EDITOR_FAILURE,
            DenopsTestError::EditorFailed { .. } => exit_codes::EDITOR_FAILURE,
            DenopsTestError::Serialize(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for denops-test operations.
pub type Result<T> = std::result::Result<T, DenopsTestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn missing_config_names_the_variable() {
        let err = DenopsTestError::MissingRequiredConfig {
            var: "DENOPS_TEST_DENOPS_PATH",
        };
        assert_eq!(
            err.to_string(),
            "Environment variable 'DENOPS_TEST_DENOPS_PATH' is required"
        );
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn invalid_run_mode_has_user_exit_code() {
        let err = DenopsTestError::InvalidRunMode("bogus".to_string());
        assert!(err.to_string().contains("'bogus'"));
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn spawn_error_keeps_os_message() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "No such file or directory");
        let expected = io_err.to_string();
        let err = DenopsTestError::from(io_err);
        assert_eq!(err.to_string(), expected);
        assert_eq!(err.exit_code(), exit_codes::SPAWN_FAILURE);
    }

    #[test]
    fn editor_failures_describe_the_exit() {
        let err = DenopsTestError::EditorFailed {
            mode: "nvim".to_string(),
            code: Some(1),
        };
        assert_eq!(err.to_string(), "nvim exited unsuccessfully (exit code 1)");
        assert_eq!(err.exit_code(), exit_codes::EDITOR_FAILURE);

        let err = DenopsTestError::EditorFailed {
            mode: "vim".to_string(),
            code: None,
        };
        assert_eq!(err.to_string(), "vim exited unsuccessfully (terminated by signal)");

        let err = DenopsTestError::EditorTimedOut {
            mode: "vim".to_string(),
            timeout_seconds: 5,
        };
        assert_eq!(err.to_string(), "vim did not exit within 5 seconds");
    }
}
