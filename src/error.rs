//! Error types for build driver operations.
//!
//! This module defines the top-level error type with actionable error messages
//! and recovery suggestions for the operator.

use thiserror::Error;

/// Result type alias for build driver operations
pub type Result<T> = std::result::Result<T, BuildError>;

/// Main error type for all build driver operations
#[derive(Error, Debug)]
pub enum BuildError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Packaging pipeline errors
    #[error("{0}")]
    Packager(#[from] crate::packager::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl BuildError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::packager::Error as P;

        match self {
            Self::Cli(_) => vec!["Run with --help to see the accepted options".to_string()],
            Self::Packager(P::RuntimeNotFound { .. }) => vec![
                "Install Python 3 and make sure it is on PATH".to_string(),
                "Or point --python / PYTHON_BIN at the interpreter".to_string(),
            ],
            Self::Packager(P::DependencyInstall { .. }) => vec![
                "Check the network connection and proxy settings".to_string(),
                "Check write permissions for the Python environment (or use a virtualenv)"
                    .to_string(),
            ],
            Self::Packager(P::PackagerFailed { .. }) => vec![
                "Read the PyInstaller output above for the failing module".to_string(),
                "Delete the build directory in the project root and retry".to_string(),
            ],
            Self::Packager(P::ProjectRootNotFound { .. } | P::EntryScriptMissing(_)) => vec![
                "Run the build from the project directory or its scripts directory".to_string(),
                "Or pass --project-root <dir>".to_string(),
            ],
            Self::Packager(P::PackagingFile { .. }) => {
                vec!["Fix or remove packaging.toml in the project root".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
