//! Packaging pipeline error type and context helpers.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
    process::ExitStatus,
};
use thiserror::Error;

/// Result type alias for packaging operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the packaging pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The runtime binary could not be located.
    #[error("`{name}` not found ({reason}). Python is required to build LEA-LOGINEO-Tool")]
    RuntimeNotFound {
        /// Binary name or path that was looked up
        name: String,
        /// Lookup failure
        reason: String,
    },

    /// A pip invocation exited unsuccessfully.
    #[error("dependency installation failed: `{command}` exited with {status}")]
    DependencyInstall {
        /// Rendered command line
        command: String,
        /// Exit status of pip
        status: ExitStatus,
    },

    /// PyInstaller exited unsuccessfully.
    #[error("PyInstaller failed: `{command}` exited with {status}")]
    PackagerFailed {
        /// Rendered command line
        command: String,
        /// Exit status of PyInstaller
        status: ExitStatus,
    },

    /// A subprocess could not be spawned at all.
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Program that failed to start
        command: String,
        /// Underlying spawn error
        #[source]
        error: io::Error,
    },

    /// No project root found from the starting directory.
    #[error("no {entry} found in {} or any parent directory", .start.display())]
    ProjectRootNotFound {
        /// Directory the search started from
        start: PathBuf,
        /// Entry script file name searched for
        entry: String,
    },

    /// The explicit project root lacks the entry script.
    #[error("entry script not found: {}", .0.display())]
    EntryScriptMissing(PathBuf),

    /// PyInstaller succeeded but the artifact is not where it must be.
    #[error("PyInstaller reported success but {} does not exist", .0.display())]
    ArtifactMissing(PathBuf),

    /// packaging.toml could not be parsed.
    #[error("invalid {}: {error}", .path.display())]
    PackagingFile {
        /// Path of the file
        path: PathBuf,
        /// Parse error
        #[source]
        error: toml::de::Error,
    },

    /// Filesystem operation failed on a known path.
    #[error("{context} {}: {error}", .path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        error: io::Error,
    },

    /// Plain IO error.
    #[error(transparent)]
    IoError(#[from] io::Error),

    /// Directory traversal error.
    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),

    /// Message with an underlying cause.
    #[error("{message}: {source}")]
    Context {
        /// Added context
        message: String,
        /// Wrapped error
        #[source]
        source: Box<Error>,
    },

    /// Free-form error.
    #[error("{0}")]
    GenericError(String),
}

/// Adds a human readable context message to errors and missing values.
pub trait Context<T> {
    /// Wraps the error (or `None`) with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;
}

impl<T, E: Into<Error>> Context<T> for std::result::Result<T, E> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Context {
            message: context.to_string(),
            source: Box::new(e.into()),
        })
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

/// Attaches the failing path to IO errors.
pub trait ErrorExt<T> {
    /// Converts an IO error into [`Error::Fs`] naming `path`.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Returns early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::packager::Error::GenericError(format!($($arg)*)))
    };
}
