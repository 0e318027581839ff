//! Host platform detection.

use std::fmt;

/// Platform the build runs on.
///
/// PyInstaller cannot cross-compile, so the host platform is also the
/// platform of the produced artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Windows: `.exe` artifacts, interactive mode prompt, pause on failure.
    Windows,
    /// macOS: `.app` bundles for windowed builds.
    MacOs,
    /// Linux and other Unix hosts: plain ELF executables.
    Linux,
}

impl Platform {
    /// Returns the platform this binary was compiled for.
    pub fn host() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Linux
        }
    }

    /// Interpreter name used when none is configured.
    pub fn default_runtime(self) -> &'static str {
        match self {
            Self::Windows => "python",
            Self::MacOs | Self::Linux => "python3",
        }
    }

    /// Whether the mode is asked interactively when nothing else decides it.
    pub fn prompts_for_mode(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Whether the console is held open after a failure.
    ///
    /// A double-clicked build on Windows would otherwise close its window
    /// before the error can be read.
    pub fn pauses_on_failure(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// File extension of frozen executables.
    pub fn executable_extension(self) -> Option<&'static str> {
        match self {
            Self::Windows => Some("exe"),
            Self::MacOs | Self::Linux => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
        })
    }
}
