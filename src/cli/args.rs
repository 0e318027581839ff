//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with proper
//! validation and error handling.

use crate::packager::PackageMode;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Build driver for the LEA-LOGINEO-Tool standalone executable
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "lea-logineo-build",
    version,
    about = "Build the LEA-LOGINEO-Tool standalone executable with PyInstaller",
    long_about = "Freezes LEA-LOGINEO-Tool.py into a standalone executable (Windows, Linux) or
application bundle (macOS) placed directly in the project root.

Steps: locate Python, install pip/PyInstaller and requirements.txt, choose
one-file or one-directory mode, run PyInstaller.

Mode resolution: --onefile/--onedir, then ONEFILE, then packaging.toml, then
(on Windows) an interactive question, then one-file.

Usage:
  lea-logineo-build                      # from the project or its scripts directory
  lea-logineo-build --onedir --no-pause
  ONEFILE=0 PYTHON_BIN=python3.12 lea-logineo-build

Exit code 0 = artifact guaranteed to exist in the project root."
)]
pub struct Args {
    /// Build a single self-contained executable
    #[arg(long, conflicts_with = "onedir")]
    pub onefile: bool,

    /// Build a directory with the executable and its support files
    #[arg(long)]
    pub onedir: bool,

    /// Do not wait for Enter after a failure
    #[arg(long)]
    pub no_pause: bool,

    /// Python interpreter name or path
    #[arg(long, value_name = "BIN", env = "PYTHON_BIN")]
    pub python: Option<String>,

    /// Project root (default: nearest directory containing LEA-LOGINEO-Tool.py)
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Turn on verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parse command line arguments without exiting on errors
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if let Some(python) = &self.python {
            if python.trim().is_empty() {
                return Err("Python interpreter cannot be empty".to_string());
            }
        }

        Ok(())
    }

    /// Mode requested on the command line, if any.
    pub fn mode_flag(&self) -> Option<PackageMode> {
        if self.onefile {
            Some(PackageMode::OneFile)
        } else if self.onedir {
            Some(PackageMode::OneDir)
        } else {
            None
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose > 0);

        Self { output }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print warning message
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }
}
