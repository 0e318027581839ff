//! Build driver for the LEA-LOGINEO-Tool standalone executable
//!
//! This library packages the Python application `LEA-LOGINEO-Tool` with
//! PyInstaller and provides:
//! - Project root and companion file discovery
//! - Runtime resolution and packaging dependency installation
//! - One-file / one-directory mode selection (flags, environment, prompt)
//! - Deterministic PyInstaller argument construction and invocation
//! - Artifact verification and reporting
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod packager;

// Re-export commonly used types
pub use error::{BuildError, CliError, Result};
