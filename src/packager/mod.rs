//! PyInstaller packaging of LEA-LOGINEO-Tool.
//!
//! # Overview
//!
//! The packager:
//! 1. Locates the project root and its companion files ([`ProjectLayout`])
//! 2. Resolves the Python runtime
//! 3. Installs pip, PyInstaller and the application's requirements
//! 4. Selects one-file or one-directory mode
//! 5. Runs PyInstaller with a fixed argument list
//! 6. Verifies the artifact in the project root ([`BuiltArtifact`])

pub mod builder;
pub mod error;
pub mod project;
pub mod settings;
pub mod utils;

pub use builder::{
    Packager,
    artifact::BuiltArtifact,
    mode_selector::{LinePrompt, ModePrompt, NoPrompt},
};
pub use error::{Error, Result};
pub use project::ProjectLayout;
pub use settings::{
    BuildSettings, ModeSelection, ModeSource, PackageMode, PackagingFile, Platform,
    SettingsBuilder,
};
