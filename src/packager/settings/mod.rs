//! Configuration structures for packaging runs.
//!
//! This module provides the build configuration consumed by the packager,
//! the packaging mode types, host platform detection and the optional
//! `packaging.toml` defaults file.

mod builder;
mod core;
mod file;
mod mode;
mod platform;

// Re-export all public types
pub use builder::SettingsBuilder;
pub use self::core::BuildSettings;
pub use file::PackagingFile;
pub use mode::{ModeSelection, ModeSource, PackageMode, parse_toggle};
pub use platform::Platform;
