//! Run options resolved from command line, environment and packaging.toml.
//!
//! The process environment is read once, into [`EnvOverrides`], and the
//! resolved [`BuildOptions`] are handed explicitly to the build.

use super::Args;
use crate::packager::{
    ModeSelection, PackagingFile, Platform, builder::mode_selector::resolve_selection,
};

/// Environment variables consulted by the build driver.
///
/// `PYTHON_BIN` is handled by clap together with `--python`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    /// Raw `ONEFILE` value
    pub onefile: Option<String>,
    /// `NONINTERACTIVE=1`: never pause, never ask
    pub noninteractive: bool,
}

impl EnvOverrides {
    /// Reads the overrides from the current process environment.
    pub fn from_process() -> Self {
        Self {
            onefile: std::env::var("ONEFILE").ok(),
            noninteractive: std::env::var("NONINTERACTIVE").is_ok_and(|v| v.trim() == "1"),
        }
    }
}

/// Options for one build run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Runtime binary; `None` means the platform default
    pub python: Option<String>,
    /// Mode, or a request to ask
    pub mode: ModeSelection,
    /// Never wait for Enter after a failure
    pub no_pause: bool,
    /// Build without console window
    pub windowed: bool,
}

impl BuildOptions {
    /// Resolves every option: command line, then environment, then
    /// packaging.toml, then built-in defaults.
    pub fn resolve(
        args: &Args,
        env: &EnvOverrides,
        file: &PackagingFile,
        platform: Platform,
    ) -> Self {
        let python = args
            .python
            .clone()
            .or_else(|| file.python.clone())
            .filter(|p| !p.trim().is_empty());

        let mode = resolve_selection(
            args.mode_flag(),
            env.onefile.as_deref(),
            file.onefile,
            platform,
            !env.noninteractive,
        );

        let no_pause = args.no_pause || env.noninteractive || file.no_pause.unwrap_or(false);

        Self {
            python,
            mode,
            no_pause,
            windowed: file.windowed.unwrap_or(true),
        }
    }
}
