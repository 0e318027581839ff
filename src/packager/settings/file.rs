//! Optional per-project defaults from `packaging.toml`.
//!
//! ```toml
//! python = "python3.12"
//! onefile = false
//! no_pause = true
//! windowed = true
//! ```
//!
//! Every key is optional. Command line flags and environment variables
//! take precedence over values read here.

use crate::packager::error::{Error, ErrorExt, Result};
use serde::Deserialize;
use std::path::Path;

/// Contents of `packaging.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackagingFile {
    /// Runtime binary name or path.
    pub python: Option<String>,
    /// `true` for one-file, `false` for one-directory.
    pub onefile: Option<bool>,
    /// Never wait for the operator.
    pub no_pause: Option<bool>,
    /// Build without a console window.
    pub windowed: Option<bool>,
}

impl PackagingFile {
    /// Parses `packaging.toml` contents.
    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|error| Error::PackagingFile {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Loads the file, or returns defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.is_file() {
            log::debug!("No {} - using built-in defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).fs_context("reading", path)?;
        let file = Self::parse(&contents, path)?;
        log::debug!("Loaded {}: {:?}", path.display(), file);
        Ok(file)
    }
}
