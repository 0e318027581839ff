//! Project root detection and companion file discovery.
//!
//! The LEA-LOGINEO-Tool repository keeps its entry point, dependency
//! manifest and runtime configuration at fixed locations in the project
//! root. The build scripts live one level below, so a build started from
//! the scripts directory resolves to its parent.

pub mod config_xml;

use crate::packager::error::{Error, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Name of the produced executable / bundle.
pub const PRODUCT_NAME: &str = "LEA-LOGINEO-Tool";

/// Python entry point, relative to the project root.
pub const ENTRY_SCRIPT: &str = "LEA-LOGINEO-Tool.py";

/// Dependency manifest, relative to the project root.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Runtime settings read by the packaged tool from its own directory.
pub const CONFIG_XML: &str = "config.xml";

/// Optional packager defaults.
pub const PACKAGING_FILE: &str = "packaging.toml";

/// PyInstaller work and spec directory, relative to the project root.
pub const BUILD_DIR: &str = "build";

/// Files of a LEA-LOGINEO-Tool checkout, resolved to absolute paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    entry_script: PathBuf,
    requirements: Option<PathBuf>,
    config_xml: Option<PathBuf>,
    packaging_file: Option<PathBuf>,
}

impl ProjectLayout {
    /// Uses `root` as the project root.
    ///
    /// # Errors
    ///
    /// [`Error::EntryScriptMissing`] if `root` has no entry script.
    pub fn discover(root: &Path) -> Result<Self> {
        let root = absolute(root)?;
        let entry_script = root.join(ENTRY_SCRIPT);
        if !entry_script.is_file() {
            return Err(Error::EntryScriptMissing(entry_script));
        }

        let existing = |name: &str| {
            let path = root.join(name);
            path.is_file().then_some(path)
        };

        let layout = Self {
            requirements: existing(REQUIREMENTS_FILE),
            config_xml: existing(CONFIG_XML),
            packaging_file: existing(PACKAGING_FILE),
            entry_script,
            root,
        };
        log::debug!("Project layout: {:?}", layout);
        Ok(layout)
    }

    /// Searches `start` and its ancestors for the entry script.
    ///
    /// # Errors
    ///
    /// [`Error::ProjectRootNotFound`] if no directory on the way up has one.
    pub fn detect(start: &Path) -> Result<Self> {
        let start = absolute(start)?;
        let root = start
            .ancestors()
            .find(|dir| dir.join(ENTRY_SCRIPT).is_file())
            .ok_or_else(|| Error::ProjectRootNotFound {
                start: start.clone(),
                entry: ENTRY_SCRIPT.to_string(),
            })?;

        if root != start {
            log::info!("Using project root {}", root.display());
        }
        Self::discover(root)
    }

    /// Returns the project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the entry script.
    pub fn entry_script(&self) -> &Path {
        &self.entry_script
    }

    /// Returns the dependency manifest if present.
    pub fn requirements(&self) -> Option<&Path> {
        self.requirements.as_deref()
    }

    /// Returns `config.xml` if present.
    pub fn config_xml(&self) -> Option<&Path> {
        self.config_xml.as_deref()
    }

    /// Returns `packaging.toml` if present.
    pub fn packaging_file(&self) -> Option<&Path> {
        self.packaging_file.as_deref()
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(path.absolutize()?.into_owned())
}
