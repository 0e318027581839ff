//! Core BuildSettings struct and implementations.

use super::{ModeSelection, Platform};
use std::path::{Path, PathBuf};

/// Build configuration for one packaging run.
///
/// Created once from fixed paths relative to the detected project root,
/// consumed by the [`Packager`](crate::packager::Packager) and discarded
/// at process exit. Construct it with [`SettingsBuilder`](super::SettingsBuilder).
///
/// # Examples
///
/// ```no_run
/// use lea_logineo_packager::packager::{ProjectLayout, SettingsBuilder};
///
/// # fn example() -> lea_logineo_packager::packager::Result<()> {
/// let layout = ProjectLayout::discover("/path/to/LEA-LOGINEO-Tool".as_ref())?;
/// let settings = SettingsBuilder::new()
///     .project(&layout)
///     .runtime("python3")
///     .build()?;
/// assert!(settings.windowed());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct BuildSettings {
    /// Name of the produced executable / bundle.
    product_name: String,

    /// Detected project root.
    project_root: PathBuf,

    /// Python entry point handed to PyInstaller.
    entry_script: PathBuf,

    /// `--distpath`: the project root, so artifacts land beside the sources.
    dist_dir: PathBuf,

    /// `--workpath`
    work_dir: PathBuf,

    /// `--specpath`
    spec_dir: PathBuf,

    /// Dependency manifest, if present.
    requirements: Option<PathBuf>,

    /// Runtime settings file of the packaged tool, if present.
    config_xml: Option<PathBuf>,

    /// Build without a console window.
    windowed: bool,

    /// One-file / one-directory choice.
    mode: ModeSelection,

    /// Runtime binary name or path.
    runtime: String,

    /// Host platform.
    platform: Platform,
}

impl BuildSettings {
    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Returns the project root.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Returns the entry script path.
    pub fn entry_script(&self) -> &Path {
        &self.entry_script
    }

    /// Returns the distribution directory.
    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    /// Returns the PyInstaller work directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Returns the directory the generated `.spec` file is written to.
    pub fn spec_dir(&self) -> &Path {
        &self.spec_dir
    }

    /// Returns the dependency manifest if the project has one.
    pub fn requirements(&self) -> Option<&Path> {
        self.requirements.as_deref()
    }

    /// Returns `config.xml` if the project has one.
    pub fn config_xml(&self) -> Option<&Path> {
        self.config_xml.as_deref()
    }

    /// Whether the executable is built without a console window.
    pub fn windowed(&self) -> bool {
        self.windowed
    }

    /// Returns the mode selection.
    pub fn mode(&self) -> ModeSelection {
        self.mode
    }

    /// Returns the runtime binary name or path.
    pub fn runtime(&self) -> &str {
        &self.runtime
    }

    /// Returns the platform being built on.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Creates a new BuildSettings instance (used by SettingsBuilder).
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        product_name: String,
        project_root: PathBuf,
        entry_script: PathBuf,
        work_dir: PathBuf,
        spec_dir: PathBuf,
        requirements: Option<PathBuf>,
        config_xml: Option<PathBuf>,
        windowed: bool,
        mode: ModeSelection,
        runtime: String,
        platform: Platform,
    ) -> Self {
        Self {
            product_name,
            dist_dir: project_root.clone(),
            project_root,
            entry_script,
            work_dir,
            spec_dir,
            requirements,
            config_xml,
            windowed,
            mode,
            runtime,
            platform,
        }
    }
}
