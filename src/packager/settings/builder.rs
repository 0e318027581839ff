//! Builder for constructing BuildSettings.

use super::{BuildSettings, ModeSelection, Platform};
use crate::packager::project::{BUILD_DIR, ENTRY_SCRIPT, PRODUCT_NAME, ProjectLayout};
use std::path::{Path, PathBuf};

/// Builder for constructing [`BuildSettings`].
///
/// Only the project root is required; everything else falls back to the
/// fixed layout of the LEA-LOGINEO-Tool repository.
#[derive(Default)]
pub struct SettingsBuilder {
    project_root: Option<PathBuf>,
    entry_script: Option<PathBuf>,
    requirements: Option<PathBuf>,
    config_xml: Option<PathBuf>,
    windowed: Option<bool>,
    mode: ModeSelection,
    runtime: Option<String>,
    platform: Option<Platform>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Takes root, entry script and companion files from a discovered layout.
    pub fn project(mut self, layout: &ProjectLayout) -> Self {
        self.project_root = Some(layout.root().to_path_buf());
        self.entry_script = Some(layout.entry_script().to_path_buf());
        self.requirements = layout.requirements().map(Path::to_path_buf);
        self.config_xml = layout.config_xml().map(Path::to_path_buf);
        self
    }

    /// Sets the project root directly.
    ///
    /// # Required
    ///
    /// Either this or [`SettingsBuilder::project`] is required for building.
    pub fn project_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the dependency manifest.
    pub fn requirements<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.requirements = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enables or disables windowed mode.
    ///
    /// Default: `true` (the tool is a GUI application)
    pub fn windowed(mut self, windowed: bool) -> Self {
        self.windowed = Some(windowed);
        self
    }

    /// Sets the mode selection.
    ///
    /// Default: one-file
    pub fn mode(mut self, mode: ModeSelection) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the runtime binary name or path.
    ///
    /// Default: the platform's standard interpreter name
    pub fn runtime<S: Into<String>>(mut self, runtime: S) -> Self {
        self.runtime = Some(runtime.into());
        self
    }

    /// Sets the platform.
    ///
    /// Default: host platform
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if no project root was given.
    pub fn build(self) -> crate::packager::Result<BuildSettings> {
        use crate::packager::error::Context;

        let project_root = self.project_root.context("project_root is required")?;
        let platform = self.platform.unwrap_or_else(Platform::host);
        let entry_script = self
            .entry_script
            .unwrap_or_else(|| project_root.join(ENTRY_SCRIPT));
        let runtime = self
            .runtime
            .unwrap_or_else(|| platform.default_runtime().to_string());
        // spec files and intermediate objects share one directory
        let build_dir = project_root.join(BUILD_DIR);

        Ok(BuildSettings::new(
            PRODUCT_NAME.to_string(),
            project_root,
            entry_script,
            build_dir.clone(),
            build_dir,
            self.requirements,
            self.config_xml,
            self.windowed.unwrap_or(true),
            self.mode,
            runtime,
            platform,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packager::{ModeSource, PackageMode};

    #[test]
    fn defaults_follow_project_layout() {
        let settings = SettingsBuilder::new()
            .project_root("/work/lea tool")
            .platform(Platform::MacOs)
            .build()
            .unwrap();

        assert_eq!(settings.product_name(), "LEA-LOGINEO-Tool");
        assert_eq!(settings.dist_dir(), Path::new("/work/lea tool"));
        assert_eq!(settings.work_dir(), Path::new("/work/lea tool/build"));
        assert_eq!(settings.spec_dir(), Path::new("/work/lea tool/build"));
        assert_eq!(
            settings.entry_script(),
            Path::new("/work/lea tool/LEA-LOGINEO-Tool.py")
        );
        assert_eq!(settings.runtime(), "python3");
        assert!(settings.windowed());
        assert_eq!(
            settings.mode(),
            ModeSelection::Explicit(PackageMode::OneFile, ModeSource::Default)
        );
    }

    #[test]
    fn windows_defaults_to_python() {
        let settings = SettingsBuilder::new()
            .project_root("C:/src/tool")
            .platform(Platform::Windows)
            .build()
            .unwrap();
        assert_eq!(settings.runtime(), "python");
    }

    #[test]
    fn missing_root_is_an_error() {
        assert!(SettingsBuilder::new().build().is_err());
    }
}
