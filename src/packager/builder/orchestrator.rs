//! Main packaging orchestration.
//!
//! This module provides the [`Packager`] that runs the build steps in order:
//! runtime resolution, dependency installation, mode selection, argument
//! construction, PyInstaller invocation and artifact finalization.

use super::{
    arguments::build_arguments,
    artifact::{self, BuiltArtifact},
    dependencies, invoke,
    mode_selector::{self, ModePrompt},
    runtime,
};
use crate::packager::{Result, settings::BuildSettings};

/// Main packaging orchestrator.
///
/// Each step runs only after the previous one succeeded; the first error
/// aborts the run and is returned unchanged.
///
/// # Examples
///
/// ```no_run
/// use lea_logineo_packager::packager::{NoPrompt, Packager, ProjectLayout, SettingsBuilder};
///
/// # async fn example() -> lea_logineo_packager::packager::Result<()> {
/// let layout = ProjectLayout::detect(&std::env::current_dir()?)?;
/// let settings = SettingsBuilder::new().project(&layout).build()?;
///
/// let artifact = Packager::new(settings).package(&mut NoPrompt).await?;
/// println!("Created: {} ({} bytes)", artifact.path.display(), artifact.size);
/// println!("SHA256: {}", artifact.checksum);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Packager {
    settings: BuildSettings,
}

impl Packager {
    /// Creates a new packager with the given settings.
    pub fn new(settings: BuildSettings) -> Self {
        Self { settings }
    }

    /// Runs the full build.
    ///
    /// `prompt` is consulted only if the settings ask for the mode
    /// interactively, after dependencies are installed.
    pub async fn package(&self, prompt: &mut dyn ModePrompt) -> Result<BuiltArtifact> {
        let settings = &self.settings;
        log::info!(
            "Building {} on {} from {}",
            settings.product_name(),
            settings.platform(),
            settings.project_root().display()
        );

        let runtime = runtime::resolve(settings.runtime()).await?;

        dependencies::install(&runtime, settings).await?;

        let mode = mode_selector::select(settings.mode(), prompt);

        let args = build_arguments(settings, mode);
        invoke::run_pyinstaller(&runtime, &args, settings.project_root()).await?;

        let artifact = artifact::finalize(settings, mode).await?;
        log::info!("✓ Created {} build: {}", mode, artifact.path.display());

        Ok(artifact)
    }

    /// Returns a reference to the build settings.
    pub fn settings(&self) -> &BuildSettings {
        &self.settings
    }
}
