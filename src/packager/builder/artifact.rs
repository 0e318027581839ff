//! Artifact location, verification and finalization.
//!
//! PyInstaller writes the artifact into the project root (`--distpath`).
//! Where exactly depends on platform, mode and windowed flag:
//!
//! | platform | one-file                  | one-directory                 |
//! |----------|---------------------------|-------------------------------|
//! | Windows  | `<name>.exe`              | `<name>/` (`<name>/<name>.exe`) |
//! | macOS    | `<name>.app` when windowed, `<name>` otherwise | `<name>.app` when windowed, `<name>/` otherwise |
//! | Linux    | `<name>`                  | `<name>/` (`<name>/<name>`)   |
//!
//! The frozen tool reads `config.xml` from its executable's directory, so a
//! copy is placed there whenever that is not the project root.

use super::checksum::{artifact_size, calculate_sha256};
use crate::packager::{
    error::{Context, Error, Result},
    project::CONFIG_XML,
    settings::{BuildSettings, PackageMode, Platform},
    utils::fs,
};
use std::path::{Path, PathBuf};

/// Result of a successful packaging run.
#[derive(Debug, Clone)]
pub struct BuiltArtifact {
    /// Mode the artifact was built in
    pub mode: PackageMode,
    /// Executable, directory or bundle in the project root
    pub path: PathBuf,
    /// The frozen executable itself
    pub executable: PathBuf,
    /// Directory the artifact was written to
    pub directory: PathBuf,
    /// `config.xml` copy placed next to the executable, if any
    pub config_companion: Option<PathBuf>,
    /// Total size in bytes
    pub size: u64,
    /// Hex-encoded SHA-256
    pub checksum: String,
}

fn executable_name(settings: &BuildSettings) -> String {
    match settings.platform().executable_extension() {
        Some(ext) => format!("{}.{}", settings.product_name(), ext),
        None => settings.product_name().to_string(),
    }
}

fn app_bundle(settings: &BuildSettings) -> Option<PathBuf> {
    (settings.platform() == Platform::MacOs && settings.windowed())
        .then(|| settings.dist_dir().join(format!("{}.app", settings.product_name())))
}

/// Path of the artifact PyInstaller is expected to produce.
pub fn expected_artifact(settings: &BuildSettings, mode: PackageMode) -> PathBuf {
    if let Some(bundle) = app_bundle(settings) {
        return bundle;
    }

    match mode {
        PackageMode::OneFile => settings.dist_dir().join(executable_name(settings)),
        PackageMode::OneDir => settings.dist_dir().join(settings.product_name()),
    }
}

/// Path of the frozen executable inside the artifact.
pub fn executable_path(settings: &BuildSettings, mode: PackageMode) -> PathBuf {
    if let Some(bundle) = app_bundle(settings) {
        return bundle
            .join("Contents")
            .join("MacOS")
            .join(settings.product_name());
    }

    match mode {
        PackageMode::OneFile => settings.dist_dir().join(executable_name(settings)),
        PackageMode::OneDir => settings
            .dist_dir()
            .join(settings.product_name())
            .join(executable_name(settings)),
    }
}

/// Copies `config.xml` next to the executable when it does not live in the
/// project root already.
///
/// Returns the path of the copy, or `None` if nothing was copied.
pub async fn place_config_companion(
    settings: &BuildSettings,
    executable: &Path,
) -> Result<Option<PathBuf>> {
    let Some(config_xml) = settings.config_xml() else {
        return Ok(None);
    };
    let Some(exe_dir) = executable.parent() else {
        return Ok(None);
    };
    if exe_dir == settings.project_root() {
        return Ok(None);
    }

    let target = exe_dir.join(CONFIG_XML);
    fs::copy_file(config_xml, &target).await?;
    log::info!("Placed {} next to the executable", target.display());
    Ok(Some(target))
}

/// Verifies the artifact exists and collects its metadata.
///
/// # Errors
///
/// [`Error::ArtifactMissing`] if PyInstaller exited successfully without
/// producing the expected artifact.
pub async fn finalize(settings: &BuildSettings, mode: PackageMode) -> Result<BuiltArtifact> {
    let path = expected_artifact(settings, mode);
    if !path.exists() {
        return Err(Error::ArtifactMissing(path));
    }

    let executable = executable_path(settings, mode);
    if !executable.is_file() {
        log::warn!("Executable not found at {}", executable.display());
    }

    let config_companion = place_config_companion(settings, &executable).await?;
    let size = artifact_size(&path).context("measuring artifact")?;
    let checksum = calculate_sha256(&path).await.context("hashing artifact")?;

    Ok(BuiltArtifact {
        mode,
        directory: settings.dist_dir().to_path_buf(),
        path,
        executable,
        config_companion,
        size,
        checksum,
    })
}
