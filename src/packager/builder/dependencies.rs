//! Packaging dependency installation.
//!
//! Upgrades pip and PyInstaller in the runtime's environment, then installs
//! the application's own dependencies when the project has a manifest.
//! Needs network access; any failure aborts the build.

use super::{
    invoke::{render_command, run_runtime},
    runtime::Runtime,
};
use crate::packager::{
    error::{Error, Result},
    settings::BuildSettings,
};
use std::ffi::OsString;

/// pip invocations for `settings`, in execution order.
pub fn install_commands(settings: &BuildSettings) -> Vec<Vec<OsString>> {
    let mut commands: Vec<Vec<OsString>> = vec![
        ["-m", "pip", "install", "--upgrade", "pip", "pyinstaller"]
            .into_iter()
            .map(OsString::from)
            .collect(),
    ];

    if let Some(requirements) = settings.requirements() {
        commands.push(vec![
            "-m".into(),
            "pip".into(),
            "install".into(),
            "-r".into(),
            requirements.as_os_str().to_owned(),
        ]);
    }

    commands
}

/// Runs every pip invocation in order, stopping at the first failure.
///
/// # Errors
///
/// [`Error::DependencyInstall`] on a non-zero pip exit,
/// [`Error::CommandFailed`] if pip cannot be started.
pub async fn install(runtime: &Runtime, settings: &BuildSettings) -> Result<()> {
    log::info!("Installing packaging dependencies...");

    if settings.requirements().is_none() {
        log::debug!("No requirements.txt - skipping application dependencies");
    }

    for command in install_commands(settings) {
        let status = run_runtime(runtime, &command, settings.project_root()).await?;
        if !status.success() {
            return Err(Error::DependencyInstall {
                command: render_command(runtime.name(), &command),
                status,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packager::settings::SettingsBuilder;

    #[test]
    fn upgrades_pyinstaller_first() {
        let settings = SettingsBuilder::new().project_root("/src/tool").build().unwrap();
        let commands = install_commands(&settings);
        assert_eq!(commands.len(), 1);
        assert_eq!(
            commands[0],
            vec!["-m", "pip", "install", "--upgrade", "pip", "pyinstaller"]
        );
    }

    #[test]
    fn installs_manifest_when_present() {
        let settings = SettingsBuilder::new()
            .project_root("/src/my tool")
            .requirements("/src/my tool/requirements.txt")
            .build()
            .unwrap();

        let commands = install_commands(&settings);
        assert_eq!(commands.len(), 2);
        assert_eq!(
            commands[1],
            vec!["-m", "pip", "install", "-r", "/src/my tool/requirements.txt"]
        );
    }
}
