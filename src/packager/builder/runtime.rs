//! Runtime resolution.
//!
//! Locates the Python interpreter that runs pip and PyInstaller. A missing
//! interpreter is a precondition the operator has to fix, so the lookup is
//! not retried.

use crate::packager::error::{Error, Result};
use std::path::{Path, PathBuf};

/// A located Python interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runtime {
    name: String,
    path: PathBuf,
}

impl Runtime {
    /// Name the interpreter was requested by.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved executable path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Locates `name` on `PATH`, or checks it directly when it contains a path
/// separator.
///
/// # Errors
///
/// [`Error::RuntimeNotFound`] if nothing executable is found.
pub fn locate(name: &str) -> Result<Runtime> {
    let path = which::which(name).map_err(|e| Error::RuntimeNotFound {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    log::debug!("Found {} at: {}", name, path.display());
    Ok(Runtime {
        name: name.to_string(),
        path,
    })
}

/// Locates the interpreter and logs its version.
///
/// The version probe is informational; a probe failure is logged and the
/// build continues with the located binary.
pub async fn resolve(name: &str) -> Result<Runtime> {
    let runtime = locate(name)?;

    match tokio::process::Command::new(runtime.path())
        .arg("--version")
        .output()
        .await
    {
        Ok(output) if output.status.success() => {
            // Python 2 and some launchers print the version on stderr
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            let version = if stdout.trim().is_empty() {
                stderr.trim().to_string()
            } else {
                stdout.trim().to_string()
            };
            log::info!("✓ {} available: {}", runtime.name(), version);
        }
        Ok(output) => {
            log::warn!(
                "{} found at {} but --version check failed (exit code: {:?})",
                runtime.name(),
                runtime.path().display(),
                output.status.code()
            );
        }
        Err(e) => {
            log::warn!(
                "{} found at {} but failed to execute: {}. Check file permissions.",
                runtime.name(),
                runtime.path().display(),
                e
            );
        }
    }

    Ok(runtime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_runtime_names_the_binary() {
        let err = locate("lea-logineo-no-such-python-3000").unwrap_err();
        match err {
            Error::RuntimeNotFound { name, .. } => {
                assert_eq!(name, "lea-logineo-no-such-python-3000")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn accepts_explicit_path() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let fake = dir.path().join("python with space");
        std::fs::write(&fake, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&fake, std::fs::Permissions::from_mode(0o755)).unwrap();

        let runtime = locate(fake.to_str().unwrap()).unwrap();
        assert_eq!(runtime.path(), fake.as_path());
    }
}
