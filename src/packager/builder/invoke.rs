//! Subprocess execution for pip and PyInstaller.
//!
//! Every tool call is a single process spawned with an argument vector,
//! never a shell string, so paths containing whitespace stay one argument.

use super::runtime::Runtime;
use crate::packager::error::{Error, Result};
use std::{
    ffi::{OsStr, OsString},
    path::Path,
    process::ExitStatus,
};

/// Runs `<runtime> <args>` in `cwd` with inherited stdio.
///
/// # Errors
///
/// [`Error::CommandFailed`] if the process cannot be spawned. A non-zero
/// exit is returned as the status for the caller to classify.
pub async fn run_runtime(runtime: &Runtime, args: &[OsString], cwd: &Path) -> Result<ExitStatus> {
    log::debug!("$ {}", render_command(runtime.name(), args));

    tokio::process::Command::new(runtime.path())
        .args(args)
        .current_dir(cwd)
        .status()
        .await
        .map_err(|error| Error::CommandFailed {
            command: runtime.name().to_string(),
            error,
        })
}

/// Runs `<runtime> -m PyInstaller <args>` in the project root.
///
/// # Errors
///
/// [`Error::PackagerFailed`] on a non-zero exit.
pub async fn run_pyinstaller(runtime: &Runtime, args: &[OsString], project_root: &Path) -> Result<()> {
    log::info!("Running PyInstaller...");

    let command = pyinstaller_command(args);
    let status = run_runtime(runtime, &command, project_root).await?;

    if !status.success() {
        return Err(Error::PackagerFailed {
            command: render_command(runtime.name(), &command),
            status,
        });
    }

    Ok(())
}

/// Prefixes the PyInstaller arguments with the module invocation.
pub fn pyinstaller_command(args: &[OsString]) -> Vec<OsString> {
    let mut command: Vec<OsString> = vec!["-m".into(), "PyInstaller".into()];
    command.extend(args.iter().cloned());
    command
}

/// Renders a command line for diagnostics, quoting arguments with spaces.
pub fn render_command(program: &str, args: &[OsString]) -> String {
    std::iter::once(OsStr::new(program))
        .chain(args.iter().map(OsString::as_os_str))
        .map(|arg| {
            let arg = arg.to_string_lossy();
            if arg.contains(char::is_whitespace) {
                format!("\"{arg}\"")
            } else {
                arg.into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_invocation_comes_first() {
        let command = pyinstaller_command(&["--clean".into()]);
        assert_eq!(command, vec!["-m", "PyInstaller", "--clean"]);
    }

    #[test]
    fn rendering_quotes_whitespace() {
        let rendered = render_command(
            "python3",
            &["-m".into(), "PyInstaller".into(), "/home/a b/LEA-LOGINEO-Tool.py".into()],
        );
        assert_eq!(
            rendered,
            "python3 -m PyInstaller \"/home/a b/LEA-LOGINEO-Tool.py\""
        );
    }
}
