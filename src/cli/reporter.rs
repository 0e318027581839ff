//! Final result reporting and the pause-on-failure behavior.

use super::OutputManager;
use crate::{error::BuildError, packager::BuiltArtifact, packager::Platform};
use std::io::{self, BufRead, Write};

/// Text shown while waiting for the operator after a failure.
pub const PAUSE_MESSAGE: &str = "Press Enter to close this window...";

/// Turns the outcome of a build into output and an exit code.
#[derive(Debug, Clone)]
pub struct Reporter {
    output: OutputManager,
    platform: Platform,
    no_pause: bool,
}

impl Reporter {
    pub fn new(output: OutputManager, platform: Platform, no_pause: bool) -> Self {
        Self {
            output,
            platform,
            no_pause,
        }
    }

    /// Whether a failure waits for Enter before the process exits.
    ///
    /// Only the Windows console, which closes with the process, pauses.
    pub fn should_pause(&self) -> bool {
        self.platform.pauses_on_failure() && !self.no_pause
    }

    /// Reports the outcome and returns the process exit code.
    ///
    /// A pause after a failure waits on the console.
    pub fn finish(&self, outcome: Result<BuiltArtifact, BuildError>) -> i32 {
        let stdin = io::stdin();
        self.finish_with(outcome, &mut stdin.lock(), &mut io::stderr())
    }

    /// Like [`Reporter::finish`], pausing on the given streams.
    pub fn finish_with<R: BufRead, W: Write>(
        &self,
        outcome: Result<BuiltArtifact, BuildError>,
        input: &mut R,
        output: &mut W,
    ) -> i32 {
        match outcome {
            Ok(artifact) => {
                let mut stdout = io::stdout().lock();
                if let Err(e) = report_artifact(&mut stdout, &artifact) {
                    log::debug!("Could not write artifact report: {}", e);
                }
                let _ = self.output.success(&format!(
                    "Created {} build ({} bytes)",
                    artifact.mode, artifact.size
                ));
                let _ = self.output.indent(&format!("SHA256: {}", artifact.checksum));
                if let Some(companion) = &artifact.config_companion {
                    let _ = self
                        .output
                        .indent(&format!("config.xml copied to {}", companion.display()));
                }
                0
            }
            Err(err) => {
                let _ = self.output.error(&err.to_string());
                for suggestion in err.recovery_suggestions() {
                    let _ = self.output.indent(&format!("• {suggestion}"));
                }

                if self.should_pause() {
                    if let Err(e) = pause(input, output) {
                        log::debug!("Pause aborted: {}", e);
                    }
                }
                1
            }
        }
    }
}

/// Writes the artifact report consumed by wrapper scripts.
pub fn report_artifact<W: Write>(out: &mut W, artifact: &BuiltArtifact) -> io::Result<()> {
    writeln!(out, "Artifact: {}", artifact.path.display())?;
    writeln!(out, "Directory: {}", artifact.directory.display())?;
    out.flush()
}

/// Shows [`PAUSE_MESSAGE`] and waits for one line (or end of input).
pub fn pause<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    write!(output, "{PAUSE_MESSAGE}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packager::PackageMode;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn reporter(platform: Platform, no_pause: bool) -> Reporter {
        Reporter::new(OutputManager::new(false), platform, no_pause)
    }

    #[test]
    fn only_windows_pauses() {
        assert!(reporter(Platform::Windows, false).should_pause());
        assert!(!reporter(Platform::Windows, true).should_pause());
        assert!(!reporter(Platform::MacOs, false).should_pause());
        assert!(!reporter(Platform::Linux, false).should_pause());
    }

    #[test]
    fn report_names_artifact_and_directory() {
        let artifact = BuiltArtifact {
            mode: PackageMode::OneDir,
            path: PathBuf::from("/proj/LEA-LOGINEO-Tool"),
            executable: PathBuf::from("/proj/LEA-LOGINEO-Tool/LEA-LOGINEO-Tool"),
            directory: PathBuf::from("/proj"),
            config_companion: None,
            size: 10,
            checksum: "00".into(),
        };
        let mut out = Vec::new();
        report_artifact(&mut out, &artifact).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Artifact: /proj/LEA-LOGINEO-Tool\nDirectory: /proj\n"
        );
    }

    #[test]
    fn pause_returns_on_enter_or_eof() {
        let mut shown = Vec::new();
        pause(&mut Cursor::new("\n"), &mut shown).unwrap();
        assert_eq!(shown, PAUSE_MESSAGE.as_bytes());

        pause(&mut Cursor::new(""), &mut Vec::new()).unwrap();
    }

    fn failure() -> Result<BuiltArtifact, BuildError> {
        Err(BuildError::from(crate::packager::Error::GenericError("boom".into())))
    }

    #[test]
    fn windows_failure_waits_for_enter() {
        let mut input = Cursor::new("\nleft over\n");
        let mut shown = Vec::new();
        let code = reporter(Platform::Windows, false).finish_with(failure(), &mut input, &mut shown);

        assert_eq!(code, 1);
        assert_eq!(shown, PAUSE_MESSAGE.as_bytes());
        // exactly one line consumed
        assert_eq!(input.position(), 1);
    }

    #[test]
    fn no_pause_skips_the_wait() {
        for (platform, no_pause) in [(Platform::Windows, true), (Platform::Linux, false)] {
            let mut input = Cursor::new("\n");
            let mut shown = Vec::new();
            let code = reporter(platform, no_pause).finish_with(failure(), &mut input, &mut shown);

            assert_eq!(code, 1);
            assert!(shown.is_empty(), "{platform}");
            assert_eq!(input.position(), 0);
        }
    }
}
