//! One-file / one-directory mode selection.
//!
//! The mode is decided by the first source that has an opinion:
//!
//! 1. `--onefile` / `--onedir`
//! 2. the `ONEFILE` environment variable
//! 3. `onefile` in packaging.toml
//! 4. an interactive question, on platforms that ask (Windows)
//! 5. one-file
//!
//! The question is a single line read behind [`ModePrompt`], so automated
//! builds can bypass it entirely.

use crate::packager::settings::{
    ModeSelection, ModeSource, PackageMode, Platform, parse_toggle,
};
use std::io::{self, BufRead, Write};

/// Question shown when the mode is asked interactively.
pub const MODE_QUESTION: &str = "Build LEA-LOGINEO-Tool as a single executable file? [Y/n] ";

/// Source of the operator's answer.
pub trait ModePrompt {
    /// Shows `question` and returns the answer line.
    ///
    /// `Ok(None)` means no answer is available (end of input).
    fn ask(&mut self, question: &str) -> io::Result<Option<String>>;
}

/// Prompt reading answers line by line from `input`.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    /// Creates a prompt over arbitrary streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on the console: question on stderr, answer from stdin.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> ModePrompt for LinePrompt<R, W> {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Prompt that never answers; every question falls back to the default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPrompt;

impl ModePrompt for NoPrompt {
    fn ask(&mut self, _question: &str) -> io::Result<Option<String>> {
        Ok(None)
    }
}

/// Maps an answer to a mode.
///
/// `n`, `no` and `nein` (any case) select one-directory; everything else,
/// including an empty answer, selects one-file.
pub fn interpret_answer(answer: &str) -> PackageMode {
    match answer.trim().to_lowercase().as_str() {
        "n" | "no" | "nein" => PackageMode::OneDir,
        _ => PackageMode::OneFile,
    }
}

/// Applies the resolution chain up to the prompt.
///
/// * `flag` - mode from `--onefile` / `--onedir`
/// * `env` - raw `ONEFILE` value
/// * `file` - `onefile` from packaging.toml
/// * `interactive` - whether asking is allowed at all
pub fn resolve_selection(
    flag: Option<PackageMode>,
    env: Option<&str>,
    file: Option<bool>,
    platform: Platform,
    interactive: bool,
) -> ModeSelection {
    if let Some(mode) = flag {
        return ModeSelection::Explicit(mode, ModeSource::Flag);
    }

    match env.and_then(parse_toggle) {
        Some(Ok(onefile)) => {
            return ModeSelection::Explicit(
                PackageMode::from_onefile(onefile),
                ModeSource::Environment,
            );
        }
        Some(Err(raw)) => {
            log::warn!(
                "Invalid value {:?} for ONEFILE. Using default {}",
                raw,
                PackageMode::OneFile
            );
            return ModeSelection::Explicit(PackageMode::OneFile, ModeSource::Environment);
        }
        None => {}
    }

    if let Some(onefile) = file {
        return ModeSelection::Explicit(PackageMode::from_onefile(onefile), ModeSource::ConfigFile);
    }

    if interactive && platform.prompts_for_mode() {
        ModeSelection::Ask
    } else {
        ModeSelection::default()
    }
}

/// Turns a selection into a mode, asking through `prompt` if needed.
///
/// A failed or aborted prompt is treated like an empty answer.
pub fn select(selection: ModeSelection, prompt: &mut dyn ModePrompt) -> PackageMode {
    let mode = match selection {
        ModeSelection::Explicit(mode, source) => {
            log::debug!("Packaging mode {} ({:?})", mode, source);
            mode
        }
        ModeSelection::Ask => match prompt.ask(MODE_QUESTION) {
            Ok(Some(answer)) => interpret_answer(&answer),
            Ok(None) => {
                log::debug!("No answer to mode question - using default");
                PackageMode::default()
            }
            Err(e) => {
                log::warn!("Could not read answer ({}). Using default", e);
                PackageMode::default()
            }
        },
    };

    log::info!("Packaging mode: {}", mode);
    mode
}
