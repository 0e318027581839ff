//! Packaging mode and where the choice came from.

use std::fmt;

/// Output shape of the frozen application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageMode {
    /// One self-contained executable.
    #[default]
    OneFile,
    /// A directory of support files next to the executable.
    OneDir,
}

impl PackageMode {
    /// The PyInstaller flag selecting this mode.
    pub fn pyinstaller_flag(self) -> &'static str {
        match self {
            Self::OneFile => "--onefile",
            Self::OneDir => "--onedir",
        }
    }

    /// Maps a one-file toggle to a mode.
    pub fn from_onefile(onefile: bool) -> Self {
        if onefile { Self::OneFile } else { Self::OneDir }
    }
}

impl fmt::Display for PackageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OneFile => "one-file",
            Self::OneDir => "one-directory",
        })
    }
}

/// Where an explicit mode was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSource {
    /// `--onefile` / `--onedir`
    Flag,
    /// `ONEFILE` environment variable
    Environment,
    /// `onefile` key in packaging.toml
    ConfigFile,
    /// Nothing decided it
    Default,
}

/// Resolved mode, or a request to ask the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSelection {
    /// Mode is fixed before the pipeline starts.
    Explicit(PackageMode, ModeSource),
    /// Mode is asked once, right before the arguments are built.
    Ask,
}

impl Default for ModeSelection {
    fn default() -> Self {
        Self::Explicit(PackageMode::OneFile, ModeSource::Default)
    }
}

/// Parses a yes/no toggle as found in `ONEFILE`.
///
/// Returns `None` for blank values and `Some(Err(raw))` for values that are
/// neither truthy nor falsy.
pub fn parse_toggle(raw: &str) -> Option<Result<bool, String>> {
    let value = raw.trim().to_ascii_lowercase();
    match value.as_str() {
        "" => None,
        "1" | "true" | "yes" | "y" | "ja" | "j" | "on" => Some(Ok(true)),
        "0" | "false" | "no" | "n" | "nein" | "off" => Some(Ok(false)),
        _ => Some(Err(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_accepts_german_and_numeric_forms() {
        assert_eq!(parse_toggle("1"), Some(Ok(true)));
        assert_eq!(parse_toggle(" Ja "), Some(Ok(true)));
        assert_eq!(parse_toggle("0"), Some(Ok(false)));
        assert_eq!(parse_toggle("NEIN"), Some(Ok(false)));
        assert_eq!(parse_toggle("  "), None);
        assert_eq!(parse_toggle("maybe"), Some(Err("maybe".to_string())));
    }

    #[test]
    fn flags_are_mutually_exclusive_per_mode() {
        assert_eq!(PackageMode::OneFile.pyinstaller_flag(), "--onefile");
        assert_eq!(PackageMode::OneDir.pyinstaller_flag(), "--onedir");
        assert_eq!(PackageMode::from_onefile(false), PackageMode::OneDir);
        assert_eq!(PackageMode::default(), PackageMode::OneFile);
    }
}
