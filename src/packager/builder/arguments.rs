//! PyInstaller argument construction.

use crate::packager::settings::{BuildSettings, PackageMode};
use std::ffi::OsString;

/// Builds the PyInstaller argument list (everything after `-m PyInstaller`).
///
/// Order is fixed:
///
/// ```text
/// [--windowed] --name <product>
/// --distpath <root> --workpath <root>/build --specpath <root>/build
/// --noconfirm --clean <entry script> (--onefile | --onedir)
/// ```
///
/// Exactly one mode flag is emitted and it is always last. Paths are passed
/// through as `OsString`, never re-split or re-encoded.
pub fn build_arguments(settings: &BuildSettings, mode: PackageMode) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::with_capacity(14);

    if settings.windowed() {
        args.push("--windowed".into());
    }

    args.push("--name".into());
    args.push(settings.product_name().into());

    args.push("--distpath".into());
    args.push(settings.dist_dir().as_os_str().to_owned());
    args.push("--workpath".into());
    args.push(settings.work_dir().as_os_str().to_owned());
    args.push("--specpath".into());
    args.push(settings.spec_dir().as_os_str().to_owned());

    args.push("--noconfirm".into());
    args.push("--clean".into());

    args.push(settings.entry_script().as_os_str().to_owned());

    args.push(mode.pyinstaller_flag().into());

    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packager::settings::SettingsBuilder;
    use std::path::Path;

    fn settings(windowed: bool) -> BuildSettings {
        SettingsBuilder::new()
            .project_root(Path::new("/Users/lehrer/Schule Tools/LEA"))
            .windowed(windowed)
            .build()
            .unwrap()
    }

    fn mode_flags(args: &[OsString]) -> Vec<&OsString> {
        args.iter()
            .filter(|a| *a == "--onefile" || *a == "--onedir")
            .collect()
    }

    #[test]
    fn order_matches_build_contract() {
        let root = Path::new("/Users/lehrer/Schule Tools/LEA");
        let args = build_arguments(&settings(true), PackageMode::OneFile);

        let expected: Vec<OsString> = vec![
            "--windowed".into(),
            "--name".into(),
            "LEA-LOGINEO-Tool".into(),
            "--distpath".into(),
            root.as_os_str().to_owned(),
            "--workpath".into(),
            root.join("build").into_os_string(),
            "--specpath".into(),
            root.join("build").into_os_string(),
            "--noconfirm".into(),
            "--clean".into(),
            root.join("LEA-LOGINEO-Tool.py").into_os_string(),
            "--onefile".into(),
        ];
        assert_eq!(args, expected);
    }

    #[test]
    fn exactly_one_mode_flag_last() {
        for mode in [PackageMode::OneFile, PackageMode::OneDir] {
            let args = build_arguments(&settings(true), mode);
            let flags = mode_flags(&args);
            assert_eq!(flags.len(), 1, "{mode}: {args:?}");
            assert_eq!(args.last().unwrap(), mode.pyinstaller_flag());
        }
    }

    #[test]
    fn path_with_space_stays_single_argument() {
        let args = build_arguments(&settings(true), PackageMode::OneDir);
        let entry = Path::new("/Users/lehrer/Schule Tools/LEA/LEA-LOGINEO-Tool.py");
        assert_eq!(
            args.iter().filter(|a| Path::new(a) == entry).count(),
            1
        );
    }

    #[test]
    fn console_build_omits_windowed() {
        let args = build_arguments(&settings(false), PackageMode::OneFile);
        assert_eq!(args[0], "--name");
        assert!(!args.iter().any(|a| a == "--windowed"));
    }
}
