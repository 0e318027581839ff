//! End-to-end runs of the build driver against a fake Python interpreter.
#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

const NAME: &str = "LEA-LOGINEO-Tool";

struct Fixture {
    _tmp: TempDir,
    root: PathBuf,
    python: PathBuf,
}

impl Fixture {
    /// Project and interpreter both live below directories containing spaces.
    fn new() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");

        let root = tmp.path().join("LEA Projekt");
        fs::create_dir_all(root.join("scripts")).unwrap();
        for entry in fs::read_dir(fixtures.join("project")).unwrap() {
            let entry = entry.unwrap();
            fs::copy(entry.path(), root.join(entry.file_name())).unwrap();
        }

        let bin = tmp.path().join("python env");
        fs::create_dir(&bin).unwrap();
        let python = bin.join("python3");
        fs::copy(fixtures.join("fake-python.sh"), &python).unwrap();
        fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();

        Self {
            _tmp: tmp,
            root,
            python,
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("lea-logineo-build").unwrap();
        cmd.current_dir(&self.root)
            .env("PYTHON_BIN", &self.python)
            .env("NONINTERACTIVE", "1")
            .env_remove("ONEFILE")
            .env_remove("FAKE_PYINSTALLER_FAIL")
            .env_remove("FAKE_PIP_FAIL")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Recorded calls, one `|`-separated argument list per line.
    fn calls(&self) -> Vec<Vec<String>> {
        let log = self.python.with_file_name("calls.log");
        let Ok(contents) = fs::read_to_string(log) else {
            return Vec::new();
        };
        contents
            .lines()
            .map(|line| line.split('|').skip(1).map(str::to_string).collect())
            .collect()
    }

    fn pyinstaller_call(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .find(|call| call.get(1).map(String::as_str) == Some("PyInstaller"))
            .expect("PyInstaller was not invoked")
    }

    /// Windowed macOS builds are `.app` bundles in either mode.
    fn artifact(&self) -> PathBuf {
        if cfg!(target_os = "macos") {
            self.root.join(format!("{NAME}.app"))
        } else {
            self.root.join(NAME)
        }
    }
}

#[test]
fn default_build_is_one_file() {
    let fixture = Fixture::new();

    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Artifact: {}",
            fixture.artifact().display()
        )))
        .stdout(predicate::str::contains(format!(
            "Directory: {}",
            fixture.root.display()
        )));

    let call = fixture.pyinstaller_call();
    assert_eq!(call.last().map(String::as_str), Some("--onefile"));
    assert!(!call.iter().any(|a| a == "--onedir"));
    assert!(fixture.artifact().exists());
}

#[test]
fn installs_packaging_tools_then_requirements() {
    let fixture = Fixture::new();
    fixture.command().assert().success();

    let calls = fixture.calls();
    assert_eq!(
        calls[0],
        ["-m", "pip", "install", "--upgrade", "pip", "pyinstaller"]
    );
    assert_eq!(calls[1][..4], ["-m", "pip", "install", "-r"]);
    assert_eq!(
        Path::new(&calls[1][4]),
        fixture.root.join("requirements.txt")
    );
    assert_eq!(calls[2][1], "PyInstaller");
}

#[test]
fn onedir_flag_selects_directory_build() {
    let fixture = Fixture::new();
    fixture.command().arg("--onedir").assert().success();

    let call = fixture.pyinstaller_call();
    assert_eq!(call.last().map(String::as_str), Some("--onedir"));
    assert!(fixture.artifact().exists());
}

#[test]
fn onefile_environment_variable_selects_mode() {
    let fixture = Fixture::new();
    fixture.command().env("ONEFILE", "0").assert().success();

    let call = fixture.pyinstaller_call();
    assert_eq!(call.last().map(String::as_str), Some("--onedir"));
}

#[test]
fn flag_beats_environment() {
    let fixture = Fixture::new();
    fixture
        .command()
        .env("ONEFILE", "0")
        .arg("--onefile")
        .assert()
        .success();

    let call = fixture.pyinstaller_call();
    assert_eq!(call.last().map(String::as_str), Some("--onefile"));
}

#[test]
fn entry_script_with_space_is_single_argument() {
    let fixture = Fixture::new();
    fixture.command().assert().success();

    let call = fixture.pyinstaller_call();
    let entry = fixture.root.join(format!("{NAME}.py"));
    assert_eq!(
        call.iter().filter(|a| Path::new(a) == entry).count(),
        1,
        "{call:?}"
    );

    let dist = call.iter().position(|a| a == "--distpath").unwrap();
    assert_eq!(Path::new(&call[dist + 1]), fixture.root);
    let work = call.iter().position(|a| a == "--workpath").unwrap();
    assert_eq!(Path::new(&call[work + 1]), fixture.root.join("build"));
}

#[test]
fn detects_root_from_scripts_directory() {
    let fixture = Fixture::new();
    fixture
        .command()
        .current_dir(fixture.root.join("scripts"))
        .assert()
        .success();

    assert!(fixture.artifact().exists());
}

#[cfg(not(target_os = "macos"))]
#[test]
fn onedir_build_gets_config_companion() {
    let fixture = Fixture::new();
    fixture.command().arg("--onedir").assert().success();

    let companion = fixture.root.join(NAME).join("config.xml");
    assert_eq!(
        fs::read_to_string(companion).unwrap(),
        fs::read_to_string(fixture.root.join("config.xml")).unwrap()
    );
}

#[test]
fn missing_runtime_fails_before_any_call() {
    let fixture = Fixture::new();
    fixture
        .command()
        .env("PYTHON_BIN", fixture.root.join("no-such-python"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("PYTHON_BIN"));

    assert!(fixture.calls().is_empty());
}

#[test]
fn pyinstaller_failure_exits_with_one() {
    let fixture = Fixture::new();
    fixture
        .command()
        .env("FAKE_PYINSTALLER_FAIL", "1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("PyInstaller failed"));

    assert!(!fixture.artifact().exists());
}

#[test]
fn outside_a_project_fails() {
    let fixture = Fixture::new();
    let elsewhere = fixture.python.parent().unwrap().to_path_buf();
    fixture
        .command()
        .current_dir(&elsewhere)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--project-root"));
}

#[test]
fn packaging_file_supplies_mode() {
    let fixture = Fixture::new();
    fs::write(fixture.root.join("packaging.toml"), "onefile = false\n").unwrap();
    fixture.command().assert().success();

    let call = fixture.pyinstaller_call();
    assert_eq!(call.last().map(String::as_str), Some("--onedir"));
}

#[test]
fn dependency_failure_stops_before_pyinstaller() {
    let fixture = Fixture::new();
    fixture
        .command()
        .env("FAKE_PIP_FAIL", "1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("dependency installation failed"));

    let calls = fixture.calls();
    assert_eq!(calls.len(), 1, "{calls:?}");
    assert_eq!(calls[0][1], "pip");
    assert!(!fixture.artifact().exists());
}

#[test]
fn conflicting_mode_flags_are_rejected() {
    let fixture = Fixture::new();
    fixture
        .command()
        .args(["--onefile", "--onedir"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid arguments"));

    assert!(fixture.calls().is_empty());
}

#[test]
fn unknown_flag_exits_with_one() {
    let fixture = Fixture::new();
    fixture
        .command()
        .arg("--one-file")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--one-file"));

    assert!(fixture.calls().is_empty());
}

#[test]
fn help_exits_successfully() {
    let fixture = Fixture::new();
    fixture
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--onedir"));

    assert!(fixture.calls().is_empty());
}
