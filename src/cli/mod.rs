//! Command line interface for the LEA-LOGINEO-Tool build driver.
//!
//! This module wires argument parsing, option resolution, the packaging
//! pipeline and the final report together.

mod args;
mod options;
mod output;
mod reporter;

pub use args::{Args, RuntimeConfig};
pub use options::{BuildOptions, EnvOverrides};
pub use output::OutputManager;
pub use reporter::Reporter;

use crate::error::{BuildError, CliError, Result};
use crate::packager::{
    BuiltArtifact, LinePrompt, ModeSelection, NoPrompt, Packager, PackagingFile, Platform,
    ProjectLayout, SettingsBuilder, project::config_xml,
};

/// Parse command line arguments
pub fn parse_args() -> std::result::Result<Args, clap::Error> {
    Args::try_parse_args()
}

/// Reports a command line error and returns the exit code.
///
/// `--help` and `--version` print and exit successfully. Every other parse
/// error goes through the regular failure report, pause included.
pub fn usage_error(err: clap::Error) -> i32 {
    use clap::error::ErrorKind;

    if matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    ) {
        err.exit();
    }

    let env = EnvOverrides::from_process();
    let no_pause = env.noninteractive || std::env::args_os().any(|arg| arg == "--no-pause");
    let reporter = Reporter::new(OutputManager::new(false), Platform::host(), no_pause);

    let reason = usage_reason(&err);
    reporter.finish(Err(CliError::InvalidArguments { reason }.into()))
}

/// First line of a clap error without its `error:` prefix.
fn usage_reason(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default().trim();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

/// Initializes `env_logger`; `RUST_LOG` overrides the verbosity flag.
pub fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "lea_logineo_packager=info",
        1 => "lea_logineo_packager=debug",
        _ => "lea_logineo_packager=trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Main CLI entry point. Returns the process exit code.
pub async fn run(args: Args) -> i32 {
    let env = EnvOverrides::from_process();
    let platform = Platform::host();
    let config = RuntimeConfig::from(&args);

    let mut reporter = Reporter::new(
        config.output().clone(),
        platform,
        args.no_pause || env.noninteractive,
    );

    let outcome = match prepare(&args, &env, platform, &config) {
        Ok((packager, options)) => {
            reporter = Reporter::new(config.output().clone(), platform, options.no_pause);
            package(&packager, &options, &env).await
        }
        Err(err) => Err(err),
    };

    reporter.finish(outcome)
}

fn prepare(
    args: &Args,
    env: &EnvOverrides,
    platform: Platform,
    config: &RuntimeConfig,
) -> Result<(Packager, BuildOptions)> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let layout = match &args.project_root {
        Some(root) => ProjectLayout::discover(root)?,
        None => ProjectLayout::detect(&std::env::current_dir()?)?,
    };

    let file = match layout.packaging_file() {
        Some(path) => PackagingFile::load_or_default(path)?,
        None => PackagingFile::default(),
    };
    let options = BuildOptions::resolve(args, env, &file, platform);
    log::debug!("Resolved options: {:?}", options);

    let _ = config.section("LEA-LOGINEO-Tool build");
    let _ = config.progress(&format!("Project root: {}", layout.root().display()));
    let _ = config.output().verbose(&format!(
        "Python: {}",
        options.python.as_deref().unwrap_or(platform.default_runtime())
    ));
    if let Some(path) = layout.packaging_file() {
        let _ = config.output().verbose(&format!("Defaults from {}", path.display()));
    }

    for finding in config_xml::check(layout.config_xml()) {
        let _ = config.warn(&finding.to_string());
    }

    let mut builder = SettingsBuilder::new()
        .project(&layout)
        .platform(platform)
        .windowed(options.windowed)
        .mode(options.mode);
    if let Some(python) = &options.python {
        builder = builder.runtime(python.clone());
    }

    Ok((Packager::new(builder.build()?), options))
}

async fn package(
    packager: &Packager,
    options: &BuildOptions,
    env: &EnvOverrides,
) -> Result<BuiltArtifact> {
    let artifact = if options.mode == ModeSelection::Ask && !env.noninteractive {
        packager.package(&mut LinePrompt::stdin()).await
    } else {
        packager.package(&mut NoPrompt).await
    };

    artifact.map_err(BuildError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn usage_reason_is_the_first_line() {
        let err = Args::try_parse_from(["lea-logineo-build", "--onefile", "--onedir"]).unwrap_err();
        let reason = usage_reason(&err);
        assert!(reason.contains("cannot be used with"), "{reason}");
        assert!(!reason.starts_with("error:"));
        assert!(!reason.contains('\n'));
    }

    #[test]
    fn unknown_flag_is_reported_as_invalid_arguments() {
        let err = Args::try_parse_from(["lea-logineo-build", "--one-file"]).unwrap_err();
        let reason = usage_reason(&err);
        assert!(reason.contains("--one-file"), "{reason}");

        let report = BuildError::from(CliError::InvalidArguments { reason });
        assert!(report.to_string().contains("Invalid arguments"));
    }
}
