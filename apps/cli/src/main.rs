mod args;

use crate::args::Cli;
use artifex::kernel::settings::load_settings;
use artifex::kernel::{BuildSettings, ManifestProvider};
use artifex::{BuildError, BuildOptions, BuildReport, Pipeline};
use artifex_logger::{Logger, LoggerError};
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let settings = load_settings(cli.settings.as_deref());
    let _logger = init_logger(&cli, settings.as_ref().ok())?;

    match settings.map_err(BuildError::from).and_then(|settings| build(cli, settings)) {
        Ok(report) => {
            info!(
                artifacts = report.artifacts,
                features = report.features,
                proxies = report.proxies,
                "Artifacts configuration is up to date"
            );
            Ok(ExitCode::SUCCESS)
        },
        Err(err) => {
            error!(code = err.stage_code(), "{err}");
            Ok(ExitCode::FAILURE)
        },
    }
}

fn init_logger(cli: &Cli, settings: Option<&BuildSettings>) -> Result<Logger, LoggerError> {
    let mut builder = Logger::builder().name(env!("CARGO_BIN_NAME")).verbose(cli.verbose);
    if let Some(level) = settings.and_then(|s| s.log_level.as_deref()).filter(|_| !cli.verbose) {
        builder = builder.env_filter(level);
    }

    match settings.and_then(|s| s.log_dir.as_ref()) {
        Some(dir) => builder.path(dir).init(),
        None => builder.init(),
    }
}

/// Command-line flags take precedence over the settings file.
fn build(cli: Cli, mut settings: BuildSettings) -> Result<BuildReport, BuildError> {
    if cli.proxies_path.is_some() {
        settings.proxies_path = cli.proxies_path;
    }
    settings.use_modules |= cli.use_modules;
    settings.namespace_segments_to_strip.extend(cli.strip);

    let provider = ManifestProvider::open(&cli.module)?;
    let options = BuildOptions {
        root: cli.root,
        bounded_context: cli.bounded_context,
        generate_proxies: cli.generate_proxies,
        settings,
    };

    Pipeline::new(&provider, options).run()
}
