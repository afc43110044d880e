// file: src/cli/commands.rs
// version: 1.0.0
// guid: 07eeae90-ce17-4b67-82c5-784e11fe70f9

//! Command implementations for the CLI

use crate::{
    cli::args::Cli,
    config::ZfsConfig,
    error::ConfigError,
    logging::logger::with_operation_span,
    reporter::ProgressReporter,
    utils::environment::EnvironmentCheck,
    Result,
};
use tracing::{debug, info};

/// Load the configuration and produce the requested output
pub fn execute(cli: &Cli) -> Result<()> {
    let config =
        with_operation_span("load_config", || ZfsConfig::from_env_file(&cli.env_file))?;
    debug!("Configuration loaded from {}", cli.env_file);

    if cli.validate_env {
        validate_environment_command()?;
    }

    if cli.json {
        print_json(&config)?;
    } else if cli.export {
        print_exports(&config);
    } else {
        println!("{}", config.display_summary());
    }

    Ok(())
}

/// Check host preconditions and report the findings. A failed check
/// becomes an error so the wrapping workflow aborts before any
/// destructive phase runs.
pub fn validate_environment_command() -> Result<()> {
    info!("Validating host environment");

    let reporter = ProgressReporter::new(0);
    let report = EnvironmentCheck::new().run();

    for warning in &report.warnings {
        reporter.warn(warning);
    }

    if report.passed() {
        reporter.success("Environment validation passed");
        return Ok(());
    }

    for error in &report.errors {
        reporter.error(error);
    }
    Err(ConfigError::environment(report.errors.join("; ")))
}

/// Print the configuration as pretty JSON for script integration
fn print_json(config: &ZfsConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

/// Print the configuration as `export KEY='value'` lines
fn print_exports(config: &ZfsConfig) {
    for (key, value) in config.to_env_vars() {
        println!("export {}='{}'", key, shell_escape(&value));
    }
}

/// Escape a value for single-quoted shell interpolation
fn shell_escape(value: &str) -> String {
    value.replace('\'', r"'\''")
}
