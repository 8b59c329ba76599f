// crates/seedcheck-cli/src/main.rs
// ============================================================================
// Module: Seedcheck CLI Entry Point
// Description: Command dispatcher for battery, scaffold, bundle, and config tasks.
// Purpose: Provide a safe, localized CLI for seed validation workflows.
// Dependencies: clap, seedcheck-bundle, seedcheck-config, seedcheck-core, serde_json, thiserror.
// ============================================================================

//! ## Overview
//! The Seedcheck CLI validates and executes case batteries, scaffolds new
//! ones, and bundles seed directories into submission records. All
//! user-facing strings are routed through the i18n catalog to prepare for
//! future localization. Inputs are untrusted and read under explicit size
//! limits.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use seedcheck_bundle::build_bundle;
use seedcheck_bundle::discover_layout;
use seedcheck_bundle::write_outputs;
use seedcheck_cli::scaffold::scaffold_battery;
use seedcheck_cli::t;
use seedcheck_config::SeedcheckConfig;
use seedcheck_core::BUILTIN_ENTRYPOINT_IDS;
use seedcheck_core::CaseBattery;
use seedcheck_core::EntrypointId;
use seedcheck_core::Harness;
use seedcheck_core::builtin_entrypoint;
use seedcheck_core::hashing::hash_canonical_json;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "seedcheck", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Case battery utilities.
    Battery {
        /// Selected battery subcommand.
        #[command(subcommand)]
        command: BatteryCommand,
    },
    /// Write a battery skeleton for a new seed.
    Scaffold(ScaffoldCommand),
    /// Bundle a seed directory into submission records.
    Bundle(BundleCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Battery subcommands.
#[derive(Subcommand, Debug)]
enum BatteryCommand {
    /// Validate a battery file against the authoring rules.
    Validate(BatteryValidateCommand),
    /// Run a battery against a built-in reference entrypoint.
    Check(BatteryCheckCommand),
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a Seedcheck configuration file.
    Validate(ConfigValidateCommand),
}

/// Arguments for `battery validate`.
#[derive(Args, Debug)]
struct BatteryValidateCommand {
    /// Path to the battery JSON file.
    #[arg(value_name = "PATH")]
    battery: PathBuf,
    /// Optional config file path (defaults to seedcheck.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `battery check`.
#[derive(Args, Debug)]
struct BatteryCheckCommand {
    /// Path to the battery JSON file.
    #[arg(value_name = "PATH")]
    battery: PathBuf,
    /// Built-in entrypoint to run (defaults to the battery's own entrypoint id).
    #[arg(long, value_name = "ENTRYPOINT")]
    entrypoint: Option<String>,
    /// Optional config file path (defaults to seedcheck.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `scaffold`.
#[derive(Args, Debug)]
struct ScaffoldCommand {
    /// Output path for the battery skeleton JSON.
    #[arg(long, value_name = "PATH")]
    output: PathBuf,
    /// Entrypoint id the skeleton targets.
    #[arg(long, value_name = "ENTRYPOINT", default_value = "sum")]
    entrypoint: String,
    /// Optional config file path (defaults to seedcheck.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `bundle`.
#[derive(Args, Debug)]
struct BundleCommand {
    /// Path to the seed directory.
    #[arg(value_name = "SEED_DIR")]
    seed_dir: PathBuf,
    /// Author name recorded in the submission record.
    #[arg(long, value_name = "NAME")]
    author: String,
    /// Output directory for the CSV record and manifest (defaults to the
    /// current directory).
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,
    /// Optional config file path (defaults to seedcheck.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `config validate`.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to seedcheck.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Battery {
            command,
        } => command_battery(command),
        Commands::Scaffold(command) => command_scaffold(&command),
        Commands::Bundle(command) => command_bundle(&command),
        Commands::Config {
            command,
        } => command_config(command),
    }
}

/// Prints the top-level help text.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Battery Commands
// ============================================================================

/// Dispatches battery subcommands.
fn command_battery(command: BatteryCommand) -> CliResult<ExitCode> {
    match command {
        BatteryCommand::Validate(command) => command_battery_validate(&command),
        BatteryCommand::Check(command) => command_battery_check(&command),
    }
}

/// Executes `battery validate`.
fn command_battery_validate(command: &BatteryValidateCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let battery = read_battery(&command.battery, &config)?;
    battery
        .validate_with_bounds(
            config.authoring.min_cases,
            config.authoring.max_cases,
            config.authoring.require_invalid_input_case,
        )
        .map_err(|err| {
            CliError::new(t!(
                "battery.invalid",
                path = command.battery.display(),
                error = err
            ))
        })?;
    let digest = hash_canonical_json(&battery)
        .map_err(|err| CliError::new(t!("battery.digest_failed", error = err)))?;
    write_stdout_line(&t!(
        "battery.validate.ok",
        count = battery.cases.len(),
        entrypoint = battery.entrypoint_id
    ))
    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line(&t!("check.digest", digest = digest))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `battery check`.
fn command_battery_check(command: &BatteryCheckCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let battery = read_battery(&command.battery, &config)?;
    let entrypoint_id = command
        .entrypoint
        .as_deref()
        .map_or_else(|| battery.entrypoint_id.clone(), EntrypointId::new);
    let Some(entrypoint) = builtin_entrypoint(entrypoint_id.as_str()) else {
        return Err(CliError::new(t!(
            "check.entrypoint.unknown",
            entrypoint = entrypoint_id,
            available = BUILTIN_ENTRYPOINT_IDS.join(", ")
        )));
    };

    let harness = Harness::new();
    let outcome = harness.run_with_bounds(
        &battery,
        entrypoint.as_ref(),
        config.authoring.min_cases,
        config.authoring.max_cases,
        config.authoring.require_invalid_input_case,
    );
    match outcome {
        Ok(report) => {
            write_stdout_line(&t!(
                "check.ok",
                count = report.passed_cases(),
                entrypoint = report.entrypoint_id
            ))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            write_stdout_line(&t!("check.digest", digest = report.battery_digest))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            write_stderr_line(&t!("check.failed", error = failure))
                .map_err(|err| CliError::new(output_error("stderr", &err)))?;
            Ok(ExitCode::FAILURE)
        }
    }
}

// ============================================================================
// SECTION: Scaffold Command
// ============================================================================

/// Executes `scaffold`.
fn command_scaffold(command: &ScaffoldCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let battery = scaffold_battery(EntrypointId::new(&command.entrypoint), &config.authoring);
    let mut bytes = serde_json::to_vec_pretty(&battery)
        .map_err(|err| CliError::new(t!("scaffold.serialize_failed", error = err)))?;
    bytes.push(b'\n');
    fs::write(&command.output, bytes).map_err(|err| {
        CliError::new(t!("scaffold.write_failed", path = command.output.display(), error = err))
    })?;
    write_stdout_line(&t!("scaffold.ok", path = command.output.display()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Bundle Command
// ============================================================================

/// Executes `bundle`.
fn command_bundle(command: &BundleCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let layout = discover_layout(&command.seed_dir, &config)
        .map_err(|err| CliError::new(t!("bundle.layout_failed", error = err)))?;
    let bundle = build_bundle(&layout, &command.author, config.limits.max_artifact_bytes)
        .map_err(|err| CliError::new(t!("bundle.build_failed", error = err)))?;

    fs::create_dir_all(&command.output_dir).map_err(|err| {
        CliError::new(t!(
            "bundle.output_dir_failed",
            path = command.output_dir.display(),
            error = err
        ))
    })?;
    let outputs = write_outputs(&bundle, &command.output_dir)
        .map_err(|err| CliError::new(t!("bundle.write_failed", error = err)))?;

    write_stdout_line(&t!("bundle.ok.csv", path = outputs.csv_path.display()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line(&t!("bundle.ok.manifest", path = outputs.manifest_path.display()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let _config = load_config(command.config.as_deref())?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Loads the Seedcheck configuration with a localized error.
fn load_config(path: Option<&Path>) -> CliResult<SeedcheckConfig> {
    SeedcheckConfig::load(path).map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

/// Reads and parses a battery file under the configured size limit.
fn read_battery(path: &Path, config: &SeedcheckConfig) -> CliResult<CaseBattery> {
    let bytes = fs::read(path).map_err(|err| {
        CliError::new(t!("battery.read_failed", path = path.display(), error = err))
    })?;
    let limit = config.limits.max_battery_bytes;
    if bytes.len() > limit {
        return Err(CliError::new(t!(
            "input.read_too_large",
            kind = t!("battery.kind.battery"),
            path = path.display(),
            size = bytes.len(),
            limit = limit
        )));
    }
    serde_json::from_slice(&bytes).map_err(|err| {
        CliError::new(t!("battery.read_failed", path = path.display(), error = err))
    })
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
