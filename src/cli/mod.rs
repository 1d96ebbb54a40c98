//! CLI module for the harness
//!
//! Running `adk-harness` with no arguments executes the full pipeline.
//!
//! ## Flags
//!
//! - `--list` - Print the fixed steps and the resolved root without running anything
//! - `--root <DIR>` - Run the steps from another repository root
//! - `--no-color` - Plain console output
//!
//! ## Modules
//!
//! - `pipeline_runner` - Step loop, reporter, exit-code decision
//! - `step_interfaces` - Child-process boundary
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod pipeline_runner;
pub mod step_interfaces;

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use harness_core::Step;

use crate::config::{ConfigError, HarnessConfig, resolve_root};
use crate::pipeline::define_pipeline;
use crate::version::HARNESS_VERSION;
use pipeline_runner::{ConsoleReporter, Orchestrator};
use step_interfaces::ProcessExecutor;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self { message: message.into(), exit_code }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::failure(format!("Error: {}", err))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Configure, build and test the ADK sources with CMake/CTest
#[derive(Parser, Debug)]
#[command(name = "adk-harness")]
#[command(version = HARNESS_VERSION)]
#[command(about = "Configure, build and test the ADK sources with CMake/CTest", long_about = None)]
pub struct Cli {
    /// Print the pipeline steps without running them
    #[arg(long)]
    pub list: bool,

    /// Repository root to run the steps from (default: $ADK_HARNESS_ROOT, then the harness's parent directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the parsed CLI and return the exit code.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = HarnessConfig::new().with_root(resolve_root(cli.root.as_deref())).with_color(!cli.no_color);
    config.validate()?;

    tracing::debug!(root = %config.root.display(), "resolved repository root");

    let steps = define_pipeline(&config);

    if cli.list {
        let mut out = io::stdout().lock();
        write_step_list(&mut out, &steps, &config)
            .map_err(|e| CliError::failure(format!("Error writing step list: {}", e)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let reporter = ConsoleReporter::stdout(config.color);
    let mut orchestrator = Orchestrator::new(ProcessExecutor, reporter, steps, config.root);
    Ok(orchestrator.run())
}

/// Print the numbered steps and their commands.
pub fn write_step_list<W: Write>(out: &mut W, steps: &[Step], config: &HarnessConfig) -> io::Result<()> {
    writeln!(out, "root: {}", config.root.display())?;
    for (index, step) in steps.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, step.description())?;
        writeln!(out, "   $ {}", step.command())?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
