//! Step execution I/O boundary
//!
//! The pipeline runner never touches `std::process` directly. It launches steps through a [`StepExecutor`], which
//! allows for:
//! - scripted executors in tests (no external tools required)
//! - a dry-run or recording executor
//!
//! [`ProcessExecutor`] is the real implementation.

use std::path::Path;
use std::process::{Command, Stdio};

use harness_core::{CompletionStatus, LaunchError, StepCommand};

// ============================================================================
// Step Executor Interface
// ============================================================================

/// Launch a step's command and wait for it to finish.
pub trait StepExecutor {
    /// Run `command` with `cwd` as its working directory, blocking until it exits.
    ///
    /// Returns the child's completion status, or a [`LaunchError`] if it could not be started or awaited.
    fn execute(&self, command: &StepCommand, cwd: &Path) -> Result<CompletionStatus, LaunchError>;
}

// ============================================================================
// Default Implementation
// ============================================================================

/// Child-process execution with inherited stdio.
///
/// Output goes straight to the terminal so long builds show progress as it happens.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExecutor;

impl StepExecutor for ProcessExecutor {
    fn execute(&self, command: &StepCommand, cwd: &Path) -> Result<CompletionStatus, LaunchError> {
        let (mut process, program) = build_command(command)?;

        let mut child = process
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| LaunchError::Spawn { program: program.clone(), source })?;

        let status = child.wait().map_err(|source| LaunchError::Wait { program, source })?;

        Ok(CompletionStatus::from(status))
    }
}

/// Translate a [`StepCommand`] into a `Command` plus the program name used in errors.
fn build_command(command: &StepCommand) -> Result<(Command, String), LaunchError> {
    let program = command.program().ok_or(LaunchError::EmptyCommand)?;
    let mut process = Command::new(program);
    process.args(command.arguments());
    Ok((process, program.to_string()))
}
