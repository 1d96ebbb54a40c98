#![forbid(unsafe_code)]
//! ADK build-and-test harness
//!
//! Drives CMake and CTest through a fixed configure → build → test pipeline, streams every child's output to the
//! console, and folds the per-step outcomes into a summary and a CI-friendly exit code.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Step failures**: A step that cannot be launched or exits non-zero is never a panic or an `Err` out of the
//!   runner; it is counted as failed and the next step runs.

pub mod cli;
pub mod config;
pub mod pipeline;
pub mod version;

pub use cli::pipeline_runner::{ConsoleReporter, Orchestrator, StepReporter, finalize, run_all, run_step};
pub use cli::step_interfaces::{ProcessExecutor, StepExecutor};
pub use cli::{CliError, CliResult, ExitCode};
pub use config::HarnessConfig;
pub use pipeline::define_pipeline;

pub use harness_core::{CompletionStatus, LaunchError, RunSummary, Step, StepCommand, StepResult};
