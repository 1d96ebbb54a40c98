//! Provide the data model for the adk-harness pipeline runner.
//!
//! This crate is intentionally small and dependency-light. It describes *what* a pipeline step is and how its
//! outcome folds into a run summary, without launching anything itself.
//!
//! ## Notes
//!
//! - **No process spawning** and no global state: the runner in the `adk-harness` crate owns all IO.
//! - `LaunchError` lives here so executors and their test doubles agree on a single error type.

pub mod outcome;
pub mod step;
pub mod summary;

pub use outcome::{CompletionStatus, LaunchError, StepResult};
pub use step::{SHELL, Step, StepCommand};
pub use summary::RunSummary;
