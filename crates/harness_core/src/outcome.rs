//! Step outcomes: how a child finished, or why it never started.

use std::io;

use thiserror::Error;

/// Errors that prevent a step's command from running to completion.
///
/// These never abort a run; the runner reports them and counts the step as failed.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("empty command")]
    EmptyCommand,

    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed waiting for `{program}`: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Completion status of a child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionStatus {
    /// Exit code, or `None` when the child was terminated by a signal.
    pub code: Option<i32>,
}

impl CompletionStatus {
    pub const SUCCESS: CompletionStatus = CompletionStatus { code: Some(0) };

    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Terminated without an exit code (e.g. killed by a signal).
    pub fn terminated() -> Self {
        Self { code: None }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for CompletionStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self { code: status.code() }
    }
}

/// Pass/fail classification of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    pub success: bool,
}

impl StepResult {
    pub const PASSED: StepResult = StepResult { success: true };
    pub const FAILED: StepResult = StepResult { success: false };

    /// Classify an executor outcome. Launch failures are always failures.
    pub fn from_outcome(outcome: &Result<CompletionStatus, LaunchError>) -> Self {
        match outcome {
            Ok(status) => StepResult { success: status.success() },
            Err(_) => StepResult::FAILED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_zero_is_success() {
        assert!(CompletionStatus::from_code(0).success());
        assert!(!CompletionStatus::from_code(1).success());
        assert!(!CompletionStatus::from_code(-1).success());
        assert!(!CompletionStatus::terminated().success());
    }

    #[test]
    fn test_launch_error_is_failure() {
        let outcome = Err(LaunchError::EmptyCommand);
        assert_eq!(StepResult::from_outcome(&outcome), StepResult::FAILED);
    }

    #[test]
    fn test_nonzero_completion_is_failure() {
        let outcome = Ok(CompletionStatus::from_code(2));
        assert_eq!(StepResult::from_outcome(&outcome), StepResult::FAILED);
    }

    #[test]
    fn test_zero_completion_is_success() {
        assert_eq!(StepResult::from_outcome(&Ok(CompletionStatus::SUCCESS)), StepResult::PASSED);
    }

    #[test]
    fn test_spawn_error_message_names_program() {
        let err = LaunchError::Spawn {
            program: "definitely-not-here".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(err.to_string(), "failed to launch `definitely-not-here`: No such file or directory");
    }

    #[test]
    fn test_wait_error_is_failure_and_keeps_source() {
        use std::error::Error as _;

        let err = LaunchError::Wait {
            program: "ctest".to_string(),
            source: io::Error::new(io::ErrorKind::Interrupted, "interrupted"),
        };
        assert_eq!(err.to_string(), "failed waiting for `ctest`: interrupted");
        assert!(err.source().is_some());
        assert_eq!(StepResult::from_outcome(&Err(err)), StepResult::FAILED);
    }
}
