//! Running pass/fail tally for one harness invocation.

use crate::outcome::StepResult;

/// Passed/failed counters across every executed step.
///
/// Created zeroed at the start of a run, updated once per step, read once at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one step result into the tally.
    pub fn record(&mut self, result: StepResult) {
        if result.success {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Number of steps recorded so far.
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}
