//! Pipeline runner implementation
//!
//! ## StepReporter Trait
//!
//! The runner uses a `StepReporter` trait to separate console output from execution. `ConsoleReporter` prints the
//! banner/separator layout CI logs expect; tests swap in their own writer or reporter.
//!
//! ## I/O Boundaries
//!
//! Child processes are launched through the `StepExecutor` trait in `step_interfaces.rs`, so the loop below can be
//! driven by scripted outcomes as well as real processes.
//!
//! ## Flow
//!
//! Every step always runs, in order. A launch failure or non-zero exit only marks that step as failed; the next
//! step still starts. The summary is threaded through the loop and read once by [`finalize`].

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use harness_core::{LaunchError, RunSummary, Step, StepResult};

use super::ExitCode;
use super::step_interfaces::StepExecutor;
use crate::pipeline::PIPELINE_TITLE;

const STEP_RULE_WIDTH: usize = 50;
const BANNER_RULE_WIDTH: usize = 60;

// ============================================================================
// Step Reporter Trait
// ============================================================================

/// Trait for reporting pipeline progress.
pub trait StepReporter {
    /// Called once before the first step
    fn on_run_start(&mut self, _title: &str) {}

    /// Called right before a step's command is launched
    fn on_step_start(&mut self, step: &Step);

    /// Called when a step's command could not be launched or awaited
    fn on_launch_error(&mut self, step: &Step, error: &LaunchError);

    /// Called after a step finishes, with its classification
    fn on_step_complete(&mut self, step: &Step, result: StepResult);

    /// Called once after every step has run
    fn on_run_complete(&mut self, summary: &RunSummary);
}

/// Default console reporter
pub struct ConsoleReporter<W: Write> {
    out: W,
    color: bool,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter writing to the process's stdout, shared with child output.
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Consume the reporter and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }

    // Best-effort, like println!.
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }
}

impl<W: Write> StepReporter for ConsoleReporter<W> {
    fn on_run_start(&mut self, title: &str) {
        let rule = "=".repeat(BANNER_RULE_WIDTH);
        self.line("");
        self.line(&rule);
        let heading = self.paint("1", &format!("     {}", title));
        self.line(&heading);
        self.line(&rule);
    }

    fn on_step_start(&mut self, step: &Step) {
        let rule = "=".repeat(STEP_RULE_WIDTH);
        self.line("");
        self.line(&rule);
        let heading = self.paint("1", &format!("📌 {}", step.description()));
        self.line(&heading);
        self.line(&rule);
        self.line(&format!("$ {}", step.command()));
        self.line("");
        // The child shares our stdout; everything above must land before its first byte.
        let _ = self.out.flush();
    }

    fn on_launch_error(&mut self, _step: &Step, error: &LaunchError) {
        let text = self.paint("31", &format!("❌ Error: {}", error));
        self.line(&text);
    }

    fn on_step_complete(&mut self, step: &Step, result: StepResult) {
        let text = if result.success {
            self.paint("32", &format!("✅ SUCCESS: {}", step.description()))
        } else {
            self.paint("31", &format!("❌ FAILED: {}", step.description()))
        };
        self.line(&text);
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        let rule = "=".repeat(BANNER_RULE_WIDTH);
        let color = if summary.is_success() { "1;32" } else { "1;31" };
        self.line("");
        self.line(&rule);
        let results = self.paint(color, &format!("📊 Results: {} passed, {} failed", summary.passed, summary.failed));
        self.line(&results);
        self.line(&rule);
        self.line("");
        let _ = self.out.flush();
    }
}

// ============================================================================
// Orchestration
// ============================================================================

/// Run one step and classify it.
///
/// Launch failures are reported through `reporter` and become a failed result; they never propagate.
pub fn run_step<E, R>(executor: &E, reporter: &mut R, step: &Step, root: &Path) -> StepResult
where
    E: StepExecutor + ?Sized,
    R: StepReporter + ?Sized,
{
    let start = Instant::now();
    let outcome = executor.execute(step.command(), root);
    let result = StepResult::from_outcome(&outcome);

    match &outcome {
        Ok(status) => {
            tracing::info!(
                step = step.description(),
                exit_code = ?status.code,
                success = result.success,
                elapsed = ?start.elapsed(),
                "step finished"
            );
        }
        Err(error) => {
            tracing::warn!(step = step.description(), %error, "step could not be launched");
            reporter.on_launch_error(step, error);
        }
    }

    result
}

/// Run every step in order, never stopping early, and return the tally.
#[tracing::instrument(skip_all, fields(step_count = steps.len(), root = %root.display()))]
pub fn run_all<E, R>(executor: &E, reporter: &mut R, steps: &[Step], root: &Path) -> RunSummary
where
    E: StepExecutor + ?Sized,
    R: StepReporter + ?Sized,
{
    let mut summary = RunSummary::new();

    for (index, step) in steps.iter().enumerate() {
        tracing::debug!(index, command = %step.command(), "starting step");
        reporter.on_step_start(step);

        let result = run_step(executor, reporter, step, root);
        reporter.on_step_complete(step, result);
        if !result.success {
            tracing::warn!(index, step = step.description(), "step failed");
        }

        summary.record(result);
    }

    summary
}

/// Print the final tally and turn it into the process exit code.
pub fn finalize<R: StepReporter + ?Sized>(reporter: &mut R, summary: &RunSummary) -> ExitCode {
    reporter.on_run_complete(summary);
    if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// A fixed step list bound to an executor, a reporter and a root directory.
pub struct Orchestrator<E, R> {
    executor: E,
    reporter: R,
    steps: Vec<Step>,
    root: PathBuf,
}

impl<E: StepExecutor, R: StepReporter> Orchestrator<E, R> {
    pub fn new(executor: E, reporter: R, steps: Vec<Step>, root: impl Into<PathBuf>) -> Self {
        Self { executor, reporter, steps, root: root.into() }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Run every step without printing the banner or the final tally.
    pub fn run_all(&mut self) -> RunSummary {
        run_all(&self.executor, &mut self.reporter, &self.steps, &self.root)
    }

    /// Banner, every step, final tally. Returns the process exit code.
    pub fn run(&mut self) -> ExitCode {
        self.reporter.on_run_start(PIPELINE_TITLE);
        let summary = self.run_all();
        finalize(&mut self.reporter, &summary)
    }
}

// ============================================================================
// Tests
// ============================================================================
