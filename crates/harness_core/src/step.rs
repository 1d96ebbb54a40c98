//! Pipeline steps and the commands they launch.

use std::fmt;

/// Interpreter for `Shell` commands and the flag that passes it a command line.
#[cfg(windows)]
pub const SHELL: (&str, &str) = ("cmd", "/C");
#[cfg(not(windows))]
pub const SHELL: (&str, &str) = ("sh", "-c");

/// How a step's command is launched.
///
/// `Shell` strings go through the platform shell, so `&&`, `||` and `cd` work. `Argv` tokens are passed to the
/// program directly with no shell interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepCommand {
    /// A single shell-interpreted command line.
    Shell(String),
    /// Program followed by its arguments.
    Argv(Vec<String>),
}

impl StepCommand {
    /// Build a shell command line.
    pub fn shell(line: impl Into<String>) -> Self {
        StepCommand::Shell(line.into())
    }

    /// Build an argument-list command from any iterable of tokens.
    pub fn argv<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StepCommand::Argv(tokens.into_iter().map(Into::into).collect())
    }

    /// The executable that gets launched: the platform shell for `Shell`, the first token for `Argv`.
    ///
    /// `None` for an empty `Argv`.
    pub fn program(&self) -> Option<&str> {
        match self {
            StepCommand::Shell(_) => Some(SHELL.0),
            StepCommand::Argv(tokens) => tokens.first().map(String::as_str),
        }
    }

    /// Arguments passed to [`program`](Self::program).
    pub fn arguments(&self) -> Vec<&str> {
        match self {
            StepCommand::Shell(line) => vec![SHELL.1, line.as_str()],
            StepCommand::Argv(tokens) => tokens.iter().skip(1).map(String::as_str).collect(),
        }
    }
}

impl fmt::Display for StepCommand {
    /// Render the literal command echoed before a step runs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepCommand::Shell(line) => f.write_str(line),
            StepCommand::Argv(tokens) => f.write_str(&tokens.join(" ")),
        }
    }
}

/// One unit of the pipeline: a command plus a human-readable description.
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    command: StepCommand,
    description: String,
}

impl Step {
    pub fn new(command: StepCommand, description: impl Into<String>) -> Self {
        Self { command, description: description.into() }
    }

    pub fn command(&self) -> &StepCommand {
        &self.command
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
