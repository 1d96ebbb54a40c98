//! The fixed configure → build → test pipeline.
//!
//! ## Steps
//!
//! 1. Configure CMake into the build directory from the repository root.
//! 2. Build the unit-test target.
//! 3. Run CTest inside the build directory. The `|| echo` fallback makes this step succeed even when CTest reports
//!    failures, so the exit code only reflects configure and build.

use harness_core::{Step, StepCommand};

use crate::config::HarnessConfig;

/// Banner printed before the first step.
pub const PIPELINE_TITLE: &str = "ADK Unit Test Compilation & Validation";

/// Notice printed by the test step's shell fallback.
pub const TESTS_COMPLETED_NOTICE: &str = "Tests completed";

/// Build the ordered step list.
pub fn define_pipeline(config: &HarnessConfig) -> Vec<Step> {
    vec![
        Step::new(StepCommand::argv(["cmake", "-B", config.build_dir.as_str(), "-S", "."]), "Configure CMake build"),
        Step::new(
            StepCommand::argv(["cmake", "--build", config.build_dir.as_str(), "--target", config.target.as_str()]),
            "Build test suite",
        ),
        Step::new(test_command(&config.build_dir, "ctest --verbose"), "Run tests"),
    ]
}

/// Run `test_cmd` inside `build_dir`, absorbing any failure with a completion notice.
pub fn test_command(build_dir: &str, test_cmd: &str) -> StepCommand {
    StepCommand::shell(format!("cd {build_dir} && {test_cmd} || echo '{TESTS_COMPLETED_NOTICE}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_order_and_descriptions() {
        let steps = define_pipeline(&HarnessConfig::default());
        let descriptions: Vec<&str> = steps.iter().map(Step::description).collect();
        assert_eq!(descriptions, ["Configure CMake build", "Build test suite", "Run tests"]);
    }

    #[test]
    fn test_pipeline_commands() {
        let steps = define_pipeline(&HarnessConfig::default());
        assert_eq!(steps[0].command().to_string(), "cmake -B build -S .");
        assert_eq!(steps[1].command().to_string(), "cmake --build build --target adk_tests");
        assert_eq!(steps[2].command().to_string(), "cd build && ctest --verbose || echo 'Tests completed'");
    }

    #[test]
    fn test_configure_and_build_are_argv_test_is_shell() {
        let steps = define_pipeline(&HarnessConfig::default());
        assert!(matches!(steps[0].command(), StepCommand::Argv(_)));
        assert!(matches!(steps[1].command(), StepCommand::Argv(_)));
        assert!(matches!(steps[2].command(), StepCommand::Shell(_)));
    }
}
