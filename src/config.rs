//! Harness configuration
//!
//! The step list itself is fixed; this only carries the values it is built from and the directory every step runs
//! in.

use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable that overrides the repository root.
pub const ROOT_ENV_VAR: &str = "ADK_HARNESS_ROOT";

/// CMake build-output directory, relative to the root.
pub const DEFAULT_BUILD_DIR: &str = "build";

/// CMake target holding the unit tests.
pub const DEFAULT_TARGET: &str = "adk_tests";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("repository root '{}' does not exist", .0.display())]
    RootMissing(PathBuf),

    #[error("repository root '{}' is not a directory", .0.display())]
    RootNotDirectory(PathBuf),
}

/// Harness configuration
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Directory every step is launched from
    pub root: PathBuf,
    /// Build-output directory passed to CMake and entered for CTest
    pub build_dir: String,
    /// CMake target built by the build step
    pub target: String,
    /// Whether console output uses ANSI colour
    pub color: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            build_dir: DEFAULT_BUILD_DIR.to_string(),
            target: DEFAULT_TARGET.to_string(),
            color: true,
        }
    }
}

impl HarnessConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the repository root
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Enable or disable coloured output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Check that the root is an existing directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.root.exists() {
            return Err(ConfigError::RootMissing(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(ConfigError::RootNotDirectory(self.root.clone()));
        }
        Ok(())
    }
}

/// Resolve the repository root once at start.
///
/// Order: explicit override, then `ADK_HARNESS_ROOT`, then the parent of the harness's own directory.
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return canonical_or_given(path);
    }

    if let Ok(from_env) = env::var(ROOT_ENV_VAR) {
        if !from_env.is_empty() {
            return canonical_or_given(Path::new(&from_env));
        }
    }

    default_root()
}

/// Parent of the directory the harness lives in, found from the running executable.
///
/// Falls back to the crate's source directory when the executable path is unavailable.
fn default_root() -> PathBuf {
    if let Some(root) = env::current_exe().ok().and_then(|exe| root_for_executable(&exe)) {
        return canonical_or_given(&root);
    }

    let harness_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let root = harness_dir.parent().unwrap_or(harness_dir);
    canonical_or_given(root)
}

/// Repository root for a harness executable at `exe`.
///
/// A binary inside a Cargo build tree (`target/<profile>` or `target/<profile>/deps`) belongs to the crate that
/// owns `target`; anywhere else the harness directory is the one holding the executable.
pub fn root_for_executable(exe: &Path) -> Option<PathBuf> {
    let exe_dir = exe.parent()?;

    let harness_dir = exe_dir
        .ancestors()
        .take(3)
        .find(|dir| dir.file_name().is_some_and(|name| name == "target"))
        .and_then(Path::parent)
        .unwrap_or(exe_dir);

    harness_dir.parent().map(Path::to_path_buf)
}

fn canonical_or_given(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
