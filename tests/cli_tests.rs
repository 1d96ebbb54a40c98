//! Tests that drive the compiled `adk-harness` binary.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_adk-harness");

/// Fresh empty directory with no CMakeLists.txt, so configure and build fail whether or not CMake is installed.
fn empty_root(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("adk-harness-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn list_prints_fixed_steps_and_exits_zero() {
    let root = empty_root("list");
    let output = Command::new(BIN).arg("--list").arg("--root").arg(&root).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1. Configure CMake build"));
    assert!(stdout.contains("$ cmake -B build -S ."));
    assert!(stdout.contains("2. Build test suite"));
    assert!(stdout.contains("$ cmake --build build --target adk_tests"));
    assert!(stdout.contains("3. Run tests"));
    assert!(!stdout.contains("📌"), "--list must not run any step");

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn missing_root_exits_one_before_running() {
    let output = Command::new(BIN).arg("--root").arg("/definitely/not/a/real/adk/root").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("📌"));
}

#[test]
fn unknown_argument_is_usage_error() {
    let output = Command::new(BIN).arg("--retry").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[cfg(unix)]
#[test]
fn full_run_in_empty_root_fails_configure_and_build_but_not_tests() {
    let root = empty_root("run");
    let output = Command::new(BIN).arg("--no-color").arg("--root").arg(&root).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ADK Unit Test Compilation & Validation"));
    assert!(stdout.contains("❌ FAILED: Configure CMake build"));
    assert!(stdout.contains("❌ FAILED: Build test suite"));
    assert!(stdout.contains("✅ SUCCESS: Run tests"));
    assert!(stdout.contains("📊 Results: 1 passed, 2 failed"));
    assert!(!stdout.contains("\x1b["), "--no-color output must be plain");

    let _ = fs::remove_dir_all(&root);
}

#[cfg(unix)]
#[test]
fn relocated_binary_uses_its_own_location_as_root() {
    let repo = empty_root("relocated");
    let tools = repo.join("tools");
    fs::create_dir_all(&tools).unwrap();
    let copied = tools.join("adk-harness");
    fs::copy(BIN, &copied).unwrap();

    let output = Command::new(&copied)
        .arg("--list")
        .env_remove("ADK_HARNESS_ROOT")
        .current_dir(env::temp_dir())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = format!("root: {}\n", repo.canonicalize().unwrap().display());
    assert!(stdout.starts_with(&expected), "expected {:?}, got {:?}", expected, stdout);

    let _ = fs::remove_dir_all(&repo);
}
