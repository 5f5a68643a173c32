//! End-to-end tests for the `cueimports` binary.
//!
//! Each test runs the built binary with a fixture directory as its working
//! directory and checks stdout and the exit status.

use std::path::PathBuf;
use std::process::{Command, Output};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn run_in(case: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cueimports"))
        .args(args)
        .current_dir(fixtures_dir().join(case))
        .output()
        .expect("failed to run cueimports")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

#[test]
fn test_listing_mode() {
    let output = run_in("mixed_imports", &[]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Detected imports:\n- another/pkg/v2\n- math\n- strings\n"
    );
}

#[test]
fn test_listing_mode_no_imports() {
    let output = run_in("empty_file", &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Detected imports:\n");
}

#[test]
fn test_listing_skips_unreadable_file() {
    let output = run_in("layout", &[]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Detected imports:\n- k8s.io/api/core/v1\n- list\n- strings\n"
    );

    // The skipped file is reported on stderr
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken.cue"));
}

#[test]
fn test_listing_mode_mixed_case_order() {
    let output = run_in("mixed_case", &[]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Detected imports:\n- Zed/pkg\n- _internal/pkg\n- abc/pkg\n"
    );
}

#[test]
fn test_template_mode() {
    let template = fixtures_dir().join("templates/imports.tmpl");
    let output = run_in(
        "mixed_imports",
        &["--template", template.to_str().unwrap()],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Imports: another/pkg/v2, math, strings");
}

#[test]
fn test_empty_template_argument_lists() {
    let output = run_in("single_import", &["--template", ""]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Detected imports:\n- k8s.io/api/core/v1\n");
}

#[test]
fn test_missing_template_fails() {
    let output = run_in("single_import", &["--template", "nonexistent.txt"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    // The fatal error is logged on stderr with the offending path
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR"));
    assert!(stderr.contains("nonexistent.txt"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = run_in("single_import", &["--recursive"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
