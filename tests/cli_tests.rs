//! Binary-level tests: exit codes, messages, fixed paths
#![allow(deprecated)] // assert_cmd::Command::cargo_bin

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CHART: &str = "avg_revoc_time_vs_nb_delegations.png";

fn revoc_plot(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("revoc-plot").unwrap();
    cmd.current_dir(cwd)
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0");
    cmd
}

/// `<tmp>/plotting` as the working directory, with `json` (if any) written to
/// `<tmp>/results/revocation.json`.
fn layout(json: Option<&str>) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let work = dir.path().join("plotting");
    std::fs::create_dir_all(&work).unwrap();
    if let Some(json) = json {
        let results = dir.path().join("results");
        std::fs::create_dir_all(&results).unwrap();
        std::fs::write(results.join("revocation.json"), json).unwrap();
    }
    (dir, work)
}

#[test]
fn test_fixed_paths_are_used() {
    let (_dir, work) = layout(Some(
        r#"[{"avg_time": 10}, {"avg_time": 20}, {"avg_time": 30}]"#,
    ));

    revoc_plot(&work)
        .assert()
        .success()
        .stdout(predicate::str::contains("y = 10.0000x + 0.0000"))
        .stdout(predicate::str::contains(CHART));

    assert!(work.join(CHART).is_file());
}

#[test]
fn test_arguments_do_not_change_paths() {
    let (_dir, work) = layout(Some(r#"[{"avg_time": 1.0}, {"avg_time": 2.0}]"#));

    revoc_plot(&work)
        .args(["--output", "elsewhere.png"])
        .assert()
        .success();

    assert!(work.join(CHART).is_file());
    assert!(!work.join("elsewhere.png").exists());
}

#[test]
fn test_missing_input_fails() {
    let (_dir, work) = layout(None);

    revoc_plot(&work)
        .assert()
        .failure()
        .stderr(predicate::str::contains("revocation.json"));

    assert!(!work.join(CHART).exists());
}

#[test]
fn test_single_record_fails_without_output() {
    let (_dir, work) = layout(Some(r#"[{"avg_time": 3.5}]"#));

    revoc_plot(&work)
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 records"));

    assert!(!work.join(CHART).exists());
}

#[test]
fn test_malformed_input_fails_without_output() {
    let (_dir, work) = layout(Some(r#"[{"avg_time": 1.0}, {"min_time": 2.0}]"#));

    revoc_plot(&work)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid data"))
        .stderr(predicate::str::contains("avg_time"));

    assert!(!work.join(CHART).exists());
}

#[test]
fn test_overflowing_values_fail_without_output() {
    let (_dir, work) = layout(Some(r#"[{"avg_time": 1e308}, {"avg_time": -1e308}]"#));

    revoc_plot(&work)
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of plottable range"));

    assert!(!work.join(CHART).exists());
}
