use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const NOTEBOOK: &str = r#"
run_id: "cli_test"
distributions:
  - name: "coin"
    kind: "marginal"
    entries:
      - { outcome: "heads", p: "θ" }
      - { outcome: "tails", p: "1-θ" }
  - name: "given"
    kind: "conditional"
    entries:
      - { x: "a1", y: "b1", p: "θ1|1" }
"#;

fn write_notebook(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("notebook.yaml");
    fs::write(&path, contents).expect("write notebook");
    (dir, path)
}

#[test]
fn renders_notebook_to_stdout() {
    let (_dir, path) = write_notebook(NOTEBOOK);
    Command::cargo_bin("probdist")
        .expect("binary built")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[coin] Marginal distribution, 2 entries"))
        .stdout(predicate::str::contains("θ1|1, (x1) = (a1) | (y1) = (b1)"));
}

#[test]
fn only_flag_limits_output() {
    let (_dir, path) = write_notebook(NOTEBOOK);
    Command::cargo_bin("probdist")
        .expect("binary built")
        .arg("--config")
        .arg(&path)
        .args(["--only", "given"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[given]"))
        .stdout(predicate::str::contains("[coin]").not());
}

#[test]
fn json_flag_prints_snapshots() {
    let (_dir, path) = write_notebook(NOTEBOOK);
    Command::cargo_bin("probdist")
        .expect("binary built")
        .arg("--config")
        .arg(&path)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"conditional\""));
}

#[test]
fn validate_only_skips_rendering() {
    let (_dir, path) = write_notebook(NOTEBOOK);
    Command::cargo_bin("probdist")
        .expect("binary built")
        .arg("--config")
        .arg(&path)
        .arg("--validate-only")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Validation-only mode"));
}

#[test]
fn invalid_notebook_reports_field() {
    let (_dir, path) = write_notebook(&NOTEBOOK.replace("{ outcome: \"tails\"", "{ outcome: [\"tails\"]"));
    Command::cargo_bin("probdist")
        .expect("binary built")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "distributions[coin].entries[1].outcome",
        ));
}

#[test]
fn missing_notebook_fails() {
    let dir = tempdir().expect("temp dir");
    Command::cargo_bin("probdist")
        .expect("binary built")
        .arg("--config")
        .arg(dir.path().join("absent.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config"));
}
