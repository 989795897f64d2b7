//! Smoke tests for the productctl binary
//!
//! Help output needs no database; the end-to-end tests run against a
//! throwaway SQLite file.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn productctl(db_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("productctl").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--database-url")
        .arg(db_url);
    cmd
}

fn sqlite_url(dir: &TempDir) -> String {
    format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("products.db").display()
    )
}

// === Help Tests ===

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("productctl").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_demo_help() {
    let mut cmd = Command::cargo_bin("productctl").unwrap();
    cmd.arg("demo").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Skip the final delete"));
}

#[test]
fn test_completions_need_no_database() {
    let mut cmd = Command::cargo_bin("productctl").unwrap();
    cmd.arg("--database-url")
        .arg("nosuchdb://nowhere")
        .arg("completions")
        .arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("productctl"));
}

// === End-to-end (SQLite) ===

#[test]
fn test_demo_runs_full_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let url = sqlite_url(&dir);

    productctl(&url).arg("init").assert().success();

    productctl(&url)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("updatedSpaceShip 11.05"));

    // demo deletes what it created
    productctl(&url)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("(no products)"));
}

#[test]
fn test_add_get_update_delete() {
    let dir = tempfile::tempdir().unwrap();
    let url = sqlite_url(&dir);

    productctl(&url).arg("init").assert().success();

    let output = productctl(&url)
        .args(["add", "Widget", "2.5"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let id = String::from_utf8(output.stdout).unwrap().trim().to_string();
    assert_eq!(id.len(), 36);

    productctl(&url)
        .args(["get", &id, "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Widget\""));

    productctl(&url)
        .args(["update", &id, "--price", "3.75"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Widget 3.75"));

    productctl(&url).args(["delete", &id]).assert().success();

    productctl(&url)
        .args(["get", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("product not found"));
}

#[test]
fn test_unreachable_database_fails() {
    let dir = tempfile::tempdir().unwrap();
    // mode=ro refuses to create the file
    let url = format!(
        "sqlite://{}?mode=ro",
        dir.path().join("absent.db").display()
    );

    productctl(&url)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open product store"));
}
