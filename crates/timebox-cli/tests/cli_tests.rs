use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DATE: &str = "2025-03-14";

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn tbx_cmd(db_path: &str) -> Command {
    let mut cmd = Command::cargo_bin("tbx").expect("Failed to find tbx binary");
    cmd.args(["--no-color", "--database-file", db_path]);
    cmd
}

/// Adds a task and returns its id scraped from the confirmation line.
fn add_task(db_path: &str, title: &str) -> String {
    let output = tbx_cmd(db_path)
        .args(["task", "add", DATE, title])
        .output()
        .expect("Failed to run tbx");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout should be utf-8");
    let start = stdout.find('[').expect("confirmation should contain [id]") + 1;
    let end = stdout[start..]
        .find(']')
        .expect("confirmation should contain [id]")
        + start;
    stdout[start..end].to_string()
}

#[test]
fn test_cli_show_empty_date() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    tbx_cmd(db)
        .args(["show", DATE])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks for this date."))
        .stdout(predicate::str::contains("## Time Table"));
}

#[test]
fn test_cli_add_and_show_task() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    tbx_cmd(db)
        .args(["task", "add", DATE, "Write report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added task"));

    tbx_cmd(db)
        .args(["show", DATE])
        .assert()
        .success()
        .stdout(predicate::str::contains("Write report"));
}

#[test]
fn test_cli_big3_limit_is_a_notice_not_a_crash() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    let mut ids = Vec::new();
    for i in 0..4 {
        ids.push(add_task(db, &format!("Task {i}")));
    }
    for id in &ids[..3] {
        tbx_cmd(db)
            .args(["task", "big3", DATE, id])
            .assert()
            .success()
            .stdout(predicate::str::contains("Big3"));
    }

    // The fourth flag is rejected with a notice and exit code 0
    tbx_cmd(db)
        .args(["task", "big3", DATE, &ids[3]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error:"));
}

#[test]
fn test_cli_schedule_appears_on_timetable() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    let id = add_task(db, "Deep work");
    tbx_cmd(db)
        .args(["task", "schedule", DATE, &id, "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9 AM"));

    tbx_cmd(db)
        .args(["show", DATE])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **9 AM**: Deep work"));
}

#[test]
fn test_cli_unknown_task_is_a_noop_notice() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    tbx_cmd(db)
        .args(["task", "schedule", DATE, "missing-id", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn test_cli_json_export() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    add_task(db, "Export me");
    tbx_cmd(db)
        .args(["show", DATE, "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"timeSpan\": 60"))
        .stdout(predicate::str::contains("\"isBig3\": false"));
}

#[test]
fn test_cli_delete_forgets_tasks() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    add_task(db, "Doomed");
    tbx_cmd(db)
        .args(["delete", DATE])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));

    tbx_cmd(db)
        .args(["show", DATE])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks for this date."));
}

#[test]
fn test_cli_invalid_date_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    tbx_cmd(db)
        .args(["task", "add", "not-a-date", "Task"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("date"));
}
