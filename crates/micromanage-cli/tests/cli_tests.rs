use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PLAN_JSON: &str = r#"{
    "goal": "Add login",
    "groups": [
        {
            "goal": "Backend",
            "units": [
                {"goal": "Add endpoint", "developerNote": "use the session store"},
                {"goal": "Add tests"}
            ]
        },
        {"goal": "Docs", "units": [{"goal": "Document login"}]}
    ]
}"#;

/// Helper function to create a temporary data directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command bound to `temp_dir` with --no-color
fn micromanage_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("micromanage").expect("Failed to find micromanage binary");
    cmd.env_remove("DATA_DIR")
        .env_remove("DATA_FILE_NAME")
        .arg("--no-color")
        .arg("--data-dir")
        .arg(temp_dir.path());
    cmd
}

/// Defines the sample plan from stdin
fn define_sample_plan(temp_dir: &TempDir) {
    micromanage_cmd(temp_dir)
        .args(["plan", "-"])
        .write_stdin(PLAN_JSON)
        .assert()
        .success();
}

#[test]
fn test_cli_plan_from_file() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");
    fs::write(&plan_file, PLAN_JSON).unwrap();

    micromanage_cmd(&temp_dir)
        .arg("plan")
        .arg(&plan_file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Implementation plan created with 2 groups and 3 units.",
        ));

    assert!(temp_dir.path().join("workplan.json").exists());
}

#[test]
fn test_cli_plan_replaces_previous() {
    let temp_dir = create_cli_test_environment();
    define_sample_plan(&temp_dir);

    micromanage_cmd(&temp_dir)
        .args(["plan", "-"])
        .write_stdin(PLAN_JSON)
        .assert()
        .success()
        .stdout(predicate::str::contains("Previous plan has been replaced."));
}

#[test]
fn test_cli_plan_rejects_invalid_document() {
    let temp_dir = create_cli_test_environment();

    micromanage_cmd(&temp_dir)
        .args(["plan", "-"])
        .write_stdin(r#"{"goal": "Add login", "groups": []}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error (invalid_input)"));
}

#[test]
fn test_cli_track_without_plan() {
    let temp_dir = create_cli_test_environment();

    micromanage_cmd(&temp_dir)
        .arg("track")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No implementation plan found"));
}

#[test]
fn test_cli_track_shows_progress() {
    let temp_dir = create_cli_test_environment();
    define_sample_plan(&temp_dir);

    micromanage_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Add login"))
        .stdout(predicate::str::contains("- **Units**: 0/3 completed (0%)"))
        .stdout(predicate::str::contains(
            "- 0. Add endpoint (○ Not Started) - use the session store",
        ));
}

#[test]
fn test_cli_update_workflow() {
    let temp_dir = create_cli_test_environment();
    define_sample_plan(&temp_dir);

    micromanage_cmd(&temp_dir)
        .args(["update", "0", "0", "--status", "in_progress"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error (invalid_transition)"))
        .stderr(predicate::str::contains("Correct path"));

    micromanage_cmd(&temp_dir)
        .args(["update", "0", "0", "--status", "needs_refinement"])
        .assert()
        .success();

    micromanage_cmd(&temp_dir)
        .args(["update", "0", "0", "-s", "in_progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Group status: ➤ In Progress"));
}

#[test]
fn test_cli_update_group_note_with_sentinel() {
    let temp_dir = create_cli_test_environment();
    define_sample_plan(&temp_dir);

    micromanage_cmd(&temp_dir)
        .args(["update", "1", "-1", "--note", "see ticket #3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Developer note of group 1 updated."));

    micromanage_cmd(&temp_dir)
        .args(["update", "1", "-1", "--status", "completed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error (invalid_operation)"));
}

#[test]
fn test_cli_note_command() {
    let temp_dir = create_cli_test_environment();
    define_sample_plan(&temp_dir);

    micromanage_cmd(&temp_dir)
        .args(["note", "0", "reuse the auth middleware"])
        .assert()
        .success();

    micromanage_cmd(&temp_dir)
        .arg("track")
        .assert()
        .success()
        .stdout(predicate::str::contains("reuse the auth middleware"));
}

#[test]
fn test_cli_update_out_of_range_json_error() {
    let temp_dir = create_cli_test_environment();
    define_sample_plan(&temp_dir);

    let output = micromanage_cmd(&temp_dir)
        .args(["--json", "update", "5", "0", "--status", "needs_refinement"])
        .assert()
        .failure()
        .get_output()
        .clone();

    let payload: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(payload["kind"], "index_out_of_range");
    assert_eq!(payload["status"], "failed");
}

#[test]
fn test_cli_json_update_reports_reset() {
    let temp_dir = create_cli_test_environment();
    define_sample_plan(&temp_dir);

    for (group, unit, status) in [
        ("0", "0", "needs_refinement"),
        ("0", "0", "in_progress"),
        ("1", "0", "needs_refinement"),
    ] {
        micromanage_cmd(&temp_dir)
            .args(["update", group, unit, "--status", status])
            .assert()
            .success();
    }

    let output = micromanage_cmd(&temp_dir)
        .args(["--json", "update", "1", "0", "--status", "in_progress"])
        .assert()
        .success()
        .get_output()
        .clone();

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["resetCount"], 1);
    assert_eq!(result["persistenceStatus"], "saved");
    assert_eq!(result["groupStatus"], "in_progress");
}

#[test]
fn test_cli_custom_data_file_from_env() {
    let temp_dir = create_cli_test_environment();

    Command::cargo_bin("micromanage")
        .expect("Failed to find micromanage binary")
        .env("DATA_DIR", temp_dir.path())
        .env("DATA_FILE_NAME", "custom.json")
        .args(["--no-color", "plan", "-"])
        .write_stdin(PLAN_JSON)
        .assert()
        .success();

    assert!(temp_dir.path().join("custom.json").exists());
    assert!(!temp_dir.path().join("workplan.json").exists());
}
