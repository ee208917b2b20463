use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hotel(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hotel").unwrap();
    cmd.env("HOTEL_CLI_DATA_DIR", data_dir.path())
        .env_remove("HOTEL_OPERATOR_ID")
        .env_remove("HOTEL_LOG");
    cmd
}

#[test]
fn menu_scenario_saves_and_reads_allocation() {
    let temp = TempDir::new().unwrap();

    hotel(&temp)
        .write_stdin("1\n101\nDeluxe\n100.0\n3\n101\nAlice\n7\n8\n4\n101\n5\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Room added successfully."))
        .stdout(predicate::str::contains("Room 101 allocated to Alice."))
        .stdout(predicate::str::contains(
            "Room 101 | Type: Deluxe | Price: 100 | Guest: Alice | Allocated: True",
        ))
        .stdout(predicate::str::contains("Room 101 de-allocated from Alice."))
        .stdout(predicate::str::contains("No room allocations yet."))
        .stdout(predicate::str::contains("Exiting system..."));

    let snapshot = fs::read_to_string(temp.path().join("lhms_12345.txt")).unwrap();
    assert!(snapshot.starts_with("--- Room Allocation Snapshot @ "));
    assert!(snapshot.contains("Guest: Alice"));
}

#[test]
fn unallocated_rooms_never_reach_snapshot() {
    let temp = TempDir::new().unwrap();

    hotel(&temp)
        .write_stdin("1\n101\nDeluxe\n100\n1\n102\nSingle\n60\n3\n102\nBob\n7\n9\n")
        .assert()
        .success();

    let snapshot = fs::read_to_string(temp.path().join("lhms_12345.txt")).unwrap();
    assert!(snapshot.contains("Room 102 | Type: Single | Price: 60 | Guest: Bob | Allocated: True"));
    assert!(!snapshot.contains("Room 101"));
}

#[test]
fn operator_flag_changes_file_names() {
    let temp = TempDir::new().unwrap();

    hotel(&temp)
        .args(["--operator", "S42", "menu"])
        .write_stdin("7\n9\n")
        .assert()
        .success();

    assert!(temp.path().join("lhms_S42.txt").exists());
    assert!(!temp.path().join("lhms_12345.txt").exists());
}

#[test]
fn snapshot_show_without_file() {
    let temp = TempDir::new().unwrap();

    hotel(&temp)
        .args(["snapshot", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No snapshot found"));
}

#[test]
fn backup_rotate_moves_snapshot() {
    let temp = TempDir::new().unwrap();
    let snapshot = temp.path().join("lhms_12345.txt");

    hotel(&temp)
        .args(["backup", "rotate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No file to backup."));

    fs::write(&snapshot, "--- Room Allocation Snapshot @ x ---\nRoom 7 | Type: A | Price: 1 | Guest: G | Allocated: True\n").unwrap();

    hotel(&temp)
        .args(["backup", "rotate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup completed. Original file cleared."));

    assert_eq!(fs::read_to_string(&snapshot).unwrap(), "");

    hotel(&temp)
        .args(["backup", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Backup @ "))
        .stdout(predicate::str::contains("Room 7 | Type: A"));
}

#[test]
fn init_then_config_reports_settings() {
    let temp = TempDir::new().unwrap();

    hotel(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    no"));

    hotel(&temp).arg("init").assert().success();
    assert!(temp.path().join("config.json").exists());

    hotel(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    yes"))
        .stdout(predicate::str::contains("Operator id:      12345"))
        .stdout(predicate::str::contains("lhms_12345_backup.txt"));
}

#[test]
fn invalid_operator_id_fails() {
    let temp = TempDir::new().unwrap();

    hotel(&temp)
        .args(["--operator", "../x", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("operator_id"));
}
