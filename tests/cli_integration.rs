//! Integration tests for the `tt` CLI.
//!
//! Each test creates a temp directory with a task file, runs `tt` as a
//! subprocess, and verifies stdout and/or file contents.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn tt_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tt"))
}

const TASKS: &str = "\
Prac,Cp1404,3,None,False
Essay,English,1,1/1/2030,False
Lecture,Cp1404,2,14/10/2020,True
";

/// Write the sample task file into `root`.
fn create_test_dir(root: &Path) {
    fs::write(root.join("tasks.csv"), TASKS).unwrap();
}

/// Run `tt` with the given args in the given directory, returning (stdout, stderr, success).
fn run_tt(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(tt_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run tt");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `tt` expecting success, return stdout.
fn run_tt_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_tt(dir, args);
    if !success {
        panic!("tt {:?} failed:\nstdout: {}\nstderr: {}", args, stdout, stderr);
    }
    stdout
}

fn read_tasks(dir: &Path) -> String {
    fs::read_to_string(dir.join("tasks.csv")).unwrap()
}

/// Task names in list order
fn listed_names(dir: &Path) -> Vec<String> {
    let out = run_tt_ok(dir, &["list", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    parsed["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[test]
fn test_list_default_is_grouped_by_priority() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_dir(tmp.path());

    let out = run_tt_ok(tmp.path(), &[]);
    assert!(out.starts_with("== TaskTracker (by priority, grouped) =="));
    assert!(out.contains("1. [ ] Essay in English, priority 1, due 1/1/2030"));
    assert!(out.contains("2. [ ] Prac in Cp1404, priority 3"));
    assert!(out.contains("3. [x] Lecture in Cp1404, priority 2, due 14/10/2020 (completed)"));
    assert!(out.contains("Tasks to complete: 2"));
}

#[test]
fn test_list_without_task_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_tt_ok(tmp.path(), &["list"]);
    assert!(out.contains("No tasks yet."));
    assert!(out.contains("Tasks to complete: 0"));
    // Listing alone never writes the file
    assert!(!tmp.path().join("tasks.csv").exists());
}

#[test]
fn test_list_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_dir(tmp.path());

    let out = run_tt_ok(tmp.path(), &["list", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["sort_by"], "priority");
    assert_eq!(parsed["grouped"], true);
    assert_eq!(parsed["uncompleted"], 2);
    assert_eq!(parsed["tasks"].as_array().unwrap().len(), 3);
    assert_eq!(parsed["tasks"][1]["due_date"], "None");
}

#[test]
fn test_malformed_line_is_skipped_with_warning() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(
        tmp.path().join("tasks.csv"),
        "Essay,English,1,1/1/2030,False\nQuiz,Maths,soon,None,False\n",
    )
    .unwrap();

    let (stdout, stderr, success) = run_tt(tmp.path(), &["list"]);
    assert!(success);
    assert!(stdout.contains("Essay"));
    assert!(!stdout.contains("Quiz"));
    // One plain warning line for the whole file
    assert_eq!(stderr.lines().count(), 1, "stderr: {}", stderr);
    assert!(stderr.starts_with("warning: skipped 1 unreadable line(s)"));
    assert!(!stderr.contains('\x1b'));
}

#[test]
fn test_dropped_lines_are_logged_once_when_file_is_rewritten() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(
        tmp.path().join("tasks.csv"),
        "Essay,English,1,1/1/2030,False\nQuiz,Maths,soon,None,False\n",
    )
    .unwrap();
    let log_path = tmp.path().join(".tasktrack-recovery.log");
    let entry_count = || {
        fs::read_to_string(&log_path)
            .map(|log| log.matches("dropped lines").count())
            .unwrap_or(0)
    };

    // Reading leaves the file alone, so nothing is lost yet
    run_tt_ok(tmp.path(), &["list"]);
    run_tt_ok(tmp.path(), &["list"]);
    assert_eq!(entry_count(), 0);

    run_tt_ok(tmp.path(), &["done", "1"]);
    assert_eq!(entry_count(), 1);
    assert!(fs::read_to_string(&log_path).unwrap().contains("Quiz,Maths,soon,None,False"));
    assert_eq!(read_tasks(tmp.path()), "Essay,English,1,1/1/2030,True\n");

    let (_, stderr, _) = run_tt(tmp.path(), &["list"]);
    assert!(stderr.is_empty());
    run_tt_ok(tmp.path(), &["list"]);
    assert_eq!(entry_count(), 1);
}

// ---------------------------------------------------------------------------
// Task changes
// ---------------------------------------------------------------------------

#[test]
fn test_add_task() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_dir(tmp.path());

    let out = run_tt_ok(tmp.path(), &["add", "history essay", "history", "2", "--due", "5/11/2030"]);
    assert!(out.contains("History Essay in History, priority 2, due 5/11/2030 added."));
    assert!(out.contains("Tasks to complete: 3"));
    assert!(read_tasks(tmp.path()).contains("History Essay,History,2,5/11/2030,False\n"));
}

#[test]
fn test_add_rejects_invalid_input() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_dir(tmp.path());

    let (_, stderr, success) = run_tt(tmp.path(), &["add", "Essay", "English", "0"]);
    assert!(!success);
    assert!(stderr.contains("Priority must be > 0"));

    let (_, stderr, success) = run_tt(tmp.path(), &["add", "Essay", "English", "1", "--due", "soon"]);
    assert!(!success);
    assert!(stderr.contains("Please enter a valid date (dd/mm/yyyy) or leave blank"));

    assert_eq!(read_tasks(tmp.path()), TASKS);
}

#[test]
fn test_toggle_completion() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_dir(tmp.path());

    let out = run_tt_ok(tmp.path(), &["toggle", "1"]);
    assert!(out.contains("You completed Essay. Great work!"));
    assert!(out.contains("Tasks to complete: 1"));
    assert!(read_tasks(tmp.path()).contains("Essay,English,1,1/1/2030,True"));

    // Essay moved into the completed block; Lecture is now last
    assert_eq!(listed_names(tmp.path()), vec!["Prac", "Essay", "Lecture"]);

    let out = run_tt_ok(tmp.path(), &["toggle", "2"]);
    assert!(out.contains("You need to complete Essay. Get to work!"));
}

#[test]
fn test_done_and_undo() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_dir(tmp.path());

    run_tt_ok(tmp.path(), &["done", "2"]);
    assert!(read_tasks(tmp.path()).contains("Prac,Cp1404,3,None,True"));
    let out = run_tt_ok(tmp.path(), &["count"]);
    assert_eq!(out.trim(), "Tasks to complete: 1");

    // Prac sorts last now, behind the completed Lecture
    run_tt_ok(tmp.path(), &["undo", "3"]);
    assert!(read_tasks(tmp.path()).contains("Prac,Cp1404,3,None,False"));
}

#[test]
fn test_bad_position() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_dir(tmp.path());

    let (_, stderr, success) = run_tt(tmp.path(), &["done", "9"]);
    assert!(!success);
    assert!(stderr.contains("no task at position 9"));
}

#[test]
fn test_priority_adjustment() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_dir(tmp.path());

    let out = run_tt_ok(tmp.path(), &["priority", "2", "-1"]);
    assert!(out.contains("Prac is now priority 2."));
    let out = run_tt_ok(tmp.path(), &["priority", "1", "-5"]);
    assert!(out.contains("Essay is now priority 1."));
}

#[test]
fn test_remove_and_clean() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_dir(tmp.path());

    let out = run_tt_ok(tmp.path(), &["remove", "2"]);
    assert!(out.contains("Prac in Cp1404, priority 3 removed."));

    let out = run_tt_ok(tmp.path(), &["clean"]);
    assert!(out.contains("All completed tasks removed."));
    assert_eq!(read_tasks(tmp.path()), "Essay,English,1,1/1/2030,False\n");

    let out = run_tt_ok(tmp.path(), &["clean"]);
    assert!(out.contains("No completed tasks to remove."));
}

// ---------------------------------------------------------------------------
// View changes
// ---------------------------------------------------------------------------

#[test]
fn test_sort_reverse_and_group_persist() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_dir(tmp.path());

    let out = run_tt_ok(tmp.path(), &["sort", "name"]);
    assert!(out.starts_with("== TaskTracker (by name, grouped) =="));
    assert_eq!(listed_names(tmp.path()), vec!["Essay", "Prac", "Lecture"]);

    run_tt_ok(tmp.path(), &["group"]);
    assert_eq!(listed_names(tmp.path()), vec!["Essay", "Lecture", "Prac"]);

    run_tt_ok(tmp.path(), &["reverse"]);
    assert_eq!(listed_names(tmp.path()), vec!["Prac", "Lecture", "Essay"]);

    run_tt_ok(tmp.path(), &["sort", "due_date"]);
    assert_eq!(listed_names(tmp.path()), vec!["Essay", "Lecture", "Prac"]);
}

#[test]
fn test_sort_rejects_unknown_key() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_dir(tmp.path());

    let (_, stderr, success) = run_tt(tmp.path(), &["sort", "colour"]);
    assert!(!success);
    assert!(stderr.contains("unknown sort key"));

    let (_, _, success) = run_tt(tmp.path(), &["sort", "completion"]);
    assert!(!success);
}

#[test]
fn test_settings_reject_completion_sort() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_dir(tmp.path());
    fs::write(tmp.path().join("tasktrack.toml"), "[display]\nsort_by = \"completion\"\n").unwrap();

    let (_, stderr, success) = run_tt(tmp.path(), &["list"]);
    assert!(!success);
    assert!(stderr.contains("display.sort_by cannot be completion"));
}

#[test]
fn test_settings_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("school.csv"), TASKS).unwrap();
    fs::write(
        tmp.path().join("tasktrack.toml"),
        "[tasks]\nfile = \"school.csv\"\n\n[display]\ntitle = \"Semester 2\"\nsort_by = \"subject\"\ngrouped = false\n",
    )
    .unwrap();

    let out = run_tt_ok(tmp.path(), &["list"]);
    assert!(out.starts_with("== Semester 2 (by subject) =="));
    assert!(out.contains("1. [x] Lecture"));
    assert!(out.contains("2. [ ] Prac"));
}

#[test]
fn test_project_dir_flag() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_dir(tmp.path());
    let elsewhere = tempfile::TempDir::new().unwrap();

    let dir = tmp.path().to_str().unwrap();
    let out = run_tt_ok(elsewhere.path(), &["-C", dir, "count"]);
    assert_eq!(out.trim(), "Tasks to complete: 2");
}
