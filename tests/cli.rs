//! Integration tests for the ideagrid command line

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const CS_SHEET: &str = "x\nSupervisor,Research Area,Idea 1,Idea 2\nDr. A,AI,Chatbot,\n";

fn run_command(dir: &Path, args: &[&str]) -> (String, String, i32) {
    // Tests must not depend on a user's ~/.config/ideagrid/config.toml.
    let config = dir.join("config.toml");
    if !config.exists() {
        std::fs::write(&config, "").expect("Failed to write config");
    }

    let output = Command::new(env!("CARGO_BIN_EXE_ideagrid"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn write_sheet(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().to_string()
}

fn json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim()).expect("stdout is not JSON")
}

#[test]
fn test_extract_detects_header_below_banner() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(&dir, "cs.csv", CS_SHEET);
    let (stdout, _, code) = run_command(dir.path(), &["extract", &sheet, "-d", "CS"]);
    assert_eq!(code, 0);
    assert_eq!(
        stdout.trim(),
        r#"{"success":true,"data":[{"id":"CS-0-0","supervisor":"Dr. A","interested_area":"AI","project_idea":"Chatbot","department":"CS"}]}"#
    );
}

#[test]
fn test_extract_twice_gives_same_output() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(&dir, "cs.csv", CS_SHEET);
    let (first, _, _) = run_command(dir.path(), &["extract", &sheet, "-d", "CS"]);
    let (second, _, _) = run_command(dir.path(), &["extract", &sheet, "-d", "CS"]);
    assert_eq!(first, second);
}

#[test]
fn test_extract_header_only_sheet() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(&dir, "empty.csv", "Supervisor,Area,Idea\n");
    let (stdout, _, code) = run_command(dir.path(), &["extract", &sheet, "-d", "CS"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), r#"{"success":true,"data":[]}"#);
}

#[test]
fn test_inspect_reports_roles() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(&dir, "cs.csv", CS_SHEET);
    let (stdout, _, code) = run_command(dir.path(), &["inspect", &sheet]);
    assert_eq!(code, 0);
    let value = json(&stdout);
    assert_eq!(value["data"]["header_row"], 1);
    assert_eq!(value["data"]["score"], 3);
    assert_eq!(value["data"]["roles"]["supervisor"], "Supervisor");
    assert_eq!(value["data"]["roles"]["area"], "Research Area");
    // Idea 2 is blank in the first data row, so it is not an idea column.
    assert_eq!(value["data"]["roles"]["ideas"], serde_json::json!(["Idea 1"]));
    assert_eq!(
        value["data"]["headers"],
        serde_json::json!(["Supervisor", "Research Area", "Idea 1", "Idea 2"])
    );
}

#[test]
fn test_upload_then_projects() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("bucket");
    let store = store.to_string_lossy().to_string();
    let sheet = write_sheet(&dir, "cs ideas.csv", CS_SHEET);

    let (stdout, _, code) =
        run_command(dir.path(), &["--store", &store, "upload", &sheet, "-d", "CS"]);
    assert_eq!(code, 0);
    let receipt = json(&stdout);
    assert_eq!(receipt["data"]["department"], "CS");
    assert_eq!(receipt["data"]["file_name"], "cs_ideas.csv");

    let (stdout, _, code) = run_command(dir.path(), &["--store", &store, "projects", "-d", "CS"]);
    assert_eq!(code, 0);
    let projects = json(&stdout);
    assert_eq!(projects["data"][0]["project_idea"], "Chatbot");
    assert_eq!(projects["data"][0]["id"], "CS-0-0");
}

#[test]
fn test_projects_for_department_without_uploads() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("bucket").to_string_lossy().to_string();
    let (stdout, _, code) = run_command(dir.path(), &["--store", &store, "projects", "-d", "ME"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), r#"{"success":true,"data":[]}"#);
}

#[test]
fn test_projects_requires_department() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("bucket").to_string_lossy().to_string();
    let (stdout, _, code) = run_command(dir.path(), &["--store", &store, "projects"]);
    assert_eq!(code, 1);
    assert_eq!(
        stdout.trim(),
        r#"{"success":false,"message":"Department is required"}"#
    );
}

#[test]
fn test_upload_rejects_other_files() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("bucket").to_string_lossy().to_string();
    let file = write_sheet(&dir, "notes.txt", "hello");
    let (stdout, _, code) = run_command(dir.path(), &["--store", &store, "upload", &file]);
    assert_eq!(code, 1);
    assert_eq!(json(&stdout)["success"], false);
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_command(dir.path(), &["extract", "/nonexistent/ideas.csv"]);
    assert_eq!(code, 1);
    assert!(json(&stdout)["message"]
        .as_str()
        .unwrap()
        .starts_with("Failed to read"));
}

#[test]
fn test_unknown_command_exit_code() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_command(dir.path(), &["frobnicate"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown command"));
}
