//! End-to-end tests of the `symbolpath` binary

use crate::common::{TestProject, resource};
use serde_json::Value;
use std::path::Path;
use std::process::{Command, Output};

/// Run the binary inside `dir` so workspace lookup stays local to the test
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_symbolpath"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("SYMBOLPATH_DIFF__LINE_ENDING")
        .env_remove("SYMBOLPATH_OUTPUT__PRETTY_JSON")
        .output()
        .expect("Failed to run symbolpath")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_get_path_prints_bare_path() {
    let project = TestProject::new();
    let file = project.add_resource("lib-sample.js");

    let output = run_in(project.path(), &["get-path", "-f", file.to_str().unwrap(), "-l", "17"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "DirectoryListHandler.addDirectory.findCallback\n"
    );
}

#[test]
fn test_get_path_without_enclosing_symbol_succeeds() {
    let project = TestProject::new();
    let file = project.add_resource("lib-sample.js");

    let output = run_in(project.path(), &["get-path", "-f", file.to_str().unwrap(), "-l", "50"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\n");
}

#[test]
fn test_get_path_json_output() {
    let project = TestProject::new();
    let file = project.add_resource("lib-sample.js");
    let file_arg = file.to_str().unwrap();

    let pretty = run_in(project.path(), &["get-path", "-f", file_arg, "-l", "3", "--json"]);
    assert_eq!(pretty.status.code(), Some(0));
    let text = stdout(&pretty);
    assert!(text.lines().count() > 1, "pretty JSON spans lines: {text}");

    let json: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["path"], "DirectoryListHandler.constructor");
    assert_eq!(json["line"], 3);
    assert_eq!(json["file"], file_arg);

    let minified = run_in(project.path(), &["get-path", "-f", file_arg, "-l", "3", "-m"]);
    let text = stdout(&minified);
    assert_eq!(text.lines().count(), 1);
    let compact: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(compact, json);
}

#[test]
fn test_map_diffs_prints_compact_json() {
    let project = TestProject::new();
    let file = project.add_resource("lib-sample.js");
    let diff = project.add_resource("lib-sample.diff");

    let output = run_in(
        project.path(),
        &[
            "map-diffs-to-paths",
            "-f",
            file.to_str().unwrap(),
            "-d",
            diff.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert_eq!(text.lines().count(), 1);

    let records: Value = serde_json::from_str(&text).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 7);
    assert_eq!(records[0]["line"], 2);
    assert_eq!(records[0]["symbol"], "DirectoryListHandler.constructor");
    assert_eq!(records[0]["status"], "M");
    assert_eq!(records[2]["status"], "M");
    assert_eq!(records[4]["symbol"], Value::Null);
    assert_eq!(records[6]["line"], 8);
    assert_eq!(records[6]["symbol"], "DirectoryListHandler");

    assert!(text.starts_with(
        r#"[{"line":2,"symbol":"DirectoryListHandler.constructor","status":"M","content":"#
    ));
}

#[test]
fn test_map_diffs_plain_rows() {
    let project = TestProject::new();
    let file = project.add_resource("lib-sample.js");
    let diff = project.add_file("changes.diff", "52|m|a|b\n50|A|gap\n");

    let output = run_in(
        project.path(),
        &[
            "map-diffs-to-paths",
            "-f",
            file.to_str().unwrap(),
            "-d",
            diff.to_str().unwrap(),
            "--plain",
        ],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "52|M|instantiate|a|b\n50|A||gap\n");
}

#[test]
fn test_invalid_diff_reports_json_error() {
    let project = TestProject::new();
    let file = project.add_resource("lib-sample.js");
    let diff = project.add_file("changes.diff", "3|A|ok\n0|Q|x\n");

    let output = run_in(
        project.path(),
        &[
            "map-diffs-to-paths",
            "-f",
            file.to_str().unwrap(),
            "-d",
            diff.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(4));
    assert!(stdout(&output).is_empty());

    let envelope: Value = serde_json::from_str(&stderr(&output)).unwrap();
    assert_eq!(envelope["status"], "error");
    assert_eq!(envelope["code"], "INVALID_DIFF");
    assert_eq!(envelope["exit_code"], 4);
    assert_eq!(envelope["error"]["context"]["line"], 2);
    assert_eq!(
        envelope["error"]["context"]["problems"],
        serde_json::json!([
            "line number should be greater than 0",
            "status should be A, D, or M"
        ])
    );
}

#[test]
fn test_invalid_diff_reports_text_error_in_plain_mode() {
    let project = TestProject::new();
    let file = project.add_resource("lib-sample.js");
    let diff = project.add_file("changes.diff", "1|A|ok\n\n");

    let output = run_in(
        project.path(),
        &[
            "map-diffs-to-paths",
            "-f",
            file.to_str().unwrap(),
            "-d",
            diff.to_str().unwrap(),
            "--plain",
        ],
    );

    assert_eq!(output.status.code(), Some(4));
    let message = stderr(&output);
    assert!(message.contains("unexpected empty line at line 2"), "{message}");
    assert!(message.contains("Suggestion:"), "{message}");
}

#[test]
fn test_missing_source_file_exits_with_io_error() {
    let project = TestProject::new();

    let output = run_in(project.path(), &["get-path", "-f", "absent.js", "-l", "1"]);

    assert_eq!(output.status.code(), Some(5));
    assert!(stderr(&output).contains("Failed to read file 'absent.js'"));
}

#[test]
fn test_parse_streams_json_lines() {
    let project = TestProject::new();
    let file = project.add_resource("shapes.ts");

    let output = run_in(project.path(), &["parse", file.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));

    let nodes: Vec<Value> = stdout(&output)
        .lines()
        .map(|line| serde_json::from_str(line).expect("Invalid JSON"))
        .collect();

    assert_eq!(nodes[0]["depth"], 0);
    assert!(nodes[0].get("parent").is_none());

    let circle = nodes
        .iter()
        .find(|node| node["name"] == "Circle")
        .expect("Circle should be lowered");
    assert_eq!(circle["kind"], "ClassDeclaration");
    assert_eq!(circle["start_line"], 17);
    assert_eq!(circle["end_line"], 25);

    let shallow = run_in(
        project.path(),
        &["parse", file.to_str().unwrap(), "--max-depth", "0"],
    );
    assert_eq!(stdout(&shallow).lines().count(), 1);
}

#[test]
fn test_init_creates_settings_once() {
    let project = TestProject::new();

    let first = run_in(project.path(), &["init"]);
    assert_eq!(first.status.code(), Some(0));
    assert!(stdout(&first).contains("Created configuration file"));
    assert!(project.path().join(".symbolpath/settings.toml").is_file());

    let second = run_in(project.path(), &["init"]);
    assert_eq!(second.status.code(), Some(6));
    assert!(stderr(&second).contains("--force"));

    let forced = run_in(project.path(), &["init", "--force"]);
    assert_eq!(forced.status.code(), Some(0));
}

#[test]
fn test_config_reflects_environment_overrides() {
    let project = TestProject::new();

    let output = Command::new(env!("CARGO_BIN_EXE_symbolpath"))
        .arg("config")
        .current_dir(project.path())
        .env("SYMBOLPATH_DIFF__LINE_ENDING", "crlf")
        .output()
        .expect("Failed to run symbolpath");

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("line_ending = \"crlf\""));
}

#[test]
fn test_workspace_settings_apply_to_queries() {
    let project = TestProject::new();
    let file = project.add_resource("lib-sample.js");
    let diff = project.add_file("changes.diff", "52|M|x\n");
    project.add_file(".symbolpath/settings.toml", "[output]\npretty_json = true\n");

    let output = run_in(
        project.path(),
        &[
            "map-diffs-to-paths",
            "-f",
            file.to_str().unwrap(),
            "-d",
            diff.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).lines().count() > 1);
}

#[test]
fn test_malformed_config_file_exits_with_config_error() {
    let project = TestProject::new();
    let config = project.add_file("broken.toml", "[diff]\nline_ending = \"cr\"\n");
    let file = project.add_resource("lib-sample.js");

    let output = run_in(
        project.path(),
        &[
            "--config",
            config.to_str().unwrap(),
            "get-path",
            "-f",
            file.to_str().unwrap(),
            "-l",
            "1",
        ],
    );

    assert_eq!(output.status.code(), Some(6));
    assert!(stderr(&output).contains("Invalid configuration"));
}
