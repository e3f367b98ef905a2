use std::io::Write;

use clap::Parser;
use tasktree::cli::CliArgs;
use tasktree::errors::TaskTreeError;
use tasktree::run_with;
use tempfile::Builder;

const NESTED: &str = r#"[
    {"name": "A", "priority": 2, "subtasks": [
        {"name": "B", "priority": 1, "subtasks": [{"name": "D", "priority": 3}]},
        {"name": "C", "priority": 3}
    ]},
    {"name": "E"}
]"#;

fn args(argv: &[&str]) -> CliArgs {
    CliArgs::try_parse_from(std::iter::once("tasktree").chain(argv.iter().copied())).unwrap()
}

fn run_to_string(cli: CliArgs, stdin: &[u8]) -> anyhow::Result<String> {
    let mut out = Vec::new();
    run_with(cli, stdin, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn json_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_file_input_prints_one_name_per_line() {
    let file = json_file(NESTED);
    let path = file.path().to_str().unwrap();

    let out = run_to_string(args(&[path]), b"").unwrap();
    assert_eq!(out, "D\nB\nC\nA\nE\n");
}

#[test]
fn test_dash_reads_stdin() {
    let out = run_to_string(args(&["-", "--output", "json"]), NESTED.as_bytes()).unwrap();
    assert_eq!(out, "[\"D\",\"B\",\"C\",\"A\",\"E\"]\n");
}

#[test]
fn test_no_input_reads_stdin() {
    let out = run_to_string(args(&[]), br#"[{"name": "X", "priority": 5}]"#).unwrap();
    assert_eq!(out, "X\n");
}

#[test]
fn test_check_prints_summary_only() {
    let file = json_file(NESTED);
    let path = file.path().to_str().unwrap();

    let out = run_to_string(args(&[path, "--check"]), b"").unwrap();
    assert_eq!(
        out,
        "tasktree check\n  top-level tasks: 2\n  total tasks: 5\n  - A (priority 2)\n      subtasks: 3\n  - E\n"
    );
}

#[test]
fn test_invalid_input_propagates_validation_error() {
    let file = json_file(r#"[{"name": "Y"}, {"name": "Invalid", "subtasks": "x"}]"#);
    let path = file.path().to_str().unwrap();

    let mut out = Vec::new();
    let err = run_with(args(&[path]), &b""[..], &mut out).unwrap_err();

    match err.downcast_ref::<TaskTreeError>() {
        Some(TaskTreeError::SubtasksNotASequence { path, .. }) => assert_eq!(path, "[1]"),
        other => panic!("Expected SubtasksNotASequence, got: {:?}", other),
    }
    assert!(out.is_empty(), "partial output written: {:?}", String::from_utf8_lossy(&out));
}

#[test]
fn test_missing_file_error_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    let path = missing.to_str().unwrap();

    let err = run_to_string(args(&[path]), b"").unwrap_err();
    assert!(format!("{err:#}").contains("absent.json"));
    assert!(matches!(err.downcast_ref::<TaskTreeError>(), Some(TaskTreeError::Io(_))));
}

#[test]
fn test_demo_flag_runs_builtin_cases() {
    let out = run_to_string(args(&["--demo"]), b"").unwrap();
    assert!(out.contains("Case 1: Basic Hierarchy:\nScheduled Tasks:\nTask D\n"));
    assert!(out.contains("Case 5: Mixed Valid and Invalid Tasks:\nError:"));
}

#[test]
fn test_demo_conflicts_with_input() {
    assert!(CliArgs::try_parse_from(["tasktree", "--demo", "tasks.json"]).is_err());
}
