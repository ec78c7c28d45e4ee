use std::fs;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn run_cmd(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_statechannel"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("run statechannel")
}

fn stdout_record(output: &Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    assert!(stdout.ends_with("}\n"), "stdout:\n{stdout}");
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("bad json ({e}):\n{stdout}"))
}

fn assert_fixed_record(record: &Value) {
    assert_eq!(record["success"], Value::Bool(true));
    assert_eq!(record["message"], "Data processed successfully");
    assert!(record.get("data").is_none());
    assert!(record["timestamp"].is_string());
}

#[test]
fn no_flags_prints_record_to_stdout() {
    let output = run_cmd(&[]);

    assert!(output.status.success(), "{output:?}");
    assert_fixed_record(&stdout_record(&output));
    assert!(output.stderr.is_empty(), "{output:?}");
}

#[test]
fn empty_paths_behave_like_missing_flags() {
    let output = run_cmd(&["--input", "", "--output", ""]);

    assert!(output.status.success(), "{output:?}");
    assert_fixed_record(&stdout_record(&output));
}

#[test]
fn input_and_output_files() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    let dest = dir.path().join("out.json");
    fs::write(&input, b"anything at all").unwrap();

    let output = run_cmd(&[
        "--input",
        input.to_str().unwrap(),
        "--output",
        dest.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "{output:?}");
    assert!(output.stdout.is_empty());
    let record: Value = serde_json::from_str(&fs::read_to_string(&dest).unwrap()).unwrap();
    assert_fixed_record(&record);
}

#[test]
fn verbose_diagnostics_go_to_stderr() {
    let output = run_cmd(&["--verbose"]);

    assert!(output.status.success(), "{output:?}");
    assert_fixed_record(&stdout_record(&output));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Starting StateChannel processing..."), "{stderr}");
    assert!(stderr.contains("Using default test data"), "{stderr}");
}

#[test]
fn missing_input_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("nope.txt");
    let dest = dir.path().join("out.json");

    let output = run_cmd(&[
        "--input",
        input.to_str().unwrap(),
        "--output",
        dest.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!dest.exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read input file"), "{stderr}");
}

#[test]
fn unwritable_output_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("no-such-dir").join("out.json");

    let output = run_cmd(&["--output", dest.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!dest.exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to write output file"), "{stderr}");
}
