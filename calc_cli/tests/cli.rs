use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

fn simplecalc(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("simplecalc").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("SIMPLECALC_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "status: {:?}", output.status);
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn add_prints_response_record() {
    let dir = TempDir::new().unwrap();
    let value = stdout_json(simplecalc(&dir).args(["add", "4", "2"]));
    assert_eq!(
        value,
        json!({"operands": {"num1": 4, "num2": 2}, "results": {"sum": 6}})
    );
}

#[test]
fn negative_operands_are_not_flags() {
    let dir = TempDir::new().unwrap();
    let value = stdout_json(simplecalc(&dir).args(["div", "-17", "5"]));
    assert_eq!(value["results"], json!({"quotient": -4, "remainder": 3}));
}

#[test]
fn division_by_zero_is_recorded_not_fatal() {
    let dir = TempDir::new().unwrap();
    let value = stdout_json(simplecalc(&dir).args(["div", "6", "0"]));
    assert_eq!(
        value["results"]["error_message"],
        "integer division or modulo by zero"
    );
}

#[test]
fn non_integer_operand_is_recorded() {
    let dir = TempDir::new().unwrap();
    let value = stdout_json(simplecalc(&dir).args(["add", "5", "a"]));
    assert_eq!(value["operands"], json!({"num1": 5, "num2": "a"}));
    assert!(value["results"]["error_message"]
        .as_str()
        .unwrap()
        .starts_with("All operands should be integer"));
}

#[test]
fn oversized_integer_is_echoed_and_reported_as_overflow() {
    let dir = TempDir::new().unwrap();
    simplecalc(&dir)
        .args(["--compact", "add", "99999999999999999999", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""num1":99999999999999999999"#))
        .stdout(predicate::str::contains("does not fit in a 64-bit signed integer"))
        .stdout(predicate::str::contains("1e+20").not())
        .stdout(predicate::str::contains("should be integer").not());
}

#[test]
fn fail_on_error_sets_exit_code() {
    let dir = TempDir::new().unwrap();
    simplecalc(&dir)
        .args(["--fail-on-error", "div", "6", "0"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("error_message"));
}

#[test]
fn invalid_operator_fails() {
    let dir = TempDir::new().unwrap();
    simplecalc(&dir)
        .args(["pow", "2", "3"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid operator 'pow'"))
        .stderr(predicate::str::contains("InvalidArgument"));
}

#[test]
fn demo_runs_adder() {
    let dir = TempDir::new().unwrap();
    let value = stdout_json(simplecalc(&dir).arg("--demo"));
    assert_eq!(value["results"], json!({"sum": 6}));
}

#[test]
fn prompts_for_missing_arguments() {
    let dir = TempDir::new().unwrap();
    let value = stdout_json(simplecalc(&dir).write_stdin("mul\n2\n7\n"));
    assert_eq!(value["results"], json!({"product": 14}));
}

#[test]
fn compact_flag_prints_single_line() {
    let dir = TempDir::new().unwrap();
    simplecalc(&dir)
        .args(["--compact", "sub", "3", "5"])
        .assert()
        .success()
        .stdout(r#"{"operands":{"num1":3,"num2":5},"results":{"difference":-2}}"#.to_owned() + "\n");
}

#[test]
fn config_file_in_working_directory_is_used() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("simplecalc.toml"), "[output]\npretty = false\n").unwrap();
    simplecalc(&dir)
        .args(["add", "1", "1"])
        .assert()
        .success()
        .stdout(r#"{"operands":{"num1":1,"num2":1},"results":{"sum":2}}"#.to_owned() + "\n");
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    simplecalc(&dir)
        .args(["--config", "missing.toml", "add", "1", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn invalid_log_level_in_config_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("simplecalc.toml"), "[logging]\ndefault = \"loud\"\n").unwrap();
    simplecalc(&dir)
        .args(["add", "1", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid log level 'loud'"));
}
