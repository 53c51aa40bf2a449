use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;

fn workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.parent().unwrap().parent().unwrap().to_path_buf()
}

fn mjc() -> Command {
    let mut cmd = Command::cargo_bin("mjc").unwrap();
    cmd.arg("--no-color");
    cmd.env_remove("MJC_TRACE");
    cmd
}

#[test]
fn accepts_while_demo() {
    let root = workspace_root();
    let mut cmd = mjc();
    cmd.arg(root.join("demos/while_loop.java"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("no lexical errors"))
        .stdout(predicate::str::contains("PROGRAM ACCEPTED"));
}

#[test]
fn accepts_skipped_if_and_for() {
    let root = workspace_root();
    let mut cmd = mjc();
    cmd.arg(root.join("demos/skipped.java"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PROGRAM ACCEPTED"));
}

#[test]
fn missing_paren_is_rejected() {
    let root = workspace_root();
    let mut cmd = mjc();
    cmd.arg(root.join("demos/missing_paren.java"));
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("PROGRAM REJECTED"))
        .stderr(predicate::str::contains("expected '(', found 'i'"))
        .stderr(predicate::str::contains("--> line 3, column 15"));
}

#[test]
fn lexical_error_skips_syntax_phase() {
    let root = workspace_root();
    let mut cmd = mjc();
    cmd.arg(root.join("demos/lexical_error.java"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid character '#'"))
        .stderr(predicate::str::contains(
            "syntax analysis skipped: lexical errors",
        ))
        .stdout(predicate::str::contains("PROGRAM").not());
}

#[test]
fn prints_token_table() {
    let root = workspace_root();
    let mut cmd = mjc();
    cmd.arg("--tokens").arg(root.join("demos/while_loop.java"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("TYPE"))
        .stdout(predicate::str::contains("INCREMENT"))
        .stdout(predicate::str::contains("Total : "));
}

#[test]
fn lex_only_stops_after_tokens() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("fragment.java");
    // Not a program, but every character is valid.
    std::fs::write(&path, "x = 1.5 + y;").unwrap();

    let mut cmd = mjc();
    cmd.arg("--lex-only").arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("no lexical errors"))
        .stdout(predicate::str::contains("PROGRAM").not());
}

#[test]
fn json_report_carries_verdict() {
    let root = workspace_root();
    let mut cmd = mjc();
    cmd.args(["--format", "json"])
        .arg(root.join("demos/while_loop.java"));
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["syntax"]["accepted"], serde_json::Value::Bool(true));
    assert_eq!(report["lexical_errors"].as_array().unwrap().len(), 0);
    let tokens = report["tokens"].as_array().unwrap();
    assert_eq!(tokens.last().unwrap()["kind"], "Eof");
}

#[test]
fn json_report_lists_syntax_errors() {
    let root = workspace_root();
    let mut cmd = mjc();
    cmd.args(["--format", "json"])
        .arg(root.join("demos/missing_paren.java"));
    let output = cmd.output().unwrap();
    assert!(!output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["syntax"]["accepted"], serde_json::Value::Bool(false));
    let first = &report["syntax"]["errors"][0];
    assert_eq!(first["kind"], "unexpected_token");
    assert_eq!(first["line"], 3);
    assert_eq!(first["col"], 15);
}

#[test]
fn defaults_to_test_java_in_current_dir() {
    let tmp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp_dir.path().join("test.java"),
        "public class T { public static void main(String[] a) { } }",
    )
    .unwrap();

    let mut cmd = mjc();
    cmd.current_dir(tmp_dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("test.java"))
        .stdout(predicate::str::contains("PROGRAM ACCEPTED"));
}

#[test]
fn missing_file_is_nonzero() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let mut cmd = mjc();
    cmd.arg(tmp_dir.path().join("nope.java"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn trace_reports_rule_entries() {
    let root = workspace_root();
    let mut cmd = mjc();
    cmd.arg("--trace").arg(root.join("demos/while_loop.java"));
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("[parser] [WHILE] enter"))
        .stderr(predicate::str::contains("[lexer]"));
}

#[test]
fn trace_env_accepts_boolish_values() {
    let root = workspace_root();
    for value in ["1", "yes", "on", "true"] {
        let mut cmd = mjc();
        cmd.env("MJC_TRACE", value);
        cmd.arg(root.join("demos/while_loop.java"));
        cmd.assert()
            .success()
            .stderr(predicate::str::contains("[parser] [WHILE] enter"));
    }

    let mut cmd = mjc();
    cmd.env("MJC_TRACE", "0");
    cmd.arg(root.join("demos/while_loop.java"));
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("[parser]").not());
}

#[test]
fn deeply_nested_input_is_rejected_not_crashed() {
    let levels = 200_000;
    let src = format!(
        "public class Deep {{ public static void main(String[] a) {{ x = {}1{}; }} }}",
        "(".repeat(levels),
        ")".repeat(levels)
    );
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("deep.java");
    std::fs::write(&path, src).unwrap();

    let mut cmd = mjc();
    cmd.arg(&path);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("PROGRAM REJECTED"))
        .stderr(predicate::str::contains("nesting deeper than 256 levels"));
}
