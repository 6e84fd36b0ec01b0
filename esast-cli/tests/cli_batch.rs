//! End-to-end tests of the esast binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn write_source(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn dumps_a_single_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "main.es", "var a = 1;\n");

    Command::cargo_bin("esast")
        .unwrap()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found source file:"))
        .stdout(predicate::str::contains("ProgramNode (1:0, 1:10)"))
        .stdout(predicate::str::contains("VariableDeclarationListNode"));
}

#[test]
fn batch_continues_past_a_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_source(&dir, "good.es", "a;\n");
    let missing = dir.path().join("missing.es");

    Command::cargo_bin("esast")
        .unwrap()
        .arg(missing.to_string_lossy().into_owned())
        .arg(&good)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read"))
        .stdout(predicate::str::contains("IdentifierNode (1:0, 1:1)"));
}

#[test]
fn syntax_error_is_reported_per_file() {
    let dir = tempfile::tempdir().unwrap();
    let bad = write_source(&dir, "bad.es", "if (a { b; }\n");

    Command::cargo_bin("esast")
        .unwrap()
        .arg(&bad)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("syntax error at 1:6"));
}

#[test]
fn token_json_format_lists_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "tokens.es", "a = 5;\n");

    Command::cargo_bin("esast")
        .unwrap()
        .args(["--format", "token-json", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Identifier"))
        .stdout(predicate::str::contains("DecimalLiteral"));
}

#[test]
fn no_arguments_shows_usage() {
    Command::cargo_bin("esast")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
