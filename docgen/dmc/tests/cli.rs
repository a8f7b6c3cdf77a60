//! End-to-end runs of the `docmodel` binary.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SHAPES: &str = r#"{
  "assemblies": [{
    "name": "Core",
    "namespaces": [{
      "name": "Demo",
      "types": [
        { "id": "T:Demo.Shape", "name": "Shape",
          "members": [{ "id": "M:Demo.Shape.Draw", "name": "Draw", "kind": "method" }] },
        { "id": "T:Demo.Circle", "name": "Circle", "bases": ["T:Demo.Shape"],
          "members": [{ "id": "M:Demo.Circle.Draw", "name": "Draw", "kind": "method",
                        "overrides": "M:Demo.Shape.Draw" }] },
        { "id": "T:Demo.Square", "name": "Square", "bases": ["T:Demo.Shape"] }
      ]
    }]
  }]
}"#;

const CYCLE: &str = r#"{ "assemblies": [{ "name": "Core", "namespaces": [{ "types": [
    { "id": "T:A", "name": "A", "bases": ["T:B"] },
    { "id": "T:B", "name": "B", "bases": ["T:A"] }
] }] }] }"#;

fn write_model(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn docmodel() -> Command {
    Command::new(env!("CARGO_BIN_EXE_docmodel"))
}

#[test]
fn usage_without_arguments() {
    docmodel()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: docmodel <command>"));
}

#[test]
fn unknown_command_fails() {
    docmodel()
        .arg("render")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: unknown command 'render'"));
}

#[test]
fn members_of_one_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_model(&dir, "shapes.json", SHAPES);

    docmodel()
        .arg("members")
        .arg(&path)
        .arg("--type=T:Demo.Square")
        .assert()
        .success()
        .stdout(predicate::str::contains("T:Demo.Square (class)"))
        .stdout(predicate::str::contains("Demo.Shape.Draw  (from T:Demo.Shape)"))
        .stdout(predicate::str::contains("T:Demo.Circle").not());
}

#[test]
fn hierarchy_lists_siblings_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_model(&dir, "shapes.json", SHAPES);

    docmodel()
        .arg("hierarchy")
        .arg(&path)
        .arg("--type=T:Demo.Shape")
        .assert()
        .success()
        .stdout("T:Demo.Shape\n  T:Demo.Shape *\n    T:Demo.Circle\n    T:Demo.Square\n");
}

#[test]
fn report_prints_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_model(&dir, "shapes.json", SHAPES);

    let output = docmodel().arg("report").arg(&path).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["types_resolved"], 3);
    assert_eq!(value["types"][1]["members"][0]["id"], "M:Demo.Circle.Draw");
}

#[test]
fn problems_go_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_model(&dir, "cycle.json", CYCLE);

    docmodel()
        .arg("members")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("warning[W0001]"));
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    docmodel()
        .arg("members")
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: cannot read "));
}

#[test]
fn invalid_option_value_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_model(&dir, "shapes.json", SHAPES);

    docmodel()
        .arg("hierarchy")
        .arg(&path)
        .arg("--unplaced=anywhere")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "invalid value 'anywhere' for --unplaced (expected skip or root)",
        ));
}

#[test]
fn no_input_prints_usage_hint() {
    docmodel()
        .arg("report")
        .arg("--pretty")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: no input files"))
        .stderr(predicate::str::contains("Usage: docmodel report"));
}
