use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn program(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file
}

fn runner() -> Command {
    Command::cargo_bin("light-lang-runner").unwrap()
}

#[test]
fn runs_a_program_file() {
    let file = program("func add(a, b) { return a + b; }\nadd(2, add(3, 4))\n");

    runner()
        .arg(file.path())
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn runs_the_demo_programs() {
    let demos = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../demos");

    runner()
        .arg(demos.join("fibonacci.light"))
        .assert()
        .success()
        .stdout("610\n");
    runner()
        .arg(demos.join("closures.light"))
        .assert()
        .success()
        .stdout("lightweight\n");
}

#[test]
fn null_results_print_nothing() {
    let file = program("let a = 1;");

    runner().arg(file.path()).assert().success().stdout("");
}

#[test]
fn evaluation_errors_exit_non_zero() {
    let file = program("let a = 1;\nb + a\n");

    runner()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown identifier: b"));
}

#[test]
fn parse_errors_exit_non_zero() {
    let file = program("let = 5");

    runner()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected an identifier"));
}

#[test]
fn missing_file_is_reported() {
    runner()
        .arg("does/not/exist.light")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn dumps_tokens_and_ast() {
    let file = program("let x = 1 + 2 * 3");

    runner()
        .arg(file.path())
        .args(["--dump", "ast"])
        .assert()
        .success()
        .stdout("let x = (1 + (2 * 3));\n");
    runner()
        .arg(file.path())
        .args(["--dump", "tokens"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("`let` at offset 0\nidentifier `x` at offset 4\n"));
}

#[test]
fn repl_keeps_bindings_between_lines() {
    runner()
        .write_stdin("let x = 40\nx + 2\nmissing\nx * 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("42"))
        .stdout(predicate::str::contains("Unknown identifier: missing"))
        .stdout(predicate::str::contains("80"));
}
