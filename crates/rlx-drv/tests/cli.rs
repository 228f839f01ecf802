//! CLI-level integration tests for `rlxc`, exercised as a subprocess via
//! `assert_cmd`, in the style of `faxc-drv/tests/e2e/cli_tests.rs`
//! (binary-under-test resolved through `CARGO_BIN_EXE_*`, assertions built
//! from `predicates`): missing arguments, a missing source file, and the
//! exact diagnostic rendering for an undeclared symbol.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn rlxc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rlxc"))
}

fn write_source(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn compiling_a_valid_program_exits_zero() {
    let file = write_source("x : int = 3 + 4 * 2;");
    rlxc().arg(file.path()).assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn no_arguments_is_a_usage_error() {
    rlxc().assert().failure().code(2).stderr(predicate::str::is_empty().not());
}

#[test]
fn missing_file_exits_with_usage_code() {
    rlxc()
        .arg("definitely/does/not/exist.rlx")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("exist.rlx"));
}

#[test]
fn undeclared_symbol_renders_the_exact_diagnostic() {
    let file = write_source("x = 1;");
    rlxc()
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("Undeclared symbol 'x'")
                .and(predicate::str::contains(":1:1"))
                .and(predicate::str::contains("|_    ^")),
        );
}

#[test]
fn help_flag_prints_usage() {
    rlxc().arg("--help").assert().success().stdout(predicate::str::contains("rlxc"));
}

#[test]
fn version_flag_is_provided_by_clap() {
    rlxc().arg("--version").assert().success().stdout(predicate::str::contains("rlxc"));
}
