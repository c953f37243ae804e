//! Integration tests for the CLI interface
//!
//! Runs the built binary and checks output text and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

fn calc() -> Command {
    Command::cargo_bin("calc_cli").unwrap()
}

#[test]
fn test_square() {
    calc()
        .args(["square", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== SQUARE OPERATION ==="))
        .stdout(predicate::str::contains("Input: 5"))
        .stdout(predicate::str::contains("Result: 25"));
}

#[test]
fn test_square_negative_and_float() {
    calc()
        .args(["square", "-4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 16"));

    calc()
        .args(["square", "2.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 6.25"));
}

#[test]
fn test_power() {
    calc()
        .args(["power", "2", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Base: 2"))
        .stdout(predicate::str::contains("Exponent: 8"))
        .stdout(predicate::str::contains("Result: 256"));
}

#[test]
fn test_factorial() {
    calc()
        .args(["factorial", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 120"));
}

#[test]
fn test_factorial_negative_fails() {
    calc()
        .args(["factorial", "-5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Factorial is only defined for non-negative integers",
        ));
}

#[test]
fn test_fibonacci() {
    calc()
        .args(["fibonacci", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: [0, 1, 1, 2, 3, 5, 8, 13]"))
        .stdout(predicate::str::contains("Length: 8"));
}

#[test]
fn test_fibonacci_zero_fails() {
    calc()
        .args(["fibonacci", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input must be a positive integer"));
}

#[test]
fn test_prime() {
    calc()
        .args(["prime", "17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("17 is prime"));

    calc()
        .args(["prime", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("15 is not prime"));
}

#[test]
fn test_stats() {
    calc()
        .args(["stats", "1", "2", "3", "4", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("count: 5"))
        .stdout(predicate::str::contains("mean: 3.0"))
        .stdout(predicate::str::contains("median: 3"))
        .stdout(predicate::str::contains("sum: 15"));
}

#[test]
fn test_stats_labels_input_numbers() {
    calc()
        .args(["stats", "3", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Input_numbers: [3, 1, 2]"));
}

#[test]
fn test_square_large_float_uses_exponent() {
    calc()
        .args(["square", "1e10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 1e+20"));
}

#[test]
fn test_factorial_oversized_integer_fails() {
    calc()
        .args(["factorial", "99999999999999999999"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Integer is out of supported range"));
}

#[test]
fn test_stats_invalid_token_fails() {
    calc()
        .args(["stats", "1", "two", "3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'two' is not a valid number"));
}

#[test]
fn test_non_numeric_fails() {
    calc()
        .args(["square", "abc"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_json_output() {
    calc()
        .args(["--json", "power", "2", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"operation\": \"power\""))
        .stdout(predicate::str::contains("\"result\": 256"));
}

#[test]
fn test_json_error_output() {
    calc()
        .args(["--json", "prime", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"type\": \"InvalidDomain\""));
}

#[test]
fn test_missing_subcommand_fails() {
    calc().assert().code(1).stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_help_succeeds() {
    calc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("fibonacci"));
}
