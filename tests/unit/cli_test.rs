//! Integration tests for the gpss-console CLI
//!
//! The contract: validation failures land on stderr one line each with exit
//! code 1; everything else prints exactly one line of JSON on stdout with
//! exit code 0.

use assert_cmd::cargo;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use predicates::prelude::*;

fn gpss() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("gpss-console"))
}

/// A well-formed generation 9 sized payload.
fn valid_pokemon() -> String {
    STANDARD.encode(vec![1u8; 344])
}

#[test]
fn test_version() {
    gpss()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gpss-console"));
}

#[test]
fn test_invalid_mode_fails() {
    gpss()
        .args(["--mode", "foo", "--pokemon", "X", "--generation", "9"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--mode must be legalize or legality"));
}

#[test]
fn test_invalid_mode_does_not_demand_ver() {
    gpss()
        .args(["--mode", "foo", "--pokemon", "X", "--generation", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--ver").not());
}

#[test]
fn test_legalize_without_ver_fails() {
    gpss()
        .args([
            "--mode",
            "legalize",
            "--pokemon",
            &valid_pokemon(),
            "--generation",
            "8",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr("--ver is required for auto legalization\n");
}

#[test]
fn test_all_validation_errors_are_collected() {
    gpss()
        .args(["--mode", "foo"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--mode must be legalize or legality"))
        .stderr(predicate::str::contains("--pokemon is required"))
        .stderr(predicate::str::contains("--generation is required"));
}

#[test]
fn test_legality_prints_one_json_line() {
    let output = gpss()
        .args([
            "--mode",
            "legality",
            "--pokemon",
            &valid_pokemon(),
            "--generation",
            "9",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);

    let reply: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(reply["legal"], serde_json::json!(true));
    assert!(reply["report"].as_array().unwrap().is_empty());
}

#[test]
fn test_legality_reports_future_origin() {
    gpss()
        .args([
            "--mode",
            "legality",
            "--pokemon",
            &valid_pokemon(),
            "--generation",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"legal\":false"));
}

#[test]
fn test_legalize_passes_legal_entity_through() {
    let pokemon = valid_pokemon();
    let output = gpss()
        .args([
            "--mode",
            "legalize",
            "--pokemon",
            &pokemon,
            "--generation",
            "9",
            "--ver",
            "SL",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let reply: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(reply["legal"], serde_json::json!(true));
    assert_eq!(reply["success"], serde_json::json!(true));
    assert_eq!(reply["ran"], serde_json::json!(false));
    assert_eq!(reply["pokemon"], serde_json::json!(pokemon));
}

#[test]
fn test_legalize_backward_transfer_reports_failure() {
    let output = gpss()
        .args([
            "--mode",
            "legalize",
            "--pokemon",
            &valid_pokemon(),
            "--generation",
            "9",
            "--ver",
            "E",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let reply: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(reply["success"], serde_json::json!(false));
    assert_eq!(reply["ran"], serde_json::json!(true));
    assert_eq!(reply["pokemon"], serde_json::Value::Null);
}

#[test]
fn test_unknown_generation_token_is_lenient() {
    gpss()
        .args([
            "--mode",
            "legality",
            "--pokemon",
            &valid_pokemon(),
            "--generation",
            "not-a-generation",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"legal\":true"));
}

#[test]
fn test_unknown_ver_token_is_lenient() {
    gpss()
        .args([
            "--mode",
            "legalize",
            "--pokemon",
            &valid_pokemon(),
            "--generation",
            "9",
            "--ver",
            "not-a-version",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\":true"));
}

#[test]
fn test_malformed_base64_produces_error_json() {
    let output = gpss()
        .args([
            "--mode",
            "legality",
            "--pokemon",
            "@@@not-base64@@@",
            "--generation",
            "9",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    let reply: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert!(reply["error"].as_str().unwrap().contains("base64"));
}

#[test]
fn test_unrecognized_size_produces_error_json() {
    let pokemon = STANDARD.encode(vec![1u8; 17]);
    gpss()
        .args(["--mode", "legality", "--pokemon", &pokemon, "--generation", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unrecognized entity size"));
}
