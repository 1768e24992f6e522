use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_options_cli"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run options_cli")
}

fn config_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn validate_passes_on_samples() {
    let output = run_cli(&["validate"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("4 of 4 contracts valid"), "{}", stdout);
}

#[test]
fn validate_fails_when_a_sample_breaks_the_rules() {
    let config = config_file(r#"{"min_strike":101}"#);
    let path = config.path().to_str().unwrap();
    let output = run_cli(&["validate", "--config", path]);

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("#0: Invalid contract: strike_price"), "{}", stdout);
    assert!(stdout.contains("3 of 4 contracts valid"), "{}", stdout);
}

#[test]
fn negative_strike_floor_still_passes_samples() {
    let config = config_file(r#"{"min_strike":-50}"#);
    let path = config.path().to_str().unwrap();
    let output = run_cli(&["validate", "--config", path]);

    assert!(output.status.success());
}

#[test]
fn validate_fails_on_bad_config() {
    let config = config_file(r#"{"max_relative_spread":-1}"#);
    let path = config.path().to_str().unwrap();
    assert!(!run_cli(&["validate", "--config", path]).status.success());

    let config = config_file("not json");
    let path = config.path().to_str().unwrap();
    assert!(!run_cli(&["validate", "--config", path]).status.success());
}

#[test]
fn json_output_lists_samples() {
    let output = run_cli(&["json"]);
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 4);
    assert_eq!(rows[0]["type"], "Call");
}
