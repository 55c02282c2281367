#![allow(missing_docs)]
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// RFC 4226 Appendix D secret: "12345678901234567890" in ASCII.
const RFC_SECRET: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

#[test]
fn test_secret_shows_provisioning_details() {
    Command::cargo_bin("totp-cli")
        .expect("Failed to find totp-cli binary")
        .arg("secret")
        .arg("--label")
        .arg("alice")
        .assert()
        .success()
        .stdout(predicate::str::contains("Secret: "))
        .stdout(predicate::str::contains("Algorithm: sha256"))
        .stdout(predicate::str::contains("QR Code: otpauth://totp/rust-totp:alice?secret="));
}

#[test]
fn test_generate_matches_reference_vector() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("totp.json");
    fs::write(&config_path, r#"{ "hash": "sha1", "window": 5 }"#)
        .expect("Failed to write config");

    Command::cargo_bin("totp-cli")
        .expect("Failed to find totp-cli binary")
        .arg("--config")
        .arg(&config_path)
        .arg("generate")
        .arg("--secret")
        .arg(RFC_SECRET)
        .arg("--at")
        .arg("59")
        .assert()
        .success()
        .stdout(predicate::str::contains("287082"));
}

#[test]
fn test_generate_accepts_an_explicit_counter() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("totp.json");
    fs::write(&config_path, r#"{ "hash": "sha1", "window": 5 }"#)
        .expect("Failed to write config");

    Command::cargo_bin("totp-cli")
        .expect("Failed to find totp-cli binary")
        .arg("--config")
        .arg(&config_path)
        .arg("generate")
        .arg("--secret")
        .arg(RFC_SECRET)
        .arg("--counter")
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::str::contains("755224"));
}

#[test]
fn test_generate_then_validate_round_trip() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("totp.json");
    fs::write(&config_path, r#"{ "hash": "sha1", "window": 5 }"#)
        .expect("Failed to write config");

    let output = Command::cargo_bin("totp-cli")
        .expect("Failed to find totp-cli binary")
        .arg("--config")
        .arg(&config_path)
        .arg("generate")
        .arg("--secret")
        .arg(RFC_SECRET)
        .arg("--at")
        .arg("1111111109")
        .output()
        .expect("Failed to run generate");
    assert!(output.status.success());
    let code = String::from_utf8(output.stdout)
        .expect("stdout was not UTF-8")
        .trim()
        .to_string();

    Command::cargo_bin("totp-cli")
        .expect("Failed to find totp-cli binary")
        .arg("--config")
        .arg(&config_path)
        .arg("validate")
        .arg("--secret")
        .arg(RFC_SECRET)
        .arg(&code)
        .arg("--at")
        .arg("1111111109")
        .assert()
        .success()
        .stdout(predicate::str::contains("Code accepted."));
}

#[test]
fn test_validate_rejects_a_wrong_code() {
    Command::cargo_bin("totp-cli")
        .expect("Failed to find totp-cli binary")
        .arg("validate")
        .arg("--secret")
        .arg(RFC_SECRET)
        .arg("000000")
        .arg("--at")
        .arg("59")
        .assert()
        .failure();
}

#[test]
fn test_validate_window_zero_rejects_adjacent_steps() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("totp.json");
    fs::write(&config_path, r#"{ "hash": "sha1", "window": 5 }"#)
        .expect("Failed to write config");

    // "755224" belongs to step 0; at T=59 (step 1) a zero window must
    // reject it while the step-1 code passes.
    Command::cargo_bin("totp-cli")
        .expect("Failed to find totp-cli binary")
        .arg("--config")
        .arg(&config_path)
        .arg("validate")
        .arg("--secret")
        .arg(RFC_SECRET)
        .arg("755224")
        .arg("--at")
        .arg("59")
        .arg("--window")
        .arg("0")
        .assert()
        .failure();

    Command::cargo_bin("totp-cli")
        .expect("Failed to find totp-cli binary")
        .arg("--config")
        .arg(&config_path)
        .arg("validate")
        .arg("--secret")
        .arg(RFC_SECRET)
        .arg("287082")
        .arg("--at")
        .arg("59")
        .arg("--window")
        .arg("0")
        .assert()
        .success();
}

#[test]
fn test_unknown_hash_provider_is_reported() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("totp.json");
    fs::write(&config_path, r#"{ "hash": "md5", "window": 5 }"#)
        .expect("Failed to write config");

    Command::cargo_bin("totp-cli")
        .expect("Failed to find totp-cli binary")
        .arg("--config")
        .arg(&config_path)
        .arg("generate")
        .arg("--secret")
        .arg(RFC_SECRET)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not available"));
}
