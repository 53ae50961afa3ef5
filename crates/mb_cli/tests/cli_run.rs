//! End-to-end CLI runs against a temp request file.

use assert_cmd::Command;
use predicates::prelude::*;

const REQUEST: &str = r#"{
    "start_date": "2024-01-01",
    "end_date": "2024-05-01",
    "start_total": "2000",
    "start_current_month": "45",
    "end_total": "2165",
    "end_prior_month": "50",
    "end_current_month": "30",
    "start_balance": "400",
    "topup1_net": "100",
    "end_balance": "50",
    "tier1_price": "2.50",
    "surcharge_per_unit": "0.036",
    "monthly_fee": "6.2"
}"#;

fn write_request(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("request.json");
    std::fs::write(&path, REQUEST).unwrap();
    path
}

#[test]
fn full_run_writes_json_and_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_request(dir.path());
    let out = dir.path().join("out");

    Command::cargo_bin("mb")
        .unwrap()
        .args(["--input"])
        .arg(&input)
        .args(["--render", "json", "csv", "--seed", "42"])
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("target quantity: 180.0"));

    let json = std::fs::read_to_string(out.join("distribution.json")).unwrap();
    assert!(json.contains("\"target_quantity\": \"180.0\""));
    let csv = std::fs::read_to_string(out.join("distribution.csv")).unwrap();
    assert!(csv.starts_with("serial,month,"));
    assert!(csv.lines().last().unwrap().starts_with("total,,180.0"));
}

#[test]
fn validate_only_skips_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_request(dir.path());
    let out = dir.path().join("out");

    Command::cargo_bin("mb")
        .unwrap()
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .arg("--validate-only")
        .assert()
        .success();

    assert!(!out.exists());
}

#[test]
fn missing_input_maps_to_io_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("mb")
        .unwrap()
        .arg("--input")
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure()
        .code(4);
}

#[test]
fn malformed_date_maps_to_validation_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{ "start_date": "nope", "end_date": "2024-02-01" }"#).unwrap();
    Command::cargo_bin("mb")
        .unwrap()
        .arg("--input")
        .arg(&path)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("start_date"));
}
