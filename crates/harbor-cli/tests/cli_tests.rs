use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
        .canonicalize()
        .expect("fixture present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("harbor-cli");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("HARBOR_SCENARIO");
    cmd
}

#[test]
fn run_without_scenario_uses_builtin_demo() {
    cli()
        .arg("run")
        .assert()
        .success()
        .stdout(contains("APPLIED  sail 1 to port 2"))
        .stdout(contains("- 1 at port 2"))
        .stdout(contains("cargo: [1, 2]"));
}

#[test]
fn run_reports_rejections_from_fixture() {
    cli()
        .arg("run")
        .arg("--scenario")
        .arg(fixture("scenario.json"))
        .assert()
        .success()
        .stdout(contains(
            "REJECTED load cargo 3 onto Coaster (capacity exceeded: refrigerated container limit of 1)",
        ))
        .stdout(contains("REJECTED sail Coaster to port 3 (insufficient fuel"))
        .stdout(contains("- Ship_001 at port 2, fuel 1000.00, cargo: [11]"));
}

#[test]
fn scenario_can_come_from_environment() {
    cli()
        .env("HARBOR_SCENARIO", fixture("scenario.json"))
        .args(["run", "--format", "json"])
        .assert()
        .success()
        .stdout(contains("\"Coaster\""))
        .stdout(contains("\"fuel_left\": 5.0"));
}

#[test]
fn json_report_is_written_to_output_path() {
    let temp = tempdir().expect("create temp dir");
    let output = temp.path().join("output.json");

    cli()
        .arg("run")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let text = fs::read_to_string(&output).expect("report written");
    let json: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(json["ports"]["1"]["lat"], 50.0);
    assert_eq!(json["ports"]["2"]["lon"], 40.0);
    assert_eq!(json["vessels"]["1"]["cargo_ids"], serde_json::json!([1, 2]));
    let fuel_left = json["vessels"]["1"]["fuel_left"].as_f64().unwrap();
    assert!((fuel_left - (1000.0 - 200f64.sqrt() * 1.5)).abs() < 1e-9);
}

#[test]
fn missing_scenario_file_fails_with_context() {
    cli()
        .args(["run", "--scenario", "/definitely/not/here.json"])
        .assert()
        .failure()
        .stderr(contains("failed to load scenario"));
}

#[test]
fn unknown_vessel_class_fails() {
    let temp = tempdir().expect("create temp dir");
    let path = temp.path().join("bad.json");
    fs::write(&path, r#"{ "vessels": [{ "id": "x", "class": "galleon" }] }"#).unwrap();

    cli()
        .arg("run")
        .arg("--scenario")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("unknown category: 'galleon'"));
}

#[test]
fn lists_vessel_classes() {
    cli()
        .arg("classes")
        .assert()
        .success()
        .stdout(contains("Vessel classes (3):"))
        .stdout(contains("medium"))
        .stdout(contains("20,000"))
        .stdout(contains("1,000"));
}

#[test]
fn prints_manifest_costs() {
    cli()
        .arg("manifest")
        .arg("--path")
        .arg(fixture("manifest.csv"))
        .assert()
        .success()
        .stdout(contains("Cargo units (4):"))
        .stdout(contains("refrigerated"))
        .stdout(contains("Total cost: 6050.0"));
}

#[test]
fn log_output_stays_off_stdout() {
    cli()
        .env("RUST_LOG", "info")
        .args(["run", "--format", "json"])
        .assert()
        .success()
        .stdout(contains("action applied").not())
        .stderr(contains("action applied"));
}
