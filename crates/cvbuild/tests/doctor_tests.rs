//! Integration tests for `cvbuild doctor`

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use cvbuild_testkit::{ProjectFixture, temp_dir_in_workspace};
use predicates::prelude::*;
use serde_json::Value;
use std::process::Command;

fn doctor_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("Failed to run doctor");
    assert!(output.status.success(), "doctor must always exit 0");
    serde_json::from_slice(&output.stdout).expect("doctor --json must print JSON")
}

fn check<'a>(report: &'a Value, id: &str) -> &'a Value {
    report["checks"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"] == id)
        .unwrap_or_else(|| panic!("missing check '{}' in {}", id, report))
}

#[test]
fn test_doctor_human_readable() {
    let temp = temp_dir_in_workspace();

    let mut cmd = Command::new(cargo_bin!("cvbuild"));
    cmd.current_dir(temp.path())
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Environment Health Check"))
        .stdout(predicate::str::contains("Checks:"));
}

#[test]
fn test_doctor_json_in_empty_directory() {
    let temp = temp_dir_in_workspace();

    let mut cmd = Command::new(cargo_bin!("cvbuild"));
    cmd.current_dir(temp.path()).args(["doctor", "--json"]);
    let report = doctor_json(&mut cmd);

    assert_eq!(report["schema_version"], "1.0");
    assert!(report["timestamp"].is_string());
    assert_eq!(check(&report, "config_valid")["status"], "ok");
    assert_eq!(check(&report, "data_dir")["status"], "error");
    assert_eq!(check(&report, "templates")["status"], "error");
    assert_eq!(check(&report, "assets")["status"], "warning");
}

#[test]
fn test_doctor_reports_invalid_config_and_exits_0() {
    let temp = temp_dir_in_workspace();
    ProjectFixture::new(temp.path()).with_config("[toolchain\npdflatex =");

    let mut cmd = Command::new(cargo_bin!("cvbuild"));
    cmd.current_dir(temp.path()).args(["doctor", "--json"]);
    let report = doctor_json(&mut cmd);

    let config = check(&report, "config_valid");
    assert_eq!(config["status"], "error");
    assert!(
        config["message"]
            .as_str()
            .unwrap()
            .contains("PROJECT_CONFIG_INVALID")
    );
    assert_eq!(report["checks"].as_array().unwrap().len(), 1);
}

#[test]
fn test_doctor_missing_toolchain_is_error() {
    let temp = temp_dir_in_workspace();
    ProjectFixture::complete(temp.path());

    let mut cmd = Command::new(cargo_bin!("cvbuild"));
    cmd.current_dir(temp.path())
        .env("CVBUILD_PDFLATEX", "cvbuild-no-such-pdflatex")
        .env("CVBUILD_BIBER", "cvbuild-no-such-biber")
        .args(["doctor", "--json"]);
    let report = doctor_json(&mut cmd);

    assert_eq!(check(&report, "pdflatex_available")["status"], "error");
    assert_eq!(check(&report, "biber_available")["status"], "error");
    assert_eq!(check(&report, "assets")["status"], "ok");
}

#[cfg(unix)]
#[test]
fn test_doctor_complete_project_with_fake_toolchain() {
    use cvbuild_testkit::FakeToolchain;

    let temp = temp_dir_in_workspace();
    let project = ProjectFixture::complete(temp.path().join("resume"));
    let toolchain = FakeToolchain::succeeding(temp.path().join("bin"));

    let mut cmd = Command::new(cargo_bin!("cvbuild"));
    cmd.current_dir(project.root())
        .envs(toolchain.env())
        .args(["doctor", "--json", "--lang", "english"]);
    let report = doctor_json(&mut cmd);

    for id in [
        "config_valid",
        "data_dir",
        "templates_dir",
        "templates",
        "assets",
        "pdflatex_available",
        "biber_available",
        "data_file",
    ] {
        assert_eq!(check(&report, id)["status"], "ok", "check {}", id);
    }

    let pdflatex = check(&report, "pdflatex_available");
    assert!(pdflatex["message"].as_str().unwrap().contains("fake"));
    assert_eq!(pdflatex["details"]["source"], "configured path");

    // Version probes are not builds
    assert!(toolchain.invocations().is_empty());
    assert!(!project.root().join("build").exists());
}

#[test]
fn test_doctor_reports_unknown_language() {
    let temp = temp_dir_in_workspace();
    ProjectFixture::complete(temp.path());

    let mut cmd = Command::new(cargo_bin!("cvbuild"));
    cmd.current_dir(temp.path())
        .args(["doctor", "--json", "--lang", "german"]);
    let report = doctor_json(&mut cmd);

    let data = check(&report, "data_file");
    assert_eq!(data["status"], "error");
    assert!(data["message"].as_str().unwrap().contains("DATA_NOT_FOUND"));
}
