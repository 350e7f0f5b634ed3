use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("jfrog-apps-config"));
    cmd.env_remove("JFROG_APPS_CONFIG_DIR")
        .env_remove("JFROG_APPS_CONFIG_FORMAT")
        .env("NO_COLOR", "1");
    cmd
}

fn write_config(repo: &Path, contents: &str) {
    let dir = repo.join(".jfrog");
    fs::create_dir_all(&dir).expect("failed to create .jfrog");
    fs::write(dir.join("jfrog-apps-config.yml"), contents).expect("failed to write config");
}

const SAMPLE: &str = "\
version: \"1.0\"
modules:
  - name: payments
    source_root: services/payments
    exclude_scanners: [iac]
    scanners:
      sast:
        language: python
        working_dirs: [app]
        excluded_rules: [python-sql-injection]
";

#[test]
fn show_reports_missing_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    cli()
        .arg("show")
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No JFrog Apps Config found"));

    Ok(())
}

#[test]
fn show_json_missing_config_is_null() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    cli()
        .args(["show", "--format", "json", "--dir"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"data\": null"));

    Ok(())
}

#[test]
fn show_pretty_lists_modules() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    write_config(temp.path(), SAMPLE);

    cli()
        .arg("show")
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("payments"))
        .stdout(predicate::str::contains("Language: python"))
        .stdout(predicate::str::contains("iac (excluded)"));

    Ok(())
}

#[test]
fn show_json_contains_document() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    write_config(temp.path(), SAMPLE);

    let assert = cli()
        .args(["show", "--format", "json", "--dir"])
        .arg(temp.path())
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(value["data"]["version"], "1.0");
    assert_eq!(value["data"]["modules"][0]["scanners"]["sast"]["working_dirs"][0], "app");
    assert!(value["data"]["modules"][0].get("exclude_patterns").is_none());

    Ok(())
}

#[test]
fn show_table_has_row_per_scanner() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    write_config(temp.path(), SAMPLE);

    cli()
        .args(["show", "--format", "table", "--dir"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("SCANNER"))
        .stdout(predicate::str::contains("excluded"))
        .stdout(predicate::str::contains("configured"))
        .stdout(predicate::str::contains("default"));

    Ok(())
}

#[test]
fn show_fails_on_malformed_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    write_config(temp.path(), "modules: [unclosed\n");

    cli()
        .arg("show")
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));

    Ok(())
}

#[test]
fn dir_can_come_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    write_config(temp.path(), SAMPLE);

    cli()
        .arg("status")
        .env("JFROG_APPS_CONFIG_DIR", temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file found"))
        .stdout(predicate::str::contains("Modules: 1"));

    Ok(())
}

#[test]
fn validate_accepts_good_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    write_config(temp.path(), SAMPLE);

    cli()
        .arg("validate")
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));

    Ok(())
}

#[test]
fn validate_reports_violations() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let file = temp.path().join("custom.yml");
    fs::write(&file, "version: \"1.0\"\nmodules:\n  - name: 1\n")?;

    cli()
        .arg("validate")
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("/modules/0/name"))
        .stderr(predicate::str::contains("1 schema violation(s) found"));

    Ok(())
}

#[test]
fn validate_without_config_is_noop() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    cli()
        .arg("validate")
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to validate"));

    Ok(())
}

#[test]
fn schema_prints_json_schema() -> Result<(), Box<dyn std::error::Error>> {
    let assert = cli().arg("schema").assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let schema: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(schema["title"], "JFrog Apps Config");

    Ok(())
}

#[test]
fn version_prints_crate_version() {
    cli()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completion_generates_script() {
    cli()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jfrog-apps-config"));
}
