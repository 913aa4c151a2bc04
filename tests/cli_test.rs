//! Integration tests for the imagetag binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// An empty project directory (no config, no helper).
fn empty_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(".imagetag")).unwrap();
    temp
}

fn setup_project(config: &str) -> TempDir {
    let temp = empty_project();
    fs::write(temp.path().join(".imagetag/config.yml"), config).unwrap();
    temp
}

/// Command rooted at `project` with the version variables scrubbed.
fn imagetag(project: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("imagetag"));
    cmd.arg("--project")
        .arg(project)
        .env_remove("ELASTIC_VERSION")
        .env_remove("STAGING_BUILD_NUM")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[cfg(unix)]
fn write_helper(project: &Path, script: &str) {
    use std::os::unix::fs::PermissionsExt;

    let bin = project.join("bin");
    fs::create_dir_all(&bin).unwrap();
    let path = bin.join("elastic-version");
    fs::write(&path, script).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("imagetag"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("names"))
        .stdout(predicate::str::contains("config"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("imagetag"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    imagetag(temp.path()).arg("frobnicate").assert().failure();
    Ok(())
}

#[test]
fn names_is_the_default_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    imagetag(temp.path())
        .env("ELASTIC_VERSION", "5.3.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("display name:    logstash 5.3.0"))
        .stdout(predicate::str::contains(
            "image:           docker.elastic.co/logstash/logstash:5.3.0",
        ))
        .stdout(predicate::str::contains("container name:  logstash"));
    Ok(())
}

#[test]
fn staging_build_is_appended_to_image_but_not_display_name(
) -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    imagetag(temp.path())
        .env("ELASTIC_VERSION", "5.3.0")
        .env("STAGING_BUILD_NUM", "d5b30bd7")
        .arg("names")
        .assert()
        .success()
        .stdout(predicate::str::contains("display name:    logstash 5.3.0\n"))
        .stdout(predicate::str::contains(
            "docker.elastic.co/logstash/logstash:5.3.0-d5b30bd7",
        ));
    Ok(())
}

#[test]
fn empty_staging_build_adds_no_suffix() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    imagetag(temp.path())
        .env("ELASTIC_VERSION", "6.0.0")
        .env("STAGING_BUILD_NUM", "")
        .arg("resolve")
        .assert()
        .success()
        .stdout("6.0.0\n");
    Ok(())
}

#[test]
fn resolve_base_omits_suffix() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    imagetag(temp.path())
        .env("ELASTIC_VERSION", "5.3.0")
        .env("STAGING_BUILD_NUM", "abc")
        .args(["resolve", "--base"])
        .assert()
        .success()
        .stdout("5.3.0\n");
    Ok(())
}

#[test]
fn resolve_json_reports_source() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    let output = imagetag(temp.path())
        .env("ELASTIC_VERSION", "5.3.0")
        .env("STAGING_BUILD_NUM", "abc")
        .args(["resolve", "--json"])
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["base"], "5.3.0");
    assert_eq!(json["build_suffix"], "abc");
    assert_eq!(json["full"], "5.3.0-abc");
    assert_eq!(json["source"]["kind"], "environment");
    assert_eq!(json["source"]["name"], "ELASTIC_VERSION");
    Ok(())
}

#[test]
fn set_override_beats_process_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    imagetag(temp.path())
        .env("ELASTIC_VERSION", "5.3.0")
        .args(["--set", "ELASTIC_VERSION=7.0.0", "resolve"])
        .assert()
        .success()
        .stdout("7.0.0\n");
    Ok(())
}

#[test]
fn malformed_set_override_is_a_config_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    imagetag(temp.path())
        .args(["--set", "ELASTIC_VERSION", "resolve"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected KEY=VALUE"));
    Ok(())
}

#[test]
fn env_file_supplies_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    let env_file = temp.path().join("ci.env");
    fs::write(
        &env_file,
        "# CI settings\nexport ELASTIC_VERSION=8.1.2\nSTAGING_BUILD_NUM=\"ff00\"\n",
    )?;

    imagetag(temp.path())
        .arg("--env-file")
        .arg(&env_file)
        .arg("resolve")
        .assert()
        .success()
        .stdout("8.1.2-ff00\n");
    Ok(())
}

#[test]
fn process_environment_beats_env_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    let env_file = temp.path().join("ci.env");
    fs::write(&env_file, "ELASTIC_VERSION=8.1.2\n")?;

    imagetag(temp.path())
        .env("ELASTIC_VERSION", "5.3.0")
        .arg("--env-file")
        .arg(&env_file)
        .arg("resolve")
        .assert()
        .success()
        .stdout("5.3.0\n");
    Ok(())
}

#[test]
fn missing_env_file_is_a_config_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    imagetag(temp.path())
        .args(["--env-file", "does-not-exist.env", "resolve"])
        .assert()
        .code(2);
    Ok(())
}

#[test]
fn missing_helper_fails_with_exit_code_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    imagetag(temp.path())
        .arg("resolve")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Version helper not found"));
    Ok(())
}

#[test]
fn invalid_config_fails_with_exit_code_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("naming:\n  colour: blue\n");
    imagetag(temp.path())
        .env("ELASTIC_VERSION", "5.3.0")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn config_naming_is_applied() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        r#"
naming:
  product: kibana
  repository: docker.elastic.co/kibana/kibana
  container_name: kibana
"#,
    );
    imagetag(temp.path())
        .env("ELASTIC_VERSION", "7.10.0")
        .args(["names", "--shell", "--prefix", "K_"])
        .assert()
        .success()
        .stdout(
            "K_VERSION=7.10.0\n\
             K_DISPLAY_NAME='kibana 7.10.0'\n\
             K_IMAGE=docker.elastic.co/kibana/kibana:7.10.0\n\
             K_CONTAINER_NAME=kibana\n",
        );
    Ok(())
}

#[test]
fn config_env_is_the_lowest_layer() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("env:\n  ELASTIC_VERSION: \"1.2.3\"\n");
    imagetag(temp.path())
        .arg("resolve")
        .assert()
        .success()
        .stdout("1.2.3\n");

    imagetag(temp.path())
        .env("ELASTIC_VERSION", "4.5.6")
        .arg("resolve")
        .assert()
        .success()
        .stdout("4.5.6\n");
    Ok(())
}

#[test]
fn names_shell_output_defaults_prefix() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    imagetag(temp.path())
        .env("ELASTIC_VERSION", "5.3.0")
        .args(["names", "--shell"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IMAGETAG_VERSION=5.3.0\n"))
        .stdout(predicate::str::contains(
            "IMAGETAG_DISPLAY_NAME='logstash 5.3.0'\n",
        ))
        .stdout(predicate::str::contains("IMAGETAG_CONTAINER_NAME=logstash\n"));
    Ok(())
}

#[test]
fn names_json_includes_version_and_names() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    let output = imagetag(temp.path())
        .env("ELASTIC_VERSION", "5.3.0")
        .env("STAGING_BUILD_NUM", "d5b30bd7")
        .args(["names", "--json"])
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["version"]["full"], "5.3.0-d5b30bd7");
    assert_eq!(json["display_name"], "logstash 5.3.0");
    assert_eq!(
        json["image_reference"],
        "docker.elastic.co/logstash/logstash:5.3.0-d5b30bd7"
    );
    assert_eq!(json["container_name"], "logstash");
    Ok(())
}

#[test]
fn names_json_and_shell_conflict() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    imagetag(temp.path())
        .args(["names", "--json", "--shell"])
        .assert()
        .failure();
    Ok(())
}

#[test]
fn verbose_explains_sources_on_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    imagetag(temp.path())
        .env("ELASTIC_VERSION", "5.3.0")
        .args(["-v", "resolve"])
        .assert()
        .success()
        .stdout("5.3.0\n")
        .stderr(predicate::str::contains("ELASTIC_VERSION"));
    Ok(())
}

#[test]
fn config_command_prints_effective_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("naming:\n  product: kibana\n");
    imagetag(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("product: kibana"))
        .stdout(predicate::str::contains("ELASTIC_VERSION"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn helper_output_is_trimmed_and_used() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    write_helper(temp.path(), "#!/bin/sh\necho '  5.4.1  '\n");

    imagetag(temp.path())
        .env("STAGING_BUILD_NUM", "abc123")
        .arg("names")
        .assert()
        .success()
        .stdout(predicate::str::contains("display name:    logstash 5.4.1\n"))
        .stdout(predicate::str::contains(
            "docker.elastic.co/logstash/logstash:5.4.1-abc123",
        ));
    Ok(())
}

#[cfg(unix)]
#[test]
fn helper_is_not_run_when_version_is_set() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    let marker = temp.path().join("helper-ran");
    write_helper(
        temp.path(),
        &format!("#!/bin/sh\ntouch '{}'\necho 9.9.9\n", marker.display()),
    );

    imagetag(temp.path())
        .env("ELASTIC_VERSION", "")
        .arg("resolve")
        .assert()
        .success()
        .stdout("\n");
    assert!(!marker.exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn failing_helper_fails_with_exit_code_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    write_helper(temp.path(), "#!/bin/sh\necho 'no version file' >&2\nexit 3\n");

    imagetag(temp.path())
        .arg("resolve")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no version file"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn helper_flag_overrides_configured_helper() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    let temp = empty_project();
    let script = temp.path().join("tools/version.sh");
    fs::create_dir_all(script.parent().unwrap())?;
    fs::write(&script, "#!/bin/sh\necho 3.2.1\n")?;
    let mut perms = fs::metadata(&script)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&script, perms)?;

    imagetag(temp.path())
        .args(["--helper", "tools/version.sh", "resolve"])
        .assert()
        .success()
        .stdout("3.2.1\n");
    Ok(())
}

#[test]
fn names_rejects_unsafe_prefix() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    imagetag(temp.path())
        .env("ELASTIC_VERSION", "5.3.0")
        .args(["names", "--shell", "--prefix", "X;touch pwned;"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn helper_with_invalid_utf8_output_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = empty_project();
    write_helper(temp.path(), "#!/bin/sh\nprintf '5.3.\\377'\n");

    imagetag(temp.path())
        .arg("names")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid output"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn non_unicode_version_variable_is_not_treated_as_unset(
) -> Result<(), Box<dyn std::error::Error>> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = empty_project();
    let marker = temp.path().join("helper-ran");
    write_helper(
        temp.path(),
        &format!("#!/bin/sh\ntouch '{}'\necho 9.9.9\n", marker.display()),
    );

    imagetag(temp.path())
        .env("ELASTIC_VERSION", OsStr::from_bytes(b"5.3.0\xff"))
        .arg("resolve")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("ELASTIC_VERSION"));
    assert!(!marker.exists());
    Ok(())
}
