//! End-to-end CLI tests
//!
//! The binary only ever talks to the system through child processes, so
//! these tests put stub `lxc-*` and `systemd-run` scripts on PATH and
//! observe what the CLI does with them.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stub(dir: &Path, name: &str, script: &str) {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
}

fn lxcm(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lxcm").unwrap();
    let path = format!(
        "{}:{}",
        dir.display(),
        std::env::var("PATH").unwrap_or_default()
    );
    cmd.env("PATH", path);
    cmd
}

#[test]
fn list_prints_one_name_per_line() {
    let dir = TempDir::new().unwrap();
    stub(dir.path(), "lxc-ls", "printf 'web\\ndb\\n'");

    lxcm(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout("web\ndb\n");
}

#[test]
fn list_details_shows_probed_state() {
    let dir = TempDir::new().unwrap();
    stub(dir.path(), "lxc-ls", "printf 'web\\n'");
    stub(
        dir.path(),
        "lxc-info",
        "printf 'State: RUNNING\\nIP: 10.0.0.2\\nPID: 1234\\n'",
    );

    lxcm(dir.path())
        .args(["list", "--details"])
        .assert()
        .success()
        .stdout(predicate::str::contains("web"))
        .stdout(predicate::str::contains("running"))
        .stdout(predicate::str::contains("10.0.0.2"));
}

#[test]
fn info_json_reports_parsed_fields() {
    let dir = TempDir::new().unwrap();
    stub(
        dir.path(),
        "lxc-info",
        "printf 'State: RUNNING\\nIP: 10.0.0.2\\nPID: 1234\\n'",
    );

    lxcm(dir.path())
        .args(["container", "--name", "web", "info", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"state\": \"running\""))
        .stdout(predicate::str::contains("\"ip\": \"10.0.0.2\""))
        .stdout(predicate::str::contains("\"pid\": \"1234\""));
}

#[test]
fn info_of_unknown_container_is_absent() {
    let dir = TempDir::new().unwrap();
    stub(dir.path(), "lxc-info", "exit 1");

    lxcm(dir.path())
        .args(["container", "--name", "gone", "info"])
        .assert()
        .success()
        .stdout("state: absent\n");
}

#[test]
fn stop_of_unknown_container_is_a_noop() {
    let dir = TempDir::new().unwrap();
    stub(dir.path(), "lxc-info", "exit 1");
    // A delegated command would fail loudly if one were issued.
    stub(dir.path(), "systemd-run", "exit 97");

    lxcm(dir.path())
        .args(["container", "--name", "gone", "stop"])
        .assert()
        .success();
}

#[test]
fn destroy_running_without_force_advises_force() {
    let dir = TempDir::new().unwrap();
    stub(dir.path(), "lxc-info", "printf 'State: RUNNING\\n'");
    stub(dir.path(), "systemd-run", "exit 97");

    lxcm(dir.path())
        .args(["container", "--name", "web", "destroy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn failed_delegation_reports_command_and_output() {
    let dir = TempDir::new().unwrap();
    stub(dir.path(), "lxc-info", "printf 'State: RUNNING\\n'");
    stub(
        dir.path(),
        "systemd-run",
        "echo 'no such container' >&2; exit 1",
    );

    lxcm(dir.path())
        .args(["container", "--name", "web", "stop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lxc-stop-web"))
        .stderr(predicate::str::contains("no such container"));
}

#[test]
fn create_requires_template_flags() {
    let dir = TempDir::new().unwrap();

    lxcm(dir.path())
        .args(["container", "--name", "web", "create"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--distribution"));
}

#[test]
fn dry_run_issues_no_delegated_commands() {
    let dir = TempDir::new().unwrap();
    stub(dir.path(), "lxc-info", "printf 'State: RUNNING\\n'");
    stub(dir.path(), "systemd-run", "exit 97");

    lxcm(dir.path())
        .args(["--dry-run", "container", "--name", "web", "stop"])
        .assert()
        .success();
}

#[test]
fn exec_is_an_alias_for_attach() {
    let dir = TempDir::new().unwrap();
    stub(dir.path(), "lxc-info", "printf 'State: RUNNING\\n'");
    stub(dir.path(), "systemd-run", "exit 0");

    lxcm(dir.path())
        .args([
            "container", "--name", "web", "exec", "--no-bind", "--", "true",
        ])
        .assert()
        .success();
}
