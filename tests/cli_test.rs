//! Integration tests for the command-line interface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const LATEST_PATH: &str = "/repos/gbyat/wordpress-plugin-starter/releases/latest";

const RELEASE: &str = r#"{
    "tag_name": "v1.0.4",
    "body": "Bug fixes",
    "published_at": "2024-03-01T10:00:00Z",
    "assets": [
        {"name": "wordpress-plugin-starter.zip", "browser_download_url": "https://downloads.test/starter.zip"}
    ]
}"#;

/// Isolated config, settings and cache locations.
struct Sandbox {
    temp: TempDir,
}

impl Sandbox {
    fn new(api_base: &str) -> Self {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("config.yml"),
            format!("current_version: \"1.0.3\"\napi_base: \"{}\"\n", api_base),
        )
        .unwrap();
        Self { temp }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.temp.path().join(name)
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("plugin-updater"));
        cmd.env_remove("PLUGIN_UPDATER_TOKEN")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.path("config.yml"))
            .arg("--settings")
            .arg(self.path("settings.yml"))
            .arg("--cache-dir")
            .arg(self.path("cache"));
        cmd
    }
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("plugin-updater"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("clear-cache"))
        .stdout(predicate::str::contains("post-install"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("plugin-updater"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_check_reports_update() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path(LATEST_PATH);
        then.status(200).body(RELEASE);
    });
    let sandbox = Sandbox::new(&server.base_url());

    sandbox
        .cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Update available: 1.0.3 → 1.0.4"))
        .stdout(predicate::str::contains("https://downloads.test/starter.zip"));

    // Second run is answered from the cache directory
    sandbox.cmd().arg("check").assert().success();
    mock.assert_calls(1);
    Ok(())
}

#[test]
fn cli_check_fresh_bypasses_cache() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path(LATEST_PATH);
        then.status(200).body(RELEASE);
    });
    let sandbox = Sandbox::new(&server.base_url());

    sandbox.cmd().arg("check").assert().success();
    sandbox.cmd().args(["check", "--fresh"]).assert().success();

    mock.assert_calls(2);
    Ok(())
}

#[test]
fn cli_check_json() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(LATEST_PATH);
        then.status(200).body(RELEASE);
    });
    let sandbox = Sandbox::new(&server.base_url());

    let output = sandbox.cmd().args(["check", "--json"]).output()?;
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["latest_version"], "1.0.4");
    assert_eq!(report["update_available"], true);
    assert_eq!(report["offer"]["slug"], "wordpress-plugin-starter");
    Ok(())
}

#[test]
fn cli_check_unavailable_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(LATEST_PATH);
        then.status(500);
    });
    let sandbox = Sandbox::new(&server.base_url());

    sandbox.cmd().arg("check").assert().code(2);
    Ok(())
}

#[test]
fn cli_token_set_is_sent() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(LATEST_PATH)
            .header("Authorization", "token ghp_saved_token");
        then.status(200).body(RELEASE);
    });
    let sandbox = Sandbox::new(&server.base_url());

    sandbox
        .cmd()
        .args(["token", "set", "ghp_saved_token"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ghp_save..."));
    sandbox
        .cmd()
        .args(["token", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ghp_save...").and(predicate::str::contains("ghp_saved_token").not()));

    sandbox.cmd().arg("check").assert().success();
    mock.assert();
    Ok(())
}

#[test]
fn cli_status_without_network() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("http://127.0.0.1:1");

    sandbox
        .cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("could not fetch latest release"))
        .stdout(predicate::str::contains("gbyat/wordpress-plugin-starter"));
    Ok(())
}

#[test]
fn cli_clear_cache_and_post_install() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path(LATEST_PATH);
        then.status(200).body(RELEASE);
    });
    let sandbox = Sandbox::new(&server.base_url());

    sandbox.cmd().arg("check").assert().success();
    sandbox
        .cmd()
        .arg("clear-cache")
        .assert()
        .success()
        .stdout(predicate::str::contains("Update cache cleared"));
    sandbox.cmd().arg("check").assert().success();
    sandbox
        .cmd()
        .args(["post-install", "wordpress-plugin-starter/plugin-name.php"])
        .assert()
        .success();
    sandbox.cmd().arg("check").assert().success();

    mock.assert_calls(3);
    Ok(())
}

#[test]
fn cli_invalid_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("http://127.0.0.1:1");
    fs::write(sandbox.path("config.yml"), "repository: not-a-repo\n")?;

    sandbox
        .cmd()
        .arg("status")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("owner/repo"));
    Ok(())
}

#[test]
fn cli_rejects_oversized_cache_ttl() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("http://127.0.0.1:1");
    fs::write(
        sandbox.path("config.yml"),
        "cache_ttl_secs: 9223372036854775807\n",
    )?;

    sandbox
        .cmd()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cache_ttl_secs"));
    Ok(())
}

#[test]
fn cli_generates_completions() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("plugin-updater"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("plugin-updater"));
    Ok(())
}
