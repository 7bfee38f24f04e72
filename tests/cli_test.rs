//! Integration tests for the gignr binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

struct Workspace {
    home: TempDir,
    project: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
            project: TempDir::new().unwrap(),
        }
    }

    fn gignr(&self, api_url: &str) -> Command {
        let mut cmd = Command::new(cargo_bin("gignr"));
        cmd.current_dir(self.project.path())
            .env("GIGNR_HOME", self.home.path())
            .env("GIGNR_API_URL", api_url)
            .env_remove("GITHUB_TOKEN")
            .env_remove("RUST_LOG");
        cmd
    }

    fn output(&self) -> std::path::PathBuf {
        self.project.path().join(".gitignore")
    }
}

/// Serve `Go.gitignore` from the root of github/gitignore.
fn mock_go_template(server: &MockServer) {
    let download_url = server.url("/raw/Go.gitignore");
    server.mock(|when, then| {
        when.method(GET).path("/repos/github/gitignore/contents");
        then.status(200).json_body(serde_json::json!([
            {"name": "Go.gitignore", "type": "file", "download_url": download_url},
            {"name": "Global", "type": "dir", "download_url": null}
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/raw/Go.gitignore");
        then.status(200).body("*.exe\n*.test\n");
    });
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("gignr"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("repo"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("gignr"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_create_requires_template() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new();
    ws.gignr("http://127.0.0.1:1").arg("create").assert().failure();
    assert!(!ws.output().exists());
    Ok(())
}

#[test]
fn create_from_builtin_prefix() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    mock_go_template(&server);
    let ws = Workspace::new();

    ws.gignr(&server.base_url())
        .args(["create", "gh:Go"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .gitignore!"));

    let written = fs::read_to_string(ws.output())?;
    assert!(written.contains("GO Template (GH)"));
    assert!(written.contains("*.exe\n*.test\n"));
    assert!(written.ends_with("\n\n"));
    Ok(())
}

#[test]
fn create_matches_name_case_insensitively() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    mock_go_template(&server);
    let ws = Workspace::new();

    ws.gignr(&server.base_url())
        .args(["create", "gh:go"])
        .assert()
        .success();

    assert!(fs::read_to_string(ws.output())?.contains("*.exe"));
    Ok(())
}

#[test]
fn create_skips_unknown_prefix() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    mock_go_template(&server);
    let ws = Workspace::new();

    ws.gignr(&server.base_url())
        .args(["create", "unknownprefix:foo", "gh:Go"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Unknown template prefix or missing repository: unknownprefix",
        ))
        .stdout(predicate::str::contains("Created .gitignore!"));

    let written = fs::read_to_string(ws.output())?;
    assert!(written.contains("GO Template (GH)"));
    assert!(!written.contains("UNKNOWNPREFIX"));
    Ok(())
}

#[test]
fn create_skips_missing_template() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    mock_go_template(&server);
    let ws = Workspace::new();

    ws.gignr(&server.base_url())
        .args(["create", "gh:Cobol", "gh:Go"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Template Cobol not found in gh."));

    assert!(fs::read_to_string(ws.output())?.contains("*.exe"));
    Ok(())
}

#[test]
fn unreachable_listing_leaves_output_untouched() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new();
    fs::write(ws.output(), "previous\n")?;

    ws.gignr("http://127.0.0.1:1")
        .args(["create", "gh:Go"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unable to fetch templates from gh"))
        .stderr(predicate::str::contains("No .gitignore file created."))
        .stdout(predicate::str::contains("Created").not());

    assert_eq!(fs::read_to_string(ws.output())?, "previous\n");
    Ok(())
}

#[test]
fn unreachable_listing_creates_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new();

    ws.gignr("http://127.0.0.1:1")
        .args(["create", "gh:Go"])
        .assert()
        .code(1);

    assert!(!ws.output().exists());
    Ok(())
}

#[test]
fn create_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    mock_go_template(&server);
    let ws = Workspace::new();

    ws.gignr(&server.base_url())
        .args(["create", "gh:Go"])
        .assert()
        .success();
    let first = fs::read(ws.output())?;

    ws.gignr(&server.base_url())
        .args(["create", "gh:Go"])
        .assert()
        .success();
    let second = fs::read(ws.output())?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn create_preserves_argument_order_with_local_template() -> Result<(), Box<dyn std::error::Error>>
{
    let server = MockServer::start();
    mock_go_template(&server);
    let ws = Workspace::new();
    let templates = ws.home.path().join("templates");
    fs::create_dir_all(&templates)?;
    fs::write(templates.join("secrets.gitignore"), ".env\n")?;

    ws.gignr(&server.base_url())
        .args(["create", "secrets", "gh:Go"])
        .assert()
        .success();

    let written = fs::read_to_string(ws.output())?;
    assert!(written.contains("SECRETS Template (LOCAL)"));
    assert!(written.find(".env").unwrap() < written.find("*.exe").unwrap());
    Ok(())
}

#[test]
fn create_from_custom_repository() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let download_url = server.url("/raw/acme/Service.gitignore");
    server.mock(|when, then| {
        when.method(GET).path("/repos/acme/ignores/contents");
        then.status(200).json_body(serde_json::json!([
            {"name": "Service.gitignore", "type": "file", "download_url": download_url}
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/raw/acme/Service.gitignore");
        then.status(200).body("/dist\n");
    });
    let ws = Workspace::new();

    ws.gignr(&server.base_url())
        .args(["repo", "add", "work", "https://github.com/acme/ignores"])
        .assert()
        .success();

    ws.gignr(&server.base_url())
        .args(["create", "work:service"])
        .assert()
        .success();

    let written = fs::read_to_string(ws.output())?;
    assert!(written.contains("WORK:SERVICE Template (WORK)"));
    assert!(written.contains("/dist"));
    Ok(())
}

#[test]
fn repo_add_list_remove() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new();
    let api = "http://127.0.0.1:1";

    ws.gignr(api)
        .args(["repo", "add", "work", "git@github.com:acme/ignores.git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added repository 'work'"));

    ws.gignr(api)
        .args(["repo", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("git@github.com:acme/ignores.git"));

    ws.gignr(api)
        .args(["repo", "remove", "work"])
        .assert()
        .success();

    ws.gignr(api)
        .args(["repo", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No custom repositories"));
    Ok(())
}

#[test]
fn repo_add_rejects_builtin_alias() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new();

    ws.gignr("http://127.0.0.1:1")
        .args(["repo", "add", "tt", "acme/ignores"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("built-in prefix"));
    Ok(())
}

#[test]
fn save_list_remove_local_template() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new();
    let api = "http://127.0.0.1:1";
    fs::write(ws.output(), "target/\n")?;

    ws.gignr(api)
        .args(["save", "rusty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved template 'rusty'"));

    ws.gignr(api)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("rusty"));

    ws.gignr(api)
        .args(["save", "rusty"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    ws.gignr(api)
        .args(["remove", "rusty"])
        .assert()
        .success();

    assert!(!ws.home.path().join("templates/rusty.gitignore").exists());
    Ok(())
}

#[test]
fn list_remote_source() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    mock_go_template(&server);
    let ws = Workspace::new();

    ws.gignr(&server.base_url())
        .args(["list", "--source", "gh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Go"))
        .stdout(predicate::str::contains("Global").not());
    Ok(())
}

#[test]
fn invalid_config_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new();
    fs::write(ws.home.path().join("config.yml"), "repositories: [not, a, map]\n")?;

    ws.gignr("http://127.0.0.1:1")
        .args(["create", "gh:Go"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn completions_generate() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("gignr"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gignr"));
    Ok(())
}
