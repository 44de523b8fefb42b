//! End-to-end tests for the release-lines CLI
//!
//! These tests verify:
//! - Output lines for repositories served by a mock GitHub API
//! - JSON output schema
//! - Exit codes for fatal errors and partial failures

use assert_cmd::Command;
use mockito::{Matcher, Mock, Server, ServerGuard};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn release_lines() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_release-lines"));
    cmd.env_remove("GITHUB_TOKEN")
        .env_remove("GITHUB_API_URL")
        .env_remove("RELEASE_LINES_LOG");
    cmd
}

/// Write an input file into a fresh temp directory
fn write_input(content: &str) -> (TempDir, String) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("repos.txt");
    fs::write(&path, content).unwrap();
    let path = path.to_str().unwrap().to_string();
    (temp_dir, path)
}

fn mock_releases(server: &mut ServerGuard, repo: &str, tags: &[&str]) -> Mock {
    let body = serde_json::to_string(
        &tags
            .iter()
            .map(|t| serde_json::json!({"tag_name": t, "draft": false, "prerelease": false}))
            .collect::<Vec<_>>(),
    )
    .unwrap();

    server
        .mock("GET", format!("/repos/{}/releases", repo).as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

mod fatal_errors {
    use super::*;

    #[test]
    fn test_missing_input_argument() {
        release_lines()
            .assert()
            .code(1)
            .stderr(predicate::str::contains("no input file given"));
    }

    #[test]
    fn test_unreadable_input_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.txt");

        release_lines()
            .arg(path.to_str().unwrap())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("input file not found"));
    }

    #[test]
    fn test_malformed_input_file() {
        let (_dir, path) = write_input("repository,min_version\nnot-a-repo,1.0.0\n");

        release_lines()
            .arg(&path)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("line 2"));
    }

    #[test]
    fn test_invalid_option_value() {
        let (_dir, path) = write_input("repository,min_version\n");

        release_lines()
            .args(["--per-page", "0", &path])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("--per-page"));
    }

    #[test]
    fn test_conflicting_flags_are_fatal() {
        let (_dir, path) = write_input("repository,min_version\n");

        release_lines()
            .args(["-q", "-v", &path])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("cannot be used with"));
    }

    #[test]
    fn test_unparsable_option_value_is_fatal() {
        let (_dir, path) = write_input("repository,min_version\n");

        release_lines()
            .args(["--per-page", "256", &path])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("--per-page"));
    }

    #[test]
    fn test_unknown_flag_is_fatal() {
        release_lines().arg("--bogus").assert().code(1);
    }

    #[test]
    fn test_help_exits_successfully() {
        release_lines()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage"));
    }
}

mod selection {
    use super::*;

    #[test]
    fn test_prints_latest_versions() {
        let mut server = Server::new();
        let _k8s = mock_releases(
            &mut server,
            "kubernetes/kubernetes",
            &["v1.2.0", "v1.2.3", "v1.3.0-beta", "v1.3.0", "v2.0.0", "v0.9.0"],
        );
        let _prom = mock_releases(
            &mut server,
            "prometheus/prometheus",
            &["v2.48.1", "v2.48.0", "v2.47.2"],
        );
        let (_dir, path) = write_input(
            "repository,min_version\nkubernetes/kubernetes,1.0.0\nprometheus/prometheus,2.48.0\n",
        );

        release_lines()
            .args(["--api-url", &server.url(), "--quiet", &path])
            .assert()
            .success()
            .stdout(
                "latest versions of kubernetes/kubernetes: [2.0.0 1.3.0 1.2.3]\n\
                 latest versions of prometheus/prometheus: [2.48.1]\n",
            );
    }

    #[test]
    fn test_repository_without_matching_releases() {
        let mut server = Server::new();
        let _mock = mock_releases(&mut server, "acme/old", &["v0.1.0"]);
        let (_dir, path) = write_input("acme/old,1.0.0\n");

        release_lines()
            .args(["--api-url", &server.url(), &path])
            .assert()
            .success()
            .stdout("latest versions of acme/old: []\n");
    }

    #[test]
    fn test_json_output() {
        let mut server = Server::new();
        let _mock = mock_releases(&mut server, "helm/helm", &["v3.13.3", "v3.13.2", "v3.12.3"]);
        let (_dir, path) = write_input("repository,min_version\nhelm/helm,3.12.0\n");

        let output = release_lines()
            .args(["--api-url", &server.url(), "--json", &path])
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["repositories"][0]["repository"], "helm/helm");
        assert_eq!(
            json["repositories"][0]["latest"],
            serde_json::json!(["3.13.3", "3.12.3"])
        );
    }
}

mod partial_failures {
    use super::*;

    #[test]
    fn test_missing_repository_is_skipped() {
        let mut server = Server::new();
        let _missing = server
            .mock("GET", "/repos/acme/missing/releases")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body(r#"{"message": "Not Found"}"#)
            .create();
        let _ok = mock_releases(&mut server, "acme/tool", &["v1.1.0", "v1.0.9"]);
        let (_dir, path) = write_input("acme/missing,1.0.0\nacme/tool,1.0.0\n");

        release_lines()
            .args(["--api-url", &server.url(), "--no-color", &path])
            .assert()
            .code(2)
            .stdout("latest versions of acme/tool: [1.1.0 1.0.9]\n")
            .stderr(predicate::str::contains(
                "warning: skipping acme/missing (line 1)",
            ));
    }

    #[test]
    fn test_invalid_minimum_version_is_skipped() {
        let mut server = Server::new();
        let _ok = mock_releases(&mut server, "acme/tool", &["v1.1.0"]);
        let (_dir, path) = write_input("acme/tool,1.x\nacme/tool,1.0.0\n");

        release_lines()
            .args(["--api-url", &server.url(), "--no-color", &path])
            .assert()
            .code(2)
            .stdout("latest versions of acme/tool: [1.1.0]\n")
            .stderr(predicate::str::contains("invalid minimum version"));
    }

    #[test]
    fn test_warnings_are_plain_when_stderr_is_not_a_terminal() {
        let mut server = Server::new();
        let _missing = server
            .mock("GET", "/repos/acme/missing/releases")
            .match_query(Matcher::Any)
            .with_status(404)
            .create();
        let (_dir, path) = write_input("acme/missing,1.0.0\n");

        release_lines()
            .args(["--api-url", &server.url(), &path])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("warning: skipping acme/missing"))
            .stderr(predicate::str::contains("\u{1b}[").not());
    }

    #[test]
    fn test_malformed_tags_do_not_fail_the_run() {
        let mut server = Server::new();
        let _mock = mock_releases(&mut server, "acme/tool", &["nightly", "v2.0.0", "v2.0"]);
        let (_dir, path) = write_input("acme/tool,1.0.0\n");

        release_lines()
            .args(["--api-url", &server.url(), "--verbose", "--no-color", &path])
            .assert()
            .success()
            .stdout("latest versions of acme/tool: [2.0.0]\n")
            .stderr(predicate::str::contains("ignored tag 'nightly'"));
    }
}
