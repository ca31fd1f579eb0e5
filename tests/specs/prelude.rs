//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the deltweet binary against a
//! throwaway workspace.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub use wiremock::matchers::{body_partial_json, method, path};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DELETE_PATH: &str = "/i/api/graphql/VaenaVgh5q5ih7kvyVjgtg/DeleteTweet";

// Spec polling timeouts
pub const SPEC_POLL_INTERVAL_MS: u64 = 10;
pub const SPEC_WAIT_MAX_MS: u64 = 5000;

pub const AUTH_DATA: &str = "\
x-csrf-token: csrf123
authorization: Bearer AAAA
cookie: auth_token=abc; ct0=csrf123
";

/// Returns the path to a binary, checking llvm-cov target directory first.
/// Falls back to resolving relative to the test binary itself when
/// CARGO_MANIFEST_DIR is stale.
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug").join(name);
    if llvm_cov_path.exists() {
        return llvm_cov_path;
    }

    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }

    // The test binary lives at target/debug/deps/specs-<hash>
    if let Ok(exe) = std::env::current_exe() {
        if let Some(debug_dir) = exe.parent().and_then(|d| d.parent()) {
            let fallback = debug_dir.join(name);
            if fallback.exists() {
                return fallback;
            }
        }
    }

    standard
}

/// Returns a Command configured to run the deltweet binary
pub fn deltweet_cmd() -> Command {
    Command::new(binary_path("deltweet"))
}

/// Create a CLI builder for deltweet invocations
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            // Keep specs off the real endpoint unless a server is attached
            envs: vec![("DELTWEET_API_BASE".into(), "http://127.0.0.1:9".into())],
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Point the binary at a workspace's archive, auth file and cache
    pub fn workspace(self, ws: &Workspace) -> Self {
        let tweets = ws.tweets_path();
        let auth = ws.auth_path();
        let cache = ws.cache_path();
        self.args(&[
            "-t",
            &tweets.to_string_lossy(),
            "-a",
            &auth.to_string_lossy(),
            "-c",
            &cache.to_string_lossy(),
        ])
    }

    /// Send delete requests to a mock server
    pub fn server(self, server: &MockServer) -> Self {
        self.env("DELTWEET_API_BASE", server.uri())
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl Into<String>) -> Self {
        self.envs.push((key.to_string(), value.into()));
        self
    }

    /// Build the command without running it
    pub fn command(self) -> Command {
        let mut cmd = deltweet_cmd();
        cmd.args(&self.args);
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("DELTWEET_CHECKPOINT_EVERY");
        cmd.env_remove("DELTWEET_STATS_EVERY");
        for (key, value) in self.envs {
            cmd.env(key, value);
        }
        cmd
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect exit code 1
    pub fn fails(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert_eq!(
            output.status.code(),
            Some(1),
            "expected exit code 1\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Async variants for specs that hold a mock server on the runtime
    pub async fn passes_async(self) -> RunAssert {
        tokio::task::spawn_blocking(move || self.passes())
            .await
            .unwrap()
    }

    pub async fn fails_async(self) -> RunAssert {
        tokio::task::spawn_blocking(move || self.fails())
            .await
            .unwrap()
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    pub output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout contains substring.
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }

    /// Assert stderr does not contain substring.
    pub fn stderr_lacks(self, unexpected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            !stderr.contains(unexpected),
            "stderr should not contain '{}'\nstderr: {}",
            unexpected,
            stderr
        );
        self
    }
}

// =============================================================================
// Polling
// =============================================================================

/// Poll a condition until it returns true or timeout is reached.
pub fn wait_for<F>(timeout_ms: u64, mut condition: F) -> bool
where
    F: FnMut() -> bool,
{
    let start = std::time::Instant::now();
    let timeout = std::time::Duration::from_millis(timeout_ms);
    let poll_interval = std::time::Duration::from_millis(SPEC_POLL_INTERVAL_MS);

    while start.elapsed() < timeout {
        if condition() {
            return true;
        }
        std::thread::sleep(poll_interval);
    }
    false
}

// =============================================================================
// Workspace
// =============================================================================

/// Temporary directory holding the archive, credentials and cache.
pub struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    /// A workspace with valid credentials and an archive of `ids`
    pub fn with_tweets(ids: &[&str]) -> Self {
        let ws = Self::empty();
        ws.write_auth(AUTH_DATA);
        ws.write_tweets(ids);
        ws
    }

    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn tweets_path(&self) -> PathBuf {
        self.path().join("tweets.js")
    }

    pub fn auth_path(&self) -> PathBuf {
        self.path().join("authdata.txt")
    }

    pub fn cache_path(&self) -> PathBuf {
        self.path().join("cache.json")
    }

    /// Write an archive in the export's `window.YTD...` form
    pub fn write_tweets(&self, ids: &[&str]) {
        let entries: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| serde_json::json!({ "tweet": { "id_str": id, "full_text": "hello" } }))
            .collect();
        let body = serde_json::to_string_pretty(&entries).unwrap();
        self.write("tweets.js", &format!("window.YTD.tweets.part0 = {body}"));
    }

    pub fn write_auth(&self, text: &str) {
        self.write("authdata.txt", text);
    }

    pub fn write_cache(&self, text: &str) {
        self.write("cache.json", text);
    }

    pub fn write(&self, name: &str, content: &str) {
        std::fs::write(self.path().join(name), content).unwrap();
    }

    /// Parsed cache file contents
    pub fn cache(&self) -> serde_json::Value {
        let text = std::fs::read_to_string(self.cache_path()).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    /// Raw cache file text
    pub fn cache_text(&self) -> String {
        std::fs::read_to_string(self.cache_path()).unwrap()
    }

    /// Files in the workspace whose name starts with `prefix`
    pub fn files_starting_with(&self, prefix: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|n| n.starts_with(prefix))
            .collect();
        names.sort();
        names
    }
}

// =============================================================================
// Mock endpoint
// =============================================================================

/// Mount a handler answering `status` for one post id
pub async fn mount_delete(server: &MockServer, id: &str, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path(DELETE_PATH))
        .and(body_partial_json(
            serde_json::json!({ "variables": { "tweet_id": id } }),
        ))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// Server that accepts every delete
pub async fn accepting_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(DELETE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":{}}"#))
        .mount(&server)
        .await;
    server
}

/// Post ids the server was asked to delete, in request order
pub async fn requested_ids(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|req| {
            let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
            body["variables"]["tweet_id"].as_str().unwrap().to_string()
        })
        .collect()
}
