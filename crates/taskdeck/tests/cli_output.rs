//! Integration tests for CLI output behavior
//!
//! Each test runs the binary with an isolated HOME and working directory so
//! no user config leaks in. Tests that need a backend start an in-process
//! API on a background runtime.

use std::path::Path;
use std::process::{Command, Output};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

#[derive(Default)]
struct Backend {
    projects: Vec<Value>,
    reject_create_with: Option<String>,
}

type Shared = Arc<Mutex<Backend>>;

async fn list_projects(State(state): State<Shared>) -> Json<Value> {
    let projects = state.lock().unwrap().projects.clone();
    Json(json!({ "data": { "projects": projects } }))
}

async fn create_project(
    State(state): State<Shared>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut backend = state.lock().unwrap();
    if let Some(message) = backend.reject_create_with.clone() {
        return (StatusCode::CONFLICT, Json(json!({ "message": message })));
    }
    let project = json!({
        "id": format!("p{}", backend.projects.len() + 1),
        "name": body["name"],
        "description": body["description"],
        "status": body["status"],
    });
    backend.projects.push(project.clone());
    (StatusCode::CREATED, Json(json!({ "data": { "project": project } })))
}

async fn list_tenants() -> Json<Value> {
    Json(json!({ "data": { "tenants": [{
        "id": "t1",
        "name": "Acme Corp",
        "subdomain": "acme",
        "subscriptionPlan": "pro",
        "status": "active",
        "createdAt": "2024-01-15T09:00:00.000Z"
    }] } }))
}

/// Start the fake API on a background runtime. The runtime must outlive the
/// CLI invocations, so it is returned alongside the base URL.
fn start_backend(state: Shared) -> (tokio::runtime::Runtime, String) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create runtime");
    let base = runtime.block_on(async move {
        let app = Router::new()
            .route("/api/projects", get(list_projects).post(create_project))
            .route("/api/tenants", get(list_tenants))
            .with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/api", addr)
    });
    (runtime, base)
}

/// A base URL nothing listens on.
fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn run_taskdeck(dir: &Path, args: &[&str]) -> Output {
    run_taskdeck_with_env(dir, &[], args)
}

fn run_taskdeck_with_env(dir: &Path, env: &[(&str, &str)], args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_taskdeck"))
        .current_dir(dir)
        .env("HOME", dir)
        .env_remove("TASKDECK_API_URL")
        .env_remove("TASKDECK_TOKEN")
        .env_remove("RUST_LOG")
        .envs(env.iter().copied())
        .args(args)
        .output()
        .expect("Failed to execute taskdeck")
}

fn write_project_config(dir: &Path, content: &str) {
    let config_dir = dir.join(".taskdeck");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), content).unwrap();
}

const FILE_CONFIG: &str = r#"
[api]
base_url = "https://api.example.com"
token = "file-token"
"#;

#[test]
fn test_help_succeeds() {
    let temp = tempfile::tempdir().unwrap();
    let output = run_taskdeck(temp.path(), &["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("projects"));
    assert!(stdout.contains("tenants"));
}

#[test]
fn test_list_failure_notifies_and_renders_empty() {
    let temp = tempfile::tempdir().unwrap();
    let url = unreachable_url();
    let output = run_taskdeck(temp.path(), &["projects", "list", "--api-url", &url]);

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("No projects found."), "stdout: {}", stdout);
    assert_eq!(
        stderr.matches("❌ Failed to load projects").count(),
        1,
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_list_json_outputs_array() {
    let temp = tempfile::tempdir().unwrap();
    let state = Shared::default();
    state.lock().unwrap().projects = vec![
        json!({ "id": "p1", "name": "Alpha", "status": "active" }),
        json!({ "id": "p2", "name": "Beta", "status": "completed" }),
    ];
    let (_runtime, base) = start_backend(state);

    let output = run_taskdeck(temp.path(), &["projects", "list", "--json", "--api-url", &base]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let projects: Value = serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    assert_eq!(projects.as_array().map(Vec::len), Some(2));
    assert_eq!(projects[1]["status"], "completed");
}

#[test]
fn test_stdout_is_clean_by_default() {
    let temp = tempfile::tempdir().unwrap();
    let (_runtime, base) = start_backend(Shared::default());

    let output = run_taskdeck(temp.path(), &["projects", "list", "--api-url", &base]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(!stdout.contains(r#""event":"#), "stdout: {}", stdout);
    assert!(!stderr.contains(r#""level":"INFO""#), "stderr: {}", stderr);
}

#[test]
fn test_create_then_list() {
    let temp = tempfile::tempdir().unwrap();
    let state = Shared::default();
    let (_runtime, base) = start_backend(state.clone());

    let output = run_taskdeck(
        temp.path(),
        &["projects", "create", "--name", "Launch", "--api-url", &base],
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("✅ Project Created!"), "stderr: {}", stderr);
    assert!(stdout.contains("Launch [active]"), "stdout: {}", stdout);
    assert_eq!(state.lock().unwrap().projects.len(), 1);
}

#[test]
fn test_create_rejection_shows_server_message() {
    let temp = tempfile::tempdir().unwrap();
    let state = Shared::default();
    state.lock().unwrap().reject_create_with = Some("Project name already exists".to_string());
    let (_runtime, base) = start_backend(state);

    let output = run_taskdeck(
        temp.path(),
        &["projects", "create", "--name", "Launch", "--api-url", &base],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("❌ Project name already exists"),
        "stderr: {}",
        stderr
    );
    assert!(!stderr.contains("Project Created!"));
}

#[test]
fn test_tenants_table_has_login_link() {
    let temp = tempfile::tempdir().unwrap();
    let (_runtime, base) = start_backend(Shared::default());

    let output = run_taskdeck(
        temp.path(),
        &["tenants", "list", "--api-url", &base, "--token", "admin"],
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Registered Organizations (Tenants)"));
    assert!(stdout.contains("http://localhost:3000/login?subdomain=acme"));
    assert!(stdout.contains("2024-01-15"));
}

#[test]
fn test_config_warning_on_invalid_toml() {
    let temp = tempfile::tempdir().unwrap();
    let config_dir = temp.path().join(".taskdeck");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "invalid toml [[[").unwrap();

    let output = run_taskdeck(temp.path(), &["config"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
    assert!(stderr.contains("Tip: Check"));
    assert!(output.status.success());
}

#[test]
fn test_config_reads_project_file_and_redacts_token() {
    let temp = tempfile::tempdir().unwrap();
    let config_dir = temp.path().join(".taskdeck");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        r#"
[api]
base_url = "https://api.example.com"
token = "do-not-print"

[tenants]
page_size = 20
"#,
    )
    .unwrap();

    let output = run_taskdeck(temp.path(), &["config"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#"base_url = "https://api.example.com""#));
    assert!(stdout.contains("page_size = 20"));
    assert!(!stdout.contains("do-not-print"));
}

#[test]
fn test_invalid_api_url_flag_is_ignored_with_warning() {
    let temp = tempfile::tempdir().unwrap();
    write_project_config(temp.path(), FILE_CONFIG);

    let output = run_taskdeck(temp.path(), &["config", "--api-url", "ftp://nope"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stdout.contains(r#"base_url = "https://api.example.com""#),
        "stdout: {}",
        stdout
    );
    assert!(!stdout.contains("ftp://nope"));
    assert!(
        stderr.contains("Warning: Ignoring --api-url/--token"),
        "stderr: {}",
        stderr
    );
    assert!(stderr.contains("ftp://nope"));
}

#[test]
fn test_invalid_env_api_url_keeps_file_config() {
    let temp = tempfile::tempdir().unwrap();
    write_project_config(temp.path(), FILE_CONFIG);

    let output = run_taskdeck_with_env(
        temp.path(),
        &[("TASKDECK_API_URL", "ftp://nope")],
        &["config"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stdout.contains(r#"base_url = "https://api.example.com""#),
        "stdout: {}",
        stdout
    );
    assert!(stdout.contains(r#"token = "<redacted>""#), "stdout: {}", stdout);
    assert!(
        stderr.contains("Warning: Ignoring TASKDECK_API_URL/TASKDECK_TOKEN"),
        "stderr: {}",
        stderr
    );
    assert!(!stderr.contains("Could not load config"), "stderr: {}", stderr);
}

#[test]
fn test_valid_env_and_flag_overrides_layer_in_order() {
    let temp = tempfile::tempdir().unwrap();
    write_project_config(temp.path(), FILE_CONFIG);

    let output = run_taskdeck_with_env(
        temp.path(),
        &[("TASKDECK_API_URL", "https://env.example.com/api")],
        &["config", "--api-url", "https://flag.example.com/api"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stdout.contains(r#"base_url = "https://flag.example.com/api""#),
        "stdout: {}",
        stdout
    );
    assert!(!stderr.contains("Warning"), "stderr: {}", stderr);
}
