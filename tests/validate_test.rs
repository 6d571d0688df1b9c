//! Tests for the validate subcommand driven through the compiled binary.

use std::process::Command;

fn gcf_deploy_binary() -> String {
    env!("CARGO_BIN_EXE_gcf-deploy").to_string()
}

const CREDENTIALS: &str = r#"[{
    "name": "gcf-production",
    "type": "google-cloud-function",
    "additionalProperties": {
        "project": "my-project",
        "region": "europe-west1",
        "serviceAccountKeyfile": "{}"
    }
}]"#;

fn run_validate(params: &str, extra_args: &[&str]) -> std::process::Output {
    let mut command = Command::new(gcf_deploy_binary());
    command
        .env_clear()
        .args(["--params", params, "--credentials", CREDENTIALS]);
    command.args(extra_args);
    command.arg("validate");
    command.output().expect("Failed to run gcf-deploy validate")
}

#[test]
fn reports_every_violation_at_once() {
    let params = r#"{
        "credentials": "gcf-production",
        "app": "my-function",
        "runtime": "nodejs6",
        "memory": "64MB"
    }"#;

    let output = run_validate(params, &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "Validation should fail");
    assert!(
        stderr.contains("nodejs6"),
        "Should report the runtime violation. Output: {}",
        stderr
    );
    assert!(
        stderr.contains("64MB"),
        "Should report the memory violation in the same batch. Output: {}",
        stderr
    );
}

#[test]
fn succeeds_for_a_valid_parameter_set() {
    let params = r#"{
        "credentials": "gcf-production",
        "app": "my-function",
        "runtime": "go111"
    }"#;

    let output = run_validate(params, &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "Validation should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("Parameters are valid"));
}

#[test]
fn shows_the_resolved_parameters_with_convention_defaults() {
    let params = r#"{
        "credentials": "gcf-production",
        "runtime": "go111"
    }"#;

    let output = run_validate(params, &["--git-name", "mygitrepo"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("mygitrepo"), "App should fall back to the repository name");
    assert!(stdout.contains("256MB"), "Memory should default to 256MB");
    assert!(stdout.contains("http"), "Trigger should default to http");
    assert!(stdout.contains("gcf-production"), "Should show the selected credential");
}

#[test]
fn missing_bucket_name_is_reported() {
    let params = r#"{
        "credentials": "gcf-production",
        "app": "my-function",
        "runtime": "go111",
        "trigger": "bucket"
    }"#;

    let output = run_validate(params, &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("TriggerValue"),
        "Should name the missing bucket property. Output: {}",
        stderr
    );
}

#[test]
fn never_touches_the_deployment_target() {
    // Validation of a fully valid parameter set must not try to authenticate
    // or deploy, so it succeeds on machines without the gcloud CLI.
    let params = r#"{
        "credentials": "gcf-production",
        "app": "my-function",
        "runtime": "python37",
        "trigger": "bucket",
        "triggerValue": "upload-bucket",
        "memory": "1024MB",
        "timeoutSeconds": 540
    }"#;

    let output = run_validate(params, &[]);

    assert!(output.status.success());
    assert!(!std::path::Path::new("/key-file.json").exists());
}
