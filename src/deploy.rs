//! Construction and execution of the gcloud invocations driving a deployment.
//!
//! Argument vectors are built as pure functions of the resolved [`Params`]
//! and the selected credential, so the exact commands can be reported under
//! dry run and asserted in tests without touching the CLI.

use crate::config::Params;
use crate::credentials::GcfCredentials;
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Path where the service account keyfile is staged for the gcloud CLI.
pub const KEY_FILE_PATH: &str = "/key-file.json";

/// `gcloud auth activate-service-account` for the credential's identity.
pub fn auth_args(service_account_email: &str) -> Vec<String> {
    vec![
        "auth".to_string(),
        "activate-service-account".to_string(),
        service_account_email.to_string(),
        "--key-file".to_string(),
        KEY_FILE_PATH.to_string(),
    ]
}

/// `gcloud config set account` for subsequent commands.
pub fn set_account_args(service_account_email: &str) -> Vec<String> {
    vec![
        "config".to_string(),
        "set".to_string(),
        "account".to_string(),
        service_account_email.to_string(),
    ]
}

/// `gcloud config set project` for the credential's project.
pub fn set_project_args(project: &str) -> Vec<String> {
    vec![
        "config".to_string(),
        "set".to_string(),
        "project".to_string(),
        project.to_string(),
    ]
}

/// Build the `gcloud functions deploy` argument vector.
///
/// Optional flags are appended only when configured; the trigger flags are
/// mutually exclusive, so exactly one of `--trigger-bucket`/`--trigger-http`
/// is emitted.
pub fn deploy_args(
    params: &Params,
    credential: &GcfCredentials,
    labels: &HashMap<String, String>,
) -> Vec<String> {
    let mut args = vec![
        "functions".to_string(),
        "deploy".to_string(),
        params.app.clone(),
        "--region".to_string(),
        credential.additional_properties.region.clone(),
        "--memory".to_string(),
        params.memory.clone(),
        "--source".to_string(),
        params.source.clone(),
        "--timeout".to_string(),
        format!("{}s", params.timeout_seconds),
        "--runtime".to_string(),
        params.runtime.clone(),
        "--update-labels".to_string(),
        join_pairs(labels),
        "--ingress-settings".to_string(),
        params.ingress_settings.clone(),
    ];

    if !params.environment_variables.is_empty() {
        args.push("--set-env-vars".to_string());
        args.push(join_pairs(&params.environment_variables));
    }

    if !params.service_account.is_empty() {
        args.push("--service-account".to_string());
        args.push(params.service_account.clone());
    }

    if params.trigger == "bucket" {
        args.push("--trigger-bucket".to_string());
        args.push(params.trigger_value.clone());
    } else {
        args.push("--trigger-http".to_string());
    }

    args
}

/// `gcloud functions describe` to report the deployed function.
pub fn describe_args(params: &Params, credential: &GcfCredentials) -> Vec<String> {
    vec![
        "functions".to_string(),
        "describe".to_string(),
        params.app.clone(),
        "--region".to_string(),
        credential.additional_properties.region.clone(),
    ]
}

/// Render a command line for reporting (dry run, debug logging).
pub fn render(program: &str, args: &[String]) -> String {
    format!("{} {}", program, args.join(" "))
}

// Key/value maps become comma-joined KEY=VALUE lists. Sorted so the same
// parameters always produce the same command line.
fn join_pairs(pairs: &HashMap<String, String>) -> String {
    let mut entries: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    entries.sort();
    entries.join(",")
}

/// Runs external commands sequentially, inheriting the build log's stdio.
#[derive(Debug, Default)]
pub struct Runner;

impl Runner {
    pub fn new() -> Self {
        Self
    }

    /// Run a command to completion, failing on a non-zero exit code.
    pub async fn run(&self, program: &str, args: &[String]) -> Result<()> {
        tracing::debug!("Running {}", render(program, args));

        let status = tokio::process::Command::new(program)
            .args(args)
            .status()
            .await
            .map_err(|e| Error::Process(format!("Failed to execute '{}': {}", program, e)))?;

        if !status.success() {
            return Err(Error::CommandFailed {
                program: program.to_string(),
                exit_code: status.code().unwrap_or(-1),
            });
        }

        Ok(())
    }
}
