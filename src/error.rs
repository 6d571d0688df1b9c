// Allow unused_assignments at module level because thiserror's generated code
// for struct variants triggers false positive warnings - the fields ARE used
// in the Display impl but rustc's lint pass doesn't see this.
#![allow(unused_assignments)]

use miette::Diagnostic;
use std::io;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Parse error: {0}")]
    #[diagnostic(code(gcf::parse::error))]
    Parse(String),

    #[error("Credential with name '{0}' does not exist")]
    #[diagnostic(
        code(gcf::credential::not_found),
        help("Check the 'credentials' custom property against the credentials injected at service level")
    )]
    CredentialNotFound(String),

    #[error("Keyfile error: {0}")]
    #[diagnostic(
        code(gcf::credential::keyfile),
        help("The credential's serviceAccountKeyfile must be a service account JSON key")
    )]
    Keyfile(String),

    #[error("Not all required parameters are valid:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    #[diagnostic(code(gcf::params::validation))]
    Validation(Vec<String>),

    #[error("Process error: {0}")]
    #[diagnostic(
        code(gcf::process::error),
        help("Check that the gcloud CLI is installed and on PATH")
    )]
    Process(String),

    #[error("Command '{program}' exited with code {exit_code}")]
    #[diagnostic(code(gcf::process::failed))]
    CommandFailed { program: String, exit_code: i32 },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns a helpful suggestion for resolving this error, if available.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Error::Validation(_) => Some(
                "Fix every listed property in the manifest, then rerun the release. \
                 'gcf-deploy validate' checks all properties without deploying."
                    .to_string(),
            ),
            Error::CredentialNotFound(name) => Some(format!(
                "Add a credential named '{}' at service level, or set the 'credentials' \
                 custom property to one that exists.",
                name
            )),
            Error::Parse(_) => Some(
                "The params and credentials flags must carry valid JSON. When running \
                 outside the pipeline, pass them explicitly with --params and --credentials."
                    .to_string(),
            ),
            Error::Process(_) => Some("Check that the gcloud CLI is installed and on PATH".to_string()),
            _ => None,
        }
    }

    /// Formats the error with its suggestion (if any) for user-friendly display.
    pub fn with_suggestion(&self) -> String {
        match self.suggestion() {
            Some(suggestion) => format!("{}\n\nHint: {}", self, suggestion),
            None => self.to_string(),
        }
    }
}
