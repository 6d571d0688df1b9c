//! Credential records injected by the CI system at service level.
//!
//! A release stage receives the full list of configured credentials as a JSON
//! array; the manifest's `credentials` custom property (or, by convention,
//! the release name) selects which one to use. A credential may carry a
//! partial [`Params`] under `defaults` that seeds parameter resolution.

use crate::config::{Params, ValidationResult};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Control properties selecting which injected credential to use, parsed
/// from the same custom-properties JSON as the deployment parameters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CredentialsParam {
    pub credentials: String,
}

impl CredentialsParam {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| Error::Parse(format!("Failed to parse credential selector: {}", e)))
    }

    /// Default the credential name from the release name, by convention
    /// `gcf-<release>`.
    pub fn apply_defaults(&mut self, release_name: &str) {
        if self.credentials.is_empty() && !release_name.is_empty() {
            self.credentials = format!("gcf-{}", release_name);
        }
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.credentials.is_empty() {
            result.errors.push(
                "Credentials property is required; set it in the manifest or name the \
                 release after the target credential"
                    .to_string(),
            );
        }

        result
    }
}

/// One Google Cloud Function credential as injected by the credential store.
/// Read-only: the resolver reads it once and never mutates it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GcfCredentials {
    pub name: String,

    #[serde(default, rename = "type")]
    pub credential_type: String,

    #[serde(default)]
    pub additional_properties: CredentialProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CredentialProperties {
    pub project: String,

    pub region: String,

    /// The service account JSON key, stored verbatim as a string.
    pub service_account_keyfile: String,

    /// Partial parameter set applied before manifest properties.
    pub defaults: Option<Params>,
}

/// Parse the injected credential list.
pub fn parse_credentials(raw: &str) -> Result<Vec<GcfCredentials>> {
    serde_json::from_str(raw)
        .map_err(|e| Error::Parse(format!("Failed to parse injected credentials: {}", e)))
}

/// Look up a credential by name.
pub fn find_by_name<'a>(
    credentials: &'a [GcfCredentials],
    name: &str,
) -> Option<&'a GcfCredentials> {
    credentials.iter().find(|c| c.name == name)
}

impl GcfCredentials {
    /// Extract the service account's client email from the embedded keyfile.
    pub fn service_account_email(&self) -> Result<String> {
        let keyfile: serde_json::Value =
            serde_json::from_str(&self.additional_properties.service_account_keyfile)
                .map_err(|e| Error::Keyfile(format!("Failed to parse service account keyfile: {}", e)))?;

        match keyfile.get("client_email") {
            Some(serde_json::Value::String(email)) => Ok(email.clone()),
            Some(_) => Err(Error::Keyfile(
                "Field client_email is not a string".to_string(),
            )),
            None => Err(Error::Keyfile(
                "Field client_email missing from service account keyfile".to_string(),
            )),
        }
    }

    /// Write the keyfile to disk with owner-only permissions for the gcloud
    /// CLI to read.
    pub fn write_keyfile<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        use std::io::Write;
        use std::os::unix::fs::OpenOptionsExt;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path.as_ref())?;
        file.write_all(self.additional_properties.service_account_keyfile.as_bytes())?;

        Ok(())
    }
}
