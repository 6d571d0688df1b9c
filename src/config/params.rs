use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parameters controlling one cloud function deployment, set from custom
/// properties in the build manifest.
///
/// All fields are optional on input. A `Params` is populated in three passes:
/// credential-supplied defaults, explicit manifest properties, and finally
/// convention defaults via [`Params::apply_defaults`]. Enum-like fields stay
/// strings on purpose: deserialization must never reject a bad value, since
/// [`Params::validate`] collects every violation in one batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Params {
    /// Compute and report the deploy command without executing anything.
    pub dry_run: bool,

    /// Function name; falls back to the app label, then the repository name.
    pub app: String,

    pub runtime: String,

    pub trigger: String,

    /// Bucket name, required when `trigger` is `bucket`.
    pub trigger_value: String,

    pub memory: String,

    /// Optional identity override for the function at runtime.
    pub service_account: String,

    /// Path or URL of the source artifact to deploy.
    pub source: String,

    pub ingress_settings: String,

    pub timeout_seconds: i32,

    /// Key/value pairs forwarded to the function's runtime environment.
    pub environment_variables: HashMap<String, String>,
}

impl Params {
    /// Merge explicit manifest properties over credential-supplied defaults.
    ///
    /// The merge happens at the JSON level: a top-level key present in `raw`
    /// replaces the default value wholesale (including the whole
    /// `environmentVariables` map), an absent key keeps the default. Keys the
    /// manifest carries for other consumers (e.g. the credential selector)
    /// are ignored.
    pub fn from_layers(defaults: Option<&Params>, raw: &str) -> Result<Params> {
        let explicit: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| Error::Parse(format!("Failed to parse extension parameters: {}", e)))?;

        let serde_json::Value::Object(overrides) = explicit else {
            return Err(Error::Parse(
                "Extension parameters must be a JSON object".to_string(),
            ));
        };

        let mut merged = match defaults {
            Some(defaults) => serde_json::to_value(defaults)?,
            None => serde_json::Value::Object(serde_json::Map::new()),
        };

        if let serde_json::Value::Object(base) = &mut merged {
            for (key, value) in overrides {
                if !value.is_null() {
                    base.insert(key, value);
                }
            }
        }

        serde_json::from_value(merged)
            .map_err(|e| Error::Parse(format!("Failed to resolve extension parameters: {}", e)))
    }
}
