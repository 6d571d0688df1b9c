use super::Params;
use std::collections::HashMap;

pub const DEFAULT_TRIGGER: &str = "http";
pub const DEFAULT_MEMORY: &str = "256MB";
pub const DEFAULT_SOURCE: &str = ".";
pub const DEFAULT_TIMEOUT_SECONDS: i32 = 60;
pub const DEFAULT_INGRESS_SETTINGS: &str = "all";

impl Params {
    /// Fill fields the manifest left empty with convention-based defaults.
    ///
    /// Defaults never overwrite a non-empty value, so applying this twice is
    /// a no-op. The application name falls back through three identity
    /// sources: the explicit `app` property, the pipeline's app label (the
    /// `--app-label` flag, or the `app` entry of the build labels when the
    /// flag is absent), and finally the repository name. An application name
    /// that is still empty afterwards is allowed to propagate.
    pub fn apply_defaults(
        &mut self,
        git_name: &str,
        app_label: &str,
        build_labels: &HashMap<String, String>,
    ) {
        if self.app.is_empty() {
            let app_label = if app_label.is_empty() {
                build_labels.get("app").map(String::as_str).unwrap_or("")
            } else {
                app_label
            };

            if !app_label.is_empty() {
                self.app = app_label.to_string();
            } else if !git_name.is_empty() {
                self.app = git_name.to_string();
            }
        }

        if self.trigger.is_empty() {
            self.trigger = DEFAULT_TRIGGER.to_string();
        }

        if self.memory.is_empty() {
            self.memory = DEFAULT_MEMORY.to_string();
        }

        if self.source.is_empty() {
            self.source = DEFAULT_SOURCE.to_string();
        }

        if self.timeout_seconds <= 0 {
            self.timeout_seconds = DEFAULT_TIMEOUT_SECONDS;
        }

        if self.ingress_settings.is_empty() {
            self.ingress_settings = DEFAULT_INGRESS_SETTINGS.to_string();
        }
    }
}
