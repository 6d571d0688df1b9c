use super::Params;
use crate::error::{Error, Result};

/// Runtimes the provider accepts for new functions.
pub const SUPPORTED_RUNTIMES: &[&str] = &["nodejs8", "nodejs10", "python37", "go111"];

/// Memory allocations the provider accepts.
pub const SUPPORTED_MEMORY: &[&str] = &["128MB", "256MB", "512MB", "1024MB", "2048MB"];

/// Event types that can invoke a deployed function.
pub const SUPPORTED_TRIGGERS: &[&str] = &["http", "bucket"];

/// Network exposure policies for the function's endpoint.
pub const SUPPORTED_INGRESS_SETTINGS: &[&str] = &["all", "internal-only"];

/// Upper bound on the execution timeout, inclusive.
pub const MAX_TIMEOUT_SECONDS: i32 = 540;

/// Outcome of validating a resolved parameter set.
///
/// Violations are collected across all checks so a user can fix every
/// problem in one iteration. Warnings are a separate advisory channel and
/// never block a deployment.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into a hard error carrying every violation, or the warnings
    /// on success.
    pub fn into_result(self) -> Result<Vec<String>> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(Error::Validation(self.errors))
        }
    }
}

impl Params {
    /// Check the resolved parameters against the provider's accepted values.
    ///
    /// Never fails; every check runs and every violation is collected. The
    /// caller decides whether a non-ok result is fatal.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if !SUPPORTED_RUNTIMES.contains(&self.runtime.as_str()) {
            result.errors.push(format!(
                "Runtime '{}' is not supported; supported runtimes are: {}",
                self.runtime,
                SUPPORTED_RUNTIMES.join(", ")
            ));
        }

        if !SUPPORTED_MEMORY.contains(&self.memory.as_str()) {
            result.errors.push(format!(
                "Memory '{}' is not supported; supported values are: {}",
                self.memory,
                SUPPORTED_MEMORY.join(", ")
            ));
        }

        if !SUPPORTED_TRIGGERS.contains(&self.trigger.as_str()) {
            result.errors.push(format!(
                "Trigger '{}' is not supported; supported triggers are: {}",
                self.trigger,
                SUPPORTED_TRIGGERS.join(", ")
            ));
        }

        if self.trigger == "bucket" && self.trigger_value.is_empty() {
            result
                .errors
                .push("TriggerValue required when Trigger is bucket".to_string());
        }

        if self.timeout_seconds <= 0 || self.timeout_seconds > MAX_TIMEOUT_SECONDS {
            result.errors.push(format!(
                "TimeoutSeconds {} is out of range; it must be greater than 0 and at most {}",
                self.timeout_seconds, MAX_TIMEOUT_SECONDS
            ));
        }

        if !SUPPORTED_INGRESS_SETTINGS.contains(&self.ingress_settings.as_str()) {
            result.errors.push(format!(
                "IngressSettings '{}' is not supported; supported values are: {}",
                self.ingress_settings,
                SUPPORTED_INGRESS_SETTINGS.join(", ")
            ));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_params() -> Params {
        Params {
            runtime: "go111".to_string(),
            memory: "256MB".to_string(),
            trigger: "http".to_string(),
            source: ".".to_string(),
            ingress_settings: "all".to_string(),
            timeout_seconds: 60,
            ..Default::default()
        }
    }

    #[test]
    fn returns_ok_for_valid_params() {
        let result = valid_params().validate();

        assert!(result.ok());
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn returns_error_if_runtime_is_not_supported() {
        let mut params = valid_params();
        params.runtime = "nodejs6".to_string();

        let result = params.validate();

        assert!(!result.ok());
        assert!(!result.errors.is_empty());
        assert!(result.errors[0].contains("nodejs6"));
        assert!(result.errors[0].contains("go111"));
    }

    #[test]
    fn returns_ok_if_runtime_is_supported() {
        let mut params = valid_params();
        params.runtime = "nodejs10".to_string();

        assert!(params.validate().ok());
    }

    #[test]
    fn returns_error_if_trigger_value_is_empty_for_trigger_bucket() {
        let mut params = valid_params();
        params.trigger = "bucket".to_string();

        let result = params.validate();

        assert!(!result.ok());
        assert!(result.errors.iter().any(|e| e.contains("TriggerValue")));
    }

    #[test]
    fn returns_ok_if_trigger_value_is_set_for_trigger_bucket() {
        let mut params = valid_params();
        params.trigger = "bucket".to_string();
        params.trigger_value = "upload-bucket".to_string();

        assert!(params.validate().ok());
    }

    #[test]
    fn returns_error_if_trigger_is_not_supported() {
        let mut params = valid_params();
        params.trigger = "topic".to_string();

        let result = params.validate();

        assert!(!result.ok());
        assert!(result.errors[0].contains("topic"));
    }

    #[test]
    fn returns_error_if_memory_is_not_supported() {
        let mut params = valid_params();
        params.memory = "64MB".to_string();

        let result = params.validate();

        assert!(!result.ok());
        // The violation lists the full accepted set
        for supported in SUPPORTED_MEMORY {
            assert!(result.errors[0].contains(supported));
        }
    }

    #[test]
    fn returns_ok_if_memory_is_supported() {
        let mut params = valid_params();
        params.memory = "512MB".to_string();

        assert!(params.validate().ok());
    }

    #[test]
    fn returns_error_if_timeout_is_larger_than_540_seconds() {
        let mut params = valid_params();
        params.timeout_seconds = 541;

        let result = params.validate();

        assert!(!result.ok());
        assert!(result.errors[0].contains("540"));
    }

    #[test]
    fn returns_ok_if_timeout_is_exactly_540_seconds() {
        let mut params = valid_params();
        params.timeout_seconds = 540;

        assert!(params.validate().ok());
    }

    #[test]
    fn returns_error_if_timeout_is_zero() {
        let mut params = valid_params();
        params.timeout_seconds = 0;

        assert!(!params.validate().ok());
    }

    #[test]
    fn returns_error_if_ingress_settings_is_not_supported() {
        let mut params = valid_params();
        params.ingress_settings = "doodah".to_string();

        let result = params.validate();

        assert!(!result.ok());
        assert!(result.errors[0].contains("internal-only"));
    }

    #[test]
    fn returns_ok_if_ingress_settings_is_supported() {
        let mut params = valid_params();
        params.ingress_settings = "internal-only".to_string();

        assert!(params.validate().ok());
    }

    #[test]
    fn collects_every_violation_in_one_pass() {
        let params = Params {
            runtime: "nodejs6".to_string(),
            memory: "64MB".to_string(),
            trigger: "bucket".to_string(),
            timeout_seconds: 600,
            ingress_settings: "public".to_string(),
            ..Default::default()
        };

        let result = params.validate();

        assert_eq!(result.errors.len(), 5);
    }

    #[test]
    fn empty_app_is_not_a_violation() {
        let mut params = valid_params();
        params.app = String::new();

        assert!(params.validate().ok());
    }

    #[test]
    fn into_result_maps_violations_to_a_single_error() {
        let mut params = valid_params();
        params.runtime = "dotnet".to_string();
        params.memory = "3GB".to_string();

        let err = params.validate().into_result().unwrap_err();
        let msg = err.to_string();

        assert!(msg.contains("dotnet"));
        assert!(msg.contains("3GB"));
    }
}
