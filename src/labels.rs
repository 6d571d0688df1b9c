//! Build labels scraped from the pipeline environment.
//!
//! The CI system exposes every manifest label as an `ESTAFETTE_LABEL_<NAME>`
//! environment variable. Labels are forwarded to the deployed function, so
//! values must be sanitized to the provider's label grammar first: 63
//! characters or less, beginning and ending with an alphanumeric character,
//! with dashes, underscores, dots, and alphanumerics between.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

const LABEL_ENV_PREFIX: &str = "ESTAFETTE_LABEL_";
const MAX_LABEL_LENGTH: usize = 63;

static INVALID_LABEL_CHARS: OnceLock<Regex> = OnceLock::new();

fn invalid_label_chars() -> &'static Regex {
    INVALID_LABEL_CHARS
        .get_or_init(|| Regex::new(r"[^a-zA-Z0-9\-_.]+").expect("static regex pattern is valid"))
}

/// Collect every build label from the process environment.
pub fn from_env() -> HashMap<String, String> {
    collect(std::env::vars())
}

/// Collect build labels from an environment snapshot.
///
/// `ESTAFETTE_LABEL_<NAME>` becomes a `<name>` (lowercased) entry. The
/// `*_DNS_SAFE` variants are derived duplicates and are skipped.
pub fn collect<I>(vars: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut labels = HashMap::new();

    for (name, value) in vars {
        if name.ends_with("_DNS_SAFE") {
            continue;
        }
        if let Some(key) = name.strip_prefix(LABEL_ENV_PREFIX) {
            labels.insert(key.to_lowercase(), value);
        }
    }

    labels
}

/// Sanitize a single label value to the provider's label grammar.
pub fn sanitize(value: &str) -> String {
    // Replace runs of invalid characters with a hyphen, then collapse the
    // double hyphens that adjacent replacements can produce
    let sanitized = invalid_label_chars().replace_all(value, "-");
    let sanitized = sanitized.replace("--", "-");

    // Must start with an alphanumeric character
    let mut sanitized = sanitized.trim_start_matches(['-', '_', '.']).to_string();

    // All remaining characters are ASCII, so byte truncation is safe
    if sanitized.len() > MAX_LABEL_LENGTH {
        sanitized.truncate(MAX_LABEL_LENGTH);
    }

    // Must end with an alphanumeric character, also after truncation
    sanitized.trim_end_matches(['-', '_', '.']).to_string()
}

/// Sanitize every label value, keeping keys untouched.
pub fn sanitize_all(labels: &HashMap<String, String>) -> HashMap<String, String> {
    labels
        .iter()
        .map(|(key, value)| (key.clone(), sanitize(value)))
        .collect()
}
