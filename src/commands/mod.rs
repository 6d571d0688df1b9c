mod deploy;
mod validate;

pub use deploy::run_deploy;
pub use validate::run_validate;

use crate::cli::Cli;
use gcf_deploy::config::Params;
use gcf_deploy::credentials::{self, CredentialsParam, GcfCredentials};
use gcf_deploy::labels;
use std::collections::HashMap;
use tracing::info;

/// Everything the deploy and validate commands need after resolution.
pub(crate) struct Resolved {
    pub params: Params,
    pub credential: GcfCredentials,
    pub build_labels: HashMap<String, String>,
}

/// Shared resolution path: select the credential, layer the parameters,
/// apply convention defaults.
///
/// Validation of the resolved parameters is left to the caller so that
/// `validate` can report the full result instead of failing on it.
pub(crate) fn resolve(cli: &Cli) -> anyhow::Result<Resolved> {
    info!("Collecting build labels from the environment...");
    let build_labels = labels::from_env();

    info!("Resolving credential selector...");
    let mut selector = CredentialsParam::from_json(&cli.params)?;
    selector.apply_defaults(&cli.release_name);
    selector.validate().into_result()?;

    info!("Parsing injected credentials...");
    let injected = credentials::parse_credentials(&cli.credentials)?;
    let credential = credentials::find_by_name(&injected, &selector.credentials)
        .ok_or_else(|| gcf_deploy::Error::CredentialNotFound(selector.credentials.clone()))?
        .clone();

    let defaults = credential.additional_properties.defaults.as_ref();
    if defaults.is_some() {
        info!("Using defaults from credential {}...", credential.name);
    }

    info!("Resolving deployment parameters...");
    let mut params = Params::from_layers(defaults, &cli.params)?;
    params.apply_defaults(&cli.git_name, &cli.app_label, &build_labels);

    Ok(Resolved {
        params,
        credential,
        build_labels,
    })
}
