use super::resolve;
use crate::cli::Cli;
use gcf_deploy::deploy::{self, Runner, KEY_FILE_PATH};
use gcf_deploy::labels;
use tracing::{info, warn};

/// Resolve, validate, authenticate, and deploy the cloud function.
///
/// Under dry run the resolved deploy command is reported and nothing
/// external happens: no authentication, no keyfile write, no deployment.
pub async fn run_deploy(cli: &Cli) -> anyhow::Result<()> {
    let resolved = resolve(cli)?;
    let params = &resolved.params;
    let credential = &resolved.credential;

    info!("Validating deployment parameters...");
    let warnings = params.validate().into_result()?;
    for warning in warnings {
        warn!("{}", warning);
    }

    let build_labels = labels::sanitize_all(&resolved.build_labels);
    let deploy_args = deploy::deploy_args(params, credential, &build_labels);

    if params.dry_run {
        info!("Dry run: would deploy cloud function {}", params.app);
        info!("{}", deploy::render("gcloud", &deploy_args));
        return Ok(());
    }

    let email = credential.service_account_email()?;

    info!("Storing credential {} keyfile on disk...", credential.name);
    credential.write_keyfile(KEY_FILE_PATH)?;

    let runner = Runner::new();

    info!("Authenticating to Google Cloud...");
    runner.run("gcloud", &deploy::auth_args(&email)).await?;

    info!("Setting gcloud account...");
    runner.run("gcloud", &deploy::set_account_args(&email)).await?;

    info!("Setting gcloud project...");
    runner
        .run(
            "gcloud",
            &deploy::set_project_args(&credential.additional_properties.project),
        )
        .await?;

    info!("Deploying cloud function {}...", params.app);
    runner.run("gcloud", &deploy_args).await?;

    info!("Describing cloud function {}...", params.app);
    runner
        .run("gcloud", &deploy::describe_args(params, credential))
        .await?;

    Ok(())
}
