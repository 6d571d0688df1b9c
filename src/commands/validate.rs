use super::resolve;
use crate::cli::Cli;

/// Resolve and validate the deployment parameters without deploying.
///
/// Prints a summary of the resolved parameter set, then every violation at
/// once so all problems can be fixed in one iteration.
pub fn run_validate(cli: &Cli) -> anyhow::Result<()> {
    let resolved = resolve(cli)?;
    let params = &resolved.params;

    println!("Validating deployment of '{}'...", params.app);
    println!();
    println!("Resolved parameters:");
    println!("  app:             {}", params.app);
    println!("  runtime:         {}", params.runtime);
    println!("  trigger:         {}", params.trigger);
    if !params.trigger_value.is_empty() {
        println!("  triggerValue:    {}", params.trigger_value);
    }
    println!("  memory:          {}", params.memory);
    println!("  source:          {}", params.source);
    println!("  timeoutSeconds:  {}", params.timeout_seconds);
    println!("  ingressSettings: {}", params.ingress_settings);
    if !params.service_account.is_empty() {
        println!("  serviceAccount:  {}", params.service_account);
    }
    if !params.environment_variables.is_empty() {
        println!(
            "  environmentVariables: {} entries",
            params.environment_variables.len()
        );
    }
    println!("  credential:      {}", resolved.credential.name);
    println!();

    let result = params.validate();

    for warning in &result.warnings {
        eprintln!("Warning: {}", warning);
    }

    // A non-ok result propagates with every violation; main prints the batch
    result.into_result()?;

    println!("Parameters are valid");

    Ok(())
}
