mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use gcf_deploy::Error as DeployError;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // External command failures: gcloud's own stderr is the user
        // feedback. Just propagate the exit code without printing a
        // redundant error.
        if let Some(DeployError::CommandFailed { exit_code, .. }) = e.downcast_ref::<DeployError>()
        {
            std::process::exit(*exit_code);
        }

        // All other errors: print with suggestions
        if let Some(deploy_error) = e.downcast_ref::<DeployError>() {
            eprintln!("Error: {}", deploy_error);
            if let Some(suggestion) = deploy_error.suggestion() {
                eprintln!("\nHint: {}", suggestion);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();

    match cli.command {
        Some(Commands::Validate) => commands::run_validate(&cli),
        None => commands::run_deploy(&cli).await,
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
