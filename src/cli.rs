use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gcf-deploy")]
#[command(about = "Deploy Google Cloud Functions from pipeline manifests")]
pub struct Cli {
    /// Extension parameters, created from the manifest's custom properties.
    #[arg(long, env = "ESTAFETTE_EXTENSION_CUSTOM_PROPERTIES")]
    pub params: String,

    /// Cloud function credentials configured at service level, passed in to
    /// this trusted extension.
    #[arg(long, env = "ESTAFETTE_CREDENTIALS_GOOGLE_CLOUD_FUNCTION")]
    pub credentials: String,

    /// Repository name, used as application name if not passed explicitly
    /// and the app label is not set.
    #[arg(long, env = "ESTAFETTE_GIT_NAME", default_value = "")]
    pub git_name: String,

    /// App label, used as application name if not passed explicitly.
    #[arg(long, env = "ESTAFETTE_LABEL_APP", default_value = "")]
    pub app_label: String,

    /// Name of the release section, which is used by convention to resolve
    /// the credentials.
    #[arg(long, env = "ESTAFETTE_RELEASE_NAME", default_value = "")]
    pub release_name: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve and validate parameters without deploying
    Validate,
}
