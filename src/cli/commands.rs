// CLI command definitions

use super::manifest::{EnvironmentsCommand, GenerateCommand, SecretTemplateCommand};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "rallly-kube",
    version,
    about = "Kubernetes manifest generator for the Rallly stack",
    long_about = "Writes the Kubernetes manifests of the Rallly stack as JSON files for a named environment"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate the manifests for an environment (writes and removes files)
    Generate(GenerateCommand),

    /// Write an empty secret.json to fill in by hand
    SecretTemplate(SecretTemplateCommand),

    /// List the known environments
    Environments(EnvironmentsCommand),
}
