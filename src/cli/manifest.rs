//! Manifest generation commands

use super::display::TableRenderer;
use crate::domain::config::{EnvironmentConfig, EnvironmentName};
use crate::infrastructure::constants::ENV_VAR_ENVIRONMENT;
use crate::infrastructure::manifest::{ManifestSet, ManifestWriter};
use clap::builder::OsStringValueParser;
use clap::Parser;
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Environment selector as text. Bytes that are not UTF-8 are replaced, so
/// such a selector is never a known name.
fn selector_text(env: Option<&OsStr>) -> Option<Cow<'_, str>> {
    env.map(OsStr::to_string_lossy)
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateCommand {
    /// Environment to generate for (dev, production)
    /// Unknown values fall back to dev unless --strict is given
    #[arg(long, short = 'e', env = ENV_VAR_ENVIRONMENT, value_parser = OsStringValueParser::new())]
    pub env: Option<OsString>,

    /// Directory the manifest files are written to
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// Reject unknown environment names instead of falling back to dev
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SecretTemplateCommand {
    /// Directory secret.json is written to
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct EnvironmentsCommand {
    /// Environment to mark as selected
    #[arg(long, short = 'e', env = ENV_VAR_ENVIRONMENT, value_parser = OsStringValueParser::new())]
    pub env: Option<OsString>,
}

impl GenerateCommand {
    pub fn resolve_environment(&self) -> anyhow::Result<EnvironmentName> {
        let selector = selector_text(self.env.as_deref());
        let selector = selector.as_deref();
        if self.strict {
            Ok(EnvironmentName::resolve_strict(selector)?)
        } else {
            Ok(EnvironmentName::resolve(selector))
        }
    }

    pub fn execute(&self) -> anyhow::Result<()> {
        let environment = self.resolve_environment()?;
        tracing::info!("Generating manifests for environment '{}'", environment);

        let config = EnvironmentConfig::for_name(environment);
        let set = ManifestSet::for_environment(&config);
        let report = ManifestWriter::to_dir(&self.output_dir)
            .materialize(&set)
            .map_err(|e| anyhow::anyhow!("Failed to write manifests: {}", e))?;

        println!("{}", TableRenderer::new().render_materialize_report(&report));
        Ok(())
    }
}

impl SecretTemplateCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let report = ManifestWriter::to_dir(&self.output_dir)
            .materialize(&ManifestSet::secret_template())
            .map_err(|e| anyhow::anyhow!("Failed to write secret template: {}", e))?;

        println!("{}", TableRenderer::new().render_materialize_report(&report));
        println!("Fill in the values before applying. Do not commit the result.");
        Ok(())
    }
}

impl EnvironmentsCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let current = EnvironmentName::resolve(selector_text(self.env.as_deref()).as_deref());
        let environments: Vec<_> = EnvironmentName::all()
            .iter()
            .map(|name| name.config())
            .collect();

        println!(
            "{}",
            TableRenderer::new().render_environments(&environments, current)
        );
        Ok(())
    }
}
