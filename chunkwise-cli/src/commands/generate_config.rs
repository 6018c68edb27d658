//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        let template = Self::generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration written to {}", self.output.display());
        println!(
            "  Use it with: chunkwise split -c {} -i <FILE>",
            self.output.display()
        );
        Ok(())
    }

    /// Default configuration rendered as TOML
    fn generate_template() -> Result<String> {
        let body = toml::to_string_pretty(&CliConfig::default())
            .context("Failed to serialize default configuration")?;
        Ok(format!("# chunkwise configuration\n\n{body}"))
    }
}
