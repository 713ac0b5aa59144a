//! config subcommand handler.

use std::path::Path;

use anyhow::{bail, Result};
use clap::Args;

use super::Outcome;
use crate::config::{ScanConfig, CONFIG_FILE};

/// Arguments for config subcommand
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write a default config file instead of printing the effective one
    #[arg(long)]
    pub init: bool,
}

/// Print the effective config, or write defaults with `--init`.
pub fn run(args: &ConfigArgs, config: &ScanConfig, path: Option<&Path>) -> Result<Outcome> {
    if args.init {
        let path = path.unwrap_or(Path::new(CONFIG_FILE));
        if path.exists() {
            bail!("{} already exists", path.display());
        }
        ScanConfig::default().save(path)?;
        println!("Wrote {}", path.display());
    } else {
        print!("{}", config.to_toml()?);
    }
    Ok(Outcome::Success)
}
