//! addressbook init command

use anyhow::bail;
use clap::Args;
use shared::AddressBookConfig;
use std::path::{Path, PathBuf};
use tracing::info;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to write config.json into
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Overwrite an existing config.json
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let path = write_default_config(&self.directory, self.force)?;
        println!("✓ Wrote default configuration to {}", path.display());
        Ok(())
    }
}

/// Write the default configuration into `directory`, returning the file path
pub fn write_default_config(directory: &Path, force: bool) -> anyhow::Result<PathBuf> {
    let path = directory.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        bail!(
            "{} already exists; use --force to overwrite it",
            path.display()
        );
    }

    std::fs::create_dir_all(directory)?;
    std::fs::write(&path, AddressBookConfig::default().to_json_pretty()?)?;
    info!(path = %path.display(), "Initialized configuration");
    Ok(path)
}
