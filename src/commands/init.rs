use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG};

/// Writes a default configuration file into `dir`.
pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG)?;
    log::info!("Created {}", config_path.display());

    Ok(())
}
