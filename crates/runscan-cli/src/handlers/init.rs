use crate::presentation::Console;
use anyhow::{Context, Result};
use runscan_runtime::Config;
use std::path::Path;

pub fn handle(data_dir: &Path, force: bool, console: &Console) -> Result<()> {
    let config_path = Config::path_in(data_dir);

    if config_path.exists() && !force {
        console.warn(format!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        ));
        return Ok(());
    }

    Config::default()
        .save_to(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    console.info(format!("Wrote default config to {}", config_path.display()));
    Ok(())
}
