use std::path::Path;

use anyhow::{Result, bail};

use crate::config::Config;

pub fn handle(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
