//! Show or persist the effective configuration.

use std::path::Path;

use swipe_common::config::AppConfig;

pub fn run(config: &AppConfig, path: &Path, save: bool) -> anyhow::Result<()> {
    println!("Config file: {}", path.display());
    if !path.exists() {
        println!("  (not found, using defaults)");
    }
    println!();
    println!("{}", serde_json::to_string_pretty(config)?);

    if save {
        config
            .save_to(path)
            .map_err(|e| anyhow::anyhow!("Failed to save config: {e}"))?;
        println!();
        println!("Saved to: {}", path.display());
    }

    Ok(())
}
