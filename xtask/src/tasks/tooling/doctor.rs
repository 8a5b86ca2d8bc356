use crate::config::BuildConfig;
use anyhow::{bail, Result};
use std::path::Path;

pub fn run(config_path: &Path, target: Option<&str>) -> Result<()> {
    let mut ok = true;

    let config = match crate::tasks::load_config(config_path, target) {
        Ok(config) => {
            if config_path.exists() {
                eprintln!("[OK] config: {}", config_path.display());
            } else {
                eprintln!("[OK] config: built-in defaults ({} not found)", config_path.display());
            }
            config
        }
        Err(e) => {
            eprintln!("[FAIL] config: {e:#}");
            ok = false;
            BuildConfig::default()
        }
    };

    match which::which(&config.tool) {
        Ok(path) => eprintln!("[OK] {} ({})", config.tool, path.display()),
        Err(_) => {
            eprintln!("[FAIL] missing `{}` in PATH", config.tool);
            ok = false;
        }
    }

    log::info!("target: {}", config.target);
    log::info!("projects: {}", config.projects.join(", "));
    log::info!(
        "artifacts: {}",
        config
            .artifacts
            .iter()
            .map(|a| a.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    if !ok {
        bail!("doctor checks failed");
    }
    Ok(())
}
